use thiserror::Error;

#[derive(Debug, Error)]
pub enum AnnotateError {
    #[error("malformed annotation at line {line}: {reason}")]
    Malformed { line: usize, reason: String },

    #[error("invalid annotation JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("annotator I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("annotator exited with status {status:?}: {stderr}")]
    CommandFailed { status: Option<i32>, stderr: String },

    #[error("annotator output is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    #[error("no annotation available for query '{0}'")]
    UnknownQuery(String),
}

impl AnnotateError {
    pub(crate) fn malformed(line: usize, reason: impl Into<String>) -> Self {
        AnnotateError::Malformed { line, reason: reason.into() }
    }
}
