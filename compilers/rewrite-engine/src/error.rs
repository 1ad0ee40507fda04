use rewrite_annotate::AnnotateError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RewriteError {
    #[error("annotation failed: {0}")]
    Annotation(#[from] AnnotateError),
}

#[derive(Debug, Error)]
pub enum LexiconError {
    #[error("failed to read lexicon: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid lexicon JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid lexicon archive: {0}")]
    Archive(String),
}
