use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use rewrite_protocol::AnnotatedSentence;
use tracing::debug;

use crate::error::AnnotateError;
use crate::{AnnotationFormat, Annotator};

/// Runs an external NLP program once per query. The query is written to the
/// program's stdin followed by a newline; its stdout must hold the
/// annotation in `format`.
#[derive(Debug, Clone)]
pub struct CommandAnnotator {
    program: PathBuf,
    args: Vec<String>,
    format: AnnotationFormat,
}

impl CommandAnnotator {
    pub fn new(program: impl Into<PathBuf>, format: AnnotationFormat) -> Self {
        Self { program: program.into(), args: Vec::new(), format }
    }

    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }
}

impl Annotator for CommandAnnotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedSentence, AnnotateError> {
        debug!(program = %self.program.display(), "spawning annotator");

        let mut child = Command::new(&self.program)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            let written = stdin
                .write_all(text.as_bytes())
                .and_then(|_| stdin.write_all(b"\n"));
            match written {
                Ok(()) => {}
                // Programs that ignore stdin are judged by their exit status
                Err(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {}
                Err(e) => return Err(e.into()),
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            return Err(AnnotateError::CommandFailed {
                status: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let stdout = String::from_utf8(output.stdout)?;
        self.format.parse(&stdout)
    }
}
