pub mod command;
pub mod conll;
pub mod error;
pub mod fixed;
pub mod json;

use rewrite_protocol::AnnotatedSentence;

pub use command::CommandAnnotator;
pub use conll::{parse_conll, parse_conll_tokens, ConllSentence};
pub use error::AnnotateError;
pub use fixed::FixedAnnotator;
pub use json::parse_json_tokens;

/// Dependency annotation backend. Implementations turn raw text into tagged,
/// dependency-labelled tokens; the rewriter never looks past this boundary.
pub trait Annotator {
    fn annotate(&self, text: &str) -> Result<AnnotatedSentence, AnnotateError>;
}

impl<F> Annotator for F
where
    F: Fn(&str) -> Result<AnnotatedSentence, AnnotateError>,
{
    fn annotate(&self, text: &str) -> Result<AnnotatedSentence, AnnotateError> {
        self(text)
    }
}

/// Wire format of an annotator's output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AnnotationFormat {
    #[default]
    Conll,
    Json,
}

impl AnnotationFormat {
    /// Parses a whole annotator response. Multi-sentence CoNLL output is
    /// flattened into one token sequence.
    pub fn parse(&self, output: &str) -> Result<AnnotatedSentence, AnnotateError> {
        match self {
            AnnotationFormat::Conll => parse_conll_tokens(output),
            AnnotationFormat::Json => parse_json_tokens(output),
        }
    }
}
