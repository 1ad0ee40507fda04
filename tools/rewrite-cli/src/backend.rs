use std::fs;

use anyhow::{bail, Context};
use rewrite_annotate::{AnnotateError, Annotator, CommandAnnotator, FixedAnnotator};
use rewrite_protocol::AnnotatedSentence;

use crate::config::CliConfig;

/// Annotator selected at startup from the configuration.
pub enum Backend {
    Fixed(FixedAnnotator),
    Command(CommandAnnotator),
}

impl Backend {
    pub fn from_config(config: &CliConfig) -> anyhow::Result<Self> {
        if let Some(path) = &config.conll {
            let raw = fs::read_to_string(path)
                .with_context(|| format!("reading annotations from {}", path.display()))?;
            let fixed = FixedAnnotator::from_conll(&raw)?;
            tracing::info!(sentences = fixed.len(), "using pre-annotated sentences");
            return Ok(Backend::Fixed(fixed));
        }

        if let Some(program) = &config.command {
            tracing::info!(program = %program.display(), "using external annotator");
            let annotator = CommandAnnotator::new(program, config.annotation_format())
                .args(config.args.iter().cloned());
            return Ok(Backend::Command(annotator));
        }

        bail!("no annotator configured: pass --conll <FILE> or --command <PROGRAM>")
    }
}

impl Annotator for Backend {
    fn annotate(&self, text: &str) -> Result<AnnotatedSentence, AnnotateError> {
        match self {
            Backend::Fixed(annotator) => annotator.annotate(text),
            Backend::Command(annotator) => annotator.annotate(text),
        }
    }
}
