use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::ValueEnum;
use rewrite_annotate::AnnotationFormat;
use serde::{Deserialize, Serialize};
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    Conll,
    Json,
}

impl From<Format> for AnnotationFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Conll => AnnotationFormat::Conll,
            Format::Json => AnnotationFormat::Json,
        }
    }
}

/// Settings file for the `rewrite` binary. Command-line flags take
/// precedence over every field.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub lexicon: Option<PathBuf>,
    pub conll: Option<PathBuf>,
    pub command: Option<PathBuf>,
    pub args: Vec<String>,
    pub format: Option<Format>,
    pub substitute: bool,
    pub limit: Option<usize>,
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("reading config from {}", path.display()))?;
        serde_json::from_str(&raw).with_context(|| format!("parsing config {}", path.display()))
    }

    /// Defaults when no file is given.
    pub fn from_file(path: Option<&Path>) -> anyhow::Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let config = Self::load(path)?;
        info!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Fields set in `overrides` replace ours; `args` replaces only when
    /// non-empty and `substitute` is or-ed.
    pub fn merge(self, overrides: CliConfig) -> Self {
        Self {
            lexicon: overrides.lexicon.or(self.lexicon),
            conll: overrides.conll.or(self.conll),
            command: overrides.command.or(self.command),
            args: if overrides.args.is_empty() { self.args } else { overrides.args },
            format: overrides.format.or(self.format),
            substitute: overrides.substitute || self.substitute,
            limit: overrides.limit.or(self.limit),
        }
    }

    pub fn annotation_format(&self) -> AnnotationFormat {
        self.format.map(AnnotationFormat::from).unwrap_or_default()
    }
}
