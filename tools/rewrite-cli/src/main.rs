mod backend;
mod config;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::Parser;
use rewrite_engine::{load_lexicon, QuestionComponents, Reformulator};
use rewrite_protocol::Lexicon;
use serde::Serialize;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use backend::Backend;
use config::{CliConfig, Format};

#[derive(Parser)]
#[command(author, version, about = "Rewrites questions into keyword search queries")]
struct Cli {
    /// Question to rewrite. Reads one question per line from stdin when omitted.
    query: Vec<String>,

    /// JSON settings file; flags override its values
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Lexicon as JSON or compiled rkyv archive
    #[arg(short, long, value_name = "FILE")]
    lexicon: Option<PathBuf>,

    /// Pre-annotated sentences in CoNLL-U, keyed by their `# text` comment
    #[arg(long, value_name = "FILE", conflicts_with = "command")]
    conll: Option<PathBuf>,

    /// External annotator program; receives the query on stdin
    #[arg(long, value_name = "PROGRAM")]
    command: Option<PathBuf>,

    /// Argument passed to the annotator program (repeatable)
    #[arg(long = "arg", value_name = "ARG", allow_hyphen_values = true)]
    args: Vec<String>,

    /// Output format of the annotator program
    #[arg(long, value_enum)]
    format: Option<Format>,

    /// Run the synonym substitution pass
    #[arg(short, long)]
    substitute: bool,

    /// Maximum candidates kept by the substitution pass
    #[arg(long, value_name = "N")]
    limit: Option<usize>,

    /// Print the extracted components instead of the rewrites
    #[arg(long)]
    components: bool,
}

impl Cli {
    fn overrides(&self) -> CliConfig {
        CliConfig {
            lexicon: self.lexicon.clone(),
            conll: self.conll.clone(),
            command: self.command.clone(),
            args: self.args.clone(),
            format: self.format,
            substitute: self.substitute,
            limit: self.limit,
        }
    }
}

#[derive(Serialize)]
struct ComponentsReport<'a> {
    query: &'a str,
    wh_word: &'a str,
    root_verb: &'a str,
    subject: &'a str,
    objects: &'a [String],
    modifiers: &'a [String],
}

impl<'a> ComponentsReport<'a> {
    fn new(query: &'a str, comp: &'a QuestionComponents) -> Self {
        Self {
            query,
            wh_word: &comp.wh_word,
            root_verb: &comp.root_verb,
            subject: &comp.subject,
            objects: &comp.objects,
            modifiers: &comp.modifiers,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let config = CliConfig::from_file(cli.config.as_deref())?.merge(cli.overrides());
    debug!(?config, "effective configuration");

    let lexicon = match &config.lexicon {
        Some(path) => load_lexicon(path)?,
        None => Lexicon::builtin(),
    };

    let backend = Backend::from_config(&config)?;
    let mut engine = Reformulator::with_lexicon(backend, &lexicon);
    if let Some(limit) = config.limit {
        engine = engine.with_substitution_limit(limit);
    }
    info!(
        synonyms = engine.synonyms().len(),
        wh_words = engine.wh_categories().len(),
        limit = engine.substitution_limit(),
        "rewrite engine ready"
    );
    if config.substitute && engine.synonyms().is_empty() {
        warn!("substitution requested but the lexicon has no synonyms");
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.query.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            run_one(&engine, &line, &config, cli.components, &mut out)?;
        }
    } else {
        let query = cli.query.join(" ");
        run_one(&engine, &query, &config, cli.components, &mut out)?;
    }

    Ok(())
}

fn run_one(
    engine: &Reformulator<Backend>,
    query: &str,
    config: &CliConfig,
    components: bool,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    if components {
        let comp = engine.components(query)?;
        serde_json::to_writer(&mut *out, &ComponentsReport::new(query, &comp))?;
    } else {
        let rewrites = if config.substitute {
            engine.reformulate_with_substitutions(query)?
        } else {
            engine.reformulate(query)?
        };
        serde_json::to_writer(&mut *out, &rewrites)?;
    }
    writeln!(out)?;
    Ok(())
}
