use clap::Parser;
use std::fs;
use std::path::PathBuf;
use rewrite_protocol::Lexicon;
use rewrite_engine::to_archive_bytes;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about = "Compiles a JSON rewrite lexicon to an rkyv binary")]
struct Cli {
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,

    #[arg(short, long, value_name = "FILE")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    info!("Reading JSON from {}", cli.input.display());
    let input_data = fs::read_to_string(&cli.input)?;
    let lexicon: Lexicon = serde_json::from_str(&input_data)?;

    info!(
        "Compiling lexicon version {} with {} synonym triggers and {} wh-words",
        lexicon.version,
        lexicon.synonyms.len(),
        lexicon.categories.len()
    );
    let bytes = to_archive_bytes(&lexicon)?;

    fs::write(&cli.output, &bytes)?;

    info!("Wrote {} bytes to {}", bytes.len(), cli.output.display());
    Ok(())
}
