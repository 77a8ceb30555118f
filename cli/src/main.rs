//! ownerline: resolve property owner name lines into owner rosters.
//!
//! Usage:
//!   ownerline --input owners.txt
//!   ownerline --format jsonl --config keywords.json < documents.jsonl
//!
//! Writes one JSON record per document to stdout. Logs go to stderr.

use std::{fs, io::Read, path::PathBuf};
use anyhow::{Context, Result};
use clap::Parser;
use ownerline_cli::{InputFormat, read_documents, render, resolve_documents};
use ownerline_parse::{OwnerResolver, ParseConfig};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser, Debug)]
#[command(name = "ownerline")]
#[command(about = "Resolve property owner name lines into owner rosters")]
struct Args {
    /// Input file (defaults to stdin)
    #[arg(short, long)]
    input: Option<PathBuf>,

    /// Path to a JSON config with extra company keywords
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Input layout
    #[arg(short, long, value_enum, default_value = "text")]
    format: InputFormat,

    /// Pretty-print each output record
    #[arg(long)]
    pretty: bool,

    /// Enable verbose debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let log_level = if args.verbose { Level::DEBUG } else { Level::INFO };
    FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let config = match &args.config {
        Some(path) => {
            info!("Loading config from {:?}", path);
            ParseConfig::load(path).with_context(|| format!("Failed to load config {:?}", path))?
        }
        None => ParseConfig::default(),
    };
    let resolver = OwnerResolver::from_config(&config).context("Invalid config")?;

    let input = match &args.input {
        Some(path) => fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?,
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read stdin")?;
            buf
        }
    };

    let documents = read_documents(&input, args.format)?;
    let records = resolve_documents(&resolver, documents);

    let invalid: usize = records.iter().map(|r| r.current.invalid.len()).sum();
    info!("Resolved {} documents ({} invalid segments)", records.len(), invalid);

    print!("{}", render(&records, args.pretty)?);
    Ok(())
}
