//! loldle-export CLI
//!
//! Reads a saved LoLdle page and writes `loldle_data.csv`.

use anyhow::Context;
use clap::Parser;
use loldle_export::dom::parse_html;
use loldle_export::{export, FileSink, SelectorSet, WriterSink};
use std::io::Read;
use std::path::{Path, PathBuf};

/// Export the LoLdle classic answers board to CSV
#[derive(Parser, Debug)]
#[command(name = "loldle-export")]
#[command(version)]
#[command(about = "Export the LoLdle classic answers board to CSV")]
struct Args {
    /// Saved page HTML, or `-` for stdin
    #[arg(default_value = "-")]
    input: PathBuf,

    /// Directory to write loldle_data.csv into
    #[arg(short, long, default_value = ".")]
    out_dir: PathBuf,

    /// Write the CSV to stdout instead of a file
    #[arg(long, conflicts_with = "out_dir")]
    stdout: bool,

    /// JSON selector set overriding the built-in page layout
    #[arg(short, long)]
    selectors: Option<PathBuf>,

    /// Print the export report as JSON on stderr
    #[arg(long)]
    report: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut html = String::new();
        std::io::stdin()
            .read_to_string(&mut html)
            .context("Failed to read page from stdin")?;
        return Ok(html);
    }
    std::fs::read_to_string(path).with_context(|| format!("Failed to read {}", path.display()))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // Initialize tracing; stdout may carry the CSV
    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let selectors = match &args.selectors {
        Some(path) => SelectorSet::from_json_file(path)?,
        None => SelectorSet::default(),
    };

    let html = read_input(&args.input)?;
    let root = parse_html(&html);

    let report = if args.stdout {
        let mut sink = WriterSink::new(std::io::stdout().lock(), "stdout");
        export(&root, &selectors, &mut sink)?
    } else {
        export(&root, &selectors, &mut FileSink::new(&args.out_dir))?
    };

    if args.report {
        eprintln!("{}", serde_json::to_string_pretty(&report)?);
    }
    Ok(())
}
