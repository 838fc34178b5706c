use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

use glossator::extractor::dictionary::{load_seed_file, HEALTH_ECONOMICS_TERMS};
use glossator::output::{render_glossary, write_report, write_stats, InputStats, OutputFormat, RunStats};
use glossator::reader::{InputReader, ReaderConfig};
use glossator::{AbbreviationExtractor, KnownTermRegistry};

#[derive(Parser, Debug)]
#[command(name = "glossator")]
#[command(about = "Extract abbreviations and their definitions from a document and its tables")]
#[command(version)]
struct Args {
    /// Plain-text document to scan
    document: PathBuf,

    /// Table file scanned as a fragment of the same document pass (repeatable)
    #[arg(long = "table")]
    tables: Vec<PathBuf>,

    /// JSON object of abbreviation -> definition seed terms; takes precedence over the built-in dictionary
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Do not load the built-in health-economics dictionary
    #[arg(long)]
    no_builtin_seed: bool,

    /// Glossary output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Tsv)]
    format: OutputFormat,

    /// Write the glossary here instead of stdout
    #[arg(long)]
    out: Option<PathBuf>,

    /// Abort on the first unreadable table
    #[arg(long)]
    fail_fast: bool,

    /// Stats output file path
    #[arg(long)]
    stats_out: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // WHY: structured JSON logging enables observability and debugging in production
    // Logs go to stderr; stdout carries the glossary
    tracing_subscriber::fmt()
        .with_target(false)
        .with_writer(std::io::stderr)
        .json()
        .init();

    let args = Args::parse();

    info!("Starting glossator");
    info!(?args, "Parsed CLI arguments");

    // WHY: validate the document exists early to fail fast with clear error
    if !args.document.is_file() {
        anyhow::bail!("Document does not exist or is not a file: {}", args.document.display());
    }
    if let Some(seed) = &args.seed {
        if !seed.is_file() {
            anyhow::bail!("Seed file does not exist: {}", seed.display());
        }
    }

    // User seed goes in first so its definitions win over the built-in ones
    let mut registry = KnownTermRegistry::new();
    if let Some(seed) = &args.seed {
        registry.seed(load_seed_file(seed).await?);
    }
    if !args.no_builtin_seed {
        registry.seed(HEALTH_ECONOMICS_TERMS.iter().copied());
    }
    let mut extractor = AbbreviationExtractor::with_registry(registry)?;

    // The document itself is mandatory; only table reads honor --fail-fast
    let document_reader = InputReader::new(ReaderConfig {
        fail_fast: true,
        ..Default::default()
    });
    let table_reader = InputReader::new(ReaderConfig {
        fail_fast: args.fail_fast,
        ..Default::default()
    });

    let mut run_stats = RunStats::default();

    let started = Instant::now();
    let (text, _read_stats) = document_reader.read_text(&args.document).await?;
    let glossary = extractor.scan_document(&text);
    run_stats.push(InputStats::success(
        &args.document,
        "document",
        text.len(),
        Some(&glossary),
        started.elapsed().as_millis() as u64,
    ));

    let mut footnotes = Vec::new();
    for table_path in &args.tables {
        let started = Instant::now();
        let (table, read_stats) = table_reader.read_table(table_path).await?;
        if let Some(error) = read_stats.read_error {
            warn!("Skipping unreadable table {}: {}", table_path.display(), error);
            run_stats.push(InputStats::failed(table_path, "table", error));
            continue;
        }

        let table_glossary = extractor.scan_table(&table);
        if let Some(table_glossary) = &table_glossary {
            footnotes.push(table_glossary.to_footnote());
        }
        run_stats.push(InputStats::success(
            table_path,
            "table",
            table.text().len(),
            table_glossary.as_ref(),
            started.elapsed().as_millis() as u64,
        ));
    }

    let rendered = render_glossary(&glossary, args.format)?;
    match &args.out {
        Some(out) => {
            write_report(out, &rendered, &footnotes).await?;
            info!("Glossary written to {}", out.display());
        }
        None => {
            print!("{rendered}");
            for footnote in &footnotes {
                println!("{footnote}");
            }
        }
    }

    if let Some(stats_out) = &args.stats_out {
        write_stats(stats_out, &run_stats).await?;
        info!("Run statistics written to {}", stats_out.display());
    }

    info!(
        "Completed: {} abbreviations ({} defined), {} table footnotes",
        glossary.len(),
        glossary.resolved_count(),
        footnotes.len()
    );
    Ok(())
}
