// WHY: Sink side of the pipeline: renderings of a glossary plus per-input run statistics
// Kept out of the extractor so the core never assumes where or how results are shown

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::io::{AsyncWriteExt, BufWriter};

use crate::extractor::Glossary;

/// Rendering of the document glossary
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Tab-separated table with a header row
    Tsv,
    /// JSON object keyed by abbreviation
    Json,
}

/// Per-input processing statistics
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct InputStats {
    /// Input path as given on the command line
    pub path: String,
    /// "document" or "table"
    pub kind: String,
    pub bytes_processed: u64,
    pub abbreviations_found: u64,
    pub definitions_resolved: u64,
    pub processing_time_ms: u64,
    /// Processing status (success, skipped, failed)
    pub status: String,
    pub error: Option<String>,
}

impl InputStats {
    pub fn success(path: &Path, kind: &str, bytes: usize, glossary: Option<&Glossary>, elapsed_ms: u64) -> Self {
        Self {
            path: path.display().to_string(),
            kind: kind.to_string(),
            bytes_processed: bytes as u64,
            abbreviations_found: glossary.map_or(0, |g| g.len() as u64),
            definitions_resolved: glossary.map_or(0, |g| g.resolved_count() as u64),
            processing_time_ms: elapsed_ms,
            status: if glossary.is_some() { "success" } else { "skipped" }.to_string(),
            error: None,
        }
    }

    pub fn failed(path: &Path, kind: &str, error: String) -> Self {
        Self {
            path: path.display().to_string(),
            kind: kind.to_string(),
            bytes_processed: 0,
            abbreviations_found: 0,
            definitions_resolved: 0,
            processing_time_ms: 0,
            status: "failed".to_string(),
            error: Some(error),
        }
    }
}

/// Summary written to the stats file
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
pub struct RunStats {
    pub inputs: Vec<InputStats>,
    pub total_abbreviations: u64,
    pub total_time_ms: u64,
}

impl RunStats {
    pub fn push(&mut self, stats: InputStats) {
        self.total_abbreviations += stats.abbreviations_found;
        self.total_time_ms += stats.processing_time_ms;
        self.inputs.push(stats);
    }
}

/// Render the glossary in the requested format
pub fn render_glossary(glossary: &Glossary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Tsv => {
            let mut out = String::new();
            for [abbr, definition] in glossary.table_rows() {
                out.push_str(&abbr);
                out.push('\t');
                out.push_str(&definition);
                out.push('\n');
            }
            Ok(out)
        }
        OutputFormat::Json => Ok(serde_json::to_string_pretty(glossary)? + "\n"),
    }
}

/// Write rendered glossary plus table footnotes to `path`
pub async fn write_report(path: &Path, rendered: &str, footnotes: &[String]) -> Result<()> {
    let file = tokio::fs::File::create(path).await?;
    let mut writer = BufWriter::new(file);

    writer.write_all(rendered.as_bytes()).await?;
    for footnote in footnotes {
        writer.write_all(footnote.as_bytes()).await?;
        writer.write_all(b"\n").await?;
    }

    writer.flush().await?;
    Ok(())
}

/// Write run statistics as pretty JSON
pub async fn write_stats(path: &Path, stats: &RunStats) -> Result<()> {
    let content = serde_json::to_string_pretty(stats)?;
    tokio::fs::write(path, content).await?;
    Ok(())
}
