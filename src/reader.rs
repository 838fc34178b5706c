use anyhow::Result;
use std::path::Path;
use tokio::fs::File;
use tokio::io::{AsyncReadExt, BufReader};
use tracing::{debug, info, warn};

use crate::tables::TableFragment;

/// Configuration for input reading behavior
#[derive(Debug, Clone)]
pub struct ReaderConfig {
    /// Whether to fail on the first unreadable input or report it and continue
    pub fail_fast: bool,
    /// Buffer size for async reading (default: 8KB)
    pub buffer_size: usize,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        Self {
            fail_fast: false,
            buffer_size: 8192, // WHY: 8KB is optimal for most filesystems and network storage
        }
    }
}

/// Statistics for one input read
#[derive(Debug, Clone)]
pub struct ReadStats {
    pub file_path: String,
    pub lines_read: u64,
    pub bytes_read: u64,
    pub duration_ms: u64,
    pub read_error: Option<String>,
}

impl ReadStats {
    fn failed(path: &Path, duration_ms: u64, error: String) -> Self {
        Self {
            file_path: path.display().to_string(),
            lines_read: 0,
            bytes_read: 0,
            duration_ms,
            read_error: Some(error),
        }
    }
}

/// Async reader for document and table inputs
/// Text is kept whole: line breaks carry table row structure and offsets must match the file
pub struct InputReader {
    config: ReaderConfig,
}

impl InputReader {
    pub fn new(config: ReaderConfig) -> Self {
        Self { config }
    }

    /// Read the full text of `file_path` with buffered async I/O
    /// Without fail_fast an unreadable file yields empty text and the error in the stats
    pub async fn read_text<P: AsRef<Path>>(&self, file_path: P) -> Result<(String, ReadStats)> {
        let path = file_path.as_ref();
        let start_time = std::time::Instant::now();

        debug!("Starting async read of input: {}", path.display());

        // WHY: early validation prevents partial processing and provides clear error context
        let file = match File::open(path).await {
            Ok(file) => file,
            Err(e) => {
                let error_msg = format!("Failed to open file {}: {}", path.display(), e);
                return self.handle_failure(path, start_time, error_msg);
            }
        };

        let mut reader = BufReader::with_capacity(self.config.buffer_size, file);
        let mut text = String::new();
        if let Err(e) = reader.read_to_string(&mut text).await {
            let error_msg = format!("UTF-8 decoding error in {}: {}", path.display(), e);
            return self.handle_failure(path, start_time, error_msg);
        }

        let stats = ReadStats {
            file_path: path.display().to_string(),
            lines_read: text.lines().count() as u64,
            bytes_read: text.len() as u64,
            duration_ms: start_time.elapsed().as_millis() as u64,
            read_error: None,
        };

        info!(
            "Successfully read {}: {} lines, {} bytes in {}ms",
            path.display(),
            stats.lines_read,
            stats.bytes_read,
            stats.duration_ms
        );
        Ok((text, stats))
    }

    /// Read a table file; the paragraph after the table is the text following its first blank line
    pub async fn read_table<P: AsRef<Path>>(&self, file_path: P) -> Result<(TableFragment, ReadStats)> {
        let (text, stats) = self.read_text(file_path).await?;
        Ok((split_table_text(&text), stats))
    }

    fn handle_failure<T: Default>(
        &self,
        path: &Path,
        start_time: std::time::Instant,
        error_msg: String,
    ) -> Result<(T, ReadStats)> {
        warn!("{}", error_msg);
        if self.config.fail_fast {
            return Err(anyhow::anyhow!(error_msg));
        }
        let stats = ReadStats::failed(path, start_time.elapsed().as_millis() as u64, error_msg);
        Ok((T::default(), stats))
    }
}

/// Separate table rows from an optional trailing paragraph (split at the first blank line)
pub fn split_table_text(text: &str) -> TableFragment {
    let normalized = text.replace("\r\n", "\n");
    match normalized.split_once("\n\n") {
        Some((rows, rest)) if !rest.trim().is_empty() => {
            let paragraph = rest.trim_start_matches('\n').lines().next().unwrap_or_default();
            TableFragment::from_text(rows).with_following_paragraph(paragraph)
        }
        Some((rows, _)) => TableFragment::from_text(rows),
        None => TableFragment::from_text(normalized),
    }
}

/// Convenience function for reading a single input with default configuration
pub async fn read_text_async<P: AsRef<Path>>(file_path: P) -> Result<String> {
    let reader = InputReader::new(ReaderConfig {
        fail_fast: true,
        ..Default::default()
    });
    let (text, _stats) = reader.read_text(file_path).await?;
    Ok(text)
}
