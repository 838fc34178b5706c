pub mod extractor;
pub mod output;
pub mod reader;
pub mod tables;

// Re-export main types for convenient access
pub use extractor::{
    AbbreviationExtractor, CandidateSource, Glossary, KnownTermRegistry, Occurrence, ScanOptions,
};

// Re-export I/O helpers used by the CLI and integration tests
pub use output::{render_glossary, InputStats, OutputFormat, RunStats};
pub use reader::{read_text_async, InputReader, ReaderConfig, ReadStats};
pub use tables::TableFragment;
