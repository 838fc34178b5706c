// WHY: Main extractor interface tying scanner, overlap resolution, registry and definitions together
// One instance owns one registry; a document pass is a document scan followed by its table scans

use anyhow::Result;
use std::collections::{BTreeMap, BTreeSet};
use tracing::{debug, info};

pub mod definitions;
pub mod dictionary;
pub mod exclusions;
pub mod formatter;
pub mod overlap;
pub mod patterns;
pub mod registry;

// Re-export core types
pub use definitions::{DefinitionResolver, Precedence, Strategy};
pub use exclusions::ExclusionSet;
pub use formatter::{capitalize_first, Glossary};
pub use overlap::resolve_overlaps;
pub use patterns::CandidateScanner;
pub use registry::KnownTermRegistry;

use crate::tables::TableFragment;

/// Pattern family (or registry) that produced a candidate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CandidateSource {
    Known,
    Hyphenated,
    Acronym,
    MixedCase,
    Initialism,
    Alphanumeric,
}

/// One appearance of a candidate abbreviation
/// `start..end` is the byte span of the raw match; a plural keeps its full span under the singular label
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub abbreviation: String,
    pub start: usize,
    pub end: usize,
    pub source: CandidateSource,
}

impl Occurrence {
    pub fn new(abbreviation: impl Into<String>, start: usize, end: usize, source: CandidateSource) -> Self {
        Self {
            abbreviation: abbreviation.into(),
            start,
            end,
            source,
        }
    }

    /// True when `other`'s span lies entirely inside this one
    pub fn contains(&self, other: &Occurrence) -> bool {
        self.start <= other.start && other.end <= self.end
    }
}

/// Per-scan options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScanOptions {
    /// Text is a bounded region (table) rather than a whole document
    pub is_fragment: bool,
    /// Fragment starts with a header row; disables title exclusion
    pub has_header: bool,
    /// Pre-match registry terms and learn the results
    pub use_known: bool,
}

impl ScanOptions {
    pub fn document() -> Self {
        Self {
            is_fragment: false,
            has_header: false,
            use_known: true,
        }
    }

    pub fn fragment(has_header: bool) -> Self {
        Self {
            is_fragment: true,
            has_header,
            use_known: true,
        }
    }
}

impl Default for ScanOptions {
    fn default() -> Self {
        Self::document()
    }
}

/// Abbreviation extractor with its session-scoped registry
pub struct AbbreviationExtractor {
    scanner: CandidateScanner,
    resolver: DefinitionResolver,
    registry: KnownTermRegistry,
}

impl AbbreviationExtractor {
    /// Create extractor seeded with the built-in dictionary
    pub fn new() -> Result<Self> {
        Self::with_registry(KnownTermRegistry::with_builtin_seed())
    }

    /// Create extractor around a caller-prepared registry
    pub fn with_registry(registry: KnownTermRegistry) -> Result<Self> {
        info!(
            "Compiling abbreviation patterns ({} seeded definitions)",
            registry.definition_count()
        );
        Ok(Self {
            scanner: CandidateScanner::new()?,
            resolver: DefinitionResolver::new()?,
            registry,
        })
    }

    pub fn registry(&self) -> &KnownTermRegistry {
        &self.registry
    }

    pub fn registry_mut(&mut self) -> &mut KnownTermRegistry {
        &mut self.registry
    }

    /// Final overlap-filtered abbreviation set of `text`, sorted ascending
    /// Learns the result into the registry when `options.use_known` is set
    pub fn extract_candidates(&mut self, text: &str, options: &ScanOptions) -> BTreeSet<String> {
        let seeded = if options.use_known {
            self.registry.prematch(text)
        } else {
            Vec::new()
        };

        let scan = self.scanner.scan(text, options, seeded);
        let abbreviations = resolve_overlaps(&scan.occurrences);
        debug!(
            "Overlap resolution kept {} abbreviations from {} occurrences",
            abbreviations.len(),
            scan.occurrences.len()
        );

        if options.use_known {
            for abbr in &abbreviations {
                self.registry.learn(abbr);
            }
        }
        abbreviations
    }

    /// Capitalized definition per abbreviation, empty when unresolved
    pub fn resolve_definitions(&self, text: &str, abbreviations: &BTreeSet<String>) -> BTreeMap<String, String> {
        self.resolver.resolve(text, abbreviations, &self.registry)
    }

    /// Scan `text` with `options` and resolve definitions against the same text
    pub fn scan(&mut self, text: &str, options: &ScanOptions) -> Glossary {
        let abbreviations = self.extract_candidates(text, options);
        let glossary = Glossary::new(self.resolve_definitions(text, &abbreviations));
        info!(
            "Found {} abbreviations ({} with definitions) in {} bytes",
            glossary.len(),
            glossary.resolved_count(),
            text.len()
        );
        glossary
    }

    /// Start a new document pass: forget earlier passes, then scan the whole document
    pub fn scan_document(&mut self, text: &str) -> Glossary {
        self.registry.reset();
        self.scan(text, &ScanOptions::document())
    }

    /// Scan a table of the current pass
    /// Returns `None` for skipped tables and tables without abbreviations
    pub fn scan_table(&mut self, table: &TableFragment) -> Option<Glossary> {
        if let Some(reason) = table.skip_reason() {
            debug!("Skipping table: {}", reason);
            return None;
        }

        let glossary = self.scan(table.text(), &ScanOptions::fragment(table.has_header_row()));
        (!glossary.is_empty()).then_some(glossary)
    }
}
