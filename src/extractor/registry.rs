// WHY: Session-scoped memory of abbreviations shared by a document scan and its table scans
// Later fragments of the same pass see everything learned earlier in that pass

use std::collections::{BTreeSet, HashMap};
use tracing::debug;

use super::{CandidateSource, Occurrence};

/// Known abbreviations plus the definitions attached to them
///
/// Two pieces of state with different lifetimes:
/// - `known`: abbreviations pre-matched in every scan. Cleared by [`reset`](Self::reset).
/// - `definitions`: seeded definitions consulted during resolution. Survives resets.
#[derive(Debug, Clone, Default)]
pub struct KnownTermRegistry {
    known: BTreeSet<String>,
    definitions: HashMap<String, String>,
}

impl KnownTermRegistry {
    /// Empty registry with no seed terms
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry seeded with the built-in health-economics dictionary
    pub fn with_builtin_seed() -> Self {
        let mut registry = Self::new();
        registry.seed(
            super::dictionary::HEALTH_ECONOMICS_TERMS
                .iter()
                .map(|(abbr, def)| (*abbr, *def)),
        );
        registry
    }

    /// Load dictionary entries, marking each abbreviation known
    /// Existing definitions are kept: seeding never overwrites
    pub fn seed<I, K, V>(&mut self, dictionary: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut added = 0usize;
        for (abbr, definition) in dictionary {
            let abbr = abbr.into();
            if abbr.is_empty() {
                continue;
            }
            self.known.insert(abbr.clone());
            self.definitions.entry(abbr).or_insert_with(|| {
                added += 1;
                definition.into()
            });
        }
        debug!("Seeded {} definitions ({} total)", added, self.definitions.len());
    }

    /// Forget every known abbreviation, seed terms included
    pub fn reset(&mut self) {
        debug!("Resetting {} known abbreviations", self.known.len());
        self.known.clear();
    }

    /// Mark an abbreviation as known for subsequent pre-matching
    pub fn learn(&mut self, abbr: &str) {
        if !abbr.is_empty() && !self.known.contains(abbr) {
            self.known.insert(abbr.to_string());
        }
    }

    pub fn lookup(&self, abbr: &str) -> Option<&str> {
        self.definitions.get(abbr).map(String::as_str)
    }

    pub fn is_known(&self, abbr: &str) -> bool {
        self.known.contains(abbr)
    }

    pub fn known_count(&self) -> usize {
        self.known.len()
    }

    pub fn definition_count(&self) -> usize {
        self.definitions.len()
    }

    /// Whole-word occurrences of every known abbreviation in `text`
    pub fn prematch(&self, text: &str) -> Vec<Occurrence> {
        let mut occurrences = Vec::new();
        for known in &self.known {
            for start in find_whole_word(text, known) {
                occurrences.push(Occurrence::new(known.clone(), start, start + known.len(), CandidateSource::Known));
            }
        }
        debug!("Pre-matched {} known occurrences", occurrences.len());
        occurrences
    }
}

/// Byte offsets of non-overlapping matches of `needle` bounded by word boundaries on both ends
/// WHY: Same boundary rule as `\b`: a boundary exists where word-ness changes
pub fn find_whole_word(haystack: &str, needle: &str) -> Vec<usize> {
    if needle.is_empty() {
        return Vec::new();
    }

    let first = needle.chars().next().map(is_word_char);
    let last = needle.chars().next_back().map(is_word_char);

    haystack
        .match_indices(needle)
        .filter(|(start, _)| {
            let before = haystack[..*start].chars().next_back().map(is_word_char);
            let after = haystack[start + needle.len()..].chars().next().map(is_word_char);
            before.unwrap_or(false) != first.unwrap_or(false)
                && last.unwrap_or(false) != after.unwrap_or(false)
        })
        .map(|(start, _)| start)
        .collect()
}

fn is_word_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_'
}
