// WHY: Tokens that look like acronyms but must never be reported
// Built fresh for every scan from stop words, all-caps titles and hyphen prefixes

use regex_automata::meta::Regex;
use std::collections::HashSet;

/// Stop words and single letters that are never abbreviations
pub const STOP_WORDS: &[&str] = &[
    "ACRONYM", "AND", "FOR", "THE", "OF", "IN", "TO",
    "A", "B", "C", "D", "E", "F", "G", "H", "I", "J", "K", "L", "M",
    "N", "O", "P", "Q", "R", "S", "T", "U", "V", "W", "X", "Y", "Z",
];

/// Per-scan exclusion set
#[derive(Debug, Clone)]
pub struct ExclusionSet {
    stop_words: HashSet<&'static str>,
    dynamic: HashSet<String>,
}

impl ExclusionSet {
    pub fn new() -> Self {
        Self {
            stop_words: STOP_WORDS.iter().copied().collect(),
            dynamic: HashSet::new(),
        }
    }

    pub fn insert(&mut self, token: &str) {
        if !self.dynamic.contains(token) {
            self.dynamic.insert(token.to_string());
        }
    }

    pub fn contains(&self, token: &str) -> bool {
        self.stop_words.contains(token) || self.dynamic.contains(token)
    }

    /// Exclude every word of every run of three or more all-caps words
    /// Returns the number of title runs found
    pub fn exclude_titles(&mut self, text: &str, title_pattern: &Regex) -> usize {
        let mut runs = 0;
        for mat in title_pattern.find_iter(text) {
            runs += 1;
            for word in text[mat.range()].split_whitespace() {
                if word.chars().count() > 1 {
                    self.insert(word);
                }
            }
        }
        runs
    }

    /// Number of scan-specific exclusions (stop words not counted)
    pub fn dynamic_len(&self) -> usize {
        self.dynamic.len()
    }
}

impl Default for ExclusionSet {
    fn default() -> Self {
        Self::new()
    }
}
