// WHY: Final presentation of resolved definitions
// Separates capitalization and ordering from resolution so sinks receive one stable shape

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Capitalize the first character, leaving the rest of the string untouched
pub fn capitalize_first(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    capitalize_first_into(text, &mut result);
    result
}

/// Capitalize into supplied buffer to avoid allocation
pub fn capitalize_first_into(text: &str, buffer: &mut String) {
    buffer.clear();
    buffer.reserve(text.len());

    let mut chars = text.chars();
    if let Some(first) = chars.next() {
        buffer.extend(first.to_uppercase());
        buffer.push_str(chars.as_str());
    }
}

/// Collapse every whitespace run (line breaks and tabs included) to one space
pub fn single_line(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Sorted abbreviation -> definition mapping produced by one scan
///
/// Keys are exactly the final abbreviation set. Unresolved abbreviations map to "".
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Glossary {
    entries: BTreeMap<String, String>,
}

impl Glossary {
    pub fn new(entries: BTreeMap<String, String>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn definition(&self, abbr: &str) -> Option<&str> {
        self.entries.get(abbr).map(String::as_str)
    }

    /// Abbreviations in ascending order
    pub fn abbreviations(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(abbr, def)| (abbr.as_str(), def.as_str()))
    }

    /// Number of abbreviations with a non-empty definition
    pub fn resolved_count(&self) -> usize {
        self.entries.values().filter(|def| !def.is_empty()).count()
    }

    /// Two-column table: header row then one row per abbreviation
    /// Cells are single-line; definitions wrapped in the source text are flattened
    pub fn table_rows(&self) -> Vec<[String; 2]> {
        let mut rows = Vec::with_capacity(self.entries.len() + 1);
        rows.push(["Abbreviation".to_string(), "Definition".to_string()]);
        rows.extend(self.iter().map(|(abbr, def)| [abbr.to_string(), single_line(def)]));
        rows
    }

    /// Single-line footnote placed under a table
    pub fn to_footnote(&self) -> String {
        let pairs: Vec<String> = self
            .iter()
            .map(|(abbr, def)| format!("{abbr} - {}", single_line(def)))
            .collect();
        format!("Abbreviations: {}", pairs.join("; "))
    }
}
