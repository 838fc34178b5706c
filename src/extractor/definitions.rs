// WHY: Ordered cascade of heuristics turning abbreviations into definitions
// Inferred guesses fill empty slots; definitions written out by the author overwrite them

use anyhow::{Context, Result};
use regex_automata::meta::Regex;
use std::collections::{BTreeMap, BTreeSet, HashMap};
use tracing::{debug, warn};

use super::formatter::capitalize_first_into;
use super::registry::KnownTermRegistry;

/// Connector words ignored when reading initials off a phrase
pub const CONNECTOR_WORDS: &[&str] = &[
    "and", "or", "the", "of", "for", "in", "on", "by", "to", "with", "a", "an",
];

const SECTION_PATTERN: &str = r"Abbreviations:([^.]+)";
const SECTION_PAIR_PATTERN: &str = r"^\s*([A-Z0-9-]+)\s*(?:,|=|:)\s*(.+)$";
const EQUATION_PATTERN: &str = r#"\b([A-Z][A-Z0-9-]{1,7})\s*(?:=|is|means|:)\s*["']?([^".;:)]+)["']?"#;
const INFORMATION_FOR_USE_PATTERN: &str = r"(?i)information\s+for\s+use\s+\(IFU\)";

/// How a strategy's answer combines with an earlier one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Precedence {
    /// Runs only while the abbreviation is still unresolved
    FirstMatch,
    /// Runs for every abbreviation and replaces any earlier answer
    Overwrite,
}

/// Definition strategies in cascade order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Strategy {
    KnownTerm,
    ParentheticalInitials,
    ParentheticalSubsequence,
    AbbreviationsSection,
    ExplicitEquation,
    InformationForUse,
}

impl Strategy {
    pub const CASCADE: [Strategy; 6] = [
        Strategy::KnownTerm,
        Strategy::ParentheticalInitials,
        Strategy::ParentheticalSubsequence,
        Strategy::AbbreviationsSection,
        Strategy::ExplicitEquation,
        Strategy::InformationForUse,
    ];

    pub fn precedence(self) -> Precedence {
        match self {
            Strategy::KnownTerm | Strategy::ParentheticalInitials | Strategy::ParentheticalSubsequence => {
                Precedence::FirstMatch
            }
            Strategy::AbbreviationsSection | Strategy::ExplicitEquation | Strategy::InformationForUse => {
                Precedence::Overwrite
            }
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::KnownTerm => "known-term",
            Strategy::ParentheticalInitials => "parenthetical-initials",
            Strategy::ParentheticalSubsequence => "parenthetical-subsequence",
            Strategy::AbbreviationsSection => "abbreviations-section",
            Strategy::ExplicitEquation => "explicit-equation",
            Strategy::InformationForUse => "information-for-use",
        }
    }
}

/// Whole-text facts computed once per resolution
struct ResolutionContext<'a> {
    text: &'a str,
    registry: &'a KnownTermRegistry,
    sections: HashMap<String, String>,
    equations: HashMap<String, String>,
}

/// Compiled definition strategies
pub struct DefinitionResolver {
    section: Regex,
    section_pair: Regex,
    equation: Regex,
    information_for_use: Regex,
}

impl DefinitionResolver {
    pub fn new() -> Result<Self> {
        Ok(Self {
            section: Regex::new(SECTION_PATTERN)?,
            section_pair: Regex::new(SECTION_PAIR_PATTERN)?,
            equation: Regex::new(EQUATION_PATTERN)?,
            information_for_use: Regex::new(INFORMATION_FOR_USE_PATTERN)?,
        })
    }

    /// Best-guess definition for every abbreviation, first character capitalized
    /// Unresolved abbreviations map to an empty string
    pub fn resolve(
        &self,
        text: &str,
        abbreviations: &BTreeSet<String>,
        registry: &KnownTermRegistry,
    ) -> BTreeMap<String, String> {
        let context = ResolutionContext {
            text,
            registry,
            sections: self.abbreviation_sections(text),
            equations: self.explicit_equations(text),
        };

        let mut definitions = BTreeMap::new();
        let mut resolved_by: HashMap<&'static str, usize> = HashMap::new();
        let mut buffer = String::new();

        for abbr in abbreviations {
            let mut definition: Option<(Strategy, String)> = None;

            for strategy in Strategy::CASCADE {
                if strategy.precedence() == Precedence::FirstMatch && definition.is_some() {
                    continue;
                }
                match self.apply(strategy, &context, abbr) {
                    Ok(Some(found)) => definition = Some((strategy, found)),
                    Ok(None) => {}
                    Err(e) => warn!("Strategy {} failed for abbreviation {}: {:#}", strategy.name(), abbr, e),
                }
            }

            let value = match definition {
                Some((strategy, found)) => {
                    *resolved_by.entry(strategy.name()).or_insert(0) += 1;
                    capitalize_first_into(&found, &mut buffer);
                    buffer.clone()
                }
                None => String::new(),
            };
            definitions.insert(abbr.clone(), value);
        }

        debug!(?resolved_by, "Resolved definitions for {} abbreviations", abbreviations.len());
        definitions
    }

    fn apply(&self, strategy: Strategy, context: &ResolutionContext<'_>, abbr: &str) -> Result<Option<String>> {
        match strategy {
            Strategy::KnownTerm => Ok(context.registry.lookup(abbr).map(str::to_string)),
            Strategy::ParentheticalInitials => parenthetical_initials(context.text, abbr),
            Strategy::ParentheticalSubsequence => parenthetical_subsequence(context.text, abbr),
            Strategy::AbbreviationsSection => Ok(context.sections.get(abbr).cloned()),
            Strategy::ExplicitEquation => Ok(context.equations.get(abbr).cloned()),
            Strategy::InformationForUse => {
                if abbr == "IFU" && self.information_for_use.is_match(context.text) {
                    Ok(Some("information for use".to_string()))
                } else {
                    Ok(None)
                }
            }
        }
    }

    /// Pairs from every "Abbreviations: X, def; Y = def." section, later pairs winning
    fn abbreviation_sections(&self, text: &str) -> HashMap<String, String> {
        let mut entries = HashMap::new();
        for caps in self.section.captures_iter(text) {
            let Some(body) = caps.get_group(1) else { continue };
            for pair in text[body.range()].trim().split(';') {
                let Some(pair_caps) = self.section_pair.captures_iter(pair).next() else {
                    continue;
                };
                if let (Some(code), Some(rest)) = (pair_caps.get_group(1), pair_caps.get_group(2)) {
                    entries.insert(pair[code.range()].to_string(), pair[rest.range()].trim().to_string());
                }
            }
        }
        entries
    }

    /// "CODE = value" / "CODE is value" / "CODE means value" / "CODE: value", later matches winning
    /// A whitespace-only value still counts and clears the entry ("OS = ;")
    fn explicit_equations(&self, text: &str) -> HashMap<String, String> {
        let mut entries = HashMap::new();
        for caps in self.equation.captures_iter(text) {
            if let (Some(code), Some(value)) = (caps.get_group(1), caps.get_group(2)) {
                entries.insert(text[code.range()].to_string(), text[value.range()].trim().to_string());
            }
        }
        entries
    }
}

/// Pattern for "<phrase>(ABBR)" with the abbreviation matched case-insensitively
fn parenthetical_pattern(phrase: &str, abbr: &str) -> Result<Regex> {
    let pattern = format!(r"({phrase})\((?i:{})\)", regex_syntax::escape(abbr));
    Regex::new(&pattern).with_context(|| format!("invalid parenthetical pattern for {abbr}"))
}

/// Phrase before "(ABBR)" whose word initials spell the abbreviation
pub fn parenthetical_initials(text: &str, abbr: &str) -> Result<Option<String>> {
    let pattern = parenthetical_pattern("[^(]+", abbr)?;
    for caps in pattern.captures_iter(text) {
        let Some(phrase) = caps.get_group(1) else { continue };
        let phrase = text[phrase.range()].trim();
        if initials_match(phrase, abbr) {
            return Ok(Some(phrase.to_string()));
        }
    }
    Ok(None)
}

/// Tightest run of words before "(ABBR)" whose initials contain the abbreviation in order
pub fn parenthetical_subsequence(text: &str, abbr: &str) -> Result<Option<String>> {
    let pattern = parenthetical_pattern("[^(]{3,100}", abbr)?;
    for caps in pattern.captures_iter(text) {
        let Some(phrase) = caps.get_group(1) else { continue };
        let words = split_words(text[phrase.range()].trim());
        if let Some((start, len)) = tightest_span(&words, abbr) {
            return Ok(Some(words[start..start + len].join(" ")));
        }
    }
    Ok(None)
}

/// Split a phrase into words on whitespace and hyphens
pub fn split_words(phrase: &str) -> Vec<&str> {
    phrase
        .split(|c: char| c.is_whitespace() || c == '-')
        .filter(|word| !word.is_empty())
        .collect()
}

/// True when the initials of the non-connector words equal the abbreviation, ignoring case
pub fn initials_match(phrase: &str, abbr: &str) -> bool {
    let initials: String = split_words(phrase)
        .into_iter()
        .filter(|word| !CONNECTOR_WORDS.contains(&word.to_lowercase().as_str()))
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .collect();
    !initials.is_empty() && initials == abbr.to_uppercase()
}

/// (start, length) of the shortest word run consuming every abbreviation letter in order
/// Ties go to the leftmost start
pub fn tightest_span(words: &[&str], abbr: &str) -> Option<(usize, usize)> {
    let letters: Vec<char> = abbr.to_uppercase().chars().collect();
    if letters.is_empty() {
        return None;
    }

    let mut best: Option<(usize, usize)> = None;
    for start in 0..words.len() {
        let mut consumed = 0;
        let mut pos = start;
        while pos < words.len() && consumed < letters.len() {
            if initial_upper(words[pos]) == Some(letters[consumed]) {
                consumed += 1;
            }
            pos += 1;
        }

        if consumed == letters.len() {
            let len = pos - start;
            if best.map_or(true, |(_, best_len)| len < best_len) {
                best = Some((start, len));
            }
        }
    }
    best
}

/// Uppercase first character of a word, when it uppercases to a single char
fn initial_upper(word: &str) -> Option<char> {
    let mut upper = word.chars().next()?.to_uppercase();
    let first = upper.next()?;
    upper.next().is_none().then_some(first)
}
