// WHY: Compositional pattern families for candidate abbreviations
// Each family is compiled once per extractor and matched independently; results are unioned

use anyhow::Result;
use regex_automata::meta::Regex;
use tracing::debug;

use super::exclusions::ExclusionSet;
use super::{CandidateSource, Occurrence, ScanOptions};

/// Uppercase run, hyphen, digit with optional trailing capital ("EQ-5D")
pub const HYPHENATED_PATTERN: &str = r"\b([A-Z]+)-([0-9][A-Z]?)\b";
/// Three or more whitespace-separated all-caps words
pub const TITLE_PATTERN: &str = r"\b([A-Z]{2,}(\s+[A-Z]{2,}){2,})\b";
pub const ACRONYM_PATTERN: &str = r"\b[A-Z][A-Z]+\b";
pub const MIXED_CASE_PATTERN: &str = r"\b(?:[A-Z](?:[a-z]?[A-Z])+[a-z]?)\b";
pub const INITIALISM_PATTERN: &str = r"\b(?:[A-Z]\.){2,}[A-Z]?\b";
pub const ALPHANUMERIC_PATTERN: &str = r"\b[A-Z][A-Z0-9-]+\b";

/// Raw candidates of one scan together with the exclusions they were filtered against
#[derive(Debug, Clone)]
pub struct CandidateScan {
    pub occurrences: Vec<Occurrence>,
    pub exclusions: ExclusionSet,
}

/// Compiled candidate pattern families
pub struct CandidateScanner {
    hyphenated: Regex,
    title: Regex,
    families: Vec<(CandidateSource, Regex)>,
}

impl CandidateScanner {
    pub fn new() -> Result<Self> {
        // Compose the general families in the order they are unioned
        let families = vec![
            (CandidateSource::Acronym, Regex::new(ACRONYM_PATTERN)?),
            (CandidateSource::MixedCase, Regex::new(MIXED_CASE_PATTERN)?),
            (CandidateSource::Initialism, Regex::new(INITIALISM_PATTERN)?),
            (CandidateSource::Alphanumeric, Regex::new(ALPHANUMERIC_PATTERN)?),
        ];

        Ok(Self {
            hyphenated: Regex::new(HYPHENATED_PATTERN)?,
            title: Regex::new(TITLE_PATTERN)?,
            families,
        })
    }

    /// Collect every candidate occurrence in `text`
    /// `seeded` holds registry pre-matches; they bypass the rejection rules
    pub fn scan(&self, text: &str, options: &ScanOptions, seeded: Vec<Occurrence>) -> CandidateScan {
        let mut exclusions = ExclusionSet::new();
        let mut occurrences = seeded;

        // Hyphenated codes first so their prefixes are excluded before the general families run
        for caps in self.hyphenated.captures_iter(text) {
            let (Some(whole), Some(prefix)) = (caps.get_match(), caps.get_group(1)) else {
                continue;
            };
            exclusions.insert(&text[prefix.range()]);
            occurrences.push(Occurrence::new(&text[whole.range()], whole.start(), whole.end(), CandidateSource::Hyphenated));
        }

        // WHY: header rows legitimately hold short all-caps labels, so they are not titles
        if !(options.is_fragment && options.has_header) {
            let runs = exclusions.exclude_titles(text, &self.title);
            debug!("Excluded words from {} title runs", runs);
        }

        for (source, pattern) in &self.families {
            for mat in pattern.find_iter(text) {
                let token = &text[mat.range()];
                if is_rejected(token, &exclusions) {
                    continue;
                }
                occurrences.push(Occurrence::new(token, mat.start(), mat.end(), *source));
            }
        }

        for occurrence in &mut occurrences {
            if let Some(singular) = singular_form(&occurrence.abbreviation) {
                occurrence.abbreviation = singular.to_string();
            }
        }

        debug!(
            "Scanned {} candidate occurrences ({} scan exclusions)",
            occurrences.len(),
            exclusions.dynamic_len()
        );
        CandidateScan { occurrences, exclusions }
    }
}

/// Rejection rules applied to every raw pattern match
pub fn is_rejected(token: &str, exclusions: &ExclusionSet) -> bool {
    token.chars().count() < 2
        || has_run(token, |c| c.is_ascii_digit(), 3)
        || has_run(token, |c| c.is_lowercase(), 2)
        || exclusions.contains(token)
}

/// Singular of a plural acronym ("RCTs" -> "RCT"), if `token` is one
pub fn singular_form(token: &str) -> Option<&str> {
    let singular = token.strip_suffix('s')?;
    if token.chars().count() > 2 && singular.chars().all(|c| c.is_ascii_uppercase()) {
        Some(singular)
    } else {
        None
    }
}

/// True when `token` has at least `len` consecutive chars matching `pred`
fn has_run(token: &str, pred: impl Fn(char) -> bool, len: usize) -> bool {
    let mut run = 0;
    for ch in token.chars() {
        if pred(ch) {
            run += 1;
            if run >= len {
                return true;
            }
        } else {
            run = 0;
        }
    }
    false
}
