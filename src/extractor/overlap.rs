// WHY: Sub-token suppression across competing pattern families
// "EQ" inside "EQ-5D" or "SCLC" inside a known "NSCLC" span must not surface as separate entries

use std::collections::BTreeSet;

use super::Occurrence;

/// Occurrences not fully contained in an occurrence of a different abbreviation
///
/// Duplicate (abbreviation, span) records from several pattern families collapse to one.
/// Output is ordered by start offset, longest span first.
pub fn outermost_occurrences(occurrences: &[Occurrence]) -> Vec<Occurrence> {
    let mut sorted: Vec<&Occurrence> = occurrences.iter().collect();
    sorted.sort_by(|a, b| {
        a.start
            .cmp(&b.start)
            .then(b.end.cmp(&a.end))
            .then(a.abbreviation.cmp(&b.abbreviation))
    });
    sorted.dedup_by(|a, b| a.start == b.start && a.end == b.end && a.abbreviation == b.abbreviation);

    sorted
        .iter()
        .filter(|candidate| {
            // Any container starts at or before the candidate, so only that prefix is searched
            !sorted
                .iter()
                .take_while(|other| other.start <= candidate.start)
                .any(|other| other.abbreviation != candidate.abbreviation && other.contains(candidate))
        })
        .map(|occ| (*occ).clone())
        .collect()
}

/// Abbreviations with at least one occurrence that survives containment
pub fn resolve_overlaps(occurrences: &[Occurrence]) -> BTreeSet<String> {
    outermost_occurrences(occurrences)
        .into_iter()
        .map(|occ| occ.abbreviation)
        .collect()
}
