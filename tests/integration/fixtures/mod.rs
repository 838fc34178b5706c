// Test fixtures with known HTA-style texts and expected glossaries
// WHY: Golden-file testing requires deterministic input/output pairs for validation

/// Short appraisal paragraph mixing seeded terms, a plural, a hyphenated code and an equation
pub const HTA_DOCUMENT: &str = "Cost-effectiveness was assessed by NICE using a Randomised Controlled Trial (RCT) and the EQ-5D questionnaire. Two RCTs reported overall survival (OS). QALY = quality-adjusted life year.";

/// Expected TSV glossary for HTA_DOCUMENT with the built-in dictionary
/// WHY: seeded definitions win over inferred ones, the equation overwrites the seeded QALY
pub const HTA_DOCUMENT_EXPECTED: &str = "Abbreviation\tDefinition
EQ-5D\tEuroQol 5-Dimension
NICE\tNational Institute for Health and Care Excellence (UK)
OS\tOverall Survival
QALY\tQuality-adjusted life year
RCT\tRandomised Controlled Trial";

/// Same document resolved without any seed dictionary
pub const HTA_DOCUMENT_UNSEEDED_EXPECTED: &str = "Abbreviation\tDefinition
EQ-5D\t
NICE\t
OS\tOverall survival
QALY\tQuality-adjusted life year
RCT\tRandomised Controlled Trial";

/// Outcomes table without a header row
pub const OUTCOMES_TABLE: &str = "Outcome\tMonths\nPFS\t12.1\nOS\t20.4\n";

/// Footnote expected for OUTCOMES_TABLE with the built-in dictionary
pub const OUTCOMES_FOOTNOTE: &str = "Abbreviations: OS - Overall Survival; PFS - Progression-Free Survival";

/// Table already followed by an abbreviations footnote paragraph
pub const ANNOTATED_TABLE: &str = "Outcome\tMonths\nTTD\t9.8\nOS\t20.4\n\nAbbreviations: OS - overall survival; TTD - time to treatment discontinuation\n";

/// User seed dictionary in JSON object form
pub const USER_SEED_JSON: &str = r#"{
  "OS": "Overall survival (investigator assessed)",
  "TTD": "Time to treatment discontinuation"
}"#;
