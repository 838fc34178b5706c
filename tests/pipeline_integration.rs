use glossator::extractor::dictionary::load_seed_file;
use glossator::output::{render_glossary, write_report, OutputFormat};
use glossator::reader::{read_text_async, InputReader, ReaderConfig};
use glossator::{AbbreviationExtractor, KnownTermRegistry, RunStats};
use std::collections::BTreeMap;
use std::process::Command;

#[path = "integration/fixtures/mod.rs"]
mod fixtures;
use fixtures::*;

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::{assert_golden_file, TestFixture};

/// Document read from disk, scanned with the built-in dictionary and rendered as TSV
#[tokio::test]
async fn test_pipeline_document_glossary() {
    let fixture = TestFixture::new();
    let doc_path = fixture.create_file("appraisal.txt", HTA_DOCUMENT);

    let content = read_text_async(&doc_path).await.expect("Document reading should succeed");
    assert_eq!(content, HTA_DOCUMENT);

    let mut extractor = AbbreviationExtractor::new().expect("Extractor creation should succeed");
    let glossary = extractor.scan_document(&content);

    let output = render_glossary(&glossary, OutputFormat::Tsv).expect("Rendering should succeed");
    assert_golden_file(&output, HTA_DOCUMENT_EXPECTED, "Seeded document pipeline");
}

/// Without a seed dictionary only text-derived definitions remain
#[tokio::test]
async fn test_pipeline_document_without_seed() {
    let fixture = TestFixture::new();
    let doc_path = fixture.create_file("appraisal.txt", HTA_DOCUMENT);

    let content = read_text_async(&doc_path).await.expect("Document reading should succeed");
    let mut extractor =
        AbbreviationExtractor::with_registry(KnownTermRegistry::new()).expect("Extractor creation should succeed");
    let glossary = extractor.scan_document(&content);

    let output = render_glossary(&glossary, OutputFormat::Tsv).expect("Rendering should succeed");
    assert_golden_file(&output, HTA_DOCUMENT_UNSEEDED_EXPECTED, "Unseeded document pipeline");
}

/// Tables are scanned in the same pass; annotated tables are left alone
#[tokio::test]
async fn test_pipeline_tables_in_document_pass() {
    let fixture = TestFixture::new();
    let outcomes_path = fixture.create_file("tables/outcomes.tsv", OUTCOMES_TABLE);
    let annotated_path = fixture.create_file("tables/annotated.tsv", ANNOTATED_TABLE);

    let reader = InputReader::new(ReaderConfig::default());
    let mut extractor = AbbreviationExtractor::new().expect("Extractor creation should succeed");
    extractor.scan_document(HTA_DOCUMENT);

    let (outcomes, stats) = reader.read_table(&outcomes_path).await.expect("Table reading should succeed");
    assert!(stats.read_error.is_none());
    let glossary = extractor.scan_table(&outcomes).expect("Outcomes table has abbreviations");
    assert_eq!(glossary.to_footnote(), OUTCOMES_FOOTNOTE);

    let (annotated, _stats) = reader.read_table(&annotated_path).await.expect("Table reading should succeed");
    assert!(extractor.scan_table(&annotated).is_none());

    // Terms learned from the table stay known for the rest of the pass
    assert!(extractor.registry().is_known("PFS"));
}

/// User seed entries take precedence when loaded before the built-in dictionary
#[tokio::test]
async fn test_pipeline_user_seed_precedence() {
    let fixture = TestFixture::new();
    let seed_path = fixture.create_file("seed.json", USER_SEED_JSON);

    let mut registry = KnownTermRegistry::new();
    registry.seed(load_seed_file(&seed_path).await.expect("Seed loading should succeed"));
    registry.seed(glossator::extractor::dictionary::HEALTH_ECONOMICS_TERMS.iter().copied());

    let mut extractor = AbbreviationExtractor::with_registry(registry).expect("Extractor creation should succeed");
    let glossary = extractor.scan_document("Median OS and TTD were reported.");

    assert_eq!(glossary.definition("OS"), Some("Overall survival (investigator assessed)"));
    assert_eq!(glossary.definition("TTD"), Some("Time to treatment discontinuation"));
}

/// Report file carries the glossary followed by table footnotes
#[tokio::test]
async fn test_pipeline_report_file() {
    let fixture = TestFixture::new();
    let mut extractor = AbbreviationExtractor::new().expect("Extractor creation should succeed");
    let glossary = extractor.scan_document(HTA_DOCUMENT);
    let table = glossator::reader::split_table_text(OUTCOMES_TABLE);
    let footnote = extractor.scan_table(&table).expect("Outcomes table has abbreviations").to_footnote();

    let rendered = render_glossary(&glossary, OutputFormat::Tsv).expect("Rendering should succeed");
    let report_path = fixture.output_path("glossary.tsv");
    write_report(&report_path, &rendered, &[footnote])
        .await
        .expect("Report writing should succeed");

    let expected = format!("{HTA_DOCUMENT_EXPECTED}\n{OUTCOMES_FOOTNOTE}");
    let written = fixture.read_output("glossary.tsv").expect("Report should exist");
    assert_golden_file(&written, &expected, "Report file");
}

/// End-to-end run of the CLI binary with a table and a stats file
#[test]
fn test_cli_writes_glossary_footnotes_and_stats() {
    let fixture = TestFixture::new();
    let doc_path = fixture.create_file("appraisal.txt", HTA_DOCUMENT);
    let table_path = fixture.create_file("outcomes.tsv", OUTCOMES_TABLE);
    let missing_table = fixture.output_path("missing.tsv");
    let stats_path = fixture.output_path("stats.json");

    let output = Command::new(env!("CARGO_BIN_EXE_glossator"))
        .arg(&doc_path)
        .arg("--table")
        .arg(&table_path)
        .arg("--table")
        .arg(&missing_table)
        .arg("--stats-out")
        .arg(&stats_path)
        .output()
        .expect("Failed to run glossator");

    assert!(
        output.status.success(),
        "glossator failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );

    let stdout = String::from_utf8_lossy(&output.stdout);
    let expected = format!("{HTA_DOCUMENT_EXPECTED}\n{OUTCOMES_FOOTNOTE}");
    assert_golden_file(&stdout, &expected, "CLI stdout");

    let stats: RunStats =
        serde_json::from_str(&fixture.read_output("stats.json").expect("Stats file should exist"))
            .expect("Stats should be valid JSON");
    assert_eq!(stats.inputs.len(), 3);
    assert_eq!(stats.inputs[0].kind, "document");
    assert_eq!(stats.inputs[0].abbreviations_found, 5);
    assert_eq!(stats.inputs[1].status, "success");
    assert_eq!(stats.inputs[2].status, "failed");
    assert_eq!(stats.total_abbreviations, 7);
}

#[test]
fn test_cli_rejects_missing_document() {
    let fixture = TestFixture::new();
    let output = Command::new(env!("CARGO_BIN_EXE_glossator"))
        .arg(fixture.output_path("absent.txt"))
        .output()
        .expect("Failed to run glossator");

    assert!(!output.status.success());
}

#[test]
fn test_cli_fail_fast_on_missing_table() {
    let fixture = TestFixture::new();
    let doc_path = fixture.create_file("appraisal.txt", HTA_DOCUMENT);

    let output = Command::new(env!("CARGO_BIN_EXE_glossator"))
        .arg(&doc_path)
        .arg("--table")
        .arg(fixture.output_path("missing.tsv"))
        .arg("--fail-fast")
        .output()
        .expect("Failed to run glossator");

    assert!(!output.status.success());
}

/// --no-builtin-seed leaves only definitions found in the text
#[test]
fn test_cli_without_builtin_seed() {
    let fixture = TestFixture::new();
    let doc_path = fixture.create_file("appraisal.txt", HTA_DOCUMENT);

    let output = Command::new(env!("CARGO_BIN_EXE_glossator"))
        .arg(&doc_path)
        .arg("--no-builtin-seed")
        .output()
        .expect("Failed to run glossator");

    assert!(
        output.status.success(),
        "glossator failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert_golden_file(&stdout, HTA_DOCUMENT_UNSEEDED_EXPECTED, "CLI stdout without built-in seed");
}

/// --format json writes a plain abbreviation -> definition object to --out
#[test]
fn test_cli_json_report_file() {
    let fixture = TestFixture::new();
    let doc_path = fixture.create_file("appraisal.txt", HTA_DOCUMENT);
    let out_path = fixture.output_path("glossary.json");

    let output = Command::new(env!("CARGO_BIN_EXE_glossator"))
        .arg(&doc_path)
        .arg("--format")
        .arg("json")
        .arg("--out")
        .arg(&out_path)
        .output()
        .expect("Failed to run glossator");

    assert!(
        output.status.success(),
        "glossator failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    assert!(output.stdout.is_empty(), "glossary should go to --out, not stdout");

    let glossary: BTreeMap<String, String> =
        serde_json::from_str(&fixture.read_output("glossary.json").expect("Report should exist"))
            .expect("Report should be a JSON object");
    let keys: Vec<&str> = glossary.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["EQ-5D", "NICE", "OS", "QALY", "RCT"]);
    assert_eq!(glossary["QALY"], "Quality-adjusted life year");
    assert_eq!(glossary["NICE"], "National Institute for Health and Care Excellence (UK)");
}
