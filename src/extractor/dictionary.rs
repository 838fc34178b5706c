// WHY: Built-in domain dictionary seeded into every registry unless the caller opts out
// Health economics, market access and therapy-area terms used across HTA submissions

use anyhow::{Context, Result};
use std::collections::BTreeMap;
use std::path::Path;

/// Health-economics / pharma abbreviations with their reference definitions
pub const HEALTH_ECONOMICS_TERMS: &[(&str, &str)] = &[
    ("HEOR", "Health Economics and Outcomes Research"),
    ("HTA", "Health Technology Assessment/Appraisal"),
    ("ICER", "Incremental Cost-Effectiveness Ratio"),
    ("QALY", "Quality-Adjusted Life Year"),
    ("DALY", "Disability-Adjusted Life Year"),
    ("CER", "Cost-Effectiveness Ratio"),
    ("BIA", "Budget Impact Analysis"),
    ("CUA", "Cost-Utility Analysis"),
    ("CEA", "Cost-Effectiveness Analysis/Comparative Effectiveness Analysis"),
    ("CBA", "Cost-Benefit Analysis"),
    ("CMA", "Cost-Minimisation Analysis"),
    ("PRO", "Patient-Reported Outcome"),
    ("PROM", "Patient-Reported Outcome Measure"),
    ("RWE", "Real-World Evidence"),
    ("RWD", "Real-World Data"),
    ("NICE", "National Institute for Health and Care Excellence (UK)"),
    ("SMC", "Scottish Medicines Consortium"),
    ("CADTH", "Canadian Agency for Drugs and Technologies in Health"),
    ("FDA", "Food and Drug Administration (US)"),
    ("EMA", "European Medicines Agency"),
    ("MHRA", "Medicines and Healthcare products Regulatory Agency (UK)"),
    ("NHS", "National Health Service (UK)"),
    ("CMS", "Centers for Medicare & Medicaid Services (US)"),
    ("P&R", "Pricing and Reimbursement"),
    ("TPP", "Target Product Profile"),
    ("VBP", "Value-Based Pricing"),
    ("MEA", "Managed Entry Agreement"),
    ("PAS", "Patient Access Scheme (UK)"),
    ("CED", "Coverage with Evidence Development"),
    ("HCP", "Healthcare Professional"),
    ("KOL", "Key Opinion Leader"),
    ("GPP", "Global Pricing Paper"),
    ("SLR", "Systematic Literature Review"),
    ("MA", "Meta-Analysis"),
    ("NMA", "Network Meta-Analysis"),
    ("ITC", "Indirect Treatment Comparison"),
    ("MAIC", "Matching-Adjusted Indirect Comparison"),
    ("STC", "Simulated Treatment Comparison"),
    ("ITT", "Intention-to-Treat"),
    ("PP", "Per Protocol"),
    ("AE", "Adverse Event"),
    ("SAE", "Serious Adverse Event"),
    ("RCT", "Randomised Controlled Trial"),
    ("SoC", "Standard of Care"),
    ("LoT", "Line of Therapy"),
    ("QoL", "Quality of Life"),
    ("HRQoL", "Health-Related Quality of Life"),
    ("DRG", "Diagnosis-Related Group"),
    ("HRG", "Healthcare Resource Group"),
    ("ALOS", "Average Length of Stay"),
    ("MCO", "Managed Care Organization (US)"),
    ("PBM", "Pharmacy Benefit Manager (US)"),
    ("IDN", "Integrated Delivery Network (US)"),
    ("CCG", "Clinical Commissioning Group (UK, historical)"),
    ("ICS", "Integrated Care System (UK)"),
    ("ICB", "Integrated Care Board (UK)"),
    ("T1D", "Type 1 Diabetes"),
    ("T2D", "Type 2 Diabetes"),
    ("DM", "Diabetes Mellitus"),
    ("GDM", "Gestational Diabetes Mellitus"),
    ("HbA1c", "Haemoglobin A1c (glycated haemoglobin)"),
    ("FPG", "Fasting Plasma Glucose"),
    ("NSCLC", "Non-Small Cell Lung Cancer"),
    ("SCLC", "Small Cell Lung Cancer"),
    ("mCRC", "Metastatic Colorectal Cancer"),
    ("HCC", "Hepatocellular Carcinoma"),
    ("RCC", "Renal Cell Carcinoma"),
    ("BC", "Breast Cancer"),
    ("mBC", "Metastatic Breast Cancer"),
    ("TNBC", "Triple-Negative Breast Cancer"),
    ("PCa", "Prostate Cancer"),
    ("mPCa", "Metastatic Prostate Cancer"),
    ("NHL", "Non-Hodgkin Lymphoma"),
    ("MMy", "Multiple Myeloma"),
    ("AML", "Acute Myeloid Leukaemia"),
    ("CLL", "Chronic Lymphocytic Leukaemia"),
    ("PFS", "Progression-Free Survival"),
    ("OS", "Overall Survival"),
    ("ORR", "Objective Response Rate"),
    ("DOR", "Duration of Response"),
    ("CR", "Complete Response"),
    ("PR", "Partial Response"),
    ("AD", "Alzheimer's Disease"),
    ("MCI", "Mild Cognitive Impairment"),
    ("PD", "Parkinson's Disease"),
    ("MS", "Multiple Sclerosis"),
    ("RRMS", "Relapsing-Remitting Multiple Sclerosis"),
    ("PPMS", "Primary Progressive Multiple Sclerosis"),
    ("SPMS", "Secondary Progressive Multiple Sclerosis"),
    ("ALS", "Amyotrophic Lateral Sclerosis"),
    ("HD", "Huntington's Disease"),
    ("MMSE", "Mini-Mental State Examination"),
    ("CVD", "Cardiovascular Disease"),
    ("CHF", "Congestive Heart Failure"),
    ("MI", "Myocardial Infarction"),
    ("ACS", "Acute Coronary Syndrome"),
    ("AF", "Atrial Fibrillation"),
    ("HTN", "Hypertension"),
    ("PAD", "Peripheral Arterial Disease"),
    ("MACE", "Major Adverse Cardiovascular Events"),
    ("RA", "Rheumatoid Arthritis"),
    ("PsA", "Psoriatic Arthritis"),
    ("AS", "Ankylosing Spondylitis"),
    ("SLE", "Systemic Lupus Erythematosus"),
    ("IBD", "Inflammatory Bowel Disease"),
    ("CD", "Crohn's Disease"),
    ("UC", "Ulcerative Colitis"),
    ("NASH", "Non-Alcoholic Steatohepatitis"),
    ("COPD", "Chronic Obstructive Pulmonary Disease"),
    ("CKD", "Chronic Kidney Disease"),
    ("ESRD", "End-Stage Renal Disease"),
    ("HIV", "Human Immunodeficiency Virus"),
    ("HCV", "Hepatitis C Virus"),
    ("HBV", "Hepatitis B Virus"),
    ("TB", "Tuberculosis"),
    ("CE", "Cost-Effectiveness"),
    ("CONSORT", "Consolidated Standards of Reporting Trials"),
    ("DPD", "Drug Pricing Database"),
    ("ECDRP", "European Commission Decision Reliance Procedure"),
    ("EQ-5D", "EuroQol 5-Dimension"),
    ("ID", "Identification"),
    ("IFU", "Information for Use"),
    ("LYG", "Life Years Gained"),
    ("NHB", "Net Health Benefit"),
    ("PbR", "Payment by Results"),
    ("RIS", "Research Information Systems"),
    ("STA", "Single Technology Appraisal"),
    ("SmPC", "Summary of Product Characteristics"),
    ("TA", "Technology Appraisal"),
    ("CEM", "Cost-Effectiveness Model"),
    ("BIM", "Budget Impact Model"),
    ("PSA", "Probabilistic Sensitivity Analysis"),
    ("DSA", "Deterministic Sensitivity Analysis"),
    ("OWSA", "One-Way Sensitivity Analysis"),
    ("TWSA", "Two-Way Sensitivity Analysis"),
    ("PSM", "Partitioned Survival Model"),
    ("STM", "State Transition Model"),
    ("DES", "Discrete Event Simulation"),
    ("MM", "Markov Model"),
    ("TTO", "Time Trade-Off"),
    ("SG", "Standard Gamble"),
    ("WTP", "Willingness To Pay"),
    ("PSS", "Personal Social Services"),
    ("DCE", "Discrete Choice Experiment"),
    ("VOI", "Value of Information"),
    ("EVPI", "Expected Value of Perfect Information"),
    ("EVPPI", "Expected Value of Partial Perfect Information"),
    ("EVSI", "Expected Value of Sample Information"),
    ("INMB", "Incremental Net Monetary Benefit"),
    ("ICUR", "Incremental Cost-Utility Ratio"),
    ("GDP", "Gross Domestic Product"),
    ("HR", "Hazard Ratio"),
    ("OR", "Odds Ratio"),
    ("RR", "Relative Risk"),
    ("CI", "Confidence Interval"),
    ("CrI", "Credible Interval"),
    ("AIC", "Akaike Information Criterion"),
    ("BIC", "Bayesian Information Criterion"),
    ("MSM", "Multi-State Model"),
    ("DAM", "Decision Analytic Model"),
    ("HUI", "Health Utilities Index"),
    ("SF-6D", "Short-Form Six-Dimension"),
    ("VAS", "Visual Analogue Scale"),
    ("AUC", "Area Under the Curve"),
    ("K-M", "Kaplan-Meier"),
    ("UK", "United Kingdom"),
    ("USA", "United States of America"),
    ("US", "United States"),
    ("EU", "European Union"),
    ("EU-5", "France, Germany, Italy, Spain, United Kingdom"),
    ("EU-4", "France, Germany, Italy, Spain"),
    ("LATAM", "Latin America"),
    ("APAC", "Asia-Pacific"),
    ("EMEA", "Europe, Middle East, and Africa"),
    ("ROW", "Rest of World"),
    ("FR", "France"),
    ("DE", "Germany"),
    ("IT", "Italy"),
    ("ES", "Spain"),
    ("JP", "Japan"),
    ("CN", "China"),
    ("AU", "Australia"),
    ("CA", "Canada"),
    ("CH", "Switzerland"),
    ("SE", "Sweden"),
    ("DK", "Denmark"),
    ("NO", "Norway"),
    ("FI", "Finland"),
    ("NL", "Netherlands"),
    ("BE", "Belgium"),
    ("AT", "Austria"),
    ("IE", "Ireland"),
    ("PT", "Portugal"),
    ("GR", "Greece"),
    ("BR", "Brazil"),
    ("MX", "Mexico"),
    ("RU", "Russia"),
    ("IN", "India"),
    ("KR", "South Korea"),
    ("TW", "Taiwan"),
    ("BRICS", "Brazil, Russia, India, China, South Africa"),
    ("PBAC", "Pharmaceutical Benefits Advisory Committee (Australia)"),
    ("MSAC", "Medical Services Advisory Committee (Australia)"),
    ("ICD", "International Classification of Diseases"),
];

/// Parse a JSON object of `{"ABBR": "definition"}` pairs
pub fn parse_seed_json(content: &str) -> Result<BTreeMap<String, String>> {
    let dictionary: BTreeMap<String, String> =
        serde_json::from_str(content).context("Seed dictionary must be a JSON object of strings")?;
    Ok(dictionary)
}

/// Load an extra seed dictionary from disk
pub async fn load_seed_file(path: &Path) -> Result<BTreeMap<String, String>> {
    let content = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Failed to read seed dictionary {}", path.display()))?;
    parse_seed_json(&content)
}
