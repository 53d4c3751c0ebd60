//! Command runners: artifact loading, single and batch scoring, and the
//! feature-schema listing.

use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, anyhow, bail};
use comfy_table::Table;
use serde::Serialize;
use tracing::{info, info_span};

use risk_model::{Applicant, Education, Gender, MaritalStatus, PredictionResult};
use risk_score::{
    FEATURES_FILE_NAME, MODEL_FILE_NAME, Predictor, default_artifacts_root, load_feature_names,
    load_model,
};

use crate::cli::{ArtifactArgs, BatchArgs, FeaturesArgs, ScoreArgs};
use crate::summary::apply_table_style;

/// One scored applicant, ready for rendering or JSON output.
#[derive(Debug, Serialize)]
pub struct ScoreOutcome {
    pub applicant: Applicant,
    pub result: PredictionResult,
}

/// A scored batch run.
#[derive(Debug, Serialize)]
pub struct BatchOutcome {
    pub rows: Vec<BatchRow>,
    pub high_risk: usize,
    pub low_risk: usize,
}

/// One scored CSV row; `line` is the 1-based line in the input file.
#[derive(Debug, Serialize)]
pub struct BatchRow {
    pub line: usize,
    pub applicant: Applicant,
    pub result: PredictionResult,
}

/// Load both artifacts and build the predictor they describe.
///
/// Loading happens once per process invocation; the returned predictor
/// is immutable afterwards.
pub fn load_predictor(args: &ArtifactArgs) -> Result<Predictor> {
    let root = default_artifacts_root();
    let model_path = args
        .model
        .clone()
        .unwrap_or_else(|| root.join(MODEL_FILE_NAME));
    let features_path = args
        .features
        .clone()
        .unwrap_or_else(|| root.join(FEATURES_FILE_NAME));

    let model = load_model(&model_path)?;
    let feature_names = load_feature_names(&features_path)?;
    info!(
        model = %model_path.display(),
        features = feature_names.len(),
        "loaded artifacts"
    );
    let predictor = Predictor::new(Arc::new(model), feature_names)
        .context("classifier and feature list disagree")?;
    Ok(predictor.with_threshold(args.threshold))
}

pub fn run_score(args: &ScoreArgs) -> Result<ScoreOutcome> {
    let span = info_span!("score");
    let _guard = span.enter();
    let predictor = load_predictor(&args.artifacts)?;
    let applicant = applicant_from_args(args);
    let result = predictor.score(&applicant).context("score applicant")?;
    Ok(ScoreOutcome { applicant, result })
}

pub fn run_batch(args: &BatchArgs) -> Result<BatchOutcome> {
    let span = info_span!("batch", input = %args.input.display());
    let _guard = span.enter();
    let predictor = load_predictor(&args.artifacts)?;
    let applicants = read_applicants(&args.input)?;
    if applicants.is_empty() {
        bail!("no applicant rows in {}", args.input.display());
    }

    let mut rows = Vec::with_capacity(applicants.len());
    let mut high_risk = 0usize;
    let mut low_risk = 0usize;
    for (line, applicant) in applicants {
        let result = predictor
            .score(&applicant)
            .with_context(|| format!("score row at line {line}"))?;
        if result.label.is_high_risk() {
            high_risk += 1;
        } else {
            low_risk += 1;
        }
        rows.push(BatchRow {
            line,
            applicant,
            result,
        });
    }
    info!(rows = rows.len(), high_risk, low_risk, "batch scored");
    Ok(BatchOutcome {
        rows,
        high_risk,
        low_risk,
    })
}

pub fn run_features(args: &FeaturesArgs) -> Result<()> {
    let features_path = args
        .features
        .clone()
        .unwrap_or_else(|| default_artifacts_root().join(FEATURES_FILE_NAME));
    let feature_names = load_feature_names(&features_path)?;

    let mut table = Table::new();
    table.set_header(vec!["Position", "Feature", "Description"]);
    apply_table_style(&mut table);
    for (position, name) in feature_names.iter().enumerate() {
        table.add_row(vec![
            position.to_string(),
            name.clone(),
            describe_feature(name).to_string(),
        ]);
    }
    println!("{table}");
    Ok(())
}

fn applicant_from_args(args: &ScoreArgs) -> Applicant {
    Applicant {
        limit_bal: args.limit_bal,
        gender: args.gender.into(),
        education: args.education.into(),
        marital_status: args.marital_status.into(),
        age: args.age,
        pay_0: args.pay_0,
        pay_2: args.pay_2,
        bill_amt1: args.bill_amt1,
        pay_amt1: args.pay_amt1,
    }
}

const BATCH_COLUMNS: [&str; 9] = [
    "LIMIT_BAL",
    "SEX",
    "EDUCATION",
    "MARRIAGE",
    "AGE",
    "PAY_0",
    "PAY_2",
    "BILL_AMT1",
    "PAY_AMT1",
];

/// Read applicants from a headed CSV, one per row, returning each with
/// its 1-based source line for error reporting.
fn read_applicants(path: &Path) -> Result<Vec<(usize, Applicant)>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_path(path)
        .with_context(|| format!("read csv: {}", path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("read headers: {}", path.display()))?
        .clone();

    let mut column_index = Vec::with_capacity(BATCH_COLUMNS.len());
    for column in BATCH_COLUMNS {
        let index = headers
            .iter()
            .position(|header| header.eq_ignore_ascii_case(column))
            .ok_or_else(|| anyhow!("missing column {column} in {}", path.display()))?;
        column_index.push(index);
    }

    let mut applicants = Vec::new();
    for (row_number, record) in reader.records().enumerate() {
        // Line 1 is the header row.
        let line = row_number + 2;
        let record = record.with_context(|| format!("read row at line {line}"))?;
        let applicant = parse_applicant_row(&record, &column_index)
            .with_context(|| format!("invalid row at line {line} of {}", path.display()))?;
        applicants.push((line, applicant));
    }
    Ok(applicants)
}

fn column<'r>(record: &'r csv::StringRecord, column_index: &[usize], slot: usize) -> &'r str {
    record.get(column_index[slot]).unwrap_or("")
}

fn parse_applicant_row(record: &csv::StringRecord, column_index: &[usize]) -> Result<Applicant> {
    let field = |slot: usize| column(record, column_index, slot);
    Ok(Applicant {
        limit_bal: parse_number(field(0), "LIMIT_BAL")?,
        gender: field(1)
            .parse::<Gender>()
            .map_err(|message| anyhow!(message))?,
        education: field(2)
            .parse::<Education>()
            .map_err(|message| anyhow!(message))?,
        marital_status: field(3)
            .parse::<MaritalStatus>()
            .map_err(|message| anyhow!(message))?,
        age: field(4)
            .parse()
            .with_context(|| format!("invalid AGE: {}", field(4)))?,
        pay_0: field(5)
            .parse()
            .with_context(|| format!("invalid PAY_0: {}", field(5)))?,
        pay_2: field(6)
            .parse()
            .with_context(|| format!("invalid PAY_2: {}", field(6)))?,
        bill_amt1: parse_number(field(7), "BILL_AMT1")?,
        pay_amt1: parse_number(field(8), "PAY_AMT1")?,
    })
}

fn parse_number(raw: &str, column: &str) -> Result<f64> {
    raw.parse()
        .with_context(|| format!("invalid {column}: {raw}"))
}

fn describe_feature(name: &str) -> &'static str {
    match name {
        "LIMIT_BAL" => "Credit limit",
        "SEX" => "Gender code (1 Male, 2 Female)",
        "EDUCATION" => "Education code (1 Graduate School .. 4 Other)",
        "MARRIAGE" => "Marital status code (1 Married, 2 Single, 3 Other)",
        "AGE" => "Age in years",
        "PAY_0" => "Last month pending-payment code",
        "PAY_2" => "Two months ago pending-payment code",
        "BILL_AMT1" => "Last bill amount",
        "PAY_AMT1" => "Last payment amount",
        _ => "",
    }
}
