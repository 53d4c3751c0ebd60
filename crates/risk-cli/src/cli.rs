//! CLI argument definitions for the risk scorer.
//!
//! The `score` arguments are the form surface: defaults, ranges and the
//! closed-choice selectors match the data-collection form the model was
//! built for, so every value that reaches the pipeline is already
//! within the trained domain.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use risk_model::{Education, Gender, MaritalStatus};

#[derive(Parser)]
#[command(
    name = "risk-cli",
    version,
    about = "Credit default risk scorer",
    long_about = "Score credit applicants against a pre-trained binary classifier.\n\n\
                  The classifier and its ordered feature-name list are loaded from\n\
                  persisted artifacts at startup; scoring returns a default-risk\n\
                  probability and a thresholded high/low risk label."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Score a single applicant given as flags.
    Score(ScoreArgs),

    /// Score a CSV of applicants, one row per applicant.
    Batch(BatchArgs),

    /// List the loaded feature schema in classifier order.
    Features(FeaturesArgs),
}

/// Artifact locations and threshold, shared by every scoring command.
#[derive(Args)]
pub struct ArtifactArgs {
    /// Path to the classifier artifact (default: the checked-in model).
    #[arg(long = "model", value_name = "PATH")]
    pub model: Option<PathBuf>,

    /// Path to the feature-name list artifact (default: checked in).
    #[arg(long = "features", value_name = "PATH")]
    pub features: Option<PathBuf>,

    /// Risk threshold; probabilities at or above it classify high risk.
    #[arg(long = "threshold", value_name = "PROBABILITY", default_value_t = risk_model::DEFAULT_RISK_THRESHOLD, value_parser = parse_threshold)]
    pub threshold: f64,
}

#[derive(Args)]
pub struct ScoreArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// Credit limit.
    #[arg(long = "limit-bal", value_name = "AMOUNT", default_value_t = 200_000.0, value_parser = parse_limit_bal)]
    pub limit_bal: f64,

    /// Age in years.
    #[arg(long = "age", default_value_t = 30, value_parser = clap::value_parser!(u32).range(18..=100))]
    pub age: u32,

    /// Gender.
    #[arg(long = "gender", value_enum, default_value = "male")]
    pub gender: GenderArg,

    /// Education level.
    #[arg(long = "education", value_enum, default_value = "graduate-school")]
    pub education: EducationArg,

    /// Marital status.
    #[arg(long = "marital-status", value_enum, default_value = "married")]
    pub marital_status: MaritalStatusArg,

    /// Last month's pending-payment code.
    #[arg(long = "pay-0", default_value_t = 0, value_parser = clap::value_parser!(i8).range(-1..=9), allow_negative_numbers = true)]
    pub pay_0: i8,

    /// Pending-payment code from two months ago.
    #[arg(long = "pay-2", default_value_t = 0, value_parser = clap::value_parser!(i8).range(-1..=9), allow_negative_numbers = true)]
    pub pay_2: i8,

    /// Last bill amount.
    #[arg(long = "bill-amt1", value_name = "AMOUNT", default_value_t = 50_000.0, value_parser = parse_amount)]
    pub bill_amt1: f64,

    /// Last payment amount.
    #[arg(long = "pay-amt1", value_name = "AMOUNT", default_value_t = 20_000.0, value_parser = parse_amount)]
    pub pay_amt1: f64,

    /// Emit the result as JSON instead of the rendered summary.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct BatchArgs {
    #[command(flatten)]
    pub artifacts: ArtifactArgs,

    /// CSV file with one applicant per row. Columns: LIMIT_BAL, SEX,
    /// EDUCATION, MARRIAGE, AGE, PAY_0, PAY_2, BILL_AMT1, PAY_AMT1;
    /// categorical columns carry form labels such as "Graduate School".
    #[arg(value_name = "CSV_FILE")]
    pub input: PathBuf,

    /// Emit results as JSON instead of the rendered summary.
    #[arg(long = "json")]
    pub json: bool,
}

#[derive(Args)]
pub struct FeaturesArgs {
    /// Path to the feature-name list artifact (default: checked in).
    #[arg(long = "features", value_name = "PATH")]
    pub features: Option<PathBuf>,
}

/// Gender choices; exactly the encoder's known label set.
#[derive(Clone, Copy, ValueEnum)]
pub enum GenderArg {
    Male,
    Female,
}

impl From<GenderArg> for Gender {
    fn from(arg: GenderArg) -> Self {
        match arg {
            GenderArg::Male => Gender::Male,
            GenderArg::Female => Gender::Female,
        }
    }
}

/// Education choices; exactly the encoder's known label set.
#[derive(Clone, Copy, ValueEnum)]
pub enum EducationArg {
    GraduateSchool,
    University,
    HighSchool,
    Other,
}

impl From<EducationArg> for Education {
    fn from(arg: EducationArg) -> Self {
        match arg {
            EducationArg::GraduateSchool => Education::GraduateSchool,
            EducationArg::University => Education::University,
            EducationArg::HighSchool => Education::HighSchool,
            EducationArg::Other => Education::Other,
        }
    }
}

/// Marital status choices; exactly the encoder's known label set.
#[derive(Clone, Copy, ValueEnum)]
pub enum MaritalStatusArg {
    Married,
    Single,
    Other,
}

impl From<MaritalStatusArg> for MaritalStatus {
    fn from(arg: MaritalStatusArg) -> Self {
        match arg {
            MaritalStatusArg::Married => MaritalStatus::Married,
            MaritalStatusArg::Single => MaritalStatus::Single,
            MaritalStatusArg::Other => MaritalStatus::Other,
        }
    }
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

fn parse_threshold(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|_| format!("invalid number: {raw}"))?;
    if (0.0..=1.0).contains(&value) {
        Ok(value)
    } else {
        Err(format!("threshold must be within 0..=1, got {raw}"))
    }
}

fn parse_limit_bal(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|_| format!("invalid number: {raw}"))?;
    if value >= 10_000.0 {
        Ok(value)
    } else {
        Err(format!("credit limit must be at least 10000, got {raw}"))
    }
}

fn parse_amount(raw: &str) -> Result<f64, String> {
    let value: f64 = raw.parse().map_err(|_| format!("invalid number: {raw}"))?;
    if value >= 0.0 && value.is_finite() {
        Ok(value)
    } else {
        Err(format!("amount must be non-negative, got {raw}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_score_defaults_match_the_form() {
        let cli = Cli::try_parse_from(["risk-cli", "score"]).unwrap();
        let Command::Score(args) = cli.command else {
            panic!("expected score command");
        };
        assert_eq!(args.limit_bal, 200_000.0);
        assert_eq!(args.age, 30);
        assert_eq!(args.pay_0, 0);
        assert_eq!(args.pay_2, 0);
        assert_eq!(args.bill_amt1, 50_000.0);
        assert_eq!(args.pay_amt1, 20_000.0);
        assert_eq!(args.artifacts.threshold, 0.5);
    }

    #[test]
    fn test_out_of_range_form_values_are_rejected() {
        assert!(Cli::try_parse_from(["risk-cli", "score", "--age", "17"]).is_err());
        assert!(Cli::try_parse_from(["risk-cli", "score", "--age", "101"]).is_err());
        assert!(Cli::try_parse_from(["risk-cli", "score", "--limit-bal", "9999"]).is_err());
        assert!(Cli::try_parse_from(["risk-cli", "score", "--pay-0", "10"]).is_err());
        assert!(Cli::try_parse_from(["risk-cli", "score", "--pay-0", "-2"]).is_err());
        assert!(Cli::try_parse_from(["risk-cli", "score", "--bill-amt1", "-1"]).is_err());
    }

    #[test]
    fn test_negative_pay_code_is_accepted() {
        let cli = Cli::try_parse_from(["risk-cli", "score", "--pay-0", "-1"]).unwrap();
        let Command::Score(args) = cli.command else {
            panic!("expected score command");
        };
        assert_eq!(args.pay_0, -1);
    }

    #[test]
    fn test_unknown_categorical_label_is_rejected() {
        // The closed world: only the encoder's labels are offered.
        assert!(Cli::try_parse_from(["risk-cli", "score", "--gender", "unknown"]).is_err());
        assert!(Cli::try_parse_from(["risk-cli", "score", "--education", "primary"]).is_err());
    }
}
