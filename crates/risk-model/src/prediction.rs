//! Prediction results and the risk threshold policy.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Probability cutoff separating high-risk from low-risk output.
///
/// Configurable at predictor construction; this default must be
/// preserved.
pub const DEFAULT_RISK_THRESHOLD: f64 = 0.5;

/// The thresholded risk classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RiskLabel {
    /// Probability at or above the threshold.
    HighRisk,
    /// Probability below the threshold.
    LowRisk,
}

impl RiskLabel {
    /// Classify a probability against a threshold.
    ///
    /// A probability exactly at the threshold is high risk (`>=`, not
    /// `>`).
    pub fn from_probability(probability: f64, threshold: f64) -> Self {
        if probability >= threshold {
            RiskLabel::HighRisk
        } else {
            RiskLabel::LowRisk
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskLabel::HighRisk => "high risk",
            RiskLabel::LowRisk => "low risk",
        }
    }

    pub fn is_high_risk(&self) -> bool {
        matches!(self, RiskLabel::HighRisk)
    }
}

impl fmt::Display for RiskLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One scoring outcome. Recomputed per request; never persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    /// Probability of default, in [0, 1].
    pub probability: f64,
    /// Thresholded classification of `probability`.
    pub label: RiskLabel,
    /// The threshold the label was derived with.
    pub threshold: f64,
}

impl PredictionResult {
    /// Derive a result from a raw probability and a threshold.
    pub fn new(probability: f64, threshold: f64) -> Self {
        Self {
            probability,
            label: RiskLabel::from_probability(probability, threshold),
            threshold,
        }
    }

    /// The probability formatted as a percentage with two decimals,
    /// e.g. `75.00%`.
    pub fn probability_percent(&self) -> String {
        format!("{:.2}%", self.probability * 100.0)
    }
}
