//! Error taxonomy for the scoring pipeline.
//!
//! None of these conditions are retried and no degraded fallback exists:
//! every error indicates a mismatch between the form surface, the
//! encoding maps, and the classifier's trained schema, and propagates to
//! the caller with no partial result.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RiskError {
    /// The assembler could not find a value for a feature the
    /// feature-name list requires.
    #[error("missing value for feature {name}")]
    MissingFeature { name: String },

    /// The assembled vector does not match the shape the classifier was
    /// trained on.
    #[error("feature vector has {actual} values, classifier expects {expected}")]
    UnexpectedShape { expected: usize, actual: usize },

    /// The classifier rejected the input at scoring time.
    #[error("inference failed: {message}")]
    Inference { message: String },
}

impl RiskError {
    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference {
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;
