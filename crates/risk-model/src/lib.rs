//! Data model for the credit default risk scorer.
//!
//! This crate defines the domain types shared by the scoring pipeline:
//! the categorical field enums with their training-time integer codes,
//! the applicant record collected by the form surface, the ordered
//! feature vector consumed by the classifier, and the error taxonomy.
//! It performs no I/O.

pub mod applicant;
pub mod enums;
pub mod error;
pub mod features;
pub mod prediction;

pub use applicant::Applicant;
pub use enums::{Education, Gender, MaritalStatus};
pub use error::{Result, RiskError};
pub use features::FeatureVector;
pub use prediction::{DEFAULT_RISK_THRESHOLD, PredictionResult, RiskLabel};
