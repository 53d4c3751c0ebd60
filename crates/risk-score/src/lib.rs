//! Scoring pipeline for the credit default risk scorer.
//!
//! Loads the two external artifacts (the trained classifier and the
//! ordered feature-name list), assembles applicant records into the
//! exact vector shape the classifier was trained on, and produces
//! thresholded predictions. The loaded artifacts are immutable after
//! construction and safe to share across concurrent readers.

pub mod artifact;
pub mod assemble;
pub mod classifier;
pub mod predict;

pub use artifact::{
    default_artifacts_root, load_feature_names, load_model, FEATURES_FILE_NAME, MODEL_FILE_NAME,
};
pub use assemble::assemble;
pub use classifier::{Classifier, GradientBoostedModel};
pub use predict::Predictor;
