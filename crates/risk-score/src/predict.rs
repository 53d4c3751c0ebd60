//! The predictor: one loaded classifier plus the positional feature
//! contract, injected at construction.

use std::sync::Arc;

use tracing::debug;

use risk_model::{Applicant, DEFAULT_RISK_THRESHOLD, PredictionResult, Result, RiskError};

use crate::assemble::assemble;
use crate::classifier::Classifier;

/// Scores applicants against one loaded classifier.
///
/// Holds the classifier, the feature-name list and the risk threshold
/// as immutable state; scoring is a pure function over that state, so a
/// single predictor can serve concurrent requests.
#[derive(Clone)]
pub struct Predictor {
    classifier: Arc<dyn Classifier>,
    feature_names: Vec<String>,
    threshold: f64,
}

impl std::fmt::Debug for Predictor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Predictor")
            .field("classifier", &self.classifier.name())
            .field("feature_names", &self.feature_names)
            .field("threshold", &self.threshold)
            .finish()
    }
}

impl Predictor {
    /// Build a predictor with the default risk threshold (0.5).
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::UnexpectedShape`] when the feature-name list
    /// length disagrees with the classifier's trained width; catching
    /// the mismatch here keeps it out of every scoring call.
    pub fn new(classifier: Arc<dyn Classifier>, feature_names: Vec<String>) -> Result<Self> {
        if feature_names.len() != classifier.num_features() {
            return Err(RiskError::UnexpectedShape {
                expected: classifier.num_features(),
                actual: feature_names.len(),
            });
        }
        Ok(Self {
            classifier,
            feature_names,
            threshold: DEFAULT_RISK_THRESHOLD,
        })
    }

    /// Override the risk threshold. The default of 0.5 is the trained
    /// operating point; overrides are for exploratory use.
    #[must_use]
    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    /// The positional feature contract, in classifier order.
    pub fn feature_names(&self) -> &[String] {
        &self.feature_names
    }

    /// The active risk threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Human-readable name of the loaded classifier.
    pub fn classifier_name(&self) -> &str {
        self.classifier.name()
    }

    /// Score one applicant: encode, assemble in feature-list order,
    /// invoke the classifier, threshold.
    ///
    /// # Errors
    ///
    /// Propagates assembly and inference errors unchanged; no default
    /// prediction is ever substituted on failure.
    pub fn score(&self, applicant: &Applicant) -> Result<PredictionResult> {
        let values = applicant.feature_values();
        let vector = assemble(&values, &self.feature_names)?;
        let probability = self.classifier.predict_proba(&vector)?;
        let result = PredictionResult::new(probability, self.threshold);
        debug!(
            probability,
            label = %result.label,
            classifier = self.classifier.name(),
            "scored applicant"
        );
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use risk_model::{FeatureVector, RiskLabel};

    /// Stub returning a fixed probability for any input.
    struct FixedClassifier {
        probability: f64,
        num_features: usize,
    }

    impl Classifier for FixedClassifier {
        fn num_features(&self) -> usize {
            self.num_features
        }

        fn predict_proba(&self, _features: &FeatureVector) -> Result<f64> {
            Ok(self.probability)
        }
    }

    fn predictor(probability: f64) -> Predictor {
        let names = vec![
            "LIMIT_BAL".to_string(),
            "SEX".to_string(),
            "EDUCATION".to_string(),
            "MARRIAGE".to_string(),
            "AGE".to_string(),
            "PAY_0".to_string(),
            "PAY_2".to_string(),
            "BILL_AMT1".to_string(),
            "PAY_AMT1".to_string(),
        ];
        Predictor::new(
            Arc::new(FixedClassifier {
                probability,
                num_features: names.len(),
            }),
            names,
        )
        .unwrap()
    }

    #[test]
    fn test_high_risk_branch_at_075() {
        let result = predictor(0.75).score(&Applicant::default()).unwrap();
        assert_eq!(result.label, RiskLabel::HighRisk);
        assert_eq!(result.probability_percent(), "75.00%");
    }

    #[test]
    fn test_low_risk_branch_just_under_threshold() {
        let result = predictor(0.4999).score(&Applicant::default()).unwrap();
        assert_eq!(result.label, RiskLabel::LowRisk);
    }

    #[test]
    fn test_feature_list_width_checked_at_construction() {
        let classifier = Arc::new(FixedClassifier {
            probability: 0.5,
            num_features: 9,
        });
        let err = Predictor::new(classifier, vec!["LIMIT_BAL".to_string()]).unwrap_err();
        assert!(matches!(
            err,
            RiskError::UnexpectedShape {
                expected: 9,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_custom_threshold_changes_label_only() {
        let result = predictor(0.4)
            .with_threshold(0.3)
            .score(&Applicant::default())
            .unwrap();
        assert_eq!(result.label, RiskLabel::HighRisk);
        assert_eq!(result.probability, 0.4);
        assert_eq!(result.threshold, 0.3);
    }
}
