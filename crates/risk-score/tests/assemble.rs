//! Integration tests for the assembly and prediction contract.

use std::collections::BTreeMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use proptest::prelude::{ProptestConfig, any, proptest};

use risk_model::{Applicant, FeatureVector, Result, RiskError};
use risk_score::{Classifier, Predictor, assemble};

fn trained_feature_names() -> Vec<String> {
    [
        "LIMIT_BAL",
        "SEX",
        "EDUCATION",
        "MARRIAGE",
        "AGE",
        "PAY_0",
        "PAY_2",
        "BILL_AMT1",
        "PAY_AMT1",
    ]
    .iter()
    .map(|name| (*name).to_string())
    .collect()
}

/// Stub that counts invocations, for asserting assembly failures fire
/// before any classifier call.
struct CountingClassifier {
    calls: AtomicUsize,
    num_features: usize,
}

impl CountingClassifier {
    fn new(num_features: usize) -> Self {
        Self {
            calls: AtomicUsize::new(0),
            num_features,
        }
    }
}

impl Classifier for CountingClassifier {
    fn num_features(&self) -> usize {
        self.num_features
    }

    fn predict_proba(&self, _features: &FeatureVector) -> Result<f64> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(0.5)
    }
}

#[test]
fn default_applicant_assembles_in_feature_list_order() {
    let names = trained_feature_names();
    let vector = assemble(&Applicant::default().feature_values(), &names).unwrap();
    assert_eq!(vector.names(), names.as_slice());
    assert_eq!(
        vector.values(),
        [200_000.0, 1.0, 1.0, 1.0, 30.0, 0.0, 0.0, 50_000.0, 20_000.0]
    );
}

#[test]
fn missing_bill_amount_fails_before_inference() {
    let mut values = Applicant::default().feature_values();
    values.remove("BILL_AMT1");

    let err = assemble(&values, &trained_feature_names()).unwrap_err();
    match err {
        RiskError::MissingFeature { name } => assert_eq!(name, "BILL_AMT1"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn predictor_never_invokes_classifier_on_assembly_failure() {
    // A feature list naming a field the applicant record does not carry.
    let mut names = trained_feature_names();
    names[7] = "BILL_AMT2".to_string();
    let classifier = Arc::new(CountingClassifier::new(names.len()));
    let trait_object: Arc<dyn Classifier> = classifier.clone();
    let predictor = Predictor::new(trait_object, names).unwrap();

    let err = predictor.score(&Applicant::default()).unwrap_err();
    assert!(matches!(err, RiskError::MissingFeature { .. }));
    assert_eq!(classifier.calls.load(Ordering::SeqCst), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// For any complete value map, the assembled vector has the list's
    /// length and its i-th value is the value mapped to the i-th name.
    #[test]
    fn assembled_vector_matches_list_positionally(raw in proptest::collection::vec(any::<i32>(), 9)) {
        let names = trained_feature_names();
        let values: BTreeMap<String, f64> = names
            .iter()
            .zip(&raw)
            .map(|(name, value)| (name.clone(), f64::from(*value)))
            .collect();

        let vector = assemble(&values, &names).unwrap();
        assert_eq!(vector.len(), names.len());
        for (index, name) in names.iter().enumerate() {
            assert_eq!(vector.values()[index], values[name]);
        }
    }
}
