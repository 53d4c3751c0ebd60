//! Feature assembly: from a name/value map to the classifier's ordered
//! vector.
//!
//! Feature order is load-bearing. The classifier knows nothing about
//! field names, only positions, so the sole responsibility here is to
//! emit values in exactly the order of the externally supplied
//! feature-name list. Semantic range validation is deliberately absent;
//! the form surface constrains value ranges before they reach this
//! point.

use std::collections::BTreeMap;

use risk_model::{FeatureVector, Result, RiskError};

/// Assemble a [`FeatureVector`] by looking up each name of
/// `feature_names`, in order, in `values`.
///
/// `values` may carry more fields than the list requires; extras are
/// ignored. The output length always equals `feature_names.len()`.
///
/// # Errors
///
/// Returns [`RiskError::MissingFeature`] for the first required name
/// absent from `values`. This fires before any classifier invocation.
pub fn assemble(values: &BTreeMap<String, f64>, feature_names: &[String]) -> Result<FeatureVector> {
    let mut ordered = Vec::with_capacity(feature_names.len());
    for name in feature_names {
        let value = values
            .get(name)
            .copied()
            .ok_or_else(|| RiskError::MissingFeature { name: name.clone() })?;
        ordered.push(value);
    }
    Ok(FeatureVector::new(feature_names.to_vec(), ordered))
}
