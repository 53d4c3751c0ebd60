//! The ordered feature vector consumed by the classifier.

use serde::{Deserialize, Serialize};

/// An assembled feature vector.
///
/// The classifier has no knowledge of field names, only positional
/// order, so the vector carries the names it was assembled against to
/// make mismatches diagnosable. Invariant: `names.len() == values.len()`
/// and `values[i]` is the value for `names[i]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector {
    names: Vec<String>,
    values: Vec<f64>,
}

impl FeatureVector {
    /// Build a vector from parallel name/value sequences.
    ///
    /// Callers (the assembler) are responsible for ordering the values
    /// to match the names; this constructor only pairs them up.
    pub fn new(names: Vec<String>, values: Vec<f64>) -> Self {
        debug_assert_eq!(names.len(), values.len());
        Self { names, values }
    }

    /// Feature names, in classifier order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Feature values, in classifier order.
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Number of features.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector_preserves_order() {
        let vector = FeatureVector::new(
            vec!["A".to_string(), "B".to_string()],
            vec![1.0, 2.0],
        );
        assert_eq!(vector.len(), 2);
        assert_eq!(vector.names(), ["A", "B"]);
        assert_eq!(vector.values(), [1.0, 2.0]);
    }
}
