//! The classifier abstraction and the concrete tree-ensemble scorer.

use serde::{Deserialize, Serialize};

use risk_model::{FeatureVector, Result, RiskError};

/// The one capability the pipeline needs from a trained model: score a
/// feature vector and return the probability of the default class.
///
/// Implementations must be pure over their loaded state so that a fixed
/// input always yields an identical probability, and `Send + Sync` so a
/// single loaded model can serve concurrent requests without locking.
pub trait Classifier: Send + Sync {
    /// Number of features the model was trained on.
    fn num_features(&self) -> usize;

    /// Probability of the default class, in [0, 1].
    ///
    /// # Errors
    ///
    /// Returns [`RiskError::UnexpectedShape`] if the vector length does
    /// not match [`Classifier::num_features`], and
    /// [`RiskError::Inference`] if the values are otherwise unusable.
    fn predict_proba(&self, features: &FeatureVector) -> Result<f64>;

    /// Human-readable model name for logs and status output.
    fn name(&self) -> &str {
        "classifier"
    }
}

/// One node of a decision tree, in the flat-array encoding of the model
/// artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TreeNode {
    /// Internal split: `feature < threshold` goes left, otherwise right.
    Split {
        feature: usize,
        threshold: f64,
        left: usize,
        right: usize,
    },
    /// Terminal node contributing `leaf` to the margin sum.
    Leaf { leaf: f64 },
}

/// One tree of the ensemble; `nodes[0]` is the root.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Tree {
    pub nodes: Vec<TreeNode>,
}

impl Tree {
    /// Walk the tree for one vector and return the leaf value.
    fn score(&self, values: &[f64], tree_index: usize) -> Result<f64> {
        let mut index = 0usize;
        // A well-formed tree terminates well before visiting every node
        // once; the bound guards against cycles in a corrupt artifact.
        for _ in 0..=self.nodes.len() {
            match self.nodes.get(index) {
                Some(TreeNode::Leaf { leaf }) => return Ok(*leaf),
                Some(TreeNode::Split {
                    feature,
                    threshold,
                    left,
                    right,
                }) => {
                    let value = values.get(*feature).copied().ok_or_else(|| {
                        RiskError::inference(format!(
                            "tree {tree_index} references feature index {feature} beyond input"
                        ))
                    })?;
                    index = if value < *threshold { *left } else { *right };
                }
                None => {
                    return Err(RiskError::inference(format!(
                        "tree {tree_index} references node index {index} beyond node array"
                    )));
                }
            }
        }
        Err(RiskError::inference(format!(
            "tree {tree_index} did not reach a leaf (cyclic node references)"
        )))
    }
}

/// A gradient-boosted tree ensemble with a sigmoid link, the persisted
/// form of the tuned binary classifier this system serves.
///
/// The probability for a vector `x` is
/// `sigmoid(base_score + sum(tree(x) for tree in trees))`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GradientBoostedModel {
    /// Artifact schema discriminator, e.g. `gradient_boosted_trees`.
    pub model_type: String,
    /// Width of the trained feature schema.
    pub num_features: usize,
    /// Margin offset added before the link function (the log-odds of
    /// the training prior).
    pub base_score: f64,
    pub trees: Vec<Tree>,
}

impl GradientBoostedModel {
    /// Raw margin (log-odds) for a value slice of trained width.
    fn margin(&self, values: &[f64]) -> Result<f64> {
        let mut margin = self.base_score;
        for (tree_index, tree) in self.trees.iter().enumerate() {
            margin += tree.score(values, tree_index)?;
        }
        Ok(margin)
    }
}

impl Classifier for GradientBoostedModel {
    fn num_features(&self) -> usize {
        self.num_features
    }

    fn predict_proba(&self, features: &FeatureVector) -> Result<f64> {
        if features.len() != self.num_features {
            return Err(RiskError::UnexpectedShape {
                expected: self.num_features,
                actual: features.len(),
            });
        }
        if let Some(position) = features.values().iter().position(|v| !v.is_finite()) {
            return Err(RiskError::inference(format!(
                "non-finite value for feature {}",
                features.names()[position]
            )));
        }
        let margin = self.margin(features.values())?;
        Ok(sigmoid(margin))
    }

    fn name(&self) -> &str {
        &self.model_type
    }
}

fn sigmoid(margin: f64) -> f64 {
    1.0 / (1.0 + (-margin).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stump(feature: usize, threshold: f64, left_leaf: f64, right_leaf: f64) -> Tree {
        Tree {
            nodes: vec![
                TreeNode::Split {
                    feature,
                    threshold,
                    left: 1,
                    right: 2,
                },
                TreeNode::Leaf { leaf: left_leaf },
                TreeNode::Leaf { leaf: right_leaf },
            ],
        }
    }

    fn model(trees: Vec<Tree>, num_features: usize) -> GradientBoostedModel {
        GradientBoostedModel {
            model_type: "gradient_boosted_trees".to_string(),
            num_features,
            base_score: 0.0,
            trees,
        }
    }

    fn vector(values: Vec<f64>) -> FeatureVector {
        let names = (0..values.len()).map(|i| format!("F{i}")).collect();
        FeatureVector::new(names, values)
    }

    #[test]
    fn test_stump_routes_on_threshold() {
        let model = model(vec![stump(0, 10.0, -2.0, 2.0)], 1);
        let low = model.predict_proba(&vector(vec![5.0])).unwrap();
        let high = model.predict_proba(&vector(vec![10.0])).unwrap();
        assert!(low < 0.5, "left leaf should be low: {low}");
        // Values at the threshold route right.
        assert!(high > 0.5, "right leaf should be high: {high}");
    }

    #[test]
    fn test_margin_sums_across_trees() {
        let model = model(vec![stump(0, 10.0, -1.0, 1.0), stump(1, 0.5, -1.0, 1.0)], 2);
        // Both leaves cancel: margin 0 -> probability 0.5.
        let p = model.predict_proba(&vector(vec![0.0, 1.0])).unwrap();
        assert!((p - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_shape_mismatch_is_rejected() {
        let model = model(vec![stump(0, 10.0, -1.0, 1.0)], 2);
        let err = model.predict_proba(&vector(vec![1.0])).unwrap_err();
        assert!(matches!(
            err,
            RiskError::UnexpectedShape {
                expected: 2,
                actual: 1
            }
        ));
    }

    #[test]
    fn test_non_finite_value_is_rejected() {
        let model = model(vec![stump(0, 10.0, -1.0, 1.0)], 1);
        let err = model.predict_proba(&vector(vec![f64::NAN])).unwrap_err();
        assert!(matches!(err, RiskError::Inference { .. }));
    }

    #[test]
    fn test_corrupt_node_reference_is_an_inference_error() {
        let model = model(
            vec![Tree {
                nodes: vec![TreeNode::Split {
                    feature: 0,
                    threshold: 1.0,
                    left: 7,
                    right: 7,
                }],
            }],
            1,
        );
        let err = model.predict_proba(&vector(vec![0.0])).unwrap_err();
        assert!(matches!(err, RiskError::Inference { .. }));
    }

    #[test]
    fn test_prediction_is_deterministic() {
        let model = model(vec![stump(0, 10.0, -0.3, 0.8)], 1);
        let input = vector(vec![42.0]);
        let first = model.predict_proba(&input).unwrap();
        for _ in 0..5 {
            assert_eq!(model.predict_proba(&input).unwrap(), first);
        }
    }
}
