//! Loading of the two persisted artifacts: the trained classifier and
//! the ordered feature-name list.
//!
//! Both are loaded once at process start and never mutated afterwards.
//! The original training pipeline persisted them side by side; this
//! loader expects the same layout.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};

use crate::classifier::{GradientBoostedModel, TreeNode};

/// File name of the classifier artifact inside the artifacts directory.
pub const MODEL_FILE_NAME: &str = "credit_risk_model.json";

/// File name of the feature-name list artifact.
pub const FEATURES_FILE_NAME: &str = "selected_features.json";

/// Root of the checked-in artifacts directory at the workspace root.
pub fn default_artifacts_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../artifacts")
}

/// Load and structurally validate the classifier artifact.
pub fn load_model(path: &Path) -> Result<GradientBoostedModel> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read model artifact: {}", path.display()))?;
    let model: GradientBoostedModel = serde_json::from_str(&raw)
        .with_context(|| format!("parse model artifact: {}", path.display()))?;
    validate_model(&model).with_context(|| format!("invalid model artifact: {}", path.display()))?;
    Ok(model)
}

/// Load the ordered feature-name list.
pub fn load_feature_names(path: &Path) -> Result<Vec<String>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read feature list artifact: {}", path.display()))?;
    let names: Vec<String> = serde_json::from_str(&raw)
        .with_context(|| format!("parse feature list artifact: {}", path.display()))?;
    if names.is_empty() {
        bail!("feature list is empty");
    }
    Ok(names)
}

fn validate_model(model: &GradientBoostedModel) -> Result<()> {
    if model.model_type != "gradient_boosted_trees" {
        bail!("unsupported model type: {}", model.model_type);
    }
    if model.num_features == 0 {
        bail!("model declares zero features");
    }
    if model.trees.is_empty() {
        bail!("model has no trees");
    }
    for (tree_index, tree) in model.trees.iter().enumerate() {
        if tree.nodes.is_empty() {
            bail!("tree {tree_index} has no nodes");
        }
        for (node_index, node) in tree.nodes.iter().enumerate() {
            let TreeNode::Split {
                feature,
                left,
                right,
                ..
            } = node
            else {
                continue;
            };
            if *feature >= model.num_features {
                bail!(
                    "tree {tree_index} node {node_index} splits on feature {feature}, \
                     model has {} features",
                    model.num_features
                );
            }
            // Children must point forward so every walk terminates.
            if *left <= node_index || *right <= node_index {
                bail!("tree {tree_index} node {node_index} has a backward child reference");
            }
            if *left >= tree.nodes.len() || *right >= tree.nodes.len() {
                bail!("tree {tree_index} node {node_index} has a child beyond the node array");
            }
        }
    }
    Ok(())
}
