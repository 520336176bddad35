use crate::error::LoadError;
use crate::tree::TreeNode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::ops::Deref;
use std::path::Path;

/// An ordered collection of plans, matching the top-level JSON array of an export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Forest(Vec<TreeNode>);

impl Forest {
    pub fn new(plans: Vec<TreeNode>) -> Self {
        Self(plans)
    }

    /// Parses a forest from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self, LoadError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a forest from a JSON file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.display().to_string(),
            source,
        })?;
        let forest = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            plans = forest.len(),
            nodes = forest.node_count(),
            "loaded forest"
        );
        Ok(forest)
    }

    pub fn plans(&self) -> &[TreeNode] {
        &self.0
    }

    pub fn into_plans(self) -> Vec<TreeNode> {
        self.0
    }

    /// Number of nodes across all plans.
    pub fn node_count(&self) -> usize {
        self.0.iter().map(TreeNode::subtree_len).sum()
    }
}

impl Deref for Forest {
    type Target = [TreeNode];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<TreeNode>> for Forest {
    fn from(plans: Vec<TreeNode>) -> Self {
        Self(plans)
    }
}
