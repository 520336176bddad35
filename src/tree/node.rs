use serde::{Deserialize, Deserializer, Serialize};
use std::borrow::Cow;
use std::fmt;

/// Marker appended to names that occur more than once in a source export.
pub const DUPLICATE_MARKER: &str = "__duplicate";

/// The kind of a pipeline node.
///
/// The set of kinds is open: anything that is not one of the known labels is kept
/// verbatim in `Other` and receives the neutral visual treatment.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NodeType {
    Plan,
    Task,
    Cycle,
    Process,
    Job,
    Other(String),
}

impl NodeType {
    /// The label as it appears in source data (`"PLAN"`, `"JOB"`, ...).
    pub fn as_str(&self) -> &str {
        match self {
            NodeType::Plan => "PLAN",
            NodeType::Task => "TASK",
            NodeType::Cycle => "CYCLE",
            NodeType::Process => "PROCESS",
            NodeType::Job => "JOB",
            NodeType::Other(label) => label,
        }
    }

    /// The badge text shown to users. A missing type reads as `N/A`.
    pub fn badge(&self) -> &str {
        match self.as_str() {
            "" => "N/A",
            label => label,
        }
    }

    /// Cycles and processes are the grouping unit reported in the "task" column.
    pub fn is_task_context(&self) -> bool {
        matches!(self, NodeType::Cycle | NodeType::Process)
    }

    pub fn is_job(&self) -> bool {
        matches!(self, NodeType::Job)
    }

    /// Hex colour associated with this kind of node.
    pub fn color(&self) -> &'static str {
        match self {
            NodeType::Plan => "#FF5C00",
            NodeType::Task => "#7B61FF",
            NodeType::Cycle => "#50C878",
            NodeType::Process => "#9B59B6",
            NodeType::Job => "#4A90E2",
            NodeType::Other(_) => NEUTRAL_COLOR,
        }
    }
}

/// Colour used for unknown node kinds and for edges that are not emphasised.
pub const NEUTRAL_COLOR: &str = "#95A5A6";

impl Default for NodeType {
    fn default() -> Self {
        NodeType::Other(String::new())
    }
}

impl From<String> for NodeType {
    fn from(label: String) -> Self {
        match label.as_str() {
            "PLAN" => NodeType::Plan,
            "TASK" => NodeType::Task,
            "CYCLE" => NodeType::Cycle,
            "PROCESS" => NodeType::Process,
            "JOB" => NodeType::Job,
            _ => NodeType::Other(label),
        }
    }
}

impl From<&str> for NodeType {
    fn from(label: &str) -> Self {
        NodeType::from(label.to_string())
    }
}

impl From<NodeType> for String {
    fn from(node_type: NodeType) -> Self {
        match node_type {
            NodeType::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// When and how a plan is triggered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub trigger_details: Option<String>,
}

/// Where the code behind a job lives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifact {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub talend_studio_project: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub git_repo_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub repo_last_update: Option<String>,
}

/// One node of a pipeline definition: a plan, task, cycle, process, job or
/// anything else the export contains.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TreeNode {
    pub name: String,
    #[serde(
        rename = "type",
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "is_untyped"
    )]
    pub node_type: NodeType,
    #[serde(default, alias = "desc", skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub schedule: Option<Schedule>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub dependency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub artifact: Option<Artifact>,
    #[serde(
        default,
        deserialize_with = "null_as_default",
        skip_serializing_if = "Vec::is_empty"
    )]
    pub children: Vec<TreeNode>,
}

impl TreeNode {
    pub fn new(name: impl Into<String>, node_type: impl Into<NodeType>) -> Self {
        Self {
            name: name.into(),
            node_type: node_type.into(),
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_workspace(mut self, workspace: impl Into<String>) -> Self {
        self.workspace = Some(workspace.into());
        self
    }

    pub fn with_children(mut self, children: Vec<TreeNode>) -> Self {
        self.children = children;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// The description, or `""` when absent.
    pub fn description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }

    /// The workspace, or `""` when absent.
    pub fn workspace(&self) -> &str {
        self.workspace.as_deref().unwrap_or_default()
    }

    /// The dependency, or `""` when absent.
    pub fn dependency(&self) -> &str {
        self.dependency.as_deref().unwrap_or_default()
    }

    /// The name as shown to users, with the duplicate marker removed.
    pub fn display_name(&self) -> Cow<'_, str> {
        display_name(&self.name)
    }

    /// Total number of nodes in this subtree, including `self`.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(TreeNode::subtree_len).sum::<usize>()
    }
}

/// Strips the first [`DUPLICATE_MARKER`] from `name`.
pub fn display_name(name: &str) -> Cow<'_, str> {
    if name.contains(DUPLICATE_MARKER) {
        Cow::Owned(name.replacen(DUPLICATE_MARKER, "", 1))
    } else {
        Cow::Borrowed(name)
    }
}

fn is_untyped(node_type: &NodeType) -> bool {
    node_type.as_str().is_empty()
}

// Exports write `null` for missing children and types.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
