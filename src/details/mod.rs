use crate::tree::TreeNode;
use serde::Serialize;
use std::fmt;

/// The side panel shown for a selected node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeDetails {
    /// Display name, without the duplicate marker.
    pub title: String,
    /// Raw name, as used for identity.
    pub name: String,
    pub entries: Vec<DetailEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailEntry {
    pub label: &'static str,
    pub value: String,
}

impl NodeDetails {
    /// Value of the first entry labelled `label`.
    pub fn get(&self, label: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.label == label)
            .map(|e| e.value.as_str())
    }
}

impl From<&TreeNode> for NodeDetails {
    fn from(node: &TreeNode) -> Self {
        let mut entries = vec![
            entry("Type", node.node_type.as_str()),
            entry("Workspace", node.workspace()),
            entry("Description", node.description()),
        ];

        if let Some(schedule) = &node.schedule {
            entries.push(entry(
                "Trigger type",
                schedule.trigger_type.as_deref().unwrap_or_default(),
            ));
            entries.push(entry(
                "Trigger details",
                schedule.trigger_details.as_deref().unwrap_or_default(),
            ));
        }

        if !node.dependency().is_empty() {
            entries.push(entry("Dependency", node.dependency()));
        }

        if let Some(artifact) = &node.artifact {
            entries.push(entry(
                "Talend studio project",
                artifact.talend_studio_project.as_deref().unwrap_or_default(),
            ));
            entries.push(entry(
                "Github repo",
                artifact.git_repo_name.as_deref().unwrap_or_default(),
            ));
            entries.push(entry(
                "Repo last update",
                artifact.repo_last_update.as_deref().unwrap_or_default(),
            ));
        }

        Self {
            title: node.display_name().into_owned(),
            name: node.name.clone(),
            entries,
        }
    }
}

fn entry(label: &'static str, value: &str) -> DetailEntry {
    DetailEntry {
        label,
        value: value.to_string(),
    }
}

impl fmt::Display for NodeDetails {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        for e in &self.entries {
            writeln!(f, "{}: {}", e.label, e.value)?;
        }
        Ok(())
    }
}
