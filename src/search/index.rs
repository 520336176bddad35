use super::normalize_query;
use crate::flatten::{IndexedNode, flatten_nodes};
use crate::layout::PositionedNode;
use crate::tree::{NodePath, TreeNode};
use ahash::AHashSet;
use serde::{Deserialize, Serialize};

/// How search matches are mapped back onto positioned nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdentityJoin {
    /// Join on the raw node name. Every node that shares a name with a match is
    /// highlighted, even if only one of them matched.
    #[default]
    Name,
    /// Join on the structural path. Only the nodes that actually matched light up.
    Path,
}

/// Every node of a forest, in pre-order, ready to be matched against a query.
#[derive(Debug, Clone)]
pub struct SearchIndex<'a> {
    entries: Vec<IndexedNode<'a>>,
}

impl<'a> SearchIndex<'a> {
    pub fn new(forest: &'a [TreeNode]) -> Self {
        Self {
            entries: flatten_nodes(forest),
        }
    }

    pub fn entries(&self) -> &[IndexedNode<'a>] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Matches `query` against name, type and description of every node.
    ///
    /// Returns `None` for a blank query: filtering is off, which is different from a
    /// query that matched nothing.
    pub fn search(&self, query: &str) -> Option<MatchSet<'a>> {
        let needle = normalize_query(query)?;
        let mut set = MatchSet::default();
        for entry in self.matching(&needle) {
            set.names.insert(entry.node.name.as_str());
            set.paths.insert(entry.path.clone());
        }
        tracing::debug!(query, matches = set.paths.len(), "search");
        Some(set)
    }

    /// The drop-down list for `query`: matching nodes in pre-order, at most `limit`.
    pub fn hits(&self, query: &str, limit: usize) -> Vec<SearchHit> {
        let Some(needle) = normalize_query(query) else {
            return Vec::new();
        };
        self.matching(&needle)
            .take(limit)
            .map(SearchHit::from_entry)
            .collect()
    }

    fn matching<'s>(
        &'s self,
        needle: &'s str,
    ) -> impl Iterator<Item = &'s IndexedNode<'a>> + 's {
        self.entries
            .iter()
            .filter(move |entry| node_matches(entry.node, needle))
    }
}

fn node_matches(node: &TreeNode, needle: &str) -> bool {
    node.name.to_lowercase().contains(needle)
        || node.node_type.as_str().to_lowercase().contains(needle)
        || node
            .description
            .as_deref()
            .is_some_and(|desc| desc.to_lowercase().contains(needle))
}

/// The identities matched by one query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchSet<'a> {
    names: AHashSet<&'a str>,
    paths: AHashSet<NodePath>,
}

impl<'a> MatchSet<'a> {
    /// Number of matched nodes.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn contains(&self, node: &PositionedNode<'_>, join: IdentityJoin) -> bool {
        match join {
            IdentityJoin::Name => self.names.contains(node.label()),
            IdentityJoin::Path => self.paths.contains(&node.path),
        }
    }

    /// Returns a copy of `nodes` with `highlighted` set on every matched node and
    /// cleared everywhere else.
    pub fn apply_highlight<'n>(
        &self,
        nodes: &[PositionedNode<'n>],
        join: IdentityJoin,
    ) -> Vec<PositionedNode<'n>> {
        nodes
            .iter()
            .map(|node| PositionedNode {
                highlighted: self.contains(node, join),
                ..node.clone()
            })
            .collect()
    }
}

/// One entry of the search drop-down.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchHit {
    /// Raw name, used to find the node again.
    pub name: String,
    /// Name as displayed, without the duplicate marker.
    pub label: String,
    pub node_type: String,
    pub color: &'static str,
    pub workspace: String,
    pub breadcrumb: String,
    pub path: NodePath,
}

impl SearchHit {
    fn from_entry(entry: &IndexedNode<'_>) -> Self {
        let node = entry.node;
        Self {
            name: node.name.clone(),
            label: node.display_name().into_owned(),
            node_type: node.node_type.badge().to_string(),
            color: node.node_type.color(),
            workspace: node.workspace().to_string(),
            breadcrumb: entry.breadcrumb(),
            path: entry.path.clone(),
        }
    }
}
