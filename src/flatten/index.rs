use crate::tree::{NodePath, TreeNode, display_name};
use itertools::Itertools;

/// A node as seen by the search index: the node itself plus where it sits.
#[derive(Debug, Clone)]
pub struct IndexedNode<'a> {
    pub node: &'a TreeNode,
    pub path: NodePath,
    /// Raw names of all ancestors, root first.
    pub ancestors: Vec<&'a str>,
}

impl<'a> IndexedNode<'a> {
    /// Ancestors and the node itself as a display string, e.g. `Nightly > Load > Job`.
    pub fn breadcrumb(&self) -> String {
        self.ancestors
            .iter()
            .copied()
            .chain(std::iter::once(self.node.name.as_str()))
            .map(display_name)
            .join(" > ")
    }
}

/// Walks the forest in pre-order and returns every node exactly once.
pub fn flatten_nodes(forest: &[TreeNode]) -> Vec<IndexedNode<'_>> {
    let mut out = Vec::new();
    for (index, root) in forest.iter().enumerate() {
        collect(root, NodePath::root(index), &mut Vec::new(), &mut out);
    }
    tracing::trace!(count = out.len(), "flattened forest for search");
    out
}

fn collect<'a>(
    node: &'a TreeNode,
    path: NodePath,
    ancestors: &mut Vec<&'a str>,
    out: &mut Vec<IndexedNode<'a>>,
) {
    out.push(IndexedNode {
        node,
        path: path.clone(),
        ancestors: ancestors.clone(),
    });

    ancestors.push(&node.name);
    for (index, child) in node.children.iter().enumerate() {
        collect(child, path.child(index), ancestors, out);
    }
    ancestors.pop();
}
