use super::config::LayoutConfig;
use super::graph::{Edge, Graph, NodeId, Position, PositionedNode};
use crate::tree::{NodePath, TreeNode};

/// Places a forest on a left-to-right grid: one column per depth level, one row per
/// leaf, every parent vertically centred over the rows of its children.
#[derive(Debug, Clone, Default)]
pub struct LayoutEngine {
    config: LayoutConfig,
}

/// Result of laying out one subtree.
struct Subtree<'a> {
    nodes: Vec<PositionedNode<'a>>,
    edges: Vec<Edge>,
    /// First free row below the subtree.
    next_y: f64,
    /// First unused sequence number.
    next_id: usize,
}

impl LayoutEngine {
    pub fn new(config: LayoutConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Lays out every plan in its own vertical band.
    ///
    /// The result depends only on the shape and order of `forest`, so two passes over
    /// the same input produce identical ids and coordinates.
    pub fn layout<'a>(&self, forest: &'a [TreeNode]) -> Graph<'a> {
        let mut graph = Graph::default();
        let mut cursor = 0.0;
        let mut next_id = 0;

        for (index, plan) in forest.iter().enumerate() {
            let band = self.layout_subtree(plan, NodePath::root(index), cursor, next_id);
            graph.nodes.extend(band.nodes);
            graph.edges.extend(band.edges);
            cursor = band.next_y + self.config.band_gap;
            next_id = band.next_id;
        }

        tracing::debug!(
            plans = forest.len(),
            nodes = graph.nodes.len(),
            edges = graph.edges.len(),
            "layout complete"
        );
        graph
    }

    fn layout_subtree<'a>(
        &self,
        node: &'a TreeNode,
        path: NodePath,
        start_y: f64,
        first_id: usize,
    ) -> Subtree<'a> {
        let id = NodeId(first_id);
        let column = path.depth();
        let x = column as f64 * self.config.column_spacing + self.config.margin_x;

        if node.is_leaf() {
            return Subtree {
                nodes: vec![positioned(id, column, x, start_y, path, node)],
                edges: Vec::new(),
                next_y: start_y + self.config.row_spacing,
                next_id: first_id + 1,
            };
        }

        let mut descendants = Vec::new();
        let mut edges = Vec::new();
        let mut child_ids = Vec::with_capacity(node.children.len());
        let mut cursor = start_y;
        let mut next_id = first_id + 1;

        for (index, child) in node.children.iter().enumerate() {
            child_ids.push(NodeId(next_id));
            let sub = self.layout_subtree(child, path.child(index), cursor, next_id);
            descendants.extend(sub.nodes);
            edges.extend(sub.edges);
            cursor = sub.next_y;
            next_id = sub.next_id;
        }
        edges.extend(child_ids.into_iter().map(|child| Edge::new(id, child)));

        let span = cursor - start_y;
        let y = start_y + (span - self.config.node_height) / 2.0;
        tracing::trace!(%id, name = %node.name, x, y, span, "placed parent");

        let mut nodes = Vec::with_capacity(descendants.len() + 1);
        nodes.push(positioned(id, column, x, y, path, node));
        nodes.extend(descendants);

        Subtree {
            nodes,
            edges,
            next_y: cursor,
            next_id,
        }
    }
}

fn positioned(
    id: NodeId,
    column: usize,
    x: f64,
    y: f64,
    path: NodePath,
    payload: &TreeNode,
) -> PositionedNode<'_> {
    PositionedNode {
        id,
        column,
        position: Position { x, y },
        path,
        payload,
        highlighted: false,
    }
}
