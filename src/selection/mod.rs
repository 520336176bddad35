//! Selection state and the edge styling it drives.
//!
//! The rendering surface reports two kinds of events: a node was activated, or the
//! empty background was. Activating a node emphasises the edges attached to it in
//! the node's colour; activating the background returns every edge to neutral.
//! Selection never touches node highlighting, which belongs to search.

use crate::layout::{Edge, EdgeStyle, Graph, NodeId};
use crate::tree::NodeType;

/// An interaction reported by the rendering surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    NodeActivated(NodeId),
    BackgroundActivated,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Selection {
    #[default]
    NoSelection,
    NodeSelected { id: NodeId, node_type: NodeType },
}

impl Selection {
    pub fn selected_id(&self) -> Option<NodeId> {
        match self {
            Selection::NoSelection => None,
            Selection::NodeSelected { id, .. } => Some(*id),
        }
    }

    pub fn is_selected(&self) -> bool {
        matches!(self, Selection::NodeSelected { .. })
    }

    /// The state after `event`, or `None` when the event does not apply to `graph`
    /// (an activation for an id the graph does not contain).
    pub fn on_event(&self, event: SurfaceEvent, graph: &Graph<'_>) -> Option<Selection> {
        match event {
            SurfaceEvent::BackgroundActivated => {
                tracing::debug!("selection cleared");
                Some(Selection::NoSelection)
            }
            SurfaceEvent::NodeActivated(id) => match graph.node(id) {
                Some(node) => {
                    tracing::debug!(%id, node_type = %node.node_type(), "node selected");
                    Some(Selection::NodeSelected {
                        id,
                        node_type: node.node_type().clone(),
                    })
                }
                None => {
                    tracing::warn!(%id, "activation for unknown node ignored");
                    None
                }
            },
        }
    }

    /// Style of `edge` under this selection.
    pub fn style_for(&self, edge: &Edge) -> EdgeStyle {
        match self {
            Selection::NodeSelected { id, node_type } if edge.touches(*id) => {
                EdgeStyle::emphasised(node_type)
            }
            _ => EdgeStyle::NEUTRAL,
        }
    }

    /// Copies `edges` with every style recomputed for this selection.
    pub fn restyle(&self, edges: &[Edge]) -> Vec<Edge> {
        edges
            .iter()
            .map(|edge| Edge {
                style: self.style_for(edge),
                ..edge.clone()
            })
            .collect()
    }
}
