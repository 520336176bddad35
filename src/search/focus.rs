use super::normalize_query;
use crate::layout::{FocusConfig, NodeId, PositionedNode};
use serde::Serialize;

/// Camera directive for the rendering surface: centre on `(x, y)` at `zoom`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FocusTarget {
    pub node: NodeId,
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
    pub duration_ms: u64,
}

/// Jump to node: the first positioned node whose name or description contains
/// `query`, case-insensitively.
///
/// A node without a description can only match on its name.
pub fn focus_on(
    nodes: &[PositionedNode<'_>],
    query: &str,
    config: &FocusConfig,
) -> Option<FocusTarget> {
    let needle = normalize_query(query)?;
    let node = nodes.iter().find(|node| {
        node.label().to_lowercase().contains(&needle)
            || node
                .payload
                .description
                .as_deref()
                .is_some_and(|desc| desc.to_lowercase().contains(&needle))
    })?;

    tracing::debug!(query, node = %node.id, "jump target found");
    Some(FocusTarget {
        node: node.id,
        x: node.position.x,
        y: node.position.y,
        zoom: config.zoom,
        duration_ms: config.duration_ms,
    })
}
