use crate::tree::{NodePath, NodeType, TreeNode};
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Identifier of a positioned node, rendered as `node-<n>`.
///
/// `n` is the node's pre-order sequence number in one layout pass, so ids are stable
/// across passes over the same forest and meaningless across different forests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "node-{}", self.0)
    }
}

impl FromStr for NodeId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.strip_prefix("node-")
            .and_then(|n| n.parse().ok())
            .map(NodeId)
            .ok_or_else(|| format!("'{}' is not a node id (expected node-<n>)", s))
    }
}

impl Serialize for NodeId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// A tree node placed on the canvas.
#[derive(Debug, Clone, PartialEq)]
pub struct PositionedNode<'a> {
    pub id: NodeId,
    /// Depth in the tree; roots are column 0.
    pub column: usize,
    pub position: Position,
    pub path: NodePath,
    pub payload: &'a TreeNode,
    /// Set by search; the rendering surface decides how to show it.
    pub highlighted: bool,
}

impl<'a> PositionedNode<'a> {
    /// The raw name, used for identity joins.
    pub fn label(&self) -> &'a str {
        &self.payload.name
    }

    pub fn node_type(&self) -> &'a NodeType {
        &self.payload.node_type
    }
}

// Children are left out of `data`: the graph already carries them as nodes.
impl Serialize for PositionedNode<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let node = self.payload;
        let display_name = node.display_name();
        let mut state = serializer.serialize_struct("PositionedNode", 6)?;
        state.serialize_field("id", &self.id)?;
        state.serialize_field("column", &self.column)?;
        state.serialize_field("position", &self.position)?;
        state.serialize_field("path", &self.path)?;
        state.serialize_field("highlighted", &self.highlighted)?;
        state.serialize_field(
            "data",
            &NodeData {
                label: &node.name,
                display_name: &display_name,
                node_type: node.node_type.badge(),
                color: node.node_type.color(),
                desc: node.description(),
                workspace: node.workspace(),
            },
        )?;
        state.end()
    }
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct NodeData<'n> {
    label: &'n str,
    display_name: &'n str,
    #[serde(rename = "type")]
    node_type: &'n str,
    color: &'static str,
    desc: &'n str,
    workspace: &'n str,
}

/// Stroke of an edge and its arrow marker.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeStyle {
    pub stroke: &'static str,
    pub stroke_width: f32,
}

impl EdgeStyle {
    /// Style of every edge straight out of layout.
    pub const INITIAL: EdgeStyle = EdgeStyle {
        stroke: "#BDC3C7",
        stroke_width: 2.0,
    };

    /// Style of edges that are not attached to the selected node.
    pub const NEUTRAL: EdgeStyle = EdgeStyle {
        stroke: crate::tree::NEUTRAL_COLOR,
        stroke_width: 1.5,
    };

    /// Style of edges attached to a selected node of `node_type`.
    pub fn emphasised(node_type: &NodeType) -> Self {
        Self {
            stroke: node_type.color(),
            stroke_width: 2.5,
        }
    }
}

/// A parent → child connection.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub id: String,
    pub source: NodeId,
    pub target: NodeId,
    pub style: EdgeStyle,
}

impl Edge {
    pub fn new(source: NodeId, target: NodeId) -> Self {
        Self {
            id: format!("edge-{}-{}", source, target),
            source,
            target,
            style: EdgeStyle::INITIAL,
        }
    }

    pub fn touches(&self, id: NodeId) -> bool {
        self.source == id || self.target == id
    }
}

/// Output of one layout pass, in the shape the rendering surface consumes.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Graph<'a> {
    pub nodes: Vec<PositionedNode<'a>>,
    pub edges: Vec<Edge>,
}

impl<'a> Graph<'a> {
    pub fn node(&self, id: NodeId) -> Option<&PositionedNode<'a>> {
        // Nodes are stored in id order.
        self.nodes.get(id.0).filter(|n| n.id == id)
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
