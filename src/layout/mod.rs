pub mod config;
pub mod engine;
pub mod graph;

pub use config::{FocusConfig, LayoutConfig};
pub use engine::LayoutEngine;
pub use graph::{Edge, EdgeStyle, Graph, NodeId, Position, PositionedNode};
