//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the etlgraph
//! crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use etlgraph::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let forest = Forest::from_file("path/to/data.json")?;
//! let graph = LayoutEngine::default().layout(&forest);
//! let rows = flatten_to_job_paths(&forest);
//!
//! println!("{} nodes, {} edges, {} rows", graph.nodes.len(), graph.edges.len(), rows.len());
//! # Ok(())
//! # }
//! ```

// Input model
pub use crate::data::Forest;
pub use crate::tree::{Artifact, IntoForest, NodePath, NodeType, Schedule, TreeNode};

// Layout
pub use crate::layout::{
    Edge, EdgeStyle, FocusConfig, Graph, LayoutConfig, LayoutEngine, NodeId, Position,
    PositionedNode,
};

// Flattening, search and filtering
pub use crate::flatten::{IndexedNode, JobPathRow, flatten_nodes, flatten_to_job_paths};
pub use crate::search::{FocusTarget, IdentityJoin, MatchSet, SearchHit, SearchIndex, focus_on};
pub use crate::table::{TableFilter, TableSummary};

// Interaction
pub use crate::details::NodeDetails;
pub use crate::selection::{Selection, SurfaceEvent};
pub use crate::view::{FlowView, FlowViewBuilder, ViewConfig};

// Error types
pub use crate::error::{ConversionError, LoadError};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
