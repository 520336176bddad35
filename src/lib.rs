//! # etlgraph - Layout and Search Engine for ETL Pipeline Definitions
//!
//! **etlgraph** turns a hierarchical pipeline export (plans containing tasks,
//! cycles, processes and jobs, nested to any depth) into the data a graph canvas and
//! a table need: positioned nodes and edges, plan → task → job rows, search
//! highlighting, jump targets and selection-driven edge styling.
//!
//! Drawing is somebody else's job. The crate emits plain serialisable structures
//! and consumes two events from the canvas: "node activated" and "background
//! activated".
//!
//! ## Core Workflow
//!
//! 1.  **Load Your Data**: Parse the export with `Forest::from_file`, or implement
//!     `IntoForest` for your own format.
//! 2.  **Build a View**: `FlowView::builder(&forest)` lays the forest out, indexes it
//!     for search and flattens it into table rows.
//! 3.  **Drive It**: feed queries with `set_query`, canvas events with `handle`, and
//!     read `nodes()`, `edges()` and `filtered_rows()` back after each change.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use etlgraph::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let forest = Forest::from_file("data.json")?;
//!     let mut view = FlowView::builder(&forest)
//!         .with_identity_join(IdentityJoin::Path)
//!         .build();
//!
//!     // Highlight everything that mentions "customer".
//!     view.set_query("customer");
//!     let lit = view.nodes().iter().filter(|n| n.highlighted).count();
//!     println!("{} nodes highlighted", lit);
//!
//!     // The canvas reported a click on the first node.
//!     view.handle(SurfaceEvent::NodeActivated(NodeId(0)));
//!     if let Some(details) = view.selected_details() {
//!         println!("{}", details);
//!     }
//!
//!     // Table view: only rows whose job mentions "load".
//!     view.set_table_filter(TableFilter::new("", "", "load"));
//!     println!("{}", view.table_summary());
//!     Ok(())
//! }
//! ```

pub mod data;
pub mod details;
pub mod error;
pub mod flatten;
pub mod layout;
pub mod prelude;
pub mod search;
pub mod selection;
pub mod table;
pub mod tree;
pub mod view;
