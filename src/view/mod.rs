//! The interactive session behind the graph and table views.
//!
//! A `FlowView` borrows a forest and keeps every derived structure for it: the
//! layout, the search index, the job rows, and the current query, selection and
//! table filter. Each input change rebuilds the structures that depend on it.

mod builder;

pub use builder::{FlowViewBuilder, ViewConfig};

use crate::details::NodeDetails;
use crate::flatten::{JobPathRow, flatten_to_job_paths};
use crate::layout::{Edge, Graph, LayoutEngine, PositionedNode};
use crate::search::{FocusTarget, MatchSet, SearchHit, SearchIndex, focus_on};
use crate::selection::{Selection, SurfaceEvent};
use crate::table::{TableFilter, TableSummary};
use crate::tree::TreeNode;

pub struct FlowView<'a> {
    config: ViewConfig,
    graph: Graph<'a>,
    index: SearchIndex<'a>,
    rows: Vec<JobPathRow>,
    query: String,
    matches: Option<MatchSet<'a>>,
    /// `graph.nodes` with search highlighting applied.
    nodes: Vec<PositionedNode<'a>>,
    selection: Selection,
    /// `graph.edges` styled for the current selection.
    edges: Vec<Edge>,
    table_filter: TableFilter,
}

impl<'a> FlowView<'a> {
    pub fn builder(forest: &'a [TreeNode]) -> FlowViewBuilder<'a> {
        FlowViewBuilder::new(forest)
    }

    /// A view with default configuration.
    pub fn new(forest: &'a [TreeNode]) -> Self {
        Self::builder(forest).build()
    }

    pub(crate) fn from_parts(forest: &'a [TreeNode], config: ViewConfig) -> Self {
        let graph = LayoutEngine::new(config.layout).layout(forest);
        let nodes = graph.nodes.clone();
        let edges = graph.edges.clone();
        Self {
            config,
            index: SearchIndex::new(forest),
            rows: flatten_to_job_paths(forest),
            graph,
            query: String::new(),
            matches: None,
            nodes,
            selection: Selection::NoSelection,
            edges,
            table_filter: TableFilter::default(),
        }
    }

    pub fn config(&self) -> &ViewConfig {
        &self.config
    }

    /// The layout as computed, without search or selection applied.
    pub fn graph(&self) -> &Graph<'a> {
        &self.graph
    }

    /// Nodes for the rendering surface, highlighted by the current query.
    pub fn nodes(&self) -> &[PositionedNode<'a>] {
        &self.nodes
    }

    /// Edges for the rendering surface, styled by the current selection.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Nodes and edges as one graph, ready to serialise.
    pub fn rendered(&self) -> Graph<'a> {
        Graph {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// Matches of the current query; `None` while the query is blank.
    pub fn matches(&self) -> Option<&MatchSet<'a>> {
        self.matches.as_ref()
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
        self.matches = self.index.search(&self.query);
        self.nodes = match &self.matches {
            Some(set) => set.apply_highlight(&self.graph.nodes, self.config.identity_join),
            None => self.graph.nodes.clone(),
        };
    }

    pub fn clear_query(&mut self) {
        self.set_query(String::new());
    }

    /// The search drop-down for the current query.
    pub fn search_hits(&self) -> Vec<SearchHit> {
        self.index.hits(&self.query, self.config.hit_limit)
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Applies a surface event. Returns `false` when the event was ignored.
    pub fn handle(&mut self, event: SurfaceEvent) -> bool {
        match self.selection.on_event(event, &self.graph) {
            Some(next) => {
                self.selection = next;
                self.edges = self.selection.restyle(&self.graph.edges);
                true
            }
            None => false,
        }
    }

    /// Jump to node: finds the first node whose name or description contains
    /// `query`, selects it and returns where the camera should go.
    pub fn jump(&mut self, query: &str) -> Option<FocusTarget> {
        let target = focus_on(&self.graph.nodes, query, &self.config.focus)?;
        self.handle(SurfaceEvent::NodeActivated(target.node));
        Some(target)
    }

    /// Selects the node behind a drop-down entry and closes the drop-down.
    pub fn pick_hit(&mut self, hit: &SearchHit) -> Option<FocusTarget> {
        let node = self.graph.nodes.iter().find(|n| n.path == hit.path)?;
        let target = FocusTarget {
            node: node.id,
            x: node.position.x,
            y: node.position.y,
            zoom: self.config.focus.zoom,
            duration_ms: self.config.focus.duration_ms,
        };
        self.handle(SurfaceEvent::NodeActivated(target.node));
        self.clear_query();
        Some(target)
    }

    /// Details panel for the selected node.
    pub fn selected_details(&self) -> Option<NodeDetails> {
        let id = self.selection.selected_id()?;
        self.graph.node(id).map(|node| NodeDetails::from(node.payload))
    }

    /// Every plan → task → job row, unfiltered.
    pub fn table_rows(&self) -> &[JobPathRow] {
        &self.rows
    }

    pub fn table_filter(&self) -> &TableFilter {
        &self.table_filter
    }

    pub fn set_table_filter(&mut self, filter: TableFilter) {
        self.table_filter = filter;
    }

    pub fn filtered_rows(&self) -> Vec<&JobPathRow> {
        self.table_filter.apply(&self.rows)
    }

    pub fn table_summary(&self) -> TableSummary {
        self.table_filter.summary(&self.rows)
    }
}
