//! Tests for selection state and the edge styling it drives.
mod common;
use common::*;
use etlgraph::prelude::*;

#[test]
fn test_activation_emphasises_touching_edges() {
    let forest = create_scenario_forest();
    let graph = LayoutEngine::default().layout(&forest);

    let selection = Selection::default()
        .on_event(SurfaceEvent::NodeActivated(NodeId(2)), &graph)
        .unwrap();
    assert_eq!(selection.selected_id(), Some(NodeId(2)));

    for edge in selection.restyle(&graph.edges) {
        if edge.touches(NodeId(2)) {
            assert_eq!(edge.style.stroke, "#50C878", "edge {}", edge.id);
            assert_eq!(edge.style.stroke_width, 2.5);
        } else {
            assert_eq!(edge.style, EdgeStyle::NEUTRAL, "edge {}", edge.id);
        }
    }

    let emphasised = selection
        .restyle(&graph.edges)
        .iter()
        .filter(|e| e.style.stroke_width == 2.5)
        .count();
    // P → T is the only edge away from C.
    assert_eq!(emphasised, 3);
}

#[test]
fn test_incoming_edge_uses_selected_node_colour() {
    let forest = create_scenario_forest();
    let graph = LayoutEngine::default().layout(&forest);

    let selection = Selection::NoSelection
        .on_event(SurfaceEvent::NodeActivated(NodeId(4)), &graph)
        .unwrap();
    let edges = selection.restyle(&graph.edges);

    let incoming = edges.iter().find(|e| e.target == NodeId(4)).unwrap();
    assert_eq!(incoming.style, EdgeStyle::emphasised(&NodeType::Job));
    assert_eq!(incoming.style.stroke, "#4A90E2");
}

#[test]
fn test_reactivating_same_node_is_idempotent() {
    let forest = create_sample_forest();
    let graph = LayoutEngine::default().layout(&forest);
    let event = SurfaceEvent::NodeActivated(NodeId(6));

    let once = Selection::default().on_event(event, &graph).unwrap();
    let twice = once.on_event(event, &graph).unwrap();

    assert_eq!(once, twice);
    assert_eq!(once.restyle(&graph.edges), twice.restyle(&graph.edges));
}

#[test]
fn test_background_resets_every_edge() {
    let forest = create_sample_forest();
    let graph = LayoutEngine::default().layout(&forest);

    let selected = Selection::default()
        .on_event(SurfaceEvent::NodeActivated(NodeId(0)), &graph)
        .unwrap();
    let cleared = selected
        .on_event(SurfaceEvent::BackgroundActivated, &graph)
        .unwrap();

    assert_eq!(cleared, Selection::NoSelection);
    assert!(!cleared.is_selected());
    assert!(
        cleared
            .restyle(&graph.edges)
            .iter()
            .all(|e| e.style == EdgeStyle::NEUTRAL)
    );
}

#[test]
fn test_unknown_node_is_ignored() {
    let forest = create_scenario_forest();
    let graph = LayoutEngine::default().layout(&forest);

    let selection = Selection::default();
    assert!(
        selection
            .on_event(SurfaceEvent::NodeActivated(NodeId(99)), &graph)
            .is_none()
    );
}

#[test]
fn test_unknown_type_selection_uses_neutral_colour() {
    let forest = create_sample_forest();
    let graph = LayoutEngine::default().layout(&forest);

    // Notify (WEBHOOK) is node 8.
    let selection = Selection::default()
        .on_event(SurfaceEvent::NodeActivated(NodeId(8)), &graph)
        .unwrap();
    let edges = selection.restyle(&graph.edges);
    let incoming = edges.iter().find(|e| e.target == NodeId(8)).unwrap();

    assert_eq!(incoming.style.stroke, "#95A5A6");
    assert_eq!(incoming.style.stroke_width, 2.5);
}

#[test]
fn test_view_edges_follow_selection() {
    let forest = create_scenario_forest();
    let mut view = FlowView::new(&forest);

    assert!(view.edges().iter().all(|e| e.style == EdgeStyle::INITIAL));
    assert!(!view.selection().is_selected());

    assert!(view.handle(SurfaceEvent::NodeActivated(NodeId(1))));
    let emphasised: Vec<&str> = view
        .edges()
        .iter()
        .filter(|e| e.style.stroke_width == 2.5)
        .map(|e| e.id.as_str())
        .collect();
    assert_eq!(emphasised.len(), 2);
    assert!(emphasised.contains(&"edge-node-0-node-1"));
    assert!(emphasised.contains(&"edge-node-1-node-2"));

    // An unknown id changes nothing.
    let before = view.edges().to_vec();
    assert!(!view.handle(SurfaceEvent::NodeActivated(NodeId(42))));
    assert_eq!(view.edges(), before.as_slice());
    assert_eq!(view.selection().selected_id(), Some(NodeId(1)));

    assert!(view.handle(SurfaceEvent::BackgroundActivated));
    assert!(view.edges().iter().all(|e| e.style == EdgeStyle::NEUTRAL));
}

#[test]
fn test_selection_does_not_touch_highlighting() {
    let forest = create_scenario_forest();
    let mut view = FlowView::new(&forest);

    view.set_query("j1");
    view.handle(SurfaceEvent::NodeActivated(NodeId(0)));
    let lit: Vec<&str> = view
        .nodes()
        .iter()
        .filter(|n| n.highlighted)
        .map(|n| n.label())
        .collect();
    assert_eq!(lit, ["J1"]);
}
