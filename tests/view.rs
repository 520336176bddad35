//! End-to-end tests: loading exports and driving a `FlowView` session.
mod common;
use common::*;
use etlgraph::error::{ConversionError, LoadError};
use etlgraph::prelude::*;
use std::io::Write;

#[test]
fn test_parse_export_json() {
    let forest = Forest::from_json_str(SAMPLE_EXPORT_JSON).unwrap();

    assert_eq!(forest.len(), 1);
    assert_eq!(forest.node_count(), 4);

    let finance = &forest[0];
    assert_eq!(finance.node_type, NodeType::Plan);
    let schedule = finance.schedule.as_ref().unwrap();
    assert_eq!(schedule.trigger_type.as_deref(), Some("CRON"));

    let close = &finance.children[0];
    assert_eq!(close.node_type, NodeType::Process);
    assert_eq!(close.description(), "Closing process");

    let ledger = &close.children[0];
    assert!(ledger.is_leaf());
    assert_eq!(ledger.dependency(), "Close");

    let mystery = &finance.children[1];
    assert_eq!(mystery.node_type, NodeType::Other(String::new()));
    assert_eq!(mystery.node_type.badge(), "N/A");
}

#[test]
fn test_load_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(SAMPLE_EXPORT_JSON.as_bytes()).unwrap();

    let forest = Forest::from_file(file.path()).unwrap();
    assert_eq!(forest.plans()[0].name, "Finance");
}

#[test]
fn test_load_errors() {
    let missing = Forest::from_file("/definitely/not/here.json").unwrap_err();
    match &missing {
        LoadError::Io { path, .. } => assert_eq!(path, "/definitely/not/here.json"),
        other => panic!("expected an I/O error, got {:?}", other),
    }
    assert!(missing.to_string().contains("not/here.json"));

    let garbled = Forest::from_json_str("[{\"name\": ").unwrap_err();
    assert!(matches!(garbled, LoadError::Json(_)));

    // The type field is optional but the name is not.
    let nameless = Forest::from_json_str(r#"[{"type": "PLAN"}]"#).unwrap_err();
    assert!(matches!(nameless, LoadError::Json(_)));
}

#[test]
fn test_into_forest_from_json_value() {
    let value = serde_json::json!([
        { "name": "P", "type": "PLAN", "children": [{ "name": "J", "type": "JOB" }] }
    ]);
    let forest = value.into_forest().unwrap();
    assert_eq!(forest.node_count(), 2);

    let not_array = serde_json::json!({ "name": "P" });
    let err = not_array.into_forest().unwrap_err();
    assert!(matches!(err, ConversionError::Validation(_)));
}

#[test]
fn test_forest_round_trips_through_json() {
    let forest = Forest::from_json_str(SAMPLE_EXPORT_JSON).unwrap();
    let json = serde_json::to_string(&forest).unwrap();

    // The untyped node is written without a type and reads back the same.
    assert!(!json.contains("\"type\":\"\""));
    assert_eq!(Forest::from_json_str(&json).unwrap(), forest);
}

#[test]
fn test_view_query_highlights_nodes() {
    let forest = create_sample_forest();
    let mut view = FlowView::new(&forest);

    assert!(view.matches().is_none());
    assert!(view.nodes().iter().all(|n| !n.highlighted));

    view.set_query("Export");
    assert_eq!(view.query(), "Export");
    assert_eq!(view.matches().map(|m| m.len()), Some(1));
    let lit: Vec<NodeId> = view.nodes().iter().filter(|n| n.highlighted).map(|n| n.id).collect();
    assert_eq!(lit, [NodeId(7)]);

    // The raw layout stays untouched.
    assert!(view.graph().nodes.iter().all(|n| !n.highlighted));

    view.clear_query();
    assert!(view.matches().is_none());
    assert!(view.nodes().iter().all(|n| !n.highlighted));
}

#[test]
fn test_view_jump_selects_node() {
    let forest = create_sample_forest();
    let mut view = FlowView::new(&forest);

    let target = view.jump("purges").unwrap();
    assert_eq!(target.node, NodeId(9));
    assert_eq!(view.selection().selected_id(), Some(NodeId(9)));

    let details = view.selected_details().unwrap();
    assert_eq!(details.title, "Housekeeping");
    assert_eq!(details.get("Description"), Some("Purges temp tables"));

    // A failed jump leaves the selection alone.
    assert!(view.jump("no such node").is_none());
    assert_eq!(view.selection().selected_id(), Some(NodeId(9)));
}

#[test]
fn test_view_pick_hit_closes_drop_down() {
    let forest = create_sample_forest();
    let mut view = FlowView::new(&forest);

    view.set_query("clean");
    let hits = view.search_hits();
    assert_eq!(hits.len(), 1);

    let target = view.pick_hit(&hits[0]).unwrap();
    assert_eq!(target.node, NodeId(4));
    assert_eq!((target.x, target.y), (1100.0, 120.0));
    assert_eq!(view.query(), "");
    assert!(view.search_hits().is_empty());
    assert_eq!(view.selection().selected_id(), Some(NodeId(4)));
}

#[test]
fn test_view_pick_hit_resolves_duplicate_by_path() {
    let forest = create_sample_forest();
    let mut view = FlowView::new(&forest);

    view.set_query("loadcustomers");
    let hits = view.search_hits();
    let duplicate = hits.iter().find(|h| h.name.ends_with("__duplicate")).unwrap();

    let target = view.pick_hit(duplicate).unwrap();
    assert_eq!(target.node, NodeId(12));
}

#[test]
fn test_hit_limit_from_builder() {
    let forest = create_sample_forest();
    let mut view = FlowView::builder(&forest).with_hit_limit(2).build();

    view.set_query("job");
    assert_eq!(view.search_hits().len(), 2);
    assert_eq!(view.config().hit_limit, 2);
}

#[test]
fn test_path_join_view() {
    let forest = create_sample_forest();
    let mut view = FlowView::builder(&forest)
        .with_identity_join(IdentityJoin::Path)
        .build();

    view.set_query("master data");
    let lit: Vec<&str> = view
        .nodes()
        .iter()
        .filter(|n| n.highlighted)
        .map(|n| n.label())
        .collect();
    assert_eq!(lit, ["LoadCustomers"]);
}

#[test]
fn test_details_for_plan_and_job() {
    let forest = Forest::from_json_str(SAMPLE_EXPORT_JSON).unwrap();
    let mut view = FlowView::new(&forest);

    view.handle(SurfaceEvent::NodeActivated(NodeId(0)));
    let plan = view.selected_details().unwrap();
    let labels: Vec<&str> = plan.entries.iter().map(|e| e.label).collect();
    assert_eq!(
        labels,
        ["Type", "Workspace", "Description", "Trigger type", "Trigger details"]
    );
    assert_eq!(plan.get("Trigger details"), Some("0 2 * * *"));
    assert!(plan.to_string().starts_with("Finance\nType: PLAN\nWorkspace: fin\n"));

    view.handle(SurfaceEvent::NodeActivated(NodeId(2)));
    let job = view.selected_details().unwrap();
    assert_eq!(job.get("Dependency"), Some("Close"));
    assert_eq!(job.get("Talend studio project"), Some("FIN_CORE"));
    assert_eq!(job.get("Github repo"), Some("fin-jobs"));
    assert_eq!(job.get("Repo last update"), Some("2024-03-01"));
    assert_eq!(job.get("Trigger type"), None);
    assert_eq!(job.get("Workspace"), Some(""));

    view.handle(SurfaceEvent::BackgroundActivated);
    assert!(view.selected_details().is_none());
}

#[test]
fn test_rendered_graph_serialises() {
    let forest = create_scenario_forest();
    let mut view = FlowView::new(&forest);
    view.set_query("c");
    view.handle(SurfaceEvent::NodeActivated(NodeId(2)));

    let json = serde_json::to_value(view.rendered()).unwrap();
    assert_eq!(json["nodes"].as_array().unwrap().len(), 5);
    assert_eq!(json["nodes"][2]["highlighted"], true);
    assert_eq!(json["edges"][0]["style"]["strokeWidth"], 2.5);
}

#[test]
fn test_view_config_defaults_fill_missing_fields() {
    let config: ViewConfig = serde_json::from_str(
        r#"{ "identity_join": "path", "layout": { "row_spacing": 80.0 } }"#,
    )
    .unwrap();

    assert_eq!(config.identity_join, IdentityJoin::Path);
    assert_eq!(config.layout.row_spacing, 80.0);
    assert_eq!(config.layout.column_spacing, 350.0);
    assert_eq!(config.focus, FocusConfig::default());
    assert_eq!(config.hit_limit, 100);

    let empty: ViewConfig = serde_json::from_str("{}").unwrap();
    assert_eq!(empty, ViewConfig::default());
}

#[test]
fn test_details_title_strips_duplicate_marker() {
    let forest = create_sample_forest();
    let mut view = FlowView::new(&forest);

    assert!(view.handle(SurfaceEvent::NodeActivated(NodeId(12))));
    let details = view.selected_details().unwrap();
    assert_eq!(details.title, "LoadCustomers");
    assert_eq!(details.name, "LoadCustomers__duplicate");
    assert!(details.to_string().starts_with("LoadCustomers\n"));
}
