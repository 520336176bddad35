//! Common test utilities for building pipeline forests.
use etlgraph::prelude::*;

/// Shorthand for a childless node.
#[allow(dead_code)]
pub fn leaf(name: &str, node_type: &str) -> TreeNode {
    TreeNode::new(name, node_type)
}

/// Shorthand for a node with children.
#[allow(dead_code)]
pub fn branch(name: &str, node_type: &str, children: Vec<TreeNode>) -> TreeNode {
    TreeNode::new(name, node_type).with_children(children)
}

/// One plan `P` → task `T` → cycle `C` → jobs `J1`, `J2`.
#[allow(dead_code)]
pub fn create_scenario_forest() -> Vec<TreeNode> {
    vec![branch(
        "P",
        "PLAN",
        vec![branch(
            "T",
            "TASK",
            vec![branch(
                "C",
                "CYCLE",
                vec![leaf("J1", "JOB"), leaf("J2", "JOB")],
            )],
        )],
    )]
}

/// A more realistic export with two plans, an empty plan, a process, an unknown
/// node type and a duplicated job name.
///
/// ```text
/// Nightly (PLAN)
/// ├── Ingest (TASK)
/// │   └── CustomerCycle (CYCLE)
/// │       ├── LoadCustomers (JOB)
/// │       └── CleanCustomers (JOB)
/// ├── Reporting (TASK)
/// │   └── BuildReports (PROCESS)
/// │       ├── ExportSales (JOB)
/// │       └── Notify (WEBHOOK)
/// └── Housekeeping (TASK)
/// Weekly (PLAN)
/// └── Archive (CYCLE)
///     └── LoadCustomers__duplicate (JOB)
/// Dormant (PLAN)
/// ```
#[allow(dead_code)]
pub fn create_sample_forest() -> Vec<TreeNode> {
    vec![
        branch(
            "Nightly",
            "PLAN",
            vec![
                branch(
                    "Ingest",
                    "TASK",
                    vec![
                        branch(
                            "CustomerCycle",
                            "CYCLE",
                            vec![
                                leaf("LoadCustomers", "JOB")
                                    .with_description("Loads the customer master data")
                                    .with_workspace("crm"),
                                leaf("CleanCustomers", "JOB")
                                    .with_description("Removes stale customer rows"),
                            ],
                        )
                        .with_workspace("ingest-ws")
                        .with_description("Customer refresh cycle"),
                    ],
                ),
                branch(
                    "Reporting",
                    "TASK",
                    vec![branch(
                        "BuildReports",
                        "PROCESS",
                        vec![
                            leaf("ExportSales", "JOB").with_description("Exports sales to the DWH"),
                            leaf("Notify", "WEBHOOK"),
                        ],
                    )],
                ),
                leaf("Housekeeping", "TASK").with_description("Purges temp tables"),
            ],
        )
        .with_description("Nightly batch"),
        branch(
            "Weekly",
            "PLAN",
            vec![branch(
                "Archive",
                "CYCLE",
                vec![leaf("LoadCustomers__duplicate", "JOB")],
            )],
        ),
        leaf("Dormant", "PLAN"),
    ]
}

/// The raw JSON form of a small export, with the optional fields exported tools
/// tend to produce.
#[allow(dead_code)]
pub const SAMPLE_EXPORT_JSON: &str = r#"[
  {
    "name": "Finance",
    "type": "PLAN",
    "description": "Month-end close",
    "workspace": "fin",
    "schedule": { "trigger_type": "CRON", "trigger_details": "0 2 * * *" },
    "children": [
      {
        "name": "Close",
        "type": "PROCESS",
        "desc": "Closing process",
        "children": [
          {
            "name": "PostLedger",
            "type": "JOB",
            "dependency": "Close",
            "artifact": {
              "talend_studio_project": "FIN_CORE",
              "git_repo_name": "fin-jobs",
              "repo_last_update": "2024-03-01"
            },
            "children": null
          }
        ]
      },
      { "name": "Mystery", "children": [] }
    ]
  }
]"#;
