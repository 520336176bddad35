use clap::{Parser, Subcommand};
use etlgraph::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Lay out, search and flatten ETL pipeline exports
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the pipeline export (a JSON array of plans)
    data_path: String,

    /// Optional JSON file with view configuration (layout geometry, jump zoom, ...)
    #[arg(short, long)]
    config: Option<String>,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the positioned graph as JSON
    Graph {
        /// Highlight nodes matching this query
        #[arg(short, long)]
        query: Option<String>,
        /// Select a node (e.g. node-3) to restyle its edges
        #[arg(short, long)]
        select: Option<String>,
    },
    /// Print the plan / task / job table
    Table {
        #[arg(long, default_value = "")]
        plan: String,
        #[arg(long, default_value = "")]
        task: String,
        #[arg(long, default_value = "")]
        job: String,
        /// Print rows as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List the nodes matching a query
    Search { query: String },
    /// Print the camera target for jumping to the first node matching a query
    Jump { query: String },
    /// Print the details panel of a node
    Details { node_id: String },
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let load_start = Instant::now();
    let forest =
        Forest::from_file(&cli.data_path).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    let config = match &cli.config {
        Some(path) => load_config(path),
        None => ViewConfig::default(),
    };
    tracing::info!(
        plans = forest.len(),
        nodes = forest.node_count(),
        elapsed = ?load_start.elapsed(),
        "loaded pipeline export"
    );

    let mut view = FlowView::builder(&forest).with_config(config).build();

    match cli.command {
        Command::Graph { query, select } => {
            if let Some(query) = query {
                view.set_query(query);
            }
            if let Some(raw_id) = select {
                let id: NodeId = raw_id.parse().unwrap_or_else(|e: String| exit_with_error(&e));
                if !view.handle(SurfaceEvent::NodeActivated(id)) {
                    exit_with_error(&format!("No node with id '{}'", raw_id));
                }
            }
            print_json(&view.rendered());
        }
        Command::Table { plan, task, job, json } => {
            view.set_table_filter(TableFilter::new(plan, task, job));
            let rows = view.filtered_rows();
            if json {
                print_json(&rows);
            } else {
                print_table(&rows);
                println!("\n{}", view.table_summary());
            }
        }
        Command::Search { query } => {
            view.set_query(query);
            let hits = view.search_hits();
            if hits.is_empty() {
                println!("No matches.");
            }
            for hit in hits {
                let workspace = if hit.workspace.is_empty() {
                    String::new()
                } else {
                    format!(" [{}]", hit.workspace)
                };
                println!(
                    "{:<8} {}{}  ({})",
                    hit.node_type, hit.label, workspace, hit.breadcrumb
                );
            }
        }
        Command::Jump { query } => match view.jump(&query) {
            Some(target) => print_json(&target),
            None => println!("No node matches '{}'.", query),
        },
        Command::Details { node_id } => {
            let id: NodeId = node_id.parse().unwrap_or_else(|e: String| exit_with_error(&e));
            if !view.handle(SurfaceEvent::NodeActivated(id)) {
                exit_with_error(&format!("No node with id '{}'", node_id));
            }
            if let Some(details) = view.selected_details() {
                print!("{}", details);
            }
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn load_config(path: &str) -> ViewConfig {
    let content = fs::read_to_string(path).unwrap_or_else(|e| {
        exit_with_error(&format!("Failed to read config file '{}': {}", path, e))
    });
    serde_json::from_str(&content)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to parse config JSON: {}", e)))
}

fn print_table(rows: &[&JobPathRow]) {
    println!("{:<30} {:<30} {:<30}", "PLAN NAME", "TASK NAME", "JOB NAME");
    for row in rows {
        println!(
            "{:<30} {:<30} {:<30}",
            dash_if_empty(&row.plan_label),
            dash_if_empty(&row.task_label),
            dash_if_empty(&row.job_label)
        );
    }
}

fn dash_if_empty(value: &str) -> &str {
    if value.is_empty() { "-" } else { value }
}

fn print_json<T: serde::Serialize + ?Sized>(value: &T) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialise output: {}", e)));
    println!("{}", json);
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
