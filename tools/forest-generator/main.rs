use clap::Parser;
use etlgraph::prelude::*;
use etlgraph::tree::{DUPLICATE_MARKER, display_name};
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

/// A CLI tool to generate random pipeline exports for the etlgraph engine
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_forest.json")]
    output: String,

    /// Number of top-level plans
    #[arg(long, default_value_t = 5)]
    plans: usize,

    /// Maximum depth below a plan
    #[arg(long, default_value_t = 4)]
    depth: usize,

    /// Maximum number of children per node
    #[arg(long, default_value_t = 4)]
    fanout: usize,

    /// Probability that a job reuses an earlier job name with the duplicate marker
    #[arg(long, default_value_t = 0.05)]
    duplicates: f64,
}

const WORKSPACES: [&str; 4] = ["finance", "marketing", "warehouse", "ops"];
const VERBS: [&str; 6] = ["Load", "Extract", "Merge", "Clean", "Export", "Aggregate"];
const SUBJECTS: [&str; 6] = ["Customers", "Orders", "Invoices", "Stock", "Leads", "Payroll"];

fn main() -> Result<()> {
    let cli = Cli::parse();

    if !(0.0..=1.0).contains(&cli.duplicates) {
        eprintln!(
            "Error: --duplicates ({}) must be between 0 and 1",
            cli.duplicates
        );
        std::process::exit(1);
    }

    println!(
        "Generating {} plans (depth <= {}, fan-out <= {})...",
        cli.plans, cli.depth, cli.fanout
    );

    let mut generator = Generator {
        rng: rand::rng(),
        cli: &cli,
        counter: 0,
        job_names: Vec::new(),
    };
    let forest: Forest = (0..cli.plans).map(|i| generator.plan(i)).collect::<Vec<_>>().into();

    let json_output = serde_json::to_string_pretty(&forest)?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated {} nodes and saved them to '{}'",
        forest.node_count(),
        cli.output
    );

    Ok(())
}

struct Generator<'c> {
    rng: ThreadRng,
    cli: &'c Cli,
    counter: usize,
    job_names: Vec<String>,
}

impl Generator<'_> {
    fn plan(&mut self, index: usize) -> TreeNode {
        let children = self.children(1);
        TreeNode::new(format!("PLAN_{:03}", index), NodeType::Plan)
            .with_description(format!("Generated plan number {}", index))
            .with_workspace(self.workspace())
            .with_children(children)
    }

    fn children(&mut self, level: usize) -> Vec<TreeNode> {
        let count = self.rng.random_range(0..=self.cli.fanout);
        (0..count).map(|_| self.node(level)).collect()
    }

    fn node(&mut self, level: usize) -> TreeNode {
        self.counter += 1;
        let at_bottom = level >= self.cli.depth;

        if at_bottom || self.rng.random_bool(0.4) {
            return self.job();
        }

        let node_type = match self.rng.random_range(0..3) {
            0 => NodeType::Task,
            1 => NodeType::Cycle,
            _ => NodeType::Process,
        };
        let name = format!("{}_{:05}", node_type, self.counter);
        let children = self.children(level + 1);
        TreeNode::new(name, node_type)
            .with_workspace(self.workspace())
            .with_children(children)
    }

    fn job(&mut self) -> TreeNode {
        let reuse = !self.job_names.is_empty() && self.rng.random_bool(self.cli.duplicates);
        let name = if reuse {
            let i = self.rng.random_range(0..self.job_names.len());
            format!("{}{}", self.job_names[i], DUPLICATE_MARKER)
        } else {
            let verb = VERBS[self.rng.random_range(0..VERBS.len())];
            let subject = SUBJECTS[self.rng.random_range(0..SUBJECTS.len())];
            let name = format!("{}{}_{:05}", verb, subject, self.counter);
            self.job_names.push(name.clone());
            name
        };
        let description = format!("{} job", display_name(&name));
        TreeNode::new(name, NodeType::Job)
            .with_description(description)
            .with_workspace(self.workspace())
    }

    fn workspace(&mut self) -> &'static str {
        WORKSPACES[self.rng.random_range(0..WORKSPACES.len())]
    }
}
