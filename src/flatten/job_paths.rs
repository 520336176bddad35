use crate::tree::{TreeNode, display_name};
use serde::Serialize;

/// One plan → task → job path, as shown by the table view.
///
/// Every field is a plain string; absent values are `""`. The `*_name` fields and
/// the `id` keep raw names, the `*_label` fields are what the table displays.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobPathRow {
    pub id: String,
    pub plan_name: String,
    pub plan_label: String,
    pub plan_type: String,
    pub plan_workspace: String,
    pub plan_desc: String,
    pub task_name: String,
    pub task_label: String,
    pub task_type: String,
    pub task_workspace: String,
    pub task_desc: String,
    pub job_name: String,
    pub job_label: String,
    pub job_type: String,
    pub job_workspace: String,
    pub job_desc: String,
}

/// The "task" a job is reported under.
///
/// Only cycles and processes replace it; every other node passes the inherited
/// context through to its children.
#[derive(Debug, Clone, Copy, Default)]
struct TaskContext<'a> {
    name: &'a str,
    node_type: &'a str,
    workspace: &'a str,
    description: &'a str,
}

impl<'a> TaskContext<'a> {
    fn of(node: &'a TreeNode) -> Self {
        Self {
            name: &node.name,
            node_type: node.node_type.as_str(),
            workspace: node.workspace(),
            description: node.description(),
        }
    }

    fn entering(self, node: &'a TreeNode) -> Self {
        if node.node_type.is_task_context() {
            Self::of(node)
        } else {
            self
        }
    }

    /// Fills each empty field from `job`, so a job without a cycle or process
    /// above it becomes its own task.
    fn or_job(self, job: &'a TreeNode) -> Self {
        let own = Self::of(job);
        Self {
            name: non_empty_or(self.name, own.name),
            node_type: non_empty_or(self.node_type, own.node_type),
            workspace: non_empty_or(self.workspace, own.workspace),
            description: non_empty_or(self.description, own.description),
        }
    }
}

fn non_empty_or<'a>(value: &'a str, fallback: &'a str) -> &'a str {
    if value.is_empty() { fallback } else { value }
}

/// A job reached during the search, with the task context captured on the way.
struct JobHit<'a> {
    task: TaskContext<'a>,
    job: &'a TreeNode,
}

/// Flattens every plan into its plan → task → job paths.
///
/// A plan without children yields one plan-only row. Otherwise each direct child of
/// the plan is searched for jobs; a child without any job yields one row with the
/// child as task. Rows keep pre-order traversal order.
pub fn flatten_to_job_paths(forest: &[TreeNode]) -> Vec<JobPathRow> {
    let mut rows = Vec::new();

    for plan in forest {
        let base = JobPathRow {
            plan_name: plan.name.clone(),
            plan_label: plan.display_name().into_owned(),
            plan_type: plan.node_type.as_str().to_string(),
            plan_workspace: plan.workspace().to_string(),
            plan_desc: plan.description().to_string(),
            ..JobPathRow::default()
        };

        if plan.is_leaf() {
            rows.push(JobPathRow {
                id: format!("plan-{}", plan.name),
                ..base
            });
            continue;
        }

        for child in &plan.children {
            let mut hits = Vec::new();
            find_jobs(child, TaskContext::default(), &mut hits);

            if hits.is_empty() {
                let task = TaskContext::of(child);
                rows.push(JobPathRow {
                    id: format!("plan-{}-task-{}", plan.name, task.name),
                    task_name: task.name.to_string(),
                    task_label: display_name(task.name).into_owned(),
                    task_type: task.node_type.to_string(),
                    task_workspace: task.workspace.to_string(),
                    task_desc: task.description.to_string(),
                    ..base.clone()
                });
                continue;
            }

            rows.extend(hits.into_iter().map(|hit| JobPathRow {
                id: format!(
                    "plan-{}-task-{}-job-{}",
                    plan.name, hit.task.name, hit.job.name
                ),
                task_name: hit.task.name.to_string(),
                task_label: display_name(hit.task.name).into_owned(),
                task_type: hit.task.node_type.to_string(),
                task_workspace: hit.task.workspace.to_string(),
                task_desc: hit.task.description.to_string(),
                job_name: hit.job.name.clone(),
                job_label: hit.job.display_name().into_owned(),
                job_type: hit.job.node_type.as_str().to_string(),
                job_workspace: hit.job.workspace().to_string(),
                job_desc: hit.job.description().to_string(),
                ..base.clone()
            }));
        }
    }

    tracing::debug!(plans = forest.len(), rows = rows.len(), "flattened job paths");
    rows
}

/// Collects the jobs below `node`. The search stops at a job: anything nested under
/// a job is not reported separately.
fn find_jobs<'a>(node: &'a TreeNode, task: TaskContext<'a>, hits: &mut Vec<JobHit<'a>>) {
    if node.node_type.is_job() {
        hits.push(JobHit {
            task: task.or_job(node),
            job: node,
        });
        return;
    }

    let task = task.entering(node);
    for child in &node.children {
        find_jobs(child, task, hits);
    }
}
