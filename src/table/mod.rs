//! Column filters over the plan → task → job rows.

use crate::flatten::JobPathRow;
use serde::{Deserialize, Serialize};
use std::fmt;

/// The three independent column filters of the table view.
///
/// A row passes when every non-empty filter matches, case-insensitively, the name or
/// the description of its column. An empty filter places no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableFilter {
    pub plan: String,
    pub task: String,
    pub job: String,
}

impl TableFilter {
    pub fn new(plan: impl Into<String>, task: impl Into<String>, job: impl Into<String>) -> Self {
        Self {
            plan: plan.into(),
            task: task.into(),
            job: job.into(),
        }
    }

    /// True when at least one filter is set.
    pub fn is_active(&self) -> bool {
        !(self.plan.is_empty() && self.task.is_empty() && self.job.is_empty())
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn matches(&self, row: &JobPathRow) -> bool {
        column_matches(&self.plan, &row.plan_name, &row.plan_desc)
            && column_matches(&self.task, &row.task_name, &row.task_desc)
            && column_matches(&self.job, &row.job_name, &row.job_desc)
    }

    /// Rows that pass, in their original order.
    pub fn apply<'r>(&self, rows: &'r [JobPathRow]) -> Vec<&'r JobPathRow> {
        rows.iter().filter(|row| self.matches(row)).collect()
    }

    pub fn summary(&self, rows: &[JobPathRow]) -> TableSummary {
        TableSummary {
            total: rows.len(),
            filtered: rows.iter().filter(|row| self.matches(row)).count(),
        }
    }
}

fn column_matches(filter: &str, name: &str, desc: &str) -> bool {
    if filter.is_empty() {
        return true;
    }
    let needle = filter.to_lowercase();
    name.to_lowercase().contains(&needle) || desc.to_lowercase().contains(&needle)
}

/// Row counts shown above the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TableSummary {
    pub total: usize,
    pub filtered: usize,
}

impl fmt::Display for TableSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Total Records: {}", self.filtered)?;
        if self.filtered != self.total {
            write!(f, " (filtered from {})", self.total)?;
        }
        Ok(())
    }
}
