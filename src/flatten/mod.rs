//! Linear views over a forest: the pre-order search index and the table's
//! plan → task → job rows.

mod index;
mod job_paths;

pub use index::{IndexedNode, flatten_nodes};
pub use job_paths::{JobPathRow, flatten_to_job_paths};
