use crate::data::Forest;
use crate::error::ConversionError;

/// A trait for foreign pipeline descriptions that can be converted into a `Forest`.
///
/// The engine only ever sees `TreeNode`s. Exports that use a different shape (flat
/// node lists with parent references, another scheduler's JSON, ...) implement this
/// trait to provide the translation.
///
/// # Example
///
/// ```rust,no_run
/// use etlgraph::prelude::*;
/// use etlgraph::error::ConversionError;
///
/// struct Row { plan: String, job: String }
/// struct Export { rows: Vec<Row> }
///
/// impl IntoForest for Export {
///     fn into_forest(self) -> std::result::Result<Forest, ConversionError> {
///         let mut plans: Vec<TreeNode> = Vec::new();
///         for row in self.rows {
///             if row.plan.is_empty() {
///                 return Err(ConversionError::Validation("row without plan".to_string()));
///             }
///             // Group jobs under their plan, keeping first-seen order.
///             match plans.iter_mut().find(|p| p.name == row.plan) {
///                 Some(plan) => plan.children.push(TreeNode::new(row.job, "JOB")),
///                 None => plans.push(
///                     TreeNode::new(row.plan, "PLAN")
///                         .with_children(vec![TreeNode::new(row.job, "JOB")]),
///                 ),
///             }
///         }
///         Ok(Forest::new(plans))
///     }
/// }
/// ```
pub trait IntoForest {
    /// Consumes the object and converts it into a forest of plans.
    fn into_forest(self) -> Result<Forest, ConversionError>;
}

impl IntoForest for Forest {
    fn into_forest(self) -> Result<Forest, ConversionError> {
        Ok(self)
    }
}

impl IntoForest for serde_json::Value {
    fn into_forest(self) -> Result<Forest, ConversionError> {
        if !self.is_array() {
            return Err(ConversionError::Validation(
                "expected a top-level array of plans".to_string(),
            ));
        }
        serde_json::from_value(self).map_err(|e| ConversionError::Validation(e.to_string()))
    }
}
