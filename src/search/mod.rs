mod focus;
mod index;

pub use focus::{FocusTarget, focus_on};
pub use index::{IdentityJoin, MatchSet, SearchHit, SearchIndex};

/// Lower-cases a query for substring matching; `None` when it is blank.
pub(crate) fn normalize_query(query: &str) -> Option<String> {
    if query.trim().is_empty() {
        None
    } else {
        Some(query.to_lowercase())
    }
}
