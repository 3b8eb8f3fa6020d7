//! Search and ranked selections over evaluated projects.
//!
//! Every function returns a new `Vec`; the input slice is never reordered.

mod search;
mod selection;

pub use search::filter_by_search;
pub use selection::{attention_required, top_by_budget, top_problem_projects};
