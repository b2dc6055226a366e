//! Colorings and the conflict evaluator.

mod conflict;
mod types;

pub use conflict::{conflicted_vertices, conflicting_edges, count_conflicts, local_conflicts};
pub use types::{Color, Coloring, UNCOLORED};
