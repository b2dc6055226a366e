//! TabuCol: tabu search for graph k-coloring.
//!
//! A single-solution local search over complete `k`-colorings that
//! minimizes the number of conflicting edges. Moves recolor one conflicted
//! vertex; a vertex may not return to the color it just left for a few
//! iterations (the tabu tenure) unless doing so beats the best conflict
//! count seen so far.
//!
//! # References
//!
//! - Hertz, A. & de Werra, D. (1987). "Using tabu search techniques for
//!   graph coloring", *Computing* 39(4), 345-351.
//! - Glover, F. (1989). "Tabu Search: Part I", *ORSA Journal on Computing* 1(3), 190-206.

mod config;
mod runner;
mod types;

pub use config::TabuConfig;
pub use runner::{refine_with_tabu, TabuRunner};
pub use types::{TabuMemory, TabuResult};
