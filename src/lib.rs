//! Graph k-coloring engine.
//!
//! Given an undirected graph and a number of colors `k`, searches for an
//! assignment of colors `1..=k` to vertices that minimizes the number of
//! conflicting edges (edges whose endpoints share a color):
//!
//! - **Graph model**: immutable adjacency structure, built from edge lists,
//!   the `G(n, p)` generator or text input (free-form edge lists, DIMACS).
//! - **Conflict evaluator**: global and per-vertex conflict counts.
//! - **DSATUR**: deterministic greedy construction, never exceeding `k`.
//! - **TabuCol**: tabu search that repairs a complete coloring.
//! - **GPX**: greedy partition crossover of two parent colorings.
//! - **HEA**: hybrid evolutionary population manager combining all of the
//!   above, advanced one generation at a time.
//!
//! # Quick start
//!
//! ```
//! use kcolor_hea::graph::Graph;
//! use kcolor_hea::hea::{AlgorithmParams, HeaRunner};
//!
//! // 5-cycle: chromatic number 3
//! let g = Graph::with_vertex_count(5, &[(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)]).unwrap();
//! let params = AlgorithmParams::new(3).with_pop_size(4).with_seed(42);
//! let result = HeaRunner::run(&g, &params).unwrap();
//! assert_eq!(result.best.conflicts, 0);
//! ```
//!
//! # Determinism
//!
//! Every randomized operation takes its generator explicitly. With the same
//! seed the results are identical, also with the `parallel` feature enabled.
//!
//! # Features
//!
//! - `parallel`: refines the initial population on the rayon thread pool.
//! - `serde`: `Serialize`/`Deserialize` for colorings, parameters and
//!   population records.

pub mod coloring;
pub mod dsatur;
pub mod error;
pub mod gpx;
pub mod graph;
pub mod hea;
pub mod random;
pub mod tabu;

pub use coloring::{count_conflicts, Color, Coloring};
pub use dsatur::color_greedy;
pub use error::{ColoringError, Result};
pub use gpx::gpx_crossover;
pub use graph::{Graph, VertexId};
pub use hea::{initialize_population, step_generation, AlgorithmParams, Hea, HeaRunner};
pub use tabu::refine_with_tabu;
