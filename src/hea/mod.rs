//! Hybrid Evolutionary Algorithm (HEA) for k-coloring.
//!
//! A fixed-size population of colorings evolves by tournament selection,
//! greedy partition crossover and TabuCol refinement of every child. A child
//! replaces the worst individual only when it is strictly better and adds a
//! conflict count the population does not have yet.
//!
//! # Components
//!
//! - [`AlgorithmParams`]: run parameters with builder setters
//! - [`initialize_population`]: DSATUR seed refined `pop_size` times
//! - [`step_generation`]: one selection/crossover/refinement/replacement round
//! - [`Hea`]: state object advanced one step per call
//! - [`HeaRunner`]: drives a [`Hea`] to completion
//!
//! # Reference
//!
//! Galinier, P. & Hao, J.-K. (1999). "Hybrid evolutionary algorithms for
//! graph coloring", *Journal of Combinatorial Optimization* 3(4), 379-397.

mod config;
mod runner;
pub mod selection;
mod types;

pub use config::AlgorithmParams;
pub use runner::{initialize_population, step_generation, Hea, HeaResult, HeaRunner};
pub use types::{HeaStatus, Individual, Population, StepReport};
