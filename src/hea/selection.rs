//! Parent selection.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"

use rand::Rng;

use super::types::Individual;

/// Tournament selection: samples `size` indices uniformly with replacement
/// and returns the one whose individual has the fewest conflicts (the
/// earliest sample on ties). A `size` of 0 counts as 1.
///
/// Returns `None` for an empty population.
pub fn tournament<R: Rng>(population: &[Individual], size: usize, rng: &mut R) -> Option<usize> {
    if population.is_empty() {
        return None;
    }
    (0..size.max(1))
        .map(|_| rng.random_range(0..population.len()))
        .min_by_key(|&i| population[i].conflicts)
}
