//! Random graph generation (Erdős–Rényi `G(n, p)`).

use rand::Rng;

use super::types::Graph;
use crate::error::{ColoringError, Result};

/// Generates a graph on the vertices `1..=n` where each unordered pair
/// `(i, j)`, `i < j`, is an edge independently with probability `p`.
///
/// Pairs are drawn in lexicographic order, so a seeded `rng` always yields
/// the same graph.
///
/// # Errors
///
/// [`ColoringError::InvalidParameter`] if `p` is not a number in `[0, 1]`.
///
/// # Examples
///
/// ```
/// use kcolor_hea::graph::random_graph;
/// use kcolor_hea::random::create_rng;
///
/// let mut rng = create_rng(42);
/// let g = random_graph(10, 1.0, &mut rng).unwrap();
/// assert_eq!(g.edge_count(), 45);
/// ```
pub fn random_graph<R: Rng>(n: usize, p: f64, rng: &mut R) -> Result<Graph> {
    if !(0.0..=1.0).contains(&p) {
        return Err(ColoringError::invalid_parameter(format!(
            "edge probability must lie in [0, 1], got {p}"
        )));
    }
    let mut edges = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if rng.random_bool(p) {
                edges.push((i, j));
            }
        }
    }
    log::debug!("random graph: n={} p={} -> {} edges", n, p, edges.len());
    Ok(Graph::from_dense_edges(n, &edges))
}
