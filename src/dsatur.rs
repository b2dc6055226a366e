//! Greedy DSATUR colorer with a fixed color budget.
//!
//! # Algorithm
//!
//! 1. choose an uncolored vertex that sees the most distinct colors
//!    (break ties by the largest degree, then by vertex order)
//! 2. give it the smallest color no neighbor uses
//! 3. if that color exceeds `k`, give it instead the color in `1..=k`
//!    used by the fewest neighbors (smallest color on ties), accepting
//!    conflicts to stay within budget
//! 4. mark all its uncolored neighbors as seeing this color
//! 5. repeat until every vertex is colored
//!
//! With no vertex colored yet every saturation is 0, so the first pick is
//! the vertex of maximum degree and it receives color 1.
//!
//! Saturation is maintained incrementally on the neighbors of the vertex
//! just colored, which selects exactly the vertices a full recount would.
//!
//! # Reference
//!
//! Brélaz, D. (1979). "New methods to color the vertices of a graph",
//! *Communications of the ACM* 22(4), 251-256.

use bit_set::BitSet;

use crate::coloring::{count_conflicts, Color, Coloring, UNCOLORED};
use crate::error::{ColoringError, Result};
use crate::graph::Graph;

/// Colors `graph` with colors in `1..=k` using DSATUR.
///
/// The result covers every vertex with a color in `1..=k`. When the graph
/// needs more than `k` colors the result contains conflicts.
///
/// # Errors
///
/// [`ColoringError::InvalidParameter`] if `k < 1`.
///
/// # Examples
///
/// ```
/// use kcolor_hea::graph::Graph;
/// use kcolor_hea::dsatur::color_greedy;
///
/// let triangle = Graph::with_vertex_count(3, &[(1, 2), (2, 3), (1, 3)]).unwrap();
/// let coloring = color_greedy(&triangle, 3).unwrap();
/// assert_eq!(coloring.as_slice(), &[1, 2, 3]);
/// ```
pub fn color_greedy(graph: &Graph, k: usize) -> Result<Coloring> {
    if k < 1 {
        return Err(ColoringError::invalid_parameter("k must be at least 1"));
    }
    let n = graph.vertex_count();
    let mut coloring = Coloring::uncolored(n);
    // adj_colors[v]: colors v sees among its colored neighbors
    let mut adj_colors: Vec<BitSet> = vec![BitSet::default(); n];
    let mut saturation = vec![0usize; n];
    // counts[c]: scratch buffer for the fallback choice
    let mut counts = vec![0usize; k + 1];

    for _ in 0..n {
        let v = match select_vertex(graph, &coloring, &saturation) {
            Some(v) => v,
            None => break,
        };
        let color = choose_color(graph, &coloring, &adj_colors[v], v, k, &mut counts);
        coloring.set(v, color);

        for &u in graph.neighbors(v) {
            if coloring.get(u) == UNCOLORED && adj_colors[u].insert(color) {
                saturation[u] += 1;
            }
        }
    }

    log::debug!(
        "dsatur: {} vertices, k={}, {} colors used, {} conflicts",
        n,
        k,
        coloring.colors_used(),
        count_conflicts(graph, &coloring)
    );
    Ok(coloring)
}

/// Uncolored vertex of maximum (saturation, degree); first in vertex order
/// on full ties.
fn select_vertex(graph: &Graph, coloring: &Coloring, saturation: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, usize, usize)> = None;
    for v in 0..graph.vertex_count() {
        if coloring.get(v) != UNCOLORED {
            continue;
        }
        let key = (saturation[v], graph.degree(v));
        match best {
            Some((_, s, d)) if (s, d) >= key => {}
            _ => best = Some((v, key.0, key.1)),
        }
    }
    best.map(|(v, _, _)| v)
}

fn choose_color(
    graph: &Graph,
    coloring: &Coloring,
    seen: &BitSet,
    v: usize,
    k: usize,
    counts: &mut [usize],
) -> Color {
    let mut color: Color = 1;
    while seen.contains(color) {
        color += 1;
    }
    if color <= k {
        return color;
    }

    // every color in 1..=k is taken by some neighbor: pick the least used
    counts.iter_mut().for_each(|c| *c = 0);
    for &u in graph.neighbors(v) {
        let c = coloring.get(u);
        if c != UNCOLORED && c <= k {
            counts[c] += 1;
        }
    }
    (1..=k).min_by_key(|&c| counts[c]).unwrap_or(1)
}
