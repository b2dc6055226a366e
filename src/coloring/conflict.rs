//! Conflict evaluator.
//!
//! A conflict is an edge whose endpoints share the same non-zero color.
//! All functions are pure; the coloring must cover every vertex of the graph.

use super::types::{Color, Coloring, UNCOLORED};
use crate::graph::Graph;

/// Number of conflicting edges. O(|E|).
pub fn count_conflicts(graph: &Graph, coloring: &Coloring) -> usize {
    debug_assert_eq!(graph.vertex_count(), coloring.len());
    graph
        .edges()
        .iter()
        .filter(|&&(u, v)| is_conflict(coloring.get(u), coloring.get(v)))
        .count()
}

/// Number of neighbors of the vertex at dense index `vertex` that
/// currently hold `color`. O(degree).
///
/// The change in conflicts caused by recoloring `vertex` from `a` to `b`
/// is `local_conflicts(.., b) - local_conflicts(.., a)`.
pub fn local_conflicts(graph: &Graph, coloring: &Coloring, vertex: usize, color: Color) -> usize {
    if color == UNCOLORED {
        return 0;
    }
    graph
        .neighbors(vertex)
        .iter()
        .filter(|&&u| coloring.get(u) == color)
        .count()
}

/// Dense indices of the vertices that belong to at least one conflicting
/// edge, in increasing order.
pub fn conflicted_vertices(graph: &Graph, coloring: &Coloring) -> Vec<usize> {
    let mut flagged = vec![false; graph.vertex_count()];
    for (u, v) in conflicting_edges(graph, coloring) {
        flagged[u] = true;
        flagged[v] = true;
    }
    flagged
        .iter()
        .enumerate()
        .filter_map(|(i, &f)| f.then_some(i))
        .collect()
}

/// The conflicting edges themselves, as dense pairs `(i, j)` with `i < j`.
pub fn conflicting_edges(graph: &Graph, coloring: &Coloring) -> Vec<(usize, usize)> {
    graph
        .edges()
        .iter()
        .filter(|&&(u, v)| is_conflict(coloring.get(u), coloring.get(v)))
        .copied()
        .collect()
}

#[inline]
fn is_conflict(a: Color, b: Color) -> bool {
    a != UNCOLORED && a == b
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> Graph {
        Graph::with_vertex_count(3, &[(1, 2), (2, 3), (1, 3)]).unwrap()
    }

    #[test]
    fn test_count_triangle() {
        let g = triangle();
        assert_eq!(count_conflicts(&g, &Coloring::from_colors(vec![1, 2, 3])), 0);
        assert_eq!(count_conflicts(&g, &Coloring::from_colors(vec![1, 1, 2])), 1);
        assert_eq!(count_conflicts(&g, &Coloring::from_colors(vec![1, 1, 1])), 3);
    }

    #[test]
    fn test_uncolored_never_conflicts() {
        let g = triangle();
        let c = Coloring::uncolored(3);
        assert_eq!(count_conflicts(&g, &c), 0);
        assert_eq!(local_conflicts(&g, &c, 0, UNCOLORED), 0);
        assert!(conflicted_vertices(&g, &c).is_empty());
    }

    #[test]
    fn test_local_delta_matches_recount() {
        let g = Graph::with_vertex_count(4, &[(1, 2), (2, 3), (3, 4), (4, 1), (1, 3)]).unwrap();
        let mut c = Coloring::from_colors(vec![1, 1, 2, 1]);
        let before = count_conflicts(&g, &c);
        let delta = local_conflicts(&g, &c, 0, 2) as i64 - local_conflicts(&g, &c, 0, 1) as i64;
        c.set(0, 2);
        let after = count_conflicts(&g, &c);
        assert_eq!(after as i64, before as i64 + delta);
    }

    #[test]
    fn test_conflicted_vertices() {
        let g = triangle();
        let c = Coloring::from_colors(vec![2, 1, 2]);
        assert_eq!(conflicting_edges(&g, &c), vec![(0, 2)]);
        assert_eq!(conflicted_vertices(&g, &c), vec![0, 2]);
    }
}
