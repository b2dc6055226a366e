//! Vertex colorings.

use crate::error::{ColoringError, Result};
use crate::graph::{Graph, VertexId};

/// A color. Valid colors are `1..=k`.
pub type Color = usize;

/// Marks a vertex that has no color yet. Never present in a complete coloring.
pub const UNCOLORED: Color = 0;

/// Color assignment over the vertices of a graph, indexed by dense vertex
/// index (see [`Graph`]).
///
/// A coloring is a plain value: cloning it never shares storage, so a
/// crossover child can be built and refined without touching its parents.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coloring {
    colors: Vec<Color>,
}

impl Coloring {
    /// `n` vertices, all [`UNCOLORED`].
    pub fn uncolored(n: usize) -> Self {
        Self {
            colors: vec![UNCOLORED; n],
        }
    }

    /// Wraps a dense color vector.
    pub fn from_colors(colors: Vec<Color>) -> Self {
        Self { colors }
    }

    /// Builds a coloring of `graph` from `(vertexId, color)` pairs.
    /// Vertices absent from `pairs` stay [`UNCOLORED`].
    ///
    /// # Errors
    ///
    /// [`ColoringError::InvalidParameter`] if a pair names a vertex that is
    /// not in `graph`.
    pub fn from_pairs(graph: &Graph, pairs: &[(VertexId, Color)]) -> Result<Self> {
        let mut res = Self::uncolored(graph.vertex_count());
        for &(id, color) in pairs {
            let i = graph.index_of(id).ok_or_else(|| {
                ColoringError::invalid_parameter(format!("vertex {id} is not in the graph"))
            })?;
            res.colors[i] = color;
        }
        Ok(res)
    }

    /// Ordered `(vertexId, color)` list, in the graph's vertex order.
    pub fn to_pairs(&self, graph: &Graph) -> Vec<(VertexId, Color)> {
        graph
            .vertices()
            .iter()
            .copied()
            .zip(self.colors.iter().copied())
            .collect()
    }

    /// number of vertices covered
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// true when the coloring covers no vertex
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// color of the vertex at dense index `i`
    pub fn get(&self, i: usize) -> Color {
        self.colors[i]
    }

    /// sets the color of the vertex at dense index `i`
    pub fn set(&mut self, i: usize, color: Color) {
        self.colors[i] = color;
    }

    /// color of the vertex with public id `id`
    pub fn color_of(&self, graph: &Graph, id: VertexId) -> Option<Color> {
        graph.index_of(id).and_then(|i| self.colors.get(i).copied())
    }

    /// dense color slice
    pub fn as_slice(&self) -> &[Color] {
        &self.colors
    }

    /// number of distinct colors in use (ignores [`UNCOLORED`])
    pub fn colors_used(&self) -> usize {
        let max = self.colors.iter().copied().max().unwrap_or(UNCOLORED);
        let mut used = vec![false; max + 1];
        for &c in &self.colors {
            used[c] = true;
        }
        used.iter().skip(1).filter(|&&u| u).count()
    }

    /// `classes[c - 1]`: dense indices holding color `c`, for `c` in `1..=k`.
    /// Colors outside `1..=k` are not reported.
    pub fn color_classes(&self, k: usize) -> Vec<Vec<usize>> {
        let mut classes = vec![Vec::new(); k];
        for (i, &c) in self.colors.iter().enumerate() {
            if (1..=k).contains(&c) {
                classes[c - 1].push(i);
            }
        }
        classes
    }

    /// true when every vertex holds a color in `1..=k`
    pub fn is_complete(&self, k: usize) -> bool {
        self.colors.iter().all(|c| (1..=k).contains(c))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pairs_follow_graph_order() {
        let g = Graph::new(vec![5, 3, 9], &[(5, 3)]).unwrap();
        let c = Coloring::from_pairs(&g, &[(9, 2), (5, 1)]).unwrap();
        assert_eq!(c.as_slice(), &[1, UNCOLORED, 2]);
        assert_eq!(c.to_pairs(&g), vec![(5, 1), (3, 0), (9, 2)]);
        assert_eq!(c.color_of(&g, 9), Some(2));
        assert_eq!(c.color_of(&g, 4), None);
        assert!(Coloring::from_pairs(&g, &[(4, 1)]).is_err());
    }

    #[test]
    fn test_classes_and_usage() {
        let c = Coloring::from_colors(vec![1, 3, 1, 0, 3]);
        assert_eq!(c.colors_used(), 2);
        assert_eq!(c.color_classes(3), vec![vec![0, 2], vec![], vec![1, 4]]);
        assert!(!c.is_complete(3));
        let c = Coloring::from_colors(vec![1, 2, 2]);
        assert!(c.is_complete(2));
        assert!(!c.is_complete(1));
    }

    #[test]
    fn test_clone_is_independent() {
        let parent = Coloring::from_colors(vec![1, 2]);
        let mut child = parent.clone();
        child.set(0, 2);
        assert_eq!(parent.get(0), 1);
    }
}
