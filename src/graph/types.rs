//! Immutable undirected graph.

use std::collections::{HashMap, HashSet};

use crate::error::{ColoringError, Result};

/// Public vertex identifier (a positive integer).
pub type VertexId = usize;

/// Undirected simple graph consumed by every algorithm of the crate.
///
/// Vertices carry user-facing ids but are addressed internally by a dense
/// index `0..n` following the order the ids were given in. That order is
/// the "fixed iteration order" used for every tie-break.
///
/// Once built, a graph never changes; cloning it is a deep copy, so
/// independent workers can each own one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Graph {
    /// ids[i]: public id of the vertex at dense index i
    ids: Vec<VertexId>,
    /// index[id]: dense index of the vertex `id`
    index: HashMap<VertexId, usize>,
    /// adj_list[i]: dense indices of the neighbors of i
    adj_list: Vec<Vec<usize>>,
    /// each undirected edge once, as (i, j) with i < j
    edges: Vec<(usize, usize)>,
}

impl Default for Graph {
    fn default() -> Self {
        Self::empty()
    }
}

impl Graph {
    /// Graph without vertices.
    pub fn empty() -> Self {
        Self {
            ids: Vec::new(),
            index: HashMap::new(),
            adj_list: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Builds a graph from a vertex id list and an edge list over those ids.
    ///
    /// Repeated edges (in either orientation) are merged.
    ///
    /// # Errors
    ///
    /// [`ColoringError::InvalidGraph`] on a zero or repeated vertex id, a
    /// self-loop, or an edge endpoint missing from `ids`.
    pub fn new(ids: Vec<VertexId>, edges: &[(VertexId, VertexId)]) -> Result<Self> {
        let mut index = HashMap::with_capacity(ids.len());
        for (i, &id) in ids.iter().enumerate() {
            if id == 0 {
                return Err(ColoringError::invalid_graph("vertex ids must be positive"));
            }
            if index.insert(id, i).is_some() {
                return Err(ColoringError::invalid_graph(format!(
                    "vertex id {id} appears more than once"
                )));
            }
        }

        let mut dense = Vec::with_capacity(edges.len());
        for &(u, v) in edges {
            if u == v {
                return Err(ColoringError::invalid_graph(format!("self-loop on vertex {u}")));
            }
            let iu = *index.get(&u).ok_or_else(|| {
                ColoringError::invalid_graph(format!("edge ({u},{v}) uses unknown vertex {u}"))
            })?;
            let iv = *index.get(&v).ok_or_else(|| {
                ColoringError::invalid_graph(format!("edge ({u},{v}) uses unknown vertex {v}"))
            })?;
            dense.push((iu, iv));
        }

        Ok(Self::from_dense(ids, index, &dense))
    }

    /// Builds a graph on the vertices `1..=n`.
    ///
    /// # Errors
    ///
    /// Same conditions as [`Graph::new`].
    pub fn with_vertex_count(n: usize, edges: &[(VertexId, VertexId)]) -> Result<Self> {
        Self::new((1..=n).collect(), edges)
    }

    /// Builds a graph on `1..=n` from dense edges already known to be valid
    /// (distinct endpoints below `n`). Duplicates are merged.
    pub(crate) fn from_dense_edges(n: usize, edges: &[(usize, usize)]) -> Self {
        let ids: Vec<VertexId> = (1..=n).collect();
        let index = ids.iter().enumerate().map(|(i, &id)| (id, i)).collect();
        Self::from_dense(ids, index, edges)
    }

    fn from_dense(
        ids: Vec<VertexId>,
        index: HashMap<VertexId, usize>,
        dense_edges: &[(usize, usize)],
    ) -> Self {
        let n = ids.len();
        let mut adj_list = vec![Vec::new(); n];
        let mut edges = Vec::with_capacity(dense_edges.len());
        let mut seen: HashSet<(usize, usize)> = HashSet::with_capacity(dense_edges.len());
        for &(a, b) in dense_edges {
            debug_assert!(a != b && a < n && b < n);
            let e = (a.min(b), a.max(b));
            if seen.insert(e) {
                adj_list[e.0].push(e.1);
                adj_list[e.1].push(e.0);
                edges.push(e);
            }
        }
        Self {
            ids,
            index,
            adj_list,
            edges,
        }
    }

    /// number of vertices
    pub fn vertex_count(&self) -> usize {
        self.ids.len()
    }

    /// number of edges
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// true when the graph has no vertices
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// public vertex ids, in dense-index order
    pub fn vertices(&self) -> &[VertexId] {
        &self.ids
    }

    /// edges as dense index pairs `(i, j)` with `i < j`
    pub fn edges(&self) -> &[(usize, usize)] {
        &self.edges
    }

    /// edges as public id pairs
    pub fn edge_ids(&self) -> impl Iterator<Item = (VertexId, VertexId)> + '_ {
        self.edges.iter().map(|&(i, j)| (self.ids[i], self.ids[j]))
    }

    /// dense indices adjacent to the vertex at dense index `i`
    pub fn neighbors(&self, i: usize) -> &[usize] {
        &self.adj_list[i]
    }

    /// degree of the vertex at dense index `i`
    pub fn degree(&self, i: usize) -> usize {
        self.adj_list[i].len()
    }

    /// largest degree in the graph (0 when empty)
    pub fn max_degree(&self) -> usize {
        self.adj_list.iter().map(Vec::len).max().unwrap_or(0)
    }

    /// dense index of a public vertex id
    pub fn index_of(&self, id: VertexId) -> Option<usize> {
        self.index.get(&id).copied()
    }

    /// public id of the vertex at dense index `i`
    pub fn id_of(&self, i: usize) -> VertexId {
        self.ids[i]
    }

    /// O(min degree) adjacency test on dense indices
    pub fn are_adjacent(&self, i: usize, j: usize) -> bool {
        let (small, other) = if self.adj_list[i].len() <= self.adj_list[j].len() {
            (i, j)
        } else {
            (j, i)
        };
        self.adj_list[small].contains(&other)
    }
}
