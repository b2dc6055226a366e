//! Graph model.
//!
//! [`Graph`] is the immutable adjacency structure every algorithm reads.
//! Graphs come from explicit edge lists ([`Graph::new`],
//! [`Graph::with_vertex_count`]), from the `G(n, p)` generator
//! ([`random_graph`]), or from text ([`parse_edge_list`], [`parse_dimacs`]).

mod generate;
mod parse;
mod types;

pub use generate::random_graph;
pub use parse::{parse_dimacs, parse_edge_list, parse_edge_list_strict};
pub use types::{Graph, VertexId};
