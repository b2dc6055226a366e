//! Graph readers: loose edge lists and DIMACS `.col` text.

use std::collections::HashSet;

use nom::{
    bytes::complete::tag,
    character::complete::{alpha1, digit1, space0, space1},
    combinator::{all_consuming, map_res},
    sequence::{terminated, tuple},
    IResult,
};

use super::types::Graph;
use crate::error::{ColoringError, Result};

/// Parses a loosely formatted list of integer pairs over the vertices `1..=n`.
///
/// Any character that is not a digit separates tokens, so `((1,2),(2,3))`,
/// `1 2 2 3`, `[1;2] [2;3]` and `1-2, 2-3` read the same. A `-` is a sign
/// only when a digit follows it and no digit precedes it; stray dashes are
/// separators and never take a pair slot.
/// Consecutive integers form a pair. Pairs with an id outside `1..=n`,
/// self-loops and repeated edges are dropped; a trailing unpaired integer is
/// ignored.
///
/// # Examples
///
/// ```
/// use kcolor_hea::graph::parse_edge_list;
///
/// let g = parse_edge_list("((1,2),(2,3),(3,3),(2,1),(4,9))", 4);
/// assert_eq!(g.edge_count(), 2);
/// ```
pub fn parse_edge_list(input: &str, n: usize) -> Graph {
    let tokens = integer_tokens(input);
    let mut edges = Vec::new();
    let mut seen = HashSet::new();
    let mut dropped = 0usize;
    for pair in tokens.chunks_exact(2) {
        match classify(pair[0], pair[1], n, &mut seen) {
            Ok(edge) => edges.push(edge),
            Err(_) => dropped += 1,
        }
    }
    if dropped > 0 || tokens.len() % 2 == 1 {
        log::debug!(
            "edge list: kept {} pairs, dropped {} (trailing token: {})",
            edges.len(),
            dropped,
            tokens.len() % 2 == 1
        );
    }
    Graph::from_dense_edges(n, &edges)
}

/// Strict counterpart of [`parse_edge_list`].
///
/// # Errors
///
/// [`ColoringError::MalformedInput`] on the first pair the permissive parser
/// would drop, or on a trailing unpaired integer.
pub fn parse_edge_list_strict(input: &str, n: usize) -> Result<Graph> {
    let tokens = integer_tokens(input);
    if tokens.len() % 2 == 1 {
        return Err(ColoringError::malformed(format!(
            "odd number of integers ({}): last one has no partner",
            tokens.len()
        )));
    }
    let mut edges = Vec::with_capacity(tokens.len() / 2);
    let mut seen = HashSet::new();
    for pair in tokens.chunks_exact(2) {
        edges.push(classify(pair[0], pair[1], n, &mut seen)?);
    }
    Ok(Graph::from_dense_edges(n, &edges))
}

/// Reads the signed integers of `input`. A run too large for `i64` becomes
/// `None`: it still takes its pair slot, and that pair is dropped.
fn integer_tokens(input: &str) -> Vec<Option<i64>> {
    let bytes = input.as_bytes();
    let mut tokens = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        let signed = bytes[i] == b'-'
            && bytes.get(i + 1).is_some_and(u8::is_ascii_digit)
            && (i == 0 || !bytes[i - 1].is_ascii_digit());
        if !(signed || bytes[i].is_ascii_digit()) {
            i += 1;
            continue;
        }
        let start = i;
        i += 1;
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        tokens.push(input[start..i].parse::<i64>().ok());
    }
    tokens
}

/// Validates one pair and turns it into a dense edge.
fn classify(
    a: Option<i64>,
    b: Option<i64>,
    n: usize,
    seen: &mut HashSet<(usize, usize)>,
) -> Result<(usize, usize)> {
    let to_index = |x: Option<i64>| -> Result<usize> {
        match x {
            Some(v) if v >= 1 && (v as u64) <= n as u64 => Ok(v as usize - 1),
            Some(v) => Err(ColoringError::malformed(format!(
                "vertex {v} outside 1..={n}"
            ))),
            None => Err(ColoringError::malformed("token is not an integer")),
        }
    };
    let (i, j) = (to_index(a)?, to_index(b)?);
    if i == j {
        return Err(ColoringError::malformed(format!("self-loop on vertex {}", i + 1)));
    }
    if !seen.insert((i.min(j), i.max(j))) {
        return Err(ColoringError::malformed(format!(
            "duplicate edge ({},{})",
            i + 1,
            j + 1
        )));
    }
    Ok((i, j))
}

// ---------------------------------------------------------------------------
// DIMACS
// ---------------------------------------------------------------------------

fn number(input: &str) -> IResult<&str, usize> {
    map_res(digit1, |s: &str| s.parse::<usize>())(input)
}

/// `p edge <n> <m>` (the format word is not checked)
fn header(input: &str) -> IResult<&str, (usize, usize)> {
    let (rest, (_, _, _, _, n, _, m)) =
        tuple((tag("p"), space1, alpha1, space1, number, space1, number))(input)?;
    Ok((rest, (n, m)))
}

/// `e <u> <v>`
fn edge_line(input: &str) -> IResult<&str, (usize, usize)> {
    let (rest, (_, _, u, _, v)) = tuple((tag("e"), space1, number, space1, number))(input)?;
    Ok((rest, (u, v)))
}

/// Parses a DIMACS graph coloring instance (`.col` text).
///
/// Comment lines start with `c`; the `p` header must come before any `e`
/// line. Repeated edges are merged (several public benchmark files list
/// both orientations).
///
/// # Errors
///
/// [`ColoringError::MalformedInput`] on a missing or repeated header, an
/// unreadable line, a self-loop, or an endpoint outside `1..=n`.
pub fn parse_dimacs(input: &str) -> Result<Graph> {
    let mut n: Option<usize> = None;
    let mut declared_edges = 0usize;
    let mut edges = Vec::new();

    for (line_no, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('c') {
            continue;
        }
        if line.starts_with('p') {
            if n.is_some() {
                return Err(ColoringError::malformed(format!(
                    "line {}: second problem header",
                    line_no + 1
                )));
            }
            let (_, (nb_vertices, nb_edges)) = all_consuming(terminated(header, space0))(line)
                .map_err(|_| {
                    ColoringError::malformed(format!("line {}: bad header '{line}'", line_no + 1))
                })?;
            n = Some(nb_vertices);
            declared_edges = nb_edges;
            continue;
        }
        let nb_vertices = n.ok_or_else(|| {
            ColoringError::malformed(format!("line {}: edge before problem header", line_no + 1))
        })?;
        let (_, (u, v)) = all_consuming(terminated(edge_line, space0))(line).map_err(|_| {
            ColoringError::malformed(format!("line {}: bad edge '{line}'", line_no + 1))
        })?;
        if u == 0 || v == 0 || u > nb_vertices || v > nb_vertices {
            return Err(ColoringError::malformed(format!(
                "line {}: edge ({u},{v}) outside 1..={nb_vertices}",
                line_no + 1
            )));
        }
        if u == v {
            return Err(ColoringError::malformed(format!(
                "line {}: self-loop on vertex {u}",
                line_no + 1
            )));
        }
        edges.push((u - 1, v - 1));
    }

    let nb_vertices = n.ok_or_else(|| ColoringError::malformed("missing problem header"))?;
    let graph = Graph::from_dense_edges(nb_vertices, &edges);
    if graph.edge_count() != declared_edges {
        log::warn!(
            "dimacs header declares {} edges, read {} distinct edges",
            declared_edges,
            graph.edge_count()
        );
    }
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ---- edge lists ----

    #[test]
    fn test_nested_pairs() {
        let g = parse_edge_list("((1,2),(2,3),(3,4),(4,1))", 4);
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn test_whitespace_ignored() {
        let g = parse_edge_list("  ( ( 1 , 2 )\n,\t( 2 , 3 ) ) ", 3);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_permissive_drops() {
        // out of range, self-loop, duplicate, reverse duplicate, trailing token
        let g = parse_edge_list("(1,2),(0,1),(2,9),(3,3),(1,2),(2,1),(2,3),(4", 3);
        assert_eq!(g.edge_count(), 2);
        assert!(g.are_adjacent(0, 1));
        assert!(g.are_adjacent(1, 2));
    }

    #[test]
    fn test_negative_ids_dropped() {
        let g = parse_edge_list("(-1,2),(1,2)", 2);
        assert_eq!(g.edge_count(), 1);
    }

    #[test]
    fn test_stray_dash_keeps_pairs_aligned() {
        let g = parse_edge_list("((1,2) - (2,3),(3,4))", 4);
        assert_eq!(g.edge_count(), 3, "a lone dash must not shift later pairs");
        assert!(g.are_adjacent(2, 3));
        let g = parse_edge_list("(1,2) -- -, (2,3)", 3);
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_dash_between_digits_separates() {
        let g = parse_edge_list("1-2, 2-3, 3-4", 4);
        assert_eq!(g.edge_count(), 3);
        assert!(g.are_adjacent(0, 1));
        assert!(g.are_adjacent(1, 2));
        assert!(g.are_adjacent(2, 3));
        assert!(parse_edge_list_strict("1-2 2-3", 3).is_ok());
    }

    #[test]
    fn test_overflow_drops_only_its_pair() {
        let g = parse_edge_list("(99999999999999999999,1),(1,2)", 2);
        assert_eq!(g.edge_count(), 1);
        assert!(parse_edge_list_strict("(99999999999999999999,1)", 2).is_err());
    }

    #[test]
    fn test_strict_rejects() {
        assert!(parse_edge_list_strict("(1,2),(2,3)", 3).is_ok());
        assert!(matches!(
            parse_edge_list_strict("(1,2),(3,3)", 3),
            Err(ColoringError::MalformedInput(_))
        ));
        assert!(parse_edge_list_strict("(1,2),(1,2)", 3).is_err());
        assert!(parse_edge_list_strict("(1,5)", 3).is_err());
        assert!(parse_edge_list_strict("(1,2),(3", 3).is_err());
    }

    #[test]
    fn test_empty_input() {
        let g = parse_edge_list("", 0);
        assert!(g.is_empty());
        let g = parse_edge_list("()", 5);
        assert_eq!(g.vertex_count(), 5);
        assert_eq!(g.edge_count(), 0);
    }

    // ---- DIMACS ----

    const GRID2X2: &str = "c grid 2x2\np edge 4 4\ne 1 2\ne 1 3\ne 2 4\ne 3 4\n";

    #[test]
    fn test_dimacs_grid() {
        let g = parse_dimacs(GRID2X2).unwrap();
        assert_eq!(g.vertex_count(), 4);
        assert_eq!(g.edge_count(), 4);
        assert_eq!(g.neighbors(0), &[1, 2]);
    }

    #[test]
    fn test_dimacs_duplicates_merged() {
        let g = parse_dimacs("p edge 3 3\ne 1 2\ne 2 1\ne 2 3\n").unwrap();
        assert_eq!(g.edge_count(), 2);
    }

    #[test]
    fn test_dimacs_errors() {
        assert!(parse_dimacs("e 1 2\n").is_err());
        assert!(parse_dimacs("c nothing\n").is_err());
        assert!(parse_dimacs("p edge 2 1\ne 1 3\n").is_err());
        assert!(parse_dimacs("p edge 2 1\ne 1 1\n").is_err());
        assert!(parse_dimacs("p edge 2 1\np edge 2 1\n").is_err());
        assert!(parse_dimacs("p edge 2 1\nx 1 2\n").is_err());
        assert!(parse_dimacs("p edge 2 1\ne 1 two\n").is_err());
    }
}
