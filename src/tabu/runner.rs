//! TabuCol execution engine.
//!
//! # Algorithm
//!
//! 1. Repair the seed: colors outside `1..=k` become uniform random colors
//! 2. At each iteration:
//!    a. Collect the vertices touching a conflicting edge
//!    b. Evaluate every recoloring of those vertices through the
//!       neighbor-color table (`delta = γ[v][new] - γ[v][old]`)
//!    c. Keep the best non-tabu move, or a tabu move that would beat the
//!       best conflict count ever seen (aspiration); equal deltas replace the
//!       current choice with probability 1/2
//!    d. Apply it and forbid the vertex from returning to its old color for
//!       `tenure + jitter` iterations
//!    e. If every move is tabu, recolor a random conflicted vertex at random
//! 3. Stop at the iteration budget or as soon as no conflict remains
//!
//! # Reference
//!
//! Hertz, A. & de Werra, D. (1987). "Using tabu search techniques for graph
//! coloring", *Computing* 39(4), 345-351.
//! Galinier, P. & Hao, J.-K. (1999). "Hybrid evolutionary algorithms for
//! graph coloring", *Journal of Combinatorial Optimization* 3(4), 379-397.

use rand::Rng;

use super::config::TabuConfig;
use super::types::{TabuMemory, TabuResult};
use crate::coloring::{count_conflicts, Color, Coloring};
use crate::error::{ColoringError, Result};
use crate::graph::Graph;

/// Refines `seed` with TabuCol and returns the best coloring seen with its
/// conflict count.
///
/// Shorthand for [`TabuRunner::run`] with a [`TabuConfig`] built from
/// `max_iter` and `tenure` (default jitter).
///
/// # Errors
///
/// [`ColoringError::InvalidParameter`] if `k < 1`, `max_iter == 0`, or the
/// seed does not cover the graph.
pub fn refine_with_tabu<R: Rng>(
    graph: &Graph,
    k: usize,
    seed: &Coloring,
    max_iter: usize,
    tenure: usize,
    rng: &mut R,
) -> Result<(Coloring, usize)> {
    let config = TabuConfig::default()
        .with_max_iterations(max_iter)
        .with_tabu_tenure(tenure);
    let result = TabuRunner::run(graph, k, seed, &config, rng)?;
    Ok((result.coloring, result.conflicts))
}

/// TabuCol runner.
pub struct TabuRunner;

impl TabuRunner {
    /// Executes TabuCol from `seed`.
    ///
    /// # Errors
    ///
    /// [`ColoringError::InvalidParameter`] if `k < 1`, the configuration is
    /// invalid, or the seed does not cover the graph.
    pub fn run<R: Rng>(
        graph: &Graph,
        k: usize,
        seed: &Coloring,
        config: &TabuConfig,
        rng: &mut R,
    ) -> Result<TabuResult> {
        let mut memory = TabuMemory::default();
        Self::run_with_memory(graph, k, seed, config, &mut memory, rng)
    }

    /// Same as [`TabuRunner::run`], reusing `memory`'s allocation. The
    /// memory is reset before the search starts.
    pub fn run_with_memory<R: Rng>(
        graph: &Graph,
        k: usize,
        seed: &Coloring,
        config: &TabuConfig,
        memory: &mut TabuMemory,
        rng: &mut R,
    ) -> Result<TabuResult> {
        if k < 1 {
            return Err(ColoringError::invalid_parameter("k must be at least 1"));
        }
        config.validate()?;
        if seed.len() != graph.vertex_count() {
            return Err(ColoringError::invalid_parameter(format!(
                "seed colors {} vertices, graph has {}",
                seed.len(),
                graph.vertex_count()
            )));
        }

        let mut state = SearchState::new(graph, k, seed, rng);
        let initial_conflicts = state.nb_conflicts;
        let mut best = state.colors.clone();
        let mut best_conflicts = state.nb_conflicts;
        let mut best_iteration = 0;
        let mut iterations = 0;
        let mut forced_moves = 0;

        // with a single color no recoloring exists
        let searchable = k > 1 && graph.edge_count() > 0;
        if searchable {
            memory.reset(graph.vertex_count(), k);
        }

        let mut conflicted = Vec::new();
        for iter in 0..config.max_iterations {
            if !searchable || best_conflicts == 0 {
                break;
            }
            state.conflicted_vertices(&mut conflicted);
            if conflicted.is_empty() {
                break;
            }
            iterations += 1;

            match state.best_move(&conflicted, memory, iter, best_conflicts, rng) {
                Some((v, c, delta)) => {
                    let old = state.colors.get(v);
                    state.apply_move(v, c);
                    state.nb_conflicts = (state.nb_conflicts as i64 + delta) as usize;
                    let jitter = if config.tenure_jitter > 0 {
                        rng.random_range(0..=config.tenure_jitter)
                    } else {
                        0
                    };
                    memory.forbid(v, old, iter + config.tabu_tenure + jitter);
                }
                None => {
                    let v = conflicted[rng.random_range(0..conflicted.len())];
                    let c = rng.random_range(1..=k);
                    state.apply_move(v, c);
                    state.nb_conflicts = count_conflicts(graph, &state.colors);
                    forced_moves += 1;
                    log::trace!("tabu iter {}: full lock, forced v{} -> {}", iter, v, c);
                }
            }

            if state.nb_conflicts < best_conflicts {
                best_conflicts = state.nb_conflicts;
                best.clone_from(&state.colors);
                best_iteration = iter + 1;
                log::trace!("tabu iter {}: new best {}", iter, best_conflicts);
            }
        }

        debug_assert_eq!(best_conflicts, count_conflicts(graph, &best));
        log::debug!(
            "tabu: k={} conflicts {} -> {} in {} iterations ({} forced)",
            k,
            initial_conflicts,
            best_conflicts,
            iterations,
            forced_moves
        );

        Ok(TabuResult {
            coloring: best,
            conflicts: best_conflicts,
            iterations,
            best_iteration,
            forced_moves,
        })
    }
}

/// Current coloring with its neighbor-color table.
struct SearchState<'g> {
    graph: &'g Graph,
    k: usize,
    /// current coloring
    colors: Coloring,
    /// nb_neigh_colors[v * (k + 1) + c]: neighbors of v holding color c
    nb_neigh_colors: Vec<usize>,
    /// conflicting edges of `colors`
    nb_conflicts: usize,
}

impl<'g> SearchState<'g> {
    fn new<R: Rng>(graph: &'g Graph, k: usize, seed: &Coloring, rng: &mut R) -> Self {
        let mut colors = seed.clone();
        for v in 0..colors.len() {
            if !(1..=k).contains(&colors.get(v)) {
                colors.set(v, rng.random_range(1..=k));
            }
        }
        let n = graph.vertex_count();
        let mut nb_neigh_colors = vec![0; n * (k + 1)];
        for &(u, v) in graph.edges() {
            nb_neigh_colors[u * (k + 1) + colors.get(v)] += 1;
            nb_neigh_colors[v * (k + 1) + colors.get(u)] += 1;
        }
        let nb_conflicts = count_conflicts(graph, &colors);
        Self {
            graph,
            k,
            colors,
            nb_neigh_colors,
            nb_conflicts,
        }
    }

    #[inline]
    fn neigh(&self, v: usize, c: Color) -> usize {
        self.nb_neigh_colors[v * (self.k + 1) + c]
    }

    /// fills `out` with the vertices having a neighbor of their own color
    fn conflicted_vertices(&self, out: &mut Vec<usize>) {
        out.clear();
        out.extend((0..self.colors.len()).filter(|&v| self.neigh(v, self.colors.get(v)) > 0));
    }

    /// best admissible (vertex, color, delta), or `None` under a full lock
    fn best_move<R: Rng>(
        &self,
        conflicted: &[usize],
        memory: &TabuMemory,
        iteration: usize,
        best_conflicts: usize,
        rng: &mut R,
    ) -> Option<(usize, Color, i64)> {
        let mut chosen: Option<(usize, Color, i64)> = None;
        for &v in conflicted {
            let old = self.colors.get(v);
            let old_count = self.neigh(v, old) as i64;
            for c in 1..=self.k {
                if c == old {
                    continue;
                }
                let delta = self.neigh(v, c) as i64 - old_count;
                let aspires = self.nb_conflicts as i64 + delta < best_conflicts as i64;
                if memory.is_tabu(v, c, iteration) && !aspires {
                    continue;
                }
                chosen = match chosen {
                    None => Some((v, c, delta)),
                    Some((_, _, d)) if delta < d => Some((v, c, delta)),
                    Some((_, _, d)) if delta == d && rng.random_bool(0.5) => Some((v, c, delta)),
                    keep => keep,
                };
            }
        }
        chosen
    }

    /// recolors v and updates the neighbor-color table (not the conflict count)
    fn apply_move(&mut self, v: usize, c: Color) {
        let old = self.colors.get(v);
        if old == c {
            return;
        }
        let stride = self.k + 1;
        for &u in self.graph.neighbors(v) {
            debug_assert!(self.nb_neigh_colors[u * stride + old] > 0);
            self.nb_neigh_colors[u * stride + old] -= 1;
            self.nb_neigh_colors[u * stride + c] += 1;
        }
        self.colors.set(v, c);
    }
}
