//! Tabu memory and refinement results.

use crate::coloring::{Color, Coloring};

/// Dense `|V| × k` table of "forbidden until" iterations.
///
/// A move of vertex `v` to color `c` is tabu while the current iteration
/// is below `forbidden_until[v][c]`. Entries start at 0 (never forbidden).
#[derive(Debug, Clone, Default)]
pub struct TabuMemory {
    k: usize,
    forbidden_until: Vec<usize>,
}

impl TabuMemory {
    /// Table for `n` vertices and colors `1..=k`, nothing forbidden.
    pub fn new(n: usize, k: usize) -> Self {
        Self {
            k,
            forbidden_until: vec![0; n * k],
        }
    }

    /// Clears the table for a new run, reusing its allocation.
    pub fn reset(&mut self, n: usize, k: usize) {
        self.k = k;
        self.forbidden_until.clear();
        self.forbidden_until.resize(n * k, 0);
    }

    /// true if moving `v` to `c` is forbidden at `iteration`
    #[inline]
    pub fn is_tabu(&self, v: usize, c: Color, iteration: usize) -> bool {
        iteration < self.forbidden_until[self.slot(v, c)]
    }

    /// forbids moving `v` to `c` before iteration `until`
    #[inline]
    pub fn forbid(&mut self, v: usize, c: Color, until: usize) {
        let slot = self.slot(v, c);
        self.forbidden_until[slot] = until;
    }

    #[inline]
    fn slot(&self, v: usize, c: Color) -> usize {
        debug_assert!(c >= 1 && c <= self.k);
        v * self.k + (c - 1)
    }
}

/// Result of one TabuCol run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabuResult {
    /// Best coloring seen during the run.
    pub coloring: Coloring,
    /// Conflicts of `coloring`.
    pub conflicts: usize,
    /// Iterations executed.
    pub iterations: usize,
    /// Iteration after which `coloring` was reached (0: the seed itself).
    pub best_iteration: usize,
    /// Number of random moves forced by a full tabu lock.
    pub forced_moves: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_forbid_window() {
        let mut memory = TabuMemory::new(3, 2);
        assert!(!memory.is_tabu(1, 2, 0));
        memory.forbid(1, 2, 5);
        assert!(memory.is_tabu(1, 2, 4));
        assert!(!memory.is_tabu(1, 2, 5));
        assert!(!memory.is_tabu(1, 1, 4));
        assert!(!memory.is_tabu(0, 2, 4));
    }

    #[test]
    fn test_reset_clears() {
        let mut memory = TabuMemory::new(2, 2);
        memory.forbid(0, 1, 100);
        memory.reset(4, 3);
        assert!(!memory.is_tabu(0, 1, 0));
        memory.forbid(3, 3, 10);
        assert!(memory.is_tabu(3, 3, 9));
    }
}
