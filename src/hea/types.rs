//! Population data types.

use crate::coloring::Coloring;

/// A coloring together with its conflict count.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Individual {
    /// Complete coloring in `1..=k`.
    pub coloring: Coloring,
    /// Conflicting edges of `coloring`.
    pub conflicts: usize,
}

/// Fixed-size population plus the best individual ever seen.
///
/// Individuals are replaced by value only, never edited in place. Cloning a
/// population deep-copies every coloring.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Population {
    pub(crate) individuals: Vec<Individual>,
    pub(crate) best: Individual,
    pub(crate) generation: usize,
}

impl Population {
    /// Wraps a non-empty set of individuals at generation 0.
    ///
    /// Returns `None` if `individuals` is empty.
    pub fn new(individuals: Vec<Individual>) -> Option<Self> {
        let best = individuals.iter().min_by_key(|ind| ind.conflicts)?.clone();
        Some(Self {
            individuals,
            best,
            generation: 0,
        })
    }

    /// current individuals
    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    /// number of individuals
    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    /// always false for a constructed population
    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    /// best individual seen since initialization (it may have left the population)
    pub fn best(&self) -> &Individual {
        &self.best
    }

    /// generations run so far
    pub fn generation(&self) -> usize {
        self.generation
    }

    /// index of the individual with the most conflicts (first on ties)
    pub fn worst_index(&self) -> usize {
        let mut worst = 0;
        for (i, ind) in self.individuals.iter().enumerate() {
            if ind.conflicts > self.individuals[worst].conflicts {
                worst = i;
            }
        }
        worst
    }

    /// true if some individual has exactly `conflicts` conflicts
    pub fn has_conflict_count(&self, conflicts: usize) -> bool {
        self.individuals.iter().any(|ind| ind.conflicts == conflicts)
    }
}

/// Phase of a hybrid evolutionary run.
///
/// Initialization happens inside the first [`Hea::advance`](super::Hea::advance)
/// call, so it is never observed between calls.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeaStatus {
    /// No population yet.
    Uninitialized,
    /// Population built; generations can run.
    Iterating,
    /// A conflict-free coloring was found.
    Converged,
    /// The generation budget ran out.
    Exhausted,
}

impl HeaStatus {
    /// true for `Converged` and `Exhausted`
    pub fn is_terminal(self) -> bool {
        matches!(self, HeaStatus::Converged | HeaStatus::Exhausted)
    }
}

/// Outcome of one initialization or generation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    /// Status after the step.
    pub status: HeaStatus,
    /// Generations completed after the step.
    pub generation: usize,
    /// Best individual so far.
    pub best: Individual,
    /// Human-readable account of the step's decisions.
    pub messages: Vec<String>,
}

impl StepReport {
    /// true if the run has ended
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }
}
