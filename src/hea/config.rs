//! HEA configuration.
//!
//! [`AlgorithmParams`] holds every parameter of a hybrid evolutionary run.

use crate::error::{ColoringError, Result};
use crate::tabu::TabuConfig;

/// Parameters of the hybrid evolutionary algorithm.
///
/// # Defaults
///
/// ```
/// use kcolor_hea::hea::AlgorithmParams;
///
/// let params = AlgorithmParams::default();
/// assert_eq!(params.pop_size, 10);
/// assert_eq!(params.tournament_size, 3);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use kcolor_hea::hea::AlgorithmParams;
///
/// let params = AlgorithmParams::new(4)
///     .with_pop_size(20)
///     .with_max_iter_hea(500)
///     .with_tabu_tenure(10)
///     .with_max_iter_tabu(2000)
///     .with_seed(42);
/// assert!(params.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgorithmParams {
    /// Target number of colors. Must be at least 1.
    pub k: usize,

    /// Number of individuals in the population. Must be at least 1.
    pub pop_size: usize,

    /// Generation budget.
    pub max_iter_hea: usize,

    /// Saturation tie-break weight.
    ///
    /// Accepted and carried unchanged; no algorithm reads it yet.
    pub alpha: f64,

    /// Base tabu tenure of every refinement call.
    pub tabu_tenure: usize,

    /// Iteration budget of every refinement call.
    pub max_iter_tabu: usize,

    /// Individuals sampled (with replacement) per tournament.
    pub tournament_size: usize,

    /// Seed used by [`HeaRunner`](super::HeaRunner). `None` draws one at random.
    pub seed: Option<u64>,
}

impl Default for AlgorithmParams {
    fn default() -> Self {
        Self {
            k: 3,
            pop_size: 10,
            max_iter_hea: 100,
            alpha: 0.0,
            tabu_tenure: 7,
            max_iter_tabu: 1000,
            tournament_size: 3,
            seed: None,
        }
    }
}

impl AlgorithmParams {
    /// Default parameters targeting `k` colors.
    pub fn new(k: usize) -> Self {
        Self {
            k,
            ..Self::default()
        }
    }

    /// Sets the number of colors.
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    /// Sets the population size.
    pub fn with_pop_size(mut self, n: usize) -> Self {
        self.pop_size = n;
        self
    }

    /// Sets the generation budget.
    pub fn with_max_iter_hea(mut self, n: usize) -> Self {
        self.max_iter_hea = n;
        self
    }

    /// Sets alpha.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the tabu tenure.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the iteration budget of each refinement call.
    pub fn with_max_iter_tabu(mut self, n: usize) -> Self {
        self.max_iter_tabu = n;
        self
    }

    /// Sets the tournament size.
    pub fn with_tournament_size(mut self, size: usize) -> Self {
        self.tournament_size = size;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Tabu configuration used for every refinement of the run.
    pub fn tabu_config(&self) -> TabuConfig {
        TabuConfig::default()
            .with_max_iterations(self.max_iter_tabu)
            .with_tabu_tenure(self.tabu_tenure)
    }

    /// Validates the parameters.
    ///
    /// # Errors
    ///
    /// [`ColoringError::InvalidParameter`] naming the first offending field.
    pub fn validate(&self) -> Result<()> {
        if self.k < 1 {
            return Err(ColoringError::invalid_parameter("k must be at least 1"));
        }
        if self.pop_size < 1 {
            return Err(ColoringError::invalid_parameter("pop_size must be at least 1"));
        }
        if self.max_iter_hea == 0 {
            return Err(ColoringError::invalid_parameter(
                "max_iter_hea must be at least 1",
            ));
        }
        if self.max_iter_tabu == 0 {
            return Err(ColoringError::invalid_parameter(
                "max_iter_tabu must be at least 1",
            ));
        }
        if self.tournament_size == 0 {
            return Err(ColoringError::invalid_parameter(
                "tournament_size must be at least 1",
            ));
        }
        if !self.alpha.is_finite() {
            return Err(ColoringError::invalid_parameter("alpha must be finite"));
        }
        Ok(())
    }
}
