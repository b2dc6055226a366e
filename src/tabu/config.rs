//! TabuCol configuration.

use crate::error::{ColoringError, Result};

/// Configuration parameters for the TabuCol refiner.
///
/// # Examples
///
/// ```
/// use kcolor_hea::tabu::TabuConfig;
///
/// let config = TabuConfig::default()
///     .with_max_iterations(1000)
///     .with_tabu_tenure(7)
///     .with_tenure_jitter(0);
/// assert_eq!(config.max_iterations, 1000);
/// assert_eq!(config.tabu_tenure, 7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TabuConfig {
    /// Iteration budget of one refinement call.
    pub max_iterations: usize,
    /// How many iterations a vertex may not return to the color it left.
    pub tabu_tenure: usize,
    /// Inclusive upper bound of a uniform random amount added to the tenure
    /// of each move (0 disables the jitter).
    pub tenure_jitter: usize,
}

impl Default for TabuConfig {
    fn default() -> Self {
        Self {
            max_iterations: 1000,
            tabu_tenure: 7,
            tenure_jitter: 1,
        }
    }
}

impl TabuConfig {
    /// Sets the iteration budget.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the base tabu tenure.
    pub fn with_tabu_tenure(mut self, tenure: usize) -> Self {
        self.tabu_tenure = tenure;
        self
    }

    /// Sets the tenure jitter bound.
    pub fn with_tenure_jitter(mut self, jitter: usize) -> Self {
        self.tenure_jitter = jitter;
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// [`ColoringError::InvalidParameter`] if the iteration budget is zero.
    pub fn validate(&self) -> Result<()> {
        if self.max_iterations == 0 {
            return Err(ColoringError::invalid_parameter(
                "tabu max_iterations must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = TabuConfig::default();
        assert_eq!(config.max_iterations, 1000);
        assert_eq!(config.tabu_tenure, 7);
        assert_eq!(config.tenure_jitter, 1);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder() {
        let config = TabuConfig::default()
            .with_max_iterations(50)
            .with_tabu_tenure(0)
            .with_tenure_jitter(3);
        assert_eq!(config.max_iterations, 50);
        assert_eq!(config.tabu_tenure, 0);
        assert_eq!(config.tenure_jitter, 3);
    }

    #[test]
    fn test_validate_zero_budget() {
        let config = TabuConfig::default().with_max_iterations(0);
        assert!(config.validate().is_err());
    }
}
