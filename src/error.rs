//! Error types for the coloring engine.
//!
//! All validation happens at the public entry points; the algorithms
//! themselves never fail on well-formed input.

use thiserror::Error;

/// Unified error type for all coloring operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColoringError {
    /// A numeric parameter is out of its accepted range
    /// (`k < 1`, `pop_size < 1`, zero iteration budget, probability outside `[0, 1]`).
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// A graph built programmatically violates the graph invariants.
    #[error("invalid graph: {0}")]
    InvalidGraph(String),

    /// A strict parser met a token it refuses to drop silently.
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

impl ColoringError {
    /// Creates an invalid parameter error.
    pub fn invalid_parameter(message: impl Into<String>) -> Self {
        ColoringError::InvalidParameter(message.into())
    }

    /// Creates an invalid graph error.
    pub fn invalid_graph(message: impl Into<String>) -> Self {
        ColoringError::InvalidGraph(message.into())
    }

    /// Creates a malformed input error.
    pub fn malformed(message: impl Into<String>) -> Self {
        ColoringError::MalformedInput(message.into())
    }
}

/// Result type alias for coloring operations.
pub type Result<T> = std::result::Result<T, ColoringError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ColoringError::invalid_parameter("k must be at least 1");
        assert_eq!(err.to_string(), "invalid parameter: k must be at least 1");

        let err = ColoringError::invalid_graph("self-loop on vertex 3");
        assert_eq!(err.to_string(), "invalid graph: self-loop on vertex 3");

        let err = ColoringError::malformed("dangling token '7'");
        assert_eq!(err.to_string(), "malformed input: dangling token '7'");
    }
}
