//! Error types for local search runs.

use thiserror::Error;

/// Errors raised before a search starts.
///
/// Every runner validates its inputs up front, so a search that begins
/// always runs to one of its own stopping rules.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SearchError {
    /// Bounds are empty, non-finite, inverted, or do not match a point.
    #[error("invalid bounds: {0}")]
    InvalidBounds(String),

    /// A hyperparameter is outside its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
}

/// Result type alias for local search operations.
pub type Result<T> = std::result::Result<T, SearchError>;

pub(crate) fn validate_epsilon(epsilon: f64) -> Result<()> {
    if !epsilon.is_finite() || epsilon < 0.0 {
        return Err(SearchError::InvalidConfiguration(format!(
            "epsilon must be finite and non-negative, got {epsilon}"
        )));
    }
    Ok(())
}

/// Perturbations are drawn from `[-step, step]`, so the full width
/// `2 * step` has to stay finite as well.
pub(crate) fn validate_step_size(step: f64) -> Result<()> {
    if !step.is_finite() || step <= 0.0 || !(2.0 * step).is_finite() {
        return Err(SearchError::InvalidConfiguration(format!(
            "step_size must be positive with a finite range width, got {step}"
        )));
    }
    Ok(())
}
