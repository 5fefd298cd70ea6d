//! Hill climbing configuration.

use crate::error::{validate_epsilon, validate_step_size, Result};

/// Configuration for steepest-descent hill climbing.
///
/// # Examples
///
/// ```
/// use u_localsearch::hill::HillClimbingConfig;
///
/// let config = HillClimbingConfig::default()
///     .with_iterations(500)
///     .with_step_size(0.05)
///     .with_seed(7);
/// assert_eq!(config.iterations, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingConfig {
    /// Maximum number of descent steps.
    pub iterations: usize,

    /// Improvements smaller than this stop the search.
    pub epsilon: f64,

    /// Offset applied to one coordinate at a time when building neighbors.
    pub step_size: f64,

    /// Random seed for the initial point.
    pub seed: Option<u64>,
}

impl Default for HillClimbingConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            epsilon: 1e-6,
            step_size: 0.1,
            seed: None,
        }
    }
}

impl HillClimbingConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_epsilon(mut self, epsilon: f64) -> Self {
        self.epsilon = epsilon;
        self
    }

    pub fn with_step_size(mut self, step: f64) -> Self {
        self.step_size = step;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_epsilon(self.epsilon)?;
        validate_step_size(self.step_size)
    }
}
