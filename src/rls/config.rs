//! Random local search configuration.

use crate::error::{validate_epsilon, validate_step_size, Result, SearchError};
use crate::space::BoundPolicy;

/// Configuration for random local search.
///
/// # Examples
///
/// ```
/// use u_localsearch::rls::RlsConfig;
/// use u_localsearch::space::BoundPolicy;
///
/// let config = RlsConfig::default()
///     .with_acceptance_probability(0.1)
///     .with_bound_policy(BoundPolicy::Clamp)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RlsConfig {
    /// Maximum number of candidates drawn.
    pub iterations: usize,

    /// A candidate whose value is within epsilon of the current value
    /// ends the search.
    pub epsilon: f64,

    /// Half-width of the uniform perturbation applied to each coordinate.
    pub step_size: f64,

    /// Probability of accepting a candidate that does not improve.
    pub acceptance_probability: f64,

    /// Handling of candidates outside the bounds.
    pub bound_policy: BoundPolicy,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for RlsConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            epsilon: 1e-6,
            step_size: 0.5,
            acceptance_probability: 0.2,
            bound_policy: BoundPolicy::Unconstrained,
            seed: None,
        }
    }
}

impl RlsConfig {
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

    pub fn with_acceptance_probability(mut self, p: f64) -> Self {
        self.acceptance_probability = p;
        self
    }

    pub fn with_bound_policy(mut self, policy: BoundPolicy) -> Self {
        self.bound_policy = policy;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        validate_epsilon(self.epsilon)?;
        validate_step_size(self.step_size)?;
        if !(0.0..=1.0).contains(&self.acceptance_probability) {
            return Err(SearchError::InvalidConfiguration(format!(
                "acceptance_probability must be in [0, 1], got {}",
                self.acceptance_probability
            )));
        }
        Ok(())
    }
}
