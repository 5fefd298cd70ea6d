//! SA configuration.

use crate::error::{validate_epsilon, validate_step_size, Result, SearchError};
use crate::space::BoundPolicy;

/// Configuration for the Simulated Annealing algorithm.
///
/// Cooling is geometric: `T_{k+1} = cooling_rate * T_k`, applied once per
/// iteration. The search freezes once `T` drops below `epsilon`.
///
/// # Examples
///
/// ```
/// use u_localsearch::sa::SaConfig;
///
/// let config = SaConfig::default()
///     .with_initial_temperature(100.0)
///     .with_cooling_rate(0.98)
///     .with_iterations(5000)
///     .with_seed(42);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaConfig {
    /// Maximum number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Initial temperature. Higher values allow more exploration.
    pub initial_temperature: f64,

    /// Geometric cooling factor. Values in (0, 1) cool; 1 or more never freezes.
    pub cooling_rate: f64,

    /// The algorithm stops when the temperature drops below this.
    pub epsilon: f64,

    /// Half-width of the uniform perturbation applied to each coordinate.
    pub step_size: f64,

    /// Handling of neighbors outside the bounds.
    pub bound_policy: BoundPolicy,

    /// Random seed for reproducibility.
    pub seed: Option<u64>,
}

impl Default for SaConfig {
    fn default() -> Self {
        Self {
            iterations: 1000,
            initial_temperature: 1000.0,
            cooling_rate: 0.95,
            epsilon: 1e-6,
            step_size: 1.0,
            bound_policy: BoundPolicy::Unconstrained,
            seed: None,
        }
    }
}

impl SaConfig {
    pub fn with_iterations(mut self, n: usize) -> Self {
        self.iterations = n;
        self
    }

    pub fn with_initial_temperature(mut self, t: f64) -> Self {
        self.initial_temperature = t;
        self
    }

    pub fn with_cooling_rate(mut self, rate: f64) -> Self {
        self.cooling_rate = rate;
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
        if !self.initial_temperature.is_finite() || self.initial_temperature <= 0.0 {
            return Err(SearchError::InvalidConfiguration(format!(
                "initial_temperature must be finite and positive, got {}",
                self.initial_temperature
            )));
        }
        if !self.cooling_rate.is_finite() || self.cooling_rate <= 0.0 {
            return Err(SearchError::InvalidConfiguration(format!(
                "cooling_rate must be finite and positive, got {}",
                self.cooling_rate
            )));
        }
        validate_epsilon(self.epsilon)?;
        validate_step_size(self.step_size)
    }
}
