//! Random local search loop.

use super::config::RlsConfig;
use crate::error::Result;
use crate::objective::Objective;
use crate::random::rng_for;
use crate::space::{perturb, Bounds, Point};
use crate::termination::StopReason;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a random local search run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RlsResult {
    /// Current point when the search stopped. May lie outside the bounds
    /// under [`BoundPolicy::Unconstrained`](crate::space::BoundPolicy).
    pub point: Point,

    /// Objective value at `point`.
    pub value: f64,

    /// Lowest-valued point seen along the walk.
    pub best_point: Point,

    /// Objective value at `best_point`.
    pub best_value: f64,

    /// Number of candidates drawn.
    pub iterations: usize,

    /// Why the search stopped.
    pub stop_reason: StopReason,

    /// Number of candidates that became the current point.
    pub accepted_moves: usize,

    /// Current value after initialization and after every completed iteration.
    pub history: Vec<f64>,
}

/// Executes random local search.
pub struct RandomLocalSearch;

struct State {
    point: Point,
    value: f64,
}

impl RandomLocalSearch {
    /// Runs random local search from a uniformly random point inside `bounds`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::objective::sphere;
    /// use u_localsearch::rls::{RandomLocalSearch, RlsConfig};
    /// use u_localsearch::space::Bounds;
    ///
    /// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
    /// let config = RlsConfig::default().with_seed(42);
    /// let result = RandomLocalSearch::run(&sphere, &bounds, &config).unwrap();
    /// assert!(result.best_value <= result.history[0]);
    /// ```
    pub fn run<F>(objective: &F, bounds: &Bounds, config: &RlsConfig) -> Result<RlsResult>
    where
        F: Objective + ?Sized,
    {
        let mut rng = rng_for(config.seed);
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs random local search with an explicit random source.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<F, R>(
        objective: &F,
        bounds: &Bounds,
        config: &RlsConfig,
        rng: &mut R,
    ) -> Result<RlsResult>
    where
        F: Objective + ?Sized,
        R: Rng,
    {
        config.validate()?;

        let point = bounds.sample(rng);
        let value = objective.evaluate(&point);
        let mut state = State { point, value };
        let mut best_point = state.point.clone();
        let mut best_value = state.value;

        debug!(
            event = "search_start",
            algorithm = "random_local_search",
            dim = bounds.dim(),
            max_iterations = config.iterations,
            initial_value = state.value,
        );

        let mut history = vec![state.value];
        let mut stop_reason = StopReason::IterationLimit;
        let mut iterations = 0usize;
        let mut accepted_moves = 0usize;

        for _ in 0..config.iterations {
            iterations += 1;

            let candidate = config
                .bound_policy
                .apply(bounds, perturb(&state.point, config.step_size, rng));
            let candidate_value = objective.evaluate(&candidate);

            if (candidate_value - state.value).abs() < config.epsilon {
                stop_reason = StopReason::Plateau;
                break;
            }

            // The acceptance draw is only made for non-improving candidates.
            let accept = candidate_value < state.value
                || rng.random_range(0.0..1.0) < config.acceptance_probability;

            if accept {
                trace!(iteration = iterations, value = candidate_value, "accepted move");
                state = State {
                    point: candidate,
                    value: candidate_value,
                };
                accepted_moves += 1;

                if state.value < best_value {
                    best_point = state.point.clone();
                    best_value = state.value;
                }
            }

            history.push(state.value);
        }

        debug!(
            event = "search_end",
            algorithm = "random_local_search",
            iterations = iterations,
            accepted_moves = accepted_moves,
            stop_reason = ?stop_reason,
            value = state.value,
            best_value = best_value,
        );

        Ok(RlsResult {
            point: state.point,
            value: state.value,
            best_point,
            best_value,
            iterations,
            stop_reason,
            accepted_moves,
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::objective::sphere;
    use crate::random::create_rng;
    use crate::space::BoundPolicy;
    use std::cell::RefCell;

    fn square() -> Bounds {
        Bounds::uniform(2, -5.0, 5.0).unwrap()
    }

    #[test]
    fn test_constant_objective_hits_plateau() {
        let f = |_: &[f64]| 1.0;
        let config = RlsConfig::default().with_seed(42);
        let result = RandomLocalSearch::run(&f, &square(), &config).unwrap();

        assert_eq!(result.stop_reason, StopReason::Plateau);
        assert_eq!(result.iterations, 1);
        assert_eq!(result.accepted_moves, 0);
        assert_eq!(result.history.len(), 1);
        assert!(square().contains(&result.point));
    }

    #[test]
    fn test_negligible_difference_halts() {
        // Any two values differ by far less than epsilon.
        let f = |p: &[f64]| 1e-9 * sphere(p);
        let config = RlsConfig::default().with_seed(3);
        let result = RandomLocalSearch::run(&f, &square(), &config).unwrap();

        assert_eq!(result.stop_reason, StopReason::Plateau);
        assert_eq!(result.iterations, 1);
    }

    #[test]
    fn test_acceptance_rule_replay() {
        // Record every evaluation and replay the acceptance rule by hand.
        let seen = RefCell::new(Vec::new());
        let f = |p: &[f64]| {
            let v = sphere(p);
            seen.borrow_mut().push(v);
            v
        };
        let config = RlsConfig::default()
            .with_acceptance_probability(0.0)
            .with_iterations(300)
            .with_seed(9);
        let result = RandomLocalSearch::run(&f, &square(), &config).unwrap();

        let values = seen.into_inner();
        let mut current = values[0];
        let mut accepted = 0;
        for &v in &values[1..] {
            if (v - current).abs() < config.epsilon {
                break;
            }
            if v < current {
                current = v;
                accepted += 1;
            }
        }

        assert_eq!(result.value, current);
        assert_eq!(result.accepted_moves, accepted);
        assert_eq!(result.iterations, values.len() - 1);
    }

    #[test]
    fn test_zero_probability_never_regresses() {
        let config = RlsConfig::default()
            .with_acceptance_probability(0.0)
            .with_seed(42);
        let result = RandomLocalSearch::run(&sphere, &square(), &config).unwrap();

        for window in result.history.windows(2) {
            assert!(window[1] <= window[0]);
        }
        assert_eq!(result.value, result.best_value);
    }

    #[test]
    fn test_full_probability_accepts_everything() {
        let config = RlsConfig::default()
            .with_acceptance_probability(1.0)
            .with_epsilon(0.0)
            .with_iterations(200)
            .with_seed(42);
        let result = RandomLocalSearch::run(&sphere, &square(), &config).unwrap();

        assert_eq!(result.stop_reason, StopReason::IterationLimit);
        assert_eq!(result.accepted_moves, 200);
        assert_eq!(result.history.len(), 201);
    }

    #[test]
    fn test_sphere_descends() {
        let config = RlsConfig::default().with_seed(42);
        let result = RandomLocalSearch::run(&sphere, &square(), &config).unwrap();

        assert!(
            result.best_value < 1.0,
            "expected small best value, got {}",
            result.best_value
        );
        assert!(result.best_value <= result.value);
        assert!(result.iterations <= config.iterations);
    }

    #[test]
    fn test_unconstrained_can_leave_bounds() {
        let bounds = Bounds::uniform(2, 0.0, 0.01).unwrap();
        let f = |p: &[f64]| -(p[0] + p[1]);
        let config = RlsConfig::default()
            .with_acceptance_probability(0.0)
            .with_iterations(100)
            .with_seed(42);
        let result = RandomLocalSearch::run(&f, &bounds, &config).unwrap();

        assert!(!bounds.contains(&result.point));
    }

    #[test]
    fn test_clamp_keeps_points_inside() {
        let bounds = Bounds::uniform(2, 0.0, 0.01).unwrap();
        let f = |p: &[f64]| -(p[0] + p[1]);
        let config = RlsConfig::default()
            .with_acceptance_probability(0.5)
            .with_bound_policy(BoundPolicy::Clamp)
            .with_iterations(100)
            .with_seed(42);
        let result = RandomLocalSearch::run(&f, &bounds, &config).unwrap();

        assert!(bounds.contains(&result.point));
        assert!(bounds.contains(&result.best_point));
    }

    #[test]
    fn test_seeded_runs_identical() {
        let config = RlsConfig::default();
        let a = RandomLocalSearch::run_with_rng(&sphere, &square(), &config, &mut create_rng(8))
            .unwrap();
        let b = RandomLocalSearch::run_with_rng(&sphere, &square(), &config, &mut create_rng(8))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = RlsConfig::default().with_acceptance_probability(-0.1);
        assert!(RandomLocalSearch::run(&sphere, &square(), &config).is_err());
    }
}
