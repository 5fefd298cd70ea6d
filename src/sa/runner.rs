//! SA execution loop.

use super::config::SaConfig;
use crate::error::Result;
use crate::objective::Objective;
use crate::random::rng_for;
use crate::space::{perturb, Bounds, Point};
use crate::termination::StopReason;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a Simulated Annealing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SaResult {
    /// Current solution when the run stopped.
    pub point: Point,

    /// Energy (objective value) of `point`.
    pub value: f64,

    /// The best solution found.
    pub best_point: Point,

    /// Energy of the best solution.
    pub best_value: f64,

    /// Total number of iterations (neighbor evaluations).
    pub iterations: usize,

    /// Why the run stopped.
    pub stop_reason: StopReason,

    /// Final temperature when the algorithm stopped.
    pub final_temperature: f64,

    /// Number of accepted moves (including improvements).
    pub accepted_moves: usize,

    /// Number of improving moves.
    pub improving_moves: usize,

    /// Current energy after initialization and after every iteration.
    pub history: Vec<f64>,
}

/// Metropolis acceptance criterion.
///
/// Improvements (`delta < 0`) are always accepted. Otherwise the move is
/// accepted iff `draw < exp(-delta / temperature)`, where `draw` is a
/// uniform sample from `[0, 1)`. A non-positive temperature rejects every
/// non-improving move.
///
/// ```
/// use u_localsearch::sa::metropolis_accept;
///
/// assert!(metropolis_accept(-1.0, 1.0, 0.99));
/// assert!(metropolis_accept(1.0, 1.0, 0.3));  // exp(-1) ~ 0.368
/// assert!(!metropolis_accept(1.0, 1.0, 0.4));
/// ```
pub fn metropolis_accept(delta: f64, temperature: f64, draw: f64) -> bool {
    if delta < 0.0 {
        return true;
    }
    temperature > 0.0 && draw < (-delta / temperature).exp()
}

/// Executes the Simulated Annealing algorithm.
pub struct SimulatedAnnealing;

/// Current solution, its energy and the temperature it was reached at.
struct State {
    point: Point,
    energy: f64,
    temperature: f64,
}

impl SimulatedAnnealing {
    /// Runs SA optimization from a uniformly random point inside `bounds`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::objective::sphere;
    /// use u_localsearch::sa::{SaConfig, SimulatedAnnealing};
    /// use u_localsearch::space::Bounds;
    ///
    /// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
    /// let config = SaConfig::default().with_seed(42);
    /// let result = SimulatedAnnealing::run(&sphere, &bounds, &config).unwrap();
    /// assert!(result.final_temperature < config.epsilon);
    /// ```
    pub fn run<F>(objective: &F, bounds: &Bounds, config: &SaConfig) -> Result<SaResult>
    where
        F: Objective + ?Sized,
    {
        let mut rng = rng_for(config.seed);
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs SA with an explicit random source. `config.seed` is ignored.
    pub fn run_with_rng<F, R>(
        objective: &F,
        bounds: &Bounds,
        config: &SaConfig,
        rng: &mut R,
    ) -> Result<SaResult>
    where
        F: Objective + ?Sized,
        R: Rng,
    {
        config.validate()?;

        // Initialize
        let point = bounds.sample(rng);
        let energy = objective.evaluate(&point);
        let mut state = State {
            point,
            energy,
            temperature: config.initial_temperature,
        };
        let mut best_point = state.point.clone();
        let mut best_value = state.energy;

        debug!(
            event = "search_start",
            algorithm = "simulated_annealing",
            dim = bounds.dim(),
            max_iterations = config.iterations,
            initial_temperature = config.initial_temperature,
            initial_value = state.energy,
        );

        let mut history = vec![state.energy];
        let mut stop_reason = StopReason::IterationLimit;
        let mut total_iterations = 0usize;
        let mut accepted_moves = 0usize;
        let mut improving_moves = 0usize;

        for _ in 0..config.iterations {
            total_iterations += 1;

            let neighbor = config
                .bound_policy
                .apply(bounds, perturb(&state.point, config.step_size, rng));
            let neighbor_energy = objective.evaluate(&neighbor);
            let delta = neighbor_energy - state.energy;

            // The uniform draw is only made for non-improving moves.
            let improving = delta < 0.0;
            let accept = improving
                || metropolis_accept(delta, state.temperature, rng.random_range(0.0..1.0));

            // Cool down after every decision, accepted or not.
            let temperature = state.temperature * config.cooling_rate;

            state = if accept {
                if improving {
                    improving_moves += 1;
                }
                accepted_moves += 1;
                trace!(
                    iteration = total_iterations,
                    energy = neighbor_energy,
                    temperature = state.temperature,
                    "accepted move"
                );
                State {
                    point: neighbor,
                    energy: neighbor_energy,
                    temperature,
                }
            } else {
                State {
                    temperature,
                    ..state
                }
            };

            if state.energy < best_value {
                best_point = state.point.clone();
                best_value = state.energy;
            }
            history.push(state.energy);

            if state.temperature < config.epsilon {
                stop_reason = StopReason::Frozen;
                break;
            }
        }

        debug!(
            event = "search_end",
            algorithm = "simulated_annealing",
            iterations = total_iterations,
            accepted_moves = accepted_moves,
            improving_moves = improving_moves,
            final_temperature = state.temperature,
            stop_reason = ?stop_reason,
            value = state.energy,
            best_value = best_value,
        );

        Ok(SaResult {
            point: state.point,
            value: state.energy,
            best_point,
            best_value,
            iterations: total_iterations,
            stop_reason,
            final_temperature: state.temperature,
            accepted_moves,
            improving_moves,
            history,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SearchError;
    use crate::objective::sphere;
    use crate::random::create_rng;
    use crate::space::BoundPolicy;

    fn square() -> Bounds {
        Bounds::uniform(2, -5.0, 5.0).unwrap()
    }

    /// Iterations until `t0 * rate^k < epsilon`, by the same repeated
    /// multiplication the runner performs.
    fn freeze_point(t0: f64, rate: f64, epsilon: f64, cap: usize) -> (usize, f64) {
        let mut t = t0;
        let mut k = 0;
        while k < cap {
            k += 1;
            t *= rate;
            if t < epsilon {
                break;
            }
        }
        (k, t)
    }

    #[test]
    fn test_geometric_cooling_freezes() {
        let config = SaConfig::default().with_seed(42);
        let result = SimulatedAnnealing::run(&sphere, &square(), &config).unwrap();

        let (k, t) = freeze_point(1000.0, 0.95, 1e-6, 1000);
        assert_eq!(result.iterations, k);
        assert_eq!(result.final_temperature, t);
        assert_eq!(result.stop_reason, StopReason::Frozen);
        assert!(result.final_temperature < config.epsilon);
        assert_eq!(result.history.len(), k + 1);
    }

    #[test]
    fn test_iteration_cap_before_freezing() {
        let config = SaConfig::default()
            .with_cooling_rate(0.999)
            .with_iterations(50)
            .with_seed(42);
        let result = SimulatedAnnealing::run(&sphere, &square(), &config).unwrap();

        let (k, t) = freeze_point(1000.0, 0.999, 1e-6, 50);
        assert_eq!(k, 50);
        assert_eq!(result.iterations, 50);
        assert_eq!(result.final_temperature, t);
        assert_eq!(result.stop_reason, StopReason::IterationLimit);
    }

    #[test]
    fn test_non_cooling_rate_runs_to_cap() {
        let config = SaConfig::default()
            .with_cooling_rate(1.0)
            .with_iterations(120)
            .with_seed(1);
        let result = SimulatedAnnealing::run(&sphere, &square(), &config).unwrap();

        assert_eq!(result.iterations, 120);
        assert_eq!(result.final_temperature, 1000.0);
    }

    #[test]
    fn test_metropolis_rule() {
        assert!(metropolis_accept(-0.5, 1e-9, 0.999));
        assert!(metropolis_accept(-0.5, 0.0, 0.999));

        let p = (-2.0_f64 / 4.0).exp();
        assert!(metropolis_accept(2.0, 4.0, p - 1e-9));
        assert!(!metropolis_accept(2.0, 4.0, p));
        assert!(!metropolis_accept(2.0, 4.0, p + 1e-9));

        // Zero delta at positive temperature: exp(0) = 1 > any draw in [0, 1).
        assert!(metropolis_accept(0.0, 1.0, 0.999_999));
        assert!(!metropolis_accept(1.0, 0.0, 0.0));
    }

    #[test]
    fn test_sa_sphere_slow_cooling() {
        let config = SaConfig::default()
            .with_initial_temperature(10.0)
            .with_cooling_rate(0.99)
            .with_iterations(2000)
            .with_seed(42);
        let result = SimulatedAnnealing::run(&sphere, &square(), &config).unwrap();

        assert!(
            result.best_value < 0.1,
            "expected near-zero best value, got {}",
            result.best_value
        );
        assert!(result.improving_moves > 0);
        assert!(result.accepted_moves >= result.improving_moves);
    }

    #[test]
    fn test_sa_accepts_uphill_when_hot() {
        let config = SaConfig::default()
            .with_initial_temperature(1e8)
            .with_cooling_rate(0.9999)
            .with_seed(42);
        let result = SimulatedAnnealing::run(&sphere, &square(), &config).unwrap();

        let acceptance_ratio = result.accepted_moves as f64 / result.iterations as f64;
        assert!(
            acceptance_ratio > 0.95,
            "expected high acceptance at high temp, got {acceptance_ratio}"
        );
        assert!(result.accepted_moves > result.improving_moves);
    }

    #[test]
    fn test_best_never_worse_than_history() {
        let config = SaConfig::default().with_seed(13);
        let result = SimulatedAnnealing::run(&sphere, &square(), &config).unwrap();

        let min = result.history.iter().cloned().fold(f64::INFINITY, f64::min);
        assert_eq!(result.best_value, min);
        assert!((sphere(&result.best_point) - result.best_value).abs() < 1e-12);
    }

    #[test]
    fn test_clamp_keeps_solution_inside() {
        let bounds = Bounds::uniform(2, -0.5, 0.5).unwrap();
        let config = SaConfig::default()
            .with_bound_policy(BoundPolicy::Clamp)
            .with_seed(4);
        let result = SimulatedAnnealing::run(&sphere, &bounds, &config).unwrap();

        assert!(bounds.contains(&result.point));
        assert!(bounds.contains(&result.best_point));
    }

    #[test]
    fn test_seeded_runs_identical() {
        let config = SaConfig::default();
        let a = SimulatedAnnealing::run_with_rng(&sphere, &square(), &config, &mut create_rng(21))
            .unwrap();
        let b = SimulatedAnnealing::run_with_rng(&sphere, &square(), &config, &mut create_rng(21))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_oversized_step_rejected_before_sampling() {
        let config = SaConfig::default().with_step_size(1e308).with_seed(1);
        assert!(matches!(
            SimulatedAnnealing::run(&sphere, &square(), &config),
            Err(SearchError::InvalidConfiguration(_))
        ));
    }

    #[test]
    fn test_invalid_temperature_rejected() {
        let config = SaConfig::default().with_initial_temperature(0.0);
        assert!(matches!(
            SimulatedAnnealing::run(&sphere, &square(), &config),
            Err(SearchError::InvalidConfiguration(_))
        ));
    }
}
