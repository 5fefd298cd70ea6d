//! Hill climbing descent loop.

use super::config::HillClimbingConfig;
use crate::error::Result;
use crate::objective::Objective;
use crate::random::rng_for;
use crate::space::{Bounds, Point};
use crate::termination::StopReason;
use rand::Rng;
use tracing::{debug, trace};

/// Result of a hill climbing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HillClimbingResult {
    /// Last accepted point. Always inside the bounds.
    pub point: Point,

    /// Objective value at `point`.
    pub value: f64,

    /// Number of iterations entered, including the one that stopped the search.
    pub iterations: usize,

    /// Why the search stopped.
    pub stop_reason: StopReason,

    /// Current value after initialization and after every accepted step.
    /// Strictly decreasing.
    pub history: Vec<f64>,

    /// Every accepted point, starting with the initial one.
    pub path: Vec<Point>,
}

/// Executes steepest-descent hill climbing.
pub struct HillClimbing;

/// Current point and its value. Replaced wholesale on every accepted step.
struct State {
    point: Point,
    value: f64,
}

impl HillClimbing {
    /// Runs hill climbing from a uniformly random point inside `bounds`.
    ///
    /// The generator is seeded from `config.seed`, or from entropy when
    /// no seed is set.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_localsearch::hill::{HillClimbing, HillClimbingConfig};
    /// use u_localsearch::objective::sphere;
    /// use u_localsearch::space::Bounds;
    ///
    /// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
    /// let config = HillClimbingConfig::default().with_seed(42);
    /// let result = HillClimbing::run(&sphere, &bounds, &config).unwrap();
    /// assert!(result.value < 0.01);
    /// ```
    pub fn run<F>(
        objective: &F,
        bounds: &Bounds,
        config: &HillClimbingConfig,
    ) -> Result<HillClimbingResult>
    where
        F: Objective + ?Sized,
    {
        let mut rng = rng_for(config.seed);
        Self::run_with_rng(objective, bounds, config, &mut rng)
    }

    /// Runs hill climbing, drawing the initial point from `rng`.
    ///
    /// `config.seed` is ignored.
    pub fn run_with_rng<F, R>(
        objective: &F,
        bounds: &Bounds,
        config: &HillClimbingConfig,
        rng: &mut R,
    ) -> Result<HillClimbingResult>
    where
        F: Objective + ?Sized,
        R: Rng,
    {
        config.validate()?;
        let start = bounds.sample(rng);
        Ok(descend(objective, bounds, start, config))
    }

    /// Runs hill climbing from a given start point.
    ///
    /// The start must have one coordinate per dimension and lie inside
    /// `bounds`. No randomness is involved.
    pub fn run_from<F>(
        objective: &F,
        bounds: &Bounds,
        start: Point,
        config: &HillClimbingConfig,
    ) -> Result<HillClimbingResult>
    where
        F: Objective + ?Sized,
    {
        config.validate()?;
        bounds.check_start(&start)?;
        Ok(descend(objective, bounds, start, config))
    }
}

fn descend<F>(
    objective: &F,
    bounds: &Bounds,
    start: Point,
    config: &HillClimbingConfig,
) -> HillClimbingResult
where
    F: Objective + ?Sized,
{
    let value = objective.evaluate(&start);
    let mut state = State { point: start, value };

    debug!(
        event = "search_start",
        algorithm = "hill_climbing",
        dim = bounds.dim(),
        max_iterations = config.iterations,
        initial_value = state.value,
    );

    let mut history = vec![state.value];
    let mut path = vec![state.point.clone()];
    let mut stop_reason = StopReason::IterationLimit;
    let mut iterations = 0usize;

    for _ in 0..config.iterations {
        iterations += 1;

        let Some(next) = best_neighbor(objective, bounds, &state.point, config.step_size) else {
            stop_reason = StopReason::LocalOptimum;
            break;
        };

        if next.value >= state.value {
            stop_reason = StopReason::LocalOptimum;
            break;
        }
        if (next.value - state.value).abs() < config.epsilon {
            stop_reason = StopReason::Converged;
            break;
        }

        trace!(iteration = iterations, value = next.value, "accepted step");
        state = next;
        history.push(state.value);
        path.push(state.point.clone());
    }

    debug!(
        event = "search_end",
        algorithm = "hill_climbing",
        iterations = iterations,
        stop_reason = ?stop_reason,
        value = state.value,
    );

    HillClimbingResult {
        point: state.point,
        value: state.value,
        iterations,
        stop_reason,
        history,
        path,
    }
}

/// Best feasible neighbor of `current`, or `None` when every offset
/// leaves the bounds.
///
/// Neighbors are visited in the order `+x0, -x0, +x1, -x1, ...` and only
/// a strictly lower value replaces the incumbent, so ties go to the
/// earliest neighbor. Infeasible neighbors are never evaluated.
fn best_neighbor<F>(objective: &F, bounds: &Bounds, current: &[f64], step: f64) -> Option<State>
where
    F: Objective + ?Sized,
{
    let mut best: Option<State> = None;
    let mut best_value = f64::INFINITY;

    for dim in 0..current.len() {
        for offset in [step, -step] {
            let mut neighbor = current.to_vec();
            neighbor[dim] += offset;
            if !bounds.contains(&neighbor) {
                continue;
            }

            let value = objective.evaluate(&neighbor);
            if value < best_value {
                best_value = value;
                best = Some(State {
                    point: neighbor,
                    value,
                });
            }
        }
    }

    best
}
