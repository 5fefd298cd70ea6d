//! Independent restarts of a local search.
//!
//! Every start owns a generator seeded with [`derive_seed`]`(base_seed, i)`,
//! so the outcome depends only on the base seed and the start count, not
//! on how the starts are scheduled. With the `parallel` feature the starts
//! run on the rayon thread pool.

use crate::error::{Result, SearchError};
use crate::hill::HillClimbingResult;
use crate::random::{create_rng, derive_seed};
use crate::rls::RlsResult;
use crate::sa::SaResult;
use rand::rngs::StdRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;
use tracing::debug;

/// A finished search that can be ranked against other runs.
pub trait SearchOutcome {
    /// Lowest objective value the run reached. Lower is better.
    fn best_value(&self) -> f64;
}

impl SearchOutcome for HillClimbingResult {
    fn best_value(&self) -> f64 {
        self.value
    }
}

impl SearchOutcome for RlsResult {
    fn best_value(&self) -> f64 {
        self.best_value
    }
}

impl SearchOutcome for SaResult {
    fn best_value(&self) -> f64 {
        self.best_value
    }
}

/// Outcome of a multi-start run.
#[derive(Debug, Clone)]
pub struct MultiStartResult<T> {
    /// Every run, in start order.
    pub runs: Vec<T>,

    /// Index into `runs` of the run with the lowest best value.
    pub best_index: usize,
}

impl<T> MultiStartResult<T> {
    /// The winning run.
    pub fn best(&self) -> &T {
        &self.runs[self.best_index]
    }
}

/// Runs a search several times from independent random sources.
///
/// # Examples
///
/// ```
/// use u_localsearch::hill::{HillClimbing, HillClimbingConfig};
/// use u_localsearch::multistart::MultiStart;
/// use u_localsearch::objective::sphere;
/// use u_localsearch::space::Bounds;
///
/// let bounds = Bounds::uniform(2, -5.0, 5.0).unwrap();
/// let config = HillClimbingConfig::default();
/// let result = MultiStart::new(8, 42)
///     .run(|rng| HillClimbing::run_with_rng(&sphere, &bounds, &config, rng))
///     .unwrap();
/// assert_eq!(result.runs.len(), 8);
/// assert!(result.best().value < 0.01);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiStart {
    /// Number of independent runs.
    pub starts: usize,

    /// Seed from which every run's seed is derived.
    pub base_seed: u64,
}

impl MultiStart {
    pub fn new(starts: usize, base_seed: u64) -> Self {
        Self { starts, base_seed }
    }

    /// Runs `search` once per start and ranks the outcomes.
    ///
    /// The first error from any run is returned; remaining results are
    /// discarded.
    pub fn run<T, S>(&self, search: S) -> Result<MultiStartResult<T>>
    where
        T: SearchOutcome + Send,
        S: Fn(&mut StdRng) -> Result<T> + Sync,
    {
        if self.starts == 0 {
            return Err(SearchError::InvalidConfiguration(
                "multi-start needs at least one start".into(),
            ));
        }

        let run_one = |i: usize| {
            let mut rng = create_rng(derive_seed(self.base_seed, i));
            search(&mut rng)
        };

        #[cfg(feature = "parallel")]
        let outcomes: Vec<Result<T>> = (0..self.starts).into_par_iter().map(run_one).collect();
        #[cfg(not(feature = "parallel"))]
        let outcomes: Vec<Result<T>> = (0..self.starts).map(run_one).collect();

        let runs = outcomes.into_iter().collect::<Result<Vec<T>>>()?;
        let best_index = find_best(&runs);

        debug!(
            event = "multistart_end",
            starts = self.starts,
            best_index = best_index,
            best_value = runs[best_index].best_value(),
        );

        Ok(MultiStartResult { runs, best_index })
    }
}

/// Index of the run with the lowest best value; ties go to the earlier run.
fn find_best<T: SearchOutcome>(runs: &[T]) -> usize {
    runs.iter()
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            a.best_value()
                .partial_cmp(&b.best_value())
                .unwrap_or(std::cmp::Ordering::Equal)
        })
        .map(|(i, _)| i)
        .unwrap_or(0)
}
