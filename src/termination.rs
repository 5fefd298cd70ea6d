//! Why a search stopped.

/// Stopping rule that ended a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StopReason {
    /// The configured number of iterations was used up.
    IterationLimit,

    /// No feasible neighbor was strictly better than the current point.
    LocalOptimum,

    /// The best neighbor improved by less than epsilon.
    Converged,

    /// A candidate's value differed from the current value by less than epsilon.
    Plateau,

    /// Annealing temperature dropped below epsilon.
    Frozen,
}
