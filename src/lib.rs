//! Continuous-domain local search over box bounds.
//!
//! Provides three single-solution metaheuristics for minimizing a scalar
//! objective over an axis-aligned box:
//!
//! - **Hill Climbing**: steepest descent over a fixed-offset neighborhood
//!   (one coordinate nudged at a time), halting at the first step that
//!   fails to improve.
//! - **Random Local Search (RLS)**: uniform perturbations with
//!   probabilistic acceptance of non-improving moves.
//! - **Simulated Annealing (SA)**: uniform perturbations with the
//!   Metropolis criterion and geometric cooling.
//!
//! Every search takes its random source either from a seed in its
//! configuration or explicitly through `run_with_rng`, so runs are
//! reproducible and independent runs can execute concurrently
//! (see [`multistart`]).
//!
//! ```
//! use u_localsearch::objective::sphere;
//! use u_localsearch::sa::{SaConfig, SimulatedAnnealing};
//! use u_localsearch::space::Bounds;
//!
//! let bounds = Bounds::new(vec![(-5.0, 5.0), (-5.0, 5.0)]).unwrap();
//! let result = SimulatedAnnealing::run(&sphere, &bounds, &SaConfig::default().with_seed(1)).unwrap();
//! assert_eq!(result.point.len(), 2);
//! ```

pub mod error;
pub mod hill;
pub mod multistart;
pub mod objective;
pub mod random;
pub mod rls;
pub mod sa;
pub mod space;
pub mod termination;

pub use error::{Result, SearchError};
