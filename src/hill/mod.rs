//! Hill Climbing (steepest descent).
//!
//! Deterministic descent over a fixed-offset neighborhood: every
//! coordinate is nudged by `+step` and `-step` in turn, infeasible
//! neighbors are skipped, and the best strictly improving neighbor
//! becomes the new current point. The search stops at the first step
//! that fails to improve by at least epsilon.
//!
//! Randomness is used only to draw the initial point.

mod config;
mod runner;

pub use config::HillClimbingConfig;
pub use runner::{HillClimbing, HillClimbingResult};
