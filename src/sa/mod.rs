//! Simulated Annealing (SA).
//!
//! A single-solution trajectory metaheuristic inspired by the physical
//! annealing process. Worsening moves are accepted with the Metropolis
//! probability `exp(-delta / T)`, and the temperature `T` decays
//! geometrically after every move, so the walk explores freely at first
//! and settles into a descent as it cools.
//!
//! # References
//!
//! - Kirkpatrick, Gelatt & Vecchi (1983), "Optimization by Simulated Annealing"
//! - Metropolis et al. (1953), "Equation of State Calculations by Fast
//!   Computing Machines"

mod config;
mod runner;

pub use config::SaConfig;
pub use runner::{metropolis_accept, SaResult, SimulatedAnnealing};
