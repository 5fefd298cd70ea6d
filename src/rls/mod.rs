//! Random Local Search (RLS).
//!
//! Stochastic descent: each step perturbs every coordinate by a small
//! uniform offset. Improving candidates are always taken; any other
//! candidate is still taken with a fixed probability, which lets the
//! walk climb out of shallow basins at the cost of arbitrary regressions.
//!
//! A candidate whose value lies within epsilon of the current value ends
//! the search before the acceptance decision is made.

mod config;
mod runner;

pub use config::RlsConfig;
pub use runner::{RandomLocalSearch, RlsResult};
