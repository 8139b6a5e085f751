//! Scoring stages for trajectory candidates: site requirements, composite
//! score, cost, and feasibility.
//!
//! Weather, azimuth jitter, and seasonal sampling are the only
//! non-deterministic parts of the planner; they draw from the injectable
//! generator in [`rng`] so tests can replay fixed sequences.

pub mod cost;
pub mod feasibility;
pub mod requirements;
pub mod rng;
pub mod score;
