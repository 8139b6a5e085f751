//! Transfer-window engine façade consolidating enumeration, evaluation,
//! ranking, and reporting.

pub mod cache;
pub mod mission;

pub use facade::*;

mod facade;
