//! Transfer-window planning logic lives in the member crates; this facade
//! re-exports them under stable module names so multiple front-ends (CLI,
//! service, test harness) share one import surface.

pub use window_config as config;
pub use window_export as export;
pub use window_impulsive as impulsive;
pub use window_schedule as schedule;
pub use window_scoring as scoring;
pub use window_transfer as transfer;

/// Returns the version of the library for smoke tests.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
