//! Re-exported APIs for consumers of the transfer crate.

pub use crate::cache::{MemoryCache, WindowCache};
pub use crate::mission::candidate::{TrajectoryCandidate, TransferSolution};
pub use crate::mission::dates::enumerate_dates;
pub use crate::mission::manifest::{
    MissionManifest, Summary, WindowSummary, build_manifest, recommendation, summarize,
};
pub use crate::mission::ranking::RankedWindow;
pub use crate::mission::{
    Constraints, MissionParameters, OptimizationResult, OptimizeError, SeedPolicy,
    TransferWindowEngine, VehicleCapability,
};
pub use window_scoring::cost::Cost;
pub use window_scoring::feasibility::{Feasibility, FeasibilityCategory};
