//! Constraint filtering, stable ranking, and cost/feasibility attachment.

use serde::Serialize;
use tracing::debug;
use window_config::VehicleConfig;
use window_scoring::cost::{Cost, estimate_cost};
use window_scoring::feasibility::{Feasibility, assess};

use super::Constraints;
use super::candidate::TrajectoryCandidate;

/// Windows reported in each of the optimal and alternative slices.
pub const WINDOW_SLICE: usize = 10;

/// Candidate augmented with cost and feasibility for presentation.
#[derive(Debug, Clone, Serialize)]
pub struct RankedWindow {
    pub candidate: TrajectoryCandidate,
    pub cost: Cost,
    pub feasibility: Feasibility,
}

/// Capability demanded of the vehicle by a candidate. The mass-plus-velocity
/// sum is preserved from the source model; the units do not cancel and the
/// comparison is not physically meaningful.
fn required_capability_kg(payload_mass_kg: f64, delta_v_km_s: f64) -> f64 {
    payload_mass_kg + delta_v_km_s * 1_000.0
}

/// Drop candidates the vehicle cannot lift or that violate a supplied
/// constraint. Absent constraints impose no filter.
pub fn filter_candidates(
    candidates: Vec<TrajectoryCandidate>,
    vehicle: &VehicleConfig,
    payload_mass_kg: f64,
    constraints: &Constraints,
) -> Vec<TrajectoryCandidate> {
    candidates
        .into_iter()
        .filter(|candidate| {
            let trajectory = &candidate.trajectory;
            let required = required_capability_kg(payload_mass_kg, trajectory.delta_v_km_s);
            if required > vehicle.leo_capacity_kg {
                debug!(
                    launch_date = %candidate.launch_date,
                    required,
                    capacity = vehicle.leo_capacity_kg,
                    "candidate exceeds vehicle capability"
                );
                return false;
            }
            if let Some(max_days) = constraints.max_flight_time_days {
                if trajectory.flight_time_days > max_days {
                    return false;
                }
            }
            if let Some(max_dv) = constraints.max_delta_v_km_s {
                if trajectory.delta_v_km_s > max_dv {
                    return false;
                }
            }
            if let Some(min_score) = constraints.min_score {
                if candidate.score < min_score {
                    return false;
                }
            }
            true
        })
        .collect()
}

/// Sort candidates by score descending (stable: equal scores keep their
/// enumeration order) and split into the optimal and alternative slices,
/// attaching cost and feasibility to each survivor.
pub fn rank(
    mut candidates: Vec<TrajectoryCandidate>,
    vehicle: &VehicleConfig,
    payload_mass_kg: f64,
) -> (Vec<RankedWindow>, Vec<RankedWindow>) {
    candidates.sort_by(|a, b| b.score.cmp(&a.score));

    let mut ranked: Vec<RankedWindow> = candidates
        .into_iter()
        .take(WINDOW_SLICE * 2)
        .map(|candidate| attach(candidate, vehicle, payload_mass_kg))
        .collect();

    let alternatives = ranked.split_off(ranked.len().min(WINDOW_SLICE));
    (ranked, alternatives)
}

fn attach(
    candidate: TrajectoryCandidate,
    vehicle: &VehicleConfig,
    payload_mass_kg: f64,
) -> RankedWindow {
    let cost = estimate_cost(payload_mass_kg, vehicle, candidate.trajectory.delta_v_km_s);
    let feasibility = assess(
        candidate.score,
        cost.total_cost_usd,
        candidate.trajectory.flight_time_days,
        candidate.trajectory.delta_v_km_s,
    );
    RankedWindow {
        candidate,
        cost,
        feasibility,
    }
}
