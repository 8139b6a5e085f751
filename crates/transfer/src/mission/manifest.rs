//! Manifest, recommendation, and summary derivation. Formatting only; no new
//! computation happens here.

use chrono::NaiveDate;
use serde::Serialize;
use window_config::Catalog;
use window_scoring::feasibility::FeasibilityCategory;

use super::ranking::RankedWindow;
use super::{MissionParameters, OptimizationResult};

/// Human-readable mission manifest assembled from one ranked window and the
/// originating request.
#[derive(Debug, Clone, Serialize)]
pub struct MissionManifest {
    pub mission_name: String,
    pub origin: String,
    pub destination: String,
    pub mission_type: String,
    pub launch_site: String,
    pub vehicle: String,
    pub payload_mass_kg: f64,
    pub launch_date: NaiveDate,
    pub arrival_date: NaiveDate,
    pub flight_time_days: f64,
    pub delta_v_km_s: f64,
    pub total_cost_usd: f64,
    pub objectives: Vec<String>,
    pub recommendation: String,
}

/// Build a manifest for one ranked window. Destination objectives come from
/// the catalog table, with a generic list for unrecognized bodies; an
/// unknown site code is echoed verbatim.
pub fn build_manifest(
    params: &MissionParameters,
    window: &RankedWindow,
    catalog: &Catalog,
) -> MissionManifest {
    let launch_site = catalog
        .site(&params.site_code)
        .map(|site| site.name.clone())
        .unwrap_or_else(|_| params.site_code.clone());

    MissionManifest {
        mission_name: format!(
            "{} to {} Transfer",
            title_case(&params.origin),
            title_case(&params.destination)
        ),
        origin: params.origin.clone(),
        destination: params.destination.clone(),
        mission_type: params.mission_type.clone(),
        launch_site,
        vehicle: params.vehicle.clone(),
        payload_mass_kg: params.payload_mass_kg,
        launch_date: window.candidate.launch_date,
        arrival_date: window.candidate.trajectory.arrival_date,
        flight_time_days: window.candidate.trajectory.flight_time_days,
        delta_v_km_s: window.candidate.trajectory.delta_v_km_s,
        total_cost_usd: window.cost.total_cost_usd,
        objectives: catalog.objectives(&params.destination).to_vec(),
        recommendation: recommendation(window.candidate.score, window.feasibility.overall),
    }
}

/// Advisory text from fixed score/feasibility thresholds.
pub fn recommendation(score: u32, feasibility_overall: f64) -> String {
    if score > 85 && feasibility_overall > 80.0 {
        "Excellent launch opportunity; proceed with detailed mission planning.".to_string()
    } else if score > 70 && feasibility_overall > 60.0 {
        "Good launch window; viable with standard mission margins.".to_string()
    } else if score > 50 {
        "Acceptable window; consider relaxing constraints or waiting for a better alignment."
            .to_string()
    } else {
        "Suboptimal window; evaluate alternative dates or destinations.".to_string()
    }
}

/// Condensed result for the presentation layer.
#[derive(Debug, Clone, Serialize)]
pub enum Summary {
    /// At least one window survived filtering.
    Viable(WindowSummary),
    /// Every candidate was filtered out.
    NoViableWindows { suggestion: String },
}

#[derive(Debug, Clone, Serialize)]
pub struct WindowSummary {
    pub best_launch_date: NaiveDate,
    pub flight_time_days: f64,
    pub total_cost_usd: f64,
    pub feasibility: FeasibilityCategory,
    pub score: u32,
    pub windows_analyzed: usize,
    pub recommendation: String,
}

/// Summarize an optimization result without assuming any window survived.
pub fn summarize(result: &OptimizationResult) -> Summary {
    match result.optimal_windows.first() {
        Some(best) => Summary::Viable(WindowSummary {
            best_launch_date: best.candidate.launch_date,
            flight_time_days: best.candidate.trajectory.flight_time_days,
            total_cost_usd: best.cost.total_cost_usd,
            feasibility: best.feasibility.category,
            score: best.candidate.score,
            windows_analyzed: result.windows_analyzed,
            recommendation: recommendation(best.candidate.score, best.feasibility.overall),
        }),
        None => Summary::NoViableWindows {
            suggestion: "No viable launch windows found; relax the delta-v, flight-time, or \
                         score constraints, or widen the date range."
                .to_string(),
        },
    }
}

fn title_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
