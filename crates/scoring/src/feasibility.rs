//! Feasibility assessment across technical, economic, schedule, and risk axes.

use std::fmt;

use serde::Serialize;
use window_core::score::clamp_score;

/// Overall feasibility bucket; thresholds are strict comparisons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FeasibilityCategory {
    High,
    Medium,
    Low,
}

impl fmt::Display for FeasibilityCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            FeasibilityCategory::High => "High",
            FeasibilityCategory::Medium => "Medium",
            FeasibilityCategory::Low => "Low",
        };
        f.write_str(label)
    }
}

/// Sub-scores and the derived overall category for one ranked window.
#[derive(Debug, Clone, Serialize)]
pub struct Feasibility {
    pub technical: f64,
    pub economic: f64,
    pub schedule: f64,
    pub risk: f64,
    /// Unweighted mean of the four sub-scores.
    pub overall: f64,
    pub category: FeasibilityCategory,
}

/// Assess feasibility from the composite score, total cost, flight time, and
/// delta-v. Sub-scores land in 0–100; risk is floored at 20.
pub fn assess(
    score: u32,
    total_cost_usd: f64,
    flight_time_days: f64,
    dv_total_km_s: f64,
) -> Feasibility {
    let technical = (score as f64).min(100.0);
    let economic = clamp_score(100.0 - (total_cost_usd / 1.0e6 - 100.0) * 2.0);
    let schedule = clamp_score(100.0 - (flight_time_days - 300.0) / 10.0);
    let risk = (100.0 - dv_total_km_s * 10.0).clamp(20.0, 100.0);
    let overall = (technical + economic + schedule + risk) / 4.0;
    let category = if overall > 80.0 {
        FeasibilityCategory::High
    } else if overall > 60.0 {
        FeasibilityCategory::Medium
    } else {
        FeasibilityCategory::Low
    };
    Feasibility {
        technical,
        economic,
        schedule,
        risk,
        overall,
        category,
    }
}
