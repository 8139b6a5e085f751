//! Composite candidate scoring.

use window_core::score::clamp_score;

/// Component weights; these sum to 1.0 and are policy constants, not knobs.
const DELTA_V_WEIGHT: f64 = 0.30;
const ALIGNMENT_WEIGHT: f64 = 0.25;
const FLIGHT_TIME_WEIGHT: f64 = 0.20;
const WEATHER_WEIGHT: f64 = 0.15;
const SEASONAL_WEIGHT: f64 = 0.10;

/// Delta-v component, anchored at a 3 km/s baseline.
pub fn delta_v_score(dv_total_km_s: f64) -> f64 {
    (100.0 - (dv_total_km_s - 3.0) * 20.0).max(0.0)
}

/// Flight-time component, anchored at a 250-day baseline.
pub fn flight_time_score(flight_time_days: f64) -> f64 {
    (100.0 - (flight_time_days - 250.0) / 10.0).max(0.0)
}

/// Inputs to the weighted composite.
#[derive(Debug, Clone, Copy)]
pub struct ScoreInputs {
    pub delta_v_km_s: f64,
    pub alignment_score: f64,
    pub flight_time_days: f64,
    pub weather_probability: f64,
    pub seasonal_score: f64,
}

/// Weighted composite of the five components, rounded to an integer in 0–100.
pub fn composite_score(inputs: &ScoreInputs) -> u32 {
    let weighted = delta_v_score(inputs.delta_v_km_s) * DELTA_V_WEIGHT
        + inputs.alignment_score * ALIGNMENT_WEIGHT
        + flight_time_score(inputs.flight_time_days) * FLIGHT_TIME_WEIGHT
        + inputs.weather_probability * WEATHER_WEIGHT
        + inputs.seasonal_score * SEASONAL_WEIGHT;
    clamp_score(weighted.round()) as u32
}
