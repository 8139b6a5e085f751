//! Launch cost estimation.

use serde::Serialize;
use window_config::VehicleConfig;

/// Cost breakdown attached to a ranked window.
#[derive(Debug, Clone, Serialize)]
pub struct Cost {
    /// Baseline launch cost: payload mass times the vehicle's cost rate.
    pub launch_cost_usd: f64,
    /// Baseline scaled by the delta-v complexity multiplier.
    pub total_cost_usd: f64,
    pub currency: &'static str,
}

/// Estimate mission cost for a candidate.
///
/// Delta-v above the 3 km/s baseline raises cost 10% per km/s; below the
/// baseline the multiplier discounts, which is intentional and not clamped.
pub fn estimate_cost(
    payload_mass_kg: f64,
    vehicle: &VehicleConfig,
    dv_total_km_s: f64,
) -> Cost {
    let launch_cost_usd = payload_mass_kg * vehicle.cost_per_kg_usd;
    let complexity = 1.0 + (dv_total_km_s - 3.0) * 0.1;
    Cost {
        launch_cost_usd,
        total_cost_usd: launch_cost_usd * complexity,
        currency: "USD",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vehicle() -> VehicleConfig {
        VehicleConfig {
            name: "Falcon Heavy".to_string(),
            leo_capacity_kg: 63_800.0,
            transfer_capacity_kg: 26_700.0,
            cost_per_kg_usd: 1_400.0,
        }
    }

    #[test]
    fn baseline_delta_v_leaves_cost_unscaled() {
        let cost = estimate_cost(1_000.0, &vehicle(), 3.0);
        assert_eq!(cost.launch_cost_usd, 1_400_000.0);
        assert_eq!(cost.total_cost_usd, 1_400_000.0);
        assert_eq!(cost.currency, "USD");
    }

    #[test]
    fn low_delta_v_discounts_instead_of_clamping() {
        let cost = estimate_cost(1_000.0, &vehicle(), 2.0);
        assert!(cost.total_cost_usd < cost.launch_cost_usd);
        assert!((cost.total_cost_usd - 1_400_000.0 * 0.9).abs() < 1e-6);
    }

    #[test]
    fn high_delta_v_scales_cost_up() {
        let cost = estimate_cost(1_000.0, &vehicle(), 5.6);
        assert!((cost.total_cost_usd - 1_400_000.0 * 1.26).abs() < 1e-3);
    }
}
