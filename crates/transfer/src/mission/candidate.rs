//! Per-date candidate evaluation: transfer geometry, site requirements, and
//! the composite score.

use chrono::{Days, NaiveDate};
use serde::Serialize;
use window_config::{BodyConfig, Catalog, CatalogError, SiteConfig};
use window_core::constants::MU_SUN_KM3_S2;
use window_core::time::seconds_to_days;
use window_core::units::{au_to_km, km_to_au};
use window_impulsive::alignment::{
    alignment_score, efficiency_score, phase_angle_deg, synodic_period_days,
};
use window_impulsive::transfers::hohmann;
use window_scoring::requirements::{LaunchRequirements, launch_requirements};
use window_scoring::rng::ScoreRng;
use window_scoring::score::{ScoreInputs, composite_score};

/// Reference epoch for phase-angle bookkeeping (calendar J2000).
pub const ALIGNMENT_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(2000, 1, 1) {
    Some(epoch) => epoch,
    None => panic!("invalid alignment epoch"),
};

/// Computed transfer geometry for one candidate date.
#[derive(Debug, Clone, Serialize)]
pub struct TransferSolution {
    pub transfer_type: &'static str,
    pub flight_time_days: f64,
    pub delta_v_km_s: f64,
    pub arrival_date: NaiveDate,
    /// Semi-major axis of the transfer ellipse (AU).
    pub sma_au: f64,
    pub alignment_score: f64,
    pub efficiency: f64,
}

/// Scored candidate for one launch date. Immutable once built; later stages
/// derive new values rather than mutating it.
#[derive(Debug, Clone, Serialize)]
pub struct TrajectoryCandidate {
    pub launch_date: NaiveDate,
    pub trajectory: TransferSolution,
    pub requirements: LaunchRequirements,
    pub score: u32,
}

/// Compute the deterministic transfer geometry for one candidate date.
pub fn compute_transfer(
    origin: &BodyConfig,
    destination: &BodyConfig,
    launch_date: NaiveDate,
) -> TransferSolution {
    let r1_km = au_to_km(origin.orbital_radius_au);
    let r2_km = au_to_km(destination.orbital_radius_au);
    let transfer = hohmann(r1_km, r2_km, MU_SUN_KM3_S2);
    let flight_time_days = seconds_to_days(transfer.tof_seconds);

    let synodic = synodic_period_days(
        origin.orbital_period_days,
        destination.orbital_period_days,
    );
    let days_since_epoch = (launch_date - ALIGNMENT_EPOCH).num_days() as f64;
    let phase_deg = phase_angle_deg(days_since_epoch, synodic);

    let arrival_date = launch_date
        .checked_add_days(Days::new(flight_time_days.round() as u64))
        .unwrap_or(launch_date);

    TransferSolution {
        transfer_type: "hohmann",
        flight_time_days,
        delta_v_km_s: transfer.dv_total_km_s,
        arrival_date,
        sma_au: km_to_au(transfer.sma_km),
        alignment_score: alignment_score(phase_deg),
        efficiency: efficiency_score(transfer.dv_total_km_s),
    }
}

/// Evaluate one candidate date end to end. Body lookups are resolved here so
/// a stale or unknown name fails only this candidate; the batch driver
/// downgrades the error to a logged skip.
pub fn evaluate(
    catalog: &Catalog,
    origin: &str,
    destination: &str,
    site: &SiteConfig,
    launch_date: NaiveDate,
    rng: &mut dyn ScoreRng,
) -> Result<TrajectoryCandidate, CatalogError> {
    let origin_body = catalog.body(origin)?;
    let destination_body = catalog.body(destination)?;

    let trajectory = compute_transfer(origin_body, destination_body, launch_date);
    let requirements = launch_requirements(site, launch_date, trajectory.delta_v_km_s, rng);
    let score = composite_score(&ScoreInputs {
        delta_v_km_s: trajectory.delta_v_km_s,
        alignment_score: trajectory.alignment_score,
        flight_time_days: trajectory.flight_time_days,
        weather_probability: requirements.weather_probability,
        seasonal_score: requirements.seasonal_score,
    });

    Ok(TrajectoryCandidate {
        launch_date,
        trajectory,
        requirements,
        score,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use window_scoring::rng::SeededRng;

    fn catalog() -> Catalog {
        Catalog::builtin()
    }

    #[test]
    fn transfer_is_deterministic_across_calls() {
        let catalog = catalog();
        let earth = catalog.body("earth").unwrap();
        let mars = catalog.body("mars").unwrap();
        let launch = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let a = compute_transfer(earth, mars, launch);
        let b = compute_transfer(earth, mars, launch);
        assert_eq!(a.flight_time_days, b.flight_time_days);
        assert_eq!(a.delta_v_km_s, b.delta_v_km_s);
        assert_eq!(a.sma_au, b.sma_au);
        assert_eq!(a.alignment_score, b.alignment_score);
    }

    #[test]
    fn earth_mars_numbers_are_sane() {
        let catalog = catalog();
        let earth = catalog.body("earth").unwrap();
        let mars = catalog.body("mars").unwrap();
        let launch = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();

        let solution = compute_transfer(earth, mars, launch);
        assert!(
            (solution.delta_v_km_s - 5.6).abs() < 0.7,
            "dv = {}",
            solution.delta_v_km_s
        );
        assert!(
            (200.0..=350.0).contains(&solution.flight_time_days),
            "tof_days = {}",
            solution.flight_time_days
        );
        assert!((solution.sma_au - 1.262).abs() < 1e-3);
        assert!((0.0..=100.0).contains(&solution.alignment_score));
        assert_eq!(
            solution.arrival_date,
            launch + Days::new(solution.flight_time_days.round() as u64)
        );
    }

    #[test]
    fn unknown_body_fails_only_the_lookup() {
        let catalog = catalog();
        let site = catalog.site("KSC").unwrap().clone();
        let launch = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
        let mut rng = SeededRng::from_seed(1);
        let err = evaluate(&catalog, "earth", "krypton", &site, launch, &mut rng);
        assert!(matches!(err, Err(CatalogError::UnknownBody(_))));
    }
}
