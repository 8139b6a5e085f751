//! Launch-site requirements attached to each trajectory candidate.

use chrono::{Datelike, NaiveDate};
use serde::Serialize;
use window_config::SiteConfig;
use window_impulsive::transfers::{characteristic_energy_km2_s2, earth_departure_km_s};

use crate::rng::ScoreRng;

/// Local wall-clock opening of the fixed daily launch window.
const WINDOW_OPENS_LOCAL: &str = "06:00";
const WINDOW_DURATION_HOURS: f64 = 2.0;

/// Fixed daily launch window in site-local time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyWindow {
    pub opens_local: &'static str,
    pub duration_hours: f64,
}

impl DailyWindow {
    fn canonical() -> Self {
        Self {
            opens_local: WINDOW_OPENS_LOCAL,
            duration_hours: WINDOW_DURATION_HOURS,
        }
    }
}

/// Azimuth corridor and environmental estimates for one candidate date.
#[derive(Debug, Clone, Serialize)]
pub struct LaunchRequirements {
    pub site_code: String,
    pub site_name: String,
    /// Placeholder corridor around due east, not a range-safety solution.
    pub azimuth_min_deg: f64,
    pub azimuth_max_deg: f64,
    pub daily_window: DailyWindow,
    /// Probability (percent) of acceptable weather on the candidate date.
    pub weather_probability: f64,
    /// Seasonal favorability from the site's month tables.
    pub seasonal_score: f64,
    pub characteristic_energy_km2_s2: f64,
    pub earth_departure_km_s: f64,
}

/// Estimate site requirements for a candidate date.
///
/// The azimuth corridor widens with site latitude and the center carries a
/// ±5° jitter standing in for day-of-launch range constraints; weather and
/// seasonal values are sampled from the injected generator.
pub fn launch_requirements(
    site: &SiteConfig,
    launch_date: NaiveDate,
    dv_total_km_s: f64,
    rng: &mut dyn ScoreRng,
) -> LaunchRequirements {
    let half_width = 15.0 + site.latitude_deg.abs() * 0.25;
    let center = 90.0 + rng.uniform(-5.0, 5.0);

    let weather_probability = rng.uniform(70.0, 100.0);
    let seasonal_score = seasonal_score(site, launch_date.month(), rng);

    LaunchRequirements {
        site_code: site.code.clone(),
        site_name: site.name.clone(),
        azimuth_min_deg: center - half_width,
        azimuth_max_deg: center + half_width,
        daily_window: DailyWindow::canonical(),
        weather_probability,
        seasonal_score,
        characteristic_energy_km2_s2: characteristic_energy_km2_s2(dv_total_km_s),
        earth_departure_km_s: earth_departure_km_s(dv_total_km_s),
    }
}

fn seasonal_score(site: &SiteConfig, month: u32, rng: &mut dyn ScoreRng) -> f64 {
    if site.best_months.contains(&month) {
        rng.uniform(90.0, 100.0)
    } else if site.worst_months.contains(&month) {
        rng.uniform(20.0, 50.0)
    } else {
        rng.uniform(60.0, 90.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SeededRng;

    fn test_site() -> SiteConfig {
        SiteConfig {
            code: "KSC".to_string(),
            name: "Kennedy Space Center".to_string(),
            latitude_deg: 28.57,
            longitude_deg: -80.65,
            country: "USA".to_string(),
            best_months: vec![12, 1],
            worst_months: vec![8],
        }
    }

    #[test]
    fn seasonal_bands_follow_month_tables() {
        let site = test_site();
        let mut rng = SeededRng::from_seed(1);
        for _ in 0..64 {
            let best = seasonal_score(&site, 12, &mut rng);
            assert!((90.0..100.0).contains(&best));
            let worst = seasonal_score(&site, 8, &mut rng);
            assert!((20.0..50.0).contains(&worst));
            let neutral = seasonal_score(&site, 5, &mut rng);
            assert!((60.0..90.0).contains(&neutral));
        }
    }

    #[test]
    fn requirements_replay_under_a_fixed_seed() {
        let site = test_site();
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let mut a = SeededRng::from_seed(11);
        let mut b = SeededRng::from_seed(11);
        let r1 = launch_requirements(&site, date, 5.6, &mut a);
        let r2 = launch_requirements(&site, date, 5.6, &mut b);
        assert_eq!(r1.weather_probability, r2.weather_probability);
        assert_eq!(r1.seasonal_score, r2.seasonal_score);
        assert_eq!(r1.azimuth_min_deg, r2.azimuth_min_deg);
    }

    #[test]
    fn derived_energies_follow_delta_v() {
        let site = test_site();
        let date = NaiveDate::from_ymd_opt(2025, 3, 4).unwrap();
        let mut rng = SeededRng::from_seed(3);
        let reqs = launch_requirements(&site, date, 5.0, &mut rng);
        assert_eq!(reqs.characteristic_energy_km2_s2, 25.0);
        assert_eq!(reqs.earth_departure_km_s, 3.0);
        assert_eq!(reqs.daily_window.duration_hours, 2.0);
        assert!(reqs.azimuth_min_deg < 90.0 && reqs.azimuth_max_deg > 90.0);
    }
}
