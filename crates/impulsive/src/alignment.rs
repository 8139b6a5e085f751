//! Synodic alignment and efficiency heuristics layered on the Hohmann estimate.
//!
//! The phase model is deliberately coarse: bodies advance on mean circular
//! orbits from a fixed epoch, so the phase angle is a pure function of the
//! elapsed days and the pair's synodic period.

/// Synodic period of two bodies from their sidereal periods (days).
///
/// Equal periods never drift apart; the pair is treated as permanently
/// aligned and the period reported as infinite.
pub fn synodic_period_days(p1_days: f64, p2_days: f64) -> f64 {
    assert!(p1_days > 0.0 && p2_days > 0.0);
    let rate = (1.0 / p1_days - 1.0 / p2_days).abs();
    if rate == 0.0 { f64::INFINITY } else { 1.0 / rate }
}

/// Phase angle (degrees) of an origin/destination pair `days_since_epoch`
/// days after the reference epoch.
pub fn phase_angle_deg(days_since_epoch: f64, synodic_days: f64) -> f64 {
    if !synodic_days.is_finite() {
        return 0.0;
    }
    days_since_epoch.rem_euclid(synodic_days) / synodic_days * 360.0
}

/// Alignment quality on a 0–100 scale. Conjunction (0°) and the wrap-around
/// at 360° score highest; 180° of separation scores zero.
pub fn alignment_score(phase_deg: f64) -> f64 {
    let separation = phase_deg.min(360.0 - phase_deg);
    (100.0 * (1.0 - separation / 180.0)).clamp(0.0, 100.0)
}

/// Linear delta-v efficiency anchored at a 3 km/s baseline. The anchor and
/// slope are fixed output-compatibility constants, not physical claims.
pub fn efficiency_score(dv_total_km_s: f64) -> f64 {
    (100.0 - (dv_total_km_s - 3.0) * 10.0).max(0.0)
}
