//! Analytic Hohmann estimator for the coplanar, circular limit.
//!
//! Returns burn magnitudes and time of flight for two-body Keplerian motion
//! with a specified central GM. The planner uses this as its only transfer
//! model; higher-fidelity solvers are out of scope.

/// Result for a Hohmann transfer between circular, coplanar orbits of radii r1 and r2.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HohmannTransfer {
    /// Injection burn magnitude at the origin orbit (km/s).
    pub dv_depart_km_s: f64,
    /// Insertion burn magnitude at the destination orbit (km/s).
    pub dv_arrive_km_s: f64,
    /// Sum of the two burn magnitudes (km/s).
    pub dv_total_km_s: f64,
    /// Half the transfer-ellipse period.
    pub tof_seconds: f64,
    /// Semi-major axis of the transfer ellipse (km).
    pub sma_km: f64,
}

/// Compute the classical Hohmann transfer between two circular coplanar orbits.
///
/// Inputs:
/// - `r1_km`: initial circular orbit radius (km)
/// - `r2_km`: target circular orbit radius (km)
/// - `mu_km3_s2`: gravitational parameter of central body (km^3/s^2)
pub fn hohmann(r1_km: f64, r2_km: f64, mu_km3_s2: f64) -> HohmannTransfer {
    assert!(r1_km > 0.0 && r2_km > 0.0 && mu_km3_s2 > 0.0);

    let v1 = (mu_km3_s2 / r1_km).sqrt();
    let v2 = (mu_km3_s2 / r2_km).sqrt();
    let a_t = 0.5 * (r1_km + r2_km);
    let tof = std::f64::consts::PI * (a_t.powi(3) / mu_km3_s2).sqrt();

    // Transfer periapsis speed (at r1) and apoapsis speed (at r2) via vis-viva
    let v_t1 = (mu_km3_s2 * (2.0 / r1_km - 1.0 / a_t)).sqrt();
    let v_t2 = (mu_km3_s2 * (2.0 / r2_km - 1.0 / a_t)).sqrt();

    let dv_depart = (v_t1 - v1).abs();
    let dv_arrive = (v2 - v_t2).abs();

    HohmannTransfer {
        dv_depart_km_s: dv_depart,
        dv_arrive_km_s: dv_arrive,
        dv_total_km_s: dv_depart + dv_arrive,
        tof_seconds: tof,
        sma_km: a_t,
    }
}

/// Characteristic energy approximated from total delta-v (km²/s²).
#[inline]
pub fn characteristic_energy_km2_s2(dv_km_s: f64) -> f64 {
    dv_km_s * dv_km_s
}

/// Approximate hyperbolic departure speed relative to Earth (km/s).
#[inline]
pub fn earth_departure_km_s(dv_km_s: f64) -> f64 {
    dv_km_s * 0.6
}
