//! Built-in default catalog tables.
//!
//! Orbital radii and periods are mean values; the transfer model treats
//! every orbit as circular and coplanar, so no further elements are kept.

use std::collections::HashMap;

use crate::{BodyConfig, SiteConfig, VehicleConfig};

pub(crate) fn bodies() -> Vec<BodyConfig> {
    vec![
        BodyConfig {
            name: "Mercury".to_string(),
            orbital_radius_au: 0.387,
            orbital_period_days: 87.97,
            mu_km3_s2: 2.2032e4,
            radius_km: 2_439.7,
        },
        BodyConfig {
            name: "Venus".to_string(),
            orbital_radius_au: 0.723,
            orbital_period_days: 224.70,
            mu_km3_s2: 3.248_59e5,
            radius_km: 6_051.8,
        },
        BodyConfig {
            name: "Earth".to_string(),
            orbital_radius_au: 1.0,
            orbital_period_days: 365.25,
            mu_km3_s2: 3.986_004_418e5,
            radius_km: 6_371.0,
        },
        BodyConfig {
            name: "Mars".to_string(),
            orbital_radius_au: 1.524,
            orbital_period_days: 686.98,
            mu_km3_s2: 4.282_837e4,
            radius_km: 3_389.5,
        },
        BodyConfig {
            name: "Jupiter".to_string(),
            orbital_radius_au: 5.203,
            orbital_period_days: 4_332.59,
            mu_km3_s2: 1.266_865_34e8,
            radius_km: 69_911.0,
        },
        BodyConfig {
            name: "Saturn".to_string(),
            orbital_radius_au: 9.537,
            orbital_period_days: 10_759.22,
            mu_km3_s2: 3.793_118_7e7,
            radius_km: 58_232.0,
        },
    ]
}

pub(crate) fn sites() -> Vec<SiteConfig> {
    vec![
        SiteConfig {
            code: "KSC".to_string(),
            name: "Kennedy Space Center".to_string(),
            latitude_deg: 28.57,
            longitude_deg: -80.65,
            country: "USA".to_string(),
            best_months: vec![11, 12, 1, 2, 3],
            worst_months: vec![8, 9],
        },
        SiteConfig {
            code: "CCAFS".to_string(),
            name: "Cape Canaveral Space Force Station".to_string(),
            latitude_deg: 28.49,
            longitude_deg: -80.57,
            country: "USA".to_string(),
            best_months: vec![11, 12, 1, 2, 3],
            worst_months: vec![8, 9],
        },
        SiteConfig {
            code: "VAFB".to_string(),
            name: "Vandenberg Space Force Base".to_string(),
            latitude_deg: 34.74,
            longitude_deg: -120.57,
            country: "USA".to_string(),
            best_months: vec![4, 5, 6, 9, 10],
            worst_months: vec![12, 1],
        },
        SiteConfig {
            code: "KOUROU".to_string(),
            name: "Guiana Space Centre".to_string(),
            latitude_deg: 5.24,
            longitude_deg: -52.77,
            country: "France".to_string(),
            best_months: vec![2, 3, 8, 9, 10],
            worst_months: vec![5, 6],
        },
        SiteConfig {
            code: "BAIKONUR".to_string(),
            name: "Baikonur Cosmodrome".to_string(),
            latitude_deg: 45.92,
            longitude_deg: 63.34,
            country: "Kazakhstan".to_string(),
            best_months: vec![5, 6, 7, 8, 9],
            worst_months: vec![12, 1, 2],
        },
    ]
}

pub(crate) fn vehicles() -> Vec<VehicleConfig> {
    vec![
        VehicleConfig {
            name: "Falcon 9".to_string(),
            leo_capacity_kg: 22_800.0,
            transfer_capacity_kg: 8_300.0,
            cost_per_kg_usd: 2_700.0,
        },
        VehicleConfig {
            name: "Falcon Heavy".to_string(),
            leo_capacity_kg: 63_800.0,
            transfer_capacity_kg: 26_700.0,
            cost_per_kg_usd: 1_400.0,
        },
        VehicleConfig {
            name: "Atlas V".to_string(),
            leo_capacity_kg: 18_850.0,
            transfer_capacity_kg: 8_900.0,
            cost_per_kg_usd: 5_800.0,
        },
        VehicleConfig {
            name: "Delta IV Heavy".to_string(),
            leo_capacity_kg: 28_790.0,
            transfer_capacity_kg: 14_220.0,
            cost_per_kg_usd: 10_600.0,
        },
        VehicleConfig {
            name: "SLS Block 1".to_string(),
            leo_capacity_kg: 95_000.0,
            transfer_capacity_kg: 27_000.0,
            cost_per_kg_usd: 21_000.0,
        },
    ]
}

pub(crate) fn objectives() -> HashMap<String, Vec<String>> {
    let mut table = HashMap::new();
    table.insert(
        "mars".to_string(),
        to_strings(&[
            "Characterize surface geology at the landing region",
            "Collect and cache regolith samples for return",
            "Profile atmospheric dust and weather through one season",
            "Search for biosignatures in near-surface ice",
        ]),
    );
    table.insert(
        "venus".to_string(),
        to_strings(&[
            "Map cloud-layer circulation and super-rotation",
            "Measure atmospheric composition during descent",
            "Image surface volcanism through radar",
        ]),
    );
    table.insert(
        "mercury".to_string(),
        to_strings(&[
            "Map the surface at high resolution",
            "Characterize the exosphere and magnetosphere",
            "Constrain the composition of polar ice deposits",
        ]),
    );
    table.insert(
        "jupiter".to_string(),
        to_strings(&[
            "Survey the Galilean moons during flybys",
            "Measure the deep atmospheric water abundance",
            "Map the magnetosphere and radiation belts",
        ]),
    );
    table.insert(
        "saturn".to_string(),
        to_strings(&[
            "Sample ring particles during ring-plane crossings",
            "Observe seasonal change in the hexagonal polar jet",
            "Characterize Titan's lakes from orbit",
        ]),
    );
    table
}

pub(crate) fn default_objectives() -> Vec<String> {
    to_strings(&[
        "Demonstrate deep-space cruise operations",
        "Return science data from the destination environment",
        "Validate navigation and communication systems",
    ])
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
