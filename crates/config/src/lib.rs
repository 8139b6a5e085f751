//! Catalog models and loaders for the launch window optimizer.
//!
//! The catalog holds the static reference tables the engine plans against:
//! celestial bodies (mean heliocentric orbits), launch sites, and launch
//! vehicles. Tables are loaded once at startup, either from YAML/TOML files
//! or from the built-in defaults.

use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

mod builtin;

/// Celestial body entry: a mean circular heliocentric orbit plus the
/// physical parameters the transfer model needs.
#[derive(Debug, Deserialize, Clone)]
pub struct BodyConfig {
    pub name: String,
    /// Mean distance from the Sun (astronomical units).
    pub orbital_radius_au: f64,
    /// Sidereal orbital period (days).
    pub orbital_period_days: f64,
    pub mu_km3_s2: f64,
    pub radius_km: f64,
}

/// Launch site entry, keyed by short code (e.g. "KSC").
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    pub code: String,
    pub name: String,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub country: String,
    /// Calendar months (1–12) with the best launch conditions.
    #[serde(default)]
    pub best_months: Vec<u32>,
    /// Calendar months (1–12) with the worst launch conditions.
    #[serde(default)]
    pub worst_months: Vec<u32>,
}

/// Launch vehicle entry: payload capacities and a cost rate.
#[derive(Debug, Deserialize, Clone)]
pub struct VehicleConfig {
    pub name: String,
    /// Payload capacity to low Earth orbit (kg).
    pub leo_capacity_kg: f64,
    /// Payload capacity to an interplanetary transfer orbit (kg).
    pub transfer_capacity_kg: f64,
    pub cost_per_kg_usd: f64,
}

/// Errors that can occur while loading catalog files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Lookup failures against the loaded catalog. Body lookups are scoped to a
/// single candidate by the engine; site and vehicle lookups fail the request.
#[derive(Debug, Clone, Error)]
pub enum CatalogError {
    #[error("celestial body '{0}' not found in catalog")]
    UnknownBody(String),
    #[error("launch site '{0}' not found in catalog")]
    UnknownSite(String),
    #[error("launch vehicle '{0}' not found in catalog")]
    UnknownVehicle(String),
}

/// Immutable keyed reference tables, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Catalog {
    bodies: HashMap<String, BodyConfig>,
    sites: HashMap<String, SiteConfig>,
    vehicles: HashMap<String, VehicleConfig>,
    objectives: HashMap<String, Vec<String>>,
    default_objectives: Vec<String>,
}

impl Catalog {
    /// Build a catalog from loaded tables. Bodies are keyed lower-cased,
    /// sites and vehicles upper-cased, so lookups are case-insensitive.
    pub fn new(
        bodies: Vec<BodyConfig>,
        sites: Vec<SiteConfig>,
        vehicles: Vec<VehicleConfig>,
    ) -> Self {
        let bodies = bodies
            .into_iter()
            .map(|b| (b.name.to_lowercase(), b))
            .collect();
        let sites = sites
            .into_iter()
            .map(|s| (s.code.to_uppercase(), s))
            .collect();
        let vehicles = vehicles
            .into_iter()
            .map(|v| (v.name.to_uppercase(), v))
            .collect();
        Self {
            bodies,
            sites,
            vehicles,
            objectives: builtin::objectives(),
            default_objectives: builtin::default_objectives(),
        }
    }

    /// The default tables compiled into the binary.
    pub fn builtin() -> Self {
        Self::new(
            builtin::bodies(),
            builtin::sites(),
            builtin::vehicles(),
        )
    }

    pub fn body(&self, name: &str) -> Result<&BodyConfig, CatalogError> {
        self.bodies
            .get(&name.to_lowercase())
            .ok_or_else(|| CatalogError::UnknownBody(name.to_string()))
    }

    pub fn site(&self, code: &str) -> Result<&SiteConfig, CatalogError> {
        self.sites
            .get(&code.to_uppercase())
            .ok_or_else(|| CatalogError::UnknownSite(code.to_string()))
    }

    pub fn vehicle(&self, name: &str) -> Result<&VehicleConfig, CatalogError> {
        self.vehicles
            .get(&name.to_uppercase())
            .ok_or_else(|| CatalogError::UnknownVehicle(name.to_string()))
    }

    /// Canned mission objectives for a destination, falling back to the
    /// generic list for unrecognized bodies.
    pub fn objectives(&self, destination: &str) -> &[String] {
        self.objectives
            .get(&destination.to_lowercase())
            .map(Vec::as_slice)
            .unwrap_or(&self.default_objectives)
    }

    pub fn body_count(&self) -> usize {
        self.bodies.len()
    }

    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    pub fn vehicle_count(&self) -> usize {
        self.vehicles.len()
    }
}

/// Load a full catalog from a directory containing `bodies.yaml`,
/// `sites.yaml`, and `vehicles.yaml`.
pub fn load_catalog<P: AsRef<Path>>(dir: P) -> Result<Catalog, ConfigError> {
    let dir = dir.as_ref();
    let bodies = load_bodies(dir.join("bodies.yaml"))?;
    let sites = load_sites(dir.join("sites.yaml"))?;
    let vehicles = load_vehicles(dir.join("vehicles.yaml"))?;
    Ok(Catalog::new(bodies, sites, vehicles))
}

/// Load celestial body configurations from a YAML file, a TOML file, or a
/// directory of TOML files.
pub fn load_bodies<P: AsRef<Path>>(path: P) -> Result<Vec<BodyConfig>, ConfigError> {
    load_records(path)
}

/// Load launch site configurations.
pub fn load_sites<P: AsRef<Path>>(path: P) -> Result<Vec<SiteConfig>, ConfigError> {
    load_records(path)
}

/// Load launch vehicle configurations.
pub fn load_vehicles<P: AsRef<Path>>(path: P) -> Result<Vec<VehicleConfig>, ConfigError> {
    load_records(path)
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        read_dir_records(path)
    } else if path.extension().map(|ext| ext == "toml").unwrap_or(false) {
        let contents = std::fs::read_to_string(path)?;
        let record: T = toml::from_str(&contents)?;
        Ok(vec![record])
    } else {
        let reader = File::open(path)?;
        Ok(serde_yaml::from_reader(reader)?)
    }
}

fn read_dir_records<T>(dir: &Path) -> Result<Vec<T>, ConfigError>
where
    T: for<'de> Deserialize<'de>,
{
    let mut records = Vec::new();
    let mut entries: Vec<PathBuf> = std::fs::read_dir(dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().map(|ext| ext == "toml").unwrap_or(false))
        .collect();
    entries.sort();
    for path in entries {
        let contents = std::fs::read_to_string(&path)?;
        let record: T = toml::from_str(&contents)?;
        records.push(record);
    }
    Ok(records)
}
