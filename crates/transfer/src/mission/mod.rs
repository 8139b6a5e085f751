//! Mission request types and the optimization orchestrator.

pub mod candidate;
pub mod dates;
pub mod manifest;
pub mod ranking;

use chrono::NaiveDate;
use rayon::prelude::*;
use serde::Serialize;
use tracing::{debug, info};
use window_config::{Catalog, CatalogError, SiteConfig, VehicleConfig};
use window_schedule::{LaunchRecord, ScheduleSource, fetch_fail_soft, filter_to_range};
use window_scoring::rng::{SeededRng, candidate_seed, entropy_seed};

use crate::cache::WindowCache;
use self::candidate::TrajectoryCandidate;
use self::ranking::RankedWindow;

/// Caller-supplied constraints; a missing bound imposes no filter.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Constraints {
    pub max_flight_time_days: Option<f64>,
    pub max_delta_v_km_s: Option<f64>,
    pub min_score: Option<u32>,
}

/// One optimization request.
#[derive(Debug, Clone)]
pub struct MissionParameters {
    pub origin: String,
    pub destination: String,
    pub site_code: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    /// Carried for reporting; does not influence enumeration or scoring.
    pub mission_type: String,
    pub payload_mass_kg: f64,
    pub vehicle: String,
    pub constraints: Constraints,
}

impl MissionParameters {
    /// Cache key covering the full request tuple.
    pub fn cache_key(&self) -> String {
        format!(
            "{}|{}|{}|{}|{}|{}|{}|{}|{:?}|{:?}|{:?}",
            self.origin.to_lowercase(),
            self.destination.to_lowercase(),
            self.site_code.to_uppercase(),
            self.start_date,
            self.end_date,
            self.mission_type,
            self.payload_mass_kg,
            self.vehicle.to_uppercase(),
            self.constraints.max_flight_time_days,
            self.constraints.max_delta_v_km_s,
            self.constraints.min_score,
        )
    }
}

/// Echo of the selected vehicle's capability, attached to results.
#[derive(Debug, Clone, Serialize)]
pub struct VehicleCapability {
    pub name: String,
    pub leo_capacity_kg: f64,
    pub transfer_capacity_kg: f64,
    pub cost_per_kg_usd: f64,
}

impl From<&VehicleConfig> for VehicleCapability {
    fn from(vehicle: &VehicleConfig) -> Self {
        Self {
            name: vehicle.name.clone(),
            leo_capacity_kg: vehicle.leo_capacity_kg,
            transfer_capacity_kg: vehicle.transfer_capacity_kg,
            cost_per_kg_usd: vehicle.cost_per_kg_usd,
        }
    }
}

/// Output of one optimization request.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationResult {
    /// Best-ranked windows, at most ten.
    pub optimal_windows: Vec<RankedWindow>,
    /// The next ten, for fallback planning.
    pub alternative_windows: Vec<RankedWindow>,
    pub constraints: Constraints,
    pub vehicle_capability: VehicleCapability,
    /// External feed filtered to the requested range; empty when the fetch
    /// failed or no source was configured.
    pub real_launches: Vec<LaunchRecord>,
    /// Number of candidates that produced a scored trajectory.
    pub windows_analyzed: usize,
}

/// Request-level failure: an unresolved reference aborts the whole request.
/// Per-candidate body lookups are downgraded to skips inside the batch.
#[derive(Debug, Clone, thiserror::Error)]
pub enum OptimizeError {
    #[error("unknown reference: {0}")]
    UnknownReference(#[from] CatalogError),
}

/// Randomness policy for the sampled scoring stages.
#[derive(Debug, Clone, Copy)]
pub enum SeedPolicy {
    /// Fresh entropy per request.
    Entropy,
    /// Fixed base seed; replays identical samples per candidate date.
    Fixed(u64),
}

/// Owns the static catalog and optional collaborators, and runs the
/// enumerate/evaluate/filter/rank pipeline per request.
pub struct TransferWindowEngine {
    catalog: Catalog,
    seed_policy: SeedPolicy,
    cache: Option<Box<dyn WindowCache>>,
    schedule: Option<Box<dyn ScheduleSource>>,
}

impl TransferWindowEngine {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            seed_policy: SeedPolicy::Entropy,
            cache: None,
            schedule: None,
        }
    }

    /// Replace the entropy policy with a fixed base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed_policy = SeedPolicy::Fixed(seed);
        self
    }

    /// Attach a result cache keyed by the full parameter tuple.
    pub fn with_cache(mut self, cache: Box<dyn WindowCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Attach a real-launch schedule source; fetch failures degrade to an
    /// empty feed.
    pub fn with_schedule_source(mut self, source: Box<dyn ScheduleSource>) -> Self {
        self.schedule = Some(source);
        self
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Run one optimization request.
    pub fn optimize(
        &self,
        params: &MissionParameters,
    ) -> Result<OptimizationResult, OptimizeError> {
        let key = params.cache_key();
        if let Some(cache) = &self.cache {
            if let Some(hit) = cache.get(&key) {
                debug!("returning cached result for {key}");
                return Ok(hit);
            }
        }

        // Site and vehicle are request-scoped lookups. Body names are used
        // per candidate, but an unknown body would fail every candidate
        // identically, so the request is rejected up front.
        let vehicle = self.catalog.vehicle(&params.vehicle)?.clone();
        let site = self.catalog.site(&params.site_code)?.clone();
        self.catalog.body(&params.origin)?;
        self.catalog.body(&params.destination)?;

        let mut launch_dates = dates::enumerate_dates(params.start_date, params.end_date);
        if launch_dates.len() > dates::MAX_CANDIDATES {
            debug!(
                dropped = launch_dates.len() - dates::MAX_CANDIDATES,
                "truncating candidate batch"
            );
            launch_dates.truncate(dates::MAX_CANDIDATES);
        }

        let base_seed = match self.seed_policy {
            SeedPolicy::Fixed(seed) => seed,
            SeedPolicy::Entropy => entropy_seed(),
        };

        info!(
            origin = %params.origin,
            destination = %params.destination,
            candidates = launch_dates.len(),
            "optimizing transfer windows"
        );

        // Candidate evaluations are pure and independent; the schedule fetch
        // does not depend on them, so both run concurrently and fan in here.
        let (candidates, feed) = rayon::join(
            || self.evaluate_batch(params, &site, &launch_dates, base_seed),
            || fetch_fail_soft(self.schedule.as_deref()),
        );

        let windows_analyzed = candidates.len();
        let surviving = ranking::filter_candidates(
            candidates,
            &vehicle,
            params.payload_mass_kg,
            &params.constraints,
        );
        let (optimal_windows, alternative_windows) =
            ranking::rank(surviving, &vehicle, params.payload_mass_kg);

        let real_launches = filter_to_range(feed, params.start_date, params.end_date);

        let result = OptimizationResult {
            optimal_windows,
            alternative_windows,
            constraints: params.constraints.clone(),
            vehicle_capability: VehicleCapability::from(&vehicle),
            real_launches,
            windows_analyzed,
        };

        if let Some(cache) = &self.cache {
            cache.put(&key, result.clone());
        }
        Ok(result)
    }

    fn evaluate_batch(
        &self,
        params: &MissionParameters,
        site: &SiteConfig,
        launch_dates: &[NaiveDate],
        base_seed: u64,
    ) -> Vec<TrajectoryCandidate> {
        launch_dates
            .par_iter()
            .filter_map(|&launch_date| {
                let mut rng = SeededRng::from_seed(candidate_seed(base_seed, launch_date));
                match candidate::evaluate(
                    &self.catalog,
                    &params.origin,
                    &params.destination,
                    site,
                    launch_date,
                    &mut rng,
                ) {
                    Ok(candidate) => Some(candidate),
                    Err(err) => {
                        debug!(%launch_date, "skipping candidate: {err}");
                        None
                    }
                }
            })
            .collect()
    }
}
