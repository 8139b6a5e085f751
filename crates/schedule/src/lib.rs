//! Real-world launch schedule feed.
//!
//! The engine merges an externally supplied schedule into its results but
//! never depends on it: a failed or timed-out fetch degrades to an empty
//! list. Implement [`ScheduleSource`] to supply fixtures in tests or a
//! different transport in production.

use std::time::Duration;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

/// One externally supplied schedule entry, attached to results unmodified.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LaunchRecord {
    pub name: String,
    pub scheduled_date: NaiveDate,
    pub rocket: String,
    pub mission: String,
    pub pad: String,
    pub agency: String,
    pub status: String,
}

#[derive(Debug, Error)]
pub enum ScheduleError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),
    #[error("malformed schedule payload: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Source of upcoming launches.
pub trait ScheduleSource: Send + Sync {
    fn fetch(&self) -> Result<Vec<LaunchRecord>, ScheduleError>;
}

/// Blocking HTTP source expecting a JSON array of records.
pub struct HttpScheduleSource {
    client: reqwest::blocking::Client,
    url: String,
}

impl HttpScheduleSource {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(url: impl Into<String>) -> Result<Self, ScheduleError> {
        Self::with_timeout(url, Self::DEFAULT_TIMEOUT)
    }

    pub fn with_timeout(
        url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, ScheduleError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(Self {
            client,
            url: url.into(),
        })
    }
}

impl ScheduleSource for HttpScheduleSource {
    fn fetch(&self) -> Result<Vec<LaunchRecord>, ScheduleError> {
        let body = self
            .client
            .get(&self.url)
            .send()?
            .error_for_status()?
            .text()?;
        Ok(serde_json::from_str(&body)?)
    }
}

/// Fixed in-memory source for tests and offline runs.
pub struct StaticScheduleSource {
    records: Vec<LaunchRecord>,
}

impl StaticScheduleSource {
    pub fn new(records: Vec<LaunchRecord>) -> Self {
        Self { records }
    }
}

impl ScheduleSource for StaticScheduleSource {
    fn fetch(&self) -> Result<Vec<LaunchRecord>, ScheduleError> {
        Ok(self.records.clone())
    }
}

/// Keep only records scheduled inside the inclusive date range, preserving
/// feed order and record contents.
pub fn filter_to_range(
    records: Vec<LaunchRecord>,
    start: NaiveDate,
    end: NaiveDate,
) -> Vec<LaunchRecord> {
    records
        .into_iter()
        .filter(|r| r.scheduled_date >= start && r.scheduled_date <= end)
        .collect()
}

/// Fetch from an optional source, degrading to an empty list on any failure.
pub fn fetch_fail_soft(source: Option<&dyn ScheduleSource>) -> Vec<LaunchRecord> {
    let Some(source) = source else {
        return Vec::new();
    };
    match source.fetch() {
        Ok(records) => records,
        Err(err) => {
            warn!("launch schedule fetch failed, continuing without feed: {err}");
            Vec::new()
        }
    }
}
