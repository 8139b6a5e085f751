//! Candidate launch date enumeration.

use chrono::{Days, NaiveDate};

/// Fixed spacing between candidate launch dates. This cadence is the only
/// date-generation policy; the request's mission type does not alter it.
pub const CANDIDATE_SPACING_DAYS: u64 = 7;

/// Cap on candidates evaluated per request.
pub const MAX_CANDIDATES: usize = 50;

/// Enumerate candidate dates from `start` through `end` inclusive at the
/// fixed cadence. An inverted range yields an empty sequence.
pub fn enumerate_dates(start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
    let mut launch_dates = Vec::new();
    let mut current = start;
    while current <= end {
        launch_dates.push(current);
        current = match current.checked_add_days(Days::new(CANDIDATE_SPACING_DAYS)) {
            Some(next) => next,
            None => break,
        };
    }
    launch_dates
}
