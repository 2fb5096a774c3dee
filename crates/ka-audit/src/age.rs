//! Credential age in whole days.

use chrono::{DateTime, Utc};

pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Days between `created` and `now`, rounded to the nearest whole day.
///
/// Both instants are truncated to whole seconds before subtracting, so
/// sub-second components never tip a half-day boundary. An exact half day
/// rounds to the even neighbour. A creation time after `now` yields a negative
/// age.
pub fn age_in_days(created: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    // `timestamp()` drops the sub-second part
    let elapsed = now.timestamp() - created.timestamp();
    (elapsed as f64 / SECONDS_PER_DAY).round_ties_even() as i64
}
