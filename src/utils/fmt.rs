//! ## fmt
//!
//! format utilities

use std::time::{SystemTime, UNIX_EPOCH};

use chrono::{DateTime, Utc};

/// Seconds since the unix epoch; 0 for unknown or pre-epoch times
pub fn epoch_secs(time: SystemTime) -> u64 {
    time.duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0)
}

/// Format an epoch-seconds timestamp using fmt string in utc time
pub fn fmt_epoch_utc(secs: u64, fmt: &str) -> String {
    let datetime: DateTime<Utc> =
        DateTime::from_timestamp(secs as i64, 0).unwrap_or(DateTime::UNIX_EPOCH);
    format!("{}", datetime.format(fmt))
}
