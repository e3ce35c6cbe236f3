use chrono::{DateTime, Local, Utc};

use super::TimeZoneMode;

/// Julian date of 1970-01-01T00:00:00Z.
pub const JULIAN_UNIX_EPOCH: f64 = 2440587.5;
pub const SECONDS_PER_DAY: f64 = 86400.0;

/// Seconds in a span of days, snapped to the millisecond.
///
/// A Julian date near 2.46e6 only resolves about 40 µs, so whole seconds can
/// come back a few ulps short and must not floor to the previous second.
pub fn days_to_seconds(days: f64) -> f64 {
    (days * SECONDS_PER_DAY * 1000.0).round() / 1000.0
}

/// Converts a Julian date to UTC, truncated to whole seconds.
pub fn julian_to_utc(jd: f64) -> Option<DateTime<Utc>> {
    let secs = days_to_seconds(jd - JULIAN_UNIX_EPOCH).floor();
    if !secs.is_finite() {
        return None;
    }
    DateTime::from_timestamp(secs as i64, 0)
}

pub fn utc_to_julian(dt: DateTime<Utc>) -> f64 {
    dt.timestamp_millis() as f64 / (SECONDS_PER_DAY * 1000.0) + JULIAN_UNIX_EPOCH
}

/// Formats a Julian date with a strftime pattern, in UTC or host-local time.
///
/// Dates chrono cannot represent are rendered as the Unix epoch.
pub fn format_julian(jd: f64, tz_mode: TimeZoneMode, pattern: &str) -> String {
    let utc = julian_to_utc(jd).unwrap_or_else(|| {
        log::warn!("Julian date {} is out of range, using epoch", jd);
        DateTime::<Utc>::default()
    });

    match tz_mode {
        TimeZoneMode::Utc => utc.format(pattern).to_string(),
        TimeZoneMode::Local => utc.with_timezone(&Local).format(pattern).to_string(),
    }
}
