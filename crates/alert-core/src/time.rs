//! Timestamp localization and duration formatting.
//!
//! Upstream warehouses store freshness timestamps as UTC strings. Alerts show
//! them in the recipient's timezone using [`DATETIME_FORMAT`].

use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Tz;

use crate::error::{AlertError, Result};

/// Display format for every rendered timestamp.
pub const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Accepted formats for timestamps without an offset (read as UTC).
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M:%S%.f"];

const SECONDS_PER_DAY: u64 = 86_400;

/// Parse a UTC timestamp string.
///
/// RFC 3339 strings keep their offset; naive strings are taken as UTC.
pub fn parse_utc(value: &str) -> Result<DateTime<Utc>> {
    let value = value.trim();

    if let Ok(parsed) = DateTime::parse_from_rfc3339(value) {
        return Ok(parsed.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| AlertError::InvalidTimestamp {
            value: value.to_string(),
            reason: "expected RFC 3339 or YYYY-MM-DD HH:MM:SS".to_string(),
        })
}

/// Resolve a timezone name, defaulting to UTC when absent or blank.
pub fn resolve_timezone(timezone: Option<&str>) -> Result<Tz> {
    match timezone.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) => name
            .parse::<Tz>()
            .map_err(|_| AlertError::InvalidTimezone(name.to_string())),
        None => Ok(Tz::UTC),
    }
}

/// Format a UTC instant in the given timezone.
pub fn localize_datetime(value: DateTime<Utc>, timezone: Option<&str>) -> Result<String> {
    let tz = resolve_timezone(timezone)?;
    Ok(value.with_timezone(&tz).format(DATETIME_FORMAT).to_string())
}

/// Convert a UTC timestamp string into a display string in `timezone`.
///
/// Absent or empty input passes through as `None`.
pub fn localize(value: Option<&str>, timezone: Option<&str>) -> Result<Option<String>> {
    match value.filter(|v| !v.trim().is_empty()) {
        Some(raw) => localize_datetime(parse_utc(raw)?, timezone).map(Some),
        None => Ok(None),
    }
}

/// Format elapsed seconds as `H:MM:SS`.
///
/// Whole days are prefixed (`2 days, 3:00:00`) and a sub-second remainder
/// is shown with microsecond precision. Negative and non-finite input
/// renders as zero.
pub fn format_elapsed(seconds: f64) -> String {
    let seconds = if seconds.is_finite() { seconds.max(0.0) } else { 0.0 };
    let total_micros = (seconds * 1_000_000.0).round() as u64;

    let micros = total_micros % 1_000_000;
    let total_secs = total_micros / 1_000_000;
    let days = total_secs / SECONDS_PER_DAY;
    let hours = (total_secs % SECONDS_PER_DAY) / 3600;
    let minutes = (total_secs % 3600) / 60;
    let secs = total_secs % 60;

    let mut out = String::new();
    if days > 0 {
        let unit = if days == 1 { "day" } else { "days" };
        out.push_str(&format!("{days} {unit}, "));
    }
    out.push_str(&format!("{hours}:{minutes:02}:{secs:02}"));
    if micros > 0 {
        out.push_str(&format!(".{micros:06}"));
    }
    out
}
