//! Best-effort timestamp parsing for recency comparison.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};

const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%d.%m.%Y %H:%M:%S",
];

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%Y", "%d.%m.%Y"];

/// Parse a recency marker, trying the timestamp shapes the exports
/// actually produce. Returns `None` for anything unrecognized.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    // RFC 3339 covers the synthesized roster timestamps.
    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(dt.naive_utc());
    }
    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }
    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return Some(date.and_time(NaiveTime::MIN));
        }
    }
    None
}

/// Whether `incoming` should replace `retained`.
///
/// Strictly-greater comparison when both sides parse; a parse failure on
/// either side resolves in favor of the incoming value, so later entries
/// win in the degraded case.
pub fn is_more_recent(incoming: &str, retained: &str) -> bool {
    match (parse_timestamp(incoming), parse_timestamp(retained)) {
        (Some(a), Some(b)) => a > b,
        _ => true,
    }
}
