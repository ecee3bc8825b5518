//! Session date parsing
//!
//! Clients send session dates either as RFC 3339 instants (what a browser
//! `Date` serializes to) or as naive local strings from form inputs. Naive
//! values are interpreted as UTC.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

const NAIVE_FORMATS: [&str; 3] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M:%S"];

/// Parse a session date into a UTC instant
///
/// Accepts, in order:
/// - RFC 3339 (`2025-03-01T10:00:00Z`, `2025-03-01T10:00:00+05:45`)
/// - `YYYY-MM-DDTHH:MM[:SS[.fff]]` and `YYYY-MM-DD HH:MM:SS`
/// - `YYYY-MM-DD` (midnight)
///
/// Returns `None` for anything else.
pub fn parse_session_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    if let Ok(instant) = DateTime::parse_from_rfc3339(raw) {
        return Some(instant.with_timezone(&Utc));
    }

    for format in NAIVE_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}
