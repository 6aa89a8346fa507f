//! Parsing of collaborator-supplied ISO-8601 view timestamps.
//!
//! The HTTP layer hands the engine arrays of ISO-8601 strings. Instants
//! are the only attribute of a view; order and duplicates are preserved
//! as received.

use crate::error::Result;
use chrono::{DateTime, Utc};

/// Parse one RFC 3339 timestamp into a UTC instant.
pub fn parse_instant(raw: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(raw)?.with_timezone(&Utc))
}

/// Parse a batch of timestamps, dropping malformed entries.
///
/// A single bad timestamp must not abort a dashboard render, so failures
/// are traced at debug level and skipped.
pub fn parse_events<'a, I>(raw: I) -> Vec<DateTime<Utc>>
where
    I: IntoIterator<Item = &'a str>,
{
    raw.into_iter()
        .filter_map(|s| match parse_instant(s) {
            Ok(instant) => Some(instant),
            Err(error) => {
                tracing::debug!(raw = s, %error, "skipping malformed view timestamp");
                None
            }
        })
        .collect()
}
