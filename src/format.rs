//! Display-label helpers for chart buckets.

use chrono::{DateTime, Local, Utc};

/// Label for an hourly bucket: the hour of day in the viewer's local time.
pub fn hour_label(start: DateTime<Utc>) -> String {
    start.with_timezone(&Local).format("%H:00").to_string()
}

/// Label for a daily bucket: the short date of its UTC day.
///
/// Daily buckets are aligned to UTC midnight, so the label uses the UTC
/// calendar date rather than shifting the edge into the viewer's zone.
pub fn day_label(start: DateTime<Utc>) -> String {
    start.format("%b %d").to_string()
}
