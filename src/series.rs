//! Bucketed aggregation of raw view instants into a chart series.
//!
//! The series contract the chart widget depends on: one bucket per
//! interval in the window, strictly ascending, no gaps, no duplicates.
//! Intervals nothing fell into still appear with a zero count so an idle
//! post renders as a flat line rather than an empty chart.

use crate::calendar::{floor_to_day, floor_to_hour};
use crate::format;
use crate::window::{Granularity, WindowSelection};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// One fixed-width interval of the chart plus its view count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Bucket {
    /// Inclusive lower edge of the interval
    pub start: DateTime<Utc>,
    /// Display label derived from `start`
    pub label: String,
    /// Views that fell inside the interval
    pub count: u64,
}

/// Ordered, gap-free sequence of buckets covering a whole window.
pub type Series = Vec<Bucket>;

/// Bucket the given view instants into the selected window.
///
/// Views outside `[window.start, window.end)` belong to a different
/// report and are skipped silently. Duplicate instants are duplicate real
/// views and all count. The output length always equals the window's
/// bucket count, whatever the input looks like.
pub fn aggregate(events: &[DateTime<Utc>], window: &WindowSelection) -> Series {
    let step = window.granularity.step();

    // Seed every interval up front by walking the range forward, so the
    // no-gaps invariant holds independently of which buckets receive
    // events.
    let mut counts: BTreeMap<DateTime<Utc>, u64> = BTreeMap::new();
    let mut cursor = window.start;
    while cursor < window.end {
        counts.insert(cursor, 0);
        cursor += step;
    }

    for &event in events {
        if !window.contains(event) {
            continue;
        }
        let key = match window.granularity {
            Granularity::Hour => floor_to_hour(event),
            Granularity::Day => floor_to_day(event),
        };
        match counts.get_mut(&key) {
            Some(count) => *count += 1,
            // In range but off the bucket grid. Tolerate bad data rather
            // than abort the whole dashboard render.
            None => tracing::debug!(event = %event, "view maps to no bucket, skipping"),
        }
    }

    counts
        .into_iter()
        .map(|(start, count)| Bucket {
            start,
            label: match window.granularity {
                Granularity::Hour => format::hour_label(start),
                Granularity::Day => format::day_label(start),
            },
            count,
        })
        .collect()
}
