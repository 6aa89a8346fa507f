//! Look-back window selection for the view chart.
//!
//! A window name ("1d", "7d", "30d") implies both a bucket granularity and
//! a concrete half-open time range anchored at "now". The pairing of
//! window and granularity is fixed: the chart for a single day shows
//! hours, the week and month charts show days.

use crate::calendar::{ceil_to_day, ceil_to_hour};
use crate::error::{Error, Result};
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::str::FromStr;

/// Named look-back window for the view chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum Window {
    /// Last 24 hours, hourly buckets
    #[serde(rename = "1d")]
    Day,
    /// Last 7 days, daily buckets
    #[serde(rename = "7d")]
    Week,
    /// Last 30 days, daily buckets
    #[serde(rename = "30d")]
    Month,
}

/// Fixed bucket width implied by a window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Hour,
    Day,
}

impl Granularity {
    /// Width of one bucket at this granularity.
    pub fn step(&self) -> Duration {
        match self {
            Granularity::Hour => Duration::hours(1),
            Granularity::Day => Duration::days(1),
        }
    }
}

impl Window {
    /// The window name as the caller spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            Window::Day => "1d",
            Window::Week => "7d",
            Window::Month => "30d",
        }
    }

    /// Bucket width for this window. Fixed pairing, not a caller choice.
    pub fn granularity(&self) -> Granularity {
        match self {
            Window::Day => Granularity::Hour,
            Window::Week | Window::Month => Granularity::Day,
        }
    }

    /// Number of buckets the chart for this window always shows.
    pub fn bucket_count(&self) -> usize {
        match self {
            Window::Day => 24,
            Window::Week => 7,
            Window::Month => 30,
        }
    }

    /// Resolve this window against `now` into a concrete half-open range.
    ///
    /// The upper bound is `now` rounded up to the next granularity
    /// boundary (unchanged when already aligned), so the current partial
    /// hour or day still gets a bucket. The lower bound sits exactly
    /// [`Window::bucket_count`] steps earlier, which keeps the bucket
    /// count fixed regardless of where inside a period `now` falls.
    ///
    /// Pure function of its two inputs.
    pub fn select(&self, now: DateTime<Utc>) -> WindowSelection {
        let granularity = self.granularity();
        let end = match granularity {
            Granularity::Hour => ceil_to_hour(now),
            Granularity::Day => ceil_to_day(now),
        };
        let start = end - granularity.step() * self.bucket_count() as i32;
        WindowSelection {
            granularity,
            start,
            end,
        }
    }
}

impl FromStr for Window {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1d" => Ok(Window::Day),
            "7d" => Ok(Window::Week),
            "30d" => Ok(Window::Month),
            other => Err(Error::UnknownWindow(other.to_string())),
        }
    }
}

/// A window resolved against "now": granularity plus `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSelection {
    /// Width of each bucket
    pub granularity: Granularity,
    /// Inclusive lower edge of the range, aligned to the granularity
    pub start: DateTime<Utc>,
    /// Exclusive upper edge of the range, aligned to the granularity
    pub end: DateTime<Utc>,
}

impl WindowSelection {
    /// Number of buckets in `[start, end)` at this granularity.
    pub fn bucket_count(&self) -> usize {
        let step = self.granularity.step().num_seconds();
        ((self.end - self.start).num_seconds() / step) as usize
    }

    /// Whether an instant falls inside the half-open range.
    pub fn contains(&self, t: DateTime<Utc>) -> bool {
        t >= self.start && t < self.end
    }
}

/// Parse a window name and resolve it against `now`.
pub fn select_window(name: &str, now: DateTime<Utc>) -> Result<WindowSelection> {
    Ok(name.parse::<Window>()?.select(now))
}
