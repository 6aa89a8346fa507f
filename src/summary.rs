//! Aggregate reading patterns for the dashboard header.
//!
//! Answers "when do my readers read?" with hour-of-day and weekday
//! distributions over the whole supplied event list.

use chrono::{DateTime, Datelike, Timelike, Utc};
use serde::Serialize;

/// Totals and activity distributions across all supplied views.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewSummary {
    /// Total number of views
    pub total: u64,
    /// Views per UTC hour of day (0-23)
    pub hourly: [u64; 24],
    /// Views per weekday (0 = Sunday, ..., 6 = Saturday)
    pub weekday: [u64; 7],
}

impl ViewSummary {
    /// Hour of day (0-23) with the most views.
    pub fn peak_hour(&self) -> usize {
        self.hourly
            .iter()
            .enumerate()
            .max_by_key(|(_, &count)| count)
            .map(|(hour, _)| hour)
            .unwrap_or(0)
    }

    /// Weekday (0 = Sunday) with the most views.
    pub fn busiest_weekday(&self) -> usize {
        self.weekday
            .iter()
            .enumerate()
            .max_by_key(|(_, &count)| count)
            .map(|(day, _)| day)
            .unwrap_or(0)
    }

    /// Weekday name from index.
    pub fn weekday_name(day: usize) -> &'static str {
        match day {
            0 => "Sunday",
            1 => "Monday",
            2 => "Tuesday",
            3 => "Wednesday",
            4 => "Thursday",
            5 => "Friday",
            6 => "Saturday",
            _ => "Unknown",
        }
    }

    /// Format an hour range for display (e.g., "2pm-3pm").
    pub fn hour_display(hour: usize) -> String {
        let twelve = |h: usize| {
            let h = h % 12;
            if h == 0 {
                12
            } else {
                h
            }
        };
        let period = |h: usize| if h % 24 < 12 { "am" } else { "pm" };
        format!(
            "{}{}-{}{}",
            twelve(hour),
            period(hour),
            twelve(hour + 1),
            period(hour + 1)
        )
    }

    /// Format the peak hour for display.
    pub fn peak_hour_display(&self) -> String {
        Self::hour_display(self.peak_hour())
    }
}

/// Tally hour-of-day and weekday distributions over all views.
pub fn summarize(events: &[DateTime<Utc>]) -> ViewSummary {
    let mut summary = ViewSummary {
        total: 0,
        hourly: [0; 24],
        weekday: [0; 7],
    };
    for event in events {
        summary.total += 1;
        summary.hourly[event.hour() as usize] += 1;
        summary.weekday[event.weekday().num_days_from_sunday() as usize] += 1;
    }
    summary
}
