//! Period-over-period growth for the dashboard cards.
//!
//! Compares views in the calendar period containing "now" against the
//! period immediately before it, using ISO-8601 weeks (Monday start,
//! week 1 holds the year's first Thursday) or calendar months.

use crate::calendar;
use crate::error::{Error, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::str::FromStr;

/// Calendar granularity for the comparison.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GrowthPeriod {
    /// This ISO week vs the previous ISO week
    Week,
    /// This calendar month vs the previous calendar month
    Month,
}

impl FromStr for GrowthPeriod {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "week" => Ok(GrowthPeriod::Week),
            "month" => Ok(GrowthPeriod::Month),
            other => Err(Error::UnknownGranularity(other.to_string())),
        }
    }
}

/// Period-over-period view totals for a dashboard card.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthReport {
    /// Views in the period containing "now"
    pub current_total: u64,
    /// Views in the immediately preceding period
    pub prior_total: u64,
    /// Signed percentage change, rounded to one decimal place
    pub percent_delta: f64,
}

/// Compare views in the period containing `now` against the one before it.
///
/// Prior-week lookup steps back seven days rather than subtracting one
/// from the week number, so week 1 correctly compares against week 52/53
/// of the previous ISO year. An empty event list yields all zeroes.
pub fn growth(events: &[DateTime<Utc>], now: DateTime<Utc>, period: GrowthPeriod) -> GrowthReport {
    let (current_index, prior_index) = match period {
        GrowthPeriod::Week => (
            calendar::iso_week_index(now),
            calendar::previous_iso_week(now),
        ),
        GrowthPeriod::Month => {
            let current = calendar::month_index(now);
            (current, calendar::previous_month(current))
        }
    };

    let mut current_total = 0u64;
    let mut prior_total = 0u64;
    for &event in events {
        let index = match period {
            GrowthPeriod::Week => calendar::iso_week_index(event),
            GrowthPeriod::Month => calendar::month_index(event),
        };
        if index == current_index {
            current_total += 1;
        } else if index == prior_index {
            prior_total += 1;
        }
    }

    GrowthReport {
        current_total,
        prior_total,
        percent_delta: percent_delta(current_total, prior_total),
    }
}

/// Signed percentage change between two period totals.
///
/// A zero-to-positive transition reads as +100%, zero-to-zero as flat;
/// otherwise the exact ratio, rounded to one decimal place.
pub fn percent_delta(current: u64, prior: u64) -> f64 {
    if prior == 0 {
        if current == 0 {
            0.0
        } else {
            100.0
        }
    } else {
        let raw = (current as f64 - prior as f64) / prior as f64 * 100.0;
        (raw * 10.0).round() / 10.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_parse_growth_period() {
        assert_eq!("week".parse::<GrowthPeriod>().unwrap(), GrowthPeriod::Week);
        assert_eq!(
            "month".parse::<GrowthPeriod>().unwrap(),
            GrowthPeriod::Month
        );
        assert!(matches!(
            "quarter".parse::<GrowthPeriod>(),
            Err(Error::UnknownGranularity(_))
        ));
    }

    #[test]
    fn test_percent_delta() {
        assert_eq!(percent_delta(123, 100), 23.0);
        assert_eq!(percent_delta(80, 100), -20.0);
        assert_eq!(percent_delta(100, 0), 100.0);
        assert_eq!(percent_delta(0, 0), 0.0);
        // Rounded to one decimal place.
        assert_eq!(percent_delta(1, 3), -66.7);
        assert_eq!(percent_delta(2, 3), -33.3);
    }

    #[test]
    fn test_empty_events_yield_zero_report() {
        let report = growth(&[], utc("2024-03-12T00:00:00Z"), GrowthPeriod::Month);
        assert_eq!(report.current_total, 0);
        assert_eq!(report.prior_total, 0);
        assert_eq!(report.percent_delta, 0.0);
    }

    #[test]
    fn test_all_current_month_reads_as_full_growth() {
        let events = vec![utc("2024-03-01T10:00:00Z"), utc("2024-03-11T10:00:00Z")];
        let report = growth(&events, utc("2024-03-12T00:00:00Z"), GrowthPeriod::Month);
        assert_eq!(report.current_total, 2);
        assert_eq!(report.prior_total, 0);
        assert_eq!(report.percent_delta, 100.0);
    }

    #[test]
    fn test_month_over_month_decline() {
        let events = vec![
            utc("2024-02-05T10:00:00Z"),
            utc("2024-02-20T10:00:00Z"),
            utc("2024-02-29T23:00:00Z"),
            utc("2024-03-10T10:00:00Z"),
        ];
        let report = growth(&events, utc("2024-03-12T00:00:00Z"), GrowthPeriod::Month);
        assert_eq!(report.current_total, 1);
        assert_eq!(report.prior_total, 3);
        assert_eq!(report.percent_delta, -66.7);
    }

    #[test]
    fn test_january_compares_against_prior_december() {
        let events = vec![utc("2023-12-15T10:00:00Z"), utc("2024-01-10T10:00:00Z")];
        let report = growth(&events, utc("2024-01-20T00:00:00Z"), GrowthPeriod::Month);
        assert_eq!(report.current_total, 1);
        assert_eq!(report.prior_total, 1);
        assert_eq!(report.percent_delta, 0.0);
    }

    #[test]
    fn test_week_over_week() {
        // now = 2024-03-12 is in ISO week 11 (Mar 11-17); week 10 is Mar 4-10.
        let events = vec![
            utc("2024-03-04T08:00:00Z"),
            utc("2024-03-10T23:59:59Z"),
            utc("2024-03-11T00:00:00Z"),
            utc("2024-03-12T06:00:00Z"),
            utc("2024-03-03T12:00:00Z"), // week 9, counted in neither
        ];
        let report = growth(&events, utc("2024-03-12T12:00:00Z"), GrowthPeriod::Week);
        assert_eq!(report.current_total, 2);
        assert_eq!(report.prior_total, 2);
        assert_eq!(report.percent_delta, 0.0);
    }

    #[test]
    fn test_week_one_compares_against_last_week_of_prior_year() {
        // 2024-01-01 (Monday) opens ISO week 1 of 2024; 2023-12-31 closes
        // week 52 of 2023. The two sit in adjacent period indices.
        let events = vec![utc("2023-12-31T12:00:00Z"), utc("2024-01-01T12:00:00Z")];
        let report = growth(&events, utc("2024-01-03T00:00:00Z"), GrowthPeriod::Week);
        assert_eq!(report.current_total, 1);
        assert_eq!(report.prior_total, 1);
        assert_eq!(report.percent_delta, 0.0);
    }
}
