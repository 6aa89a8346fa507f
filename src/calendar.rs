//! Calendar arithmetic shared by the window selector, the aggregator,
//! and the growth calculator.
//!
//! All truncation and period math is done in UTC so results never depend
//! on the host machine's timezone configuration.

use chrono::{DateTime, Datelike, Duration, NaiveTime, Timelike, Utc};

/// Truncate an instant down to the start of its UTC hour.
pub fn floor_to_hour(t: DateTime<Utc>) -> DateTime<Utc> {
    t.date_naive()
        .and_hms_opt(t.hour(), 0, 0)
        .unwrap()
        .and_utc()
}

/// Truncate an instant down to midnight of its UTC day.
pub fn floor_to_day(t: DateTime<Utc>) -> DateTime<Utc> {
    t.date_naive().and_time(NaiveTime::MIN).and_utc()
}

/// Round an instant up to the next UTC hour boundary.
///
/// Instants already on a boundary are returned unchanged.
pub fn ceil_to_hour(t: DateTime<Utc>) -> DateTime<Utc> {
    let floored = floor_to_hour(t);
    if floored == t {
        floored
    } else {
        floored + Duration::hours(1)
    }
}

/// Round an instant up to the next UTC midnight.
///
/// Instants already at midnight are returned unchanged.
pub fn ceil_to_day(t: DateTime<Utc>) -> DateTime<Utc> {
    let floored = floor_to_day(t);
    if floored == t {
        floored
    } else {
        floored + Duration::days(1)
    }
}

/// Calendar-month period index: (year, month).
pub fn month_index(t: DateTime<Utc>) -> (i32, u32) {
    (t.year(), t.month())
}

/// The month immediately before the given index, crossing year boundaries.
pub fn previous_month((year, month): (i32, u32)) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

/// ISO-8601 week period index: (ISO year, week number).
///
/// Weeks run Monday through Sunday; week 1 is the week containing the
/// year's first Thursday. Note the ISO year of the first and last days of
/// a calendar year can differ from the calendar year.
pub fn iso_week_index(t: DateTime<Utc>) -> (i32, u32) {
    let week = t.iso_week();
    (week.year(), week.week())
}

/// The ISO week immediately before the week containing `t`.
///
/// Stepping back seven days keeps the index well-defined across year
/// boundaries: week 1 is preceded by week 52 or 53 of the prior ISO year,
/// never by a "week 0".
pub fn previous_iso_week(t: DateTime<Utc>) -> (i32, u32) {
    iso_week_index(t - Duration::days(7))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn utc(s: &str) -> DateTime<Utc> {
        s.parse().unwrap()
    }

    #[test]
    fn test_floor_to_hour() {
        assert_eq!(
            floor_to_hour(utc("2024-03-10T05:37:12Z")),
            utc("2024-03-10T05:00:00Z")
        );
        assert_eq!(
            floor_to_hour(utc("2024-03-10T05:00:00Z")),
            utc("2024-03-10T05:00:00Z")
        );
    }

    #[test]
    fn test_floor_to_day() {
        assert_eq!(
            floor_to_day(utc("2024-03-10T23:59:59Z")),
            utc("2024-03-10T00:00:00Z")
        );
    }

    #[test]
    fn test_ceil_respects_alignment() {
        // Aligned instants pass through unchanged.
        assert_eq!(
            ceil_to_hour(utc("2024-03-10T05:00:00Z")),
            utc("2024-03-10T05:00:00Z")
        );
        assert_eq!(
            ceil_to_day(utc("2024-03-12T00:00:00Z")),
            utc("2024-03-12T00:00:00Z")
        );
        // Unaligned instants round up.
        assert_eq!(
            ceil_to_hour(utc("2024-03-10T05:00:01Z")),
            utc("2024-03-10T06:00:00Z")
        );
        assert_eq!(
            ceil_to_day(utc("2024-03-12T10:30:00Z")),
            utc("2024-03-13T00:00:00Z")
        );
    }

    #[test]
    fn test_month_index() {
        assert_eq!(month_index(utc("2024-03-10T05:00:00Z")), (2024, 3));
        assert_eq!(previous_month((2024, 3)), (2024, 2));
        assert_eq!(previous_month((2024, 1)), (2023, 12));
    }

    #[test]
    fn test_iso_week_index_at_year_boundary() {
        // 2024-01-01 is the Monday of ISO week 1 of 2024; the Sunday
        // before it belongs to week 52 of 2023.
        assert_eq!(iso_week_index(utc("2024-01-01T00:00:00Z")), (2024, 1));
        assert_eq!(iso_week_index(utc("2023-12-31T23:59:59Z")), (2023, 52));
    }

    #[test]
    fn test_previous_iso_week_crosses_years() {
        // 2024-12-30 is a Monday and already belongs to 2025 week 1.
        assert_eq!(iso_week_index(utc("2024-12-30T12:00:00Z")), (2025, 1));
        assert_eq!(previous_iso_week(utc("2024-12-30T12:00:00Z")), (2024, 52));
        // Mid-year, the previous week is just week minus one.
        assert_eq!(previous_iso_week(utc("2024-03-12T00:00:00Z")), (2024, 10));
    }
}
