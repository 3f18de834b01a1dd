//! Calendar-date helpers for the chart.
//!
//! Dates are plain calendar days with no timezone. [`AbsoluteTime`] is the
//! millisecond count of a day's midnight computed directly from the calendar
//! fields, so the host's UTC offset can never move a date to a neighbouring day.

use chrono::{Datelike, NaiveDate, NaiveTime};
use thiserror::Error;

pub const MILLIS_PER_DAY: i64 = 86_400_000;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DateError {
    #[error("'{0}' is not a YYYY-MM-DD date")]
    Malformed(String),
}

/// Milliseconds since 1970-01-01 at the midnight of a calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AbsoluteTime(pub i64);

impl AbsoluteTime {
    pub fn from_date(date: NaiveDate) -> Self {
        Self(date.and_time(NaiveTime::MIN).and_utc().timestamp_millis())
    }

    /// The calendar day this instant falls on.
    pub fn to_date(self) -> NaiveDate {
        let days = self.0.div_euclid(MILLIS_PER_DAY);
        NaiveDate::default() + chrono::Duration::days(days)
    }

    pub fn millis(self) -> i64 {
        self.0
    }
}

impl From<NaiveDate> for AbsoluteTime {
    fn from(date: NaiveDate) -> Self {
        Self::from_date(date)
    }
}

/// Parse a `YYYY-MM-DD` string as a calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate, DateError> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d").map_err(|_| DateError::Malformed(s.to_string()))
}

/// Parse a `YYYY-MM-DD` string straight to its ordering value.
pub fn parse_local_date(s: &str) -> Result<AbsoluteTime, DateError> {
    parse_date(s).map(AbsoluteTime::from_date)
}

/// "Jan 15"
pub fn format_short(date: NaiveDate) -> String {
    date.format("%b %-d").to_string()
}

/// "January 15, 2026"
pub fn format_long(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

/// "01/15/2026"
pub fn format_mdy(date: NaiveDate) -> String {
    date.format("%m/%d/%Y").to_string()
}

/// The current local calendar day.
pub fn today() -> NaiveDate {
    day_of(&chrono::Local::now())
}

/// The calendar day an instant falls on in its own timezone.
pub fn day_of<Tz: chrono::TimeZone>(now: &chrono::DateTime<Tz>) -> NaiveDate {
    now.date_naive()
}

/// The current local calendar day as `YYYY-MM-DD`.
pub fn today_string() -> String {
    today().format("%Y-%m-%d").to_string()
}

/// First days of January, April, July and October inside `[min, max]`, ascending.
pub fn quarter_boundaries(min: AbsoluteTime, max: AbsoluteTime) -> Vec<AbsoluteTime> {
    if min > max {
        return Vec::new();
    }
    let first_year = min.to_date().year();
    let last_year = max.to_date().year();
    (first_year..=last_year)
        .flat_map(|year| {
            [1, 4, 7, 10]
                .into_iter()
                .filter_map(move |month| NaiveDate::from_ymd_opt(year, month, 1))
        })
        .map(AbsoluteTime::from_date)
        .filter(|time| *time >= min && *time <= max)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn parse_is_stable_and_ordered() {
        let a = parse_local_date("2026-01-01").unwrap();
        assert_eq!(a, parse_local_date("2026-01-01").unwrap());
        assert!(a < parse_local_date("2026-01-02").unwrap());
        assert_eq!(
            parse_local_date("2026-01-02").unwrap().millis() - a.millis(),
            MILLIS_PER_DAY
        );
        assert!(parse_local_date("01/02/2026").is_err());
        assert!(parse_local_date("2026-02-30").is_err());
    }

    #[test]
    fn new_year_does_not_slip_to_previous_day() {
        // The formatter only ever sees calendar fields, so no offset can shift the day.
        let time = parse_local_date("2026-01-01").unwrap();
        assert_eq!(time.to_date(), date(2026, 1, 1));
        assert_eq!(format_short(time.to_date()), "Jan 1");
        assert_eq!(format_long(time.to_date()), "January 1, 2026");
    }

    #[test]
    fn pacific_time_keeps_its_calendar_day() {
        use chrono::{FixedOffset, TimeZone};

        // UTC-8: local midnight on New Year's Day is already 08:00 UTC.
        let pacific = FixedOffset::west_opt(8 * 3600).unwrap();
        let new_year = pacific.with_ymd_and_hms(2026, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(day_of(&new_year), date(2026, 1, 1));
        assert_eq!(AbsoluteTime::from_date(day_of(&new_year)), parse_local_date("2026-01-01").unwrap());
        assert_eq!(format_long(day_of(&new_year)), "January 1, 2026");

        // Late on New Year's Eve locally is already January 1st in UTC.
        let eve = pacific.with_ymd_and_hms(2025, 12, 31, 23, 30, 0).unwrap();
        assert_eq!(day_of(&eve), date(2025, 12, 31));
        assert_eq!(format_short(day_of(&eve)), "Dec 31");
    }

    #[test]
    fn formats() {
        let d = date(2026, 1, 15);
        assert_eq!(format_short(d), "Jan 15");
        assert_eq!(format_long(d), "January 15, 2026");
        assert_eq!(format_mdy(d), "01/15/2026");
    }

    #[test]
    fn to_date_handles_pre_epoch_days() {
        let d = date(1969, 12, 31);
        assert_eq!(AbsoluteTime::from_date(d).to_date(), d);
    }

    #[test]
    fn today_string_is_iso() {
        let s = today_string();
        assert_eq!(parse_date(&s).unwrap(), today());
    }

    #[test]
    fn quarter_boundaries_are_inclusive_and_ascending() {
        let min = AbsoluteTime::from_date(date(2026, 1, 1));
        let max = AbsoluteTime::from_date(date(2026, 4, 1));
        let found: Vec<_> = quarter_boundaries(min, max).into_iter().map(|t| t.to_date()).collect();
        assert_eq!(found, [date(2026, 1, 1), date(2026, 4, 1)]);

        let min = AbsoluteTime::from_date(date(2025, 11, 20));
        let max = AbsoluteTime::from_date(date(2027, 2, 1));
        let found: Vec<_> = quarter_boundaries(min, max).into_iter().map(|t| t.to_date()).collect();
        assert_eq!(
            found,
            [
                date(2026, 1, 1),
                date(2026, 4, 1),
                date(2026, 7, 1),
                date(2026, 10, 1),
                date(2027, 1, 1),
            ]
        );
        for d in found {
            assert_eq!(d.day(), 1);
            assert!(matches!(d.month(), 1 | 4 | 7 | 10));
        }
    }

    #[test]
    fn quarter_boundaries_empty_inside_a_quarter() {
        let min = AbsoluteTime::from_date(date(2026, 2, 2));
        let max = AbsoluteTime::from_date(date(2026, 3, 30));
        assert!(quarter_boundaries(min, max).is_empty());
        assert!(quarter_boundaries(max, min).is_empty());
    }
}
