//! Year-month values and zoned date-time composition.

use crate::domain::error::LoaderError;
use crate::domain::fields::get_value;
use crate::domain::parsers::{parse_date, parse_time, parse_zone};
use crate::ports::row_port::RowPort;
use chrono::{DateTime, Datelike, LocalResult, NaiveDate, TimeDelta, TimeZone};
use chrono_tz::Tz;
use std::fmt;

/// A month of a year, such as an ETD expiry month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct YearMonth {
    year: i32,
    month: u32,
}

impl YearMonth {
    pub fn of(year: i32, month: u32) -> Option<Self> {
        if (1..=12).contains(&month) && NaiveDate::from_ymd_opt(year, month, 1).is_some() {
            Some(Self { year, month })
        } else {
            None
        }
    }

    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            year: date.year(),
            month: date.month(),
        }
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn at_day(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

/// Combines three required columns into a zoned date-time.
///
/// An ambiguous local time takes the earlier offset. A local time skipped by a
/// daylight-saving gap is moved forward by one hour.
pub fn parse_zoned_date_time(
    row: &dyn RowPort,
    date_column: &str,
    time_column: &str,
    zone_column: &str,
) -> Result<DateTime<Tz>, LoaderError> {
    let date = get_value(row, date_column, parse_date)?;
    let time = get_value(row, time_column, parse_time)?;
    let zone = get_value(row, zone_column, parse_zone)?;
    let local = date.and_time(time);

    let resolved = match zone.from_local_datetime(&local) {
        LocalResult::Single(dt) => Some(dt),
        LocalResult::Ambiguous(earlier, _) => Some(earlier),
        LocalResult::None => zone
            .from_local_datetime(&(local + TimeDelta::hours(1)))
            .earliest(),
    };
    resolved.ok_or_else(|| {
        LoaderError::invalid(
            &[date_column, time_column, zone_column],
            format!("local date-time {local} does not exist in zone {zone}"),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::map_row::MapRow;
    use chrono::{NaiveTime, Offset};

    #[test]
    fn year_month_validates_month() {
        assert!(YearMonth::of(2024, 0).is_none());
        assert!(YearMonth::of(2024, 13).is_none());
        let ym = YearMonth::of(2024, 2).unwrap();
        assert_eq!(ym.to_string(), "2024-02");
        assert_eq!(ym.at_day(29), NaiveDate::from_ymd_opt(2024, 2, 29));
        assert_eq!(ym.at_day(30), None);
    }

    #[test]
    fn zoned_date_time_from_three_columns() {
        let row = MapRow::new()
            .with("Expiry Date", "2024-06-21")
            .with("Expiry Time", "16:30")
            .with("Expiry Zone", "Europe/London");
        let dt = parse_zoned_date_time(&row, "Expiry Date", "Expiry Time", "Expiry Zone").unwrap();
        assert_eq!(dt.timezone(), Tz::Europe__London);
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(16, 30, 0).unwrap());
        assert_eq!(dt.offset().fix().local_minus_utc(), 3600);
    }

    #[test]
    fn zoned_date_time_in_gap_moves_forward() {
        let row = MapRow::new()
            .with("Date", "2024-03-31")
            .with("Time", "01:30")
            .with("Zone", "Europe/London");
        let dt = parse_zoned_date_time(&row, "Date", "Time", "Zone").unwrap();
        assert_eq!(dt.time(), NaiveTime::from_hms_opt(2, 30, 0).unwrap());
    }

    #[test]
    fn zoned_date_time_ambiguous_takes_earlier_offset() {
        let row = MapRow::new()
            .with("Date", "2024-10-27")
            .with("Time", "01:30")
            .with("Zone", "Europe/London");
        let dt = parse_zoned_date_time(&row, "Date", "Time", "Zone").unwrap();
        assert_eq!(dt.offset().fix().local_minus_utc(), 3600);
    }

    #[test]
    fn zoned_date_time_requires_every_column() {
        let row = MapRow::new().with("Date", "2024-03-31").with("Time", "01:30");
        let err = parse_zoned_date_time(&row, "Date", "Time", "Zone").unwrap_err();
        assert_eq!(err, LoaderError::missing("Zone"));
    }
}
