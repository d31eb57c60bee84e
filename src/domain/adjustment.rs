//! Business day adjustments and adjustable dates.
//!
//! An adjustment is read from a convention column and a calendar column:
//!
//! | convention | calendar | result                |
//! |------------|----------|-----------------------|
//! | absent     | any      | `None`                |
//! | NoAdjust   | any      | `Some(NoAdjustment)`  |
//! | other      | present  | `Some(Adjusted)`      |
//! | other      | absent   | `None`                |
//!
//! `None` lets the caller decide: the plain date resolver leaves the date
//! unadjusted, the defaulted resolver builds an adjustment from the currency.

use crate::domain::codes::CodedEnum;
use crate::domain::currency::Currency;
use crate::domain::error::{LoaderError, ValueParseError};
use crate::domain::fields::{find_raw, find_value, get_value};
use crate::domain::parsers::{
    parse_business_day_convention, parse_calendar, parse_date, parse_integer,
};
use crate::ports::calendar_port::CalendarPort;
use crate::ports::row_port::RowPort;
use chrono::NaiveDate;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BusinessDayConvention {
    NoAdjust,
    Following,
    ModifiedFollowing,
    Preceding,
    ModifiedPreceding,
    Nearest,
}

impl CodedEnum for BusinessDayConvention {
    const KIND: &'static str = "BusinessDayConvention";

    fn variants() -> &'static [Self] {
        &[
            BusinessDayConvention::NoAdjust,
            BusinessDayConvention::Following,
            BusinessDayConvention::ModifiedFollowing,
            BusinessDayConvention::Preceding,
            BusinessDayConvention::ModifiedPreceding,
            BusinessDayConvention::Nearest,
        ]
    }

    fn code(self) -> &'static str {
        match self {
            BusinessDayConvention::NoAdjust => "NA",
            BusinessDayConvention::Following => "F",
            BusinessDayConvention::ModifiedFollowing => "MF",
            BusinessDayConvention::Preceding => "P",
            BusinessDayConvention::ModifiedPreceding => "MP",
            BusinessDayConvention::Nearest => "N",
        }
    }

    fn name(self) -> &'static str {
        match self {
            BusinessDayConvention::NoAdjust => "NoAdjust",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "ModifiedFollowing",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "ModifiedPreceding",
            BusinessDayConvention::Nearest => "Nearest",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            BusinessDayConvention::NoAdjust => &["NONE", "NO ADJUST"],
            BusinessDayConvention::ModifiedFollowing => &["MOD FOLLOWING"],
            BusinessDayConvention::ModifiedPreceding => &["MOD PRECEDING"],
            _ => &[],
        }
    }
}

impl fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Identifier of a holiday calendar, e.g. `USNY` or `GBLO+USNY`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HolidayCalendarId(String);

impl HolidayCalendarId {
    pub const NO_HOLIDAYS: &'static str = "NoHolidays";

    pub fn parse(s: &str) -> Result<Self, ValueParseError> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(ValueParseError::new(
                "HolidayCalendarId",
                s,
                "expected a calendar name such as 'USNY'",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn no_holidays() -> Self {
        Self(Self::NO_HOLIDAYS.to_string())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for HolidayCalendarId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum BusinessDayAdjustment {
    NoAdjustment,
    Adjusted {
        convention: BusinessDayConvention,
        calendar: HolidayCalendarId,
    },
}

impl BusinessDayAdjustment {
    /// The `NoAdjust` convention always gives [`BusinessDayAdjustment::NoAdjustment`].
    pub fn of(convention: BusinessDayConvention, calendar: HolidayCalendarId) -> Self {
        if convention == BusinessDayConvention::NoAdjust {
            BusinessDayAdjustment::NoAdjustment
        } else {
            BusinessDayAdjustment::Adjusted {
                convention,
                calendar,
            }
        }
    }

    pub fn convention(&self) -> BusinessDayConvention {
        match self {
            BusinessDayAdjustment::NoAdjustment => BusinessDayConvention::NoAdjust,
            BusinessDayAdjustment::Adjusted { convention, .. } => *convention,
        }
    }

    pub fn calendar(&self) -> Option<&HolidayCalendarId> {
        match self {
            BusinessDayAdjustment::NoAdjustment => None,
            BusinessDayAdjustment::Adjusted { calendar, .. } => Some(calendar),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AdjustableDate {
    pub date: NaiveDate,
    pub adjustment: Option<BusinessDayAdjustment>,
}

impl AdjustableDate {
    pub fn unadjusted(date: NaiveDate) -> Self {
        Self {
            date,
            adjustment: None,
        }
    }

    pub fn of(date: NaiveDate, adjustment: BusinessDayAdjustment) -> Self {
        Self {
            date,
            adjustment: Some(adjustment),
        }
    }
}

/// A shift of a number of days, followed by a business day adjustment.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DaysAdjustment {
    pub days: i32,
    pub calendar: HolidayCalendarId,
    pub adjustment: BusinessDayAdjustment,
}

pub fn parse_business_day_adjustment(
    row: &dyn RowPort,
    convention_column: &str,
    calendar_column: &str,
) -> Result<Option<BusinessDayAdjustment>, LoaderError> {
    let Some(convention) = find_value(row, convention_column, parse_business_day_convention)?
    else {
        return Ok(None);
    };
    if convention == BusinessDayConvention::NoAdjust {
        return Ok(Some(BusinessDayAdjustment::NoAdjustment));
    }
    let calendar = find_value(row, calendar_column, parse_calendar)?;
    Ok(calendar.map(|calendar| BusinessDayAdjustment::Adjusted {
        convention,
        calendar,
    }))
}

/// Reads a required date; the adjustment is left empty if the row does not give one.
pub fn parse_adjustable_date(
    row: &dyn RowPort,
    date_column: &str,
    convention_column: &str,
    calendar_column: &str,
) -> Result<AdjustableDate, LoaderError> {
    let date = get_value(row, date_column, parse_date)?;
    let adjustment = parse_business_day_adjustment(row, convention_column, calendar_column)?;
    Ok(AdjustableDate { date, adjustment })
}

/// Reads a required date; a missing adjustment is replaced by `default_convention`
/// with the default calendar of `currency`.
pub fn parse_adjustable_date_defaulted(
    row: &dyn RowPort,
    date_column: &str,
    convention_column: &str,
    calendar_column: &str,
    default_convention: BusinessDayConvention,
    currency: &Currency,
    calendars: &dyn CalendarPort,
) -> Result<AdjustableDate, LoaderError> {
    let date = get_value(row, date_column, parse_date)?;
    let adjustment = match parse_business_day_adjustment(row, convention_column, calendar_column)? {
        Some(adjustment) => adjustment,
        None => {
            let calendar = calendars.default_by_currency(currency);
            tracing::debug!(
                column = date_column,
                %currency,
                %calendar,
                convention = %default_convention,
                "defaulting business day adjustment"
            );
            BusinessDayAdjustment::of(default_convention, calendar)
        }
    };
    Ok(AdjustableDate::of(date, adjustment))
}

/// Gives a date only when date, convention and calendar are all present.
pub fn try_parse_adjustable_date(
    row: &dyn RowPort,
    date_column: &str,
    convention_column: &str,
    calendar_column: &str,
) -> Result<Option<AdjustableDate>, LoaderError> {
    let date = find_value(row, date_column, parse_date)?;
    let convention = find_value(row, convention_column, parse_business_day_convention)?;
    let calendar = find_value(row, calendar_column, parse_calendar)?;

    Ok(match (date, convention, calendar) {
        (Some(date), Some(convention), Some(calendar)) => Some(AdjustableDate::of(
            date,
            BusinessDayAdjustment::of(convention, calendar),
        )),
        _ => None,
    })
}

pub fn parse_days_adjustment(
    row: &dyn RowPort,
    days_column: &str,
    days_calendar_column: &str,
    convention_column: &str,
    calendar_column: &str,
) -> Result<DaysAdjustment, LoaderError> {
    let days = get_value(row, days_column, parse_integer)?;
    let calendar = find_value(row, days_calendar_column, parse_calendar)?
        .unwrap_or_else(HolidayCalendarId::no_holidays);
    let adjustment = parse_business_day_adjustment(row, convention_column, calendar_column)?
        .unwrap_or(BusinessDayAdjustment::NoAdjustment);
    Ok(DaysAdjustment {
        days,
        calendar,
        adjustment,
    })
}

/// True if the row has any text in either adjustment column.
pub fn has_adjustment_columns(
    row: &dyn RowPort,
    convention_column: &str,
    calendar_column: &str,
) -> bool {
    find_raw(row, convention_column).is_some() || find_raw(row, calendar_column).is_some()
}
