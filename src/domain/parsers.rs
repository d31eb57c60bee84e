//! Parsers turning a single text value into its typed form.
//!
//! All parsers are strict: text that does not match an accepted form is an
//! error, never a silently truncated value. Coded enums go through a
//! [`CodeTable`] built once per enum.

use crate::domain::adjustment::{BusinessDayConvention, HolidayCalendarId};
use crate::domain::barrier::{BarrierType, KnockType};
use crate::domain::codes::CodeTable;
use crate::domain::currency::{Currency, PayReceive};
use crate::domain::datetime::YearMonth;
use crate::domain::error::ValueParseError;
use crate::domain::etd::{EtdOptionType, EtdSettlementType};
use chrono::{NaiveDate, NaiveTime};
use chrono_tz::Tz;
use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;
use std::str::FromStr;
use std::sync::LazyLock;

static SETTLEMENT_TYPES: LazyLock<CodeTable<EtdSettlementType>> = LazyLock::new(CodeTable::build);
static OPTION_TYPES: LazyLock<CodeTable<EtdOptionType>> = LazyLock::new(CodeTable::build);
static BARRIER_TYPES: LazyLock<CodeTable<BarrierType>> = LazyLock::new(CodeTable::build);
static KNOCK_TYPES: LazyLock<CodeTable<KnockType>> = LazyLock::new(CodeTable::build);
static PAY_RECEIVE: LazyLock<CodeTable<PayReceive>> = LazyLock::new(CodeTable::build);
static CONVENTIONS: LazyLock<CodeTable<BusinessDayConvention>> = LazyLock::new(CodeTable::build);

const NUMERIC_DATE_FORMATS: [&str; 4] = ["%Y-%m-%d", "%Y%m%d", "%Y/%m/%d", "%d/%m/%Y"];
const MONTH_NAME_DATE_FORMATS: [&str; 4] = ["%d-%b-%Y", "%-d-%b-%Y", "%d%b%Y", "%-d%b%Y"];
const NUMERIC_YEAR_MONTH_FORMATS: [&str; 3] = ["%Y-%m", "%Y/%m", "%Y%m"];
const MONTH_NAME_YEAR_MONTH_FORMATS: [&str; 4] = ["%b-%Y", "%b%Y", "%b %Y", "%B %Y"];
const TIME_LAYOUTS: [&str; 4] = ["%H:%M:%S", "%H:%M", "%H%M%S", "%H%M"];

const DATE_FORMATS: &str = "expected yyyy-MM-dd, yyyyMMdd, yyyy/MM/dd, dd/MM/yyyy, \
                            d-MMM-yyyy, dMMMyyyy, d-MMM-yy or dMMMyy";
const YEAR_MONTH_FORMATS: &str = "expected yyyy-MM, yyyy/MM, yyyyMM, MMM-yy, MMMyy, MMM-yyyy, \
                                  MMMyyyy, MMM yyyy, MMMM yyyy or a full date";
const TIME_FORMATS: &str = "expected HH:mm, HH:mm:ss, HH:mm:ss.SSS, HHmm or HHmmss";

pub fn parse_etd_settlement_type(s: &str) -> Result<EtdSettlementType, ValueParseError> {
    SETTLEMENT_TYPES.lookup(s)
}

pub fn parse_etd_option_type(s: &str) -> Result<EtdOptionType, ValueParseError> {
    OPTION_TYPES.lookup(s)
}

pub fn parse_barrier_type(s: &str) -> Result<BarrierType, ValueParseError> {
    BARRIER_TYPES.lookup(s)
}

pub fn parse_knock_type(s: &str) -> Result<KnockType, ValueParseError> {
    KNOCK_TYPES.lookup(s)
}

pub fn parse_pay_receive(s: &str) -> Result<PayReceive, ValueParseError> {
    PAY_RECEIVE.lookup(s)
}

pub fn parse_business_day_convention(s: &str) -> Result<BusinessDayConvention, ValueParseError> {
    CONVENTIONS.lookup(s)
}

pub fn parse_currency(s: &str) -> Result<Currency, ValueParseError> {
    Currency::parse(s)
}

pub fn parse_calendar(s: &str) -> Result<HolidayCalendarId, ValueParseError> {
    HolidayCalendarId::parse(s)
}

pub fn parse_integer(s: &str) -> Result<i32, ValueParseError> {
    s.trim()
        .parse::<i32>()
        .map_err(|_| ValueParseError::new("integer", s, "expected a whole number"))
}

pub fn parse_double(s: &str) -> Result<f64, ValueParseError> {
    match s.trim().parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValueParseError::new("double", s, "expected a finite decimal number")),
    }
}

/// Parses a number written as a percentage, `1.5` becoming `0.015`.
pub fn parse_double_percent(s: &str) -> Result<f64, ValueParseError> {
    let trimmed = s.trim();
    let err = || ValueParseError::new("percentage", s, "expected a decimal number");
    let value = Decimal::from_str(trimmed)
        .or_else(|_| Decimal::from_scientific(trimmed))
        .map_err(|_| err())?;
    value
        .checked_div(Decimal::ONE_HUNDRED)
        .and_then(|v| v.to_f64())
        .ok_or_else(err)
}

pub fn parse_date(s: &str) -> Result<NaiveDate, ValueParseError> {
    let text = s.trim();
    let expanded = expand_short_year(text);
    NUMERIC_DATE_FORMATS
        .iter()
        .find_map(|fmt| exact_date(text, fmt))
        .or_else(|| {
            MONTH_NAME_DATE_FORMATS
                .iter()
                .find_map(|fmt| exact_date(&expanded, fmt))
        })
        .ok_or_else(|| ValueParseError::new("date", s, DATE_FORMATS))
}

pub fn parse_year_month(s: &str) -> Result<YearMonth, ValueParseError> {
    let text = s.trim();
    let expanded = expand_short_year(text);
    // chrono needs a day to build a date, so the first of the month is appended.
    let first_of = |text: &str, fmt: &str| exact_date(&format!("{text}-01"), &format!("{fmt}-%d"));
    let parsed = NUMERIC_YEAR_MONTH_FORMATS
        .iter()
        .find_map(|fmt| first_of(text, fmt))
        .or_else(|| {
            MONTH_NAME_YEAR_MONTH_FORMATS
                .iter()
                .find_map(|fmt| first_of(&expanded, fmt))
        });
    match parsed {
        Some(date) => Ok(YearMonth::from_date(date)),
        None => parse_date(s)
            .map(YearMonth::from_date)
            .map_err(|_| ValueParseError::new("year-month", s, YEAR_MONTH_FORMATS)),
    }
}

pub fn parse_time(s: &str) -> Result<NaiveTime, ValueParseError> {
    let text = s.trim();
    let err = || ValueParseError::new("time", s, TIME_FORMATS);
    if let Some((whole, _)) = text.split_once('.') {
        exact_time(whole, "%H:%M:%S").ok_or_else(err)?;
        return NaiveTime::parse_from_str(text, "%H:%M:%S%.f").map_err(|_| err());
    }
    TIME_LAYOUTS
        .iter()
        .find_map(|fmt| exact_time(text, fmt))
        .ok_or_else(err)
}

pub fn parse_zone(s: &str) -> Result<Tz, ValueParseError> {
    let trimmed = s.trim();
    if trimmed.eq_ignore_ascii_case("Z") {
        return Ok(Tz::UTC);
    }
    trimmed
        .parse::<Tz>()
        .map_err(|_| ValueParseError::new("zone", s, "expected an IANA time-zone identifier"))
}

/// Parses `text` with `fmt` only when `fmt` writes the date back as the same
/// text. chrono on its own accepts short fields and stray spaces before
/// numbers; a leading sign would also round-trip, so it is refused up front.
fn exact_date(text: &str, fmt: &str) -> Option<NaiveDate> {
    if !text.starts_with(|c: char| c.is_ascii_alphanumeric()) {
        return None;
    }
    let date = NaiveDate::parse_from_str(text, fmt).ok()?;
    date.format(fmt)
        .to_string()
        .eq_ignore_ascii_case(text)
        .then_some(date)
}

fn exact_time(text: &str, fmt: &str) -> Option<NaiveTime> {
    let time = NaiveTime::parse_from_str(text, fmt).ok()?;
    (time.format(fmt).to_string() == text).then_some(time)
}

/// Rewrites a trailing two-digit year after a month name, `05Mar24` becoming
/// `05Mar2024`. Two-digit years are in 2000-2099.
fn expand_short_year(text: &str) -> String {
    let head = text.trim_end_matches(|c: char| c.is_ascii_digit());
    let year = &text[head.len()..];
    let month = head.strip_suffix('-').unwrap_or(head);
    if year.len() == 2 && month.ends_with(|c: char| c.is_ascii_alphabetic()) {
        format!("{head}20{year}")
    } else {
        text.to_string()
    }
}
