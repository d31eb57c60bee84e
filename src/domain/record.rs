//! Resolution of every recognised value group of one row.
//!
//! A group is resolved only when the row shows it: a quantity when the source
//! has a quantity column, an expiry when `Expiry` has text, a barrier when any
//! barrier column has text, a settlement date when `Settlement Date` has text.
//! The premium is always attempted and is `None` when incomplete.

use crate::domain::adjustment::{
    AdjustableDate, parse_adjustable_date, parse_adjustable_date_defaulted,
};
use crate::domain::barrier::{Barrier, parse_barrier_from_default_fields};
use crate::domain::columns::{
    BARRIER_LEVEL, BARRIER_TYPE, CURRENCY, EXPIRY, KNOCK_TYPE, LONG_QUANTITY, QUANTITY,
    SETTLEMENT_DATE, SETTLEMENT_DATE_CALENDAR, SETTLEMENT_DATE_CONVENTION, SHORT_QUANTITY,
};
use crate::domain::datetime::YearMonth;
use crate::domain::error::LoaderError;
use crate::domain::etd::{EtdType, EtdVariant, parse_etd_variant, parse_option_version};
use crate::domain::fields::{find_raw, find_value};
use crate::domain::format::formatted_double;
use crate::domain::parsers::parse_currency;
use crate::domain::payment::{AdjustablePayment, try_parse_premium_from_default_fields};
use crate::domain::quantity::{QuantityPair, parse_quantity};
use crate::domain::settings::LoaderSettings;
use crate::ports::calendar_port::CalendarPort;
use crate::ports::row_port::RowPort;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedRecord {
    pub line: Option<u64>,
    pub quantity: Option<QuantityPair>,
    pub expiry: Option<(YearMonth, EtdVariant)>,
    pub option_version: Option<i32>,
    pub settlement_date: Option<AdjustableDate>,
    pub premium: Option<AdjustablePayment>,
    pub barrier: Option<Barrier>,
}

pub fn resolve_record(
    row: &dyn RowPort,
    settings: &LoaderSettings,
    calendars: &dyn CalendarPort,
) -> Result<ResolvedRecord, LoaderError> {
    let quantity = if [QUANTITY, LONG_QUANTITY, SHORT_QUANTITY]
        .iter()
        .any(|c| row.has_column(c))
    {
        Some(parse_quantity(row)?)
    } else {
        None
    };

    let expiry = match find_raw(row, EXPIRY) {
        Some(_) => Some(parse_etd_variant(row, settings.etd_type)?),
        None => None,
    };
    let option_version = match (&expiry, settings.etd_type) {
        (Some(_), EtdType::Option) => Some(parse_option_version(row)?),
        _ => None,
    };

    let settlement_date = resolve_settlement_date(row, settings, calendars)?;
    let premium = try_parse_premium_from_default_fields(row)?;

    let barrier = if [BARRIER_TYPE, KNOCK_TYPE, BARRIER_LEVEL]
        .iter()
        .any(|c| find_raw(row, c).is_some())
    {
        Some(parse_barrier_from_default_fields(row)?)
    } else {
        None
    };

    let record = ResolvedRecord {
        line: row.line_number(),
        quantity,
        expiry,
        option_version,
        settlement_date,
        premium,
        barrier,
    };
    tracing::trace!(line = ?record.line, "resolved record");
    Ok(record)
}

/// With a `Currency` the adjustment defaults from the settings, without one
/// the date may stay unadjusted.
fn resolve_settlement_date(
    row: &dyn RowPort,
    settings: &LoaderSettings,
    calendars: &dyn CalendarPort,
) -> Result<Option<AdjustableDate>, LoaderError> {
    if find_raw(row, SETTLEMENT_DATE).is_none() {
        return Ok(None);
    }
    let date = match find_value(row, CURRENCY, parse_currency)? {
        Some(currency) => parse_adjustable_date_defaulted(
            row,
            SETTLEMENT_DATE,
            SETTLEMENT_DATE_CONVENTION,
            SETTLEMENT_DATE_CALENDAR,
            settings.default_date_convention,
            &currency,
            calendars,
        )?,
        None => parse_adjustable_date(
            row,
            SETTLEMENT_DATE,
            SETTLEMENT_DATE_CONVENTION,
            SETTLEMENT_DATE_CALENDAR,
        )?,
    };
    Ok(Some(date))
}

impl fmt::Display for ResolvedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts = Vec::new();
        if let Some(q) = &self.quantity {
            parts.push(format!(
                "quantity long={} short={}",
                formatted_double(q.long),
                formatted_double(q.short)
            ));
        }
        if let Some((ym, variant)) = &self.expiry {
            parts.push(format!("expiry {ym} {:?}", variant.expiry_type()));
        }
        if let Some(version) = self.option_version {
            parts.push(format!("version {version}"));
        }
        if let Some(date) = &self.settlement_date {
            parts.push(format!("settlement {}", date.date));
        }
        if let Some(premium) = &self.premium {
            parts.push(format!("premium {} on {}", premium.value, premium.date.date));
        }
        if let Some(barrier) = &self.barrier {
            parts.push(format!(
                "barrier {:?} {:?} {}",
                barrier.barrier_type,
                barrier.knock_type,
                formatted_double(barrier.level)
            ));
        }
        if parts.is_empty() {
            f.write_str("no recognised columns")
        } else {
            f.write_str(&parts.join("; "))
        }
    }
}
