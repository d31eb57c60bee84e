//! Directional payments: currency, signed amount and adjustable date.
//!
//! The `parse_*` functions fail when a column is missing. The `try_parse_*`
//! functions give `None` instead, but still fail on text that does not parse.

use crate::domain::adjustment::{
    AdjustableDate, has_adjustment_columns, parse_adjustable_date, try_parse_adjustable_date,
};
use crate::domain::columns::{
    PREMIUM_AMOUNT, PREMIUM_CURRENCY, PREMIUM_DATE, PREMIUM_DATE_CALENDAR,
    PREMIUM_DATE_CONVENTION, PREMIUM_DIRECTION,
};
use crate::domain::currency::CurrencyAmount;
use crate::domain::error::LoaderError;
use crate::domain::fields::{find_value, get_value};
use crate::domain::parsers::{parse_currency, parse_date, parse_double, parse_pay_receive};
use crate::ports::row_port::RowPort;

#[derive(Debug, Clone, PartialEq)]
pub struct AdjustablePayment {
    pub value: CurrencyAmount,
    pub date: AdjustableDate,
}

impl AdjustablePayment {
    pub fn of(value: CurrencyAmount, date: AdjustableDate) -> Self {
        Self { value, date }
    }
}

/// Column names making up one payment.
#[derive(Debug, Clone, Copy)]
pub struct PaymentColumns<'a> {
    pub currency: &'a str,
    pub amount: &'a str,
    pub direction: &'a str,
    pub date: &'a str,
    pub convention: &'a str,
    pub calendar: &'a str,
}

impl PaymentColumns<'static> {
    pub const PREMIUM: PaymentColumns<'static> = PaymentColumns {
        currency: PREMIUM_CURRENCY,
        amount: PREMIUM_AMOUNT,
        direction: PREMIUM_DIRECTION,
        date: PREMIUM_DATE,
        convention: PREMIUM_DATE_CONVENTION,
        calendar: PREMIUM_DATE_CALENDAR,
    };
}

pub fn parse_currency_amount(
    row: &dyn RowPort,
    currency_column: &str,
    amount_column: &str,
) -> Result<CurrencyAmount, LoaderError> {
    let currency = get_value(row, currency_column, parse_currency)?;
    let amount = get_value(row, amount_column, parse_double)?;
    Ok(CurrencyAmount::of(currency, amount))
}

pub fn parse_currency_amount_with_direction(
    row: &dyn RowPort,
    currency_column: &str,
    amount_column: &str,
    direction_column: &str,
) -> Result<CurrencyAmount, LoaderError> {
    let currency = get_value(row, currency_column, parse_currency)?;
    let amount = get_value(row, amount_column, parse_double)?;
    let direction = get_value(row, direction_column, parse_pay_receive)?;
    Ok(CurrencyAmount::of(currency, direction.normalize(amount)))
}

pub fn parse_adjustable_payment(
    row: &dyn RowPort,
    columns: &PaymentColumns<'_>,
) -> Result<AdjustablePayment, LoaderError> {
    let value = parse_currency_amount_with_direction(
        row,
        columns.currency,
        columns.amount,
        columns.direction,
    )?;
    let date = parse_adjustable_date(row, columns.date, columns.convention, columns.calendar)?;
    Ok(AdjustablePayment::of(value, date))
}

pub fn parse_premium_from_default_fields(
    row: &dyn RowPort,
) -> Result<AdjustablePayment, LoaderError> {
    parse_adjustable_payment(row, &PaymentColumns::PREMIUM)
}

pub fn try_parse_currency_amount_with_direction(
    row: &dyn RowPort,
    currency_column: &str,
    amount_column: &str,
    direction_column: &str,
) -> Result<Option<CurrencyAmount>, LoaderError> {
    let currency = find_value(row, currency_column, parse_currency)?;
    let amount = find_value(row, amount_column, parse_double)?;
    let direction = find_value(row, direction_column, parse_pay_receive)?;

    Ok(match (currency, amount, direction) {
        (Some(currency), Some(amount), Some(direction)) => {
            Some(CurrencyAmount::of(currency, direction.normalize(amount)))
        }
        _ => None,
    })
}

/// Payment whose date carries no business day adjustment.
pub fn try_parse_adjustable_payment_unadjusted(
    row: &dyn RowPort,
    currency_column: &str,
    amount_column: &str,
    direction_column: &str,
    date_column: &str,
) -> Result<Option<AdjustablePayment>, LoaderError> {
    let value =
        try_parse_currency_amount_with_direction(row, currency_column, amount_column, direction_column)?;
    let date = find_value(row, date_column, parse_date)?;

    Ok(match (value, date) {
        (Some(value), Some(date)) => Some(AdjustablePayment::of(value, AdjustableDate::unadjusted(date))),
        _ => None,
    })
}

/// Payment with an adjusted date when possible.
///
/// Adjustment columns are often left out for dates that are never adjusted,
/// so when the adjustable date cannot be built the payment is read again with
/// a plain date from the same column. A row without a date gives `None`.
pub fn try_parse_adjustable_payment(
    row: &dyn RowPort,
    columns: &PaymentColumns<'_>,
) -> Result<Option<AdjustablePayment>, LoaderError> {
    let value = try_parse_currency_amount_with_direction(
        row,
        columns.currency,
        columns.amount,
        columns.direction,
    )?;
    let date = try_parse_adjustable_date(row, columns.date, columns.convention, columns.calendar)?;

    match resolve_full(value, date) {
        FullResolution::Resolved(payment) => Ok(Some(payment)),
        FullResolution::NoAmount => Ok(None),
        FullResolution::NoAdjustableDate => resolve_without_adjustment(row, columns),
    }
}

pub fn try_parse_premium_from_default_fields(
    row: &dyn RowPort,
) -> Result<Option<AdjustablePayment>, LoaderError> {
    try_parse_adjustable_payment(row, &PaymentColumns::PREMIUM)
}

enum FullResolution {
    Resolved(AdjustablePayment),
    NoAmount,
    NoAdjustableDate,
}

fn resolve_full(value: Option<CurrencyAmount>, date: Option<AdjustableDate>) -> FullResolution {
    match (value, date) {
        (Some(value), Some(date)) => FullResolution::Resolved(AdjustablePayment::of(value, date)),
        (_, None) => FullResolution::NoAdjustableDate,
        (None, Some(_)) => FullResolution::NoAmount,
    }
}

fn resolve_without_adjustment(
    row: &dyn RowPort,
    columns: &PaymentColumns<'_>,
) -> Result<Option<AdjustablePayment>, LoaderError> {
    let payment = try_parse_adjustable_payment_unadjusted(
        row,
        columns.currency,
        columns.amount,
        columns.direction,
        columns.date,
    )?;
    if payment.is_some() && has_adjustment_columns(row, columns.convention, columns.calendar) {
        tracing::debug!(
            date = columns.date,
            convention = columns.convention,
            calendar = columns.calendar,
            "incomplete adjustment columns, payment date left unadjusted"
        );
    }
    Ok(payment)
}
