//! Exchange-traded derivative expiry variants.
//!
//! The variant of an ETD is read from up to four optional columns next to the
//! required expiry month. A settlement type marks the contract as Flex; Flex
//! contracts need an expiry day, and Flex options also need an option type.

use crate::domain::codes::CodedEnum;
use crate::domain::columns::{
    EXERCISE_STYLE, EXPIRY, EXPIRY_DAY, EXPIRY_WEEK, SETTLEMENT_TYPE, VERSION,
};
use crate::domain::datetime::YearMonth;
use crate::domain::error::LoaderError;
use crate::domain::fields::{find_value, get_value};
use crate::domain::parsers::{
    parse_etd_option_type, parse_etd_settlement_type, parse_integer, parse_year_month,
};
use crate::ports::row_port::RowPort;
use std::fmt;

/// Version used when an option row does not give one.
pub const DEFAULT_OPTION_VERSION_NUMBER: i32 = 0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EtdType {
    Future,
    Option,
}

impl fmt::Display for EtdType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EtdType::Future => f.write_str("Future"),
            EtdType::Option => f.write_str("Option"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EtdSettlementType {
    Cash,
    Physical,
    Derivative,
    PaymentVsPayment,
    Notional,
    Stock,
    Cascade,
    Alternate,
}

impl CodedEnum for EtdSettlementType {
    const KIND: &'static str = "EtdSettlementType";

    fn variants() -> &'static [Self] {
        &[
            EtdSettlementType::Cash,
            EtdSettlementType::Physical,
            EtdSettlementType::Derivative,
            EtdSettlementType::PaymentVsPayment,
            EtdSettlementType::Notional,
            EtdSettlementType::Stock,
            EtdSettlementType::Cascade,
            EtdSettlementType::Alternate,
        ]
    }

    fn code(self) -> &'static str {
        match self {
            EtdSettlementType::Cash => "C",
            EtdSettlementType::Physical => "E",
            EtdSettlementType::Derivative => "D",
            EtdSettlementType::PaymentVsPayment => "P",
            EtdSettlementType::Notional => "N",
            EtdSettlementType::Stock => "S",
            EtdSettlementType::Cascade => "T",
            EtdSettlementType::Alternate => "A",
        }
    }

    fn name(self) -> &'static str {
        match self {
            EtdSettlementType::Cash => "Cash",
            EtdSettlementType::Physical => "Physical",
            EtdSettlementType::Derivative => "Derivative",
            EtdSettlementType::PaymentVsPayment => "PaymentVsPayment",
            EtdSettlementType::Notional => "Notional",
            EtdSettlementType::Stock => "Stock",
            EtdSettlementType::Cascade => "Cascade",
            EtdSettlementType::Alternate => "Alternate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EtdOptionType {
    American,
    European,
}

impl CodedEnum for EtdOptionType {
    const KIND: &'static str = "EtdOptionType";

    fn variants() -> &'static [Self] {
        &[EtdOptionType::American, EtdOptionType::European]
    }

    fn code(self) -> &'static str {
        match self {
            EtdOptionType::American => "A",
            EtdOptionType::European => "E",
        }
    }

    fn name(self) -> &'static str {
        match self {
            EtdOptionType::American => "American",
            EtdOptionType::European => "European",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EtdExpiryType {
    Monthly,
    Weekly,
    Daily,
    Flex,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EtdVariant {
    Monthly,
    Weekly {
        week: u8,
    },
    Daily {
        day: u8,
    },
    FlexFuture {
        day: u8,
        settlement_type: EtdSettlementType,
    },
    FlexOption {
        day: u8,
        settlement_type: EtdSettlementType,
        option_type: EtdOptionType,
    },
}

impl EtdVariant {
    pub fn expiry_type(&self) -> EtdExpiryType {
        match self {
            EtdVariant::Monthly => EtdExpiryType::Monthly,
            EtdVariant::Weekly { .. } => EtdExpiryType::Weekly,
            EtdVariant::Daily { .. } => EtdExpiryType::Daily,
            EtdVariant::FlexFuture { .. } | EtdVariant::FlexOption { .. } => EtdExpiryType::Flex,
        }
    }

    /// Short code used in identifiers: empty for monthly, `W2`, `05`, `05C`, `05CA`.
    pub fn code(&self) -> String {
        match self {
            EtdVariant::Monthly => String::new(),
            EtdVariant::Weekly { week } => format!("W{week}"),
            EtdVariant::Daily { day } => format!("{day:02}"),
            EtdVariant::FlexFuture {
                day,
                settlement_type,
            } => format!("{day:02}{}", settlement_type.code()),
            EtdVariant::FlexOption {
                day,
                settlement_type,
                option_type,
            } => format!("{day:02}{}{}", settlement_type.code(), option_type.code()),
        }
    }
}

/// Reads the expiry month and the variant of an ETD of kind `etd_type`.
pub fn parse_etd_variant(
    row: &dyn RowPort,
    etd_type: EtdType,
) -> Result<(YearMonth, EtdVariant), LoaderError> {
    let year_month = get_value(row, EXPIRY, parse_year_month)?;
    let week = find_value(row, EXPIRY_WEEK, parse_integer)?.unwrap_or(0);
    let day = find_value(row, EXPIRY_DAY, parse_integer)?.unwrap_or(0);
    let settlement_type = find_value(row, SETTLEMENT_TYPE, parse_etd_settlement_type)?;
    let option_type = find_value(row, EXERCISE_STYLE, parse_etd_option_type)?;

    let variant = match settlement_type {
        None => resolve_standard(week, day)?,
        Some(settlement_type) => resolve_flex(etd_type, week, day, settlement_type, option_type)?,
    };
    tracing::trace!(%year_month, code = %variant.code(), "resolved ETD variant");
    Ok((year_month, variant))
}

fn resolve_standard(week: i32, day: i32) -> Result<EtdVariant, LoaderError> {
    match (day, week) {
        (0, 0) => Ok(EtdVariant::Monthly),
        (0, week) => Ok(EtdVariant::Weekly {
            week: in_range(EXPIRY_WEEK, week, 1, 5)?,
        }),
        (day, 0) => Ok(EtdVariant::Daily {
            day: in_range(EXPIRY_DAY, day, 1, 31)?,
        }),
        _ => Err(LoaderError::conflicting(
            &[EXPIRY_DAY, EXPIRY_WEEK],
            "ETD date columns conflict, cannot set both expiry day and expiry week",
        )),
    }
}

fn resolve_flex(
    etd_type: EtdType,
    week: i32,
    day: i32,
    settlement_type: EtdSettlementType,
    option_type: Option<EtdOptionType>,
) -> Result<EtdVariant, LoaderError> {
    if day == 0 {
        return Err(LoaderError::missing_any(
            &[EXPIRY_DAY],
            format!("ETD date columns conflict, must set expiry day for Flex {etd_type}"),
        ));
    }
    if week != 0 {
        return Err(LoaderError::conflicting(
            &[EXPIRY_WEEK, SETTLEMENT_TYPE],
            format!("ETD date columns conflict, cannot set expiry week for Flex {etd_type}"),
        ));
    }
    let day = in_range(EXPIRY_DAY, day, 1, 31)?;
    match etd_type {
        EtdType::Future => Ok(EtdVariant::FlexFuture {
            day,
            settlement_type,
        }),
        EtdType::Option => {
            let option_type = option_type.ok_or_else(|| {
                LoaderError::missing_any(
                    &[EXERCISE_STYLE],
                    "ETD option type not found for Flex Option",
                )
            })?;
            Ok(EtdVariant::FlexOption {
                day,
                settlement_type,
                option_type,
            })
        }
    }
}

fn in_range(column: &str, value: i32, min: i32, max: i32) -> Result<u8, LoaderError> {
    if (min..=max).contains(&value) {
        Ok(value as u8)
    } else {
        Err(LoaderError::invalid(
            &[column],
            format!("'{column}' must be between {min} and {max}, but was {value}"),
        ))
    }
}

/// Option version from the `Version` column, or the default when absent.
pub fn parse_option_version(row: &dyn RowPort) -> Result<i32, LoaderError> {
    Ok(find_value(row, VERSION, parse_integer)?.unwrap_or(DEFAULT_OPTION_VERSION_NUMBER))
}
