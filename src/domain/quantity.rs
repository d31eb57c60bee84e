//! Long/short quantity of a position.

use crate::domain::columns::{LONG_QUANTITY, QUANTITY, SHORT_QUANTITY};
use crate::domain::error::LoaderError;
use crate::domain::fields::find_value;
use crate::domain::parsers::parse_double;
use crate::ports::row_port::RowPort;

/// Both legs are non-negative.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuantityPair {
    pub long: f64,
    pub short: f64,
}

impl QuantityPair {
    /// long - short
    pub fn net(&self) -> f64 {
        self.long - self.short
    }
}

/// Reads the signed `Quantity` column if present, otherwise the
/// `Long Quantity` / `Short Quantity` pair.
pub fn parse_quantity(row: &dyn RowPort) -> Result<QuantityPair, LoaderError> {
    if let Some(quantity) = find_value(row, QUANTITY, parse_double)? {
        return Ok(if quantity >= 0.0 {
            QuantityPair {
                long: quantity,
                short: 0.0,
            }
        } else {
            QuantityPair {
                long: 0.0,
                short: -quantity,
            }
        });
    }

    let long = find_value(row, LONG_QUANTITY, parse_double)?;
    let short = find_value(row, SHORT_QUANTITY, parse_double)?;
    if long.is_none() && short.is_none() {
        return Err(LoaderError::missing_any(
            &[QUANTITY, LONG_QUANTITY, SHORT_QUANTITY],
            format!(
                "Security must contain a quantity column, either '{QUANTITY}' or \
                 '{LONG_QUANTITY}' and '{SHORT_QUANTITY}'"
            ),
        ));
    }
    Ok(QuantityPair {
        long: not_negative(LONG_QUANTITY, long.unwrap_or(0.0))?,
        short: not_negative(SHORT_QUANTITY, short.unwrap_or(0.0))?,
    })
}

fn not_negative(column: &str, value: f64) -> Result<f64, LoaderError> {
    if value < 0.0 {
        Err(LoaderError::invalid(
            &[column],
            format!("'{column}' must not be negative, but was {value}"),
        ))
    } else {
        Ok(value)
    }
}
