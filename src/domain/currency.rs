//! Currencies, signed amounts and pay/receive direction.

use crate::domain::codes::CodedEnum;
use crate::domain::error::ValueParseError;
use crate::domain::format::formatted_double;
use std::fmt;

/// An ISO-4217 style three letter currency code, always uppercase.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Currency(String);

impl Currency {
    pub fn parse(s: &str) -> Result<Self, ValueParseError> {
        let trimmed = s.trim();
        if trimmed.len() == 3 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_uppercase()))
        } else {
            Err(ValueParseError::new(
                "Currency",
                s,
                "expected a three letter currency code such as 'USD'",
            ))
        }
    }

    pub fn code(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CurrencyAmount {
    pub currency: Currency,
    pub amount: f64,
}

impl CurrencyAmount {
    pub fn of(currency: Currency, amount: f64) -> Self {
        Self { currency, amount }
    }
}

impl fmt::Display for CurrencyAmount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.currency, formatted_double(self.amount))
    }
}

/// Direction of a cash flow from the reporting party's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PayReceive {
    Pay,
    Receive,
}

impl PayReceive {
    /// Pay amounts are negative and receive amounts positive, whatever the input sign.
    pub fn normalize(self, amount: f64) -> f64 {
        match self {
            PayReceive::Pay => -amount.abs(),
            PayReceive::Receive => amount.abs(),
        }
    }
}

impl CodedEnum for PayReceive {
    const KIND: &'static str = "PayReceive";

    fn variants() -> &'static [Self] {
        &[PayReceive::Pay, PayReceive::Receive]
    }

    fn code(self) -> &'static str {
        match self {
            PayReceive::Pay => "P",
            PayReceive::Receive => "R",
        }
    }

    fn name(self) -> &'static str {
        match self {
            PayReceive::Pay => "Pay",
            PayReceive::Receive => "Receive",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            PayReceive::Pay => &[],
            PayReceive::Receive => &["REC"],
        }
    }
}
