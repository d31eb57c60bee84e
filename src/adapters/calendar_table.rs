//! Built-in currency to holiday calendar table.

use crate::domain::adjustment::HolidayCalendarId;
use crate::domain::currency::Currency;
use crate::ports::calendar_port::CalendarPort;
use std::collections::HashMap;

const DEFAULT_CALENDARS: &[(&str, &str)] = &[
    ("AUD", "AUSY"),
    ("BRL", "BRBD"),
    ("CAD", "CATO"),
    ("CHF", "CHZU"),
    ("CNY", "CNBE"),
    ("CZK", "CZPR"),
    ("DKK", "DKCO"),
    ("EUR", "EUTA"),
    ("GBP", "GBLO"),
    ("HKD", "HKHK"),
    ("HUF", "HUBU"),
    ("ILS", "ILTA"),
    ("INR", "INMU"),
    ("JPY", "JPTO"),
    ("KRW", "KRSE"),
    ("MXN", "MXMC"),
    ("NOK", "NOOS"),
    ("NZD", "NZAU"),
    ("PLN", "PLWA"),
    ("SEK", "SEST"),
    ("SGD", "SGSI"),
    ("THB", "THBA"),
    ("USD", "USNY"),
    ("ZAR", "ZAJO"),
];

/// Currencies without an entry fall back to `NoHolidays`.
#[derive(Debug, Clone)]
pub struct StaticCalendarDefaults {
    by_currency: HashMap<String, HolidayCalendarId>,
}

impl StaticCalendarDefaults {
    pub fn new() -> Self {
        let by_currency = DEFAULT_CALENDARS
            .iter()
            .filter_map(|(ccy, cal)| {
                HolidayCalendarId::parse(cal)
                    .ok()
                    .map(|cal| (ccy.to_string(), cal))
            })
            .collect();
        Self { by_currency }
    }

    /// Replaces or adds entries, later pairs winning.
    pub fn with_overrides<I>(mut self, overrides: I) -> Self
    where
        I: IntoIterator<Item = (Currency, HolidayCalendarId)>,
    {
        for (currency, calendar) in overrides {
            self.by_currency.insert(currency.code().to_string(), calendar);
        }
        self
    }
}

impl Default for StaticCalendarDefaults {
    fn default() -> Self {
        Self::new()
    }
}

impl CalendarPort for StaticCalendarDefaults {
    fn default_by_currency(&self, currency: &Currency) -> HolidayCalendarId {
        self.by_currency
            .get(currency.code())
            .cloned()
            .unwrap_or_else(HolidayCalendarId::no_holidays)
    }
}
