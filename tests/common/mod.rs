#![allow(dead_code)]

use chrono::NaiveDate;
use std::io::Write;
use tradecsv::adapters::csv_adapter::CsvTable;
pub use tradecsv::adapters::map_row::MapRow;
use tradecsv::domain::columns::*;
use tradecsv::domain::currency::Currency;
use tradecsv::ports::calendar_port::CalendarPort;
use tradecsv::domain::adjustment::HolidayCalendarId;

/// Calendar port answering one calendar for every currency.
pub struct FixedCalendar(pub &'static str);

impl CalendarPort for FixedCalendar {
    fn default_by_currency(&self, _currency: &Currency) -> HolidayCalendarId {
        HolidayCalendarId::parse(self.0).unwrap()
    }
}

pub fn date(s: &str) -> NaiveDate {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
}

pub fn expiry_row(expiry: &str) -> MapRow {
    MapRow::new().with(EXPIRY, expiry)
}

pub fn net_quantity_row(quantity: &str) -> MapRow {
    MapRow::new().with(QUANTITY, quantity)
}

pub fn split_quantity_row(long: &str, short: &str) -> MapRow {
    MapRow::new()
        .with(LONG_QUANTITY, long)
        .with(SHORT_QUANTITY, short)
}

/// Premium with amount, direction and date but no adjustment columns.
pub fn premium_row(direction: &str, amount: &str) -> MapRow {
    MapRow::new()
        .with(PREMIUM_CURRENCY, "GBP")
        .with(PREMIUM_AMOUNT, amount)
        .with(PREMIUM_DIRECTION, direction)
        .with(PREMIUM_DATE, "2024-03-15")
}

pub fn adjusted_premium_row(direction: &str, amount: &str) -> MapRow {
    premium_row(direction, amount)
        .with(PREMIUM_DATE_CONVENTION, "Following")
        .with(PREMIUM_DATE_CALENDAR, "GBLO")
}

pub fn table(csv: &str) -> CsvTable {
    CsvTable::from_reader(csv.as_bytes()).unwrap()
}

pub fn write_temp_file(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
