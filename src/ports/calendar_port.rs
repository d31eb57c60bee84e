//! Holiday calendar defaulting port trait.

use crate::domain::adjustment::HolidayCalendarId;
use crate::domain::currency::Currency;

pub trait CalendarPort {
    /// The calendar conventionally used for payments in `currency`.
    fn default_by_currency(&self, currency: &Currency) -> HolidayCalendarId;
}
