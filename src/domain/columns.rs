//! Column names understood by the resolvers.

pub const SECURITY_ID_SCHEME: &str = "Security Id Scheme";
pub const SECURITY_ID: &str = "Security Id";
pub const EXCHANGE: &str = "Exchange";
pub const CONTRACT_CODE: &str = "Contract Code";
pub const PRICE: &str = "Price";
pub const CURRENCY: &str = "Currency";
pub const TICK_SIZE: &str = "Tick Size";
pub const TICK_VALUE: &str = "Tick Value";
pub const CONTRACT_SIZE: &str = "Contract Size";

pub const QUANTITY: &str = "Quantity";
pub const LONG_QUANTITY: &str = "Long Quantity";
pub const SHORT_QUANTITY: &str = "Short Quantity";

pub const EXPIRY: &str = "Expiry";
pub const EXPIRY_WEEK: &str = "Expiry Week";
pub const EXPIRY_DAY: &str = "Expiry Day";
pub const SETTLEMENT_TYPE: &str = "Settlement Type";
pub const EXERCISE_STYLE: &str = "Exercise Style";
pub const VERSION: &str = "Version";
pub const PUT_CALL: &str = "Put Call";
pub const EXERCISE_PRICE: &str = "Exercise Price";
pub const UNDERLYING_EXPIRY: &str = "Underlying Expiry";

pub const PREMIUM_CURRENCY: &str = "Premium Currency";
pub const PREMIUM_AMOUNT: &str = "Premium Amount";
pub const PREMIUM_DIRECTION: &str = "Premium Direction";
pub const PREMIUM_DATE: &str = "Premium Date";
pub const PREMIUM_DATE_CONVENTION: &str = "Premium Date Convention";
pub const PREMIUM_DATE_CALENDAR: &str = "Premium Date Calendar";

pub const SETTLEMENT_DATE: &str = "Settlement Date";
pub const SETTLEMENT_DATE_CONVENTION: &str = "Settlement Date Convention";
pub const SETTLEMENT_DATE_CALENDAR: &str = "Settlement Date Calendar";

pub const BARRIER_TYPE: &str = "Barrier Type";
pub const KNOCK_TYPE: &str = "Knock Type";
pub const BARRIER_LEVEL: &str = "Barrier Level";

/// Former name of [`CURRENCY`].
#[deprecated(note = "use `CURRENCY`")]
pub const CURRENCY_FIELD: &str = CURRENCY;
/// Former name of [`TICK_SIZE`].
#[deprecated(note = "use `TICK_SIZE`")]
pub const TICK_SIZE_FIELD: &str = TICK_SIZE;
/// Former name of [`TICK_VALUE`].
#[deprecated(note = "use `TICK_VALUE`")]
pub const TICK_VALUE_FIELD: &str = TICK_VALUE;
/// Former name of [`CONTRACT_SIZE`].
#[deprecated(note = "use `CONTRACT_SIZE`")]
pub const CONTRACT_SIZE_FIELD: &str = CONTRACT_SIZE;
/// Former name of [`PREMIUM_DATE_CONVENTION`].
#[deprecated(note = "use `PREMIUM_DATE_CONVENTION`")]
pub const PREMIUM_DATE_CNV: &str = PREMIUM_DATE_CONVENTION;
/// Former name of [`PREMIUM_DATE_CALENDAR`].
#[deprecated(note = "use `PREMIUM_DATE_CALENDAR`")]
pub const PREMIUM_DATE_CAL: &str = PREMIUM_DATE_CALENDAR;
