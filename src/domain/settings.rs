//! Loader settings read from configuration.
//!
//! ```ini
//! [loader]
//! default_date_convention = ModifiedFollowing
//! etd_type = Future
//!
//! [calendars]
//! USD = USNY
//! ```

use crate::domain::adjustment::{BusinessDayConvention, HolidayCalendarId};
use crate::domain::currency::Currency;
use crate::domain::error::TradeCsvError;
use crate::domain::etd::EtdType;
use crate::domain::parsers::{parse_business_day_convention, parse_calendar, parse_currency};
use crate::ports::config_port::ConfigPort;

pub const LOADER_SECTION: &str = "loader";
pub const CALENDARS_SECTION: &str = "calendars";

#[derive(Debug, Clone, PartialEq)]
pub struct LoaderSettings {
    pub default_date_convention: BusinessDayConvention,
    pub etd_type: EtdType,
    pub calendar_overrides: Vec<(Currency, HolidayCalendarId)>,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            default_date_convention: BusinessDayConvention::ModifiedFollowing,
            etd_type: EtdType::Future,
            calendar_overrides: Vec::new(),
        }
    }
}

pub fn build_loader_settings(config: &dyn ConfigPort) -> Result<LoaderSettings, TradeCsvError> {
    let defaults = LoaderSettings::default();
    Ok(LoaderSettings {
        default_date_convention: read_convention(config)?
            .unwrap_or(defaults.default_date_convention),
        etd_type: read_etd_type(config)?.unwrap_or(defaults.etd_type),
        calendar_overrides: read_calendar_overrides(config)?,
    })
}

fn read_convention(config: &dyn ConfigPort) -> Result<Option<BusinessDayConvention>, TradeCsvError> {
    let key = "default_date_convention";
    let Some(value) = config.get_string(LOADER_SECTION, key) else {
        return Ok(None);
    };
    let convention = parse_business_day_convention(&value)
        .map_err(|e| invalid(LOADER_SECTION, key, e.to_string()))?;
    if convention == BusinessDayConvention::NoAdjust {
        return Err(invalid(
            LOADER_SECTION,
            key,
            "default convention must adjust dates, NoAdjust is only valid in a row".to_string(),
        ));
    }
    Ok(Some(convention))
}

pub fn parse_etd_type(value: &str) -> Option<EtdType> {
    match value.trim().to_lowercase().as_str() {
        "future" | "f" => Some(EtdType::Future),
        "option" | "o" => Some(EtdType::Option),
        _ => None,
    }
}

fn read_etd_type(config: &dyn ConfigPort) -> Result<Option<EtdType>, TradeCsvError> {
    let key = "etd_type";
    match config.get_string(LOADER_SECTION, key) {
        None => Ok(None),
        Some(value) => parse_etd_type(&value).map(Some).ok_or_else(|| {
            invalid(
                LOADER_SECTION,
                key,
                format!("etd_type must be 'Future' or 'Option', but was '{value}'"),
            )
        }),
    }
}

fn read_calendar_overrides(
    config: &dyn ConfigPort,
) -> Result<Vec<(Currency, HolidayCalendarId)>, TradeCsvError> {
    config
        .get_section(CALENDARS_SECTION)
        .into_iter()
        .map(|(key, value)| {
            let currency =
                parse_currency(&key).map_err(|e| invalid(CALENDARS_SECTION, &key, e.to_string()))?;
            let calendar =
                parse_calendar(&value).map_err(|e| invalid(CALENDARS_SECTION, &key, e.to_string()))?;
            Ok((currency, calendar))
        })
        .collect()
}

fn invalid(section: &str, key: &str, reason: String) -> TradeCsvError {
    TradeCsvError::ConfigInvalid {
        section: section.to_string(),
        key: key.to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    #[test]
    fn empty_config_gives_defaults() {
        let config = FileConfigAdapter::from_string("").unwrap();
        assert_eq!(build_loader_settings(&config).unwrap(), LoaderSettings::default());
    }

    #[test]
    fn reads_every_setting() {
        let config = FileConfigAdapter::from_string(
            "[loader]\ndefault_date_convention = Following\netd_type = option\n\n\
             [calendars]\nusd = USNY+GBLO\nJPY = JPTO\n",
        )
        .unwrap();
        let settings = build_loader_settings(&config).unwrap();
        assert_eq!(settings.default_date_convention, BusinessDayConvention::Following);
        assert_eq!(settings.etd_type, EtdType::Option);
        assert_eq!(
            settings.calendar_overrides,
            vec![
                (
                    Currency::parse("JPY").unwrap(),
                    HolidayCalendarId::parse("JPTO").unwrap()
                ),
                (
                    Currency::parse("USD").unwrap(),
                    HolidayCalendarId::parse("USNY+GBLO").unwrap()
                ),
            ]
        );
    }

    #[test]
    fn rejects_unknown_convention() {
        let config =
            FileConfigAdapter::from_string("[loader]\ndefault_date_convention = Sideways\n").unwrap();
        let err = build_loader_settings(&config).unwrap_err();
        assert!(matches!(
            err,
            TradeCsvError::ConfigInvalid { ref key, .. } if key == "default_date_convention"
        ));
    }

    #[test]
    fn rejects_no_adjust_default() {
        let config =
            FileConfigAdapter::from_string("[loader]\ndefault_date_convention = NoAdjust\n").unwrap();
        assert!(build_loader_settings(&config).is_err());
    }

    #[test]
    fn rejects_bad_etd_type() {
        let config = FileConfigAdapter::from_string("[loader]\netd_type = swap\n").unwrap();
        let err = build_loader_settings(&config).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid config value [loader] etd_type: etd_type must be 'Future' or 'Option', but was 'swap'"
        );
    }

    #[test]
    fn rejects_bad_currency_key() {
        let config = FileConfigAdapter::from_string("[calendars]\ndollars = USNY\n").unwrap();
        assert!(matches!(
            build_loader_settings(&config),
            Err(TradeCsvError::ConfigInvalid { ref section, .. }) if section == "calendars"
        ));
    }
}
