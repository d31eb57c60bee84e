//! CLI integration tests for the check command orchestration.
//!
//! Tests cover:
//! - Argument parsing (check, format, verbosity, ETD type override)
//! - Loader settings from real INI files on disk
//! - check_file over CSV files with clean and failing rows
//! - Error variants for missing files, bad configuration and malformed CSV

mod common;

use approx::assert_relative_eq;
use clap::Parser;
use common::*;
use tradecsv::cli::{self, Cli, Command};
use tradecsv::domain::adjustment::{BusinessDayAdjustment, BusinessDayConvention};
use tradecsv::domain::error::TradeCsvError;
use tradecsv::domain::etd::{EtdOptionType, EtdSettlementType, EtdType, EtdVariant};
use tradecsv::logging::LogFormat;
use tracing::Level;

const LOADER_INI: &str = r#"
[loader]
default_date_convention = Following
etd_type = Option

[calendars]
USD = USGS
"#;

const OPTIONS_CSV: &str = "\
Quantity,Expiry,Expiry Day,Settlement Type,Exercise Style,Version,Currency,Settlement Date
5,2024-06,,,,,USD,2024-06-03
-2,2024-06,14,C,European,3,USD,
";

mod argument_parsing {
    use super::*;

    #[test]
    fn parses_check_with_all_options() {
        let cli = Cli::try_parse_from([
            "tradecsv",
            "-vv",
            "check",
            "--file",
            "positions.csv",
            "--config",
            "loader.ini",
            "--etd-type",
            "option",
        ])
        .unwrap();
        assert_eq!(cli.verbose, 2);
        match cli.command {
            Command::Check {
                file,
                config,
                etd_type,
            } => {
                assert_eq!(file.to_str(), Some("positions.csv"));
                assert_eq!(config.unwrap().to_str(), Some("loader.ini"));
                assert_eq!(etd_type, Some(EtdType::Option));
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn logging_flags_build_log_config() {
        let cli = Cli::try_parse_from([
            "tradecsv",
            "format",
            "1.5",
            "-v",
            "--log-format",
            "compact",
            "--no-color",
        ])
        .unwrap();
        let config = cli.log_config();
        assert_eq!(config.level, Level::INFO);
        assert_eq!(config.format, LogFormat::Compact);
        assert!(!config.with_ansi);
    }

    #[test]
    fn logging_defaults_to_pretty_colour() {
        let cli = Cli::try_parse_from(["tradecsv", "format", "2"]).unwrap();
        let config = cli.log_config();
        assert_eq!(config.level, Level::WARN);
        assert_eq!(config.format, LogFormat::Pretty);
        assert!(config.with_ansi);
    }

    #[test]
    fn rejects_unknown_log_format() {
        let result = Cli::try_parse_from(["tradecsv", "--log-format", "json", "format", "2"]);
        assert!(result.is_err());
    }

    #[test]
    fn rejects_unknown_etd_type() {
        let result = Cli::try_parse_from([
            "tradecsv",
            "check",
            "--file",
            "positions.csv",
            "--etd-type",
            "swap",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn format_accepts_negative_values() {
        let cli = Cli::try_parse_from(["tradecsv", "format", "-0.25", "--percentage"]).unwrap();
        match cli.command {
            Command::Format { value, percentage } => {
                assert_relative_eq!(value, -0.25);
                assert!(percentage);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }
}

mod settings {
    use super::*;

    #[test]
    fn no_config_gives_defaults() {
        let settings = cli::load_settings(None).unwrap();
        assert_eq!(
            settings.default_date_convention,
            BusinessDayConvention::ModifiedFollowing
        );
        assert_eq!(settings.etd_type, EtdType::Future);
    }

    #[test]
    fn reads_ini_from_disk() {
        let ini = write_temp_file(LOADER_INI);
        let settings = cli::load_settings(Some(ini.path())).unwrap();
        assert_eq!(settings.default_date_convention, BusinessDayConvention::Following);
        assert_eq!(settings.etd_type, EtdType::Option);
        assert_eq!(settings.calendar_overrides.len(), 1);
    }

    #[test]
    fn missing_config_file_is_parse_error() {
        let err = cli::load_settings(Some("/nonexistent/loader.ini".as_ref())).unwrap_err();
        assert!(matches!(err, TradeCsvError::ConfigParse { .. }));
    }

    #[test]
    fn invalid_setting_is_reported() {
        let ini = write_temp_file("[loader]\netd_type = swap\n");
        let err = cli::load_settings(Some(ini.path())).unwrap_err();
        assert!(matches!(err, TradeCsvError::ConfigInvalid { .. }));
    }
}

mod check_file {
    use super::*;

    #[test]
    fn resolves_options_with_config() {
        let csv = write_temp_file(OPTIONS_CSV);
        let ini = write_temp_file(LOADER_INI);
        let report = cli::check_file(csv.path(), Some(ini.path()), None).unwrap();
        assert!(report.is_clean(), "failures: {:?}", report.failures);
        assert_eq!(report.records.len(), 2);

        let monthly = &report.records[0];
        assert_eq!(monthly.option_version, Some(0));
        let settlement = monthly.settlement_date.as_ref().unwrap();
        assert_eq!(settlement.date, date("2024-06-03"));
        match settlement.adjustment.as_ref().unwrap() {
            BusinessDayAdjustment::Adjusted {
                convention,
                calendar,
            } => {
                assert_eq!(*convention, BusinessDayConvention::Following);
                assert_eq!(calendar.name(), "USGS");
            }
            other => panic!("unexpected adjustment {other:?}"),
        }

        let flex = &report.records[1];
        assert_eq!(flex.option_version, Some(3));
        assert_eq!(
            flex.expiry.unwrap().1,
            EtdVariant::FlexOption {
                day: 14,
                settlement_type: EtdSettlementType::Cash,
                option_type: EtdOptionType::European,
            }
        );
        assert_eq!(flex.settlement_date, None);
    }

    #[test]
    fn etd_type_override_beats_config() {
        let csv = write_temp_file(OPTIONS_CSV);
        let ini = write_temp_file(LOADER_INI);
        let report = cli::check_file(csv.path(), Some(ini.path()), Some(EtdType::Future)).unwrap();
        assert!(report.is_clean());
        assert_eq!(report.records[0].option_version, None);
        assert_eq!(
            report.records[1].expiry.unwrap().1,
            EtdVariant::FlexFuture {
                day: 14,
                settlement_type: EtdSettlementType::Cash,
            }
        );
    }

    #[test]
    fn failing_rows_are_tagged_with_line() {
        let csv = write_temp_file(
            "Long Quantity,Short Quantity,Premium Currency,Premium Amount,Premium Direction,Premium Date\n\
             1,0,USD,10,Pay,2024-01-02\n\
             -1,0,,,,\n\
             0,2,USD,10,Sideways,2024-01-02\n",
        );
        let report = cli::check_file(csv.path(), None, None).unwrap();
        assert_eq!(report.row_count(), 3);
        assert_eq!(report.records.len(), 1);
        assert_relative_eq!(report.records[0].premium.as_ref().unwrap().value.amount, -10.0);

        let messages: Vec<String> = report.failures.iter().map(|f| f.to_string()).collect();
        assert_eq!(
            messages[0],
            "row 3: 'Long Quantity' must not be negative, but was -1"
        );
        assert!(messages[1].starts_with("row 4: invalid value in column 'Premium Direction'"));
    }

    #[test]
    fn missing_csv_is_io_error() {
        let err = cli::check_file("/nonexistent/positions.csv".as_ref(), None, None).unwrap_err();
        assert!(matches!(err, TradeCsvError::Io(_)));
    }

    #[test]
    fn malformed_csv_is_csv_error() {
        let csv = write_temp_file("Quantity,Expiry\n1,2024-06,extra\n");
        let err = cli::check_file(csv.path(), None, None).unwrap_err();
        assert!(matches!(err, TradeCsvError::Csv { .. }));
    }
}
