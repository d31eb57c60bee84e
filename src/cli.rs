//! CLI definition and dispatch.

use clap::{ArgAction, Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::adapters::calendar_table::StaticCalendarDefaults;
use crate::adapters::csv_adapter::CsvTable;
use crate::adapters::file_config_adapter::FileConfigAdapter;
use crate::domain::error::TradeCsvError;
use crate::domain::etd::EtdType;
use crate::domain::format::{formatted_double, formatted_percentage};
use crate::domain::record::{ResolvedRecord, resolve_record};
use crate::domain::settings::{LoaderSettings, build_loader_settings, parse_etd_type};
use crate::logging::{LogConfig, LogFormat};
use crate::ports::calendar_port::CalendarPort;
use crate::ports::row_port::RowPort;

#[derive(Parser, Debug)]
#[command(name = "tradecsv", about = "Resolve trade and position CSV fields")]
pub struct Cli {
    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,
    /// Log line layout
    #[arg(long = "log-format", value_enum, default_value = "pretty", global = true)]
    pub log_format: LogFormat,
    /// Disable ANSI colours in log output
    #[arg(long = "no-color", global = true)]
    pub no_color: bool,
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn log_config(&self) -> LogConfig {
        LogConfig::from_verbosity(self.verbose)
            .with_format(self.log_format)
            .with_ansi(!self.no_color)
    }
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Resolve every row of a CSV file and report the failures
    Check {
        #[arg(short, long)]
        file: PathBuf,
        #[arg(short, long)]
        config: Option<PathBuf>,
        /// Overrides `[loader] etd_type` (future or option)
        #[arg(long, value_parser = parse_etd_arg)]
        etd_type: Option<EtdType>,
    },
    /// Print a number the way resolved values are written back
    Format {
        #[arg(allow_negative_numbers = true)]
        value: f64,
        #[arg(long)]
        percentage: bool,
    },
}

fn parse_etd_arg(value: &str) -> Result<EtdType, String> {
    parse_etd_type(value)
        .ok_or_else(|| format!("unknown ETD type '{value}', expected future or option"))
}

/// Resolved rows and row failures of one table, in line order.
#[derive(Debug, Default)]
pub struct CheckReport {
    pub records: Vec<ResolvedRecord>,
    pub failures: Vec<TradeCsvError>,
}

impl CheckReport {
    pub fn row_count(&self) -> usize {
        self.records.len() + self.failures.len()
    }

    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }
}

pub fn run(cli: Cli) -> ExitCode {
    match cli.command {
        Command::Check {
            file,
            config,
            etd_type,
        } => run_check(&file, config.as_deref(), etd_type),
        Command::Format { value, percentage } => run_format(value, percentage),
    }
}

pub fn load_settings(config_path: Option<&Path>) -> Result<LoaderSettings, TradeCsvError> {
    let Some(path) = config_path else {
        return Ok(LoaderSettings::default());
    };
    let adapter = FileConfigAdapter::from_file(path).map_err(|e| TradeCsvError::ConfigParse {
        file: path.display().to_string(),
        reason: e.to_string(),
    })?;
    build_loader_settings(&adapter)
}

pub fn check_table(
    table: &CsvTable,
    settings: &LoaderSettings,
    calendars: &dyn CalendarPort,
) -> CheckReport {
    let mut report = CheckReport::default();
    for row in table.rows() {
        match resolve_record(row, settings, calendars) {
            Ok(record) => report.records.push(record),
            Err(source) => {
                let line = row.line_number().unwrap_or_default();
                tracing::warn!(line, columns = ?source.columns(), "row failed to resolve");
                report.failures.push(TradeCsvError::Row { line, source });
            }
        }
    }
    report
}

pub fn check_file(
    file: &Path,
    config_path: Option<&Path>,
    etd_type: Option<EtdType>,
) -> Result<CheckReport, TradeCsvError> {
    let mut settings = load_settings(config_path)?;
    if let Some(etd_type) = etd_type {
        settings.etd_type = etd_type;
    }
    let calendars =
        StaticCalendarDefaults::new().with_overrides(settings.calendar_overrides.iter().cloned());
    let table = CsvTable::from_path(file)?;
    Ok(check_table(&table, &settings, &calendars))
}

fn run_check(file: &Path, config_path: Option<&Path>, etd_type: Option<EtdType>) -> ExitCode {
    let report = match check_file(file, config_path, etd_type) {
        Ok(r) => r,
        Err(e) => {
            tracing::error!(file = %file.display(), "check aborted");
            eprintln!("error: {e}");
            return (&e).into();
        }
    };

    for record in &report.records {
        match record.line {
            Some(line) => println!("line {line}: {record}"),
            None => println!("{record}"),
        }
    }
    for failure in &report.failures {
        eprintln!("error: {failure}");
    }

    tracing::info!(
        rows = report.row_count(),
        failed = report.failures.len(),
        "check finished"
    );
    eprintln!(
        "{} rows, {} resolved, {} failed",
        report.row_count(),
        report.records.len(),
        report.failures.len()
    );

    match report.failures.first() {
        Some(first) => first.into(),
        None => ExitCode::SUCCESS,
    }
}

fn run_format(value: f64, percentage: bool) -> ExitCode {
    let text = if percentage {
        formatted_percentage(value)
    } else {
        formatted_double(value)
    };
    println!("{text}");
    ExitCode::SUCCESS
}
