//! Domain error types.

/// A single text value that could not be parsed into its typed form.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("unknown {kind} value '{value}', {expected}")]
pub struct ValueParseError {
    pub kind: &'static str,
    pub value: String,
    pub expected: String,
}

impl ValueParseError {
    pub fn new(kind: &'static str, value: &str, expected: impl Into<String>) -> Self {
        Self {
            kind,
            value: value.to_string(),
            expected: expected.into(),
        }
    }
}

/// Failure to resolve a value from a single row.
///
/// Every variant names the offending column(s). A row that yields one of
/// these produces no value at all.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum LoaderError {
    #[error("{message}")]
    MissingRequiredField {
        columns: Vec<String>,
        message: String,
    },

    #[error("invalid value in column '{column}': {source}")]
    UnparsableValue {
        column: String,
        source: ValueParseError,
    },

    #[error("{message}")]
    ConflictingFields {
        columns: Vec<String>,
        message: String,
    },

    #[error("{message}")]
    InvalidCombination {
        columns: Vec<String>,
        message: String,
    },
}

impl LoaderError {
    /// A required column that is absent or blank.
    pub fn missing(column: &str) -> Self {
        LoaderError::MissingRequiredField {
            columns: vec![column.to_string()],
            message: format!("missing required column '{column}'"),
        }
    }

    pub fn missing_any(columns: &[&str], message: impl Into<String>) -> Self {
        LoaderError::MissingRequiredField {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            message: message.into(),
        }
    }

    pub fn conflicting(columns: &[&str], message: impl Into<String>) -> Self {
        LoaderError::ConflictingFields {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            message: message.into(),
        }
    }

    pub fn invalid(columns: &[&str], message: impl Into<String>) -> Self {
        LoaderError::InvalidCombination {
            columns: columns.iter().map(|c| c.to_string()).collect(),
            message: message.into(),
        }
    }

    pub fn unparsable(column: &str, source: ValueParseError) -> Self {
        LoaderError::UnparsableValue {
            column: column.to_string(),
            source,
        }
    }

    /// Columns named by this error.
    pub fn columns(&self) -> Vec<&str> {
        match self {
            LoaderError::UnparsableValue { column, .. } => vec![column.as_str()],
            LoaderError::MissingRequiredField { columns, .. }
            | LoaderError::ConflictingFields { columns, .. }
            | LoaderError::InvalidCombination { columns, .. } => {
                columns.iter().map(String::as_str).collect()
            }
        }
    }
}

/// Top-level error type for tradecsv.
#[derive(Debug, thiserror::Error)]
pub enum TradeCsvError {
    #[error("config parse error in {file}: {reason}")]
    ConfigParse { file: String, reason: String },

    #[error("invalid config value [{section}] {key}: {reason}")]
    ConfigInvalid {
        section: String,
        key: String,
        reason: String,
    },

    #[error("CSV read error: {reason}")]
    Csv { reason: String },

    #[error("row {line}: {source}")]
    Row { line: u64, source: LoaderError },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<&TradeCsvError> for std::process::ExitCode {
    fn from(err: &TradeCsvError) -> Self {
        let code: u8 = match err {
            TradeCsvError::Io(_) => 1,
            TradeCsvError::ConfigParse { .. } | TradeCsvError::ConfigInvalid { .. } => 2,
            TradeCsvError::Csv { .. } => 3,
            TradeCsvError::Row { .. } => 4,
        };
        std::process::ExitCode::from(code)
    }
}
