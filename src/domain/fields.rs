//! Column lookups over a [`RowPort`], optionally combined with a parser.
//!
//! These four functions are the only way the resolvers read a row.

use crate::domain::error::{LoaderError, ValueParseError};
use crate::ports::row_port::RowPort;

/// The raw text of `column`, or `None` if the column is absent or blank.
pub fn find_raw<'r>(row: &'r dyn RowPort, column: &str) -> Option<&'r str> {
    row.find(column).map(str::trim).filter(|v| !v.is_empty())
}

pub fn get_raw<'r>(row: &'r dyn RowPort, column: &str) -> Result<&'r str, LoaderError> {
    find_raw(row, column).ok_or_else(|| LoaderError::missing(column))
}

/// Parses `column` if it is present; a present but unparsable value is an error.
pub fn find_value<T, F>(row: &dyn RowPort, column: &str, parse: F) -> Result<Option<T>, LoaderError>
where
    F: FnOnce(&str) -> Result<T, ValueParseError>,
{
    find_raw(row, column)
        .map(|raw| parse(raw).map_err(|e| LoaderError::unparsable(column, e)))
        .transpose()
}

pub fn get_value<T, F>(row: &dyn RowPort, column: &str, parse: F) -> Result<T, LoaderError>
where
    F: FnOnce(&str) -> Result<T, ValueParseError>,
{
    let raw = get_raw(row, column)?;
    parse(raw).map_err(|e| LoaderError::unparsable(column, e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::map_row::MapRow;
    use crate::domain::parsers::parse_integer;

    fn row() -> MapRow {
        MapRow::new()
            .with("Expiry Day", "12")
            .with("Expiry Week", "  ")
            .with("Version", "v2")
    }

    #[test]
    fn find_raw_treats_blank_as_absent() {
        let row = row();
        assert_eq!(find_raw(&row, "Expiry Day"), Some("12"));
        assert_eq!(find_raw(&row, "Expiry Week"), None);
        assert_eq!(find_raw(&row, "Missing"), None);
    }

    #[test]
    fn get_raw_fails_when_absent() {
        let row = row();
        assert_eq!(get_raw(&row, "Expiry Day").unwrap(), "12");
        assert_eq!(
            get_raw(&row, "Missing").unwrap_err(),
            LoaderError::missing("Missing")
        );
    }

    #[test]
    fn find_value_parses_present_values() {
        let row = row();
        assert_eq!(find_value(&row, "Expiry Day", parse_integer).unwrap(), Some(12));
        assert_eq!(find_value(&row, "Expiry Week", parse_integer).unwrap(), None);
    }

    #[test]
    fn find_value_propagates_parse_failure() {
        let row = row();
        let err = find_value(&row, "Version", parse_integer).unwrap_err();
        match err {
            LoaderError::UnparsableValue { column, source } => {
                assert_eq!(column, "Version");
                assert_eq!(source.value, "v2");
            }
            other => panic!("unexpected error {other:?}"),
        }
    }

    #[test]
    fn get_value_distinguishes_missing_from_unparsable() {
        let row = row();
        assert_eq!(get_value(&row, "Expiry Day", parse_integer).unwrap(), 12);
        assert!(matches!(
            get_value(&row, "Missing", parse_integer),
            Err(LoaderError::MissingRequiredField { .. })
        ));
        assert!(matches!(
            get_value(&row, "Version", parse_integer),
            Err(LoaderError::UnparsableValue { .. })
        ));
    }
}
