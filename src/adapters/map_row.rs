//! In-memory row keyed by column name.

use crate::ports::row_port::RowPort;
use std::collections::HashMap;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapRow {
    values: HashMap<String, String>,
    line: Option<u64>,
}

impl MapRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, column: &str, value: &str) -> Self {
        self.values.insert(column.to_string(), value.to_string());
        self
    }

    pub fn without(mut self, column: &str) -> Self {
        self.values.remove(column);
        self
    }

    pub fn at_line(mut self, line: u64) -> Self {
        self.line = Some(line);
        self
    }
}

impl FromIterator<(String, String)> for MapRow {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
            line: None,
        }
    }
}

impl RowPort for MapRow {
    fn has_column(&self, column: &str) -> bool {
        self.values.contains_key(column)
    }

    fn find(&self, column: &str) -> Option<&str> {
        self.values
            .get(column)
            .map(|v| v.trim())
            .filter(|v| !v.is_empty())
    }

    fn line_number(&self) -> Option<u64> {
        self.line
    }
}
