//! Row access port trait.

/// One input record, addressed by column name.
///
/// Column names are case-sensitive. `find` reports blank values as absent and
/// returns values with surrounding whitespace removed.
pub trait RowPort {
    fn has_column(&self, column: &str) -> bool;

    fn find(&self, column: &str) -> Option<&str>;

    /// 1-based line of the record in its source, when known.
    fn line_number(&self) -> Option<u64> {
        None
    }
}
