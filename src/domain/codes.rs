//! Lookup tables for enums that are written either as a short code or as a
//! full name.
//!
//! Each enum lists its variants once through [`CodedEnum`]; a [`CodeTable`]
//! is built from that list the first time it is used and is read-only after.

use crate::domain::error::ValueParseError;
use std::collections::HashMap;

pub trait CodedEnum: Copy + PartialEq + 'static {
    /// Name used in error messages, e.g. `EtdOptionType`.
    const KIND: &'static str;

    fn variants() -> &'static [Self];

    /// Short uppercase code, e.g. `A`.
    fn code(self) -> &'static str;

    /// Full name, e.g. `American`.
    fn name(self) -> &'static str;

    /// Further spellings accepted on input.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }
}

#[derive(Debug)]
pub struct CodeTable<T> {
    by_key: HashMap<String, T>,
    expected: String,
}

impl<T: CodedEnum> CodeTable<T> {
    pub fn build() -> Self {
        let mut by_key = HashMap::new();
        for &variant in T::variants() {
            let keys = [variant.code(), variant.name()]
                .into_iter()
                .chain(variant.aliases().iter().copied());
            for key in keys {
                let upper = key.to_uppercase();
                by_key.insert(compact(&upper), variant);
                by_key.insert(upper, variant);
            }
        }

        let names: Vec<String> = T::variants()
            .iter()
            .map(|v| format!("'{}'", v.name()))
            .collect();
        let codes: Vec<String> = T::variants()
            .iter()
            .map(|v| format!("'{}'", v.code()))
            .collect();
        let expected = format!(
            "must be one of {}; parser is case insensitive and also accepts {}",
            names.join(", "),
            codes.join(", ")
        );

        Self { by_key, expected }
    }

    pub fn lookup(&self, raw: &str) -> Result<T, ValueParseError> {
        let upper = raw.trim().to_uppercase();
        self.by_key
            .get(&upper)
            .or_else(|| self.by_key.get(&compact(&upper)))
            .copied()
            .ok_or_else(|| ValueParseError::new(T::KIND, raw, self.expected.as_str()))
    }
}

/// Drops the separators people put inside multi-word names.
fn compact(upper: &str) -> String {
    upper
        .chars()
        .filter(|c| !matches!(c, ' ' | '_' | '-'))
        .collect()
}
