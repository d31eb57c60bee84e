//! Value types, parsers and resolvers.

pub mod adjustment;
pub mod barrier;
pub mod codes;
pub mod columns;
pub mod currency;
pub mod datetime;
pub mod error;
pub mod etd;
pub mod fields;
pub mod format;
pub mod parsers;
pub mod payment;
pub mod quantity;
pub mod record;
pub mod settings;
