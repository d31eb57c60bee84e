//! tradecsv — field resolution for trade and position CSV files.
//!
//! Hexagonal architecture: value parsing and resolution rules in [`domain`],
//! port traits in [`ports`], concrete sources in [`adapters`].

pub mod adapters;
pub mod cli;
pub mod domain;
pub mod logging;
pub mod ports;
