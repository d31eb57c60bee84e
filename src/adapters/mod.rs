//! Concrete adapter implementations for ports.

pub mod calendar_table;
pub mod csv_adapter;
pub mod file_config_adapter;
pub mod map_row;
