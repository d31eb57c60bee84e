//! Narrow contracts for the collaborators the resolvers consume.

pub mod calendar_port;
pub mod config_port;
pub mod row_port;
