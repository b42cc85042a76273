//! Command implementations for the propcast CLI

pub mod common;
pub mod import_stats;
pub mod players;
pub mod quick;
pub mod series;
pub mod what_if;
