//! Storage layer for propcast
//!
//! A thin abstraction over the local SQLite database, organized into:
//! - `models`: Data structures
//! - `schema`: Database connection and schema management
//! - `queries`: Row-level operations and the projection reader impls

pub mod models;
pub mod queries;
pub mod schema;


pub use models::*;
pub use schema::StatsDatabase;
