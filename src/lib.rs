//! Propcast: defense-adjusted NFL player stat projections
//!
//! A library and CLI for projecting passing, rushing, and receiving yards by
//! blending a player's recent-form trailing averages with the opponent's
//! season-to-date yards allowed, over game logs stored in a local SQLite
//! database.
//!
//! ## Features
//!
//! - **What-if queries**: project one hypothetical matchup, using only
//!   history strictly before the target week
//! - **Full-series predictions**: one projection per game already played,
//!   for predicted-vs-actual chart overlays
//! - **Rank-based quick mode**: a baseline-times-factor fallback that needs
//!   no stored history
//! - **ESPN gamelog import**: normalize a public gamelog payload into rows
//! - **Local storage**: SQLite game and defense tables with an in-memory
//!   mode for tests
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use propcast::{PlayerId, ProjectionEngine, Season, StatsDatabase, TeamAbbr, Week};
//!
//! # fn example() -> propcast::Result<()> {
//! let db = StatsDatabase::new()?;
//! let engine = ProjectionEngine::new(&db, &db);
//!
//! let projection = engine.what_if(
//!     &PlayerId::new("3139477"),
//!     &TeamAbbr::new("BAL"),
//!     Season::new(2025),
//!     Week::new(5),
//! )?;
//!
//! if let Some(yards) = projection.pass_yds.projected {
//!     println!("projected passing yards: {yards}");
//! }
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod espn;
pub mod models;
pub mod projection;
pub mod storage;

// Re-export commonly used types
pub use cli::types::{PlayerId, Season, TeamAbbr, Week};
pub use error::{PropcastError, Result};
pub use models::output::{MetricProjection, QuickProjection, SeriesPrediction, WhatIfProjection};
pub use projection::{quick_projection, BlendWeights, ProjectionEngine};
pub use storage::StatsDatabase;
