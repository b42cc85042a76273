//! Defense-adjusted projection engine.
//!
//! This module is the algorithmic core of the crate. It combines a player's
//! recent-form trailing averages with the opponent's season-to-date yards
//! allowed into blended per-metric projections:
//!
//! - [`trailing::trailing_average`]: mean of the most recent N games.
//! - [`blend::blend`]: weighted player/opponent combination with the
//!   null-propagation policy (partial information still yields a number,
//!   full absence yields none).
//! - [`engine::ProjectionEngine`]: single what-if queries and whole-career
//!   prediction series, fed by two injected reader collaborators.
//! - [`quick`]: the rank-based fallback mode requiring no history at all.
//!
//! The engine owns no persistence and no shared state; every invocation is
//! independent given its readers.

pub mod blend;
pub mod engine;
pub mod quick;
pub mod readers;
pub mod trailing;

pub use blend::{blend, BlendWeights, W_OPP, W_PLAYER};
pub use engine::ProjectionEngine;
pub use quick::quick_projection;
pub use readers::{AllowanceMeans, DefenseAllowanceReader, PlayerHistoryReader};
pub use trailing::{trailing_average, TRAILING_WINDOW};
