//! Type-safe wrappers for player, team, and schedule identifiers.

pub mod ids;
pub mod time;

pub use ids::{PlayerId, TeamAbbr};
pub use time::{Season, Week};
