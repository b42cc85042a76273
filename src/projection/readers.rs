//! Reader collaborators feeding the projection engine.
//!
//! The engine reads two historical feeds and nothing else. Both are injected
//! as traits so the engine can run against SQLite in production and against
//! in-memory fixtures in tests. A reader returning no rows is `Ok(None)` /
//! an empty `Vec`; a reader that *fails* returns `Err` — the two are never
//! conflated.

use crate::cli::types::{PlayerId, Season, TeamAbbr, Week};
use crate::error::Result;
use crate::storage::models::GameStat;
use serde::Serialize;

/// Season-to-date mean yards allowed by a defense, one value per metric.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AllowanceMeans {
    pub pass_yds: f64,
    pub rush_yds: f64,
    pub rec_yds: f64,
}

/// Ordered access to a player's game-by-game history.
pub trait PlayerHistoryReader {
    /// All of the player's games strictly before `before`, ascending by
    /// (season, week). `None` means the full career. The bound is exclusive
    /// and cross-season: `season < S OR (season = S AND week < W)`.
    fn player_history(
        &self,
        player: &PlayerId,
        before: Option<(Season, Week)>,
    ) -> Result<Vec<GameStat>>;
}

/// Point-in-time snapshots of a defense's allowances.
pub trait DefenseAllowanceReader {
    /// Mean allowances for `team` over all weeks of `season` strictly before
    /// `before_week`. `Ok(None)` when the team has no prior rows in that
    /// season — later weeks and other seasons never contribute.
    fn allowance_means(
        &self,
        team: &TeamAbbr,
        season: Season,
        before_week: Week,
    ) -> Result<Option<AllowanceMeans>>;
}
