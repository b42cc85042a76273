//! Data models for the storage layer

use crate::cli::types::{PlayerId, Season, TeamAbbr, Week};
use serde::{Deserialize, Serialize};

/// Player information stored in the database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    pub player_id: PlayerId,
    pub name: String,
    pub position: Option<String>,
    pub team: Option<String>,
    pub league: String,
    pub slug: String,
}

/// One player's line for one game. Unique per (player, season, week);
/// history is append-only — the importer replaces by key rather than
/// mutating rows in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameStat {
    pub player_id: PlayerId,
    pub season: Season,
    pub week: Week,
    /// Display form, e.g. "vs BAL" or "@ CIN".
    pub opponent: Option<String>,
    /// Join key against defense allowances. Rows without one get no
    /// opponent side in projections.
    pub opp_abbr: Option<TeamAbbr>,
    pub pass_yds: u32,
    pub rush_yds: u32,
    pub rec_yds: u32,
    pub pass_td: u32,
    pub interceptions: u32,
}

/// Yards a defense conceded in a single week. Not a running average;
/// aggregation happens at query time with an exclusive week bound.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DefenseWeek {
    pub team_abbr: TeamAbbr,
    pub season: Season,
    pub week: Week,
    pub pass_yds_allowed: u32,
    pub rush_yds_allowed: u32,
    pub rec_yds_allowed: u32,
}
