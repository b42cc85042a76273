//! CLI argument definitions and parsing.

pub mod types;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::projection::{BlendWeights, TRAILING_WINDOW, W_OPP, W_PLAYER};
use types::{PlayerId, Season, TeamAbbr, Week};

#[derive(Debug, Parser)]
#[clap(name = "propcast", about = "Defense-adjusted NFL player stat projections")]
pub struct Propcast {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List stored players.
    Players {
        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Project one hypothetical matchup from stored history.
    ///
    /// Blends the player's trailing-form means with the opponent's
    /// season-to-date allowances, using only games before the target week.
    WhatIf {
        #[clap(flatten)]
        query: MatchupQuery,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Rank-based projection from a baseline; needs no stored history.
    Quick {
        /// Player per-game baseline for the metric.
        #[clap(long, short)]
        baseline: f64,

        /// Opponent defense percentile in [0, 100].
        #[clap(long, short)]
        opp_defense: f64,

        /// Manual adjustment percentage (e.g. -10 knocks off ten percent).
        #[clap(long, short, allow_hyphen_values = true)]
        adjustment: Option<f64>,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Predict every game on a player's record, for predicted-vs-actual charts.
    Series {
        /// Player id.
        #[clap(long, short)]
        player: PlayerId,

        #[clap(flatten)]
        tuning: BlendTuning,

        /// Output results as JSON instead of text lines.
        #[clap(long)]
        json: bool,
    },

    /// Load data into the local database.
    Import {
        #[clap(subcommand)]
        cmd: ImportCmd,
    },
}

/// Arguments identifying a single what-if matchup.
#[derive(Debug, Args)]
pub struct MatchupQuery {
    /// Player id.
    #[clap(long, short)]
    pub player: PlayerId,

    /// Opponent team abbreviation, e.g. BAL.
    #[clap(long, short)]
    pub opponent: TeamAbbr,

    /// Season year (e.g. 2025).
    #[clap(long, short, default_value_t = Season::default())]
    pub season: Season,

    /// Target week within the season.
    #[clap(long, short, default_value_t = Week::default())]
    pub week: Week,

    #[clap(flatten)]
    pub tuning: BlendTuning,
}

/// Blend parameters shared by the projection commands.
#[derive(Debug, Args)]
pub struct BlendTuning {
    /// Weight on the player's trailing mean.
    #[clap(long, default_value_t = W_PLAYER)]
    pub player_weight: f64,

    /// Weight on the opponent allowance mean.
    #[clap(long, default_value_t = W_OPP)]
    pub opp_weight: f64,

    /// Trailing window size in games.
    #[clap(long, default_value_t = TRAILING_WINDOW)]
    pub window: usize,
}

impl BlendTuning {
    pub fn weights(&self) -> BlendWeights {
        BlendWeights::new(self.player_weight, self.opp_weight)
    }
}

#[derive(Debug, Subcommand)]
pub enum ImportCmd {
    /// Fetch a player's ESPN gamelog and replace their rows for the season.
    Gamelog {
        /// ESPN athlete id.
        #[clap(long, short)]
        athlete: String,

        /// Player display name for the stored player row.
        #[clap(long, short)]
        name: String,

        /// Season year to import.
        #[clap(long, short, default_value_t = Season::default())]
        season: Season,

        /// Player position, e.g. QB.
        #[clap(long)]
        position: Option<String>,

        /// Player's own team abbreviation.
        #[clap(long)]
        team: Option<String>,
    },

    /// Load normalized defense allowance rows from a JSON file.
    Defense {
        /// Path to a JSON array of allowance rows.
        #[clap(long, short)]
        file: PathBuf,
    },
}
