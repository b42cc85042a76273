//! What-if queries and full-series prediction over the two reader feeds.

use rayon::prelude::*;

use super::blend::{blend, BlendWeights};
use super::readers::{AllowanceMeans, DefenseAllowanceReader, PlayerHistoryReader};
use super::trailing::{trailing_average, TRAILING_WINDOW};
use crate::cli::types::{PlayerId, Season, TeamAbbr, Week};
use crate::error::{PropcastError, Result};
use crate::models::output::{MetricProjection, SeriesPrediction, WhatIfProjection};
use crate::storage::models::GameStat;


/// Defense-adjusted projection engine.
///
/// Holds its two reader collaborators by reference; owns no persistent
/// state, so independent invocations need no coordination.
pub struct ProjectionEngine<'a, H, D> {
    history: &'a H,
    defense: &'a D,
    weights: BlendWeights,
    window: usize,
}

impl<'a, H, D> ProjectionEngine<'a, H, D>
where
    H: PlayerHistoryReader,
    D: DefenseAllowanceReader,
{
    pub fn new(history: &'a H, defense: &'a D) -> Self {
        Self {
            history,
            defense,
            weights: BlendWeights::default(),
            window: TRAILING_WINDOW,
        }
    }

    pub fn with_weights(mut self, weights: BlendWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Override the trailing window. A window of 0 is clamped to 1.
    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window.max(1);
        self
    }

    /// Project one hypothetical game: `player` facing `opponent` in the
    /// given week.
    ///
    /// The player side is the trailing mean over the player's full
    /// cross-season history before (season, week); the opponent side is the
    /// defense's mean allowance over earlier weeks of the same season only.
    /// Output is rounded to whole yards.
    pub fn what_if(
        &self,
        player: &PlayerId,
        opponent: &TeamAbbr,
        season: Season,
        week: Week,
    ) -> Result<WhatIfProjection> {
        if player.is_empty() {
            return Err(PropcastError::MissingPlayerId);
        }
        if opponent.is_empty() {
            return Err(PropcastError::MissingTeam);
        }
        if week.as_u16() < 1 {
            return Err(PropcastError::InvalidWeek {
                week: week.as_u16(),
            });
        }

        let games = self.history.player_history(player, Some((season, week)))?;
        let (pass_hist, rush_hist, rec_hist) = metric_histories(&games);

        let allowance = self.defense.allowance_means(opponent, season, week)?;

        Ok(WhatIfProjection {
            pass_yds: self.project_metric(&pass_hist, allowance.map(|a| a.pass_yds)),
            rush_yds: self.project_metric(&rush_hist, allowance.map(|a| a.rush_yds)),
            rec_yds: self.project_metric(&rec_hist, allowance.map(|a| a.rec_yds)),
        })
    }

    /// Project every game already on the player's record, for overlaying
    /// predicted-vs-actual on a chart.
    ///
    /// Each game is predicted from history strictly before it: the first
    /// game sees an empty trailing window, and a game's own line never
    /// enters its own prediction. Allowance lookups are materialized
    /// up front in chronological order; the blend phase is then pure over
    /// fixed prefixes and runs in parallel.
    pub fn predict_series(&self, player: &PlayerId) -> Result<SeriesPrediction> {
        if player.is_empty() {
            return Err(PropcastError::MissingPlayerId);
        }

        let games = self.history.player_history(player, None)?;

        let mut allowances: Vec<Option<AllowanceMeans>> = Vec::with_capacity(games.len());
        for g in &games {
            let a = match &g.opp_abbr {
                Some(opp) => self.defense.allowance_means(opp, g.season, g.week)?,
                None => None,
            };
            allowances.push(a);
        }

        let (pass_hist, rush_hist, rec_hist) = metric_histories(&games);
        let weeks: Vec<u16> = games.iter().map(|g| g.week.as_u16()).collect();

        // The readers stay out of this closure (a SQLite handle is not
        // Sync); only copied parameters and the materialized history cross
        // into the parallel phase.
        let weights = self.weights;
        let window = self.window;
        let rows: Vec<(u16, Option<i64>, Option<i64>, Option<i64>)> = (0..games.len())
            .into_par_iter()
            .map(|i| {
                let a = allowances[i];
                // Prefix excludes index i: strict look-back.
                let pass = blend_whole(&pass_hist[..i], a.map(|a| a.pass_yds), weights, window);
                let rush = blend_whole(&rush_hist[..i], a.map(|a| a.rush_yds), weights, window);
                let rec = blend_whole(&rec_hist[..i], a.map(|a| a.rec_yds), weights, window);
                (weeks[i], pass, rush, rec)
            })
            .collect();

        let mut series = SeriesPrediction::default();
        for (week, pass, rush, rec) in rows {
            if let Some(v) = pass {
                series.pass_yds.insert(week, v);
            }
            if let Some(v) = rush {
                series.rush_yds.insert(week, v);
            }
            if let Some(v) = rec {
                series.rec_yds.insert(week, v);
            }
        }
        Ok(series)
    }

    fn project_metric(&self, history: &[f64], opponent_mean: Option<f64>) -> MetricProjection {
        let player_mean = trailing_average(history, self.window);
        let projected = blend(player_mean, opponent_mean, self.weights).map(round_whole);
        MetricProjection {
            projected,
            player_mean,
            opponent_mean,
        }
    }
}

fn blend_whole(
    history: &[f64],
    opponent_mean: Option<f64>,
    weights: BlendWeights,
    window: usize,
) -> Option<i64> {
    let player_mean = trailing_average(history, window);
    blend(player_mean, opponent_mean, weights).map(round_whole)
}

/// Split games into per-metric value sequences, preserving order.
fn metric_histories(games: &[GameStat]) -> (Vec<f64>, Vec<f64>, Vec<f64>) {
    let pass = games.iter().map(|g| g.pass_yds as f64).collect();
    let rush = games.iter().map(|g| g.rush_yds as f64).collect();
    let rec = games.iter().map(|g| g.rec_yds as f64).collect();
    (pass, rush, rec)
}

fn round_whole(v: f64) -> i64 {
    v.round() as i64
}
