//! Output models used for printing and JSON serialization.

use serde::Serialize;
use std::collections::BTreeMap;

/// Projection for a single metric, with the intermediate component means
/// kept for transparency.
///
/// `projected` is `None` only when both components were absent; a lone
/// component still yields a number per the blend policy.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct MetricProjection {
    /// Blended projection, rounded to the nearest whole yard.
    pub projected: Option<i64>,
    /// Player trailing-window mean feeding the blend.
    pub player_mean: Option<f64>,
    /// Opponent season-to-date allowance mean feeding the blend.
    pub opponent_mean: Option<f64>,
}

/// Result of a single data-driven what-if query.
#[derive(Debug, Clone, Serialize)]
pub struct WhatIfProjection {
    pub pass_yds: MetricProjection,
    pub rush_yds: MetricProjection,
    pub rec_yds: MetricProjection,
}

/// Predicted-vs-actual overlay data: week number to predicted whole yards,
/// one map per metric. Weeks where neither component had data are omitted.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SeriesPrediction {
    pub pass_yds: BTreeMap<u16, i64>,
    pub rush_yds: BTreeMap<u16, i64>,
    pub rec_yds: BTreeMap<u16, i64>,
}

impl SeriesPrediction {
    pub fn is_empty(&self) -> bool {
        self.pass_yds.is_empty() && self.rush_yds.is_empty() && self.rec_yds.is_empty()
    }
}

/// Result of the rank-based quick mode, echoing the factors applied.
#[derive(Debug, Clone, Copy, Serialize)]
pub struct QuickProjection {
    /// Final projection, rounded to one decimal place.
    pub projection: f64,
    pub defense_factor: f64,
    pub adjustment_factor: f64,
}
