//! Rank-based quick projection: no history, no readers.

use crate::models::output::QuickProjection;

#[cfg(test)]
mod tests;

/// Project a metric from a per-game baseline and an opponent defense
/// percentile in [0, 100], with an optional manual adjustment percentage.
///
/// The defense factor is linear in the percentile, spanning 0.85 (toughest)
/// to 1.15 (weakest); a percentile of exactly 0 falls outside the `> 0`
/// guard and applies no factor at all. The result is rounded to one decimal
/// place, unlike the whole-yard rounding of the data-driven modes.
pub fn quick_projection(baseline: f64, opp_defense: f64, adjustment: Option<f64>) -> QuickProjection {
    let defense_factor = if opp_defense > 0.0 {
        1.15 - opp_defense.clamp(0.0, 100.0) / 100.0 * 0.30
    } else {
        1.0
    };
    let adjustment_factor = match adjustment {
        Some(pct) => 1.0 + pct / 100.0,
        None => 1.0,
    };

    QuickProjection {
        projection: round_tenth(baseline * defense_factor * adjustment_factor),
        defense_factor,
        adjustment_factor,
    }
}

fn round_tenth(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}
