//! Weighted blending of player form with opponent allowances.

use serde::Serialize;


/// Weight applied to the player's own trailing mean.
pub const W_PLAYER: f64 = 0.6;

/// Weight applied to the opponent's allowance mean.
pub const W_OPP: f64 = 0.4;

/// Blend weights for the two projection components. Weights are expected to
/// sum to 1 but this is not enforced; callers overriding them own the
/// interpretation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlendWeights {
    pub player: f64,
    pub opponent: f64,
}

impl Default for BlendWeights {
    fn default() -> Self {
        Self {
            player: W_PLAYER,
            opponent: W_OPP,
        }
    }
}

impl BlendWeights {
    pub fn new(player: f64, opponent: f64) -> Self {
        Self { player, opponent }
    }
}

/// Combine a player trailing mean with an opponent allowance mean.
///
/// Null policy: when both sides are absent there is nothing to project and
/// the result is `None`. When exactly one side is absent it contributes
/// zero to the weighted sum and a number is still returned — partial
/// information yields a point estimate.
pub fn blend(
    player_mean: Option<f64>,
    opponent_mean: Option<f64>,
    weights: BlendWeights,
) -> Option<f64> {
    if player_mean.is_none() && opponent_mean.is_none() {
        return None;
    }
    Some(weights.player * player_mean.unwrap_or(0.0) + weights.opponent * opponent_mean.unwrap_or(0.0))
}
