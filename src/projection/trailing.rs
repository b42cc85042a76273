//! Trailing-window averages over chronological stat sequences.


/// Default number of recent games contributing to a player's form estimate.
pub const TRAILING_WINDOW: usize = 3;

/// Mean of the most recent `window` values in a chronological sequence
/// (oldest first). When fewer than `window` values exist, averages over
/// however many there are. Returns `None` for an empty sequence: absence of
/// history is data, not an error.
pub fn trailing_average(values: &[f64], window: usize) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let take = window.min(values.len());
    let tail = &values[values.len() - take..];
    Some(tail.iter().sum::<f64>() / take as f64)
}
