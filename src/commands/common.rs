//! Helpers shared across command implementations.

use anyhow::{Context, Result};

use crate::models::output::MetricProjection;
use crate::storage::StatsDatabase;

/// Open the local database, with a status line unless JSON output was asked for.
pub fn open_db(as_json: bool) -> Result<StatsDatabase> {
    if !as_json {
        println!("Connecting to database...");
    }
    StatsDatabase::new().context("failed to open the propcast database")
}

/// One text line per metric: projection plus the component means behind it.
pub fn format_metric(label: &str, metric: &MetricProjection) -> String {
    let projected = match metric.projected {
        Some(v) => v.to_string(),
        None => "no data".to_string(),
    };
    format!(
        "{label:>8}: {projected:>8}  (player {}, opponent {})",
        format_mean(metric.player_mean),
        format_mean(metric.opponent_mean)
    )
}

fn format_mean(mean: Option<f64>) -> String {
    match mean {
        Some(v) => format!("{v:.1}"),
        None => "-".to_string(),
    }
}
