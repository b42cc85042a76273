//! Full-series prediction command implementation

use anyhow::Result;
use std::collections::BTreeMap;

use super::common::open_db;
use crate::cli::types::PlayerId;
use crate::cli::BlendTuning;
use crate::error::PropcastError;
use crate::projection::ProjectionEngine;

/// Handle the series command: predict every game on a player's record.
pub fn handle_series(player: PlayerId, tuning: BlendTuning, as_json: bool) -> Result<()> {
    let db = open_db(as_json)?;

    if db.get_player(&player)?.is_none() {
        return Err(PropcastError::PlayerNotFound {
            id: player.to_string(),
        }
        .into());
    }

    let engine = ProjectionEngine::new(&db, &db)
        .with_weights(tuning.weights())
        .with_window(tuning.window);

    let series = engine.predict_series(&player)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    if series.is_empty() {
        println!("No predictions for {player}: not enough stored history.");
        return Ok(());
    }

    print_metric("pass yds", &series.pass_yds);
    print_metric("rush yds", &series.rush_yds);
    print_metric("rec yds", &series.rec_yds);
    Ok(())
}

fn print_metric(label: &str, by_week: &BTreeMap<u16, i64>) {
    if by_week.is_empty() {
        return;
    }
    println!("{label}:");
    for (week, value) in by_week {
        println!("  week {week:>2}: {value}");
    }
}
