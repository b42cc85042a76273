//! What-if command implementation

use anyhow::Result;

use super::common::{format_metric, open_db};
use crate::cli::MatchupQuery;
use crate::projection::ProjectionEngine;

/// Handle the what-if command: one data-driven matchup projection.
pub fn handle_what_if(query: MatchupQuery, as_json: bool) -> Result<()> {
    let db = open_db(as_json)?;

    let engine = ProjectionEngine::new(&db, &db)
        .with_weights(query.tuning.weights())
        .with_window(query.tuning.window);

    let projection = engine.what_if(&query.player, &query.opponent, query.season, query.week)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&projection)?);
        return Ok(());
    }

    println!(
        "Projection for {} vs {} ({} week {}):",
        query.player, query.opponent, query.season, query.week
    );
    println!("{}", format_metric("pass yds", &projection.pass_yds));
    println!("{}", format_metric("rush yds", &projection.rush_yds));
    println!("{}", format_metric("rec yds", &projection.rec_yds));
    Ok(())
}
