//! Import command implementations: ESPN gamelog fetch and defense-row loads

use anyhow::{Context, Result};
use std::path::Path;

use super::common::open_db;
use crate::cli::types::{PlayerId, Season};
use crate::espn::{gamelog_to_stats, http::fetch_gamelog, slugify};
use crate::storage::models::{DefenseWeek, Player};

/// Fetch a player's ESPN gamelog for one season and replace their stored
/// rows with it. Re-running converges on the same rows.
pub async fn handle_import_gamelog(
    athlete: String,
    name: String,
    season: Season,
    position: Option<String>,
    team: Option<String>,
) -> Result<()> {
    let player_id = PlayerId::new(athlete);

    println!("Fetching ESPN gamelog for {name} ({season})...");
    let client = reqwest::Client::new();
    let gamelog = fetch_gamelog(&client, player_id.as_str(), season.as_u16()).await?;
    let games = gamelog_to_stats(&player_id, season, &gamelog)?;

    let mut db = open_db(false)?;
    db.upsert_player(&Player {
        player_id: player_id.clone(),
        name: name.clone(),
        position,
        team,
        league: "nfl".to_string(),
        slug: slugify(&name),
    })?;
    let inserted = db.replace_game_stats(&player_id, season, &games)?;

    println!("Imported {inserted} game(s) for {name}.");
    Ok(())
}

/// Load normalized defense allowance rows from a JSON file.
///
/// The file is a JSON array of rows with team_abbr/season/week and the three
/// allowed-yardage totals; whatever produced it owns the normalization.
pub fn handle_import_defense(file: &Path) -> Result<()> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("failed to read {}", file.display()))?;
    let rows: Vec<DefenseWeek> = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not a JSON array of defense rows", file.display()))?;

    let mut db = open_db(false)?;
    for row in &rows {
        db.upsert_defense_week(row)?;
    }

    println!("Imported {} defense week(s).", rows.len());
    Ok(())
}
