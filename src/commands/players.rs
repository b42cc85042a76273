//! Players listing command implementation

use anyhow::Result;

use super::common::open_db;

/// Handle the players command
pub fn handle_players(as_json: bool) -> Result<()> {
    let db = open_db(as_json)?;
    let players = db.list_players()?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&players)?);
        return Ok(());
    }

    if players.is_empty() {
        println!("No players stored. Run 'propcast import gamelog' first.");
        return Ok(());
    }

    for p in &players {
        let position = p.position.as_deref().unwrap_or("-");
        let team = p.team.as_deref().unwrap_or("-");
        println!("{:<12} {:<4} {:<4} {}", p.player_id, position, team, p.name);
    }
    println!("{} player(s)", players.len());
    Ok(())
}
