//! Entry point: parse CLI and dispatch to command handlers.

use anyhow::Result;
use clap::Parser;
use propcast::{
    cli::{Commands, ImportCmd, Propcast},
    commands::{
        import_stats::{handle_import_defense, handle_import_gamelog},
        players::handle_players,
        quick::handle_quick,
        series::handle_series,
        what_if::handle_what_if,
    },
};

/// Run the CLI.
#[tokio::main]
async fn main() -> Result<()> {
    let app = Propcast::parse();

    match app.command {
        Commands::Players { json } => handle_players(json)?,

        Commands::WhatIf { query, json } => handle_what_if(query, json)?,

        Commands::Quick {
            baseline,
            opp_defense,
            adjustment,
            json,
        } => handle_quick(baseline, opp_defense, adjustment, json)?,

        Commands::Series {
            player,
            tuning,
            json,
        } => handle_series(player, tuning, json)?,

        Commands::Import { cmd } => match cmd {
            ImportCmd::Gamelog {
                athlete,
                name,
                season,
                position,
                team,
            } => handle_import_gamelog(athlete, name, season, position, team).await?,

            ImportCmd::Defense { file } => handle_import_defense(&file)?,
        },
    }

    Ok(())
}
