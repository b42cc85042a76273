//! Row-level database operations and the projection reader implementations

use super::{models::*, schema::StatsDatabase};
use crate::cli::types::{PlayerId, Season, TeamAbbr, Week};
use crate::error::Result;
use crate::projection::readers::{AllowanceMeans, DefenseAllowanceReader, PlayerHistoryReader};
use rusqlite::{params, Row};

impl StatsDatabase {
    /// Insert or update a player's basic information
    pub fn upsert_player(&mut self, player: &Player) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO players (player_id, name, position, team, league, slug)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                player.player_id.as_str(),
                player.name,
                player.position,
                player.team,
                player.league,
                player.slug
            ],
        )?;
        Ok(())
    }

    /// Look a player up by id
    pub fn get_player(&self, player_id: &PlayerId) -> Result<Option<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, name, position, team, league, slug
             FROM players
             WHERE player_id = ?",
        )?;

        let result = stmt.query_row(params![player_id.as_str()], row_to_player);
        match result {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Look a player up by URL slug
    pub fn find_player_by_slug(&self, slug: &str) -> Result<Option<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, name, position, team, league, slug
             FROM players
             WHERE slug = ?",
        )?;

        let result = stmt.query_row(params![slug], row_to_player);
        match result {
            Ok(player) => Ok(Some(player)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// All stored players, name order
    pub fn list_players(&self) -> Result<Vec<Player>> {
        let mut stmt = self.conn.prepare(
            "SELECT player_id, name, position, team, league, slug
             FROM players
             ORDER BY name ASC",
        )?;

        let rows = stmt.query_map([], row_to_player)?;
        let mut players = Vec::new();
        for row in rows {
            players.push(row?);
        }
        Ok(players)
    }

    /// Replace a player's stats for one season with a fresh set of rows.
    ///
    /// Delete-then-reinsert by (player, season) inside a transaction: the
    /// importer's idempotent upsert. Re-running an import converges on the
    /// same rows rather than mutating history.
    pub fn replace_game_stats(
        &mut self,
        player_id: &PlayerId,
        season: Season,
        games: &[GameStat],
    ) -> Result<usize> {
        let tx = self.conn.transaction()?;
        tx.execute(
            "DELETE FROM game_stats WHERE player_id = ? AND season = ?",
            params![player_id.as_str(), season.as_u16()],
        )?;
        for g in games {
            tx.execute(
                "INSERT INTO game_stats
                 (player_id, season, week, opponent, opp_abbr,
                  pass_yds, rush_yds, rec_yds, pass_td, interceptions)
                 VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)",
                params![
                    g.player_id.as_str(),
                    g.season.as_u16(),
                    g.week.as_u16(),
                    g.opponent,
                    g.opp_abbr.as_ref().map(|t| t.as_str().to_string()),
                    g.pass_yds,
                    g.rush_yds,
                    g.rec_yds,
                    g.pass_td,
                    g.interceptions
                ],
            )?;
        }
        tx.commit()?;
        Ok(games.len())
    }

    /// Insert or update one week of defense allowances
    pub fn upsert_defense_week(&mut self, week: &DefenseWeek) -> Result<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO defense_stats
             (team_abbr, season, week, pass_yds_allowed, rush_yds_allowed, rec_yds_allowed)
             VALUES (?, ?, ?, ?, ?, ?)",
            params![
                week.team_abbr.as_str(),
                week.season.as_u16(),
                week.week.as_u16(),
                week.pass_yds_allowed,
                week.rush_yds_allowed,
                week.rec_yds_allowed
            ],
        )?;

        // Memoized means are stale once allowances change.
        if let Ok(mut cache) = self.allowance_cache.lock() {
            cache.clear();
        }
        Ok(())
    }
}

impl PlayerHistoryReader for StatsDatabase {
    fn player_history(
        &self,
        player: &PlayerId,
        before: Option<(Season, Week)>,
    ) -> Result<Vec<GameStat>> {
        let mut query = String::from(
            "SELECT player_id, season, week, opponent, opp_abbr,
                    pass_yds, rush_yds, rec_yds, pass_td, interceptions
             FROM game_stats
             WHERE player_id = ?",
        );

        let mut sql_params: Vec<Box<dyn rusqlite::ToSql>> =
            vec![Box::new(player.as_str().to_string())];

        if let Some((season, week)) = before {
            query.push_str(" AND (season < ? OR (season = ? AND week < ?))");
            sql_params.push(Box::new(season.as_u16()));
            sql_params.push(Box::new(season.as_u16()));
            sql_params.push(Box::new(week.as_u16()));
        }

        query.push_str(" ORDER BY season ASC, week ASC");

        let mut stmt = self.conn.prepare(&query)?;
        let param_refs: Vec<&dyn rusqlite::ToSql> = sql_params.iter().map(|p| p.as_ref()).collect();

        let rows = stmt.query_map(&param_refs[..], row_to_game_stat)?;
        let mut games = Vec::new();
        for row in rows {
            games.push(row?);
        }
        Ok(games)
    }
}

impl DefenseAllowanceReader for StatsDatabase {
    fn allowance_means(
        &self,
        team: &TeamAbbr,
        season: Season,
        before_week: Week,
    ) -> Result<Option<AllowanceMeans>> {
        let key = (team.clone(), season, before_week);
        if let Ok(mut cache) = self.allowance_cache.lock() {
            if let Some(cached) = cache.get(&key) {
                return Ok(*cached);
            }
        }

        let mut stmt = self.conn.prepare(
            "SELECT AVG(pass_yds_allowed), AVG(rush_yds_allowed), AVG(rec_yds_allowed)
             FROM defense_stats
             WHERE team_abbr = ? AND season = ? AND week < ?",
        )?;

        // AVG over zero rows is NULL; all three are NULL or none are.
        let means = stmt.query_row(
            params![team.as_str(), season.as_u16(), before_week.as_u16()],
            |row| {
                Ok((
                    row.get::<_, Option<f64>>(0)?,
                    row.get::<_, Option<f64>>(1)?,
                    row.get::<_, Option<f64>>(2)?,
                ))
            },
        )?;

        let result = match means {
            (Some(pass_yds), Some(rush_yds), Some(rec_yds)) => Some(AllowanceMeans {
                pass_yds,
                rush_yds,
                rec_yds,
            }),
            _ => None,
        };

        if let Ok(mut cache) = self.allowance_cache.lock() {
            cache.put(key, result);
        }
        Ok(result)
    }
}

fn row_to_player(row: &Row<'_>) -> rusqlite::Result<Player> {
    Ok(Player {
        player_id: PlayerId::new(row.get::<_, String>(0)?),
        name: row.get(1)?,
        position: row.get(2)?,
        team: row.get(3)?,
        league: row.get(4)?,
        slug: row.get(5)?,
    })
}

fn row_to_game_stat(row: &Row<'_>) -> rusqlite::Result<GameStat> {
    Ok(GameStat {
        player_id: PlayerId::new(row.get::<_, String>(0)?),
        season: Season::new(row.get(1)?),
        week: Week::new(row.get(2)?),
        opponent: row.get(3)?,
        opp_abbr: row.get::<_, Option<String>>(4)?.map(TeamAbbr::new),
        pass_yds: row.get(5)?,
        rush_yds: row.get(6)?,
        rec_yds: row.get(7)?,
        pass_td: row.get(8)?,
        interceptions: row.get(9)?,
    })
}
