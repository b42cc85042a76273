//! Database schema and connection management

use crate::cli::types::{Season, TeamAbbr, Week};
use crate::error::{PropcastError, Result};
use crate::projection::readers::AllowanceMeans;
use dirs::cache_dir;
use lru::LruCache;
use rusqlite::Connection;
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Entries kept in the per-handle allowance memo. The series driver issues
/// one lookup per historical game, frequently repeating (team, season, week)
/// triples across players.
const ALLOWANCE_CACHE_CAPACITY: usize = 512;

/// Database connection manager for player and defense stats
pub struct StatsDatabase {
    pub(crate) conn: Connection,
    pub(crate) allowance_cache: Mutex<LruCache<(TeamAbbr, Season, Week), Option<AllowanceMeans>>>,
}

impl StatsDatabase {
    /// Open the default on-disk database under the user cache directory
    pub fn new() -> Result<Self> {
        Self::open(&Self::database_path()?)
    }

    /// Open a database at an explicit path, creating directories and tables
    /// as needed
    pub fn open(db_path: &Path) -> Result<Self> {
        if let Some(parent) = db_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(db_path)?;
        Self::from_connection(conn)
    }

    /// In-memory database for tests and throwaway runs
    pub fn new_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let cache_capacity =
            NonZeroUsize::new(ALLOWANCE_CACHE_CAPACITY).expect("capacity is non-zero");
        let mut db = Self {
            conn,
            allowance_cache: Mutex::new(LruCache::new(cache_capacity)),
        };
        db.initialize_schema()?;
        Ok(db)
    }

    /// Get the path to the database file
    fn database_path() -> Result<PathBuf> {
        let cache_dir = cache_dir().ok_or_else(|| PropcastError::Cache {
            message: "Could not determine cache directory".to_string(),
        })?;
        Ok(cache_dir.join("propcast").join("stats.db"))
    }

    /// Initialize the database schema
    pub(crate) fn initialize_schema(&mut self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS players (
                player_id TEXT PRIMARY KEY,
                name TEXT NOT NULL,
                position TEXT,
                team TEXT,
                league TEXT NOT NULL DEFAULT 'nfl',
                slug TEXT UNIQUE NOT NULL
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS game_stats (
                player_id TEXT NOT NULL,
                season INTEGER NOT NULL,
                week INTEGER NOT NULL,
                opponent TEXT,
                opp_abbr TEXT,
                pass_yds INTEGER NOT NULL DEFAULT 0,
                rush_yds INTEGER NOT NULL DEFAULT 0,
                rec_yds INTEGER NOT NULL DEFAULT 0,
                pass_td INTEGER NOT NULL DEFAULT 0,
                interceptions INTEGER NOT NULL DEFAULT 0,
                PRIMARY KEY (player_id, season, week),
                FOREIGN KEY (player_id) REFERENCES players(player_id)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS defense_stats (
                team_abbr TEXT NOT NULL,
                season INTEGER NOT NULL,
                week INTEGER NOT NULL,
                pass_yds_allowed INTEGER NOT NULL DEFAULT 0,
                rush_yds_allowed INTEGER NOT NULL DEFAULT 0,
                rec_yds_allowed INTEGER NOT NULL DEFAULT 0,
                PRIMARY KEY (team_abbr, season, week)
            )",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_game_stats_player
             ON game_stats(player_id, season, week)",
            [],
        )?;

        self.conn.execute(
            "CREATE INDEX IF NOT EXISTS idx_defense_team_week
             ON defense_stats(team_abbr, season, week)",
            [],
        )?;

        Ok(())
    }
}
