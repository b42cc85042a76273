//! Error types for the propcast CLI

use thiserror::Error;

pub type Result<T> = std::result::Result<T, PropcastError>;

#[derive(Error, Debug)]
pub enum PropcastError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("database error: {0}")]
    Storage(#[from] rusqlite::Error),

    #[error("player identifier must not be empty")]
    MissingPlayerId,

    #[error("team abbreviation must not be empty")]
    MissingTeam,

    #[error("week must be >= 1, got {week}")]
    InvalidWeek { week: u16 },

    #[error("player not found: {id}")]
    PlayerNotFound { id: String },

    #[error("no gamelog data for athlete {athlete_id} in season {season}")]
    NoGamelog { athlete_id: String, season: u16 },

    #[error("cache error: {message}")]
    Cache { message: String },
}

#[cfg(test)]
mod tests;
