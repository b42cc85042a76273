//! Serde models for the ESPN athlete gamelog payload.
//!
//! The gamelog endpoint returns one flat list of stat labels partitioned by
//! `categories` (passing, rushing, receiving, ...), per-event stat rows as
//! strings aligned with those labels, and an `events` map carrying week and
//! opponent metadata per game.

use serde::Deserialize;
use std::collections::HashMap;

#[derive(Debug, Clone, Deserialize)]
pub struct GamelogResponse {
    /// Flat stat labels across all categories, e.g. `["CMP","ATT","YDS",...]`.
    #[serde(default)]
    pub labels: Vec<String>,
    /// Category spans partitioning `labels` in order.
    #[serde(default)]
    pub categories: Vec<GamelogCategory>,
    /// Event id -> game metadata.
    #[serde(default)]
    pub events: HashMap<String, GamelogEvent>,
    #[serde(rename = "seasonTypes", default)]
    pub season_types: Vec<SeasonType>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GamelogCategory {
    pub name: String,
    pub count: usize,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GamelogEvent {
    #[serde(default)]
    pub week: Option<u16>,
    /// "vs" or "@" marker for the display string.
    #[serde(rename = "atVs", default)]
    pub at_vs: Option<String>,
    #[serde(default)]
    pub opponent: Option<EventOpponent>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventOpponent {
    #[serde(default)]
    pub abbreviation: Option<String>,
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonType {
    #[serde(rename = "displayName", default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub categories: Vec<SeasonTypeCategory>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SeasonTypeCategory {
    /// "event" groups carry per-game rows; "total" groups are aggregates we skip.
    #[serde(rename = "type", default)]
    pub category_type: Option<String>,
    #[serde(default)]
    pub events: Vec<EventStats>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct EventStats {
    #[serde(rename = "eventId")]
    pub event_id: String,
    /// Stat values as strings, aligned with the flat label list.
    #[serde(default)]
    pub stats: Vec<String>,
}
