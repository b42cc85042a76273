//! ESPN gamelog import: fetch and normalization.

pub mod http;
pub mod types;


use crate::cli::types::{PlayerId, Season, TeamAbbr, Week};
use crate::error::{PropcastError, Result};
use crate::storage::models::GameStat;
use types::GamelogResponse;

/// Normalize a gamelog payload into per-game stat rows, ascending by week.
///
/// Stat values arrive as strings aligned with a flat label list that the
/// `categories` spans partition; yards/touchdowns/interceptions are pulled
/// out of their category slice by label and coerced with a 0 default.
/// Events without week metadata are dropped. Errors only when the payload
/// contains no usable games at all.
pub fn gamelog_to_stats(
    player_id: &PlayerId,
    season: Season,
    gamelog: &GamelogResponse,
) -> Result<Vec<GameStat>> {
    let spans = category_spans(gamelog);
    let mut rows = Vec::new();

    for season_type in &gamelog.season_types {
        for category in &season_type.categories {
            if category.category_type.as_deref() != Some("event") {
                continue;
            }
            for event in &category.events {
                let Some(meta) = gamelog.events.get(&event.event_id) else {
                    continue;
                };
                let Some(week) = meta.week else {
                    continue;
                };

                let opp_abbr = meta
                    .opponent
                    .as_ref()
                    .and_then(|o| o.abbreviation.as_deref())
                    .map(TeamAbbr::new);
                let opponent = opp_abbr.as_ref().map(|abbr| {
                    let marker = meta.at_vs.as_deref().unwrap_or("vs");
                    format!("{} {}", marker.trim(), abbr)
                });

                let stat = |cat: &str, label: &str| -> f64 {
                    stat_by_label(gamelog, &spans, &event.stats, cat, label)
                };

                rows.push(GameStat {
                    player_id: player_id.clone(),
                    season,
                    week: Week::new(week),
                    opponent,
                    opp_abbr,
                    pass_yds: non_negative(stat("passing", "YDS")),
                    rush_yds: non_negative(stat("rushing", "YDS")),
                    rec_yds: non_negative(stat("receiving", "YDS")),
                    pass_td: non_negative(stat("passing", "TD")),
                    interceptions: non_negative(stat("passing", "INT")),
                });
            }
        }
    }

    if rows.is_empty() {
        return Err(PropcastError::NoGamelog {
            athlete_id: player_id.to_string(),
            season: season.as_u16(),
        });
    }

    rows.sort_by_key(|g| g.week);
    Ok(rows)
}

/// URL slug for a player name: lowercase, non-alphanumerics collapsed to `-`.
pub fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

/// (offset, count) of each category's slice of the flat label list.
fn category_spans(gamelog: &GamelogResponse) -> Vec<(String, usize, usize)> {
    let mut spans = Vec::with_capacity(gamelog.categories.len());
    let mut offset = 0;
    for category in &gamelog.categories {
        spans.push((category.name.clone(), offset, category.count));
        offset += category.count;
    }
    spans
}

fn stat_by_label(
    gamelog: &GamelogResponse,
    spans: &[(String, usize, usize)],
    stats: &[String],
    category: &str,
    label: &str,
) -> f64 {
    let Some(&(_, offset, count)) = spans.iter().find(|(name, _, _)| name == category) else {
        return 0.0;
    };
    let end = (offset + count).min(gamelog.labels.len());
    // Spans come from `categories` and may outrun a truncated label list.
    let Some(labels) = gamelog.labels.get(offset..end) else {
        return 0.0;
    };
    let Some(pos) = labels.iter().position(|l| l == label) else {
        return 0.0;
    };
    stats.get(offset + pos).map(|s| coerce_stat(s)).unwrap_or(0.0)
}

/// Parse a display stat value ("1,024", "-3", "--") into a number, 0 when
/// nothing numeric survives.
fn coerce_stat(raw: &str) -> f64 {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.' || *c == '-')
        .collect();
    cleaned.parse().unwrap_or(0.0)
}

/// Stat columns are stored as non-negative integers; negative display
/// values (yardage losses) floor at 0.
fn non_negative(v: f64) -> u32 {
    v.max(0.0).round() as u32
}
