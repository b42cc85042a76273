//! Integration tests for the storage layer through the public API

use propcast::{
    projection::readers::{DefenseAllowanceReader, PlayerHistoryReader},
    storage::{DefenseWeek, GameStat, Player, StatsDatabase},
    PlayerId, Season, TeamAbbr, Week,
};

fn create_test_db() -> StatsDatabase {
    StatsDatabase::new_in_memory().unwrap()
}

fn mahomes() -> Player {
    Player {
        player_id: PlayerId::new("3139477"),
        name: "Patrick Mahomes".to_string(),
        position: Some("QB".to_string()),
        team: Some("KC".to_string()),
        league: "nfl".to_string(),
        slug: "patrick-mahomes".to_string(),
    }
}

fn game(week: u16, opp: &str, pass: u32, rush: u32) -> GameStat {
    GameStat {
        player_id: PlayerId::new("3139477"),
        season: Season::new(2024),
        week: Week::new(week),
        opponent: Some(format!("vs {opp}")),
        opp_abbr: Some(TeamAbbr::new(opp)),
        pass_yds: pass,
        rush_yds: rush,
        rec_yds: 0,
        pass_td: 0,
        interceptions: 0,
    }
}

#[test]
fn test_open_at_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("stats.db");

    let mut db = StatsDatabase::open(&path).unwrap();
    db.upsert_player(&mahomes()).unwrap();
    drop(db);

    // Reopening sees the same rows.
    let db = StatsDatabase::open(&path).unwrap();
    let found = db.get_player(&PlayerId::new("3139477")).unwrap().unwrap();
    assert_eq!(found.name, "Patrick Mahomes");
}

#[test]
fn test_full_round_trip_for_projection_inputs() {
    let mut db = create_test_db();
    db.upsert_player(&mahomes()).unwrap();
    db.replace_game_stats(
        &PlayerId::new("3139477"),
        Season::new(2024),
        &[game(1, "BAL", 291, 12), game(2, "CIN", 151, 30)],
    )
    .unwrap();
    db.upsert_defense_week(&DefenseWeek {
        team_abbr: TeamAbbr::new("LAC"),
        season: Season::new(2024),
        week: Week::new(1),
        pass_yds_allowed: 220,
        rush_yds_allowed: 95,
        rec_yds_allowed: 180,
    })
    .unwrap();

    let history = db.player_history(&PlayerId::new("3139477"), None).unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].opp_abbr, Some(TeamAbbr::new("BAL")));

    let means = db
        .allowance_means(&TeamAbbr::new("LAC"), Season::new(2024), Week::new(2))
        .unwrap()
        .unwrap();
    assert_eq!(means.pass_yds, 220.0);
    assert_eq!(means.rush_yds, 95.0);
    assert_eq!(means.rec_yds, 180.0);
}

#[test]
fn test_history_for_unknown_player_is_empty_not_error() {
    let db = create_test_db();
    let history = db.player_history(&PlayerId::new("ghost"), None).unwrap();
    assert!(history.is_empty());
}

#[test]
fn test_allowance_for_unknown_team_is_none_not_error() {
    let db = create_test_db();
    let means = db
        .allowance_means(&TeamAbbr::new("XYZ"), Season::new(2024), Week::new(10))
        .unwrap();
    assert!(means.is_none());
}

#[test]
fn test_team_abbr_join_is_case_insensitive() {
    let mut db = create_test_db();
    db.upsert_defense_week(&DefenseWeek {
        team_abbr: TeamAbbr::new("bal"),
        season: Season::new(2024),
        week: Week::new(1),
        pass_yds_allowed: 200,
        rush_yds_allowed: 100,
        rec_yds_allowed: 150,
    })
    .unwrap();

    // Stored uppercase, queried uppercase regardless of input case.
    let means = db
        .allowance_means(&TeamAbbr::new("BaL"), Season::new(2024), Week::new(2))
        .unwrap();
    assert!(means.is_some());
}

#[test]
fn test_find_by_slug_round_trip() {
    let mut db = create_test_db();
    db.upsert_player(&mahomes()).unwrap();

    let found = db.find_player_by_slug("patrick-mahomes").unwrap().unwrap();
    assert_eq!(found.player_id, PlayerId::new("3139477"));
}
