//! Unit tests for gamelog request construction

use super::*;

#[test]
fn test_gamelog_request_url_and_season_query() {
    let client = Client::new();
    let req = gamelog_request(&client, "3139477", 2025).build().unwrap();

    assert_eq!(req.method(), reqwest::Method::GET);
    assert_eq!(req.url().host_str(), Some("site.web.api.espn.com"));
    assert_eq!(
        req.url().path(),
        "/apis/common/v3/sports/football/nfl/athletes/3139477/gamelog"
    );
    assert_eq!(req.url().query(), Some("season=2025"));
}

#[test]
fn test_gamelog_request_scopes_to_the_athlete() {
    let client = Client::new();
    let a = gamelog_request(&client, "12", 2024).build().unwrap();
    let b = gamelog_request(&client, "34", 2024).build().unwrap();
    assert_ne!(a.url().path(), b.url().path());
}
