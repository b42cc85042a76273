use reqwest::{Client, RequestBuilder};

use crate::error::Result;
use crate::espn::types::GamelogResponse;

#[cfg(test)]
mod tests;

/// Base path for the ESPN public athlete API.
pub const ATHLETE_BASE_URL: &str =
    "https://site.web.api.espn.com/apis/common/v3/sports/football/nfl/athletes";

fn gamelog_request(client: &Client, athlete_id: &str, season: u16) -> RequestBuilder {
    let url = format!("{ATHLETE_BASE_URL}/{athlete_id}/gamelog");
    let params = [("season", season.to_string())];
    client.get(&url).query(&params)
}

/// Fetch one athlete's game-by-game log for a season.
pub async fn fetch_gamelog(
    client: &Client,
    athlete_id: &str,
    season: u16,
) -> Result<GamelogResponse> {
    let res = gamelog_request(client, athlete_id, season)
        .send()
        .await?
        .error_for_status()?
        .json::<GamelogResponse>()
        .await?;

    Ok(res)
}
