use serde::Serialize;
use tabled::Table;

use crate::{
    ChartError, Res, charts, config, error,
    spotify::SpotifyClient,
    types::{AccessToken, ChartTableRow},
};

pub enum Lookup {
    Track(String),
    Features(String),
    Album(String),
    Chart(String),
}

pub async fn lookup(target: Lookup) {
    let credentials = match config::Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => error!("{}\nSet SPOTIFY_CID and SPOTIFY_SECRET.", e),
    };

    let client = SpotifyClient::from_env();
    let token = match client.request_token(&credentials).await {
        Ok(token) => token,
        Err(e) => error!("{}", e),
    };

    let output = match run(&client, &token, target).await {
        Ok(output) => output,
        Err(e) => error!("{}", e),
    };

    println!("{}", output);
}

async fn run(client: &SpotifyClient, token: &AccessToken, target: Lookup) -> Res<String> {
    match target {
        Lookup::Track(id) => pretty(&client.track(token, &id).await?),
        Lookup::Features(id) => pretty(&client.audio_features(token, &id).await?),
        Lookup::Album(id) => pretty(&client.album_track_ids(token, &id).await?),
        Lookup::Chart(country) => {
            let Some(playlist_id) = charts::playlist_for(&country) else {
                return Err(ChartError::Configuration(format!(
                    "no chart playlist for '{}', see `chartsnap countries`",
                    country
                )));
            };
            let entries = client.playlist_tracks(token, playlist_id).await?;
            let rows: Vec<ChartTableRow> = entries
                .iter()
                .enumerate()
                .map(|(i, entry)| ChartTableRow {
                    position: i + 1,
                    name: entry.track_name().unwrap_or("-").to_string(),
                    artists: entry.artist_names().join(", "),
                    added_at: entry.added_at().unwrap_or("-").to_string(),
                })
                .collect();
            Ok(Table::new(rows).to_string())
        }
    }
}

fn pretty<T: Serialize>(value: &T) -> Res<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
