use std::path::PathBuf;

use crate::{charts, config, error, spotify::SpotifyClient, success};

pub async fn export(data_dir: Option<PathBuf>) {
    let credentials = match config::Credentials::from_env() {
        Ok(credentials) => credentials,
        Err(e) => error!("{}\nSet SPOTIFY_CID and SPOTIFY_SECRET.", e),
    };

    let data_dir = data_dir.unwrap_or_else(config::data_dir);
    let client = SpotifyClient::from_env();

    match charts::collect_and_export(&client, &credentials, charts::COUNTRY_CHARTS, &data_dir)
        .await
    {
        Ok(path) => success!("Exported data to {}", path.display()),
        Err(e) => error!("{}", e),
    }
}
