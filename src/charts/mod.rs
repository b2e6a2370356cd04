//! # Charts Module
//!
//! Collects the chart playlist of every country in [`COUNTRY_CHARTS`] into a
//! single [`ChartSnapshot`] and hands it to the snapshot exporter.
//!
//! ## Run Semantics
//!
//! 1. **Token**: exactly one access token is requested per run and shared by
//!    every playlist request.
//! 2. **Fetch**: countries are fetched one at a time, in table order.
//! 3. **Abort**: the first failing fetch aborts the run. No partial snapshot
//!    is returned and nothing is written to disk.
//! 4. **Export**: only a complete snapshot is exported.

use std::path::{Path, PathBuf};

use crate::{
    Res,
    config::Credentials,
    info,
    management,
    spotify::SpotifyClient,
    types::{AccessToken, ChartSnapshot, TrackEntry},
};

mod table;

pub use table::COUNTRY_CHARTS;
pub use table::playlist_for;

/// Source of tokens and playlist listings used by [`collect_charts`].
#[allow(async_fn_in_trait)]
pub trait ChartSource {
    async fn access_token(&self, credentials: &Credentials) -> Res<AccessToken>;

    async fn playlist_tracks(
        &self,
        token: &AccessToken,
        playlist_id: &str,
    ) -> Res<Vec<TrackEntry>>;
}

impl ChartSource for SpotifyClient {
    async fn access_token(&self, credentials: &Credentials) -> Res<AccessToken> {
        self.request_token(credentials).await
    }

    async fn playlist_tracks(
        &self,
        token: &AccessToken,
        playlist_id: &str,
    ) -> Res<Vec<TrackEntry>> {
        SpotifyClient::playlist_tracks(self, token, playlist_id).await
    }
}

/// Fetches the chart of every country in `table`.
///
/// # Errors
///
/// Propagates the token error, or the first playlist error, unchanged.
pub async fn collect_charts<S: ChartSource>(
    source: &S,
    credentials: &Credentials,
    table: &[(&str, &str)],
) -> Res<ChartSnapshot> {
    let token = source.access_token(credentials).await?;

    let mut snapshot = ChartSnapshot::new();
    for (country, playlist_id) in table {
        info!("Getting Spotify chart for {}...", country);
        let entries = source.playlist_tracks(&token, playlist_id).await?;
        snapshot.insert(country.to_string(), entries);
    }

    Ok(snapshot)
}

/// Collects every chart in `table` and writes today's snapshot to `data_dir`.
///
/// Returns the path of the written file.
pub async fn collect_and_export<S: ChartSource>(
    source: &S,
    credentials: &Credentials,
    table: &[(&str, &str)],
    data_dir: &Path,
) -> Res<PathBuf> {
    let snapshot = collect_charts(source, credentials, table).await?;
    management::export_snapshot(snapshot, data_dir).await
}
