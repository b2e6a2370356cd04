//! # Spotify Integration Module
//!
//! This module is the thin HTTP layer between the chart pipeline and the
//! Spotify Web API. It covers the client-credentials token exchange and the
//! handful of read endpoints the tool needs.
//!
//! ## Architecture
//!
//! ```text
//! Application Layer (CLI, Charts)
//!          ↓
//! Spotify Integration Layer
//!     ├── Authentication (client credentials)
//!     ├── Playlists (chart track listings)
//!     ├── Tracks (track details, audio features)
//!     └── Albums (album track ids)
//!          ↓
//! HTTP Layer (reqwest, JSON)
//!          ↓
//! Spotify Web API
//! ```
//!
//! ## API Coverage
//!
//! - `POST /api/token` - client-credentials token exchange
//! - `GET /playlists/{id}/tracks` - first page of a playlist, filtered fields
//! - `GET /tracks/{id}` - track details
//! - `GET /audio-features/{id}` - audio features of a track
//! - `GET /albums/{id}/tracks` - first page of an album's track listing
//!
//! ## Error Handling
//!
//! Every call is made exactly once. Token failures surface as
//! [`ChartError::Authentication`], everything else as [`ChartError::Fetch`].
//! There is no retry, no rate-limit handling and no pagination.
//!
//! ## Configuration Integration
//!
//! [`SpotifyClient::from_env`] takes the base URLs from [`crate::config`];
//! [`SpotifyClient::new`] accepts them directly so a mock server can stand in
//! for Spotify.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{ChartError, Res, config, types::AccessToken};

pub mod albums;
pub mod auth;
pub mod playlists;
pub mod tracks;

/// Spotify Web API client bound to a pair of base URLs.
#[derive(Debug, Clone)]
pub struct SpotifyClient {
    http: Client,
    api_url: String,
    token_url: String,
}

impl SpotifyClient {
    pub fn new(api_url: impl Into<String>, token_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: api_url.into().trim_end_matches('/').to_string(),
            token_url: token_url.into(),
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::spotify_apiurl(), config::spotify_apitoken_url())
    }

    /// Issues one authenticated GET and decodes the JSON body.
    ///
    /// Transport errors, non-success statuses and bodies that do not match
    /// `T` all map to [`ChartError::Fetch`] labelled with `resource`.
    async fn get_json<T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        path: &str,
        query: &[(&str, &str)],
        resource: &str,
    ) -> Res<T> {
        let api_url = format!("{uri}{path}", uri = self.api_url, path = path);

        let response = self
            .http
            .get(&api_url)
            .bearer_auth(token.as_str())
            .query(query)
            .send()
            .await
            .map_err(|e| ChartError::fetch(resource, e))?;

        let response = response
            .error_for_status()
            .map_err(|e| ChartError::fetch(resource, e))?;

        response
            .json::<T>()
            .await
            .map_err(|e| ChartError::fetch(resource, e))
    }
}
