//! Configuration management for the chart snapshot tool.
//!
//! This module handles loading and accessing configuration values from
//! environment variables and `.env` files: the Spotify client credentials, the
//! API endpoints and the directory snapshots are written to.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the current working directory
//! 4. Application defaults (where applicable)

use std::{env, fmt, path::PathBuf};

use crate::{ChartError, Res};

pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_API_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_DATA_DIR: &str = "project/data";

/// Loads environment variables from `.env` files.
///
/// Looks for `chartsnap/.env` in the platform-specific local data directory
/// first and then for a `.env` in the current working directory. Variables
/// that are already present in the process environment are never overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/chartsnap/.env`
/// - macOS: `~/Library/Application Support/chartsnap/.env`
/// - Windows: `%LOCALAPPDATA%/chartsnap/.env`
///
/// # Errors
///
/// Returns an error string if the local data directory cannot be created or
/// if neither `.env` file could be loaded. Callers usually only warn about it,
/// since the credentials may come straight from the environment.
pub async fn load_env() -> Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("chartsnap/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    let local = dotenv::from_path(&path);
    let cwd = dotenv::dotenv();

    match (local, cwd) {
        (Err(local_err), Err(_)) => Err(format!(
            "no .env file found at {} or in the working directory ({})",
            path.display(),
            local_err
        )),
        _ => Ok(()),
    }
}

/// Client credentials for the Spotify client-credentials flow.
///
/// Built once by the caller and handed to the token request explicitly.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    pub client_id: String,
    pub client_secret: String,
}

impl Credentials {
    pub fn new(client_id: impl Into<String>, client_secret: impl Into<String>) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
        }
    }

    /// Reads `SPOTIFY_CID` and `SPOTIFY_SECRET` from the environment.
    ///
    /// # Errors
    ///
    /// Returns [`ChartError::Configuration`] if either variable is unset or
    /// empty.
    pub fn from_env() -> Res<Self> {
        Ok(Self::new(
            required("SPOTIFY_CID")?,
            required("SPOTIFY_SECRET")?,
        ))
    }

    pub fn validate(&self) -> Res<()> {
        if self.client_id.trim().is_empty() {
            return Err(ChartError::Configuration(
                "Spotify client id is empty".to_string(),
            ));
        }
        if self.client_secret.trim().is_empty() {
            return Err(ChartError::Configuration(
                "Spotify client secret is empty".to_string(),
            ));
        }
        Ok(())
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"<redacted>")
            .finish()
    }
}

fn required(name: &str) -> Res<String> {
    match env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        Ok(_) => Err(ChartError::Configuration(format!("{} is empty", name))),
        Err(e) => Err(ChartError::Configuration(format!("{}: {}", name, e))),
    }
}

/// Returns the Spotify Web API base URL.
///
/// Reads `SPOTIFY_API_URL`, falling back to `https://api.spotify.com/v1`.
pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

/// Returns the Spotify OAuth token endpoint.
///
/// Reads `SPOTIFY_API_TOKEN_URL`, falling back to
/// `https://accounts.spotify.com/api/token`.
pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL")
        .unwrap_or_else(|_| DEFAULT_SPOTIFY_API_TOKEN_URL.to_string())
}

/// Returns the directory snapshot files are written to.
///
/// Reads `CHARTSNAP_DATA_DIR`, falling back to `project/data` relative to the
/// working directory. The directory is not created.
pub fn data_dir() -> PathBuf {
    env::var("CHARTSNAP_DATA_DIR")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_DIR))
}
