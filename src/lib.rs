//! Spotify Chart Snapshot Library
//!
//! This library collects the per-country "top charts" playlists published by
//! Spotify and writes them, aggregated, to a dated JSON snapshot file. It
//! includes modules for API communication, chart aggregation, snapshot
//! persistence, configuration and the CLI operations built on top of them.
//!
//! # Modules
//!
//! - `charts` - Country chart table and the collect-and-export pipeline
//! - `cli` - Command-line interface implementations
//! - `config` - Configuration management and environment variables
//! - `errors` - Error type shared by every layer
//! - `management` - Snapshot file persistence
//! - `spotify` - Spotify Web API client implementation
//! - `types` - Data structures and type definitions
//! - `utils` - Date and path helpers
//!
//! # Example
//!
//! ```
//! use chartsnap::{charts, config, spotify::SpotifyClient};
//!
//! #[tokio::main]
//! async fn main() -> chartsnap::Res<()> {
//!     config::load_env().await.ok();
//!     let credentials = config::Credentials::from_env()?;
//!     let client = SpotifyClient::from_env();
//!     let path = charts::collect_and_export(
//!         &client,
//!         &credentials,
//!         charts::COUNTRY_CHARTS,
//!         &config::data_dir(),
//!     )
//!     .await?;
//!     println!("{}", path.display());
//!     Ok(())
//! }
//! ```

pub mod charts;
pub mod cli;
pub mod config;
pub mod errors;
pub mod management;
pub mod spotify;
pub mod types;
pub mod utils;

pub use errors::ChartError;

/// A convenient Result type alias for operations that may fail.
///
/// Every layer of the crate reports failures through [`ChartError`], so the
/// CLI can decide in one place how an error is presented before the process
/// terminates.
///
/// # Example
///
/// ```
/// use chartsnap::Res;
///
/// async fn fetch_data() -> Res<String> {
///     Ok("data".to_string())
/// }
/// ```
pub type Res<T> = std::result::Result<T, ChartError>;

/// Prints an informational message with a blue bullet point.
///
/// Used for progress lines such as the per-country fetch notice.
///
/// # Example
///
/// ```
/// info!("Getting Spotify chart for {}...", country);
/// ```
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
///
/// # Example
///
/// ```
/// success!("Exported data to {}", path.display());
/// ```
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// The process terminates with exit code 1 right after the message is
/// printed, so this macro is reserved for errors that end the run.
///
/// # Example
///
/// ```
/// error!("Failed to load configuration");
/// // Program exits here - code after this will not execute
/// ```
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
///
/// # Example
///
/// ```
/// warning!("No .env file found, relying on the process environment");
/// ```
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
