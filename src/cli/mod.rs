//! # CLI Module
//!
//! User-facing commands of chartsnap. Each command loads what it needs from
//! [`crate::config`], delegates to [`crate::charts`] or [`crate::spotify`]
//! and reports the outcome through the crate's output macros. Fatal errors go
//! through `error!`, which terminates the process with exit code 1.
//!
//! ## Commands
//!
//! - [`export`] - Collects every country chart and writes the dated snapshot
//! - [`countries`] - Lists the country chart table
//! - [`lookup`] - Ad-hoc track, audio feature, album and single-chart lookups
//!
//! ## Usage Patterns
//!
//! ```bash
//! chartsnap                                   # snapshot all charts
//! chartsnap --data-dir /srv/charts            # snapshot into another directory
//! chartsnap countries                         # list chart playlists
//! chartsnap lookup track 11dFghVXANMlKmJXsNCbNl
//! chartsnap lookup chart Japan
//! ```

mod countries;
mod export;
mod lookup;

pub use countries::countries;
pub use export::export;
pub use lookup::Lookup;
pub use lookup::lookup;
