use std::path::{Path, PathBuf};

use chrono::{Local, NaiveDate};

pub const SNAPSHOT_FILE_PREFIX: &str = "spotify_chart_";

/// Current date in the system's local timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn format_snapshot_date(date: NaiveDate) -> String {
    date.format("%Y%m%d").to_string()
}

pub fn snapshot_file_name(date: NaiveDate) -> String {
    format!(
        "{prefix}{date}.json",
        prefix = SNAPSHOT_FILE_PREFIX,
        date = format_snapshot_date(date)
    )
}

pub fn snapshot_path(data_dir: &Path, date: NaiveDate) -> PathBuf {
    data_dir.join(snapshot_file_name(date))
}
