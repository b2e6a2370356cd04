use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::Serialize;
use serde_json::ser::PrettyFormatter;

use crate::{Res, types::ChartSnapshot, utils};

pub struct SnapshotManager {
    snapshot: ChartSnapshot,
}

impl SnapshotManager {
    pub fn new(snapshot: ChartSnapshot) -> Self {
        Self { snapshot }
    }

    /// Writes the snapshot for today's local date into `data_dir`.
    pub async fn persist(&self, data_dir: &Path) -> Res<PathBuf> {
        self.persist_on(data_dir, utils::today()).await
    }

    /// Writes the snapshot to `<data_dir>/spotify_chart_<YYYYMMDD>.json`.
    ///
    /// An existing file for the same date is truncated. `data_dir` must
    /// already exist.
    pub async fn persist_on(&self, data_dir: &Path, date: NaiveDate) -> Res<PathBuf> {
        let path = utils::snapshot_path(data_dir, date);
        let json = self.to_json()?;
        async_fs::write(&path, json).await?;
        Ok(path)
    }

    pub async fn load(path: &Path) -> Res<Self> {
        let content = async_fs::read_to_string(path).await?;
        let snapshot: ChartSnapshot = serde_json::from_str(&content)?;
        Ok(Self { snapshot })
    }

    pub fn snapshot(&self) -> &ChartSnapshot {
        &self.snapshot
    }

    fn to_json(&self) -> Res<Vec<u8>> {
        let mut buf = Vec::new();
        let formatter = PrettyFormatter::with_indent(b"    ");
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        self.snapshot.serialize(&mut ser)?;
        Ok(buf)
    }
}

/// Writes `snapshot` for today's date and returns the file path.
pub async fn export_snapshot(snapshot: ChartSnapshot, data_dir: &Path) -> Res<PathBuf> {
    SnapshotManager::new(snapshot).persist(data_dir).await
}

/// Writes `snapshot` for a fixed `date` and returns the file path.
pub async fn export_snapshot_on(
    snapshot: ChartSnapshot,
    data_dir: &Path,
    date: NaiveDate,
) -> Res<PathBuf> {
    SnapshotManager::new(snapshot).persist_on(data_dir, date).await
}
