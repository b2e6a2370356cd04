mod snapshot;

pub use snapshot::SnapshotManager;
pub use snapshot::export_snapshot;
pub use snapshot::export_snapshot_on;
