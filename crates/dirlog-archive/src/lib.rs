//! Month-bucketed snapshot archive with calendar-month retention.

pub mod gc;
pub mod lister;
pub mod retention;
pub mod runner;
pub mod snapshot;
pub mod store;

pub use gc::{CleanupReport, FailedRemoval, sweep_expired};
pub use lister::{DirListing, list_path, try_list_path};
pub use retention::{RetentionDecision, RetentionPolicy};
pub use runner::{RunOutcome, Runner, RunnerConfig};
pub use snapshot::{LogEntry, SnapshotReport, SnapshotWriter, render_document, snapshot_file_name};
pub use store::{ArchiveFolder, ArchiveStore};
