//! One scheduled run: write a snapshot, then sweep expired buckets.

use anyhow::Result;
use chrono::NaiveDateTime;
use dirlog_config::{ResolvedConfig, TargetSpec};
use dirlog_core::SnapshotNaming;
use std::path::PathBuf;
use tracing::error;

use crate::gc::{CleanupReport, sweep_expired};
use crate::retention::RetentionPolicy;
use crate::snapshot::{SnapshotReport, SnapshotWriter};
use crate::store::ArchiveStore;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    pub archive_root: PathBuf,
    pub months_to_keep: u32,
    pub naming: SnapshotNaming,
}

impl From<&ResolvedConfig> for RunnerConfig {
    fn from(config: &ResolvedConfig) -> Self {
        Self {
            archive_root: config.archive_root.clone(),
            months_to_keep: config.months_to_keep,
            naming: config.naming,
        }
    }
}

/// Both halves of a run. Each step reports its own failure.
#[derive(Debug)]
pub struct RunOutcome {
    pub snapshot: Result<SnapshotReport>,
    pub cleanup: Result<CleanupReport>,
}

impl RunOutcome {
    pub fn is_success(&self) -> bool {
        self.snapshot.is_ok() && self.cleanup.is_ok()
    }
}

#[derive(Debug, Clone)]
pub struct Runner {
    store: ArchiveStore,
    policy: RetentionPolicy,
    naming: SnapshotNaming,
}

impl Runner {
    pub fn new(config: RunnerConfig) -> Self {
        Self {
            store: ArchiveStore::new(config.archive_root),
            policy: RetentionPolicy::new(config.months_to_keep),
            naming: config.naming,
        }
    }

    pub fn policy(&self) -> RetentionPolicy {
        self.policy
    }

    pub fn snapshot(&self, targets: &[TargetSpec], now: &NaiveDateTime) -> Result<SnapshotReport> {
        SnapshotWriter::new(&self.store, self.naming).write(targets, now)
    }

    pub fn cleanup(&self, now: &NaiveDateTime, dry_run: bool) -> Result<CleanupReport> {
        sweep_expired(&self.store, self.policy, now, dry_run)
    }

    /// Snapshot first, then cleanup. Cleanup runs even when the snapshot
    /// failed.
    pub fn run(&self, targets: &[TargetSpec], now: &NaiveDateTime) -> RunOutcome {
        let snapshot = self.snapshot(targets, now);
        if let Err(e) = &snapshot {
            error!(error = %format!("{e:#}"), "Snapshot failed; continuing with cleanup");
        }
        let cleanup = self.cleanup(now, false);
        RunOutcome { snapshot, cleanup }
    }
}
