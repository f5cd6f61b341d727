//! Retention sweep: classify every archive folder and delete the expired ones.

use anyhow::Result;
use chrono::Datelike;
use dirlog_core::MonthBucket;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::retention::{RetentionDecision, RetentionPolicy};
use crate::store::{ArchiveFolder, ArchiveStore};

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailedRemoval {
    pub name: String,
    pub error: String,
}

/// Outcome of one sweep. In a dry run `removed` lists the folders that
/// would have been deleted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CleanupReport {
    pub dry_run: bool,
    pub removed: Vec<String>,
    pub failed: Vec<FailedRemoval>,
    pub kept: Vec<String>,
    pub skipped: Vec<String>,
}

/// Delete every expired bucket folder under the store's root.
///
/// Each deletion is attempted independently: one failure is recorded and
/// the sweep moves on. Only failing to read the root aborts.
pub fn sweep_expired(
    store: &ArchiveStore,
    policy: RetentionPolicy,
    now: &impl Datelike,
    dry_run: bool,
) -> Result<CleanupReport> {
    let folders = store.list_folders()?;
    Ok(sweep_folders(store, policy, folders, now, dry_run))
}

fn sweep_folders(
    store: &ArchiveStore,
    policy: RetentionPolicy,
    folders: Vec<ArchiveFolder>,
    now: &impl Datelike,
    dry_run: bool,
) -> CleanupReport {
    let current = MonthBucket::current(now);
    let mut report = CleanupReport {
        dry_run,
        ..Default::default()
    };

    for folder in folders {
        match policy.classify(&folder.name, current) {
            RetentionDecision::Unparseable(reason) => {
                debug!(folder = %folder.name, reason = %reason, "Skipping non-bucket folder");
                report.skipped.push(folder.name);
            }
            RetentionDecision::Keep { .. } => report.kept.push(folder.name),
            RetentionDecision::Expire { age, .. } if dry_run => {
                info!(folder = %folder.name, age_months = age, "[dry-run] Would delete expired bucket");
                report.removed.push(folder.name);
            }
            RetentionDecision::Expire { age, .. } => match store.delete(&folder) {
                Ok(()) => {
                    info!(folder = %folder.name, age_months = age, "Deleted expired bucket");
                    report.removed.push(folder.name);
                }
                Err(e) => {
                    let error = format!("{e:#}");
                    warn!(folder = %folder.name, error = %error, "Failed to delete expired bucket");
                    report.failed.push(FailedRemoval {
                        name: folder.name,
                        error,
                    });
                }
            },
        }
    }

    report
}
