//! Render one snapshot document and write it into the current bucket.

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use dirlog_config::TargetSpec;
use dirlog_core::{ListingScope, MonthBucket, SnapshotNaming};
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::lister::list_path;
use crate::store::ArchiveStore;

const SECTION_RULE: &str = "----------------------------------------";
const SNAPSHOT_EXTENSION: &str = "txt";

/// One configured path as captured during a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogEntry {
    pub path: String,
    pub message: Option<String>,
    pub scope: ListingScope,
    pub subdirectories: Vec<String>,
    pub files: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotReport {
    pub path: PathBuf,
    pub bucket: String,
    pub sections: usize,
    /// Configured paths that could not be listed and were logged empty.
    pub unlisted: Vec<String>,
}

/// `YYYY-MM-DD_HH-MM-SS.txt` or `YYYY-MM-DD.txt`.
pub fn snapshot_file_name(now: &NaiveDateTime, naming: SnapshotNaming) -> String {
    format!("{}.{}", now.format(naming.stem_format()), SNAPSHOT_EXTENSION)
}

/// Plain-text document: a timestamp header, then one section per entry.
pub fn render_document(generated_at: &NaiveDateTime, entries: &[LogEntry]) -> String {
    let mut lines = vec![format!(
        "Log generated on {}\n",
        generated_at.format("%Y-%m-%d %H:%M:%S")
    )];

    for entry in entries {
        lines.push(SECTION_RULE.to_string());
        lines.push(format!("PATH: {}", entry.path));
        if let Some(message) = &entry.message {
            lines.push(format!("MESSAGE: {message}"));
        }
        push_names(&mut lines, "Subdirectories", &entry.subdirectories);
        if entry.scope.includes_files() {
            push_names(&mut lines, "Files", &entry.files);
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

fn push_names(lines: &mut Vec<String>, heading: &str, names: &[String]) {
    if names.is_empty() {
        return;
    }
    lines.push(format!("  {heading}:"));
    lines.extend(names.iter().map(|name| format!("    {name}")));
}

pub struct SnapshotWriter<'a> {
    store: &'a ArchiveStore,
    naming: SnapshotNaming,
}

impl<'a> SnapshotWriter<'a> {
    pub fn new(store: &'a ArchiveStore, naming: SnapshotNaming) -> Self {
        Self { store, naming }
    }

    /// List every target and write the document to
    /// `<root>/<Month>_<YYYY>/<timestamp>.txt` in one write.
    ///
    /// Unlistable targets become empty sections. Failing to create the
    /// bucket folder or to write the file is an error.
    pub fn write(&self, targets: &[TargetSpec], now: &NaiveDateTime) -> Result<SnapshotReport> {
        let bucket = MonthBucket::current(now);
        let folder = self.store.ensure_current_folder(bucket)?;

        let mut unlisted = Vec::new();
        let entries: Vec<LogEntry> = targets
            .iter()
            .map(|target| {
                let listing = list_path(Path::new(&target.path));
                if !listing.listed {
                    unlisted.push(target.path.clone());
                }
                LogEntry {
                    path: target.path.clone(),
                    message: target.message.clone(),
                    scope: target.scope,
                    subdirectories: listing.subdirectories,
                    files: if target.scope.includes_files() {
                        listing.files
                    } else {
                        Vec::new()
                    },
                }
            })
            .collect();

        let path = folder.join(snapshot_file_name(now, self.naming));
        fs::write(&path, render_document(now, &entries))
            .with_context(|| format!("Failed to write snapshot: {}", path.display()))?;
        info!(
            path = %path.display(),
            sections = entries.len(),
            unlisted = unlisted.len(),
            "Wrote snapshot"
        );

        Ok(SnapshotReport {
            path,
            bucket: bucket.to_name(),
            sections: entries.len(),
            unlisted,
        })
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
