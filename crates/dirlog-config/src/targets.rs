//! Target files: which paths a snapshot lists.
//!
//! Two layouts are supported. The annotated layout has one
//! `<path><delimiter><message>` per line. The split layout uses two plain
//! files, one for folders-only listings and one for folders-and-files.

use anyhow::{Context, Result};
use dirlog_core::ListingScope;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::warn;

/// Default delimiter between path and message in the annotated layout.
pub const DEFAULT_DELIMITER: &str = "|";

/// One configured path to snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetSpec {
    pub path: String,
    pub message: Option<String>,
    pub scope: ListingScope,
}

impl TargetSpec {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: None,
            scope: ListingScope::FoldersAndFiles,
        }
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn with_scope(mut self, scope: ListingScope) -> Self {
        self.scope = scope;
        self
    }
}

/// Resolved locations of the target files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TargetSources {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub annotated: Option<PathBuf>,
    pub delimiter: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folders_only: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub folders_and_files: Option<PathBuf>,
}

impl TargetSources {
    /// Read every configured file, in order: annotated, folders-only,
    /// folders-and-files.
    pub fn load(&self) -> Result<Vec<TargetSpec>> {
        let mut targets = Vec::new();
        if let Some(path) = &self.annotated {
            targets.extend(read_annotated(path, &self.delimiter)?);
        }
        if let Some(path) = &self.folders_only {
            targets.extend(read_plain(path, ListingScope::FoldersOnly)?);
        }
        if let Some(path) = &self.folders_and_files {
            targets.extend(read_plain(path, ListingScope::FoldersAndFiles)?);
        }
        Ok(targets)
    }
}

/// Parse the annotated layout.
///
/// Each line splits on the first `delimiter`; both halves are trimmed and an
/// empty message counts as no message. Blank lines are skipped.
pub fn parse_annotated(content: &str, delimiter: &str) -> Vec<TargetSpec> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            let (path, message) = match line.split_once(delimiter) {
                Some((path, message)) => (path.trim(), message.trim()),
                None => (line, ""),
            };
            TargetSpec {
                path: path.to_string(),
                message: (!message.is_empty()).then(|| message.to_string()),
                scope: ListingScope::FoldersAndFiles,
            }
        })
        .collect()
}

/// Parse a plain path-per-line file with a fixed scope.
pub fn parse_plain(content: &str, scope: ListingScope) -> Vec<TargetSpec> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| TargetSpec::new(line).with_scope(scope))
        .collect()
}

pub fn read_annotated(path: &Path, delimiter: &str) -> Result<Vec<TargetSpec>> {
    Ok(read_optional(path)?
        .map(|content| parse_annotated(&content, delimiter))
        .unwrap_or_default())
}

pub fn read_plain(path: &Path, scope: ListingScope) -> Result<Vec<TargetSpec>> {
    Ok(read_optional(path)?
        .map(|content| parse_plain(&content, scope))
        .unwrap_or_default())
}

fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            warn!(path = %path.display(), "Target file not found; no paths listed from it");
            Ok(None)
        }
        Err(e) => {
            Err(e).with_context(|| format!("Failed to read target file: {}", path.display()))
        }
    }
}
