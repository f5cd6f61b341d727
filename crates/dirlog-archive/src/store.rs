//! Month-bucket folders under the archive root.

use anyhow::{Context, Result, bail};
use dirlog_core::MonthBucket;
use serde::Serialize;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::info;

/// A directory directly under the archive root. `name` is taken from disk
/// as-is and may not be a valid bucket name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveFolder {
    pub name: String,
    pub path: PathBuf,
}

#[derive(Debug, Clone)]
pub struct ArchiveStore {
    root: PathBuf,
}

impl ArchiveStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// `root/<MonthName>_<YYYY>`, whether or not it exists.
    pub fn folder_path(&self, bucket: MonthBucket) -> PathBuf {
        self.root.join(bucket.to_name())
    }

    /// Return the bucket's folder, creating it (and the root) if needed.
    pub fn ensure_current_folder(&self, bucket: MonthBucket) -> Result<PathBuf> {
        let folder = self.folder_path(bucket);
        if !folder.is_dir() {
            fs::create_dir_all(&folder).with_context(|| {
                format!("Failed to create archive folder: {}", folder.display())
            })?;
            info!(folder = %folder.display(), "Created archive folder");
        }
        Ok(folder)
    }

    /// Directories directly under the root, sorted by name.
    ///
    /// A missing root is an empty archive. Files and symlinks under the root
    /// are not archive folders and are left out.
    pub fn list_folders(&self) -> Result<Vec<ArchiveFolder>> {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read archive root: {}", self.root.display())
                });
            }
        };

        let mut folders: Vec<ArchiveFolder> = entries
            .flatten()
            .filter(|entry| entry.file_type().is_ok_and(|ft| ft.is_dir()))
            .map(|entry| ArchiveFolder {
                name: entry.file_name().to_string_lossy().into_owned(),
                path: entry.path(),
            })
            .collect();
        folders.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(folders)
    }

    /// Recursively remove `folder` and everything in it.
    ///
    /// Only a direct child of the archive root is removed; anything that
    /// resolves elsewhere (including through a symlink) is refused.
    pub fn delete(&self, folder: &ArchiveFolder) -> Result<()> {
        let root = self
            .root
            .canonicalize()
            .with_context(|| format!("Failed to resolve archive root: {}", self.root.display()))?;
        let target = folder
            .path
            .canonicalize()
            .with_context(|| format!("Failed to resolve folder: {}", folder.path.display()))?;
        if target.parent() != Some(root.as_path()) {
            bail!(
                "Refusing to delete {}: not directly under archive root {}",
                target.display(),
                root.display()
            );
        }

        fs::remove_dir_all(&target)
            .with_context(|| format!("Failed to delete archive folder: {}", target.display()))?;
        info!(folder = %target.display(), "Deleted archive folder");
        Ok(())
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
