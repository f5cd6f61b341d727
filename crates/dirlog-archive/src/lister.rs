//! Non-recursive listing of one configured path.

use std::fs;
use std::io::{self, ErrorKind};
use std::path::Path;
use tracing::{debug, warn};

/// Immediate children of a directory, in the order the OS returned them.
///
/// `listed` is false when the directory itself could not be read; the
/// listing is then empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DirListing {
    pub subdirectories: Vec<String>,
    pub files: Vec<String>,
    pub listed: bool,
}

/// List immediate subdirectories and files of `path`.
///
/// Entries are classified by following symlinks; dangling links and other
/// special entries are neither. Errors reading a single entry drop that
/// entry only.
pub fn try_list_path(path: &Path) -> io::Result<DirListing> {
    let mut listing = DirListing {
        listed: true,
        ..Default::default()
    };
    for entry in fs::read_dir(path)?.flatten() {
        let entry_path = entry.path();
        let name = entry.file_name().to_string_lossy().into_owned();
        if entry_path.is_dir() {
            listing.subdirectories.push(name);
        } else if entry_path.is_file() {
            listing.files.push(name);
        }
    }
    Ok(listing)
}

/// Like [`try_list_path`], but a missing or unreadable path is logged and
/// yields an empty listing with `listed` unset.
pub fn list_path(path: &Path) -> DirListing {
    match try_list_path(path) {
        Ok(listing) => listing,
        Err(error) => {
            log_listing_failure(path, &error);
            DirListing::default()
        }
    }
}

fn log_listing_failure(path: &Path, error: &io::Error) {
    if error.kind() == ErrorKind::NotFound {
        debug!(path = %path.display(), "Configured path does not exist");
    } else {
        warn!(path = %path.display(), error = %error, "Failed to list configured path");
    }
}
