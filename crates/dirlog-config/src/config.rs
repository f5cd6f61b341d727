//! Logger configuration (`~/.config/dirlog/config.toml`).
//!
//! The file is optional. Relative paths inside it resolve against the
//! directory holding the file; without a file the archive lives under the
//! XDG state directory and target files under the XDG config directory.

use anyhow::{Context, Result, bail};
use dirlog_core::SnapshotNaming;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::paths;
use crate::targets::{DEFAULT_DELIMITER, TargetSources};
use crate::validate::validate_resolved;

const DEFAULT_ARCHIVE_DIR: &str = "logs";
const DEFAULT_TARGETS_FILE: &str = "directories.txt";

/// Named retention/naming presets.
///
/// `quarterly` keeps three months of buckets with one file per run;
/// `yearly` keeps twelve months with one file per day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RetentionProfile {
    #[default]
    Quarterly,
    Yearly,
}

impl RetentionProfile {
    pub fn months_to_keep(&self) -> u32 {
        match self {
            Self::Quarterly => 3,
            Self::Yearly => 12,
        }
    }

    pub fn naming(&self) -> SnapshotNaming {
        match self {
            Self::Quarterly => SnapshotNaming::PerRun,
            Self::Yearly => SnapshotNaming::Daily,
        }
    }
}

/// Raw configuration as written in `config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub profile: RetentionProfile,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub archive_root: Option<PathBuf>,
    #[serde(default)]
    pub retention: RetentionSection,
    #[serde(default)]
    pub snapshot: SnapshotSection,
    #[serde(default)]
    pub targets: TargetsSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RetentionSection {
    /// Overrides the profile's window when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub months_to_keep: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotSection {
    /// Overrides the profile's file naming when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub naming: Option<SnapshotNaming>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetsSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotated: Option<PathBuf>,
    #[serde(default = "default_delimiter")]
    pub delimiter: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folders_only: Option<PathBuf>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub folders_and_files: Option<PathBuf>,
}

impl Default for TargetsSection {
    fn default() -> Self {
        Self {
            annotated: None,
            delimiter: default_delimiter(),
            folders_only: None,
            folders_and_files: None,
        }
    }
}

fn default_delimiter() -> String {
    DEFAULT_DELIMITER.to_string()
}

/// Effective settings for one run, with every path absolute or
/// relative to the caller's working directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedConfig {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config_path: Option<PathBuf>,
    pub profile: RetentionProfile,
    pub archive_root: PathBuf,
    pub months_to_keep: u32,
    pub naming: SnapshotNaming,
    pub targets: TargetSources,
}

impl LoggerConfig {
    /// Load a config file. Returns `None` if it does not exist.
    pub fn load(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config: {}", path.display()))?;
        Ok(Some(config))
    }

    /// Apply profile defaults and anchor relative paths.
    ///
    /// `archive_base` anchors the archive root, `targets_base` anchors the
    /// target files.
    pub fn resolve(&self, archive_base: &Path, targets_base: &Path) -> Result<ResolvedConfig> {
        let archive_root = self
            .archive_root
            .clone()
            .unwrap_or_else(|| PathBuf::from(DEFAULT_ARCHIVE_DIR));
        if archive_root.as_os_str().is_empty() {
            bail!("archive_root cannot be empty");
        }

        let section = &self.targets;
        let split_layout = section.folders_only.is_some() || section.folders_and_files.is_some();
        let annotated = match &section.annotated {
            Some(path) => Some(path.clone()),
            None if split_layout => None,
            None => Some(PathBuf::from(DEFAULT_TARGETS_FILE)),
        };

        let resolved = ResolvedConfig {
            config_path: None,
            profile: self.profile,
            archive_root: anchor(archive_base, &archive_root),
            months_to_keep: self
                .retention
                .months_to_keep
                .unwrap_or_else(|| self.profile.months_to_keep()),
            naming: self.snapshot.naming.unwrap_or_else(|| self.profile.naming()),
            targets: TargetSources {
                annotated: annotated.map(|p| anchor(targets_base, &p)),
                delimiter: section.delimiter.clone(),
                folders_only: section.folders_only.as_ref().map(|p| anchor(targets_base, p)),
                folders_and_files: section
                    .folders_and_files
                    .as_ref()
                    .map(|p| anchor(targets_base, p)),
            },
        };
        validate_resolved(&resolved)?;
        Ok(resolved)
    }

    /// Generate default config TOML with comments as a template.
    pub fn default_template() -> String {
        r#"# dirlog configuration
# Location: ~/.config/dirlog/config.toml
#
# Relative paths below resolve against the directory holding this file.

# "quarterly": keep 3 months, one snapshot file per run (YYYY-MM-DD_HH-MM-SS.txt)
# "yearly":    keep 12 months, one snapshot file per day (YYYY-MM-DD.txt)
profile = "quarterly"

# One sub-folder per calendar month is created here, e.g. logs/December_2024/
archive_root = "logs"

[retention]
# months_to_keep = 3  # Overrides the profile

[snapshot]
# naming = "per-run"  # "per-run" or "daily"; overrides the profile

[targets]
# One "<path> | <message>" per line; the message is optional.
annotated = "directories.txt"
delimiter = "|"

# Split layout: plain path-per-line files, no messages.
# folders_only = "folders.txt"
# folders_and_files = "folders_and_files.txt"
"#
        .to_string()
    }

    /// Write the default template to `path`, creating parent directories.
    ///
    /// Refuses to replace an existing file unless `force` is set.
    pub fn save_default_template(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            bail!(
                "Config already exists at {} (use --force to overwrite)",
                path.display()
            );
        }
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }
        std::fs::write(path, Self::default_template())
            .with_context(|| format!("Failed to write config: {}", path.display()))?;
        Ok(())
    }
}

impl ResolvedConfig {
    /// Load the effective configuration.
    ///
    /// An explicit path must exist. Without one, the default XDG location is
    /// used and a missing file falls back to built-in defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            let config = LoggerConfig::load(path)?
                .with_context(|| format!("Config file not found: {}", path.display()))?;
            return Self::from_file(config, path);
        }

        let path = paths::default_config_path()
            .context("Failed to determine config directory; pass --config explicitly")?;
        match LoggerConfig::load(&path)? {
            Some(config) => Self::from_file(config, &path),
            None => {
                let config_dir = paths::config_dir()
                    .context("Failed to determine config directory")?;
                let state_dir =
                    paths::state_dir().context("Failed to determine state directory")?;
                LoggerConfig::default().resolve(&state_dir, &config_dir)
            }
        }
    }

    fn from_file(config: LoggerConfig, path: &Path) -> Result<Self> {
        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let mut resolved = config.resolve(base, base)?;
        resolved.config_path = Some(path.to_path_buf());
        Ok(resolved)
    }
}

fn anchor(base: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        base.join(path)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
