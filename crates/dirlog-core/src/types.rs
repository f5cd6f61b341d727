use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// How snapshot files inside a bucket folder are named.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SnapshotNaming {
    /// `YYYY-MM-DD_HH-MM-SS.txt`, one file per run.
    PerRun,
    /// `YYYY-MM-DD.txt`, a later run on the same day overwrites the file.
    Daily,
}

impl SnapshotNaming {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::PerRun => "per-run",
            Self::Daily => "daily",
        }
    }

    /// `chrono` format string for the file stem.
    pub fn stem_format(&self) -> &'static str {
        match self {
            Self::PerRun => "%Y-%m-%d_%H-%M-%S",
            Self::Daily => "%Y-%m-%d",
        }
    }
}

impl std::fmt::Display for SnapshotNaming {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Which immediate children a snapshot section records for a path.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ListingScope {
    FoldersOnly,
    #[default]
    FoldersAndFiles,
}

impl ListingScope {
    pub fn includes_files(&self) -> bool {
        matches!(self, Self::FoldersAndFiles)
    }
}

/// Output format for CLI responses
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
