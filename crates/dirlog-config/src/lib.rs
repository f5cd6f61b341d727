//! Configuration loading (`config.toml`) and target file parsing.

pub mod config;
pub mod paths;
pub mod targets;
pub mod validate;

pub use config::{
    LoggerConfig, ResolvedConfig, RetentionProfile, RetentionSection, SnapshotSection,
    TargetsSection,
};
pub use targets::{TargetSources, TargetSpec};
pub use validate::validate_resolved;
