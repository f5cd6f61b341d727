use super::*;
use dirlog_core::SnapshotNaming;
use std::fs;
use tempfile::tempdir;

#[test]
fn test_load_nonexistent_returns_none() {
    let dir = tempdir().unwrap();
    let result = LoggerConfig::load(&dir.path().join("config.toml")).unwrap();
    assert!(result.is_none());
}

#[test]
fn test_load_malformed_config_fails_with_path() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "profile = [not valid").unwrap();
    let err = LoggerConfig::load(&path).unwrap_err();
    assert!(format!("{err:#}").contains("Failed to parse config"));
}

#[test]
fn test_default_profile_is_quarterly_per_run() {
    let dir = tempdir().unwrap();
    let resolved = LoggerConfig::default()
        .resolve(dir.path(), dir.path())
        .unwrap();
    assert_eq!(resolved.profile, RetentionProfile::Quarterly);
    assert_eq!(resolved.months_to_keep, 3);
    assert_eq!(resolved.naming, SnapshotNaming::PerRun);
    assert_eq!(resolved.archive_root, dir.path().join("logs"));
    assert_eq!(
        resolved.targets.annotated,
        Some(dir.path().join("directories.txt"))
    );
}

#[test]
fn test_yearly_profile_keeps_twelve_months_daily() {
    let config: LoggerConfig = toml::from_str("profile = \"yearly\"").unwrap();
    let dir = tempdir().unwrap();
    let resolved = config.resolve(dir.path(), dir.path()).unwrap();
    assert_eq!(resolved.months_to_keep, 12);
    assert_eq!(resolved.naming, SnapshotNaming::Daily);
}

#[test]
fn test_explicit_sections_override_profile() {
    let config: LoggerConfig = toml::from_str(
        r#"
profile = "yearly"
[retention]
months_to_keep = 6
[snapshot]
naming = "per-run"
"#,
    )
    .unwrap();
    let dir = tempdir().unwrap();
    let resolved = config.resolve(dir.path(), dir.path()).unwrap();
    assert_eq!(resolved.months_to_keep, 6);
    assert_eq!(resolved.naming, SnapshotNaming::PerRun);
}

#[test]
fn test_split_layout_disables_default_annotated_file() {
    let config: LoggerConfig = toml::from_str(
        r#"
[targets]
folders_only = "folders.txt"
folders_and_files = "/etc/dirlog/both.txt"
"#,
    )
    .unwrap();
    let dir = tempdir().unwrap();
    let resolved = config.resolve(dir.path(), dir.path()).unwrap();
    assert!(resolved.targets.annotated.is_none());
    assert_eq!(
        resolved.targets.folders_only,
        Some(dir.path().join("folders.txt"))
    );
    assert_eq!(
        resolved.targets.folders_and_files,
        Some(PathBuf::from("/etc/dirlog/both.txt"))
    );
}

#[test]
fn test_absolute_archive_root_is_kept() {
    let config: LoggerConfig = toml::from_str("archive_root = \"/var/log/dirlog\"").unwrap();
    let dir = tempdir().unwrap();
    let resolved = config.resolve(dir.path(), dir.path()).unwrap();
    assert_eq!(resolved.archive_root, PathBuf::from("/var/log/dirlog"));
}

#[test]
fn test_zero_months_to_keep_is_rejected() {
    let config: LoggerConfig = toml::from_str("[retention]\nmonths_to_keep = 0").unwrap();
    let dir = tempdir().unwrap();
    let err = config.resolve(dir.path(), dir.path()).unwrap_err();
    assert!(err.to_string().contains("months_to_keep"));
}

#[test]
fn test_empty_delimiter_is_rejected() {
    let config: LoggerConfig = toml::from_str("[targets]\ndelimiter = \"\"").unwrap();
    let dir = tempdir().unwrap();
    assert!(config.resolve(dir.path(), dir.path()).is_err());
}

#[test]
fn test_empty_archive_root_is_rejected() {
    let config: LoggerConfig = toml::from_str("archive_root = \"\"").unwrap();
    let dir = tempdir().unwrap();
    assert!(config.resolve(dir.path(), dir.path()).is_err());
}

#[test]
fn test_discover_explicit_path_anchors_to_config_dir() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("config.toml");
    fs::write(&path, "archive_root = \"archive\"\n").unwrap();

    let resolved = ResolvedConfig::discover(Some(&path)).unwrap();
    assert_eq!(resolved.config_path.as_deref(), Some(path.as_path()));
    assert_eq!(resolved.archive_root, dir.path().join("archive"));
}

#[test]
fn test_discover_explicit_missing_path_fails() {
    let dir = tempdir().unwrap();
    let err = ResolvedConfig::discover(Some(&dir.path().join("nope.toml"))).unwrap_err();
    assert!(err.to_string().contains("Config file not found"));
}

#[test]
fn test_default_template_parses_and_resolves() {
    let config: LoggerConfig = toml::from_str(&LoggerConfig::default_template()).unwrap();
    assert_eq!(config.profile, RetentionProfile::Quarterly);
    assert_eq!(config.archive_root, Some(PathBuf::from("logs")));
    assert_eq!(config.targets.delimiter, "|");
    let dir = tempdir().unwrap();
    assert!(config.resolve(dir.path(), dir.path()).is_ok());
}

#[test]
fn test_save_default_template_refuses_overwrite() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("config.toml");
    LoggerConfig::save_default_template(&path, false).unwrap();
    assert!(path.exists());

    let err = LoggerConfig::save_default_template(&path, false).unwrap_err();
    assert!(err.to_string().contains("already exists"));
    LoggerConfig::save_default_template(&path, true).unwrap();
}

#[test]
fn test_resolved_config_serializes_to_json() {
    let dir = tempdir().unwrap();
    let resolved = LoggerConfig::default()
        .resolve(dir.path(), dir.path())
        .unwrap();
    let json = serde_json::to_value(&resolved).unwrap();
    assert_eq!(json["profile"], "quarterly");
    assert_eq!(json["naming"], "per-run");
    assert_eq!(json["months_to_keep"], 3);
    assert!(json.get("config_path").is_none());
}
