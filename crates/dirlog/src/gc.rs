use anyhow::Result;
use std::path::Path;

use dirlog_archive::{CleanupReport, Runner, RunnerConfig};
use dirlog_config::ResolvedConfig;
use dirlog_core::types::OutputFormat;

pub(crate) fn handle_gc(config_path: Option<&Path>, dry_run: bool, format: OutputFormat) -> Result<()> {
    let config = ResolvedConfig::discover(config_path)?;
    let runner = Runner::new(RunnerConfig::from(&config));
    let now = chrono::Local::now().naive_local();

    if dry_run {
        eprintln!("[dry-run] No changes will be made.");
    }
    let report = runner.cleanup(&now, dry_run)?;
    print_cleanup_report(&report, runner.policy().months_to_keep(), &format)?;
    Ok(())
}

pub(crate) fn print_cleanup_report(
    report: &CleanupReport,
    months_to_keep: u32,
    format: &OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(report)?);
        }
        OutputFormat::Text => {
            let prefix = if report.dry_run { "[dry-run] " } else { "" };
            eprintln!(
                "{}Cleanup {} (keeping {} month(s)):",
                prefix,
                if report.dry_run { "preview" } else { "complete" },
                months_to_keep
            );
            let verb = if report.dry_run { "Would delete" } else { "Deleted" };
            for name in &report.removed {
                eprintln!("{prefix}  {verb}: {name}");
            }
            for failure in &report.failed {
                eprintln!("{prefix}  Failed to delete {}: {}", failure.name, failure.error);
            }
            eprintln!("{}  Folders kept: {}", prefix, report.kept.len());
            if !report.skipped.is_empty() {
                eprintln!(
                    "{}  Non-bucket folders skipped: {}",
                    prefix,
                    report.skipped.join(", ")
                );
            }
        }
    }
    Ok(())
}
