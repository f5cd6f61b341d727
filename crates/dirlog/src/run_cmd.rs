use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use tracing::info;

use dirlog_archive::{RunOutcome, Runner, RunnerConfig, SnapshotReport};
use dirlog_config::{ResolvedConfig, TargetSpec};
use dirlog_core::types::OutputFormat;

use crate::gc::print_cleanup_report;

fn load_run_inputs(config_path: Option<&Path>) -> Result<(Runner, Vec<TargetSpec>)> {
    let config = ResolvedConfig::discover(config_path)?;
    let targets = config
        .targets
        .load()
        .context("Failed to load target files")?;
    info!(
        archive_root = %config.archive_root.display(),
        targets = targets.len(),
        months_to_keep = config.months_to_keep,
        naming = %config.naming,
        "Loaded configuration"
    );
    Ok((Runner::new(RunnerConfig::from(&config)), targets))
}

/// Scheduler entry point: snapshot, then cleanup regardless of the
/// snapshot's outcome. A failed step fails the command afterwards.
pub(crate) fn handle_run(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let (runner, targets) = load_run_inputs(config_path)?;
    let now = chrono::Local::now().naive_local();
    let RunOutcome { snapshot, cleanup } = runner.run(&targets, &now);

    match format {
        OutputFormat::Json => {
            let summary = serde_json::json!({
                "snapshot": step_json(&snapshot)?,
                "cleanup": step_json(&cleanup)?,
            });
            println!("{}", serde_json::to_string_pretty(&summary)?);
        }
        OutputFormat::Text => {
            if let Ok(report) = &snapshot {
                print_snapshot_report(report);
            }
            if let Ok(report) = &cleanup {
                print_cleanup_report(report, runner.policy().months_to_keep(), &format)?;
            }
        }
    }

    snapshot?;
    cleanup?;
    Ok(())
}

pub(crate) fn handle_snapshot(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let (runner, targets) = load_run_inputs(config_path)?;
    let now = chrono::Local::now().naive_local();
    let report = runner.snapshot(&targets, &now)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        OutputFormat::Text => print_snapshot_report(&report),
    }
    Ok(())
}

fn step_json<T: Serialize>(step: &Result<T>) -> Result<serde_json::Value> {
    Ok(match step {
        Ok(report) => serde_json::to_value(report)?,
        Err(e) => serde_json::json!({ "error": format!("{e:#}") }),
    })
}

fn print_snapshot_report(report: &SnapshotReport) {
    eprintln!("Snapshot written: {}", report.path.display());
    eprintln!("  Paths logged: {}", report.sections);
    if !report.unlisted.is_empty() {
        eprintln!("  Paths not listable: {}", report.unlisted.join(", "));
    }
}
