use anyhow::{Result, bail};

use crate::config::ResolvedConfig;

/// Reject settings that would make a run destroy its own output or read
/// nothing meaningful.
pub fn validate_resolved(config: &ResolvedConfig) -> Result<()> {
    if config.months_to_keep == 0 {
        bail!("retention.months_to_keep must be >= 1 (0 would expire the current month)");
    }
    if config.targets.delimiter.is_empty() {
        bail!("targets.delimiter cannot be empty");
    }
    Ok(())
}
