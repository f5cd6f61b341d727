use anyhow::{Context, Result};
use std::path::Path;

use dirlog_config::{LoggerConfig, ResolvedConfig, paths};
use dirlog_core::types::OutputFormat;

pub(crate) fn handle_config_show(config_path: Option<&Path>, format: OutputFormat) -> Result<()> {
    let config = ResolvedConfig::discover(config_path)?;

    match format {
        OutputFormat::Json => {
            let json_str = serde_json::to_string_pretty(&config)?;
            println!("{}", json_str);
        }
        OutputFormat::Text => {
            if config.config_path.is_none() {
                eprintln!("No config file found; showing built-in defaults.");
            }
            let toml_str = toml::to_string_pretty(&config)?;
            print!("{}", toml_str);
        }
    }
    Ok(())
}

pub(crate) fn handle_config_init(config_path: Option<&Path>, force: bool) -> Result<()> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => paths::default_config_path().context("Failed to determine config directory")?,
    };
    LoggerConfig::save_default_template(&path, force)?;
    eprintln!("Wrote config template to: {}", path.display());
    eprintln!("  List paths to snapshot in directories.txt next to it.");
    Ok(())
}
