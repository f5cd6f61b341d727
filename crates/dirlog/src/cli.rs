use clap::{Parser, Subcommand};
use dirlog_core::types::OutputFormat;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dirlog")]
#[command(about = "Directory snapshot logger with monthly log retention")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (defaults to ~/.config/dirlog/config.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format (text or json)
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a snapshot, then delete expired monthly folders
    Run,

    /// Write a snapshot only
    Snapshot,

    /// Delete monthly log folders older than the retention window
    Gc {
        /// Show what would be deleted without deleting anything
        #[arg(long)]
        dry_run: bool,
    },

    /// Show/manage configuration
    Config {
        #[command(subcommand)]
        cmd: ConfigCommands,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Show the effective configuration
    Show,
    /// Write a commented default config file
    Init {
        /// Overwrite an existing config file
        #[arg(long)]
        force: bool,
    },
}
