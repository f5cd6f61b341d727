use anyhow::Result;
use clap::Parser;

mod cli;
mod config_cmds;
mod gc;
mod run_cmd;

use cli::{Cli, Commands, ConfigCommands};

fn main() -> Result<()> {
    // Initialize tracing (output to stderr, initialize only once)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    let output_format = cli.format.clone();
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Run => {
            run_cmd::handle_run(config_path, output_format)?;
        }
        Commands::Snapshot => {
            run_cmd::handle_snapshot(config_path, output_format)?;
        }
        Commands::Gc { dry_run } => {
            gc::handle_gc(config_path, dry_run, output_format)?;
        }
        Commands::Config { cmd } => match cmd {
            ConfigCommands::Show => {
                config_cmds::handle_config_show(config_path, output_format)?;
            }
            ConfigCommands::Init { force } => {
                config_cmds::handle_config_init(config_path, force)?;
            }
        },
    }

    Ok(())
}
