//! Command dispatch logic.
//!
//! Responsibilities:
//! - Build the plugin options from the parsed CLI.
//! - Route parsed CLI arguments to the command handlers.
//!
//! Does NOT handle:
//! - CLI structure definitions (see `args` module).
//!
//! Invariants:
//! - The resolver runs once per invocation, before any command output.

use anyhow::Result;
use dotenv_import_config::ProcessEnv;
use dotenv_import_transform::EnvPlugin;

use crate::args::{Cli, Commands};
use crate::commands;

/// Dispatch CLI commands to their respective handlers.
pub(crate) fn run_command(cli: Cli) -> Result<()> {
    let config = cli.plugin_config()?;
    let plugin = EnvPlugin::new(config, &ProcessEnv);

    match cli.command {
        Commands::Transform { files, out_dir } => {
            commands::transform::run(&plugin, &files, out_dir.as_deref())?;
        }
        Commands::Resolve { format } => {
            commands::resolve::run(&plugin, format)?;
        }
        Commands::Deps => {
            commands::deps::run(&plugin)?;
        }
    }

    Ok(())
}
