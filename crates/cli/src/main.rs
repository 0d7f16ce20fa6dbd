//! dotenv-import CLI - inline `@env` imports from layered `.env` files.
//!
//! Responsibilities:
//! - Parse command-line arguments and build the plugin options.
//! - Install logging.
//! - Run the selected command and map failures to structured exit codes.
//!
//! Does NOT handle:
//! - Resolution or substitution logic (see `crates/config` and `crates/transform`).
//!
//! Invariants:
//! - Logs go to stderr; stdout carries only command output.
//! - Global options (like `--path`) apply consistently across all subcommands.

mod args;
mod commands;
mod dispatch;
mod error;

use args::Cli;
use clap::Parser;
use dispatch::run_command;
use error::{ExitCode, ExitCodeExt};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

fn main() {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "info" } else { "warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let exit_code = match run_command(cli) {
        Ok(()) => ExitCode::Success,
        Err(e) => {
            eprintln!("{:#}", e);
            e.exit_code()
        }
    };

    std::process::exit(exit_code.as_i32());
}
