//! CLI argument definitions and parsing.
//!
//! Responsibilities:
//! - Define the CLI structure using clap derive macros.
//! - Merge an optional options file with flag overrides into a `PluginConfig`.
//!
//! Non-responsibilities:
//! - Does not execute commands (see `dispatch` module).

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use dotenv_import_config::PluginConfig;

#[derive(Parser)]
#[command(name = "dotenv-import")]
#[command(about = "Inline imports of a virtual env module from layered .env files", long_about = None)]
#[command(version)]
#[command(
    after_help = "Examples:\n  dotenv-import transform src/App.js\n  dotenv-import --safe --allow API_URL transform src/*.js --out-dir build\n  APP_ENV=production dotenv-import resolve --format dotenv\n  dotenv-import deps\n"
)]
pub struct Cli {
    /// Plugin options JSON file (flags override its values)
    #[arg(short, long, global = true, env = "DOTENV_IMPORT_CONFIG", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Variable that selects the mode [default: APP_ENV]
    #[arg(long, global = true, value_name = "VAR")]
    pub env_name: Option<String>,

    /// Virtual module whose imports are inlined [default: @env]
    #[arg(long, global = true, value_name = "NAME")]
    pub module_name: Option<String>,

    /// Base definition file [default: .env]
    #[arg(long, global = true, value_name = "FILE")]
    pub path: Option<PathBuf>,

    /// Only allow importing this name (repeatable)
    #[arg(long = "allow", global = true, value_name = "NAME")]
    pub allow: Vec<String>,

    /// Never allow importing this name (repeatable)
    #[arg(long = "block", global = true, value_name = "NAME")]
    pub block: Vec<String>,

    /// Filter the process environment through the allow/block lists
    #[arg(long, global = true)]
    pub safe: bool,

    /// Fail on imports that have no definition instead of inlining undefined
    #[arg(long, global = true)]
    pub strict: bool,

    /// Log the selected mode and skipped definition files
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Rewrite source files, inlining imports of the virtual module
    Transform {
        /// Source files to rewrite
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Write results into this directory instead of stdout
        #[arg(long, value_name = "DIR")]
        out_dir: Option<PathBuf>,
    },

    /// Print the resolved environment mapping
    Resolve {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ResolveFormat::Json)]
        format: ResolveFormat,
    },

    /// Print the mode and the definition files a build cache should track
    Deps,
}

/// Output formats for `resolve`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ResolveFormat {
    Json,
    Dotenv,
}

impl Cli {
    /// Build the plugin options: options file (or defaults), then flags.
    pub fn plugin_config(&self) -> Result<PluginConfig> {
        let mut config = match &self.config {
            Some(path) => PluginConfig::from_json_file(path)
                .with_context(|| format!("Failed to load options from {}", path.display()))?,
            None => PluginConfig::default(),
        };

        if let Some(env_name) = &self.env_name {
            config.env_name = env_name.clone();
        }
        if let Some(module_name) = &self.module_name {
            config.module_name = module_name.clone();
        }
        if let Some(path) = &self.path {
            config.path = path.clone();
        }
        if !self.allow.is_empty() {
            config.allowlist = Some(self.allow.clone());
        }
        if !self.block.is_empty() {
            config.blocklist = Some(self.block.clone());
        }
        if self.safe {
            config.safe = true;
        }
        if self.strict {
            config.allow_undefined = false;
        }
        if self.verbose {
            config.verbose = true;
        }

        Ok(config)
    }
}
