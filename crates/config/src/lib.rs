//! Option types and environment resolution for dotenv-import.
//!
//! This crate provides the plugin option record and the resolver that layers
//! `.env` definition files and the process environment into one mapping.

pub mod constants;
mod error;
mod options;
pub mod resolver;

pub use error::ConfigError;
pub use options::PluginConfig;
pub use resolver::{
    CandidateFiles, EnvSource, FileStamp, Fingerprint, ParsedDotenv, ProcessEnv, Resolution,
    ResolvedEnv, parse_dotenv, resolve,
};
