//! The per-configuration pass object.
//!
//! Responsibilities:
//! - Run the resolver once per configuration and keep its result.
//! - Apply the substitution pass to any number of modules with that result.
//! - Re-resolve when the tracked definition files change.
//!
//! Invariants:
//! - The configuration is never mutated after construction.
//! - `transform_*` never touches the file system or the environment.

use dotenv_import_config::{EnvSource, PluginConfig, Resolution, ResolvedEnv, resolve};
use swc_core::ecma::ast::{Module, Program};

use crate::error::TransformError;
use crate::substitute::{SubstitutionReport, substitute_module};

/// A configured substitution pass with its resolved environment.
#[derive(Debug, Clone)]
pub struct EnvPlugin {
    config: PluginConfig,
    resolution: Resolution,
}

impl EnvPlugin {
    /// Resolve the environment for `config` and build the pass.
    pub fn new(config: PluginConfig, env: &impl EnvSource) -> Self {
        let resolution = resolve(&config, env);
        Self { config, resolution }
    }

    pub fn config(&self) -> &PluginConfig {
        &self.config
    }

    pub fn resolution(&self) -> &Resolution {
        &self.resolution
    }

    /// The mapping substitutions read from.
    pub fn env(&self) -> &ResolvedEnv {
        &self.resolution.env
    }

    /// Re-run the resolver if any tracked definition file changed.
    ///
    /// Returns whether the resolution was replaced.
    pub fn refresh(&mut self, env: &impl EnvSource) -> bool {
        if !self.resolution.fingerprint.is_stale() {
            return false;
        }
        tracing::debug!(path = %self.config.path.display(), "Definition files changed, resolving again");
        self.resolution = resolve(&self.config, env);
        true
    }

    /// Substitute virtual-module imports in a module.
    pub fn transform_module(&self, module: &mut Module) -> Result<SubstitutionReport, TransformError> {
        substitute_module(module, &self.config, &self.resolution.env)
    }

    /// Substitute virtual-module imports in a program. Scripts have no imports.
    pub fn transform_program(
        &self,
        program: &mut Program,
    ) -> Result<SubstitutionReport, TransformError> {
        match program {
            Program::Module(module) => self.transform_module(module),
            Program::Script(_) => Ok(SubstitutionReport::default()),
        }
    }
}
