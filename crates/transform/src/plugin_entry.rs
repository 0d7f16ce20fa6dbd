//! swc Wasm plugin entry point.
//!
//! swc runs its scope resolver before plugins, so the program arrives with
//! binding identity already assigned. Failures are reported through the
//! host's diagnostic handler; validation runs before any rewrite, so a
//! failing program is returned unchanged.

use dotenv_import_config::{PluginConfig, ProcessEnv};
use swc_core::common::DUMMY_SP;
use swc_core::common::errors::HANDLER;
use swc_core::ecma::ast::Program;
use swc_core::plugin::{plugin_transform, proxies::TransformPluginProgramMetadata};

use crate::plugin::EnvPlugin;

#[plugin_transform]
pub fn process_transform(mut program: Program, metadata: TransformPluginProgramMetadata) -> Program {
    let config = match metadata
        .get_transform_plugin_config()
        .map(|json| PluginConfig::from_json_str(&json))
        .transpose()
    {
        Ok(config) => config.unwrap_or_default(),
        Err(e) => {
            HANDLER.with(|handler| handler.struct_span_err(DUMMY_SP, &e.to_string()).emit());
            return program;
        }
    };

    let plugin = EnvPlugin::new(config, &ProcessEnv);
    if let Err(e) = plugin.transform_program(&mut program) {
        HANDLER.with(|handler| handler.struct_span_err(e.span(), &e.to_string()).emit());
    }
    program
}
