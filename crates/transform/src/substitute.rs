//! Substitution of virtual-module imports.
//!
//! Responsibilities:
//! - Find import declarations whose source is the configured virtual module.
//! - Validate each specifier against the allow/block policy and the
//!   must-be-defined policy.
//! - Replace every read reference to each imported binding with the literal
//!   of its resolved value, then drop the declaration.
//!
//! Does NOT handle:
//! - Scope analysis. References are matched by `Id` (symbol plus syntax
//!   context), which is only scope-accurate after swc's `resolver` pass has
//!   run over the module. Hosts run it before calling in here.
//! - Parsing or printing source text (see source.rs).
//!
//! Invariants:
//! - Specifiers are validated in source order; the first failure aborts the
//!   pass before any reference is rewritten.
//! - Only read sites are rewritten. Assignment targets, export specifiers
//!   and JSX element names keep the identifier.
//! - Every matching declaration is removed, including side-effect-only ones.

use std::collections::HashMap;

use dotenv_import_config::{PluginConfig, ResolvedEnv};
use swc_core::common::Span;
use swc_core::ecma::ast::{
    Expr, Id, ImportDecl, ImportSpecifier, KeyValueProp, Module, ModuleDecl, ModuleExportName,
    ModuleItem, Prop, PropName,
};
use swc_core::ecma::visit::{VisitMut, VisitMutWith};

use crate::error::TransformError;
use crate::literal::resolved_expr;

/// Counts of what one pass changed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubstitutionReport {
    /// Import declarations removed.
    pub removed_imports: usize,
    /// Bindings validated and scheduled for substitution.
    pub bindings: usize,
    /// Reference sites rewritten.
    pub replaced_references: usize,
}

/// Check one imported name against the policies of `config`.
pub fn validate_specifier(
    config: &PluginConfig,
    env: &ResolvedEnv,
    imported: &str,
    span: Span,
) -> Result<(), TransformError> {
    if config.rejects(imported) {
        return Err(TransformError::PolicyViolation {
            name: imported.to_string(),
            span,
        });
    }
    if !config.allow_undefined && !env.contains(imported) {
        return Err(TransformError::UndefinedReference {
            name: imported.to_string(),
            path: config.path.clone(),
            span,
        });
    }
    Ok(())
}

/// Substitute every virtual-module import in `module`.
pub fn substitute_module(
    module: &mut Module,
    config: &PluginConfig,
    env: &ResolvedEnv,
) -> Result<SubstitutionReport, TransformError> {
    let mut bindings: HashMap<Id, Option<String>> = HashMap::new();
    let mut removed_imports = 0;

    for item in &module.body {
        if let Some(decl) = as_env_import(item, &config.module_name) {
            collect_bindings(decl, config, env, &mut bindings)?;
            removed_imports += 1;
        }
    }

    if removed_imports == 0 {
        return Ok(SubstitutionReport::default());
    }

    module
        .body
        .retain(|item| as_env_import(item, &config.module_name).is_none());

    let mut replacer = ReferenceReplacer {
        bindings: &bindings,
        replaced: 0,
    };
    module.visit_mut_with(&mut replacer);

    tracing::debug!(
        removed_imports,
        bindings = bindings.len(),
        replaced = replacer.replaced,
        "Substituted virtual module imports"
    );

    Ok(SubstitutionReport {
        removed_imports,
        bindings: bindings.len(),
        replaced_references: replacer.replaced,
    })
}

fn as_env_import<'a>(item: &'a ModuleItem, module_name: &str) -> Option<&'a ImportDecl> {
    match item {
        ModuleItem::ModuleDecl(ModuleDecl::Import(decl)) if &*decl.src.value == module_name => {
            Some(decl)
        }
        _ => None,
    }
}

fn collect_bindings(
    decl: &ImportDecl,
    config: &PluginConfig,
    env: &ResolvedEnv,
    bindings: &mut HashMap<Id, Option<String>>,
) -> Result<(), TransformError> {
    for specifier in &decl.specifiers {
        let named = match specifier {
            ImportSpecifier::Named(named) => named,
            ImportSpecifier::Default(_) | ImportSpecifier::Namespace(_) => {
                return Err(TransformError::UnsupportedSpecifier {
                    module: config.module_name.clone(),
                    span: specifier_span(specifier),
                });
            }
        };

        let imported = match &named.imported {
            Some(ModuleExportName::Ident(ident)) => ident.sym.to_string(),
            Some(ModuleExportName::Str(name)) => name.value.to_string(),
            None => named.local.sym.to_string(),
        };

        validate_specifier(config, env, &imported, named.span)?;
        bindings.insert(
            named.local.to_id(),
            env.get(&imported).map(str::to_string),
        );
    }
    Ok(())
}

fn specifier_span(specifier: &ImportSpecifier) -> Span {
    match specifier {
        ImportSpecifier::Named(s) => s.span,
        ImportSpecifier::Default(s) => s.span,
        ImportSpecifier::Namespace(s) => s.span,
    }
}

/// Rewrites read references of the collected bindings.
struct ReferenceReplacer<'a> {
    bindings: &'a HashMap<Id, Option<String>>,
    replaced: usize,
}

impl VisitMut for ReferenceReplacer<'_> {
    fn visit_mut_expr(&mut self, expr: &mut Expr) {
        if let Expr::Ident(ident) = expr {
            if let Some(value) = self.bindings.get(&ident.to_id()) {
                *expr = resolved_expr(value.as_deref(), ident.span);
                self.replaced += 1;
            }
            return;
        }
        expr.visit_mut_children_with(self);
    }

    // `{ FOO }` has no expression node to replace.
    fn visit_mut_prop(&mut self, prop: &mut Prop) {
        if let Prop::Shorthand(ident) = prop {
            if let Some(value) = self.bindings.get(&ident.to_id()) {
                *prop = Prop::KeyValue(KeyValueProp {
                    key: PropName::Ident(ident.clone().into()),
                    value: Box::new(resolved_expr(value.as_deref(), ident.span)),
                });
                self.replaced += 1;
            }
            return;
        }
        prop.visit_mut_children_with(self);
    }
}
