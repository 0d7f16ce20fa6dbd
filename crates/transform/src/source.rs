//! Source-text adapter: parse, resolve scopes, substitute, print.
//!
//! Responsibilities:
//! - Parse JavaScript/TypeScript source with the syntax picked from the file
//!   extension.
//! - Run swc's scope `resolver` so references carry binding identity.
//! - Apply an `EnvPlugin` and print the module back to text.
//! - Turn pass errors into `file:line:column` diagnostics.
//!
//! Does NOT handle:
//! - Reading or writing files (callers pass and receive strings).
//!
//! Invariants:
//! - Comments are preserved.
//! - Any recoverable parse error is reported as a failure.

use std::path::Path;

use swc_core::common::comments::SingleThreadedComments;
use swc_core::common::sync::Lrc;
use swc_core::common::{FileName, GLOBALS, Globals, Mark, SourceMap, Span, Spanned};
use swc_core::ecma::ast::Module;
use swc_core::ecma::codegen::text_writer::JsWriter;
use swc_core::ecma::codegen::{Config as CodegenConfig, Emitter};
use swc_core::ecma::parser::{EsSyntax, Parser, StringInput, Syntax, TsSyntax};
use swc_core::ecma::transforms::base::resolver;
use swc_core::ecma::visit::VisitMutWith;

use crate::error::SourceError;
use crate::plugin::EnvPlugin;
use crate::substitute::SubstitutionReport;

/// Printed output of one file.
#[derive(Debug, Clone)]
pub struct TransformOutput {
    pub code: String,
    pub report: SubstitutionReport,
}

/// Pick the parser syntax from the file extension.
pub fn syntax_for(file_name: &str) -> Syntax {
    match Path::new(file_name).extension().and_then(|e| e.to_str()) {
        Some("ts" | "mts" | "cts") => Syntax::Typescript(TsSyntax::default()),
        Some("tsx") => Syntax::Typescript(TsSyntax {
            tsx: true,
            ..Default::default()
        }),
        _ => Syntax::Es(EsSyntax {
            jsx: true,
            ..Default::default()
        }),
    }
}

/// Run `plugin` over `source` and print the result.
pub fn transform_source(
    plugin: &EnvPlugin,
    file_name: &str,
    source: String,
) -> Result<TransformOutput, SourceError> {
    GLOBALS.set(&Globals::new(), || {
        let cm: Lrc<SourceMap> = Default::default();
        let comments = SingleThreadedComments::default();
        let fm = cm.new_source_file(FileName::Custom(file_name.to_string()).into(), source);

        let syntax = syntax_for(file_name);
        let mut parser = Parser::new(syntax, StringInput::from(&*fm), Some(&comments));
        let parsed = parser.parse_module();
        let mut module = match (parsed, parser.take_errors().into_iter().next()) {
            (Ok(module), None) => module,
            (Err(e), _) | (Ok(_), Some(e)) => {
                let (line, column) = line_column(&cm, e.span());
                return Err(SourceError::Parse {
                    file: file_name.to_string(),
                    line,
                    column,
                    message: e.kind().msg().to_string(),
                });
            }
        };

        let unresolved_mark = Mark::new();
        let top_level_mark = Mark::new();
        module.visit_mut_with(&mut resolver(
            unresolved_mark,
            top_level_mark,
            syntax.typescript(),
        ));

        let report = plugin.transform_module(&mut module).map_err(|error| {
            let (line, column) = line_column(&cm, error.span());
            SourceError::Transform {
                file: file_name.to_string(),
                line,
                column,
                error,
            }
        })?;

        let code = emit(&cm, &comments, &module).map_err(|source| SourceError::Emit {
            file: file_name.to_string(),
            source,
        })?;

        Ok(TransformOutput { code, report })
    })
}

fn emit(
    cm: &Lrc<SourceMap>,
    comments: &SingleThreadedComments,
    module: &Module,
) -> std::io::Result<String> {
    let mut buf = Vec::new();
    {
        let mut emitter = Emitter {
            cfg: CodegenConfig::default(),
            cm: cm.clone(),
            comments: Some(comments),
            wr: JsWriter::new(cm.clone(), "\n", &mut buf, None),
        };
        emitter.emit_module(module)?;
    }
    String::from_utf8(buf).map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
}

/// One-based line and column of `span`, or `(0, 0)` for a dummy span.
fn line_column(cm: &SourceMap, span: Span) -> (usize, usize) {
    if span.is_dummy() {
        return (0, 0);
    }
    let loc = cm.lookup_char_pos(span.lo);
    (loc.line, loc.col_display + 1)
}
