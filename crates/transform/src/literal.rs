//! Literal encoding of resolved values.
//!
//! Responsibilities:
//! - Build the expression a reference is replaced with.
//! - Encode strings, numbers, booleans, null, arrays and objects, plus the
//!   `undefined` used for absent names.
//!
//! Invariants:
//! - Every node built here carries the span it is given, so diagnostics and
//!   source maps point at the replaced reference.
//! - Negative numbers are emitted as unary minus over a positive literal.

use serde_json::Value;
use swc_core::common::Span;
use swc_core::ecma::ast::{
    ArrayLit, Bool, Expr, ExprOrSpread, KeyValueProp, Lit, Null, Number, ObjectLit, Prop,
    PropName, PropOrSpread, Str, UnaryExpr, UnaryOp,
};

/// A string literal.
pub fn string_expr(value: &str, span: Span) -> Expr {
    Expr::Lit(Lit::Str(str_lit(value, span)))
}

/// `void 0`, the shortest spelling of `undefined` that cannot be shadowed.
pub fn undefined_expr(span: Span) -> Expr {
    Expr::Unary(UnaryExpr {
        span,
        op: UnaryOp::Void,
        arg: Box::new(number_lit(0.0, span)),
    })
}

/// The literal for an optional resolved value.
pub fn resolved_expr(value: Option<&str>, span: Span) -> Expr {
    match value {
        Some(value) => string_expr(value, span),
        None => undefined_expr(span),
    }
}

/// Encode a JSON value as an expression.
pub fn value_to_expr(value: &Value, span: Span) -> Expr {
    match value {
        Value::Null => Expr::Lit(Lit::Null(Null { span })),
        Value::Bool(value) => Expr::Lit(Lit::Bool(Bool {
            span,
            value: *value,
        })),
        Value::Number(number) => {
            let value = number.as_f64().unwrap_or(f64::NAN);
            if value.is_sign_negative() && value != 0.0 {
                Expr::Unary(UnaryExpr {
                    span,
                    op: UnaryOp::Minus,
                    arg: Box::new(number_lit(-value, span)),
                })
            } else {
                number_lit(value, span)
            }
        }
        Value::String(value) => string_expr(value, span),
        Value::Array(items) => Expr::Array(ArrayLit {
            span,
            elems: items
                .iter()
                .map(|item| {
                    Some(ExprOrSpread {
                        spread: None,
                        expr: Box::new(value_to_expr(item, span)),
                    })
                })
                .collect(),
        }),
        Value::Object(entries) => Expr::Object(ObjectLit {
            span,
            props: entries
                .iter()
                .map(|(key, item)| {
                    PropOrSpread::Prop(Box::new(Prop::KeyValue(KeyValueProp {
                        key: PropName::Str(str_lit(key, span)),
                        value: Box::new(value_to_expr(item, span)),
                    })))
                })
                .collect(),
        }),
    }
}

fn str_lit(value: &str, span: Span) -> Str {
    Str {
        span,
        value: value.into(),
        raw: None,
    }
}

fn number_lit(value: f64, span: Span) -> Expr {
    Expr::Lit(Lit::Num(Number {
        span,
        value,
        raw: None,
    }))
}
