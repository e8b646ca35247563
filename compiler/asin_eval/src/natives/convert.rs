//! Type conversions: `bilang`, `lutang`, `titik`.

use super::{float_to_int, Arity, CallContext, NativeFunction};
use crate::errors::EvalResult;
use crate::value::Value;

pub(super) const FUNCTIONS: &[NativeFunction] = &[
    NativeFunction::new("bilang", Arity::Exact(1), bilang),
    NativeFunction::new("lutang", Arity::Exact(1), lutang),
    NativeFunction::new("titik", Arity::Exact(1), titik),
];

/// To int. Floats truncate toward zero; strings parse as decimal.
fn bilang(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    match ctx.arg(args, 0)? {
        Value::Int(n) => Ok(Value::Int(*n)),
        Value::Float(x) => float_to_int(x.trunc(), || ctx.call_text(args)).map(Value::Int),
        Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
        Value::Str(s) => s
            .trim()
            .parse::<i64>()
            .map(Value::Int)
            .map_err(|_| ctx.error(format!("invalid literal for int: \"{s}\""))),
        other => Err(ctx.type_error(0, "a number, bool or str", other)),
    }
}

/// To float. Strings accept `inf` and `nan`.
fn lutang(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    match ctx.arg(args, 0)? {
        Value::Int(_) | Value::Float(_) => ctx.number(args, 0).map(Value::Float),
        Value::Bool(b) => Ok(Value::Float(if *b { 1.0 } else { 0.0 })),
        Value::Str(s) => s
            .trim()
            .parse::<f64>()
            .map(Value::Float)
            .map_err(|_| ctx.error(format!("invalid literal for float: \"{s}\""))),
        other => Err(ctx.type_error(0, "a number, bool or str", other)),
    }
}

/// To str, using the display form.
fn titik(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    Ok(Value::Str(ctx.arg(args, 0)?.to_string()))
}
