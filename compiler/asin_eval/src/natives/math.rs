//! Numeric natives.

use std::cmp::Ordering;

use asin_ir::BinaryOp;

use super::{float_to_int, len_to_int, Arity, CallContext, NativeFunction};
use crate::errors::{integer_overflow, math_domain, EvalResult};
use crate::operators::partial_order;
use crate::value::Value;

pub(super) const FUNCTIONS: &[NativeFunction] = &[
    NativeFunction::new("halaga", Arity::Exact(1), halaga),
    NativeFunction::new("ibilog", Arity::Range(1, 2), ibilog),
    NativeFunction::new("putulin", Arity::Exact(1), putulin),
    NativeFunction::new("kisame", Arity::Exact(1), kisame),
    NativeFunction::new("sahig", Arity::Exact(1), sahig),
    NativeFunction::new("iangat", Arity::Exact(2), iangat),
    NativeFunction::new("ibaba", Arity::Range(1, 2), ibaba),
    NativeFunction::new("parisugat", Arity::Exact(1), parisugat),
    NativeFunction::new("maximo", Arity::AtLeast(1), maximo),
    NativeFunction::new("minimo", Arity::AtLeast(1), minimo),
    NativeFunction::new("haba", Arity::Exact(1), haba),
];

/// Absolute value.
fn halaga(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    match ctx.arg(args, 0)? {
        Value::Int(n) => n
            .checked_abs()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow(ctx.call_text(args))),
        Value::Float(x) => Ok(Value::Float(x.abs())),
        other => Err(ctx.type_error(0, "a number", other)),
    }
}

/// Round half to even. One argument rounds to an int; with a digit count
/// the result keeps the argument's type.
fn ibilog(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    let digits = match args.get(1) {
        None => None,
        Some(Value::Int(n)) => Some(*n),
        Some(other) => return Err(ctx.type_error(1, "int", other)),
    };
    match (ctx.arg(args, 0)?, digits) {
        (Value::Int(n), None) => Ok(Value::Int(*n)),
        (Value::Float(x), None) => {
            float_to_int(x.round_ties_even(), || ctx.call_text(args)).map(Value::Int)
        }
        (Value::Int(n), Some(digits)) => round_int(*n, digits)
            .map(Value::Int)
            .ok_or_else(|| integer_overflow(ctx.call_text(args))),
        (Value::Float(x), Some(digits)) => Ok(Value::Float(round_float(*x, digits))),
        (other, _) => Err(ctx.type_error(0, "a number", other)),
    }
}

/// Round `n` to a multiple of `10^-digits`; non-negative `digits` is exact.
fn round_int(n: i64, digits: i64) -> Option<i64> {
    if digits >= 0 {
        return Some(n);
    }
    let Some(step) = u32::try_from(digits.unsigned_abs())
        .ok()
        .and_then(|exp| 10_i64.checked_pow(exp))
    else {
        // The step exceeds any i64, so everything rounds to zero.
        return Some(0);
    };
    let quotient = n.div_euclid(step);
    let twice_remainder = n.rem_euclid(step).checked_mul(2)?;
    let round_up = twice_remainder > step || (twice_remainder == step && quotient % 2 != 0);
    let quotient = if round_up {
        quotient.checked_add(1)?
    } else {
        quotient
    };
    quotient.checked_mul(step)
}

fn round_float(x: f64, digits: i64) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let digits = i32::try_from(digits).unwrap_or(if digits > 0 { i32::MAX } else { i32::MIN });
    let factor = 10_f64.powi(digits);
    if factor == 0.0 {
        return 0.0_f64.copysign(x);
    }
    let scaled = x * factor;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round_ties_even() / factor
}

fn round_with(ctx: &CallContext<'_>, args: &[Value], round: fn(f64) -> f64) -> EvalResult {
    match ctx.arg(args, 0)? {
        Value::Int(n) => Ok(Value::Int(*n)),
        Value::Float(x) => float_to_int(round(*x), || ctx.call_text(args)).map(Value::Int),
        other => Err(ctx.type_error(0, "a number", other)),
    }
}

fn putulin(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    round_with(ctx, args, f64::trunc)
}

fn kisame(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    round_with(ctx, args, f64::ceil)
}

fn sahig(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    round_with(ctx, args, f64::floor)
}

/// `base ** exp` as a float.
fn iangat(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    let base = ctx.number(args, 0)?;
    let exp = ctx.number(args, 1)?;
    let result = base.powf(exp);
    let nan_from_numbers = result.is_nan() && !base.is_nan() && !exp.is_nan();
    if nan_from_numbers || (base == 0.0 && exp < 0.0) {
        return Err(math_domain(ctx.call_text(args)));
    }
    Ok(Value::Float(result))
}

/// Natural log, or log in the given base.
fn ibaba(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    let x = ctx.number(args, 0)?;
    let base = match args.get(1) {
        Some(_) => Some(ctx.number(args, 1)?),
        None => None,
    };
    let bad_base = base.is_some_and(|b| b <= 0.0 || b == 1.0);
    if x <= 0.0 || bad_base {
        return Err(math_domain(ctx.call_text(args)));
    }
    Ok(Value::Float(match base {
        Some(b) => x.ln() / b.ln(),
        None => x.ln(),
    }))
}

fn parisugat(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    let x = ctx.number(args, 0)?;
    if x < 0.0 {
        return Err(math_domain(ctx.call_text(args)));
    }
    Ok(Value::Float(x.sqrt()))
}

fn maximo(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    extreme(ctx, args, BinaryOp::Gt)
}

fn minimo(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    extreme(ctx, args, BinaryOp::Lt)
}

/// Largest (`Gt`) or smallest (`Lt`) of one list or str argument, or of
/// all arguments. The first of equal candidates wins.
fn extreme(ctx: &CallContext<'_>, args: &[Value], op: BinaryOp) -> EvalResult {
    let candidates = match args {
        [Value::Array(items)] => items.to_vec(),
        [Value::Str(s)] => s.chars().map(|c| Value::Str(c.to_string())).collect(),
        [single] => return Err(ctx.type_error(0, "a list or str", single)),
        _ => args.to_vec(),
    };
    let wanted = if op == BinaryOp::Gt {
        Ordering::Greater
    } else {
        Ordering::Less
    };

    let mut candidates = candidates.into_iter();
    let Some(mut best) = candidates.next() else {
        return Err(ctx.error("arg is an empty sequence"));
    };
    for candidate in candidates {
        if partial_order(&candidate, &best, op)? == Some(wanted) {
            best = candidate;
        }
    }
    Ok(best)
}

/// Length of a list, or of a str in characters.
fn haba(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    match ctx.arg(args, 0)? {
        Value::Array(items) => Ok(Value::Int(len_to_int(items.len()))),
        Value::Str(s) => Ok(Value::Int(len_to_int(s.chars().count()))),
        other => Err(ctx.type_error(0, "list or str", other)),
    }
}
