//! Binary operator implementations for the evaluator.
//!
//! Direct enum-based dispatch on `(left, right)` value pairs. The type set
//! is closed, so every unsupported pairing falls through to a single
//! `TypeError` arm carrying both operands.

use std::cmp::Ordering;

use asin_ir::BinaryOp;
use asin_stack::ensure_sufficient_stack;

use crate::errors::{division_by_zero, integer_overflow, invalid_binary, math_domain, EvalResult};
use crate::value::{int_to_float, ArrayRef, Value, VisitedPairs};

/// Checked integer arithmetic; overflow reports the failing expression.
#[inline]
fn checked_arith(result: Option<i64>, a: i64, op: BinaryOp, b: i64) -> EvalResult {
    result
        .map(Value::Int)
        .ok_or_else(|| integer_overflow(format!("{a} {op} {b}")))
}

/// Evaluate a binary operation on two already-evaluated operands.
///
/// Logical operators never fail; comparisons fail only for incompatible
/// operand types.
pub fn evaluate_binary(left: &Value, right: &Value, op: BinaryOp) -> EvalResult {
    if op.is_logical() {
        let result = match op {
            BinaryOp::And => left.is_truthy() && right.is_truthy(),
            _ => left.is_truthy() || right.is_truthy(),
        };
        return Ok(Value::Bool(result));
    }
    if op.is_comparison() {
        return compare(left, right, op).map(Value::Bool);
    }

    match (left, right) {
        (Value::Int(a), Value::Int(b)) => eval_int_binary(*a, *b, op),
        (Value::Float(a), Value::Float(b)) => eval_float_binary(*a, *b, op, left),
        (Value::Int(a), Value::Float(b)) => eval_float_binary(int_to_float(*a), *b, op, left),
        (Value::Float(a), Value::Int(b)) => eval_float_binary(*a, int_to_float(*b), op, left),
        (Value::Str(a), Value::Str(b)) if op == BinaryOp::Add => Ok(Value::Str(format!("{a}{b}"))),
        (Value::Str(s), Value::Int(n)) | (Value::Int(n), Value::Str(s)) if op == BinaryOp::Mul => {
            Ok(Value::Str(s.repeat(repeat_count(*n))))
        }
        (Value::Array(a), Value::Array(b)) if op == BinaryOp::Add => {
            let mut items = a.to_vec();
            items.extend(b.borrow().iter().cloned());
            Ok(Value::array(items))
        }
        (Value::Array(a), Value::Int(n)) | (Value::Int(n), Value::Array(a))
            if op == BinaryOp::Mul =>
        {
            let items = a.to_vec();
            let count = repeat_count(*n);
            Ok(Value::array(items.iter().cloned().cycle().take(items.len() * count).collect()))
        }
        _ => Err(invalid_binary(left, op, right)),
    }
}

/// Non-positive repetition counts produce an empty result.
fn repeat_count(n: i64) -> usize {
    usize::try_from(n).unwrap_or(0)
}

fn eval_int_binary(a: i64, b: i64, op: BinaryOp) -> EvalResult {
    let dividend = Value::Int(a);
    match op {
        BinaryOp::Add => checked_arith(a.checked_add(b), a, op, b),
        BinaryOp::Sub => checked_arith(a.checked_sub(b), a, op, b),
        BinaryOp::Mul => checked_arith(a.checked_mul(b), a, op, b),
        BinaryOp::Div => {
            if b == 0 {
                return Err(division_by_zero(&dividend));
            }
            Ok(Value::Float(int_to_float(a) / int_to_float(b)))
        }
        BinaryOp::FloorDiv => {
            if b == 0 {
                return Err(division_by_zero(&dividend));
            }
            checked_arith(floor_div(a, b), a, op, b)
        }
        BinaryOp::Mod => {
            if b == 0 {
                return Err(division_by_zero(&dividend));
            }
            checked_arith(floor_mod(a, b), a, op, b)
        }
        BinaryOp::Pow => int_pow(a, b),
        _ => Err(invalid_binary(&dividend, op, &Value::Int(b))),
    }
}

/// Integer division rounding toward negative infinity.
fn floor_div(a: i64, b: i64) -> Option<i64> {
    let q = a.checked_div(b)?;
    let r = a.checked_rem(b)?;
    if r != 0 && ((r < 0) != (b < 0)) {
        q.checked_sub(1)
    } else {
        Some(q)
    }
}

/// Remainder taking the divisor's sign. Never overflows: only
/// `i64::MIN % -1` trips `checked_rem`, and its remainder is 0.
fn floor_mod(a: i64, b: i64) -> Option<i64> {
    if b == -1 {
        return Some(0);
    }
    let r = a.checked_rem(b)?;
    if r != 0 && ((r < 0) != (b < 0)) {
        r.checked_add(b)
    } else {
        Some(r)
    }
}

/// `int ** int`: a negative exponent yields a float.
fn int_pow(base: i64, exp: i64) -> EvalResult {
    if exp < 0 {
        if base == 0 {
            return Err(division_by_zero(&Value::Int(base)));
        }
        return Ok(Value::Float(int_to_float(base).powf(int_to_float(exp))));
    }
    let result = match u32::try_from(exp) {
        Ok(exp) => base.checked_pow(exp),
        Err(_) => match base {
            0 | 1 => Some(base),
            -1 => Some(if exp % 2 == 0 { 1 } else { -1 }),
            _ => None,
        },
    };
    checked_arith(result, base, BinaryOp::Pow, exp)
}

fn eval_float_binary(a: f64, b: f64, op: BinaryOp, dividend: &Value) -> EvalResult {
    let result = match op {
        BinaryOp::Add => a + b,
        BinaryOp::Sub => a - b,
        BinaryOp::Mul => a * b,
        BinaryOp::Div | BinaryOp::FloorDiv | BinaryOp::Mod if b == 0.0 => {
            return Err(division_by_zero(dividend));
        }
        BinaryOp::Div => a / b,
        BinaryOp::FloorDiv => float_divmod(a, b).0,
        BinaryOp::Mod => float_divmod(a, b).1,
        BinaryOp::Pow => {
            if a == 0.0 && b < 0.0 {
                return Err(division_by_zero(dividend));
            }
            let result = a.powf(b);
            if result.is_nan() && !a.is_nan() && !b.is_nan() {
                return Err(math_domain(format!(
                    "{} ** {}",
                    Value::Float(a),
                    Value::Float(b)
                )));
            }
            result
        }
        _ => return Err(invalid_binary(&Value::Float(a), op, &Value::Float(b))),
    };
    Ok(Value::Float(result))
}

/// Floor quotient and modulo for a nonzero divisor, chosen together so
/// that `a == b * q + m` as closely as rounding allows. The quotient comes
/// from the exact remainder rather than from `(a / b).floor()`, which can
/// round up across an integer (`1 // 0.1` is `9.0`, not `10.0`).
fn float_divmod(a: f64, b: f64) -> (f64, f64) {
    let mut m = a % b;
    let mut q = (a - m) / b;
    if m == 0.0 {
        m = 0.0_f64.copysign(b);
    } else if (m < 0.0) != (b < 0.0) {
        m += b;
        q -= 1.0;
    }
    if q == 0.0 {
        return (0.0_f64.copysign(a / b), m);
    }
    let floor = q.floor();
    let q = if q - floor > 0.5 { floor + 1.0 } else { floor };
    (q, m)
}

/// Evaluate a comparison operator.
///
/// Numbers compare across int/float, strings lexicographically, booleans
/// with `Huwad < Totoo`, lists element-wise. Any other pairing is a
/// `TypeError`, including `==` between incompatible types. NaN is
/// unordered and unequal to everything.
pub fn compare(left: &Value, right: &Value, op: BinaryOp) -> EvalResult<bool> {
    let ordering = partial_order(left, right, op)?;
    Ok(match op {
        BinaryOp::Eq => ordering == Some(Ordering::Equal),
        BinaryOp::NotEq => ordering != Some(Ordering::Equal),
        BinaryOp::Lt => ordering == Some(Ordering::Less),
        BinaryOp::LtEq => matches!(ordering, Some(Ordering::Less | Ordering::Equal)),
        BinaryOp::Gt => ordering == Some(Ordering::Greater),
        BinaryOp::GtEq => matches!(ordering, Some(Ordering::Greater | Ordering::Equal)),
        _ => return Err(invalid_binary(left, op, right)),
    })
}

/// Order two values; `None` means unordered (NaN). `op` is only used for
/// the error message.
pub fn partial_order(left: &Value, right: &Value, op: BinaryOp) -> EvalResult<Option<Ordering>> {
    order_with(left, right, op, &mut VisitedPairs::default())
}

fn order_with(
    left: &Value,
    right: &Value,
    op: BinaryOp,
    visited: &mut VisitedPairs,
) -> EvalResult<Option<Ordering>> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Some(a.cmp(b))),
        (Value::Float(a), Value::Float(b)) => Ok(a.partial_cmp(b)),
        (Value::Int(a), Value::Float(b)) => Ok(int_to_float(*a).partial_cmp(b)),
        (Value::Float(a), Value::Int(b)) => Ok(a.partial_cmp(&int_to_float(*b))),
        (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
        (Value::Bool(a), Value::Bool(b)) => Ok(Some(a.cmp(b))),
        (Value::Array(a), Value::Array(b)) => list_order(a, b, op, visited),
        _ => Err(invalid_binary(left, op, right)),
    }
}

/// Lexicographic order: the first unequal pair decides, then length.
///
/// A pair of lists met again while still being compared is treated as
/// equal, so lists that contain themselves compare in finite time.
fn list_order(
    a: &ArrayRef,
    b: &ArrayRef,
    op: BinaryOp,
    visited: &mut VisitedPairs,
) -> EvalResult<Option<Ordering>> {
    if a.ptr_eq(b) || !visited.insert((a.as_ptr(), b.as_ptr())) {
        return Ok(Some(Ordering::Equal));
    }
    let (left, right) = (a.to_vec(), b.to_vec());
    for (x, y) in left.iter().zip(&right) {
        match ensure_sufficient_stack(|| order_with(x, y, op, visited))? {
            Some(Ordering::Equal) => {}
            other => return Ok(other),
        }
    }
    Ok(Some(left.len().cmp(&right.len())))
}
