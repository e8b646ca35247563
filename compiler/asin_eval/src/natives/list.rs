//! List natives. The `-in` verbs mutate their argument in place; the
//! adjective forms (`baligtad`, `nakaayos`) return a fresh list.

use std::cmp::Ordering;

use asin_ir::BinaryOp;

use super::{Arity, CallContext, NativeFunction};
use crate::errors::{empty_list, EvalResult};
use crate::operators::partial_order;
use crate::value::Value;

pub(super) const FUNCTIONS: &[NativeFunction] = &[
    NativeFunction::new("palitan", Arity::Exact(3), palitan),
    NativeFunction::new("idagdag", Arity::Exact(2), idagdag),
    NativeFunction::new("tanggalan", Arity::Exact(1), tanggalan),
    NativeFunction::new("silipin", Arity::Exact(1), silipin),
    NativeFunction::new("isaayos", Arity::Range(1, 2), isaayos),
    NativeFunction::new("baligtarin", Arity::Exact(1), baligtarin),
    NativeFunction::new("baligtad", Arity::Exact(1), baligtad),
    NativeFunction::new("nakaayos", Arity::Exact(1), nakaayos),
];

/// `palitan(arr, i, v)` sets `arr[i] = v`.
fn palitan(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    let items = ctx.array(args, 0)?;
    items.set(ctx.arg(args, 1)?, ctx.arg(args, 2)?.clone())?;
    Ok(Value::Void)
}

fn idagdag(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    let value = ctx.arg(args, 1)?.clone();
    ctx.array(args, 0)?.borrow_mut().push(value);
    Ok(Value::Void)
}

/// Remove and return the last element.
fn tanggalan(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    let popped = ctx.array(args, 0)?.borrow_mut().pop();
    popped.ok_or_else(|| empty_list(ctx.name))
}

/// Return the last element without removing it.
fn silipin(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    let last = ctx.array(args, 0)?.borrow().last().cloned();
    last.ok_or_else(|| empty_list(ctx.name))
}

/// Stable in-place sort; a truthy second argument sorts descending.
/// On a comparison error the list is left untouched.
fn isaayos(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    let items = ctx.array(args, 0)?;
    let descending = args.get(1).is_some_and(Value::is_truthy);
    let sorted = sort_values(items.to_vec(), descending)?;
    *items.borrow_mut() = sorted;
    Ok(Value::Void)
}

fn baligtarin(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    ctx.array(args, 0)?.borrow_mut().reverse();
    Ok(Value::Void)
}

fn baligtad(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    let mut items = elements(ctx, args)?;
    items.reverse();
    Ok(Value::array(items))
}

fn nakaayos(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
    let items = elements(ctx, args)?;
    Ok(Value::array(sort_values(items, false)?))
}

/// A copy of a list argument, or a str split into one-character strs.
fn elements(ctx: &CallContext<'_>, args: &[Value]) -> EvalResult<Vec<Value>> {
    match ctx.arg(args, 0)? {
        Value::Array(items) => Ok(items.to_vec()),
        Value::Str(s) => Ok(s.chars().map(|c| Value::Str(c.to_string())).collect()),
        other => Err(ctx.type_error(0, "list or str", other)),
    }
}

/// Stable merge sort with a fallible comparison. Incomparable elements
/// are a `TypeError`; unordered ones (NaN) keep their relative order.
fn sort_values(items: Vec<Value>, descending: bool) -> EvalResult<Vec<Value>> {
    let mut before = |a: &Value, b: &Value| -> EvalResult<bool> {
        let (first, second) = if descending { (b, a) } else { (a, b) };
        Ok(partial_order(first, second, BinaryOp::Lt)? == Some(Ordering::Less))
    };
    merge_sort(items, &mut before)
}

fn merge_sort(
    mut items: Vec<Value>,
    before: &mut dyn FnMut(&Value, &Value) -> EvalResult<bool>,
) -> EvalResult<Vec<Value>> {
    if items.len() <= 1 {
        return Ok(items);
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, before)?;
    let right = merge_sort(right, before)?;

    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut right = right.into_iter().peekable();
    for item in left {
        // Take from the right only when strictly earlier, which keeps the
        // sort stable.
        while let Some(candidate) = right.peek() {
            if !before(candidate, &item)? {
                break;
            }
            merged.extend(right.next());
        }
        merged.push(item);
    }
    merged.extend(right);
    Ok(merged)
}
