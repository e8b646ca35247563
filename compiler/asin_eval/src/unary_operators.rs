//! Unary operator implementations for the evaluator.

use asin_ir::UnaryOp;

use crate::errors::{integer_overflow, invalid_unary, EvalResult};
use crate::value::Value;

/// Evaluate a unary operation. `hindi` never fails; `-` accepts numbers.
pub fn evaluate_unary(operand: &Value, op: UnaryOp) -> EvalResult {
    match (op, operand) {
        (UnaryOp::Not, value) => Ok(Value::Bool(!value.is_truthy())),
        (UnaryOp::Neg, Value::Int(n)) => n
            .checked_neg()
            .map(Value::Int)
            .ok_or_else(|| integer_overflow(format!("-({n})"))),
        (UnaryOp::Neg, Value::Float(f)) => Ok(Value::Float(-f)),
        (UnaryOp::Neg, value) => Err(invalid_unary(op, value)),
    }
}
