//! Runtime values.
//!
//! `Value` is the closed set of things an Asin expression can evaluate to.
//! Scalars are stored inline; arrays and open files are reference types
//! shared between bindings (`ArrayRef`, `FileRef`), so an in-place mutation
//! through one binding is visible through every other.
//!
//! # Display
//!
//! The `Display` impl is the user-facing form used by `ilimbag` and
//! `titik`: strings print raw at top level and quoted inside arrays,
//! booleans print as `Totoo`/`Huwad`, floats print in shortest round-trip
//! form with a trailing `.0` for whole numbers.

mod array;
mod file;

use std::fmt;

use asin_stack::ensure_sufficient_stack;
use rustc_hash::FxHashSet;

pub use array::ArrayRef;
pub(crate) use array::VisitedPairs;
pub use file::{FileHandle, FileMode, FileRef};

use crate::natives::NativeFunction;

/// A runtime value.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Int(i64),
    Float(f64),
    Str(String),
    Bool(bool),
    /// Shared, mutable sequence.
    Array(ArrayRef),
    /// Handle to a native function.
    Function(NativeFunction),
    /// Handle returned by `buksan`.
    File(FileRef),
    /// Result of natives that produce nothing.
    Void,
}

impl Value {
    /// Allocate a fresh array holding `items`.
    pub fn array(items: Vec<Value>) -> Self {
        Value::Array(ArrayRef::new(items))
    }

    pub fn str(s: impl Into<String>) -> Self {
        Value::Str(s.into())
    }

    /// Type name used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Str(_) => "str",
            Value::Bool(_) => "bool",
            Value::Array(_) => "list",
            Value::Function(_) => "function",
            Value::File(_) => "file",
            Value::Void => "void",
        }
    }

    /// `Huwad`, `0`, `0.0`, `""`, `[]` and `Void` are falsy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Int(n) => *n != 0,
            Value::Float(f) => *f != 0.0,
            Value::Str(s) => !s.is_empty(),
            Value::Bool(b) => *b,
            Value::Array(items) => !items.is_empty(),
            Value::Void => false,
            Value::Function(_) | Value::File(_) => true,
        }
    }

    /// Numeric view of ints and floats.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(int_to_float(*n)),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    fn fmt_with(
        &self,
        f: &mut fmt::Formatter<'_>,
        nested: bool,
        seen: &mut FxHashSet<*const ()>,
    ) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{n}"),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Str(s) if nested => write!(f, "\"{s}\""),
            Value::Str(s) => f.write_str(s),
            Value::Bool(true) => f.write_str("Totoo"),
            Value::Bool(false) => f.write_str("Huwad"),
            Value::Array(items) => {
                let ptr = items.as_ptr();
                if !seen.insert(ptr) {
                    return f.write_str("[...]");
                }
                f.write_str("[")?;
                for (i, item) in items.borrow().iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    ensure_sufficient_stack(|| item.fmt_with(f, true, seen))?;
                }
                seen.remove(&ptr);
                f.write_str("]")
            }
            Value::Function(func) => write!(f, "<native function {}>", func.name()),
            Value::File(file) => write!(f, "{file}"),
            Value::Void => f.write_str("Wala"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.fmt_with(f, false, &mut FxHashSet::default())
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_owned())
    }
}

/// Widen an int for mixed int/float arithmetic.
#[expect(
    clippy::cast_precision_loss,
    reason = "int/float mixing rounds to the nearest float by definition"
)]
pub(crate) fn int_to_float(n: i64) -> f64 {
    n as f64
}

/// Shortest round-trip float text: `2.0`, `0.1`, `1e+16`, `1.5e-07`,
/// `inf`, `nan`.
pub fn format_float(x: f64) -> String {
    if x.is_nan() {
        return "nan".to_owned();
    }
    if x.is_infinite() {
        return if x > 0.0 { "inf" } else { "-inf" }.to_owned();
    }

    let sci = format!("{x:e}");
    let (mantissa, exponent) = sci.split_once('e').unwrap_or((sci.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if (-4..16).contains(&exponent) {
        let plain = x.to_string();
        if plain.contains('.') {
            plain
        } else {
            format!("{plain}.0")
        }
    } else {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{mantissa}e{sign}{:02}", exponent.unsigned_abs())
    }
}

#[cfg(test)]
mod tests;
