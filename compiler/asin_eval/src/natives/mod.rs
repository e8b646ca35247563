//! Built-in (native) functions.
//!
//! Natives are plain `fn` pointers grouped into per-concern tables:
//!
//! - `convert.rs`: `bilang`, `lutang`, `titik`
//! - `math.rs`: rounding, powers, logarithms, `maximo`/`minimo`, `haba`
//! - `list.rs`: in-place and copying list operations
//! - `io.rs`: `pahingi` and file handles
//!
//! A [`Registry`] collects the tables; an `Environment` copies a registry
//! into its function namespace once, at construction.

mod convert;
mod io;
mod list;
mod math;

use std::fmt;

use crate::errors::{integer_overflow, invalid_argument, math_domain, EvalError, EvalResult};
use crate::input_handler::InputHandlerImpl;
use crate::print_handler::PrintHandlerImpl;
use crate::value::{ArrayRef, FileRef, Value};

/// Signature shared by every native.
pub type NativeFn = fn(&CallContext<'_>, &[Value]) -> EvalResult;

/// Accepted argument counts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Arity {
    Exact(usize),
    /// Inclusive on both ends.
    Range(usize, usize),
    AtLeast(usize),
}

impl Arity {
    pub fn accepts(self, given: usize) -> bool {
        match self {
            Arity::Exact(n) => given == n,
            Arity::Range(min, max) => (min..=max).contains(&given),
            Arity::AtLeast(min) => given >= min,
        }
    }

    fn describe(self) -> String {
        let plural = |n: usize| if n == 1 { "argument" } else { "arguments" };
        match self {
            Arity::Exact(0) => "takes no arguments".to_owned(),
            Arity::Exact(n) => format!("takes exactly {n} {}", plural(n)),
            Arity::Range(min, max) => format!("takes from {min} to {max} arguments"),
            Arity::AtLeast(n) => format!("takes at least {n} {}", plural(n)),
        }
    }

    /// `TypeError` unless `given` is accepted.
    pub fn check(self, function: &'static str, given: usize) -> EvalResult<()> {
        if self.accepts(given) {
            Ok(())
        } else {
            Err(invalid_argument(
                function,
                format!("{} ({given} given)", self.describe()),
            ))
        }
    }
}

/// A named native with its arity.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    name: &'static str,
    arity: Arity,
    func: NativeFn,
}

impl NativeFunction {
    pub const fn new(name: &'static str, arity: Arity, func: NativeFn) -> Self {
        NativeFunction { name, arity, func }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn arity(&self) -> Arity {
        self.arity
    }

    /// Check arity, then invoke.
    pub fn call(&self, ctx: &CallContext<'_>, args: &[Value]) -> EvalResult {
        self.arity.check(self.name, args.len())?;
        (self.func)(ctx, args)
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arity == other.arity
    }
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NativeFunction({}, {:?})", self.name, self.arity)
    }
}

/// The host capabilities a native may use, plus its own name for errors.
pub struct CallContext<'a> {
    pub name: &'static str,
    pub print: &'a PrintHandlerImpl,
    pub input: &'a InputHandlerImpl,
}

impl<'a> CallContext<'a> {
    pub fn new(
        name: &'static str,
        print: &'a PrintHandlerImpl,
        input: &'a InputHandlerImpl,
    ) -> Self {
        CallContext { name, print, input }
    }

    /// `TypeError` in the argument form: `name() message`.
    pub fn error(&self, message: impl Into<String>) -> EvalError {
        invalid_argument(self.name, message)
    }

    fn type_error(&self, index: usize, expected: &str, found: &Value) -> EvalError {
        self.error(format!(
            "argument {} must be {expected}, not {}",
            index + 1,
            found.type_name()
        ))
    }

    fn arg<'v>(&self, args: &'v [Value], index: usize) -> EvalResult<&'v Value> {
        args.get(index)
            .ok_or_else(|| self.error(format!("missing argument {}", index + 1)))
    }

    fn array<'v>(&self, args: &'v [Value], index: usize) -> EvalResult<&'v ArrayRef> {
        match self.arg(args, index)? {
            Value::Array(items) => Ok(items),
            other => Err(self.type_error(index, "list", other)),
        }
    }

    fn str<'v>(&self, args: &'v [Value], index: usize) -> EvalResult<&'v str> {
        match self.arg(args, index)? {
            Value::Str(s) => Ok(s),
            other => Err(self.type_error(index, "str", other)),
        }
    }

    fn number(&self, args: &[Value], index: usize) -> EvalResult<f64> {
        let value = self.arg(args, index)?;
        value
            .as_float()
            .ok_or_else(|| self.type_error(index, "a number", value))
    }

    fn file<'v>(&self, args: &'v [Value], index: usize) -> EvalResult<&'v FileRef> {
        match self.arg(args, index)? {
            Value::File(file) => Ok(file),
            other => Err(self.type_error(index, "file", other)),
        }
    }

    /// `name(a, b)` as written, for arithmetic error messages.
    fn call_text(&self, args: &[Value]) -> String {
        let args: Vec<String> = args.iter().map(ToString::to_string).collect();
        format!("{}({})", self.name, args.join(", "))
    }
}

/// Named natives, in registration order.
#[derive(Clone, Debug, Default)]
pub struct Registry {
    functions: Vec<NativeFunction>,
}

impl Registry {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Every built-in function.
    pub fn standard() -> Self {
        let mut registry = Self::empty();
        for table in [
            convert::FUNCTIONS,
            math::FUNCTIONS,
            list::FUNCTIONS,
            io::FUNCTIONS,
        ] {
            for function in table {
                registry.register(*function);
            }
        }
        registry
    }

    /// Add `function`, replacing any native with the same name.
    pub fn register(&mut self, function: NativeFunction) {
        match self.functions.iter_mut().find(|f| f.name == function.name) {
            Some(slot) => *slot = function,
            None => self.functions.push(function),
        }
    }

    pub fn get(&self, name: &str) -> Option<&NativeFunction> {
        self.functions.iter().find(|f| f.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &NativeFunction> {
        self.functions.iter()
    }
}

/// 2^63, the first float past `i64::MAX`.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Convert an already-rounded float to an int. NaN is a domain error;
/// infinities and out-of-range values overflow.
#[expect(
    clippy::cast_possible_truncation,
    reason = "range is checked before the cast"
)]
pub(crate) fn float_to_int(x: f64, operation: impl FnOnce() -> String) -> EvalResult<i64> {
    if x.is_nan() {
        return Err(math_domain(operation()));
    }
    if !(-I64_BOUND..I64_BOUND).contains(&x) {
        return Err(integer_overflow(operation()));
    }
    Ok(x as i64)
}

pub(crate) fn len_to_int(len: usize) -> i64 {
    i64::try_from(len).unwrap_or(i64::MAX)
}
