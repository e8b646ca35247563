//! Asin Eval - tree-walking evaluator for Asin programs.
//!
//! # Architecture
//!
//! - [`Value`]: runtime values; arrays and files are shared references
//! - [`Environment`]: separate variable and native-function namespaces
//! - [`evaluate_binary`] / [`evaluate_unary`]: enum-dispatched operators
//! - [`Outcome`]: statement results, with `Break` as data rather than a
//!   Rust control-flow jump
//! - [`natives`]: the built-in function tables and [`Registry`]
//! - [`Interpreter`]: walks a `Program`, owning its environment and the
//!   print/input handlers

mod environment;
pub mod errors;
mod input_handler;
pub mod interpreter;
pub mod natives;
mod operators;
mod outcome;
mod print_handler;
mod suggest;
mod unary_operators;
mod value;

pub use environment::Environment;
pub use errors::{EvalError, EvalErrorKind, EvalResult, NameSpace};
pub use input_handler::{
    scripted_handler, stdin_handler, InputHandlerImpl, ScriptedInputHandler, SharedInputHandler,
    StdinInputHandler,
};
pub use interpreter::{Interpreter, InterpreterBuilder};
pub use natives::{Arity, CallContext, NativeFunction, Registry};
pub use operators::{compare, evaluate_binary};
pub use outcome::Outcome;
pub use print_handler::{
    buffer_handler, silent_handler, stdout_handler, BufferPrintHandler, PrintHandlerImpl,
    SharedPrintHandler, StdoutPrintHandler,
};
pub use unary_operators::evaluate_unary;
pub use value::{format_float, ArrayRef, FileHandle, FileMode, FileRef, Value};
