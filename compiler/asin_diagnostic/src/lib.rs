//! Diagnostic system for Asin error reporting.
//!
//! Every failure the interpreter can report (lexical, syntax, runtime)
//! converts into a [`Diagnostic`]: an error code, the classic message, and
//! a primary label at the failing span. Emitters turn diagnostics into text.

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Footer, Label};
pub use error_code::ErrorCode;
pub use span_utils::{LineOffsetTable, SourceLocation};
