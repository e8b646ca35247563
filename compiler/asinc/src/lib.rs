//! Asin interpreter driver.
//!
//! Wires the phases together: source text is lexed, parsed, then handed
//! to an [`Interpreter`]. Each phase fails fast, and whichever fails first
//! becomes a [`RunError`] that renders as a [`Diagnostic`].
//!
//! The `asin` binary is a thin layer over [`commands`].

pub mod commands;
mod tracing_setup;

use std::io;

use asin_diagnostic::{Diagnostic, ErrorCode};
use asin_eval::errors::{file_not_found, io_error};
use asin_eval::{EvalError, Interpreter};
use asin_ir::{Program, Span, TokenList};
use asin_lexer::LexError;
use asin_parse::ParseError;
use thiserror::Error;

pub use tracing_setup::init_tracing;

/// The first failure of a run, from whichever phase raised it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RunError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Runtime errors, and failures to read the program file.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

impl RunError {
    pub fn code(&self) -> ErrorCode {
        match self {
            RunError::Lex(_) => ErrorCode::E0001,
            RunError::Parse(err) => err.code(),
            RunError::Eval(err) => err.code(),
        }
    }

    pub fn span(&self) -> Option<Span> {
        match self {
            RunError::Lex(err) => Some(err.span),
            RunError::Parse(err) => Some(err.span),
            RunError::Eval(err) => err.span,
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            RunError::Lex(err) => err.to_diagnostic(),
            RunError::Parse(err) => err.to_diagnostic(),
            RunError::Eval(err) => err.to_diagnostic(),
        }
    }
}

/// Lex `source` into tokens.
pub fn lex(source: &str) -> Result<TokenList, RunError> {
    Ok(asin_lexer::lex(source)?)
}

/// Lex and parse `source` without running it.
pub fn parse(source: &str) -> Result<Program, RunError> {
    let tokens = lex(source)?;
    Ok(asin_parse::parse(&tokens, source)?)
}

/// Lex, parse and run `source` on `interpreter`.
///
/// Bindings made by the program stay in the interpreter afterwards, so
/// several sources can run against one environment.
pub fn run_source(source: &str, interpreter: &mut Interpreter) -> Result<(), RunError> {
    let program = parse(source)?;
    interpreter.run(&program)?;
    Ok(())
}

/// Read a program file. A missing file is an `InexistentFileError`.
pub fn read_source(path: &str) -> Result<String, RunError> {
    std::fs::read_to_string(path).map_err(|err| {
        let err = if err.kind() == io::ErrorKind::NotFound {
            file_not_found(path)
        } else {
            io_error(&err)
        };
        RunError::Eval(err)
    })
}

/// Read and run the program at `path`.
pub fn run_file(path: &str, interpreter: &mut Interpreter) -> Result<(), RunError> {
    let source = read_source(path)?;
    tracing::debug!(path, bytes = source.len(), "running file");
    run_source(&source, interpreter)
}
