//! Command handlers for the `asin` CLI.
//!
//! Each handler reports its own failures as diagnostics on stderr and
//! returns the process exit code.

mod debug;
mod run;

use std::io::{IsTerminal, Stderr};
use std::process::ExitCode;

use asin_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};

use crate::RunError;

pub use debug::{lex_file, parse_file};
pub use run::run_program;

/// Emitter for stderr, with `source` attached for snippets when known.
fn stderr_emitter(color: ColorMode, path: &str, source: Option<&str>) -> TerminalEmitter<Stderr> {
    let emitter = TerminalEmitter::stderr(color, std::io::stderr().is_terminal());
    match source {
        Some(text) => emitter.with_source(path, text),
        None => emitter,
    }
}

/// Render `err` to stderr and return the failure exit code.
fn report(err: &RunError, color: ColorMode, path: &str, source: Option<&str>) -> ExitCode {
    tracing::debug!(code = err.code().as_str(), "run failed");
    let mut emitter = stderr_emitter(color, path, source);
    emitter.emit(&err.to_diagnostic());
    emitter.flush();
    ExitCode::FAILURE
}
