//! The `run` command: read, lex, parse and evaluate a program file.

use std::process::ExitCode;

use asin_diagnostic::emitter::ColorMode;
use asin_eval::Interpreter;

use super::report;
use crate::{read_source, run_source};

/// Run the program at `path` with stdout and stdin attached.
///
/// Output printed before a runtime error stays printed; the diagnostic
/// follows on stderr.
pub fn run_program(path: &str, color: ColorMode) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => return report(&err, color, path, None),
    };

    let mut interpreter = Interpreter::new();
    match run_source(&source, &mut interpreter) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => report(&err, color, path, Some(&source)),
    }
}
