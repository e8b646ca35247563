//! Shared helpers for whole-program tests.

use asin_eval::{buffer_handler, scripted_handler, Interpreter};
use asinc::{run_source, RunError};

/// An interpreter that captures `ilimbag` output and reads `input` lines.
pub fn interpreter_with_input(input: &[&str]) -> Interpreter {
    Interpreter::builder()
        .print_handler(buffer_handler())
        .input_handler(scripted_handler(input.iter().copied()))
        .build()
}

/// Run `source` and return its output, panicking on any error.
pub fn run_ok(source: &str) -> String {
    let mut interpreter = interpreter_with_input(&[]);
    if let Err(err) = run_source(source, &mut interpreter) {
        panic!("program failed: {err}\n--- source ---\n{source}");
    }
    interpreter.get_print_output()
}

/// Run `source`, expecting failure; returns the error and output so far.
pub fn run_err(source: &str) -> (RunError, String) {
    let mut interpreter = interpreter_with_input(&[]);
    let err = run_source(source, &mut interpreter).expect_err("program should fail");
    (err, interpreter.get_print_output())
}
