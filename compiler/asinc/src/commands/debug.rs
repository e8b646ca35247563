//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::process::ExitCode;

use asin_diagnostic::emitter::ColorMode;

use super::report;
use crate::{lex, parse, read_source};

/// Lex a file and display the token stream.
pub fn lex_file(path: &str, color: ColorMode) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => return report(&err, color, path, None),
    };
    let tokens = match lex(&source) {
        Ok(tokens) => tokens,
        Err(err) => return report(&err, color, path, Some(&source)),
    };

    println!("Tokens for '{}' ({} tokens):", path, tokens.len());
    for tok in tokens.iter() {
        println!("  {:?} @ {}", tok.kind, tok.span);
    }
    ExitCode::SUCCESS
}

/// Parse a file and display its statements.
pub fn parse_file(path: &str, color: ColorMode) -> ExitCode {
    let source = match read_source(path) {
        Ok(source) => source,
        Err(err) => return report(&err, color, path, None),
    };
    let program = match parse(&source) {
        Ok(program) => program,
        Err(err) => return report(&err, color, path, Some(&source)),
    };

    println!("Parse result for '{path}':");
    println!("  Statements: {}", program.stmts.len());
    if !program.stmts.is_empty() {
        println!();
        for stmt in &program.stmts {
            println!("{stmt:#?}");
        }
    }
    ExitCode::SUCCESS
}
