//! Terminal rendering of run errors.

use asin_diagnostic::emitter::{ColorMode, DiagnosticEmitter, TerminalEmitter};
use pretty_assertions::assert_eq;

use crate::common::run_err;

fn render(source: &str) -> String {
    let (err, _) = run_err(source);
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Never, false)
        .with_source("main.asin", source);
    emitter.emit(&err.to_diagnostic());
    String::from_utf8(emitter.into_inner()).unwrap()
}

#[test]
fn name_error_snippet() {
    let rendered = render("x = 1;\nilimbag(x + y);");
    let expected = [
        "error[E6001]: (NameError) : \"y\" is not a defined variable name",
        " --> main.asin:2:13",
        "  |",
        "2 | ilimbag(x + y);",
        "  |             ^ not bound to a value",
        "  = note: variables are bound by assignment or by a `sa bawat` loop",
        "",
        "",
    ]
    .join("\n");
    assert_eq!(rendered, expected);
}

#[test]
fn runtime_error_underlines_whole_expression() {
    let rendered = render("z = 10 // 0;");
    assert!(rendered.starts_with("error[E6003]: (ArithmeticError) : "));
    assert!(rendered.contains("1 | z = 10 // 0;\n"));
    assert!(rendered.contains("  |     ^^^^^^^ division by zero\n"));
}

#[test]
fn misspelled_builtin_gets_help() {
    let rendered = render("n = hab([1, 2]);");
    assert!(rendered.contains("  |     ^^^ no built-in function with this name\n"));
    assert!(rendered.ends_with(
        "  = note: only built-in functions can be called\n  = help: did you mean `haba`?\n\n"
    ));
}

#[test]
fn colors_are_opt_in() {
    let (err, _) = run_err("x = y;");
    let mut emitter = TerminalEmitter::with_color_mode(Vec::new(), ColorMode::Always, false);
    emitter.emit(&err.to_diagnostic());
    let rendered = String::from_utf8(emitter.into_inner()).unwrap();
    assert!(rendered.contains("\x1b[1;31m"));
}
