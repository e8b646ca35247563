//! The first failing phase decides the error.

use asin_diagnostic::ErrorCode;
use asin_eval::EvalErrorKind;
use pretty_assertions::assert_eq;

use crate::common::{interpreter_with_input, run_err};
use asinc::{read_source, run_file, RunError};

#[test]
fn lexical_error_stops_before_running() {
    let (err, output) = run_err("ilimbag(1);\nx = 2 $ 3;");
    assert!(matches!(err, RunError::Lex(_)));
    assert_eq!(err.code(), ErrorCode::E0001);
    assert_eq!(
        err.to_string(),
        "(LexicalError) : Line 2: Column 7: Unrecognized token \"$\"\n    in \"x = 2 $ 3;\""
    );
    assert_eq!(output, "");
}

#[test]
fn syntax_error_stops_before_running() {
    let (err, output) = run_err("ilimbag(1);\nx = (2 + ;");
    assert!(matches!(err, RunError::Parse(_)));
    assert_eq!(err.code(), ErrorCode::E1001);
    assert_eq!(output, "");

    let (err, _) = run_err("kapag (Totoo) {");
    assert_eq!(err.to_string(), "(SyntaxError) : Reached unexpected end of input");
    assert_eq!(err.code(), ErrorCode::E1002);
}

#[test]
fn runtime_error_keeps_earlier_output() {
    let (err, output) = run_err("ilimbag(\"bago\");\nilimbag(1 / 0);\nilimbag(\"hindi na\");");
    assert_eq!(
        err.to_string(),
        "(ArithmeticError) : Invalid operation: Dividing int (1) by zero (0)"
    );
    assert_eq!(err.code(), ErrorCode::E6003);
    assert_eq!(output, "bago\n");
}

#[test]
fn runtime_error_codes() {
    let cases = [
        ("x = y;", ErrorCode::E6001),
        ("x = 1 + Totoo;", ErrorCode::E6002),
        ("x = haba(1, 2);", ErrorCode::E6002),
        ("x = 2 ** 64 * 2 ** 64;", ErrorCode::E6003),
        ("xs = [1];\nx = xs[2];", ErrorCode::E6004),
        ("x = \"s\" * -1.5;", ErrorCode::E6002),
    ];
    for (source, code) in cases {
        let (err, _) = run_err(source);
        assert_eq!(err.code(), code, "{source}: {err}");
    }
}

#[test]
fn missing_program_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("wala.asin");
    let path = path.to_str().unwrap();

    let err = read_source(path).unwrap_err();
    assert_eq!(err.to_string(), format!("(InexistentFileError) : File \"{path}\" not found"));
    assert_eq!(err.code(), ErrorCode::E6005);

    let mut interpreter = interpreter_with_input(&[]);
    let err = run_file(path, &mut interpreter).unwrap_err();
    assert!(matches!(
        err,
        RunError::Eval(ref e) if matches!(e.kind, EvalErrorKind::FileNotFound { .. })
    ));
}

#[test]
fn error_spans_point_into_source() {
    let source = "xs = [1, 2, 3];\nilimbag(xs[10]);";
    let (err, _) = run_err(source);
    let span = err.span().unwrap();
    assert_eq!(&source[span.to_range()], "10");
}
