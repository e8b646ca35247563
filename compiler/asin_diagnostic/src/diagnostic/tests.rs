use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_diagnostic_builder() {
    let diag = Diagnostic::error(ErrorCode::E6001)
        .with_message("(NameError) : \"x\" is not a defined variable name")
        .with_label(Span::new(0, 1), "not bound to a value")
        .with_note("variables are bound by assignment")
        .with_help("did you mean `y`?");

    assert_eq!(diag.code, ErrorCode::E6001);
    assert_eq!(diag.labels, vec![Label::primary(Span::new(0, 1), "not bound to a value")]);
    assert_eq!(
        diag.footers,
        vec![
            Footer::Note("variables are bound by assignment".to_owned()),
            Footer::Help("did you mean `y`?".to_owned()),
        ]
    );
}

#[test]
fn test_primary_span_skips_secondary() {
    let diag = Diagnostic::error(ErrorCode::E1002)
        .with_secondary_label(Span::new(0, 1), "block opened here")
        .with_label(Span::new(4, 4), "expected `}`");
    assert_eq!(diag.primary_span(), Some(Span::new(4, 4)));
}

#[test]
fn test_no_labels_has_no_primary_span() {
    let diag = Diagnostic::error(ErrorCode::E1002).with_message("eof");
    assert_eq!(diag.primary_span(), None);
}

#[test]
fn test_footer_display() {
    assert_eq!(Footer::Note("n".to_owned()).to_string(), "note: n");
    assert_eq!(Footer::Help("h".to_owned()).to_string(), "help: h");
}

#[test]
fn test_diagnostic_display() {
    let diag = Diagnostic::error(ErrorCode::E6003)
        .with_message("division by zero")
        .with_label(Span::new(2, 7), "here")
        .with_secondary_label(Span::new(0, 1), "dividend")
        .with_note("context");

    assert_eq!(
        diag.to_string(),
        "error[E6003]: division by zero\n  --> 2..7: here\n  ... 0..1: dividend\n  = note: context"
    );
}
