//! Parse error type.
//!
//! Two classic forms: an offending token quoted with its line, column and
//! source line, or a bare "unexpected end of input".

use asin_diagnostic::{Diagnostic, ErrorCode, SourceLocation};
use asin_ir::Span;
use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseErrorKind {
    #[error(
        "(SyntaxError) : Line {}: Column {}: offending token \"{lexeme}\", no matching grammar rule\n    in \"{}\"",
        .location.line,
        .location.column,
        .location.line_text
    )]
    OffendingToken {
        lexeme: String,
        location: SourceLocation,
    },
    #[error("(SyntaxError) : Reached unexpected end of input")]
    UnexpectedEof,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
    /// What the grammar wanted at this point, for the diagnostic label.
    pub expected: Option<&'static str>,
    /// The `{` of the innermost block left open when input ran out.
    pub unclosed: Option<Span>,
}

impl ParseError {
    pub fn offending_token(
        lexeme: String,
        location: SourceLocation,
        span: Span,
        expected: Option<&'static str>,
    ) -> Self {
        ParseError {
            kind: ParseErrorKind::OffendingToken { lexeme, location },
            span,
            expected,
            unclosed: None,
        }
    }

    pub fn unexpected_eof(span: Span, expected: Option<&'static str>) -> Self {
        ParseError {
            kind: ParseErrorKind::UnexpectedEof,
            span,
            expected,
            unclosed: None,
        }
    }

    /// Record `open` as the unclosed block, if input ran out and no inner
    /// block was recorded first.
    #[must_use]
    pub fn within_block(mut self, open: Span) -> Self {
        if self.kind == ParseErrorKind::UnexpectedEof {
            self.unclosed.get_or_insert(open);
        }
        self
    }

    pub fn code(&self) -> ErrorCode {
        match self.kind {
            ParseErrorKind::OffendingToken { .. } => ErrorCode::E1001,
            ParseErrorKind::UnexpectedEof => ErrorCode::E1002,
        }
    }

    /// Message without the quoted source line; diagnostics show a snippet.
    pub fn headline(&self) -> String {
        match &self.kind {
            ParseErrorKind::OffendingToken { lexeme, location } => format!(
                "(SyntaxError) : Line {}: Column {}: offending token \"{lexeme}\", no matching grammar rule",
                location.line, location.column
            ),
            ParseErrorKind::UnexpectedEof => self.kind.to_string(),
        }
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = self
            .expected
            .map_or_else(|| "no matching grammar rule".to_owned(), |e| format!("expected {e}"));
        let diagnostic = Diagnostic::error(self.code())
            .with_message(self.headline())
            .with_label(self.span, label);
        match self.unclosed {
            Some(open) => diagnostic.with_secondary_label(open, "this block is never closed"),
            None => diagnostic,
        }
    }
}
