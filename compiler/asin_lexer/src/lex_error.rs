//! Lexer error type.

use asin_diagnostic::{Diagnostic, ErrorCode, LineOffsetTable, SourceLocation};
use asin_ir::Span;
use thiserror::Error;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Error)]
pub enum LexErrorKind {
    /// No token rule matches at this position.
    #[error("Unrecognized token")]
    UnrecognizedToken,
    /// Integer literal does not fit in 64 bits.
    #[error("Integer literal too large")]
    IntegerTooLarge,
}

/// A lexical error, rendered in the classic
/// `(LexicalError) : Line L: Column C: …` form.
#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error(
    "(LexicalError) : Line {}: Column {}: {} \"{}\"\n    in \"{}\"",
    .location.line,
    .location.column,
    .kind,
    .lexeme,
    .location.line_text
)]
pub struct LexError {
    pub kind: LexErrorKind,
    pub span: Span,
    /// The offending source text.
    pub lexeme: String,
    pub location: SourceLocation,
}

impl LexError {
    pub(crate) fn new(
        kind: LexErrorKind,
        span: Span,
        lexeme: &str,
        table: &LineOffsetTable,
        source: &str,
    ) -> Self {
        LexError {
            kind,
            span,
            lexeme: lexeme.to_owned(),
            location: SourceLocation::with_table(table, source, span),
        }
    }

    /// Message without the quoted source line; diagnostics show a snippet.
    pub fn headline(&self) -> String {
        format!(
            "(LexicalError) : Line {}: Column {}: {} \"{}\"",
            self.location.line, self.location.column, self.kind, self.lexeme
        )
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match self.kind {
            LexErrorKind::UnrecognizedToken => "unrecognized token",
            LexErrorKind::IntegerTooLarge => "does not fit in a 64-bit integer",
        };
        Diagnostic::error(ErrorCode::E0001)
            .with_message(self.headline())
            .with_label(self.span, label)
    }
}
