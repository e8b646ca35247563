//! Recursive descent parser for Asin.
//!
//! Turns a `TokenList` into a `Program`. The parser guarantees structure
//! only; names, types and ranges are checked during evaluation. Parsing is
//! fail-fast: the first token that fits no grammar rule is reported.
//!
//! # Module Structure
//!
//! - `cursor.rs`: token navigation
//! - `grammar/stmt`: statements and blocks
//! - `grammar/expr`: expression precedence chain, operators, primaries

mod cursor;
mod error;
mod grammar;

use asin_diagnostic::{LineOffsetTable, SourceLocation};
use asin_ir::{Program, Span, Token, TokenKind, TokenList};

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

/// Parse a token stream into a `Program`.
///
/// `source` is the text the tokens were lexed from; it supplies the line
/// and column quoted in syntax errors.
pub fn parse(tokens: &TokenList, source: &str) -> Result<Program, ParseError> {
    Parser::new(tokens, source).parse_program()
}

/// Parser state.
pub struct Parser<'a> {
    cursor: Cursor<'a>,
    source: &'a str,
    lines: LineOffsetTable,
}

impl<'a> Parser<'a> {
    pub fn new(tokens: &'a TokenList, source: &'a str) -> Self {
        Parser {
            cursor: Cursor::new(tokens),
            source,
            lines: LineOffsetTable::build(source),
        }
    }

    #[inline]
    fn current(&self) -> &'a Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> &'a TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_span(&self) -> Span {
        self.cursor.current_span()
    }

    #[inline]
    fn previous_span(&self) -> Span {
        self.cursor.previous_span()
    }

    #[inline]
    fn check(&self, kind: &TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn peek_kind_at(&self, n: usize) -> &'a TokenKind {
        self.cursor.peek_kind_at(n)
    }

    #[inline]
    fn advance(&mut self) -> &'a Token {
        self.cursor.advance()
    }

    /// Consume a token of the given kind or report the current one.
    fn expect(&mut self, kind: &TokenKind, expected: &'static str) -> Result<Span, ParseError> {
        if self.check(kind) {
            Ok(self.advance().span)
        } else {
            Err(self.error_at_current(Some(expected)))
        }
    }

    /// Consume an identifier and return its name and span.
    fn expect_ident(&mut self) -> Result<(String, Span), ParseError> {
        if let TokenKind::Ident(name) = self.current_kind() {
            let span = self.advance().span;
            Ok((name.clone(), span))
        } else {
            Err(self.error_at_current(Some("an identifier")))
        }
    }

    /// Build the classic error for the current token.
    fn error_at_current(&self, expected: Option<&'static str>) -> ParseError {
        let token = self.current();
        if token.kind == TokenKind::Eof {
            return ParseError::unexpected_eof(token.span, expected);
        }
        let location = SourceLocation::with_table(&self.lines, self.source, token.span);
        let lexeme = self
            .source
            .get(token.span.to_range())
            .map_or_else(|| token.kind.lexeme(), str::to_owned);
        ParseError::offending_token(lexeme, location, token.span, expected)
    }

    /// Parse statements until end of input.
    pub fn parse_program(mut self) -> Result<Program, ParseError> {
        let mut stmts = Vec::new();
        while !self.cursor.is_at_end() {
            stmts.push(self.parse_stmt()?);
        }
        tracing::debug!(statements = stmts.len(), "parsed program");
        Ok(Program::new(stmts))
    }
}
