//! Lexer for Asin using logos.
//!
//! Produces a `TokenList` terminated by `Eof`. Whitespace (newlines
//! included) and `#` line comments are trivia and never reach the parser.
//! Lexing is fail-fast: the first unrecognized lexeme becomes a
//! [`LexError`].

mod escape;
mod lex_error;

use asin_diagnostic::LineOffsetTable;
use asin_ir::{Span, Token, TokenKind, TokenList};
use logos::Logos;

pub use lex_error::{LexError, LexErrorKind};

/// Raw token from logos, before payload conversion.
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n\f]+")]
#[logos(skip r"#[^\n]*")]
enum RawToken {
    #[token("kapag")]
    Kapag,
    #[token("ngunit")]
    Ngunit,
    #[token("kundiman")]
    Kundiman,
    #[token("hanggat")]
    Hanggat,
    #[token("bawat")]
    Bawat,
    #[token("sa")]
    Sa,
    #[token("lumisan")]
    Lumisan,
    #[token("ilimbag")]
    Ilimbag,
    #[token("Totoo")]
    Totoo,
    #[token("Huwad")]
    Huwad,
    #[token("at")]
    At,
    #[token("o", priority = 3)]
    O,
    #[token("hindi")]
    Hindi,

    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,

    #[token("+")]
    Plus,
    #[token("-")]
    Minus,
    #[token("*")]
    Star,
    #[token("/")]
    Slash,
    #[token("//")]
    SlashSlash,
    #[token("**")]
    StarStar,
    #[token("%")]
    Percent,
    #[token("==")]
    EqEq,
    #[token("!=")]
    NotEq,
    #[token("<")]
    Lt,
    #[token("<=")]
    LtEq,
    #[token(">")]
    Gt,
    #[token(">=")]
    GtEq,

    #[token("=")]
    Eq,
    #[token("+=")]
    PlusEq,
    #[token("-=")]
    MinusEq,
    #[token("*=")]
    StarEq,
    #[token("/=")]
    SlashEq,
    #[token("//=")]
    SlashSlashEq,
    #[token("**=")]
    StarStarEq,
    #[token("%=")]
    PercentEq,

    // Overflowing literals fail the callback and surface as lexer errors.
    #[regex(r"[0-9]+", |lex| lex.slice().parse::<i64>().ok())]
    Int(i64),

    #[regex(r"[0-9]+\.[0-9]*|\.[0-9]+", |lex| lex.slice().parse::<f64>().ok())]
    Float(f64),

    #[regex(r#""([^"\\]|\\.)*""#)]
    Str,

    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*")]
    Ident,
}

/// Lex source code into a `TokenList`.
pub fn lex(source: &str) -> Result<TokenList, LexError> {
    let mut result = TokenList::new();
    let mut logos = RawToken::lexer(source);

    while let Some(token_result) = logos.next() {
        let span = Span::from_range(logos.span());
        let slice = logos.slice();

        match token_result {
            Ok(raw) => result.push(Token::new(convert_token(raw, slice), span)),
            Err(()) => {
                let kind = if slice.bytes().all(|b| b.is_ascii_digit()) && !slice.is_empty() {
                    LexErrorKind::IntegerTooLarge
                } else {
                    LexErrorKind::UnrecognizedToken
                };
                return Err(LexError::new(
                    kind,
                    span,
                    slice,
                    &LineOffsetTable::build(source),
                    source,
                ));
            }
        }
    }

    let eof_span = Span::point(u32::try_from(source.len()).unwrap_or(u32::MAX));
    result.push(Token::new(TokenKind::Eof, eof_span));

    tracing::debug!(tokens = result.len(), "lexed source");
    Ok(result)
}

/// Convert a raw token to its `TokenKind`.
fn convert_token(raw: RawToken, slice: &str) -> TokenKind {
    match raw {
        RawToken::Int(n) => TokenKind::Int(n),
        RawToken::Float(f) => TokenKind::float(f),
        RawToken::Str => TokenKind::Str(escape::unescape(&slice[1..slice.len() - 1])),
        RawToken::Ident => TokenKind::Ident(slice.to_owned()),

        RawToken::Kapag => TokenKind::Kapag,
        RawToken::Ngunit => TokenKind::Ngunit,
        RawToken::Kundiman => TokenKind::Kundiman,
        RawToken::Hanggat => TokenKind::Hanggat,
        RawToken::Bawat => TokenKind::Bawat,
        RawToken::Sa => TokenKind::Sa,
        RawToken::Lumisan => TokenKind::Lumisan,
        RawToken::Ilimbag => TokenKind::Ilimbag,
        RawToken::Totoo => TokenKind::Totoo,
        RawToken::Huwad => TokenKind::Huwad,
        RawToken::At => TokenKind::At,
        RawToken::O => TokenKind::O,
        RawToken::Hindi => TokenKind::Hindi,

        RawToken::LParen => TokenKind::LParen,
        RawToken::RParen => TokenKind::RParen,
        RawToken::LBracket => TokenKind::LBracket,
        RawToken::RBracket => TokenKind::RBracket,
        RawToken::LBrace => TokenKind::LBrace,
        RawToken::RBrace => TokenKind::RBrace,
        RawToken::Comma => TokenKind::Comma,
        RawToken::Colon => TokenKind::Colon,
        RawToken::Semicolon => TokenKind::Semicolon,

        RawToken::Plus => TokenKind::Plus,
        RawToken::Minus => TokenKind::Minus,
        RawToken::Star => TokenKind::Star,
        RawToken::Slash => TokenKind::Slash,
        RawToken::SlashSlash => TokenKind::SlashSlash,
        RawToken::StarStar => TokenKind::StarStar,
        RawToken::Percent => TokenKind::Percent,
        RawToken::EqEq => TokenKind::EqEq,
        RawToken::NotEq => TokenKind::NotEq,
        RawToken::Lt => TokenKind::Lt,
        RawToken::LtEq => TokenKind::LtEq,
        RawToken::Gt => TokenKind::Gt,
        RawToken::GtEq => TokenKind::GtEq,

        RawToken::Eq => TokenKind::Eq,
        RawToken::PlusEq => TokenKind::PlusEq,
        RawToken::MinusEq => TokenKind::MinusEq,
        RawToken::StarEq => TokenKind::StarEq,
        RawToken::SlashEq => TokenKind::SlashEq,
        RawToken::SlashSlashEq => TokenKind::SlashSlashEq,
        RawToken::StarStarEq => TokenKind::StarStarEq,
        RawToken::PercentEq => TokenKind::PercentEq,
    }
}

#[cfg(test)]
mod tests;
