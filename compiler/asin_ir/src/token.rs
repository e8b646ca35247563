//! Token types produced by the Asin lexer.

use super::Span;
use std::fmt;

/// A token with its span in the source.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Token {
    pub kind: TokenKind,
    pub span: Span,
}

impl Token {
    #[inline]
    pub fn new(kind: TokenKind, span: Span) -> Self {
        Token { kind, span }
    }

    /// Create a dummy token for testing.
    pub fn dummy(kind: TokenKind) -> Self {
        Token {
            kind,
            span: Span::DUMMY,
        }
    }
}

impl fmt::Debug for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?} @ {}", self.kind, self.span)
    }
}

/// Token kinds for Asin.
///
/// Float literals store bits as u64 so the enum keeps `Eq` and `Hash`.
#[derive(Clone, Eq, PartialEq, Hash)]
pub enum TokenKind {
    /// Integer literal: 42
    Int(i64),
    /// Float literal: 3.14, .5, 2. (stored as bits)
    Float(u64),
    /// String literal with escapes already processed
    Str(String),
    Ident(String),

    // Keywords
    Kapag,    // if
    Ngunit,   // but (else-if prefix)
    Kundiman, // else
    Hanggat,  // while
    Bawat,    // for
    Sa,       // in
    Lumisan,  // exit
    Ilimbag,  // print
    Totoo,    // true
    Huwad,    // false
    At,       // and
    O,        // or
    Hindi,    // not

    // Grouping and separators
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Colon,
    Semicolon,

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    SlashSlash,
    StarStar,
    Percent,
    EqEq,
    NotEq,
    Lt,
    LtEq,
    Gt,
    GtEq,

    // Assignment
    Eq,
    PlusEq,
    MinusEq,
    StarEq,
    SlashEq,
    SlashSlashEq,
    StarStarEq,
    PercentEq,

    Eof,
}

impl TokenKind {
    /// Build a float token from its value.
    #[inline]
    pub fn float(value: f64) -> Self {
        TokenKind::Float(value.to_bits())
    }

    /// Source text for fixed tokens; literal kinds render their payload.
    ///
    /// Used as the "offending token" text in syntax errors.
    pub fn lexeme(&self) -> String {
        match self {
            TokenKind::Int(n) => n.to_string(),
            TokenKind::Float(bits) => f64::from_bits(*bits).to_string(),
            TokenKind::Str(s) | TokenKind::Ident(s) => s.clone(),
            TokenKind::Eof => String::new(),
            other => other.fixed_text().to_owned(),
        }
    }

    fn fixed_text(&self) -> &'static str {
        match self {
            TokenKind::Kapag => "kapag",
            TokenKind::Ngunit => "ngunit",
            TokenKind::Kundiman => "kundiman",
            TokenKind::Hanggat => "hanggat",
            TokenKind::Bawat => "bawat",
            TokenKind::Sa => "sa",
            TokenKind::Lumisan => "lumisan",
            TokenKind::Ilimbag => "ilimbag",
            TokenKind::Totoo => "Totoo",
            TokenKind::Huwad => "Huwad",
            TokenKind::At => "at",
            TokenKind::O => "o",
            TokenKind::Hindi => "hindi",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::SlashSlash => "//",
            TokenKind::StarStar => "**",
            TokenKind::Percent => "%",
            TokenKind::EqEq => "==",
            TokenKind::NotEq => "!=",
            TokenKind::Lt => "<",
            TokenKind::LtEq => "<=",
            TokenKind::Gt => ">",
            TokenKind::GtEq => ">=",
            TokenKind::Eq => "=",
            TokenKind::PlusEq => "+=",
            TokenKind::MinusEq => "-=",
            TokenKind::StarEq => "*=",
            TokenKind::SlashEq => "/=",
            TokenKind::SlashSlashEq => "//=",
            TokenKind::StarStarEq => "**=",
            TokenKind::PercentEq => "%=",
            TokenKind::Int(_)
            | TokenKind::Float(_)
            | TokenKind::Str(_)
            | TokenKind::Ident(_)
            | TokenKind::Eof => "",
        }
    }

    /// Human-readable category, used by `asin lex` output and parser traces.
    pub fn display_name(&self) -> &'static str {
        match self {
            TokenKind::Int(_) => "integer",
            TokenKind::Float(_) => "float",
            TokenKind::Str(_) => "string",
            TokenKind::Ident(_) => "identifier",
            TokenKind::Eof => "end of file",
            TokenKind::Kapag
            | TokenKind::Ngunit
            | TokenKind::Kundiman
            | TokenKind::Hanggat
            | TokenKind::Bawat
            | TokenKind::Sa
            | TokenKind::Lumisan
            | TokenKind::Ilimbag
            | TokenKind::Totoo
            | TokenKind::Huwad
            | TokenKind::At
            | TokenKind::O
            | TokenKind::Hindi => "keyword",
            _ => "symbol",
        }
    }

    /// Look up a reserved word.
    pub fn keyword(ident: &str) -> Option<TokenKind> {
        Some(match ident {
            "kapag" => TokenKind::Kapag,
            "ngunit" => TokenKind::Ngunit,
            "kundiman" => TokenKind::Kundiman,
            "hanggat" => TokenKind::Hanggat,
            "bawat" => TokenKind::Bawat,
            "sa" => TokenKind::Sa,
            "lumisan" => TokenKind::Lumisan,
            "ilimbag" => TokenKind::Ilimbag,
            "Totoo" => TokenKind::Totoo,
            "Huwad" => TokenKind::Huwad,
            "at" => TokenKind::At,
            "o" => TokenKind::O,
            "hindi" => TokenKind::Hindi,
            _ => return None,
        })
    }
}

impl fmt::Debug for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Int(n) => write!(f, "Int({n})"),
            TokenKind::Float(bits) => write!(f, "Float({})", f64::from_bits(*bits)),
            TokenKind::Str(s) => write!(f, "Str({s:?})"),
            TokenKind::Ident(s) => write!(f, "Ident({s})"),
            TokenKind::Eof => write!(f, "Eof"),
            other => write!(f, "{:?}", other.fixed_text()),
        }
    }
}

/// Lexer output: tokens in source order, always terminated by `Eof`.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct TokenList {
    tokens: Vec<Token>,
}

impl TokenList {
    #[inline]
    pub fn new() -> Self {
        TokenList { tokens: Vec::new() }
    }

    #[inline]
    pub fn from_vec(tokens: Vec<Token>) -> Self {
        TokenList { tokens }
    }

    #[inline]
    pub fn push(&mut self, token: Token) {
        self.tokens.push(token);
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Token> {
        self.tokens.get(index)
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Token> {
        self.tokens.iter()
    }

    #[inline]
    pub fn as_slice(&self) -> &[Token] {
        &self.tokens
    }
}

impl fmt::Debug for TokenList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.tokens.iter()).finish()
    }
}

impl<'a> IntoIterator for &'a TokenList {
    type Item = &'a Token;
    type IntoIter = std::slice::Iter<'a, Token>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}

#[cfg(test)]
mod tests;
