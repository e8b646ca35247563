use super::*;
use pretty_assertions::assert_eq;

#[test]
fn test_keyword_lookup() {
    assert_eq!(TokenKind::keyword("kapag"), Some(TokenKind::Kapag));
    assert_eq!(TokenKind::keyword("Totoo"), Some(TokenKind::Totoo));
    assert_eq!(TokenKind::keyword("o"), Some(TokenKind::O));
    // keywords are case-sensitive
    assert_eq!(TokenKind::keyword("totoo"), None);
    assert_eq!(TokenKind::keyword("kapagx"), None);
}

#[test]
fn test_lexeme() {
    assert_eq!(TokenKind::SlashSlashEq.lexeme(), "//=");
    assert_eq!(TokenKind::Ident("bilang".into()).lexeme(), "bilang");
    assert_eq!(TokenKind::Int(42).lexeme(), "42");
    assert_eq!(TokenKind::float(2.5).lexeme(), "2.5");
    assert_eq!(TokenKind::Hanggat.lexeme(), "hanggat");
    assert_eq!(TokenKind::Eof.lexeme(), "");
}

#[test]
fn test_float_token_equality_uses_bits() {
    assert_eq!(TokenKind::float(1.5), TokenKind::float(1.5));
    assert_ne!(TokenKind::float(0.0), TokenKind::float(-0.0));
}

#[test]
fn test_display_name() {
    assert_eq!(TokenKind::Lumisan.display_name(), "keyword");
    assert_eq!(TokenKind::LBrace.display_name(), "symbol");
    assert_eq!(TokenKind::Str("x".into()).display_name(), "string");
}

#[test]
fn test_token_debug() {
    let token = Token::new(TokenKind::Plus, Span::new(3, 4));
    assert_eq!(format!("{token:?}"), "\"+\" @ 3..4");
    assert_eq!(format!("{:?}", Token::dummy(TokenKind::Int(7))), "Int(7) @ 0..0");
}

#[test]
fn test_token_list() {
    let mut list = TokenList::new();
    assert!(list.is_empty());
    list.push(Token::dummy(TokenKind::Ident("x".into())));
    list.push(Token::dummy(TokenKind::Eof));
    assert_eq!(list.len(), 2);
    assert_eq!(list.get(1).map(|t| &t.kind), Some(&TokenKind::Eof));
    assert_eq!(list.iter().count(), 2);
}
