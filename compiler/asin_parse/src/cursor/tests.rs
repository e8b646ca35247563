use super::*;
use asin_ir::TokenList;

fn list(kinds: Vec<TokenKind>) -> TokenList {
    let mut offset = 0;
    let mut tokens = TokenList::new();
    for kind in kinds {
        tokens.push(Token::new(kind, Span::new(offset, offset + 1)));
        offset += 2;
    }
    tokens
}

#[test]
fn test_advance_and_peek() {
    let tokens = list(vec![
        TokenKind::Ident("x".into()),
        TokenKind::Eq,
        TokenKind::Int(1),
        TokenKind::Eof,
    ]);
    let mut cursor = Cursor::new(&tokens);

    assert!(cursor.check(&TokenKind::Ident(String::new())));
    assert_eq!(cursor.peek_kind_at(1), &TokenKind::Eq);
    assert_eq!(cursor.peek_kind_at(10), &TokenKind::Eof);

    cursor.advance();
    assert_eq!(cursor.previous_span(), Span::new(0, 1));
    assert!(cursor.eat(&TokenKind::Eq));
    assert!(!cursor.eat(&TokenKind::Eq));
    assert_eq!(cursor.current_kind(), &TokenKind::Int(1));
}

#[test]
fn test_never_advances_past_eof() {
    let tokens = list(vec![TokenKind::Semicolon, TokenKind::Eof]);
    let mut cursor = Cursor::new(&tokens);
    cursor.advance();
    assert!(cursor.is_at_end());
    cursor.advance();
    cursor.advance();
    assert!(cursor.is_at_end());
    assert_eq!(cursor.position(), 1);
}

#[test]
fn test_previous_span_at_start() {
    let tokens = list(vec![TokenKind::Eof]);
    let cursor = Cursor::new(&tokens);
    assert_eq!(cursor.previous_span(), Span::DUMMY);
}
