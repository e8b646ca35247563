#![expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use super::*;
use pretty_assertions::assert_eq;

fn kinds(source: &str) -> Vec<TokenKind> {
    lex(source).unwrap().iter().map(|t| t.kind.clone()).collect()
}

fn ident(name: &str) -> TokenKind {
    TokenKind::Ident(name.to_string())
}

#[test]
fn test_empty_source_is_just_eof() {
    let tokens = lex("").unwrap();
    assert_eq!(tokens.len(), 1);
    assert_eq!(tokens.get(0).unwrap().kind, TokenKind::Eof);
    assert_eq!(tokens.get(0).unwrap().span, Span::point(0));
}

#[test]
fn test_assignment() {
    assert_eq!(
        kinds("x = 42;"),
        vec![
            ident("x"),
            TokenKind::Eq,
            TokenKind::Int(42),
            TokenKind::Semicolon,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_keywords_vs_identifiers() {
    assert_eq!(
        kinds("kapag kapagan o oo at atis hindi Totoo Huwad huwad"),
        vec![
            TokenKind::Kapag,
            ident("kapagan"),
            TokenKind::O,
            ident("oo"),
            TokenKind::At,
            ident("atis"),
            TokenKind::Hindi,
            TokenKind::Totoo,
            TokenKind::Huwad,
            ident("huwad"),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_for_header() {
    assert_eq!(
        kinds("sa bawat i sa [1:10] {}"),
        vec![
            TokenKind::Sa,
            TokenKind::Bawat,
            ident("i"),
            TokenKind::Sa,
            TokenKind::LBracket,
            TokenKind::Int(1),
            TokenKind::Colon,
            TokenKind::Int(10),
            TokenKind::RBracket,
            TokenKind::LBrace,
            TokenKind::RBrace,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_longest_operator_wins() {
    assert_eq!(
        kinds("a //= b ** c // d **= e"),
        vec![
            ident("a"),
            TokenKind::SlashSlashEq,
            ident("b"),
            TokenKind::StarStar,
            ident("c"),
            TokenKind::SlashSlash,
            ident("d"),
            TokenKind::StarStarEq,
            ident("e"),
            TokenKind::Eof
        ]
    );
    assert_eq!(
        kinds("<= >= == != < > ="),
        vec![
            TokenKind::LtEq,
            TokenKind::GtEq,
            TokenKind::EqEq,
            TokenKind::NotEq,
            TokenKind::Lt,
            TokenKind::Gt,
            TokenKind::Eq,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_float_forms() {
    assert_eq!(
        kinds("3.25 2. .5 7"),
        vec![
            TokenKind::float(3.25),
            TokenKind::float(2.0),
            TokenKind::float(0.5),
            TokenKind::Int(7),
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_strings_and_escapes() {
    assert_eq!(
        kinds(r#"ilimbag("kamusta\n\"mundo\"");"#),
        vec![
            TokenKind::Ilimbag,
            TokenKind::LParen,
            TokenKind::Str("kamusta\n\"mundo\"".to_string()),
            TokenKind::RParen,
            TokenKind::Semicolon,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_comments_and_newlines_are_trivia() {
    let source = "# simula\nx = 1; # isa\n\n# wakas";
    assert_eq!(
        kinds(source),
        vec![
            ident("x"),
            TokenKind::Eq,
            TokenKind::Int(1),
            TokenKind::Semicolon,
            TokenKind::Eof
        ]
    );
}

#[test]
fn test_spans() {
    let tokens = lex("ab += 10;").unwrap();
    let spans: Vec<Span> = tokens.iter().map(|t| t.span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 2),
            Span::new(3, 5),
            Span::new(6, 8),
            Span::new(8, 9),
            Span::point(9)
        ]
    );
}

#[test]
fn test_unrecognized_character() {
    let err = lex("x = 1 & 2;").unwrap_err();
    assert_eq!(err.kind, LexErrorKind::UnrecognizedToken);
    assert_eq!(err.lexeme, "&");
    assert_eq!((err.location.line, err.location.column), (1, 7));
}
