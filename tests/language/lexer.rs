//! Integration tests for the lexer
//!
//! Tests tokenization of Level source through the public API.

use level::language::{LexError, Lexer, TokenKind};

fn kinds(source: &str) -> Vec<TokenKind> {
    Lexer::tokenize_all(source)
        .into_iter()
        .map(|t| t.kind)
        .collect()
}

// =============================================================================
// Token Stream
// =============================================================================

#[test]
fn entity_header() {
    assert_eq!(
        kinds("entity Guard {"),
        [
            TokenKind::Entity,
            TokenKind::Identifier("Guard".into()),
            TokenKind::LBrace,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn variable_declaration() {
    assert_eq!(
        kinds("number hp = 2.5;"),
        [
            TokenKind::NumberType,
            TokenKind::Identifier("hp".into()),
            TokenKind::Assign,
            TokenKind::Number(2.5),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn word_and_symbol_logic_operators_agree() {
    assert_eq!(kinds("a and b"), kinds("a && b"));
    assert_eq!(kinds("a or b"), kinds("a || b"));
}

#[test]
fn say_text() {
    assert_eq!(
        kinds("say: Halt, who goes there?;"),
        [
            TokenKind::Say,
            TokenKind::Colon,
            TokenKind::Text("Halt, who goes there?".into()),
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

#[test]
fn text_stops_at_end_of_line() {
    let tokens = kinds("say: first line\nwait;");
    assert_eq!(tokens[2], TokenKind::Text("first line".into()));
    assert_eq!(tokens[3], TokenKind::Wait);
}

#[test]
fn comments_are_skipped() {
    assert_eq!(
        kinds("wait; // rest\n/* block\ncomment */ move;"),
        [
            TokenKind::Wait,
            TokenKind::Semicolon,
            TokenKind::Move,
            TokenKind::Semicolon,
            TokenKind::Eof,
        ]
    );
}

// =============================================================================
// Positions
// =============================================================================

#[test]
fn lines_and_columns() {
    let tokens = Lexer::tokenize_all("entity E {\n    wait;\n}");
    let wait = &tokens[3];
    assert_eq!(wait.kind, TokenKind::Wait);
    assert_eq!((wait.span.line, wait.span.column), (2, 5));
    let close = &tokens[5];
    assert_eq!((close.span.line, close.span.column), (3, 1));
}

#[test]
fn columns_count_characters() {
    let tokens = Lexer::tokenize_all("\"é\" x");
    assert_eq!(tokens[1].span.column, 5);
    assert_eq!(tokens[1].span.start, 5);
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn errors_do_not_stop_lexing() {
    let tokens = kinds("a # b");
    assert_eq!(
        tokens,
        [
            TokenKind::Identifier("a".into()),
            TokenKind::Error(LexError::UnrecognizedCharacter('#')),
            TokenKind::Identifier("b".into()),
            TokenKind::Eof,
        ]
    );
}

#[test]
fn invalid_escape() {
    assert_eq!(
        kinds(r#""a\qb" x"#)[0],
        TokenKind::Error(LexError::InvalidEscape('q'))
    );
}

#[test]
fn unterminated_comment() {
    assert_eq!(
        kinds("wait; /* never closed"),
        [
            TokenKind::Wait,
            TokenKind::Semicolon,
            TokenKind::Error(LexError::UnterminatedComment),
            TokenKind::Eof,
        ]
    );
}
