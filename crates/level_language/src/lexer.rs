//! Lexer for Level scripts.
//!
//! The lexer hands out one [`Token`] per call to [`Lexer::next_token`].
//! Whitespace and comments are skipped. Malformed input never stops the
//! lexer: it produces a [`TokenKind::Error`] token and carries on, leaving
//! the decision of what to do about it to the parser.

use crate::span::Span;
use crate::token::{LexError, Token, TokenKind};

/// Pull-based lexer over a complete script.
///
/// A clone is an independent cursor at the same position.
#[derive(Clone)]
pub struct Lexer<'src> {
    /// Source text being tokenized.
    source: &'src str,
    /// Unconsumed tail of `source`.
    rest: &'src str,
    /// Current byte offset in source.
    position: usize,
    /// Current line number (1-based).
    line: u32,
    /// Current column number (1-based).
    column: u32,
    /// The previous token was an action verb, so a `:` opens free-form text.
    after_action: bool,
    /// The previous token was the `:` of `say: ...`; the next token is text.
    text_pending: bool,
}

impl<'src> Lexer<'src> {
    /// Creates a new lexer for the given source.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self {
            source,
            rest: source,
            position: 0,
            line: 1,
            column: 1,
            after_action: false,
            text_pending: false,
        }
    }

    /// Returns the next token. Once the input is exhausted every call
    /// returns [`TokenKind::Eof`].
    pub fn next_token(&mut self) -> Token {
        if self.text_pending {
            self.text_pending = false;
            return self.scan_text();
        }
        let after_action = std::mem::take(&mut self.after_action);

        if let Some(error) = self.skip_trivia() {
            return error;
        }

        let start = self.position;
        let start_line = self.line;
        let start_column = self.column;

        let Some(c) = self.peek_char() else {
            return Token::new(
                TokenKind::Eof,
                Span::new(start, start, start_line, start_column),
            );
        };

        let kind = match c {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Times),
            '/' => self.single(TokenKind::Divide),
            ':' => {
                self.text_pending = after_action;
                self.single(TokenKind::Colon)
            }
            '=' => self.one_or_two('=', TokenKind::Assign, TokenKind::Eq),
            '<' => self.one_or_two('=', TokenKind::Lt, TokenKind::Le),
            '>' => self.one_or_two('=', TokenKind::Gt, TokenKind::Ge),
            '!' => self.pair('=', TokenKind::Ne),
            '&' => self.pair('&', TokenKind::And),
            '|' => self.pair('|', TokenKind::Or),
            '"' => self.scan_string(),
            c if c.is_ascii_digit() => self.scan_number(),
            c if is_identifier_start(c) => self.scan_word(),
            c => {
                self.advance();
                TokenKind::Error(LexError::UnrecognizedCharacter(c))
            }
        };

        self.after_action = kind.is_action();
        Token::new(
            kind,
            Span::new(start, self.position, start_line, start_column),
        )
    }

    /// Tokenizes the whole source. The last token is always `Eof`.
    #[must_use]
    pub fn tokenize_all(source: &str) -> Vec<Token> {
        let mut lexer = Lexer::new(source);
        let mut tokens = Vec::new();
        loop {
            let token = lexer.next_token();
            let is_eof = token.kind == TokenKind::Eof;
            tokens.push(token);
            if is_eof {
                break;
            }
        }
        tokens
    }

    fn peek_char(&self) -> Option<char> {
        self.rest.chars().next()
    }

    fn peek_char_n(&self, n: usize) -> Option<char> {
        self.rest.chars().nth(n)
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek_char() {
            let len = c.len_utf8();
            self.rest = &self.rest[len..];
            self.position += len;
            if c == '\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.advance();
        kind
    }

    /// `=` vs `==`, `<` vs `<=`, ...
    fn one_or_two(&mut self, second: char, one: TokenKind, two: TokenKind) -> TokenKind {
        self.advance();
        if self.peek_char() == Some(second) {
            self.advance();
            two
        } else {
            one
        }
    }

    /// Operators like `&&` whose first character is meaningless alone.
    fn pair(&mut self, second: char, kind: TokenKind) -> TokenKind {
        let first = self.peek_char().unwrap_or_default();
        self.advance();
        if self.peek_char() == Some(second) {
            self.advance();
            kind
        } else {
            TokenKind::Error(LexError::UnrecognizedCharacter(first))
        }
    }

    /// Skips whitespace and comments. Returns an error token for a block
    /// comment that never closes.
    fn skip_trivia(&mut self) -> Option<Token> {
        loop {
            match self.peek_char() {
                Some(c) if c.is_whitespace() => self.advance(),
                Some('/') if self.peek_char_n(1) == Some('/') => {
                    while self.peek_char().is_some_and(|c| c != '\n') {
                        self.advance();
                    }
                }
                Some('/') if self.peek_char_n(1) == Some('*') => {
                    let (start, line, column) = (self.position, self.line, self.column);
                    self.advance();
                    self.advance();
                    loop {
                        if self.rest.is_empty() {
                            return Some(Token::new(
                                TokenKind::Error(LexError::UnterminatedComment),
                                Span::new(start, self.position, line, column),
                            ));
                        }
                        if self.rest.starts_with("*/") {
                            self.advance();
                            self.advance();
                            break;
                        }
                        self.advance();
                    }
                }
                _ => return None,
            }
        }
    }

    /// Scans free-form text after `say:` up to the next `;` or newline.
    fn scan_text(&mut self) -> Token {
        while matches!(self.peek_char(), Some(' ' | '\t')) {
            self.advance();
        }
        let start = self.position;
        let (line, column) = (self.line, self.column);
        while self.peek_char().is_some_and(|c| c != ';' && c != '\n') {
            self.advance();
        }
        let text = self.source[start..self.position].trim_end();
        Token::new(
            TokenKind::Text(text.to_string()),
            Span::new(start, start + text.len(), line, column),
        )
    }

    /// Scans a double-quoted string, decoding escapes.
    fn scan_string(&mut self) -> TokenKind {
        self.advance(); // opening quote
        let mut text = String::new();
        let mut bad_escape = None;
        loop {
            match self.peek_char() {
                Some('"') => {
                    self.advance();
                    break;
                }
                Some('\\') => {
                    self.advance();
                    let Some(escaped) = self.peek_char() else {
                        return TokenKind::Error(LexError::UnterminatedString);
                    };
                    self.advance();
                    match escaped {
                        '"' => text.push('"'),
                        '\\' => text.push('\\'),
                        'n' => text.push('\n'),
                        't' => text.push('\t'),
                        'r' => text.push('\r'),
                        other => {
                            bad_escape.get_or_insert(other);
                        }
                    }
                }
                Some(c) => {
                    self.advance();
                    text.push(c);
                }
                None => return TokenKind::Error(LexError::UnterminatedString),
            }
        }
        match bad_escape {
            Some(c) => TokenKind::Error(LexError::InvalidEscape(c)),
            None => TokenKind::String(text),
        }
    }

    /// Scans `digits ('.' digits)?`.
    fn scan_number(&mut self) -> TokenKind {
        let start = self.position;
        while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek_char() == Some('.') && self.peek_char_n(1).is_some_and(|c| c.is_ascii_digit())
        {
            self.advance();
            while self.peek_char().is_some_and(|c| c.is_ascii_digit()) {
                self.advance();
            }
        }

        match self.source[start..self.position].parse::<f64>() {
            Ok(n) if n.is_finite() => TokenKind::Number(n),
            _ => TokenKind::Error(LexError::NumberOutOfRange),
        }
    }

    /// Scans an identifier, then checks the keyword table.
    fn scan_word(&mut self) -> TokenKind {
        let start = self.position;
        while self.peek_char().is_some_and(is_identifier_char) {
            self.advance();
        }
        let word = &self.source[start..self.position];
        TokenKind::keyword(word).unwrap_or_else(|| TokenKind::Identifier(word.to_string()))
    }
}

fn is_identifier_start(c: char) -> bool {
    c.is_alphabetic() || c == '_'
}

fn is_identifier_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
