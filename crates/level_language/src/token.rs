//! Token vocabulary shared by the lexer and the parser.

use std::fmt;

use crate::span::Span;

/// A token produced by the [`Lexer`](crate::Lexer).
#[derive(Clone, Debug, PartialEq)]
pub struct Token {
    /// What was recognized, with its decoded value when it has one.
    pub kind: TokenKind,
    /// Where it was recognized.
    pub span: Span,
}

impl Token {
    /// Creates a new token.
    #[must_use]
    pub const fn new(kind: TokenKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// Returns the raw source text of this token.
    #[must_use]
    pub fn text<'a>(&self, source: &'a str) -> &'a str {
        self.span.text(source)
    }

    /// Returns true for `(`, `[` and `{`.
    #[must_use]
    pub const fn is_open_delimiter(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::LParen | TokenKind::LBracket | TokenKind::LBrace
        )
    }

    /// Returns true for `)`, `]` and `}`.
    #[must_use]
    pub const fn is_close_delimiter(&self) -> bool {
        matches!(
            self.kind,
            TokenKind::RParen | TokenKind::RBracket | TokenKind::RBrace
        )
    }
}

/// The closed set of token kinds understood by the parser.
#[derive(Clone, Debug, PartialEq)]
pub enum TokenKind {
    // Literals and names
    /// Name like `guard` or `target_x`
    Identifier(String),
    /// Number literal like `42` or `2.5`
    Number(f64),
    /// Quoted string like `"potion"`, escapes decoded
    String(String),
    /// Free-form text following `say:` and the other actions
    Text(String),

    // Type names
    /// `number`
    NumberType,
    /// `boolean`
    BooleanType,
    /// `array`
    ArrayType,
    /// `text`
    TextType,

    // Keywords
    /// `func`
    Func,
    /// `entity`
    Entity,
    /// `if`
    If,
    /// `else`
    Else,
    /// `until`
    Until,
    /// `during`
    During,
    /// `return`
    Return,
    /// `move`
    Move,
    /// `attack`
    Attack,
    /// `gather`
    Gather,
    /// `use`
    Use,
    /// `say`
    Say,
    /// `wait`
    Wait,
    /// `true`
    True,
    /// `false`
    False,
    /// `len`
    Len,
    /// `and` or `&&`
    And,
    /// `or` or `||`
    Or,

    // Operators
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `>`
    Gt,
    /// `<=`
    Le,
    /// `>=`
    Ge,
    /// `=`
    Assign,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Times,
    /// `/`
    Divide,

    // Punctuation
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `,`
    Comma,

    // Meta
    /// End of input
    Eof,
    /// Something the lexer could not turn into a token
    Error(LexError),
}

impl TokenKind {
    /// Looks up a reserved word.
    #[must_use]
    pub fn keyword(word: &str) -> Option<Self> {
        let kind = match word {
            "number" => Self::NumberType,
            "boolean" => Self::BooleanType,
            "array" => Self::ArrayType,
            "text" => Self::TextType,
            "func" => Self::Func,
            "entity" => Self::Entity,
            "if" => Self::If,
            "else" => Self::Else,
            "until" => Self::Until,
            "during" => Self::During,
            "return" => Self::Return,
            "move" => Self::Move,
            "attack" => Self::Attack,
            "gather" => Self::Gather,
            "use" => Self::Use,
            "say" => Self::Say,
            "wait" => Self::Wait,
            "true" => Self::True,
            "false" => Self::False,
            "len" => Self::Len,
            "and" => Self::And,
            "or" => Self::Or,
            _ => return None,
        };
        Some(kind)
    }

    /// Returns true for the six action verbs.
    #[must_use]
    pub const fn is_action(&self) -> bool {
        matches!(
            self,
            Self::Move | Self::Attack | Self::Gather | Self::Use | Self::Say | Self::Wait
        )
    }

    /// Returns true for the type names usable in declarations.
    #[must_use]
    pub const fn is_type(&self) -> bool {
        matches!(
            self,
            Self::NumberType | Self::BooleanType | Self::ArrayType | Self::TextType
        )
    }

    /// Returns a human-readable name for this token kind.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Identifier(_) => "identifier",
            Self::Number(_) => "number",
            Self::String(_) => "string",
            Self::Text(_) => "text",
            Self::NumberType => "'number'",
            Self::BooleanType => "'boolean'",
            Self::ArrayType => "'array'",
            Self::TextType => "'text'",
            Self::Func => "'func'",
            Self::Entity => "'entity'",
            Self::If => "'if'",
            Self::Else => "'else'",
            Self::Until => "'until'",
            Self::During => "'during'",
            Self::Return => "'return'",
            Self::Move => "'move'",
            Self::Attack => "'attack'",
            Self::Gather => "'gather'",
            Self::Use => "'use'",
            Self::Say => "'say'",
            Self::Wait => "'wait'",
            Self::True => "'true'",
            Self::False => "'false'",
            Self::Len => "'len'",
            Self::And => "'and'",
            Self::Or => "'or'",
            Self::Eq => "'=='",
            Self::Ne => "'!='",
            Self::Lt => "'<'",
            Self::Gt => "'>'",
            Self::Le => "'<='",
            Self::Ge => "'>='",
            Self::Assign => "'='",
            Self::Plus => "'+'",
            Self::Minus => "'-'",
            Self::Times => "'*'",
            Self::Divide => "'/'",
            Self::LParen => "'('",
            Self::RParen => "')'",
            Self::LBrace => "'{'",
            Self::RBrace => "'}'",
            Self::LBracket => "'['",
            Self::RBracket => "']'",
            Self::Colon => "':'",
            Self::Semicolon => "';'",
            Self::Comma => "','",
            Self::Eof => "end of input",
            Self::Error(_) => "invalid token",
        }
    }

    /// Describes this token for a diagnostic, including its value when short.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Identifier(name) => format!("identifier '{name}'"),
            Self::Number(n) => format!("number {n}"),
            Self::String(_) => "string".to_string(),
            Self::Text(_) => "text".to_string(),
            other => other.name().to_string(),
        }
    }
}

/// Why the lexer produced an [`TokenKind::Error`] token.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LexError {
    /// A character that starts no token.
    UnrecognizedCharacter(char),
    /// A string literal still open at end of input.
    UnterminatedString,
    /// A backslash escape other than `\" \\ \n \t \r`.
    InvalidEscape(char),
    /// A `/* ...` comment still open at end of input.
    UnterminatedComment,
    /// A number literal too large to represent.
    NumberOutOfRange,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnrecognizedCharacter(c) => write!(f, "unrecognized character {c:?}"),
            Self::UnterminatedString => f.write_str("unterminated string literal"),
            Self::InvalidEscape(c) => write!(f, "invalid escape sequence \\{c}"),
            Self::UnterminatedComment => f.write_str("unterminated block comment"),
            Self::NumberOutOfRange => f.write_str("number literal out of range"),
        }
    }
}
