//! Lexer, parser, and syntax tree for the Level scripting language.
//!
//! Level scripts describe the behavior of game entities. This crate turns
//! script text into a typed syntax tree plus a list of located diagnostics:
//! - [`Lexer`] - Tokenization of Level source
//! - [`Parser`] - Recursive-descent parsing with error recovery
//! - [`ast`] - The syntax tree handed to later stages
//! - [`pretty`] - Canonical source printer
//! - [`visitor`] - Read-only tree traversal
//!
//! # Example
//!
//! ```
//! use level_language::parse;
//!
//! let result = parse("entity Guard { during (hp > 0) { say: Halt!; wait; } }");
//! assert!(result.is_ok());
//! assert_eq!(result.program.declarations[0].name(), "Guard");
//!
//! let broken = parse("func f() {");
//! assert_eq!(broken.diagnostics.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod ast;
pub mod config;
pub mod diagnostic;
pub mod lexer;
pub mod parser;
pub mod pretty;
pub mod span;
pub mod token;
pub mod visitor;


pub use ast::{
    ActionKind, ActionStmt, BinaryExpr, BinaryOp, Block, Declaration, DuringStmt, EntityDecl, Expr,
    FunctionDecl, Identifier, IfStmt, Param, Precedence, Program, ReturnStmt, Stmt, TypeName,
    UnaryExpr, UnaryOp, UntilStmt, VariableDecl,
};
pub use config::ParserConfig;
pub use diagnostic::{Construct, Diagnostic, Error, Result, Severity, SyntaxError};
pub use lexer::Lexer;
pub use parser::{ParseResult, Parser, parse, parse_expression, parse_with_config};
pub use span::Span;
pub use token::{LexError, Token, TokenKind};
