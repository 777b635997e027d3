//! Level - scripting language for game entities
//!
//! This crate re-exports the Level layers for convenient access. For detailed
//! documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 0: level_language - Lexer, parser, syntax tree, diagnostics
//! ```
//!
//! Later stages (type checking, execution) consume the
//! [`language::Program`] produced here.

pub use level_language as language;
