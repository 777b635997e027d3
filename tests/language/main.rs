//! Integration tests for the Level front end.
//!
//! Tests for the lexer, parser, diagnostics, and canonical printer.

mod diagnostics;
mod lexer;
mod parser;
mod pretty;
