//! Parser for Level scripts.
//!
//! A hand-written recursive-descent parser with one token of lookahead (two
//! where an identifier may open a `name: type` declaration). Each
//! grammar rule is a method; the call stack is the parse stack. Expression
//! precedence lives in [`expressions`], one method per precedence level.
//!
//! Errors do not abort the parse. Every grammar method returns
//! `Result<_, Diagnostic>`; the statement and declaration loops are the
//! recovery points, where the diagnostic is recorded and tokens are skipped
//! up to the next `;` or `}` before parsing resumes.

mod expressions;

use log::{debug, trace};

use crate::ast::{
    ActionKind, ActionStmt, Block, Declaration, DuringStmt, EntityDecl, Expr, ExpressionStmt,
    FunctionDecl, Identifier, IfStmt, Param, Program, ReturnStmt, Stmt, TypeName, UntilStmt,
    VariableDecl,
};
use crate::config::ParserConfig;
use crate::diagnostic::{Construct, Diagnostic, Error, Result, SyntaxError};
use crate::lexer::Lexer;
use crate::span::Span;
use crate::token::{LexError, Token, TokenKind};

/// Result of a grammar rule: the node, or the diagnostic that stopped it.
type Parsed<T> = std::result::Result<T, Diagnostic>;

/// The outcome of parsing a whole script.
///
/// `program` is complete when `diagnostics` is empty. Otherwise it holds
/// whatever could be recovered and must not be executed.
#[derive(Clone, Debug, PartialEq)]
pub struct ParseResult {
    /// The (possibly partial) tree.
    pub program: Program,
    /// Every reported problem, in source order of discovery.
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseResult {
    /// Returns true if the script parsed without diagnostics.
    #[must_use]
    pub fn is_ok(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Returns true if any diagnostic was reported.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Converts into a `Result`, discarding the partial tree on failure.
    ///
    /// # Errors
    /// Returns every diagnostic if there was at least one.
    pub fn into_result(self) -> Result<Program> {
        if self.diagnostics.is_empty() {
            Ok(self.program)
        } else {
            Err(Error::new(self.diagnostics))
        }
    }
}

/// Parser for Level source code.
///
/// All state is per instance, so separate scripts can be parsed on separate
/// threads without coordination.
pub struct Parser<'src> {
    /// The lexer providing tokens.
    lexer: Lexer<'src>,
    /// Current token (lookahead).
    current: Token,
    /// Source text, used for the program span.
    source: &'src str,
    /// Limits for this parse.
    config: ParserConfig,
    /// Diagnostics reported so far.
    diagnostics: Vec<Diagnostic>,
    /// Current statement/expression nesting.
    depth: usize,
    /// An error was just reported; suppress follow-on errors until the
    /// next statement boundary.
    recovering: bool,
    /// A diagnostic was already reported at end of input.
    eof_reported: bool,
}

impl<'src> Parser<'src> {
    /// Creates a parser with the default configuration.
    #[must_use]
    pub fn new(source: &'src str) -> Self {
        Self::with_config(source, ParserConfig::default())
    }

    /// Creates a parser with the given configuration.
    #[must_use]
    pub fn with_config(source: &'src str, config: ParserConfig) -> Self {
        let mut parser = Self {
            lexer: Lexer::new(source),
            current: Token::new(TokenKind::Eof, Span::at_start()),
            source,
            config,
            diagnostics: Vec::new(),
            depth: 0,
            recovering: false,
            eof_reported: false,
        };
        parser.current = parser.next_significant();
        parser
    }

    /// Parses the whole script.
    #[must_use]
    pub fn parse_program(mut self) -> ParseResult {
        let mut declarations = Vec::new();

        while self.current.kind != TokenKind::Eof {
            match self.parse_declaration() {
                Ok(declaration) => {
                    declarations.push(declaration);
                    self.recovering = false;
                }
                Err(diagnostic) => {
                    self.report(diagnostic);
                    self.synchronize_declaration();
                }
            }
        }

        debug!(
            "parsed {} declaration(s) with {} diagnostic(s)",
            declarations.len(),
            self.diagnostics.len()
        );

        let span = Span::new(0, self.source.len(), 1, 1);
        ParseResult {
            program: Program { declarations, span },
            diagnostics: self.diagnostics,
        }
    }

    /// Parses the whole input as a single expression.
    ///
    /// # Errors
    /// Returns the diagnostics if the input is not exactly one well-formed
    /// expression.
    pub fn parse_single_expression(mut self) -> Result<Expr> {
        match self.parse_expression() {
            Ok(expr) if self.current.kind == TokenKind::Eof => {
                if self.diagnostics.is_empty() {
                    return Ok(expr);
                }
            }
            Ok(_) => {
                let diagnostic = self.unexpected(&["end of input"]);
                self.report(diagnostic);
            }
            Err(diagnostic) => self.report(diagnostic),
        }
        Err(Error::new(self.diagnostics))
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    /// `Declaration := FunctionDecl | EntityDecl | VarDecl`
    fn parse_declaration(&mut self) -> Parsed<Declaration> {
        match self.current.kind {
            TokenKind::Func => self.parse_function().map(Declaration::Function),
            TokenKind::Entity => self.parse_entity().map(Declaration::Entity),
            _ if self.starts_variable() => self.parse_variable().map(Declaration::Variable),
            _ => Err(self.unexpected(&["'func'", "'entity'", "type"])),
        }
    }

    /// `FUNC IDENT ( params? ) (: Type)? Block`
    fn parse_function(&mut self) -> Parsed<FunctionDecl> {
        let start = self.expect(&TokenKind::Func)?.span;
        let name = self.expect_identifier()?;
        let open = self.expect(&TokenKind::LParen)?.span;
        let (params, _) = self.parse_list(&TokenKind::RParen, Construct::Paren, open, |p| {
            p.parse_param()
        })?;

        let return_type = if self.eat(&TokenKind::Colon) {
            Some(self.parse_type()?.0)
        } else {
            None
        };

        if self.current.kind != TokenKind::LBrace {
            let expected: &[&'static str] = if return_type.is_none() {
                &["':'", "'{'"]
            } else {
                &["'{'"]
            };
            return Err(self.unexpected(expected));
        }
        let body = self.parse_block(false)?;

        Ok(FunctionDecl {
            span: start.to(body.span),
            name,
            params,
            return_type,
            body,
        })
    }

    /// `Type IDENT` or `IDENT : Type`
    fn parse_param(&mut self) -> Parsed<Param> {
        if self.current.kind.is_type() {
            let (ty, start) = self.parse_type()?;
            let name = self.expect_identifier()?;
            return Ok(Param {
                span: start.to(name.span),
                ty,
                name,
            });
        }
        if matches!(self.current.kind, TokenKind::Identifier(_)) {
            let name = self.expect_identifier()?;
            self.expect(&TokenKind::Colon)?;
            let (ty, end) = self.parse_type()?;
            return Ok(Param {
                span: name.span.to(end),
                ty,
                name,
            });
        }
        Err(self.unexpected(&["type", "identifier"]))
    }

    /// `ENTITY IDENT Block`; the body may also declare functions.
    fn parse_entity(&mut self) -> Parsed<EntityDecl> {
        let start = self.expect(&TokenKind::Entity)?.span;
        let name = self.expect_identifier()?;
        let body = self.parse_block(true)?;
        Ok(EntityDecl {
            span: start.to(body.span),
            name,
            body,
        })
    }

    /// `Type IDENT (= Expr)? ;` or `IDENT : Type (= Expr)? ;`
    fn parse_variable(&mut self) -> Parsed<VariableDecl> {
        let (ty, name, start) = if self.current.kind.is_type() {
            let (ty, start) = self.parse_type()?;
            (ty, self.expect_identifier()?, start)
        } else {
            let name = self.expect_identifier()?;
            self.expect(&TokenKind::Colon)?;
            let (ty, _) = self.parse_type()?;
            let start = name.span;
            (ty, name, start)
        };

        let initializer = if self.eat(&TokenKind::Assign) {
            Some(self.parse_expression()?)
        } else if self.current.kind != TokenKind::Semicolon {
            return Err(self.unexpected(&["'='", "';'"]));
        } else {
            None
        };

        let end = self.expect(&TokenKind::Semicolon)?.span;
        Ok(VariableDecl {
            span: start.to(end),
            ty,
            name,
            initializer,
        })
    }

    /// A type keyword, or an identifier followed by `:`.
    fn starts_variable(&self) -> bool {
        self.current.kind.is_type()
            || (matches!(self.current.kind, TokenKind::Identifier(_))
                && self.next_is(&TokenKind::Colon))
    }

    fn parse_type(&mut self) -> Parsed<(TypeName, Span)> {
        let ty = match self.current.kind {
            TokenKind::NumberType => TypeName::Number,
            TokenKind::BooleanType => TypeName::Boolean,
            TokenKind::ArrayType => TypeName::Array,
            TokenKind::TextType => TypeName::Text,
            _ => return Err(self.unexpected(&["type"])),
        };
        let span = self.advance().span;
        Ok((ty, span))
    }

    // =========================================================================
    // Statements
    // =========================================================================

    /// `{ statements }`
    ///
    /// Failed statements are reported and skipped here. A block still open
    /// at end of input is reported and returned with what it collected.
    fn parse_block(&mut self, allow_functions: bool) -> Parsed<Block> {
        let open = self.expect(&TokenKind::LBrace)?.span;
        let mut statements = Vec::new();

        loop {
            match self.current.kind {
                TokenKind::RBrace => {
                    let close = self.advance().span;
                    return Ok(Block {
                        statements,
                        span: open.to(close),
                    });
                }
                TokenKind::Eof => {
                    self.report(Diagnostic::error(
                        SyntaxError::UnterminatedConstruct {
                            kind: Construct::Block,
                            opened_at: open,
                        },
                        open,
                    ));
                    return Ok(Block {
                        statements,
                        span: open.to(self.current.span),
                    });
                }
                TokenKind::Semicolon => {
                    self.advance();
                }
                _ => match self.parse_statement(allow_functions) {
                    Ok(statement) => {
                        statements.push(statement);
                        self.recovering = false;
                    }
                    Err(diagnostic) => {
                        self.report(diagnostic);
                        self.synchronize();
                    }
                },
            }
        }
    }

    /// Parses one statement, enforcing the nesting limit.
    fn parse_statement(&mut self, allow_functions: bool) -> Parsed<Stmt> {
        self.enter()?;
        let result = self.parse_statement_inner(allow_functions);
        self.leave();
        result
    }

    fn parse_statement_inner(&mut self, allow_functions: bool) -> Parsed<Stmt> {
        if let Some(action) = action_kind(&self.current.kind) {
            return self.parse_action(action).map(Stmt::Action);
        }

        match self.current.kind {
            _ if self.starts_variable() => self.parse_variable().map(Stmt::Variable),
            TokenKind::LBrace => self.parse_block(false).map(Stmt::Block),
            TokenKind::If => self.parse_if(),
            TokenKind::Until => self.parse_until(),
            TokenKind::During => self.parse_during(),
            TokenKind::Return => self.parse_return(),
            TokenKind::Func if allow_functions => self.parse_function().map(Stmt::Function),
            TokenKind::Semicolon => {
                // A lone `;` as a branch or loop body does nothing.
                let span = self.advance().span;
                Ok(Stmt::Block(Block {
                    statements: Vec::new(),
                    span,
                }))
            }
            _ if can_start_expression(&self.current.kind) => self.parse_expression_statement(),
            _ => Err(self.unexpected(&["statement"])),
        }
    }

    /// `IF ( Expr ) Statement (ELSE Statement)?`
    ///
    /// The inner `if` consumes an `else` greedily, which binds it to the
    /// nearest unmatched `if`.
    fn parse_if(&mut self) -> Parsed<Stmt> {
        let start = self.expect(&TokenKind::If)?.span;
        let condition = self.parse_condition()?;
        let then_branch = Box::new(self.parse_statement(false)?);
        let else_branch = if self.eat(&TokenKind::Else) {
            Some(Box::new(self.parse_statement(false)?))
        } else {
            None
        };

        let end = else_branch
            .as_ref()
            .map_or_else(|| then_branch.span(), |branch| branch.span());
        Ok(Stmt::If(IfStmt {
            condition,
            then_branch,
            else_branch,
            span: start.to(end),
        }))
    }

    /// `UNTIL ( Expr ) Statement`
    fn parse_until(&mut self) -> Parsed<Stmt> {
        let start = self.expect(&TokenKind::Until)?.span;
        let condition = self.parse_condition()?;
        let body = Box::new(self.parse_statement(false)?);
        Ok(Stmt::Until(UntilStmt {
            span: start.to(body.span()),
            condition,
            body,
        }))
    }

    /// `DURING ( Expr ) Statement`
    fn parse_during(&mut self) -> Parsed<Stmt> {
        let start = self.expect(&TokenKind::During)?.span;
        let condition = self.parse_condition()?;
        let body = Box::new(self.parse_statement(false)?);
        Ok(Stmt::During(DuringStmt {
            span: start.to(body.span()),
            condition,
            body,
        }))
    }

    /// `( Expr )` after `if`, `until` and `during`.
    fn parse_condition(&mut self) -> Parsed<Expr> {
        let open = self.expect(&TokenKind::LParen)?.span;
        let condition = self.within(Construct::Paren, open, Self::parse_expression)?;
        self.expect_closing(&TokenKind::RParen, Construct::Paren, open)?;
        Ok(condition)
    }

    /// `RETURN Expr? ;`
    fn parse_return(&mut self) -> Parsed<Stmt> {
        let start = self.expect(&TokenKind::Return)?.span;
        let value = if self.current.kind == TokenKind::Semicolon {
            None
        } else if can_start_expression(&self.current.kind) {
            Some(self.parse_expression()?)
        } else {
            return Err(self.unexpected(&["';'", "expression"]));
        };
        let end = self.expect(&TokenKind::Semicolon)?.span;
        Ok(Stmt::Return(ReturnStmt {
            value,
            span: start.to(end),
        }))
    }

    /// `ACTION ( args? ) ;`, `ACTION : text ;`, `ACTION args ;` or `ACTION ;`
    ///
    /// A `(` right after the verb always opens the argument list.
    fn parse_action(&mut self, action: ActionKind) -> Parsed<ActionStmt> {
        let start = self.advance().span;

        let args = match self.current.kind {
            TokenKind::Semicolon => Vec::new(),
            TokenKind::LParen => {
                let open = self.advance().span;
                self.parse_list(&TokenKind::RParen, Construct::Paren, open, Self::parse_expression)?
                    .0
            }
            TokenKind::Colon => {
                self.advance();
                vec![self.parse_text()?]
            }
            _ if can_start_expression(&self.current.kind) => {
                let mut args = vec![self.parse_expression()?];
                while self.eat(&TokenKind::Comma) {
                    args.push(self.parse_expression()?);
                }
                args
            }
            _ => return Err(self.unexpected(&["'('", "':'", "';'", "expression"])),
        };

        let end = self.expect(&TokenKind::Semicolon)?.span;
        Ok(ActionStmt {
            action,
            args,
            span: start.to(end),
        })
    }

    /// `Expr ;`
    fn parse_expression_statement(&mut self) -> Parsed<Stmt> {
        let expr = self.parse_expression()?;
        let end = self.expect(&TokenKind::Semicolon)?.span;
        Ok(Stmt::Expression(ExpressionStmt {
            span: expr.span().to(end),
            expr,
        }))
    }

    // =========================================================================
    // Token helpers
    // =========================================================================

    /// Pulls the next token from the lexer, reporting and skipping lexical
    /// errors.
    fn next_significant(&mut self) -> Token {
        loop {
            let token = self.lexer.next_token();
            match token.kind {
                TokenKind::Error(error) => self.report_lex_error(error, token.span),
                _ => return token,
            }
        }
    }

    /// Returns true if the token after the current one is `kind`. Nothing is
    /// consumed and lexical errors on the way are left for `advance`.
    fn next_is(&self, kind: &TokenKind) -> bool {
        let mut lexer = self.lexer.clone();
        loop {
            let token = lexer.next_token();
            if !matches!(token.kind, TokenKind::Error(_)) {
                return token.kind == *kind;
            }
        }
    }

    /// Consumes the current token and returns it.
    fn advance(&mut self) -> Token {
        let next = self.next_significant();
        std::mem::replace(&mut self.current, next)
    }

    /// Consumes the current token if it is `kind`.
    fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.current.kind == *kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes a token of the same kind as `expected` (payload ignored).
    fn expect(&mut self, expected: &TokenKind) -> Parsed<Token> {
        if std::mem::discriminant(&self.current.kind) == std::mem::discriminant(expected) {
            Ok(self.advance())
        } else {
            Err(self.unexpected(&[expected.name()]))
        }
    }

    /// Consumes a closing delimiter, reporting the opener if input ran out.
    fn expect_closing(
        &mut self,
        close: &TokenKind,
        construct: Construct,
        open: Span,
    ) -> Parsed<Token> {
        if self.current.kind == *close {
            Ok(self.advance())
        } else {
            Err(self.unclosed(construct, open, &[close.name()]))
        }
    }

    fn expect_identifier(&mut self) -> Parsed<Identifier> {
        if let TokenKind::Identifier(name) = &self.current.kind {
            let name = name.clone();
            let span = self.advance().span;
            Ok(Identifier { name, span })
        } else {
            Err(self.unexpected(&["identifier"]))
        }
    }

    /// Parses `item (, item)*` up to `close`, which is consumed. Returns the
    /// items and the span of the closing token.
    fn parse_list<T>(
        &mut self,
        close: &TokenKind,
        construct: Construct,
        open: Span,
        mut item: impl FnMut(&mut Self) -> Parsed<T>,
    ) -> Parsed<(Vec<T>, Span)> {
        let mut items = Vec::new();
        if self.current.kind != *close {
            items.push(self.within(construct, open, &mut item)?);
            while self.eat(&TokenKind::Comma) {
                items.push(self.within(construct, open, &mut item)?);
            }
        }
        if self.current.kind == *close {
            let end = self.advance().span;
            Ok((items, end))
        } else {
            Err(self.unclosed(construct, open, &["','", close.name()]))
        }
    }

    // =========================================================================
    // Diagnostics and recovery
    // =========================================================================

    /// Builds an "expected ..., found ..." diagnostic at the current token.
    fn unexpected(&self, expected: &[&'static str]) -> Diagnostic {
        Diagnostic::error(
            SyntaxError::UnexpectedToken {
                expected: expected.to_vec(),
                found: self.current.kind.describe(),
            },
            self.current.span,
        )
    }

    /// A missing closing delimiter: unterminated at end of input, otherwise
    /// an unexpected token.
    fn unclosed(&self, kind: Construct, open: Span, expected: &[&'static str]) -> Diagnostic {
        if self.current.kind == TokenKind::Eof {
            Diagnostic::error(
                SyntaxError::UnterminatedConstruct {
                    kind,
                    opened_at: open,
                },
                open,
            )
        } else {
            self.unexpected(expected)
        }
    }

    /// Runs `parse` inside a delimiter opened at `open`. If input runs out
    /// before the contents are complete, the opener is reported instead of
    /// the missing operand. An unterminated construct found further in is
    /// kept, since it is the innermost.
    fn within<T>(
        &mut self,
        construct: Construct,
        open: Span,
        parse: impl FnOnce(&mut Self) -> Parsed<T>,
    ) -> Parsed<T> {
        parse(self).map_err(|diagnostic| {
            let ran_out = self.current.kind == TokenKind::Eof
                && matches!(diagnostic.error, SyntaxError::UnexpectedToken { .. });
            if ran_out {
                self.unclosed(construct, open, &[])
            } else {
                diagnostic
            }
        })
    }

    /// Enters one level of nesting.
    fn enter(&mut self) -> Parsed<()> {
        if self.depth >= self.config.max_depth {
            return Err(Diagnostic::error(
                SyntaxError::NestingTooDeep {
                    limit: self.config.max_depth,
                },
                self.current.span,
            ));
        }
        self.depth += 1;
        Ok(())
    }

    fn leave(&mut self) {
        self.depth -= 1;
    }

    /// Leaves the levels entered by an operator chain.
    fn leave_levels(&mut self, levels: usize) {
        self.depth -= levels;
    }

    /// Records a diagnostic unless it is fallout from one already reported.
    fn report(&mut self, diagnostic: Diagnostic) {
        let at_eof = self.current.kind == TokenKind::Eof;
        if self.recovering || (at_eof && self.eof_reported) {
            trace!("suppressed follow-on error: {diagnostic}");
            return;
        }
        self.recovering = true;
        self.eof_reported |= at_eof;
        self.push(diagnostic);
    }

    fn report_lex_error(&mut self, error: LexError, span: Span) {
        trace!("lexical error at {span}: {error}");
        let opener = Span::new(span.start, span.start + 1, span.line, span.column);
        let error = match error {
            LexError::UnrecognizedCharacter(found) => SyntaxError::UnrecognizedToken { found },
            LexError::InvalidEscape(escape) => SyntaxError::InvalidEscape { escape },
            LexError::NumberOutOfRange => SyntaxError::NumberOutOfRange,
            LexError::UnterminatedString => {
                self.eof_reported = true;
                SyntaxError::UnterminatedConstruct {
                    kind: Construct::String,
                    opened_at: opener,
                }
            }
            LexError::UnterminatedComment => {
                self.eof_reported = true;
                SyntaxError::UnterminatedConstruct {
                    kind: Construct::Comment,
                    opened_at: opener,
                }
            }
        };
        self.recovering = true;
        self.push(Diagnostic::error(error, span));
    }

    fn push(&mut self, diagnostic: Diagnostic) {
        if self.diagnostics.len() < self.config.max_diagnostics {
            trace!("{diagnostic}");
            self.diagnostics.push(diagnostic);
        }
    }

    /// Skips to the end of the broken statement: past a `;` or a balanced
    /// `{ ... }`, or up to the `}` closing the enclosing block.
    fn synchronize(&mut self) {
        let mut depth = 0usize;
        loop {
            match self.current.kind {
                TokenKind::Eof => break,
                TokenKind::Semicolon if depth == 0 => {
                    self.advance();
                    break;
                }
                TokenKind::RBrace if depth == 0 => break,
                TokenKind::RBrace => {
                    self.advance();
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                }
                TokenKind::LBrace => {
                    self.advance();
                    depth += 1;
                }
                _ => {
                    self.advance();
                }
            }
        }
        trace!("resuming at {}", self.current.span);
        self.recovering = false;
    }

    /// Skips to the next token that can start a declaration outside any
    /// brackets.
    fn synchronize_declaration(&mut self) {
        let mut depth = 0usize;
        loop {
            if self.current.kind == TokenKind::Eof {
                break;
            }
            let at_top = depth == 0;
            if at_top && matches!(self.current.kind, TokenKind::Func | TokenKind::Entity) {
                break;
            }
            if at_top && self.starts_variable() {
                break;
            }
            if self.current.is_open_delimiter() {
                depth += 1;
            } else if self.current.is_close_delimiter() {
                depth = depth.saturating_sub(1);
            }
            self.advance();
        }
        trace!("resuming declarations at {}", self.current.span);
        self.recovering = false;
    }
}

fn action_kind(kind: &TokenKind) -> Option<ActionKind> {
    match kind {
        TokenKind::Move => Some(ActionKind::Move),
        TokenKind::Attack => Some(ActionKind::Attack),
        TokenKind::Gather => Some(ActionKind::Gather),
        TokenKind::Use => Some(ActionKind::Use),
        TokenKind::Say => Some(ActionKind::Say),
        TokenKind::Wait => Some(ActionKind::Wait),
        _ => None,
    }
}

/// Returns true if `kind` can begin an expression.
fn can_start_expression(kind: &TokenKind) -> bool {
    matches!(
        kind,
        TokenKind::Number(_)
            | TokenKind::String(_)
            | TokenKind::Text(_)
            | TokenKind::Identifier(_)
            | TokenKind::True
            | TokenKind::False
            | TokenKind::Len
            | TokenKind::LBracket
            | TokenKind::LParen
            | TokenKind::Minus
    )
}

/// Parses a script with the default configuration.
#[must_use]
pub fn parse(source: &str) -> ParseResult {
    Parser::new(source).parse_program()
}

/// Parses a script with the given configuration.
#[must_use]
pub fn parse_with_config(source: &str, config: &ParserConfig) -> ParseResult {
    Parser::with_config(source, config.clone()).parse_program()
}

/// Parses a single expression.
///
/// # Errors
/// Returns the diagnostics if `source` is not exactly one expression.
pub fn parse_expression(source: &str) -> Result<Expr> {
    Parser::new(source).parse_single_expression()
}
