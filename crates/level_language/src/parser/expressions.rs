//! Expression parsing, one method per precedence level.
//!
//! From loosest to tightest: assignment, `or`, `and`, equality, relational,
//! additive, multiplicative, unary minus, indexing, primary.

use crate::ast::{
    ArrayLiteral, AssignExpr, BinaryExpr, BinaryOp, BooleanLiteral, CallExpr, Expr, IndexExpr,
    LenExpr, NumberLiteral, StringLiteral, TextLiteral, UnaryExpr, UnaryOp,
};
use crate::diagnostic::{Construct, Diagnostic, SyntaxError};
use crate::token::TokenKind;

use super::{Parsed, Parser};

impl Parser<'_> {
    /// Parses a full expression, enforcing the nesting limit.
    pub(super) fn parse_expression(&mut self) -> Parsed<Expr> {
        self.enter()?;
        let result = self.parse_assignment();
        self.leave();
        result
    }

    /// `Or (= Expression)?`, right-associative.
    fn parse_assignment(&mut self) -> Parsed<Expr> {
        let target = self.parse_or()?;
        if self.current.kind != TokenKind::Assign {
            return Ok(target);
        }
        if !target.is_assignable() {
            return Err(Diagnostic::error(
                SyntaxError::InvalidAssignmentTarget,
                target.span(),
            ));
        }
        self.advance();
        let value = self.parse_expression()?;
        Ok(Expr::Assign(AssignExpr {
            span: target.span().to(value.span()),
            target: Box::new(target),
            value: Box::new(value),
        }))
    }

    fn parse_or(&mut self) -> Parsed<Expr> {
        self.parse_binary_level(Self::parse_and, |kind| match kind {
            TokenKind::Or => Some(BinaryOp::Or),
            _ => None,
        })
    }

    fn parse_and(&mut self) -> Parsed<Expr> {
        self.parse_binary_level(Self::parse_equality, |kind| match kind {
            TokenKind::And => Some(BinaryOp::And),
            _ => None,
        })
    }

    fn parse_equality(&mut self) -> Parsed<Expr> {
        self.parse_binary_level(Self::parse_relational, |kind| match kind {
            TokenKind::Eq => Some(BinaryOp::Eq),
            TokenKind::Ne => Some(BinaryOp::Ne),
            _ => None,
        })
    }

    fn parse_relational(&mut self) -> Parsed<Expr> {
        self.parse_binary_level(Self::parse_additive, |kind| match kind {
            TokenKind::Lt => Some(BinaryOp::Lt),
            TokenKind::Gt => Some(BinaryOp::Gt),
            TokenKind::Le => Some(BinaryOp::Le),
            TokenKind::Ge => Some(BinaryOp::Ge),
            _ => None,
        })
    }

    fn parse_additive(&mut self) -> Parsed<Expr> {
        self.parse_binary_level(Self::parse_multiplicative, |kind| match kind {
            TokenKind::Plus => Some(BinaryOp::Add),
            TokenKind::Minus => Some(BinaryOp::Sub),
            _ => None,
        })
    }

    fn parse_multiplicative(&mut self) -> Parsed<Expr> {
        self.parse_binary_level(Self::parse_unary, |kind| match kind {
            TokenKind::Times => Some(BinaryOp::Mul),
            TokenKind::Divide => Some(BinaryOp::Div),
            _ => None,
        })
    }

    /// One left-associative level: `operand (op operand)*`.
    ///
    /// Each operator deepens the tree by one, so it counts against the
    /// nesting limit like a parenthesis would.
    fn parse_binary_level(
        &mut self,
        operand: fn(&mut Self) -> Parsed<Expr>,
        operator: fn(&TokenKind) -> Option<BinaryOp>,
    ) -> Parsed<Expr> {
        let mut left = operand(self)?;
        let mut levels = 0;
        let result = loop {
            let Some(op) = operator(&self.current.kind) else {
                break Ok(left);
            };
            if let Err(diagnostic) = self.enter() {
                break Err(diagnostic);
            }
            levels += 1;
            self.advance();
            match operand(self) {
                Ok(right) => {
                    left = Expr::Binary(BinaryExpr {
                        op,
                        span: left.span().to(right.span()),
                        left: Box::new(left),
                        right: Box::new(right),
                    });
                }
                Err(diagnostic) => break Err(diagnostic),
            }
        };
        self.leave_levels(levels);
        result
    }

    /// `- Unary | Postfix`
    fn parse_unary(&mut self) -> Parsed<Expr> {
        if self.current.kind != TokenKind::Minus {
            return self.parse_postfix();
        }
        let start = self.advance().span;
        self.enter()?;
        let operand = self.parse_unary();
        self.leave();
        let operand = operand?;
        Ok(Expr::Unary(UnaryExpr {
            op: UnaryOp::Neg,
            span: start.to(operand.span()),
            operand: Box::new(operand),
        }))
    }

    /// `Primary ([ Expression ])*`
    fn parse_postfix(&mut self) -> Parsed<Expr> {
        let mut expr = self.parse_primary()?;
        let mut levels = 0;
        let result = loop {
            if self.current.kind != TokenKind::LBracket {
                break Ok(expr);
            }
            if let Err(diagnostic) = self.enter() {
                break Err(diagnostic);
            }
            levels += 1;
            match self.parse_index(expr) {
                Ok(indexed) => expr = indexed,
                Err(diagnostic) => break Err(diagnostic),
            }
        };
        self.leave_levels(levels);
        result
    }

    /// `[ Expression ]` applied to `target`.
    fn parse_index(&mut self, target: Expr) -> Parsed<Expr> {
        let open = self.advance().span;
        let index = self.within(Construct::Bracket, open, Self::parse_expression)?;
        let close = self.expect_closing(&TokenKind::RBracket, Construct::Bracket, open)?;
        Ok(Expr::Index(IndexExpr {
            span: target.span().to(close.span),
            target: Box::new(target),
            index: Box::new(index),
        }))
    }

    fn parse_primary(&mut self) -> Parsed<Expr> {
        match &self.current.kind {
            TokenKind::Number(value) => {
                let value = *value;
                let span = self.advance().span;
                Ok(Expr::Number(NumberLiteral { value, span }))
            }
            TokenKind::String(value) => {
                let value = value.clone();
                let span = self.advance().span;
                Ok(Expr::String(StringLiteral { value, span }))
            }
            TokenKind::Text(_) => self.parse_text(),
            TokenKind::True | TokenKind::False => {
                let value = self.current.kind == TokenKind::True;
                let span = self.advance().span;
                Ok(Expr::Boolean(BooleanLiteral { value, span }))
            }
            TokenKind::Identifier(_) => self.parse_name_or_call(),
            TokenKind::Len => self.parse_len(),
            TokenKind::LBracket => {
                let open = self.advance().span;
                let (elements, close) = self.parse_list(
                    &TokenKind::RBracket,
                    Construct::Bracket,
                    open,
                    Self::parse_expression,
                )?;
                Ok(Expr::Array(ArrayLiteral {
                    elements,
                    span: open.to(close),
                }))
            }
            TokenKind::LParen => {
                let open = self.advance().span;
                let inner = self.within(Construct::Paren, open, Self::parse_expression)?;
                self.expect_closing(&TokenKind::RParen, Construct::Paren, open)?;
                Ok(inner)
            }
            _ => Err(self.unexpected(&["expression"])),
        }
    }

    /// The free-form text after `say:`.
    pub(super) fn parse_text(&mut self) -> Parsed<Expr> {
        if let TokenKind::Text(value) = &self.current.kind {
            let value = value.clone();
            let span = self.advance().span;
            Ok(Expr::Text(TextLiteral { value, span }))
        } else {
            Err(self.unexpected(&["text"]))
        }
    }

    /// `IDENT` or `IDENT ( args? )`
    fn parse_name_or_call(&mut self) -> Parsed<Expr> {
        let callee = self.expect_identifier()?;
        if self.current.kind != TokenKind::LParen {
            return Ok(Expr::Identifier(callee));
        }
        let open = self.advance().span;
        let (args, close) =
            self.parse_list(&TokenKind::RParen, Construct::Paren, open, Self::parse_expression)?;
        Ok(Expr::Call(CallExpr {
            span: callee.span.to(close),
            callee,
            args,
        }))
    }

    /// `len ( Expression )`
    fn parse_len(&mut self) -> Parsed<Expr> {
        let start = self.expect(&TokenKind::Len)?.span;
        let open = self.expect(&TokenKind::LParen)?.span;
        let operand = self.within(Construct::Paren, open, Self::parse_expression)?;
        let close = self.expect_closing(&TokenKind::RParen, Construct::Paren, open)?;
        Ok(Expr::Len(LenExpr {
            operand: Box::new(operand),
            span: start.to(close.span),
        }))
    }
}
