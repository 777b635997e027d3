//! Read-only traversal of Level syntax trees.
//!
//! Implement the [`Visitor`] hooks of interest, then drive the traversal
//! with [`walk_program`] (or one of the narrower `walk_*` functions). The
//! walk is depth-first and visits children in source order.
//!
//! # Example
//!
//! ```
//! use level_language::parse;
//! use level_language::ast::Expr;
//! use level_language::visitor::{Visitor, walk_program};
//!
//! struct NameCounter(usize);
//!
//! impl Visitor for NameCounter {
//!     fn visit_expr(&mut self, expr: &Expr) {
//!         if expr.as_identifier().is_some() {
//!             self.0 += 1;
//!         }
//!     }
//! }
//!
//! let result = parse("func f() { hp = hp - dmg; }");
//! let mut counter = NameCounter(0);
//! walk_program(&mut counter, &result.program);
//! assert_eq!(counter.0, 3);
//! ```

use crate::ast::{Block, Declaration, Expr, FunctionDecl, Program, Stmt, VariableDecl};

/// Hooks called during a walk. Every default does nothing.
///
/// `visit_*` hooks fire before the node's children are walked; `leave_*`
/// hooks fire after.
#[allow(unused_variables)]
pub trait Visitor {
    /// Called for each top-level declaration.
    fn visit_declaration(&mut self, declaration: &Declaration) {}

    /// Called for every function, top-level or nested in an entity.
    fn visit_function(&mut self, function: &FunctionDecl) {}

    /// Called for every variable declaration, global or local.
    fn visit_variable(&mut self, variable: &VariableDecl) {}

    /// Called when entering a block.
    fn visit_block(&mut self, block: &Block) {}

    /// Called when leaving a block.
    fn leave_block(&mut self, block: &Block) {}

    /// Called for each statement.
    fn visit_stmt(&mut self, stmt: &Stmt) {}

    /// Called for each expression.
    fn visit_expr(&mut self, expr: &Expr) {}
}

/// Walks every declaration of a program.
pub fn walk_program<V: Visitor + ?Sized>(visitor: &mut V, program: &Program) {
    for declaration in &program.declarations {
        walk_declaration(visitor, declaration);
    }
}

/// Walks one declaration and everything inside it.
pub fn walk_declaration<V: Visitor + ?Sized>(visitor: &mut V, declaration: &Declaration) {
    visitor.visit_declaration(declaration);
    match declaration {
        Declaration::Function(f) => walk_function(visitor, f),
        Declaration::Entity(e) => walk_block(visitor, &e.body),
        Declaration::Variable(v) => walk_variable(visitor, v),
    }
}

fn walk_function<V: Visitor + ?Sized>(visitor: &mut V, function: &FunctionDecl) {
    visitor.visit_function(function);
    walk_block(visitor, &function.body);
}

fn walk_variable<V: Visitor + ?Sized>(visitor: &mut V, variable: &VariableDecl) {
    visitor.visit_variable(variable);
    if let Some(init) = &variable.initializer {
        walk_expr(visitor, init);
    }
}

/// Walks a block's statements.
pub fn walk_block<V: Visitor + ?Sized>(visitor: &mut V, block: &Block) {
    visitor.visit_block(block);
    for stmt in &block.statements {
        walk_stmt(visitor, stmt);
    }
    visitor.leave_block(block);
}

/// Walks one statement and its children.
pub fn walk_stmt<V: Visitor + ?Sized>(visitor: &mut V, stmt: &Stmt) {
    visitor.visit_stmt(stmt);
    match stmt {
        Stmt::Variable(v) => walk_variable(visitor, v),
        Stmt::Block(b) => walk_block(visitor, b),
        Stmt::If(s) => {
            walk_expr(visitor, &s.condition);
            walk_stmt(visitor, &s.then_branch);
            if let Some(else_branch) = &s.else_branch {
                walk_stmt(visitor, else_branch);
            }
        }
        Stmt::Until(s) => {
            walk_expr(visitor, &s.condition);
            walk_stmt(visitor, &s.body);
        }
        Stmt::During(s) => {
            walk_expr(visitor, &s.condition);
            walk_stmt(visitor, &s.body);
        }
        Stmt::Return(r) => {
            if let Some(value) = &r.value {
                walk_expr(visitor, value);
            }
        }
        Stmt::Action(a) => {
            for arg in &a.args {
                walk_expr(visitor, arg);
            }
        }
        Stmt::Expression(e) => walk_expr(visitor, &e.expr),
        Stmt::Function(f) => walk_function(visitor, f),
    }
}

/// Walks one expression and its subexpressions.
pub fn walk_expr<V: Visitor + ?Sized>(visitor: &mut V, expr: &Expr) {
    visitor.visit_expr(expr);
    match expr {
        Expr::Binary(b) => {
            walk_expr(visitor, &b.left);
            walk_expr(visitor, &b.right);
        }
        Expr::Unary(u) => walk_expr(visitor, &u.operand),
        Expr::Assign(a) => {
            walk_expr(visitor, &a.target);
            walk_expr(visitor, &a.value);
        }
        Expr::Call(c) => {
            for arg in &c.args {
                walk_expr(visitor, arg);
            }
        }
        Expr::Len(l) => walk_expr(visitor, &l.operand),
        Expr::Index(i) => {
            walk_expr(visitor, &i.target);
            walk_expr(visitor, &i.index);
        }
        Expr::Array(a) => {
            for element in &a.elements {
                walk_expr(visitor, element);
            }
        }
        Expr::Identifier(_)
        | Expr::Number(_)
        | Expr::Boolean(_)
        | Expr::String(_)
        | Expr::Text(_) => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    /// Records what it sees, in order.
    #[derive(Default)]
    struct Recorder {
        events: Vec<String>,
        depth: usize,
        max_depth: usize,
    }

    impl Visitor for Recorder {
        fn visit_function(&mut self, function: &FunctionDecl) {
            self.events.push(format!("func {}", function.name.name));
        }

        fn visit_variable(&mut self, variable: &VariableDecl) {
            self.events.push(format!("var {}", variable.name.name));
        }

        fn visit_block(&mut self, _block: &Block) {
            self.depth += 1;
            self.max_depth = self.max_depth.max(self.depth);
        }

        fn leave_block(&mut self, _block: &Block) {
            self.depth -= 1;
        }

        fn visit_stmt(&mut self, stmt: &Stmt) {
            self.events.push(stmt.kind_name().to_string());
        }

        fn visit_expr(&mut self, expr: &Expr) {
            if let Some(name) = expr.as_identifier() {
                self.events.push(name.to_string());
            }
        }
    }

    fn record(source: &str) -> Recorder {
        let result = parse(source);
        assert!(result.is_ok(), "{:?}", result.diagnostics);
        let mut recorder = Recorder::default();
        walk_program(&mut recorder, &result.program);
        recorder
    }

    #[test]
    fn visits_in_source_order() {
        let recorder = record("number g = seed;\nentity E { if (a) wait; else move(b); }");
        assert_eq!(
            recorder.events,
            ["var g", "seed", "if", "a", "action", "action", "b"]
        );
    }

    #[test]
    fn reaches_nested_functions() {
        let recorder = record("entity E { func inner(number x) { return x; } }");
        assert_eq!(recorder.events, ["function", "func inner", "return", "x"]);
    }

    #[test]
    fn block_hooks_balance() {
        let recorder = record("func f() { { { wait; } } during (go) { } }");
        assert_eq!(recorder.depth, 0);
        assert_eq!(recorder.max_depth, 3);
    }

    #[test]
    fn expressions_walk_all_operands() {
        let recorder = record("func f() { t[i] = len(xs) + g(y, [z]); }");
        // Callees are names, not expressions.
        assert_eq!(recorder.events, ["expression", "t", "i", "xs", "y", "z"]);
    }
}
