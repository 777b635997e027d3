//! Canonical printer for Level syntax trees.
//!
//! Turns a [`Program`] or [`Expr`] back into source text. The output uses
//! one spelling per construct (`and` rather than `&&`, `type name`
//! parameters) and the fewest parentheses that preserve the tree, so parsing
//! the output again yields the same structure.
//!
//! # Example
//!
//! ```
//! use level_language::{parse_expression, pretty::print_expr};
//!
//! let expr = parse_expression("(1 + 2) * 3 && ready").unwrap();
//! assert_eq!(print_expr(&expr), "(1 + 2) * 3 and ready");
//! ```

use crate::ast::{
    ActionStmt, Block, Declaration, EntityDecl, Expr, FunctionDecl, IfStmt, Precedence, Program,
    Stmt, VariableDecl,
};

/// Configuration for printing.
#[derive(Debug, Clone)]
pub struct PrettyConfig {
    /// Number of spaces for each indentation level.
    pub indent_width: usize,
    /// Parenthesize every operator expression, whatever the precedence.
    pub explicit_parens: bool,
}

impl Default for PrettyConfig {
    fn default() -> Self {
        Self {
            indent_width: 4,
            explicit_parens: false,
        }
    }
}

/// Prints a whole program with the default configuration.
#[must_use]
pub fn print_program(program: &Program) -> String {
    print_program_with_config(program, &PrettyConfig::default())
}

/// Prints a whole program. Declarations are separated by a blank line.
#[must_use]
pub fn print_program_with_config(program: &Program, config: &PrettyConfig) -> String {
    let mut printer = Printer::new(config.clone());
    for (i, declaration) in program.declarations.iter().enumerate() {
        if i > 0 {
            printer.output.push('\n');
        }
        printer.print_declaration(declaration);
        printer.output.push('\n');
    }
    printer.output
}

/// Prints a single expression with the default configuration.
#[must_use]
pub fn print_expr(expr: &Expr) -> String {
    print_expr_with_config(expr, &PrettyConfig::default())
}

/// Prints a single expression.
#[must_use]
pub fn print_expr_with_config(expr: &Expr, config: &PrettyConfig) -> String {
    let mut printer = Printer::new(config.clone());
    printer.print_expr(expr, Precedence::Assignment);
    printer.output
}

/// Printer state.
struct Printer {
    config: PrettyConfig,
    output: String,
    indent_level: usize,
}

impl Printer {
    fn new(config: PrettyConfig) -> Self {
        Self {
            config,
            output: String::new(),
            indent_level: 0,
        }
    }

    fn write_indent(&mut self) {
        let width = self.indent_level * self.config.indent_width;
        self.output.extend(std::iter::repeat_n(' ', width));
    }

    // =========================================================================
    // Declarations
    // =========================================================================

    fn print_declaration(&mut self, declaration: &Declaration) {
        match declaration {
            Declaration::Function(f) => self.print_function(f),
            Declaration::Entity(e) => self.print_entity(e),
            Declaration::Variable(v) => self.print_variable(v),
        }
    }

    fn print_function(&mut self, f: &FunctionDecl) {
        self.output.push_str("func ");
        self.output.push_str(&f.name.name);
        self.output.push('(');
        for (i, param) in f.params.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.output.push_str(param.ty.as_str());
            self.output.push(' ');
            self.output.push_str(&param.name.name);
        }
        self.output.push(')');
        if let Some(ty) = f.return_type {
            self.output.push_str(": ");
            self.output.push_str(ty.as_str());
        }
        self.output.push(' ');
        self.print_block(&f.body);
    }

    fn print_entity(&mut self, e: &EntityDecl) {
        self.output.push_str("entity ");
        self.output.push_str(&e.name.name);
        self.output.push(' ');
        self.print_block(&e.body);
    }

    fn print_variable(&mut self, v: &VariableDecl) {
        self.output.push_str(v.ty.as_str());
        self.output.push(' ');
        self.output.push_str(&v.name.name);
        if let Some(init) = &v.initializer {
            self.output.push_str(" = ");
            self.print_expr(init, Precedence::Assignment);
        }
        self.output.push(';');
    }

    // =========================================================================
    // Statements
    // =========================================================================

    /// Prints a block starting at the current column; nested statements go
    /// on their own lines one level deeper.
    fn print_block(&mut self, block: &Block) {
        if block.statements.is_empty() {
            self.output.push_str("{}");
            return;
        }
        self.output.push_str("{\n");
        self.indent_level += 1;
        for stmt in &block.statements {
            self.write_indent();
            self.print_stmt(stmt);
            self.output.push('\n');
        }
        self.indent_level -= 1;
        self.write_indent();
        self.output.push('}');
    }

    fn print_stmt(&mut self, stmt: &Stmt) {
        match stmt {
            Stmt::Variable(v) => self.print_variable(v),
            Stmt::Block(b) => self.print_block(b),
            Stmt::If(s) => self.print_if(s),
            Stmt::Until(s) => {
                self.print_condition("until", &s.condition);
                self.print_body(&s.body);
            }
            Stmt::During(s) => {
                self.print_condition("during", &s.condition);
                self.print_body(&s.body);
            }
            Stmt::Return(r) => {
                self.output.push_str("return");
                if let Some(value) = &r.value {
                    self.output.push(' ');
                    self.print_expr(value, Precedence::Assignment);
                }
                self.output.push(';');
            }
            Stmt::Action(a) => self.print_action(a),
            Stmt::Expression(e) => {
                self.print_expr(&e.expr, Precedence::Assignment);
                self.output.push(';');
            }
            Stmt::Function(f) => self.print_function(f),
        }
    }

    fn print_condition(&mut self, keyword: &str, condition: &Expr) {
        self.output.push_str(keyword);
        self.output.push_str(" (");
        self.print_expr(condition, Precedence::Assignment);
        self.output.push(')');
    }

    /// A branch or loop body: blocks stay on the same line, anything else
    /// moves to the next line, indented.
    fn print_body(&mut self, body: &Stmt) {
        if let Stmt::Block(block) = body {
            self.output.push(' ');
            self.print_block(block);
        } else {
            self.output.push('\n');
            self.indent_level += 1;
            self.write_indent();
            self.print_stmt(body);
            self.indent_level -= 1;
        }
    }

    fn print_if(&mut self, s: &IfStmt) {
        self.print_condition("if", &s.condition);
        self.print_body(&s.then_branch);

        let Some(else_branch) = &s.else_branch else {
            return;
        };
        if matches!(*s.then_branch, Stmt::Block(_)) {
            self.output.push(' ');
        } else {
            self.output.push('\n');
            self.write_indent();
        }
        self.output.push_str("else");
        if let Stmt::If(chained) = else_branch.as_ref() {
            self.output.push(' ');
            self.print_if(chained);
        } else {
            self.print_body(else_branch);
        }
    }

    fn print_action(&mut self, a: &ActionStmt) {
        self.output.push_str(a.action.as_str());
        if let Some(text) = a.text() {
            self.output.push_str(": ");
            self.output.push_str(text);
        } else if !a.args.is_empty() {
            self.output.push('(');
            self.print_list(&a.args);
            self.output.push(')');
        }
        self.output.push(';');
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Prints `expr`, parenthesized if it binds more loosely than `min`.
    fn print_expr(&mut self, expr: &Expr, min: Precedence) {
        let wrap = expr.precedence() < min
            || (self.config.explicit_parens
                && matches!(expr, Expr::Binary(_) | Expr::Assign(_) | Expr::Unary(_)));
        if wrap {
            self.output.push('(');
        }

        match expr {
            Expr::Binary(b) => {
                let prec = b.op.precedence();
                self.print_expr(&b.left, prec);
                self.output.push(' ');
                self.output.push_str(b.op.symbol());
                self.output.push(' ');
                // Left-associative: an equal-precedence right operand needs
                // parentheses.
                self.print_expr(&b.right, tighter(prec));
            }
            Expr::Unary(u) => {
                self.output.push_str(u.op.symbol());
                self.print_expr(&u.operand, Precedence::Unary);
            }
            Expr::Assign(a) => {
                self.print_expr(&a.target, Precedence::Postfix);
                self.output.push_str(" = ");
                self.print_expr(&a.value, Precedence::Assignment);
            }
            Expr::Call(c) => {
                self.output.push_str(&c.callee.name);
                self.output.push('(');
                self.print_list(&c.args);
                self.output.push(')');
            }
            Expr::Len(l) => {
                self.output.push_str("len(");
                self.print_expr(&l.operand, Precedence::Assignment);
                self.output.push(')');
            }
            Expr::Index(i) => {
                self.print_expr(&i.target, Precedence::Postfix);
                self.output.push('[');
                self.print_expr(&i.index, Precedence::Assignment);
                self.output.push(']');
            }
            Expr::Array(a) => {
                self.output.push('[');
                self.print_list(&a.elements);
                self.output.push(']');
            }
            Expr::Identifier(id) => self.output.push_str(&id.name),
            Expr::Number(n) => self.output.push_str(&n.value.to_string()),
            Expr::Boolean(b) => self.output.push_str(if b.value { "true" } else { "false" }),
            Expr::String(s) => self.print_string(&s.value),
            Expr::Text(t) => self.output.push_str(&t.value),
        }

        if wrap {
            self.output.push(')');
        }
    }

    fn print_list(&mut self, items: &[Expr]) {
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                self.output.push_str(", ");
            }
            self.print_expr(item, Precedence::Assignment);
        }
    }

    fn print_string(&mut self, s: &str) {
        self.output.push('"');
        for c in s.chars() {
            match c {
                '"' => self.output.push_str("\\\""),
                '\\' => self.output.push_str("\\\\"),
                '\n' => self.output.push_str("\\n"),
                '\r' => self.output.push_str("\\r"),
                '\t' => self.output.push_str("\\t"),
                c => self.output.push(c),
            }
        }
        self.output.push('"');
    }
}

/// The next tighter precedence level.
const fn tighter(prec: Precedence) -> Precedence {
    match prec {
        Precedence::Assignment => Precedence::Or,
        Precedence::Or => Precedence::And,
        Precedence::And => Precedence::Equality,
        Precedence::Equality => Precedence::Relational,
        Precedence::Relational => Precedence::Additive,
        Precedence::Additive => Precedence::Multiplicative,
        Precedence::Multiplicative => Precedence::Unary,
        Precedence::Unary => Precedence::Postfix,
        Precedence::Postfix | Precedence::Primary => Precedence::Primary,
    }
}
