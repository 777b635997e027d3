//! Abstract syntax tree for Level scripts.
//!
//! The tree is strictly owned: every node owns its children and nothing is
//! shared. The parser builds it once and hands the [`Program`] to whichever
//! stage consumes it next.

use std::fmt;

use crate::span::Span;

/// A whole script.
#[derive(Clone, Debug, PartialEq)]
pub struct Program {
    /// Top-level declarations in source order.
    pub declarations: Vec<Declaration>,
    /// Covers the entire source.
    pub span: Span,
}

/// A top-level declaration.
#[derive(Clone, Debug, PartialEq)]
pub enum Declaration {
    /// `func name(params) { ... }`
    Function(FunctionDecl),
    /// `entity Name { ... }`
    Entity(EntityDecl),
    /// A global variable: `number max_hp = 100;`
    Variable(VariableDecl),
}

impl Declaration {
    /// Returns the source span of this declaration.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Function(f) => f.span,
            Self::Entity(e) => e.span,
            Self::Variable(v) => v.span,
        }
    }

    /// Returns the declared name.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::Function(f) => &f.name.name,
            Self::Entity(e) => &e.name.name,
            Self::Variable(v) => &v.name.name,
        }
    }
}

/// `func name(params): type { body }`
#[derive(Clone, Debug, PartialEq)]
pub struct FunctionDecl {
    /// Function name.
    pub name: Identifier,
    /// Parameters in declaration order.
    pub params: Vec<Param>,
    /// Declared result type, if any.
    pub return_type: Option<TypeName>,
    /// Function body.
    pub body: Block,
    /// From `func` to the closing brace.
    pub span: Span,
}

/// A typed function parameter.
#[derive(Clone, Debug, PartialEq)]
pub struct Param {
    /// Declared type.
    pub ty: TypeName,
    /// Parameter name.
    pub name: Identifier,
    /// Covers the type and the name.
    pub span: Span,
}

/// `entity Name { body }`
#[derive(Clone, Debug, PartialEq)]
pub struct EntityDecl {
    /// Entity name.
    pub name: Identifier,
    /// Behavior statements and nested functions.
    pub body: Block,
    /// From `entity` to the closing brace.
    pub span: Span,
}

/// `type name = initializer;`
#[derive(Clone, Debug, PartialEq)]
pub struct VariableDecl {
    /// Declared type.
    pub ty: TypeName,
    /// Variable name.
    pub name: Identifier,
    /// Initial value, if given.
    pub initializer: Option<Expr>,
    /// From the type to the semicolon.
    pub span: Span,
}

/// The static type vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TypeName {
    /// `number`
    Number,
    /// `boolean`
    Boolean,
    /// `array`
    Array,
    /// `text`
    Text,
}

impl TypeName {
    /// The keyword spelling of this type.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Text => "text",
        }
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `{ statements }`
#[derive(Clone, Debug, PartialEq)]
pub struct Block {
    /// Statements in source order.
    pub statements: Vec<Stmt>,
    /// From `{` to `}`.
    pub span: Span,
}

/// A statement.
#[derive(Clone, Debug, PartialEq)]
pub enum Stmt {
    /// Local variable declaration.
    Variable(VariableDecl),
    /// Nested block.
    Block(Block),
    /// `if (cond) stmt else stmt`
    If(IfStmt),
    /// `until (cond) stmt`
    Until(UntilStmt),
    /// `during (cond) stmt`
    During(DuringStmt),
    /// `return expr;`
    Return(ReturnStmt),
    /// `move(...)`, `say: ...` and the other actions.
    Action(ActionStmt),
    /// An expression evaluated for its effect.
    Expression(ExpressionStmt),
    /// A function nested in an entity body.
    Function(FunctionDecl),
}

impl Stmt {
    /// Returns the source span of this statement.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Variable(s) => s.span,
            Self::Block(s) => s.span,
            Self::If(s) => s.span,
            Self::Until(s) => s.span,
            Self::During(s) => s.span,
            Self::Return(s) => s.span,
            Self::Action(s) => s.span,
            Self::Expression(s) => s.span,
            Self::Function(s) => s.span,
        }
    }

    /// A short name for the statement kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Variable(_) => "variable",
            Self::Block(_) => "block",
            Self::If(_) => "if",
            Self::Until(_) => "until",
            Self::During(_) => "during",
            Self::Return(_) => "return",
            Self::Action(_) => "action",
            Self::Expression(_) => "expression",
            Self::Function(_) => "function",
        }
    }
}

/// `if (condition) then_branch else else_branch`
#[derive(Clone, Debug, PartialEq)]
pub struct IfStmt {
    /// Tested condition.
    pub condition: Expr,
    /// Runs when the condition holds.
    pub then_branch: Box<Stmt>,
    /// Runs otherwise.
    pub else_branch: Option<Box<Stmt>>,
    /// From `if` to the end of the last branch.
    pub span: Span,
}

/// `until (condition) body`: repeats the body while the condition is false,
/// testing before every iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct UntilStmt {
    /// Exit condition.
    pub condition: Expr,
    /// Loop body.
    pub body: Box<Stmt>,
    /// From `until` to the end of the body.
    pub span: Span,
}

/// `during (condition) body`: repeats the body while the condition is true,
/// testing before every iteration.
#[derive(Clone, Debug, PartialEq)]
pub struct DuringStmt {
    /// Continue condition.
    pub condition: Expr,
    /// Loop body.
    pub body: Box<Stmt>,
    /// From `during` to the end of the body.
    pub span: Span,
}

/// `return value;`
#[derive(Clone, Debug, PartialEq)]
pub struct ReturnStmt {
    /// Returned value, if any.
    pub value: Option<Expr>,
    /// From `return` to the semicolon.
    pub span: Span,
}

/// One of the built-in entity commands.
#[derive(Clone, Debug, PartialEq)]
pub struct ActionStmt {
    /// Which command.
    pub action: ActionKind,
    /// Arguments in source order.
    pub args: Vec<Expr>,
    /// From the verb to the semicolon.
    pub span: Span,
}

impl ActionStmt {
    /// Returns the free-form text argument of `say: ...` style actions.
    #[must_use]
    pub fn text(&self) -> Option<&str> {
        match self.args.as_slice() {
            [Expr::Text(t)] => Some(&t.value),
            _ => None,
        }
    }
}

/// The action verbs.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ActionKind {
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
}

impl ActionKind {
    /// The keyword spelling of this verb.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Move => "move",
            Self::Attack => "attack",
            Self::Gather => "gather",
            Self::Use => "use",
            Self::Say => "say",
            Self::Wait => "wait",
        }
    }
}

impl fmt::Display for ActionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `expr;`
#[derive(Clone, Debug, PartialEq)]
pub struct ExpressionStmt {
    /// The expression.
    pub expr: Expr,
    /// From the expression start to the semicolon.
    pub span: Span,
}

/// Binding strength of expression forms, weakest first.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
    /// `=` (right-associative)
    Assignment,
    /// `or`, `||`
    Or,
    /// `and`, `&&`
    And,
    /// `==`, `!=`
    Equality,
    /// `<`, `>`, `<=`, `>=`
    Relational,
    /// `+`, `-`
    Additive,
    /// `*`, `/`
    Multiplicative,
    /// Prefix `-`
    Unary,
    /// Indexing `a[i]`
    Postfix,
    /// Literals, names, calls, parenthesised expressions
    Primary,
}

/// An expression.
#[derive(Clone, Debug, PartialEq)]
pub enum Expr {
    /// `left op right`
    Binary(BinaryExpr),
    /// `-operand`
    Unary(UnaryExpr),
    /// `target = value`
    Assign(AssignExpr),
    /// `name(args)`
    Call(CallExpr),
    /// `len(operand)`
    Len(LenExpr),
    /// `target[index]`
    Index(IndexExpr),
    /// `[elements]`
    Array(ArrayLiteral),
    /// A name.
    Identifier(Identifier),
    /// A number.
    Number(NumberLiteral),
    /// `true` or `false`
    Boolean(BooleanLiteral),
    /// A quoted string.
    String(StringLiteral),
    /// Free-form text from `say: ...`
    Text(TextLiteral),
}

impl Expr {
    /// Returns the source span of this expression.
    #[must_use]
    pub const fn span(&self) -> Span {
        match self {
            Self::Binary(e) => e.span,
            Self::Unary(e) => e.span,
            Self::Assign(e) => e.span,
            Self::Call(e) => e.span,
            Self::Len(e) => e.span,
            Self::Index(e) => e.span,
            Self::Array(e) => e.span,
            Self::Identifier(e) => e.span,
            Self::Number(e) => e.span,
            Self::Boolean(e) => e.span,
            Self::String(e) => e.span,
            Self::Text(e) => e.span,
        }
    }

    /// The precedence class this expression was parsed at.
    #[must_use]
    pub const fn precedence(&self) -> Precedence {
        match self {
            Self::Assign(_) => Precedence::Assignment,
            Self::Binary(e) => e.op.precedence(),
            Self::Unary(_) => Precedence::Unary,
            Self::Index(_) => Precedence::Postfix,
            _ => Precedence::Primary,
        }
    }

    /// Returns true if this expression may appear left of `=`.
    #[must_use]
    pub const fn is_assignable(&self) -> bool {
        matches!(self, Self::Identifier(_) | Self::Index(_))
    }

    /// Returns the identifier name, or None if not an identifier.
    #[must_use]
    pub fn as_identifier(&self) -> Option<&str> {
        match self {
            Self::Identifier(id) => Some(&id.name),
            _ => None,
        }
    }

    /// Returns the number value, or None if not a number literal.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(n.value),
            _ => None,
        }
    }

    /// A human-readable name for the expression kind.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Binary(_) => "binary",
            Self::Unary(_) => "unary",
            Self::Assign(_) => "assignment",
            Self::Call(_) => "call",
            Self::Len(_) => "len",
            Self::Index(_) => "index",
            Self::Array(_) => "array",
            Self::Identifier(_) => "identifier",
            Self::Number(_) => "number",
            Self::Boolean(_) => "boolean",
            Self::String(_) => "string",
            Self::Text(_) => "text",
        }
    }
}

/// Binary operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `or`
    Or,
    /// `and`
    And,
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
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
}

impl BinaryOp {
    /// The canonical source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Or => "or",
            Self::And => "and",
            Self::Eq => "==",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        }
    }

    /// The precedence class of this operator. All binary operators are
    /// left-associative.
    #[must_use]
    pub const fn precedence(self) -> Precedence {
        match self {
            Self::Or => Precedence::Or,
            Self::And => Precedence::And,
            Self::Eq | Self::Ne => Precedence::Equality,
            Self::Lt | Self::Gt | Self::Le | Self::Ge => Precedence::Relational,
            Self::Add | Self::Sub => Precedence::Additive,
            Self::Mul | Self::Div => Precedence::Multiplicative,
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Prefix operators.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `-`
    Neg,
}

impl UnaryOp {
    /// The canonical source spelling.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
        }
    }
}

/// `left op right`
#[derive(Clone, Debug, PartialEq)]
pub struct BinaryExpr {
    /// Operator.
    pub op: BinaryOp,
    /// Left operand.
    pub left: Box<Expr>,
    /// Right operand.
    pub right: Box<Expr>,
    /// Covers both operands.
    pub span: Span,
}

/// `op operand`
#[derive(Clone, Debug, PartialEq)]
pub struct UnaryExpr {
    /// Operator.
    pub op: UnaryOp,
    /// Operand.
    pub operand: Box<Expr>,
    /// From the operator to the end of the operand.
    pub span: Span,
}

/// `target = value`
#[derive(Clone, Debug, PartialEq)]
pub struct AssignExpr {
    /// An identifier or index expression.
    pub target: Box<Expr>,
    /// Assigned value.
    pub value: Box<Expr>,
    /// Covers target and value.
    pub span: Span,
}

/// `callee(args)`
#[derive(Clone, Debug, PartialEq)]
pub struct CallExpr {
    /// Called function.
    pub callee: Identifier,
    /// Arguments in source order.
    pub args: Vec<Expr>,
    /// From the name to `)`.
    pub span: Span,
}

/// `len(operand)`
#[derive(Clone, Debug, PartialEq)]
pub struct LenExpr {
    /// Measured expression.
    pub operand: Box<Expr>,
    /// From `len` to `)`.
    pub span: Span,
}

/// `target[index]`
#[derive(Clone, Debug, PartialEq)]
pub struct IndexExpr {
    /// Indexed expression.
    pub target: Box<Expr>,
    /// Index.
    pub index: Box<Expr>,
    /// From the target to `]`.
    pub span: Span,
}

/// `[elements]`
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayLiteral {
    /// Elements in source order.
    pub elements: Vec<Expr>,
    /// From `[` to `]`.
    pub span: Span,
}

/// A name.
#[derive(Clone, Debug, PartialEq)]
pub struct Identifier {
    /// The name text; never empty.
    pub name: String,
    /// Where it appears.
    pub span: Span,
}

/// A number literal.
#[derive(Clone, Debug, PartialEq)]
pub struct NumberLiteral {
    /// Value; always finite and non-negative.
    pub value: f64,
    /// Where it appears.
    pub span: Span,
}

/// `true` or `false`
#[derive(Clone, Debug, PartialEq)]
pub struct BooleanLiteral {
    /// Value.
    pub value: bool,
    /// Where it appears.
    pub span: Span,
}

/// A quoted string literal.
#[derive(Clone, Debug, PartialEq)]
pub struct StringLiteral {
    /// Decoded contents.
    pub value: String,
    /// Covers the quotes.
    pub span: Span,
}

/// Free-form text.
#[derive(Clone, Debug, PartialEq)]
pub struct TextLiteral {
    /// Trimmed text.
    pub value: String,
    /// Covers the trimmed text.
    pub span: Span,
}
