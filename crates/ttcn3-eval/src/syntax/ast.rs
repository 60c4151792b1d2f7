//! Syntax tree for the TTCN-3 expression and statement subset
//!
//! The evaluator trusts the tree shape: operator precedence and
//! associativity are already encoded by the parser.

use std::fmt;

use num_bigint::BigInt;

/// A parsed source unit: a sequence of statements.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Statements in source order
    pub stmts: Vec<Stmt>,
}

/// A braced statement sequence introducing its own scope.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// Statements in source order
    pub stmts: Vec<Stmt>,
}

/// A statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Stmt {
    /// Expression statement; its value is the statement's value
    Expr(Expr),
    /// `if (cond) { ... } else ...`
    If(IfStmt),
    /// `return [expr]`
    Return(ReturnStmt),
    /// Nested `{ ... }`
    Block(Block),
    /// `var integer x := 1` / `const boolean b := true`
    VarDecl(VarDecl),
}

/// Conditional statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfStmt {
    /// Guard; must evaluate to a boolean
    pub cond: Expr,
    /// Branch taken when the guard holds
    pub then_branch: Block,
    /// Branch taken otherwise
    pub else_branch: Option<ElseBranch>,
}

/// The alternative of an `if` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ElseBranch {
    /// `else { ... }`
    Block(Block),
    /// `else if (...) { ... }`
    If(Box<IfStmt>),
}

/// `return` statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReturnStmt {
    /// Returned expression; `None` for a bare `return`
    pub value: Option<Expr>,
}

/// Whether a declaration introduces a variable or a constant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclKind {
    /// `var`
    Var,
    /// `const`
    Const,
}

/// Value declaration, e.g. `var integer x := 1`.
///
/// Declarations are untyped in this core. The evaluator binds whatever the
/// initializer produces: `type_name` is never compared with the value's
/// type, and a later declaration of the same name in the same scope
/// replaces the binding regardless of either declared type. With no
/// assignment statement, `const` and `var` bindings behave alike.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarDecl {
    /// `var` or `const`
    pub kind: DeclKind,
    /// Declared type as written; not checked by the evaluator
    pub type_name: String,
    /// Bound identifier
    pub name: String,
    /// Initial value
    pub init: Expr,
}

/// An expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal
    Int(BigInt),
    /// `true` / `false`
    Bool(bool),
    /// Identifier reference
    Ident(String),
    /// Prefix operation
    Unary {
        /// Operator
        op: UnaryOp,
        /// Operand
        operand: Box<Expr>,
    },
    /// Infix operation
    Binary {
        /// Operator
        op: BinaryOp,
        /// Left operand
        left: Box<Expr>,
        /// Right operand
        right: Box<Expr>,
    },
    /// Parenthesized expression
    Paren(Box<Expr>),
}

impl Expr {
    /// Build a unary expression.
    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    /// Build a binary expression.
    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Build an integer literal.
    pub fn int(n: impl Into<BigInt>) -> Self {
        Expr::Int(n.into())
    }
}

/// Prefix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    /// `+`
    Plus,
    /// `-`
    Neg,
    /// `not`
    Not,
}

impl UnaryOp {
    /// Source spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Plus => "+",
            UnaryOp::Neg => "-",
            UnaryOp::Not => "not",
        }
    }
}

/// Infix operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    /// `+`
    Add,
    /// `-`
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `mod`
    Mod,
    /// `rem`
    Rem,
    /// `&` (concatenation)
    Concat,
    /// `==`
    Eq,
    /// `!=`
    Ne,
    /// `<`
    Lt,
    /// `<=`
    Le,
    /// `>`
    Gt,
    /// `>=`
    Ge,
    /// `and`
    And,
    /// `or`
    Or,
    /// `xor`
    Xor,
    /// `<<`
    Shl,
    /// `>>`
    Shr,
}

impl BinaryOp {
    /// Source spelling of the operator.
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "mod",
            BinaryOp::Rem => "rem",
            BinaryOp::Concat => "&",
            BinaryOp::Eq => "==",
            BinaryOp::Ne => "!=",
            BinaryOp::Lt => "<",
            BinaryOp::Le => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Ge => ">=",
            BinaryOp::And => "and",
            BinaryOp::Or => "or",
            BinaryOp::Xor => "xor",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}
