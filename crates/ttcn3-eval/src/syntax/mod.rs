//! Syntax tree, lexer and parser for the TTCN-3 expression subset

pub mod ast;
pub(crate) mod lexer;
pub mod parser;

pub use ast::{
    BinaryOp, Block, DeclKind, ElseBranch, Expr, IfStmt, Program, ReturnStmt, Stmt, UnaryOp,
    VarDecl,
};
pub use parser::parse;
