//! Statement and block evaluation

use tracing::trace;

use crate::stack::ensure_sufficient_stack;
use crate::syntax::{Block, Stmt, VarDecl};
use crate::{Environment, ErrorValue, EvalContext, Value};

use super::{EvalResult, Evaluate};

impl Evaluate for Stmt {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> EvalResult {
        match self {
            Stmt::Expr(expr) => expr.eval(env, ctx),
            Stmt::If(stmt) => stmt.eval(env, ctx),
            Stmt::Return(stmt) => stmt.eval(env, ctx),
            Stmt::Block(block) => eval_block(block, env, ctx),
            Stmt::VarDecl(decl) => decl.eval(env, ctx),
        }
    }
}

impl Evaluate for VarDecl {
    /// Binds the initial value in the current scope; yields nothing.
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> EvalResult {
        let value = self.init.eval(env, ctx)?;
        env.define(self.name.clone(), value);
        Ok(Value::Absent)
    }
}

/// Evaluate a block in a fresh child scope.
///
/// The scope is discarded when the block finishes, whether it completed,
/// returned or failed.
///
/// # Errors
///
/// Forwards any signal raised by the block's statements, and fails when
/// entering the block would exceed the context's nesting limit.
pub fn eval_block(block: &Block, env: &mut Environment, ctx: &EvalContext) -> EvalResult {
    if env.depth() >= ctx.max_depth {
        return Err(ErrorValue::depth_exceeded(ctx.max_depth).into());
    }
    ensure_sufficient_stack(|| {
        let mut scope = env.child();
        eval_stmts(&block.stmts, &mut scope, ctx)
    })
}

/// Evaluate statements in order within `env` (without managing scope).
///
/// Stops at the first signal. The value of the last statement is the
/// result; an empty sequence yields [`Value::Absent`].
///
/// # Errors
///
/// Forwards the first return or error signal unchanged.
pub fn eval_stmts(stmts: &[Stmt], env: &mut Environment, ctx: &EvalContext) -> EvalResult {
    let mut last = Value::Absent;
    for (index, stmt) in stmts.iter().enumerate() {
        if ctx.trace {
            trace!(index, depth = env.depth(), ?stmt, "eval stmt");
        }
        last = stmt.eval(env, ctx)?;
    }
    Ok(last)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::eval::ControlFlow;
    use crate::syntax::{DeclKind, Expr, ReturnStmt};

    fn decl(name: &str, n: i64) -> Stmt {
        Stmt::VarDecl(VarDecl {
            kind: DeclKind::Var,
            type_name: "integer".to_string(),
            name: name.to_string(),
            init: Expr::int(n),
        })
    }

    #[test]
    fn test_empty_sequence_is_absent() {
        let result = eval_stmts(&[], &mut Environment::new(), &EvalContext::default());
        assert_eq!(result, Ok(Value::Absent));
    }

    #[test]
    fn test_last_statement_wins() {
        let stmts = vec![Stmt::Expr(Expr::int(1)), Stmt::Expr(Expr::int(2))];
        let result = eval_stmts(&stmts, &mut Environment::new(), &EvalContext::default());
        assert_eq!(result, Ok(Value::integer(2)));
    }

    #[test]
    fn test_return_stops_sequence() {
        let stmts = vec![
            Stmt::Return(ReturnStmt {
                value: Some(Expr::int(2)),
            }),
            decl("never", 9),
        ];
        let mut env = Environment::new();
        let result = eval_stmts(&stmts, &mut env, &EvalContext::default());
        assert_eq!(result, Err(ControlFlow::return_value(Value::integer(2))));
        assert!(!env.contains("never"));
    }

    #[test]
    fn test_error_stops_sequence() {
        let stmts = vec![Stmt::Expr(Expr::Ident("nope".to_string())), decl("never", 9)];
        let mut env = Environment::new();
        let result = eval_stmts(&stmts, &mut env, &EvalContext::default());
        assert!(matches!(result, Err(ControlFlow::Error(_))));
        assert!(!env.contains("never"));
    }

    #[test]
    fn test_block_scope_is_discarded() {
        let block = Block {
            stmts: vec![decl("x", 1), Stmt::Expr(Expr::Ident("x".to_string()))],
        };
        let mut env = Environment::new();
        let result = eval_block(&block, &mut env, &EvalContext::default());
        assert_eq!(result, Ok(Value::integer(1)));
        assert!(!env.contains("x"));
        assert!(env.is_top_level());
    }

    #[test]
    fn test_block_scope_discarded_on_return() {
        let block = Block {
            stmts: vec![
                decl("x", 1),
                Stmt::Return(ReturnStmt {
                    value: Some(Expr::Ident("x".to_string())),
                }),
            ],
        };
        let mut env = Environment::new();
        let result = eval_block(&block, &mut env, &EvalContext::default());
        assert_eq!(result, Err(ControlFlow::return_value(Value::integer(1))));
        assert!(env.is_top_level());
    }

    #[test]
    fn test_depth_limit() {
        let mut block = Block {
            stmts: vec![Stmt::Expr(Expr::int(1))],
        };
        for _ in 0..4 {
            block = Block {
                stmts: vec![Stmt::Block(block)],
            };
        }
        // Five nested blocks need six scopes
        let ok = eval_block(&block, &mut Environment::new(), &EvalContext::with_max_depth(6));
        assert_eq!(ok, Ok(Value::integer(1)));

        let err = eval_block(&block, &mut Environment::new(), &EvalContext::with_max_depth(5));
        assert_eq!(
            err,
            Err(ControlFlow::Error(ErrorValue::new(
                "maximum nesting depth exceeded: 5"
            )))
        );
    }
}
