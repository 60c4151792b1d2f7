//! Expression and statement evaluation

pub mod binary;
pub mod control;
pub mod ident;
pub mod if_stmt;
pub mod literal;
pub mod return_stmt;
pub mod stmt;
pub mod unary;

use crate::stack::ensure_sufficient_stack;
use crate::syntax::{Expr, Program};
use crate::{Environment, EvalContext, Value};

pub use control::ControlFlow;
pub use stmt::{eval_block, eval_stmts};

/// Outcome of evaluating a node: a value, or a signal to forward.
pub type EvalResult = Result<Value, ControlFlow>;

/// Trait for evaluating syntax nodes to values.
///
/// This is the core abstraction for the tree-walking interpreter. An
/// `Ok` value is never [`Value::Error`]: errors always travel as
/// [`ControlFlow::Error`].
pub trait Evaluate {
    /// Evaluate this node in the given environment.
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> EvalResult;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Expression Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Expr {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> EvalResult {
        // Check for interruption before each expression
        if ctx.is_interrupted() {
            return Err(crate::ErrorValue::interrupted().into());
        }

        ensure_sufficient_stack(|| match self {
            Expr::Int(n) => Ok(literal::eval_int(n)),
            Expr::Bool(b) => Ok(literal::eval_bool(*b)),
            Expr::Ident(name) => ident::eval_ident(name, env),
            Expr::Unary { op, operand } => unary::eval_unary(*op, operand, env, ctx),
            Expr::Binary { op, left, right } => binary::eval_binary(*op, left, right, env, ctx),

            // Grouping only affects the tree shape
            Expr::Paren(inner) => inner.eval(env, ctx),
        })
    }
}

// ═══════════════════════════════════════════════════════════════════════
// Entry Points
// ═══════════════════════════════════════════════════════════════════════

/// Evaluate a whole program in `env`.
///
/// The statements run directly in `env`, so top-level declarations stay
/// visible to the caller afterwards. A pending return is unwrapped to its
/// value; a runtime failure comes back as [`Value::Error`].
///
/// ```
/// use ttcn3_eval::syntax::parse;
/// use ttcn3_eval::{eval_program, Environment, EvalContext, Value};
///
/// let program = parse("9; return 5*6; 9").unwrap();
/// let mut env = Environment::new();
/// let value = eval_program(&program, &mut env, &EvalContext::default());
/// assert_eq!(value, Value::integer(30));
/// ```
#[tracing::instrument(level = "debug", skip_all, fields(stmts = program.stmts.len()))]
pub fn eval_program(program: &Program, env: &mut Environment, ctx: &EvalContext) -> Value {
    match eval_stmts(&program.stmts, env, ctx) {
        Ok(value) => value,
        Err(signal) => signal.into_value(),
    }
}

/// Evaluate a program with a default context.
pub fn eval(program: &Program, env: &mut Environment) -> Value {
    eval_program(program, env, &EvalContext::default())
}

/// Evaluate a single expression (convenience wrapper).
pub fn eval_expr(expr: &Expr, env: &mut Environment, ctx: &EvalContext) -> EvalResult {
    expr.eval(env, ctx)
}
