//! Unary operation evaluation

use crate::syntax::{Expr, UnaryOp};
use crate::{Environment, ErrorValue, EvalContext, Value};

use super::{EvalResult, Evaluate};

/// Evaluate the operand, then apply the prefix operator.
pub fn eval_unary(
    op: UnaryOp,
    operand: &Expr,
    env: &mut Environment,
    ctx: &EvalContext,
) -> EvalResult {
    let operand = operand.eval(env, ctx)?;
    Ok(apply_unary(op, operand)?)
}

/// Apply a prefix operator to an already evaluated operand.
///
/// # Errors
///
/// Returns an unknown-operator error when the operand type does not
/// support `op`.
pub fn apply_unary(op: UnaryOp, operand: Value) -> Result<Value, ErrorValue> {
    match (op, operand) {
        (UnaryOp::Plus, Value::Integer(n)) => Ok(Value::Integer(n)),
        (UnaryOp::Neg, Value::Integer(n)) => Ok(Value::Integer(-n)),
        (UnaryOp::Not, Value::Boolean(b)) => Ok(Value::Boolean(!b)),
        (op, other) => Err(ErrorValue::unknown_prefix_operator(op.symbol(), &other)),
    }
}
