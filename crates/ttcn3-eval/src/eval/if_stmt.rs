//! If statement evaluation

use crate::syntax::{ElseBranch, IfStmt};
use crate::{Environment, ErrorValue, EvalContext, Value};

use super::{eval_block, EvalResult, Evaluate};

impl Evaluate for IfStmt {
    fn eval(&self, env: &mut Environment, ctx: &EvalContext) -> EvalResult {
        let cond = match self.cond.eval(env, ctx)? {
            Value::Boolean(b) => b,
            other => return Err(ErrorValue::boolean_expected(&other).into()),
        };

        if cond {
            eval_block(&self.then_branch, env, ctx)
        } else {
            match &self.else_branch {
                Some(ElseBranch::Block(block)) => eval_block(block, env, ctx),
                Some(ElseBranch::If(else_if)) => else_if.eval(env, ctx),
                // No else branch
                None => Ok(Value::Absent),
            }
        }
    }
}
