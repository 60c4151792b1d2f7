//! Evaluation limits: nesting depth, interruption and tracing

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Default limit on nested block scopes.
pub const DEFAULT_MAX_DEPTH: usize = 1000;

/// Limits and switches shared by one evaluation run.
///
/// A context is threaded by reference through every evaluation call. It
/// caps how many block scopes may be open at once and carries a flag that
/// another thread can raise to stop the run. Hitting either limit does not
/// panic or return a Rust error: the program's result becomes an error
/// value (`maximum nesting depth exceeded: <limit>` or
/// `evaluation interrupted`).
///
/// ```
/// use ttcn3_eval::syntax::parse;
/// use ttcn3_eval::{eval_program, Environment, EvalContext, Value};
///
/// let program = parse("{ { 1 } }").unwrap();
/// let ctx = EvalContext::with_max_depth(2);
/// let value = eval_program(&program, &mut Environment::new(), &ctx);
/// assert_eq!(value, Value::error("maximum nesting depth exceeded: 2"));
/// ```
#[derive(Debug, Clone)]
pub struct EvalContext {
    /// Open scopes allowed at once, the top level included
    pub max_depth: usize,

    /// Raised to stop evaluation; clones of the context share it
    pub interrupt: Arc<AtomicBool>,

    /// Log a `trace` event for each statement
    pub trace: bool,
}

impl Default for EvalContext {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            interrupt: Arc::new(AtomicBool::new(false)),
            trace: false,
        }
    }
}

impl EvalContext {
    /// A context with [`DEFAULT_MAX_DEPTH`], no interrupt and no tracing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Like [`EvalContext::new`] but allowing `max_depth` open scopes.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth,
            ..Self::default()
        }
    }

    /// Turn per-statement tracing on or off.
    pub fn with_trace(mut self, trace: bool) -> Self {
        self.trace = trace;
        self
    }

    /// Whether a stop has been requested.
    pub fn is_interrupted(&self) -> bool {
        self.interrupt.load(Ordering::Relaxed)
    }

    /// Ask the running evaluation to stop at its next expression.
    pub fn interrupt(&self) {
        self.interrupt.store(true, Ordering::Relaxed);
    }

    /// Clear a previous stop request so the context can be reused.
    pub fn reset_interrupt(&self) {
        self.interrupt.store(false, Ordering::Relaxed);
    }
}
