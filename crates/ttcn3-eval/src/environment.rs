//! Runtime environment managing identifier bindings

mod scope;

pub use scope::Scope;

use indexmap::IndexMap;

use crate::error::EnvironmentError;
use crate::value::Value;

/// Bindings introduced by a single lexical scope, in definition order.
type Frame = IndexMap<String, Value>;

/// Lexically scoped identifier bindings.
///
/// Scopes are stored as a stack of frames owned by the environment: the
/// frame below the innermost one is its parent. [`Environment::child`]
/// pushes a frame and hands back a guard that pops it again, so a nested
/// scope can never outlive the evaluation that created it.
///
/// # Example
///
/// ```
/// use ttcn3_eval::{Environment, Value};
///
/// let mut env = Environment::new();
/// env.define("x", Value::integer(1));
///
/// {
///     let mut inner = env.child();
///     inner.define("y", Value::integer(2));
///     inner.define("x", Value::integer(10)); // Shadows outer x
///
///     assert_eq!(inner.lookup("x"), Ok(&Value::integer(10)));
///     assert_eq!(inner.lookup("y"), Ok(&Value::integer(2)));
/// }
///
/// assert_eq!(env.lookup("x"), Ok(&Value::integer(1)));
/// assert!(env.lookup("y").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Environment {
    /// Innermost frame last; never empty
    frames: Vec<Frame>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Create a top-level environment with no parent.
    pub fn new() -> Self {
        Self {
            frames: vec![Frame::new()],
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Scope Management
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a nested scope whose parent is the current one.
    ///
    /// The scope is discarded when the returned guard is dropped.
    pub fn child(&mut self) -> Scope<'_> {
        self.frames.push(Frame::new());
        Scope::new(self)
    }

    /// Discard the innermost scope. The top-level scope is never popped.
    fn pop_frame(&mut self) {
        if self.frames.len() > 1 {
            self.frames.pop();
        }
    }

    /// Number of scopes in the chain, counting the top level.
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Check if we're at the top-level scope.
    pub fn is_top_level(&self) -> bool {
        self.frames.len() == 1
    }

    // ═══════════════════════════════════════════════════════════════════
    // Bindings
    // ═══════════════════════════════════════════════════════════════════

    /// Bind `name` in the current scope.
    ///
    /// Shadows any binding of the same name in an enclosing scope and
    /// replaces one in the current scope.
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        if let Some(frame) = self.frames.last_mut() {
            frame.insert(name.into(), value);
        }
    }

    /// Look up `name`, searching the current scope and then its parents.
    ///
    /// # Errors
    ///
    /// Returns [`EnvironmentError::NotFound`] if no scope binds `name`.
    pub fn lookup(&self, name: &str) -> Result<&Value, EnvironmentError> {
        self.frames
            .iter()
            .rev()
            .find_map(|frame| frame.get(name))
            .ok_or_else(|| EnvironmentError::NotFound {
                name: name.to_string(),
            })
    }

    /// Check if a binding exists anywhere in the chain.
    pub fn contains(&self, name: &str) -> bool {
        self.frames.iter().any(|frame| frame.contains_key(name))
    }

    /// Check if a binding exists in the current (innermost) scope only.
    pub fn contains_in_current_scope(&self, name: &str) -> bool {
        self.frames
            .last()
            .is_some_and(|frame| frame.contains_key(name))
    }

    /// Names bound in the current scope, in definition order.
    pub fn names_in_current_scope(&self) -> Vec<&str> {
        self.frames
            .last()
            .map(|frame| frame.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    /// Number of bindings across all scopes, shadowed ones included.
    pub fn len(&self) -> usize {
        self.frames.iter().map(IndexMap::len).sum()
    }

    /// Check if no scope holds a binding.
    pub fn is_empty(&self) -> bool {
        self.frames.iter().all(IndexMap::is_empty)
    }
}
