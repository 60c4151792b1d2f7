//! RAII guard for nested scopes

use super::Environment;

/// A nested scope borrowed from its parent environment.
///
/// Dereferences to the [`Environment`], so bindings made through the guard
/// land in the nested scope and lookups fall through to the parents.
/// Dropping the guard discards the scope and everything bound in it.
pub struct Scope<'a> {
    env: &'a mut Environment,
}

impl<'a> Scope<'a> {
    pub(super) fn new(env: &'a mut Environment) -> Self {
        Scope { env }
    }
}

impl Drop for Scope<'_> {
    fn drop(&mut self) {
        self.env.pop_frame();
    }
}

impl std::ops::Deref for Scope<'_> {
    type Target = Environment;

    fn deref(&self) -> &Self::Target {
        self.env
    }
}

impl std::ops::DerefMut for Scope<'_> {
    fn deref_mut(&mut self) -> &mut Self::Target {
        self.env
    }
}
