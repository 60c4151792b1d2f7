//! Stack growth for deeply nested source
//!
//! Parsing and evaluation both recurse once per nesting level. Every
//! recursive entry point runs through [`ensure_sufficient_stack`], so the
//! depth of the input is bounded by memory and by
//! [`EvalContext::max_depth`](crate::EvalContext), never by the size of the
//! calling thread's stack.

/// Run `f`, first growing the stack if the remaining space is low.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    /// Grow once less than this much stack is left (100KB).
    const RED_ZONE: usize = 100 * 1024;

    /// Size of each new stack segment (1MB).
    const STACK_PER_RECURSION: usize = 1024 * 1024;

    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM manages its own stack; call `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
