//! Stack growth guard for deep recursion.
//!
//! The parser descends once per nesting level of parentheses, array
//! literals and blocks, and the evaluator mirrors that shape. Programs such
//! as `((((…))))` or a thousand nested `kapag` blocks would otherwise run
//! the host thread out of stack.
//!
//! Every recursive entry point (`parse_expr`, `parse_block`, `eval_expr`,
//! `exec_block`) wraps its body in [`ensure_sufficient_stack`].

/// Remaining stack below which a new segment is allocated.
const RED_ZONE: usize = 128 * 1024;

/// Size of each newly allocated stack segment.
const SEGMENT_SIZE: usize = 1024 * 1024;

/// Run `f`, first growing the stack if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, SEGMENT_SIZE, f)
}

/// WASM manages its own stack; run `f` directly.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
