//! Stack growth for Song's recursive descent and tree walk.
//!
//! Two places recurse on the host stack:
//!
//! - `song_parse`: `Parser::expression`, plus the right-recursive `^` and
//!   prefix `-`/`Not` productions, once per nesting level of the source.
//! - `song_eval`: `Evaluator::evaluate`, once per nested sub-expression and
//!   once per pending non-tail call, e.g. `1 + f(n - 1)`.
//!
//! Calls in tail position go through the evaluator's trampoline and never
//! reach this crate. Everything else wraps its recursive step in
//! [`ensure_sufficient_stack`], which moves onto a fresh heap-allocated
//! segment when the current one runs low.
//!
//! On wasm32 the function is a passthrough.

/// Headroom left for one parser production or one `evaluate` frame
/// (including built-in calls it makes) before switching segments.
const RED_ZONE: usize = 100 * 1024;

/// Size of each new segment: enough for a few thousand nested `evaluate`
/// frames before the next switch.
const STACK_PER_RECURSION: usize = 1024 * 1024;

/// Run `f`, first switching to a new stack segment if less than
/// [`RED_ZONE`] bytes remain.
///
/// ```text
/// pub fn evaluate(&self, expr: &Expression, context: &Context) -> EvalResult {
///     ensure_sufficient_stack(|| self.evaluate_inner(expr, context))
/// }
/// ```
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// wasm32 manages its own stack.
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
