//! Song Eval - tree-walking evaluator for Song.
//!
//! # Architecture
//!
//! - [`Evaluator::evaluate`]: structural recursion over [`Expression`],
//!   wrapping failures into a `CannotEvaluate` chain
//! - `dispatch`: ordered clause selection with guards, and the tail-call
//!   trampoline that keeps tail-recursive chains off the host stack
//! - `matcher`: binds clause patterns against argument values
//! - `builtins`: the closed native operator table, see [`initial_context`]
//! - [`Streams`]: where `in`/`out`/`err` read and write
//!
//! All values are immutable and contexts are persistent, so an `Evaluator`
//! carries no state between calls beyond its streams.

pub mod errors;
mod builtins;
mod dispatch;
mod evaluator;
mod matcher;
mod scope;
mod streams;

pub use builtins::initial_context;
pub use errors::{EvalResult, EvaluationError};
pub use evaluator::Evaluator;
pub use scope::install;
pub use streams::{
    buffer_streams, std_streams, BufferStreams, SharedStreams, StdStreams, Streams,
};

#[cfg(test)]
mod tests;
