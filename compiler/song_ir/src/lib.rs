//! Song IR - the value/AST model shared by the parser and the evaluator.
//!
//! Song does not distinguish syntax trees from runtime values: the parser
//! produces [`Expression`] trees and evaluation reduces them to other
//! `Expression`s (literals, lists, closures, built-ins).
//!
//! # Contents
//!
//! - [`Expression`]: the recursive tagged union, with [`Function`] clauses and
//!   evaluated [`Closure`]s
//! - [`Number`]: int/float arithmetic with promotion rules
//! - [`Context`]: the persistent name -> value environment
//! - [`BuiltIn`]: the closed table of native operator tokens
//! - [`Heap`]: shared, immutable allocation for recursive payloads
//!
//! Every type here is immutable once built and `Send + Sync`, so contexts and
//! closures may be shared freely between evaluation frames.

mod builtin;
mod context;
mod expression;
mod heap;
mod name;
mod number;

pub use builtin::BuiltIn;
pub use context::{Context, Precedence};
pub use expression::{Closure, Expression, Function};
pub use heap::Heap;
pub use name::Name;
pub use number::{Number, NumericError};
