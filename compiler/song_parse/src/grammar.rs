//! Grammar productions, split by syntactic category.

mod expr;
mod pattern;
mod statement;
