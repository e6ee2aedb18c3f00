//! `Do … End` blocks and installing declarations into a context.

use rustc_hash::FxHashSet;
use song_ir::{Context, Expression, Name};

use crate::errors::{empty_scope, signature_mismatch, EvalResult};
use crate::matcher::{match_pattern, Bindings};
use crate::Evaluator;

impl Evaluator {
    /// Run `statements` in order, threading a local context.
    ///
    /// In tail position the last statement may become a `TailEval` marker.
    pub(crate) fn scope(
        &self,
        statements: &[Expression],
        context: &Context,
        tail: bool,
    ) -> EvalResult {
        let Some((last, init)) = statements.split_last() else {
            return Err(empty_scope());
        };

        let mut local = context.clone();
        let mut shadowed: FxHashSet<Name> = FxHashSet::default();

        for statement in init {
            local = shadow(statement, local, &mut shadowed);
            let value = self.evaluate(statement, &local)?;
            local = install(&value, &local)?;
        }

        local = shadow(last, local, &mut shadowed);
        if tail {
            self.tail_position(last, &local)
        } else {
            self.evaluate(last, &local)
        }
    }
}

/// The first local declaration of a function drops any outer binding of the
/// same name, so the local function starts a fresh closure instead of adding
/// clauses to the outer one. Later declarations in the block extend it.
fn shadow(statement: &Expression, local: Context, shadowed: &mut FxHashSet<Name>) -> Context {
    match statement {
        Expression::Function(function) => match &function.name {
            Some(name) if shadowed.insert(name.clone()) => local.without(name),
            _ => local,
        },
        _ => local,
    }
}

/// Bind the result of a statement into `context`.
///
/// Named closures are bound under their name. Assignments match their left
/// side as a pattern against the value, so `[h | t] = xs` destructures; a
/// failed match is a signature mismatch. Any other value leaves `context`
/// unchanged.
pub fn install(value: &Expression, context: &Context) -> EvalResult<Context> {
    match value {
        Expression::Closure(closure) => match &closure.name {
            Some(name) => Ok(context.extend(name.clone(), value.clone())),
            None => Ok(context.clone()),
        },
        Expression::Assign { variable, value } => {
            let mut bindings = Bindings::default();
            if !match_pattern(variable, value, &mut bindings)? {
                return Err(signature_mismatch(std::slice::from_ref(&**value)));
            }
            Ok(bindings
                .into_iter()
                .fold(context.clone(), |ctx, (name, value)| ctx.extend(name, value)))
        }
        _ => Ok(context.clone()),
    }
}
