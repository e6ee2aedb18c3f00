//! The `evaluate(expression, context)` entry point.

use song_ir::{Closure, Context, Expression, Function, Heap};
use song_stack::ensure_sufficient_stack;

use crate::errors::{
    cannot_evaluate, not_a_closure, not_a_list, patterns_cannot_be_floats, symbol_not_found,
    EvalResult,
};
use crate::matcher::float_literal;
use crate::streams::{std_streams, SharedStreams};

/// Tree-walking evaluator.
///
/// Holds nothing but the streams used by the I/O built-ins: every call to
/// [`Evaluator::evaluate`] depends only on its arguments, and all state a
/// caller wants to keep lives in the [`Context`] it threads through.
#[derive(Clone)]
pub struct Evaluator {
    streams: SharedStreams,
}

impl Default for Evaluator {
    fn default() -> Self {
        Evaluator::new(std_streams())
    }
}

impl Evaluator {
    pub fn new(streams: SharedStreams) -> Self {
        Evaluator { streams }
    }

    pub fn streams(&self) -> &SharedStreams {
        &self.streams
    }

    /// Reduce `expr` to a value in `context`.
    ///
    /// Failures are wrapped as `CannotEvaluate(expr, cause)`, except failed
    /// lookups of a bare name, which already say what went wrong.
    pub fn evaluate(&self, expr: &Expression, context: &Context) -> EvalResult {
        ensure_sufficient_stack(|| self.evaluate_inner(expr, context)).map_err(|err| {
            if matches!(expr, Expression::Name(_)) {
                err
            } else {
                cannot_evaluate(expr, err)
            }
        })
    }

    fn evaluate_inner(&self, expr: &Expression, context: &Context) -> EvalResult {
        match expr {
            Expression::Bool(_)
            | Expression::Number(_)
            | Expression::Char(_)
            | Expression::Ignore
            | Expression::Closure(_)
            | Expression::BuiltIn(_) => Ok(expr.clone()),

            Expression::List(items) => {
                if items.iter().all(is_atom) {
                    return Ok(expr.clone());
                }
                let values = self.evaluate_all(items, context)?;
                Ok(Expression::list(values))
            }

            Expression::Cons { heads, tail } => {
                let mut values = self.evaluate_all(heads, context)?;
                let tail = self.evaluate(tail, context)?;
                let items = tail.as_list().ok_or_else(|| not_a_list(&tail))?;
                values.extend_from_slice(items);
                Ok(Expression::list(values))
            }

            Expression::Name(name) => context
                .lookup(name)
                .cloned()
                .ok_or_else(|| symbol_not_found(name)),

            Expression::Function(function) => declare(function, context),

            Expression::Assign { variable, value } => {
                let value = self.evaluate(value, context)?;
                Ok(Expression::assign(Expression::clone(variable), value))
            }

            Expression::Scope(statements) => self.scope(statements, context, false),

            Expression::Call { name, args } => {
                let target = context.lookup(name).ok_or_else(|| symbol_not_found(name))?;
                let result = self.apply(target, args, context)?;
                self.trampoline(result)
            }

            Expression::Eval { target, args } => {
                let target = self.evaluate(target, context)?;
                if !target.is_callable() {
                    return Err(not_a_closure(&target));
                }
                let result = self.apply(&target, args, context)?;
                self.trampoline(result)
            }

            Expression::TailEval { .. } => self.trampoline(expr.clone()),
        }
    }

    pub(crate) fn evaluate_all(
        &self,
        exprs: &[Expression],
        context: &Context,
    ) -> EvalResult<Vec<Expression>> {
        exprs.iter().map(|e| self.evaluate(e, context)).collect()
    }
}

/// Values that evaluate to themselves without looking inside.
fn is_atom(expr: &Expression) -> bool {
    matches!(
        expr,
        Expression::Bool(_) | Expression::Number(_) | Expression::Char(_)
    )
}

/// Turn a function clause into a closure.
///
/// A named clause joins the same-named closure already in `context`, keeping
/// that closure's captured context; otherwise it starts a new closure that
/// captures `context` minus its own name. Lambdas capture `context` as is.
fn declare(function: &Heap<Function>, context: &Context) -> EvalResult {
    if let Some(float) = function.patterns.iter().find_map(float_literal) {
        return Err(patterns_cannot_be_floats(float));
    }

    let closure = match &function.name {
        Some(name) => match context.lookup(name) {
            Some(Expression::Closure(existing)) if existing.name.as_ref() == Some(name) => {
                existing.with_clause(function.clone())
            }
            _ => Closure::new(Some(name.clone()), function.clone(), context.without(name)),
        },
        None => Closure::new(None, function.clone(), context.clone()),
    };
    Ok(Expression::closure(closure))
}
