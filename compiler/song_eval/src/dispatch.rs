//! Calling closures and built-ins, and the tail-call trampoline.
//!
//! A clause body whose result is itself a call (directly, or as the last
//! statement of a `Do` block) is not evaluated in place. The dispatcher
//! evaluates the arguments and hands back a `TailEval` marker; the call site
//! that started the chain loops on those markers, so tail-recursive chains
//! run in constant host stack.

use song_ir::{Closure, Context, Expression, Heap, Name, Precedence};
use tracing::trace;

use crate::builtins;
use crate::errors::{
    cannot_evaluate, not_a_boolean, not_a_closure, not_a_function, signature_mismatch,
    symbol_not_found, EvalResult,
};
use crate::matcher::bind_parameters;
use crate::Evaluator;

impl Evaluator {
    /// Call `target` with unevaluated `args`. May return a `TailEval` marker.
    pub(crate) fn apply(
        &self,
        target: &Expression,
        args: &[Expression],
        context: &Context,
    ) -> EvalResult {
        match target {
            Expression::BuiltIn(builtin) => builtins::apply(self, *builtin, args, context),
            Expression::Closure(closure) => {
                let values = self.arguments(closure, args, context)?;
                self.dispatch(closure, &values)
            }
            other => Err(not_a_function(other)),
        }
    }

    /// Evaluate call arguments left to right, after checking that some clause
    /// takes that many.
    fn arguments(
        &self,
        closure: &Closure,
        args: &[Expression],
        context: &Context,
    ) -> EvalResult<Vec<Expression>> {
        if !closure.accepts_arity(args.len()) {
            return Err(signature_mismatch(args));
        }
        self.evaluate_all(args, context)
    }

    /// Try each clause in declaration order against evaluated `args`.
    ///
    /// Pattern failures and false guards move on to the next clause; any other
    /// error is fatal. The selected body runs in the captured context,
    /// extended with the closure's own name and merged with the parameters,
    /// which win on conflicts.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(function = closure.name.as_ref().map_or("<lambda>", Name::as_str), args = args.len())
    )]
    pub(crate) fn dispatch(&self, closure: &Heap<Closure>, args: &[Expression]) -> EvalResult {
        for (index, clause) in closure.clauses.iter().enumerate() {
            let Some(bindings) = bind_parameters(&clause.patterns, args)? else {
                trace!(clause = index, "patterns rejected arguments");
                continue;
            };

            let mut captured = closure.captured.clone();
            if let Some(name) = &closure.name {
                captured = captured.extend(name.clone(), Expression::Closure(closure.clone()));
            }
            let parameters: Context = bindings.into_iter().collect();
            let body_context = captured.merge(&parameters, Precedence::Theirs);

            if clause.has_guard() {
                let verdict = self.evaluate(&clause.guard, &body_context)?;
                match verdict {
                    Expression::Bool(true) => {}
                    Expression::Bool(false) => {
                        trace!(clause = index, "guard rejected arguments");
                        continue;
                    }
                    other => return Err(not_a_boolean(&other)),
                }
            }

            return self.tail_position(&clause.body, &body_context);
        }
        Err(signature_mismatch(args))
    }

    /// Evaluate an expression in tail position: calls become `TailEval`
    /// markers instead of recursing.
    pub(crate) fn tail_position(&self, body: &Expression, context: &Context) -> EvalResult {
        match body {
            Expression::Call { name, args } => context
                .lookup(name)
                .ok_or_else(|| symbol_not_found(name))
                .and_then(|target| self.tail_call(target, args, context))
                .map_err(|err| cannot_evaluate(body, err)),
            Expression::Eval { target, args } => self
                .evaluate(target, context)
                .and_then(|target| self.tail_call(&target, args, context))
                .map_err(|err| cannot_evaluate(body, err)),
            Expression::Scope(statements) => self
                .scope(statements, context, true)
                .map_err(|err| cannot_evaluate(body, err)),
            _ => self.evaluate(body, context),
        }
    }

    /// Built-ins run immediately (so `And`/`Or` keep short-circuiting);
    /// closures get their arguments evaluated and are deferred.
    fn tail_call(&self, target: &Expression, args: &[Expression], context: &Context) -> EvalResult {
        match target {
            Expression::BuiltIn(builtin) => builtins::apply(self, *builtin, args, context),
            Expression::Closure(closure) => {
                let values = self.arguments(closure, args, context)?;
                Ok(Expression::tail_eval(target.clone(), values))
            }
            other => Err(not_a_function(other)),
        }
    }

    /// Resolve `TailEval` markers until a value remains.
    pub(crate) fn trampoline(&self, mut result: Expression) -> EvalResult {
        while let Expression::TailEval { target, args } = &result {
            let Expression::Closure(closure) = &**target else {
                return Err(not_a_closure(target));
            };
            trace!("trampoline bounce");
            let next = self.dispatch(closure, args)?;
            result = next;
        }
        Ok(result)
    }
}
