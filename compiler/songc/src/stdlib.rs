//! The bundled standard library.
//!
//! Plain Song source compiled into the binary and evaluated at session start,
//! in dependency order: a function captures the context it is declared in,
//! so each module only sees the modules before it.

use song_eval::{install, Evaluator};
use song_ir::Context;
use song_parse::parse_program;
use tracing::debug;

use crate::SessionError;

/// A named module of Song source.
#[derive(Copy, Clone, Debug)]
pub struct Module {
    pub name: &'static str,
    pub source: &'static str,
}

pub const MODULES: [Module; 3] = [
    Module {
        name: "math",
        source: include_str!("../stdlib/math.song"),
    },
    Module {
        name: "list",
        source: include_str!("../stdlib/list.song"),
    },
    Module {
        name: "string",
        source: include_str!("../stdlib/string.song"),
    },
];

/// Evaluate every module into `context`, installing each declaration.
pub fn load(evaluator: &Evaluator, mut context: Context) -> Result<Context, SessionError> {
    for module in MODULES {
        context = load_module(evaluator, module, context).map_err(|cause| SessionError::Stdlib {
            module: module.name,
            cause: Box::new(cause),
        })?;
        debug!(module = module.name, bindings = context.len(), "loaded standard library module");
    }
    Ok(context)
}

fn load_module(
    evaluator: &Evaluator,
    module: Module,
    mut context: Context,
) -> Result<Context, SessionError> {
    let statements =
        parse_program(module.source).map_err(|error| SessionError::syntax(module.source, error))?;
    for statement in &statements {
        let value = evaluator.evaluate(statement, &context)?;
        context = install(&value, &context)?;
    }
    Ok(context)
}
