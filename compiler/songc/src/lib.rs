//! Song interpreter front end.
//!
//! Ties the parser and evaluator together into a [`Session`]: the mutable
//! state of one REPL or file run, seeded with the built-ins and the bundled
//! standard library. The `song` binary is a thin layer over this crate.

mod options;
mod repl;
mod session;
pub mod stdlib;

use std::sync::Once;

pub use options::{Command, Options, UsageError};
pub use repl::{repl, CONTINUATION_PROMPT, PROMPT};
pub use session::{Reply, Session, SessionError};

static TRACING_INIT: Once = Once::new();

/// Install the tracing subscriber.
///
/// Only does anything when `RUST_LOG` is set, e.g. `RUST_LOG=song_eval=debug`
/// to see closure dispatch, or `=trace` for every trampoline bounce.
/// Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_tree::HierarchicalLayer::new(2)
                        .with_targets(true)
                        .with_indent_lines(true),
                )
                .init();
        }
    });
}
