//! The `song` command.

use std::path::Path;
use std::process;

use song_eval::Evaluator;
use songc::{init_tracing, repl, Command, Options, Session};

fn main() {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let options = match Options::parse(&args) {
        Ok(options) => options,
        Err(err) => {
            eprintln!("error: {err}");
            eprintln!();
            print_usage();
            process::exit(1);
        }
    };

    match &options.command {
        Command::Repl => {
            let mut session = start(&options);
            println!("Song {} (type ?quit to leave)", env!("CARGO_PKG_VERSION"));
            if let Err(err) = repl(&mut session) {
                eprintln!("error: {err}");
                process::exit(1);
            }
        }
        Command::Run(path) => run_file(path, &options),
        Command::Eval(source) => {
            let mut session = start(&options);
            match session.run(source) {
                Ok(values) => {
                    if let Some(value) = values.last() {
                        println!("{value}");
                    }
                }
                Err(err) => {
                    eprintln!("{err}");
                    process::exit(1);
                }
            }
        }
        Command::Help => print_usage(),
        Command::Version => println!("Song {}", env!("CARGO_PKG_VERSION")),
    }
}

fn start(options: &Options) -> Session {
    match Session::new(Evaluator::default(), options.stdlib) {
        Ok(session) => session,
        Err(err) => {
            eprintln!("{err}");
            process::exit(1);
        }
    }
}

/// Evaluate a file's statements in one session. Only `out`/`err` print.
fn run_file(path: &Path, options: &Options) {
    let source = match std::fs::read_to_string(path) {
        Ok(source) => source,
        Err(err) => {
            eprintln!("error: cannot read '{}': {err}", path.display());
            process::exit(1);
        }
    };
    let mut session = start(options);
    if let Err(err) = session.run(&source) {
        eprintln!("{}: {err}", path.display());
        process::exit(1);
    }
}

fn print_usage() {
    println!("Song interpreter");
    println!();
    println!("Usage: song [command] [options]");
    println!();
    println!("Commands:");
    println!("  (none)               Start an interactive session");
    println!("  run <file.song>      Run a Song program");
    println!("  eval \"<source>\"      Evaluate source and print the last value");
    println!("  help                 Show this help message");
    println!("  version              Show version information");
    println!();
    println!("Options:");
    println!("  --no-std             Do not load the standard library");
    println!();
    println!("Session commands:");
    println!("  ?                    List every binding");
    println!("  ?forget <name>       Remove a binding");
    println!("  ?reset               Return to the startup bindings");
    println!("  ?quit                Leave the session");
    println!();
    println!("Set RUST_LOG (e.g. RUST_LOG=song_eval=debug) to trace evaluation.");
}
