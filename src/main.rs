use std::{
    fs,
    path::{Path, PathBuf},
    process,
};

use clap::Parser;
use lunula::{Interpreter, Value};
use rustyline::{DefaultEditor, Result as ReplResult, error::ReadlineError};

/// lunula is a small, Lua-inspired scripting dialect with an interactive
/// shell.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to a script file; starts an interactive session when omitted.
    script: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    match args.script {
        Some(path) => run_script(&path),
        None => {
            if let Err(e) = run_repl() {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        },
    }
}

/// Runs a whole script file as one unit.
fn run_script(path: &Path) {
    let source = fs::read_to_string(path).unwrap_or_else(|_| {
                                             eprintln!("Failed to read the input file '{}'. \
                                                        Perhaps this file does not exist?",
                                                       path.display());
                                             process::exit(1);
                                         });

    let mut session = Interpreter::new();
    if let Err(e) = session.run_source(&source) {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Runs the interactive session.
///
/// Each line is one unit against a persistent session: bindings and function
/// definitions carry over between lines, errors are reported and the loop
/// continues. Non-nil values of bare expression statements are echoed.
fn run_repl() -> ReplResult<()> {
    let mut editor = DefaultEditor::new()?;
    let mut session = Interpreter::new();

    loop {
        match editor.readline("> ") {
            Ok(line) => {
                if line.trim() == "exit" {
                    break;
                }
                let _ = editor.add_history_entry(line.as_str());

                match session.run_source(&line) {
                    Ok(Some(value)) if !matches!(value, Value::Nil) => println!("{value}"),
                    Ok(_) => {},
                    Err(e) => eprintln!("Error: {e}"),
                }
            },
            Err(ReadlineError::Interrupted | ReadlineError::Eof) => break,
            Err(e) => return Err(e),
        }
    }

    Ok(())
}
