//! # lunula
//!
//! lunula is a small, Lua-inspired scripting dialect written in Rust.
//! It executes source text directly from the token stream with a cursor-driven
//! statement engine (no syntax tree), a single flat variable namespace, and a
//! fixed library of built-in functions.
//!
//! ```
//! use lunula::{Interpreter, Value};
//!
//! let mut session = Interpreter::new();
//! session.run_source("local greeting = \"hello\" + \" world\"").unwrap();
//!
//! let result = session.run_source("string.len(greeting)").unwrap();
//! assert_eq!(result, Some(Value::Number(11.0)));
//! ```
//!
//! Every error is a recoverable value returned at the unit boundary, so an
//! embedding shell or REPL reports the failure and keeps its session.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while executing a unit
/// of source. Every error carries its kind and a message and is propagated to
/// the unit boundary instead of terminating the process.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, statement engine,
///   evaluator, capacities).
/// - Wraps them in a single `InterpreterError` for the unit boundary.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, cursor handling, statement execution,
/// expression evaluation, values, and the built-in library to provide a
/// complete runtime for the dialect.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, cursor, statement engine,
///   expression evaluator, and value types.
/// - Provides the per-unit execution entry point.
/// - Manages the session state that persists between units.
pub mod interpreter;

pub use error::{InterpreterError, ParseError, RuntimeError};
pub use interpreter::{
    core::{Interpreter, Limits},
    value::Value,
};
