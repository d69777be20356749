/// The built-in function library.
///
/// Built-ins are host-provided callables that are not defined in user source.
/// Each one pops a fixed number of arguments off the session's value stack
/// and produces one value. The catalogue is fixed at compile time and is
/// consulted before the user function registry on every call.
///
/// # Responsibilities
/// - Declares the lookup table mapping dotted names to handlers and arities.
/// - Implements printing, type inspection, conversions, math, clocks, string
///   helpers, and table helpers.
pub mod builtins;
/// Interpreter session state and the unit execution entry point.
///
/// This module owns everything that persists between units: the flat
/// variable namespace, the function registry, the value stack, and the
/// configured capacities. It exposes `run_source`, the single boundary an
/// embedding shell or REPL calls.
///
/// # Responsibilities
/// - Defines the `Interpreter` struct and its registry operations.
/// - Lexes each unit and drives the statement engine over it.
/// - Converts every failure into a recoverable result at the unit boundary.
pub mod core;
/// The token cursor.
///
/// Execution position is nothing more than an index into the current token
/// sequence. The cursor encapsulates that index with save/rewind semantics
/// (used by `while` re-evaluation) and the shared skip-to-matching-`end`
/// scan used by every block construct.
pub mod cursor;
/// The expression evaluator.
///
/// A precedence-climbing evaluator over the token cursor: additive over
/// multiplicative over factors. It consumes tokens directly, producing
/// values without building a syntax tree, and dispatches calls to built-ins
/// or user-defined functions.
pub mod expression;
/// The lexer module tokenizes source code for execution.
///
/// The lexer reads the raw source text and produces the token sequence the
/// whole interpreter runs on: keywords, identifiers, literals, operators and
/// punctuation, terminated by an explicit end marker.
///
/// # Responsibilities
/// - Converts the input character stream into classified tokens.
/// - Handles numeric and string literals without any escape processing.
/// - Reports lexical errors for invalid or unterminated input.
pub mod lexer;
/// The statement and control-flow engine.
///
/// Walks the token sequence one statement at a time, re-scanning tokens
/// instead of interpreting a syntax tree: `if`/`elseif`/`else` skip between
/// branches, `while` rewinds the cursor to its condition, and `function`
/// captures its body tokens for later calls.
pub mod statement;
/// The value module defines the runtime data types for evaluation.
///
/// Declares the `Value` tagged union (nil, number, string, boolean, table,
/// function reference) together with display formatting and type
/// inspection. Strings are copied between bindings; tables are shared by
/// reference count.
pub mod value;
