/// Lexing and parsing errors.
///
/// Defines all error types that can occur while turning source text into
/// tokens or while walking the token sequence. Parse errors include invalid
/// characters, unterminated strings, missing expected tokens, and keywords
/// that have no statement form.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include things like division by zero, type mismatches, undefined
/// names, and exhausted interpreter capacities.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any error a unit of source can fail with.
///
/// Every failure is recoverable: it is returned to the caller of the
/// unit-execution boundary instead of terminating the process, so an embedding
/// shell or REPL can report it and continue with the same session.
#[derive(Debug)]
pub enum InterpreterError {
    /// The unit failed while lexing or parsing.
    Parse(ParseError),
    /// The unit failed while evaluating.
    Runtime(RuntimeError),
}

impl std::fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for InterpreterError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}

impl From<ParseError> for InterpreterError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for InterpreterError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}
