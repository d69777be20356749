#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// Tried to read a variable that was never stored.
    UndefinedVariable {
        /// The name of the variable.
        name: String,
    },
    /// Called a function that is neither a built-in nor user-defined.
    UndefinedFunction {
        /// The name of the function.
        name: String,
    },
    /// An operator or built-in was applied to incompatible value kinds.
    TypeError {
        /// Details about the type mismatch.
        details: String,
    },
    /// Attempted division by zero.
    DivisionByZero,
    /// A fixed interpreter capacity was exhausted.
    Capacity {
        /// The resource that ran out.
        resource: &'static str,
        /// The configured limit for that resource.
        limit:    usize,
    },
    /// A call supplied the wrong number of arguments.
    ArgumentCountMismatch {
        /// The name of the callee.
        name:     String,
        /// How many arguments the callee takes.
        expected: usize,
        /// How many arguments were supplied.
        found:    usize,
    },
    /// A built-in popped the value stack while it was empty.
    StackUnderflow,
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UndefinedVariable { name } => write!(f, "Undefined variable '{name}'."),
            Self::UndefinedFunction { name } => write!(f, "Undefined function '{name}'."),
            Self::TypeError { details } => write!(f, "Type error: {details}."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::Capacity { resource, limit } => {
                write!(f, "Too many {resource} (limit is {limit}).")
            },
            Self::ArgumentCountMismatch { name, expected, found } => write!(f,
                                                                            "'{name}' takes {expected} argument(s), but {found} were supplied."),
            Self::StackUnderflow => write!(f, "Value stack underflow."),
        }
    }
}

impl std::error::Error for RuntimeError {}
