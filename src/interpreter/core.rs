use crate::{
    error::{InterpreterError, RuntimeError},
    interpreter::{
        cursor::TokenCursor,
        lexer::{Token, tokenize},
        value::Value,
    },
};

/// Result type used throughout statement and expression execution.
///
/// All execution functions return either a value of type `T` or an
/// [`InterpreterError`] describing the failure.
pub type RunResult<T> = Result<T, InterpreterError>;

/// Configurable capacities of one interpreter session.
///
/// Exhausting any of these fails the current unit with a capacity error; the
/// session itself stays usable. The token sequence has no configured bound
/// and grows with available memory.
#[derive(Debug, Clone, Copy)]
pub struct Limits {
    /// Maximum number of live variable bindings.
    pub max_variables:  usize,
    /// Maximum number of registered function definitions.
    pub max_functions:  usize,
    /// Maximum depth of the value stack.
    pub max_stack:      usize,
    /// Maximum nesting depth of user-defined function calls.
    pub max_call_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self { max_variables:  1000,
               max_functions:  100,
               max_stack:      1000,
               max_call_depth: 64, }
    }
}

/// A single name-to-value association in the flat namespace.
#[derive(Debug, Clone)]
pub struct Binding {
    /// The variable name (case-sensitive).
    pub name:  String,
    /// The currently bound value.
    pub value: Value,
}

/// A registered user-defined function.
///
/// The descriptor owns a copy of the body token range (exclusive of the
/// `function name()` header and the closing `end`), so definitions stay
/// callable after the token sequence they were declared in is discarded.
#[derive(Debug, Clone)]
pub struct FunctionDef {
    /// The function name.
    pub name: String,
    /// The tokens of the function body.
    pub body: Vec<Token>,
}

/// Stores the whole state of one interpreter session.
///
/// This struct owns the flat variable namespace, the function registry, and
/// the value stack used as the argument channel for built-in calls. Bindings
/// and function definitions persist across successive units (REPL lines or
/// scripts) for the life of the value; tokens and cursors are created per
/// unit and discarded afterward.
///
/// Sessions are fully independent: nothing is shared between two
/// `Interpreter` values, so any number of them can coexist.
///
/// ## Usage
/// ```
/// use lunula::{Interpreter, Value};
///
/// let mut session = Interpreter::new();
/// session.run_source("local x = 2 + 3").unwrap();
///
/// let result = session.run_source("x").unwrap();
/// assert_eq!(result, Some(Value::Number(5.0)));
/// ```
pub struct Interpreter {
    bindings:   Vec<Binding>,
    functions:  Vec<FunctionDef>,
    stack:      Vec<Value>,
    limits:     Limits,
    call_depth: usize,
}

#[allow(clippy::new_without_default)]
impl Interpreter {
    /// Creates a new session with empty state and the default [`Limits`].
    #[must_use]
    pub fn new() -> Self {
        Self::with_limits(Limits::default())
    }

    /// Creates a new session with the given capacities.
    #[must_use]
    pub const fn with_limits(limits: Limits) -> Self {
        Self { bindings: Vec::new(),
               functions: Vec::new(),
               stack: Vec::new(),
               limits,
               call_depth: 0, }
    }

    /// Executes one unit of source text: a single REPL line or an entire
    /// script.
    ///
    /// The unit is lexed into its own token sequence and executed statement
    /// by statement. Bindings and function definitions made by the unit
    /// persist in the session; the tokens do not. The value stack and call
    /// depth are reset on entry so a previously failed unit cannot leak
    /// operands into this one.
    ///
    /// # Parameters
    /// - `source`: The raw source text of the unit.
    ///
    /// # Returns
    /// The value of the last bare expression statement, or `None` if the
    /// unit contained none. This is the channel a REPL echoes.
    ///
    /// # Errors
    /// Any [`InterpreterError`]; the session stays usable afterwards.
    ///
    /// # Example
    /// ```
    /// use lunula::{Interpreter, error::RuntimeError, InterpreterError};
    ///
    /// let mut session = Interpreter::new();
    /// let failure = session.run_source("local x = 5 / 0").unwrap_err();
    /// assert!(matches!(failure,
    ///                  InterpreterError::Runtime(RuntimeError::DivisionByZero)));
    ///
    /// // The failed unit did not poison the session.
    /// session.run_source("local x = 5").unwrap();
    /// ```
    pub fn run_source(&mut self, source: &str) -> RunResult<Option<Value>> {
        let tokens = tokenize(source)?;
        self.stack.clear();
        self.call_depth = 0;

        let mut cursor = TokenCursor::new(&tokens);
        let mut last = None;

        while !cursor.at_end() {
            if let Some(value) = self.exec_statement(&mut cursor)? {
                last = Some(value);
            }
        }

        Ok(last)
    }

    /// Looks up a variable by name.
    ///
    /// Lookup is a linear scan over the stored bindings with case-sensitive
    /// exact matching; there is a single flat namespace, so every binding is
    /// visible everywhere once created.
    ///
    /// # Parameters
    /// - `name`: The variable name.
    ///
    /// # Returns
    /// A reference to the bound value, or `None` if the name is unknown.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.bindings
            .iter()
            .find(|binding| binding.name == name)
            .map(|binding| &binding.value)
    }

    /// Stores a value under a name, overwriting any existing binding.
    ///
    /// New names are appended to the namespace; re-assignment replaces the
    /// value in place, so there is at most one live value per name.
    ///
    /// # Errors
    /// `RuntimeError::Capacity` when the namespace is full.
    ///
    /// # Example
    /// ```
    /// use lunula::{Interpreter, Value};
    ///
    /// let mut session = Interpreter::new();
    /// session.store("x", Value::Number(1.0)).unwrap();
    /// session.store("x", Value::Number(2.0)).unwrap();
    ///
    /// assert_eq!(session.lookup("x"), Some(&Value::Number(2.0)));
    /// ```
    pub fn store(&mut self, name: &str, value: Value) -> Result<(), RuntimeError> {
        if let Some(binding) = self.bindings.iter_mut().find(|binding| binding.name == name) {
            binding.value = value;
            return Ok(());
        }

        if self.bindings.len() >= self.limits.max_variables {
            return Err(RuntimeError::Capacity { resource: "variables",
                                                limit:    self.limits.max_variables, });
        }

        self.bindings.push(Binding { name: name.to_string(),
                                     value });
        Ok(())
    }

    /// Registers a user-defined function.
    ///
    /// Definitions are appended, never replaced; redefining a name hides the
    /// older definition because [`resolve_function`] searches newest-first.
    ///
    /// # Errors
    /// `RuntimeError::Capacity` when the registry is full.
    ///
    /// [`resolve_function`]: Interpreter::resolve_function
    pub fn define_function(&mut self, name: String, body: Vec<Token>) -> Result<(), RuntimeError> {
        if self.functions.len() >= self.limits.max_functions {
            return Err(RuntimeError::Capacity { resource: "functions",
                                                limit:    self.limits.max_functions, });
        }

        self.functions.push(FunctionDef { name, body });
        Ok(())
    }

    /// Resolves a function name to its definition.
    ///
    /// The registry is scanned from the most recent entry backwards, so the
    /// last definition of a name wins.
    #[must_use]
    pub fn resolve_function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.iter().rev().find(|function| function.name == name)
    }

    /// Pushes a value onto the value stack.
    ///
    /// The stack is the argument channel for built-in calls: the evaluator
    /// pushes each evaluated argument in order immediately before dispatch,
    /// and the built-in pops them in reverse.
    ///
    /// # Errors
    /// `RuntimeError::Capacity` when the stack is full.
    pub fn push_value(&mut self, value: Value) -> Result<(), RuntimeError> {
        if self.stack.len() >= self.limits.max_stack {
            return Err(RuntimeError::Capacity { resource: "stack values",
                                                limit:    self.limits.max_stack, });
        }

        self.stack.push(value);
        Ok(())
    }

    /// Pops the most recently pushed value off the value stack.
    ///
    /// # Errors
    /// `RuntimeError::StackUnderflow` when the stack is empty.
    pub fn pop_value(&mut self) -> Result<Value, RuntimeError> {
        self.stack.pop().ok_or(RuntimeError::StackUnderflow)
    }

    /// Executes a user-defined function body and produces the call's value.
    ///
    /// The body runs on its own cursor over the stored tokens, so the
    /// caller's cursor is untouched; statements inside the body mutate the
    /// same flat namespace as everything else. There is no return-value
    /// mechanism: a completed call always yields `Nil`.
    ///
    /// # Errors
    /// - `RuntimeError::UndefinedFunction` if the name is not registered.
    /// - `RuntimeError::Capacity` if the call depth limit is exceeded.
    /// - Any error raised by the body's statements.
    pub(crate) fn call_function(&mut self, name: &str) -> RunResult<Value> {
        let function = match self.resolve_function(name) {
            Some(function) => function.clone(),
            None => {
                return Err(RuntimeError::UndefinedFunction { name: name.to_string() }.into());
            },
        };

        if self.call_depth >= self.limits.max_call_depth {
            return Err(RuntimeError::Capacity { resource: "nested calls",
                                                limit:    self.limits.max_call_depth, }.into());
        }

        self.call_depth += 1;
        let mut cursor = TokenCursor::new(&function.body);
        let mut outcome = Ok(());

        while !cursor.at_end() {
            if let Err(e) = self.exec_statement(&mut cursor) {
                outcome = Err(e);
                break;
            }
        }

        self.call_depth -= 1;
        outcome.map(|()| Value::Nil)
    }
}
