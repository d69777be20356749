use crate::interpreter::{
    core::{Interpreter, RunResult},
    value::Value,
};

/// Returns the type name of a value as a string.
///
/// Pops one argument of any type.
///
/// # Example
/// ```
/// use lunula::{Interpreter, Value, interpreter::builtins::convert::type_of};
///
/// let mut session = Interpreter::new();
/// session.push_value(Value::Nil).unwrap();
///
/// assert_eq!(type_of(&mut session).unwrap(), Value::Str("nil".to_string()));
/// ```
pub fn type_of(interpreter: &mut Interpreter) -> RunResult<Value> {
    let argument = interpreter.pop_value()?;
    Ok(Value::Str(argument.type_name().to_string()))
}

/// Converts a value to a number.
///
/// Pops one argument. Numbers pass through unchanged; strings are parsed as
/// decimal numbers. Anything else, including a string that does not parse,
/// yields `Nil`.
pub fn tonumber(interpreter: &mut Interpreter) -> RunResult<Value> {
    let argument = interpreter.pop_value()?;
    match argument {
        Value::Number(n) => Ok(Value::Number(n)),
        Value::Str(text) => Ok(text.trim()
                                   .parse::<f64>()
                                   .map_or(Value::Nil, Value::Number)),
        _ => Ok(Value::Nil),
    }
}

/// Converts any value to its string representation.
///
/// Pops one argument; strings pass through unchanged, everything else is
/// formatted the way `print` would show it.
pub fn tostring(interpreter: &mut Interpreter) -> RunResult<Value> {
    let argument = interpreter.pop_value()?;
    match argument {
        Value::Str(text) => Ok(Value::Str(text)),
        other => Ok(Value::Str(other.to_string())),
    }
}
