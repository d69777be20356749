use crate::interpreter::{
    core::{Interpreter, RunResult},
    value::Value,
};

/// Returns the length of a string in characters.
///
/// Pops one argument; a non-string yields `Nil`.
#[allow(clippy::cast_precision_loss)]
pub fn len(interpreter: &mut Interpreter) -> RunResult<Value> {
    let argument = interpreter.pop_value()?;
    match argument {
        Value::Str(text) => Ok(Value::Number(text.chars().count() as f64)),
        _ => Ok(Value::Nil),
    }
}

/// Extracts a substring by 1-based character positions.
///
/// Pops three arguments: the string, an inclusive 1-based start, and an end
/// position clamped to the string length. An empty or inverted range yields
/// the empty string; wrong argument types yield `Nil`.
///
/// # Example
/// ```
/// use lunula::{Interpreter, Value, interpreter::builtins::string::sub};
///
/// let mut session = Interpreter::new();
/// session.push_value(Value::Str("hello".to_string())).unwrap();
/// session.push_value(Value::Number(2.0)).unwrap();
/// session.push_value(Value::Number(4.0)).unwrap();
///
/// assert_eq!(sub(&mut session).unwrap(), Value::Str("ell".to_string()));
/// ```
#[allow(clippy::cast_possible_truncation)]
#[allow(clippy::cast_precision_loss)]
#[allow(clippy::cast_sign_loss)]
pub fn sub(interpreter: &mut Interpreter) -> RunResult<Value> {
    let end = interpreter.pop_value()?;
    let start = interpreter.pop_value()?;
    let text = interpreter.pop_value()?;

    let (text, start, end) = match (text, start, end) {
        (Value::Str(text), Value::Number(start), Value::Number(end)) => (text, start, end),
        _ => return Ok(Value::Nil),
    };

    let length = text.chars().count() as i64;
    let begin = (start.trunc() as i64 - 1).max(0);
    let finish = (end.trunc() as i64).min(length);

    if begin >= finish {
        return Ok(Value::Str(String::new()));
    }

    let extracted: String = text.chars()
                                .skip(begin as usize)
                                .take((finish - begin) as usize)
                                .collect();
    Ok(Value::Str(extracted))
}
