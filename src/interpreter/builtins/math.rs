use rand::Rng;

use crate::interpreter::{
    core::{Interpreter, RunResult},
    value::Value,
};

/// Returns a uniformly distributed number in `[0, 1)`.
///
/// Takes no arguments.
pub fn random(_interpreter: &mut Interpreter) -> RunResult<Value> {
    Ok(Value::Number(rand::thread_rng().gen::<f64>()))
}

/// Returns the square root of a nonnegative number.
///
/// Pops one argument. A negative number or a non-number yields `Nil` rather
/// than an error.
///
/// # Example
/// ```
/// use lunula::{Interpreter, Value, interpreter::builtins::math::sqrt};
///
/// let mut session = Interpreter::new();
/// session.push_value(Value::Number(9.0)).unwrap();
/// assert_eq!(sqrt(&mut session).unwrap(), Value::Number(3.0));
///
/// session.push_value(Value::Number(-9.0)).unwrap();
/// assert_eq!(sqrt(&mut session).unwrap(), Value::Nil);
/// ```
pub fn sqrt(interpreter: &mut Interpreter) -> RunResult<Value> {
    let argument = interpreter.pop_value()?;
    match argument {
        Value::Number(n) if n >= 0.0 => Ok(Value::Number(n.sqrt())),
        _ => Ok(Value::Nil),
    }
}
