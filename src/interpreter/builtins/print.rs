use crate::interpreter::{
    core::{Interpreter, RunResult},
    value::Value,
};

/// Prints a value to standard output, followed by a newline.
///
/// Pops one argument of any type; the value is formatted with its `Display`
/// implementation. The call itself produces `Nil`.
pub fn print(interpreter: &mut Interpreter) -> RunResult<Value> {
    let argument = interpreter.pop_value()?;
    println!("{argument}");
    Ok(Value::Nil)
}
