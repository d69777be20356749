use crate::{
    error::RuntimeError,
    interpreter::{
        core::{Interpreter, RunResult},
        value::{TableEntry, Value},
    },
};

/// Appends a value to the end of a table's entry sequence.
///
/// Pops two arguments: the table and the value. The table is mutated in
/// place, so every binding sharing it observes the insertion. The call
/// produces `Nil`.
///
/// # Errors
/// `RuntimeError::TypeError` if the first argument is not a table.
pub fn insert(interpreter: &mut Interpreter) -> RunResult<Value> {
    let value = interpreter.pop_value()?;
    let target = interpreter.pop_value()?;

    match target {
        Value::Table(entries) => {
            entries.borrow_mut().push(TableEntry { key: None, value });
            Ok(Value::Nil)
        },
        other => Err(RuntimeError::TypeError { details: format!("First argument to table.insert \
                                                                 must be a table, got {}",
                                                                other.type_name()), }.into()),
    }
}

/// Removes and returns the last entry of a table.
///
/// Pops one argument: the table. Removing from an empty table is a no-op
/// that yields `Nil`.
///
/// # Errors
/// `RuntimeError::TypeError` if the argument is not a table.
pub fn remove(interpreter: &mut Interpreter) -> RunResult<Value> {
    let target = interpreter.pop_value()?;

    match target {
        Value::Table(entries) => {
            let removed = entries.borrow_mut().pop();
            Ok(removed.map_or(Value::Nil, |entry| entry.value))
        },
        other => Err(RuntimeError::TypeError { details: format!("Argument to table.remove must \
                                                                 be a table, got {}",
                                                                other.type_name()), }.into()),
    }
}
