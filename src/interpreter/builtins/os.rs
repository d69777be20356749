use std::time::{Instant, SystemTime, UNIX_EPOCH};

use once_cell::sync::Lazy;

use crate::interpreter::{
    core::{Interpreter, RunResult},
    value::Value,
};

/// Reference instant for `os.clock`, fixed on first use.
static CLOCK_EPOCH: Lazy<Instant> = Lazy::new(Instant::now);

/// Returns the current wall-clock time as seconds since the Unix epoch.
///
/// Takes no arguments.
pub fn time(_interpreter: &mut Interpreter) -> RunResult<Value> {
    let seconds = SystemTime::now().duration_since(UNIX_EPOCH)
                                   .map(|elapsed| elapsed.as_secs_f64())
                                   .unwrap_or(0.0);
    Ok(Value::Number(seconds))
}

/// Returns the seconds elapsed since the interpreter's clock epoch.
///
/// Takes no arguments. The epoch is fixed the first time either clock
/// built-in runs, so successive calls measure monotonically increasing
/// elapsed time.
pub fn clock(_interpreter: &mut Interpreter) -> RunResult<Value> {
    Ok(Value::Number(CLOCK_EPOCH.elapsed().as_secs_f64()))
}
