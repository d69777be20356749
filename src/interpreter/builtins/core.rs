use crate::interpreter::{
    builtins::{convert, math, os, print, string, table},
    core::{Interpreter, RunResult},
    value::Value,
};

/// Type alias for built-in function handlers.
///
/// A built-in pops its declared arity off the session's value stack (in
/// reverse push order) and returns the call's value.
pub type BuiltinFn = fn(&mut Interpreter) -> RunResult<Value>;

/// Defines the built-in catalogue by generating a lookup table and a name
/// list.
///
/// Each entry provides:
/// - the dotted source-level name,
/// - the exact number of arguments the built-in pops,
/// - a function pointer implementing it.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        /// Metadata for one entry of the built-in catalogue.
        pub struct BuiltinDef {
            /// The source-level name of the built-in.
            pub name:  &'static str,
            /// How many arguments the built-in pops off the value stack.
            pub arity: usize,
            /// The handler implementing the built-in.
            pub func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, arity: $arity, func: $func },
            )*
        ];
        /// The names of all built-in functions, in catalogue order.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "print"        => { arity: 1, func: print::print },
    "type"         => { arity: 1, func: convert::type_of },
    "tonumber"     => { arity: 1, func: convert::tonumber },
    "tostring"     => { arity: 1, func: convert::tostring },
    "math.random"  => { arity: 0, func: math::random },
    "math.sqrt"    => { arity: 1, func: math::sqrt },
    "os.time"      => { arity: 0, func: os::time },
    "os.clock"     => { arity: 0, func: os::clock },
    "string.len"   => { arity: 1, func: string::len },
    "string.sub"   => { arity: 3, func: string::sub },
    "table.insert" => { arity: 2, func: table::insert },
    "table.remove" => { arity: 1, func: table::remove },
}

/// Finds a built-in by its source-level name.
///
/// Built-ins are resolved before the user function registry, so they cannot
/// be shadowed by declarations.
#[must_use]
pub fn lookup(name: &str) -> Option<&'static BuiltinDef> {
    BUILTIN_TABLE.iter().find(|builtin| builtin.name == name)
}
