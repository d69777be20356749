/// Built-in lookup table and dispatch metadata.
pub mod core;

/// Type inspection and conversion built-ins (`type`, `tonumber`, `tostring`).
pub mod convert;
/// Math built-ins (`math.random`, `math.sqrt`).
pub mod math;
/// Clock built-ins (`os.time`, `os.clock`).
pub mod os;
/// The `print` built-in.
pub mod print;
/// String built-ins (`string.len`, `string.sub`).
pub mod string;
/// Table built-ins (`table.insert`, `table.remove`).
pub mod table;
