//! Stable exit codes for the interpreter and for children that fail to exec.

/// Loop stopped through `exit` or end of input.
pub const OK: i32 = 0;
/// Input buffer could not grow, or the input stream failed.
pub const FATAL: i32 = 1;
/// Bad configuration file.
pub const USAGE: i32 = 2;
/// Child could not exec the program because it is not executable.
pub const NOT_EXECUTABLE: i32 = 126;
/// Child could not find the program.
pub const NOT_FOUND: i32 = 127;
