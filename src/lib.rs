//! An interactive command interpreter.
//!
//! Each line read from the operator is split on whitespace and run either as
//! one of the builtins (`cd`, `help`, `exit`) or as an external program that
//! the interpreter forks, execs and waits for.

pub mod config;
pub mod error;
pub mod executor;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod prompt;
pub mod repl;
pub mod signals;
pub mod tokenizer;

#[cfg(test)]
mod test_support;
