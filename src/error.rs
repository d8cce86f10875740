use std::collections::TryReserveError;
use std::io;
use std::path::PathBuf;

use nix::errno::Errno;
use thiserror::Error;

use crate::config::ConfigError;
use crate::exit_codes;

/// Conditions that stop the interpreter.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("buffer allocation error: {0}")]
    Alloc(#[from] TryReserveError),
    #[error("input error: {0}")]
    Io(#[from] io::Error),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

impl ShellError {
    /// Process exit code for an interpreter stopped by this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShellError::Config(_) => exit_codes::USAGE,
            ShellError::Alloc(_) | ShellError::Io(_) => exit_codes::FATAL,
        }
    }
}

/// Failures reported to the operator after which the loop keeps running.
#[derive(Debug, Error)]
pub enum ExecError {
    #[error("expected argument to \"{command}\"")]
    MissingArgument { command: &'static str },
    #[error("cd: {}: {source}", .path.display())]
    ChangeDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("fork failed: {0}")]
    Fork(Errno),
    #[error("wait failed: {0}")]
    Wait(Errno),
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
}
