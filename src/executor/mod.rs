mod builtins;
mod dispatcher;
mod launcher;

use crate::error::ExecError;

pub use builtins::{BuiltinCommand, BuiltinRegistry, CdCommand, ExitCommand, HelpCommand};
pub use dispatcher::Dispatcher;
pub use launcher::{ChildProcess, ExitDisposition, ForkLauncher, Launcher};

/// What the loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopStatus {
    Continue,
    Terminate,
}

pub type ExecStatus = Result<LoopStatus, ExecError>;
