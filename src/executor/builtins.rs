use std::io::Write;
use std::path::PathBuf;

use tracing::debug;

use crate::error::ExecError;
use crate::executor::{ExecStatus, LoopStatus};
use crate::io::Streams;

/// A command run inside the interpreter's own process.
///
/// `args` is the full token sequence, so `args[0]` is the command name.
pub trait BuiltinCommand: Sync {
    fn name(&self) -> &'static str;
    fn usage(&self) -> &'static str;
    fn summary(&self) -> &'static str;
    fn run(&self, args: &[&str], io: &mut Streams<'_>) -> ExecStatus;
}

static BUILTINS: [&dyn BuiltinCommand; 3] = [&CdCommand, &HelpCommand, &ExitCommand];

/// Fixed table of builtins, searched in registration order.
#[derive(Clone, Copy)]
pub struct BuiltinRegistry {
    commands: &'static [&'static dyn BuiltinCommand],
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        BuiltinRegistry { commands: &BUILTINS }
    }
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Exact, case-sensitive match against the registered names.
    pub fn lookup(&self, name: &str) -> Option<&'static dyn BuiltinCommand> {
        self.commands.iter().copied().find(|cmd| cmd.name() == name)
    }

    pub fn count(&self) -> usize {
        self.commands.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static dyn BuiltinCommand> + '_ {
        self.commands.iter().copied()
    }
}

pub struct CdCommand;

impl BuiltinCommand for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }
    fn usage(&self) -> &'static str {
        "cd <path>"
    }
    fn summary(&self) -> &'static str {
        "Change the working directory"
    }
    fn run(&self, args: &[&str], _io: &mut Streams<'_>) -> ExecStatus {
        let Some(target) = args.get(1) else {
            return Err(ExecError::MissingArgument { command: "cd" });
        };
        std::env::set_current_dir(target).map_err(|source| ExecError::ChangeDir {
            path: PathBuf::from(target),
            source,
        })?;
        debug!(path = *target, "changed directory");
        Ok(LoopStatus::Continue)
    }
}

pub struct HelpCommand;

impl BuiltinCommand for HelpCommand {
    fn name(&self) -> &'static str {
        "help"
    }
    fn usage(&self) -> &'static str {
        "help"
    }
    fn summary(&self) -> &'static str {
        "Show this help"
    }
    fn run(&self, _args: &[&str], io: &mut Streams<'_>) -> ExecStatus {
        writeln!(io.out, "minish")?;
        writeln!(io.out, "Type program names and arguments, and hit enter.")?;
        writeln!(io.out, "The following are built in:")?;
        for cmd in BuiltinRegistry::new().iter() {
            writeln!(io.out, "  {:<10} : {}", cmd.usage(), cmd.summary())?;
        }
        writeln!(io.out, "Use the man command for information on other programs.")?;
        Ok(LoopStatus::Continue)
    }
}

pub struct ExitCommand;

impl BuiltinCommand for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }
    fn usage(&self) -> &'static str {
        "exit"
    }
    fn summary(&self) -> &'static str {
        "Exit the shell"
    }
    fn run(&self, _args: &[&str], _io: &mut Streams<'_>) -> ExecStatus {
        Ok(LoopStatus::Terminate)
    }
}
