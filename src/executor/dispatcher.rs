use std::io::Write;

use tracing::debug;

use crate::executor::{BuiltinRegistry, ExecStatus, ExitDisposition, Launcher, LoopStatus};
use crate::io::Streams;

/// Routes a token sequence to a builtin or to an external program.
pub struct Dispatcher<L> {
    builtins: BuiltinRegistry,
    launcher: L,
}

impl<L: Launcher> Dispatcher<L> {
    pub fn new(builtins: BuiltinRegistry, launcher: L) -> Self {
        Dispatcher { builtins, launcher }
    }

    #[cfg(test)]
    pub(crate) fn launcher(&self) -> &L {
        &self.launcher
    }

    /// Runs one command. Failures are written to `io.err` and never stop the
    /// loop; only the `exit` builtin returns [`LoopStatus::Terminate`].
    pub fn execute(&mut self, tokens: &[&str], io: &mut Streams<'_>) -> LoopStatus {
        let Some(name) = tokens.first() else {
            return LoopStatus::Continue;
        };

        let result = match self.builtins.lookup(name) {
            Some(builtin) => {
                debug!(builtin = *name, "running builtin");
                builtin.run(tokens, io)
            }
            None => self.launch(tokens, io),
        };

        match result {
            Ok(status) => status,
            Err(e) => {
                debug!(command = *name, error = %e, "command failed");
                let _ = writeln!(io.err, "minish: {}", e);
                LoopStatus::Continue
            }
        }
    }

    fn launch(&mut self, tokens: &[&str], io: &mut Streams<'_>) -> ExecStatus {
        io.out.flush()?;
        let child = self.launcher.launch(tokens)?;
        match child.disposition {
            ExitDisposition::Exited(code) => {
                debug!(pid = child.pid.as_raw(), code, "child exited");
            }
            ExitDisposition::Signaled(sig) => {
                debug!(pid = child.pid.as_raw(), signal = %sig, "child killed by signal");
            }
        }
        Ok(LoopStatus::Continue)
    }
}
