//! Keyboard signal policy for the interactive parent.
//!
//! While the parent ignores SIGINT and SIGQUIT, a Ctrl-C at the terminal
//! only reaches the foreground child. Ignored dispositions survive exec, so
//! the child puts the defaults back before replacing its image.

use nix::sys::signal::{SigHandler, Signal, signal};

const INTERACTIVE_SIGNALS: [Signal; 2] = [Signal::SIGINT, Signal::SIGQUIT];

pub fn ignore_interactive() -> nix::Result<()> {
    set_all(SigHandler::SigIgn)
}

/// Safe to call between fork and exec.
pub fn restore_default() -> nix::Result<()> {
    set_all(SigHandler::SigDfl)
}

/// The Rust runtime ignores SIGPIPE at startup; launched programs expect the
/// default. Safe to call between fork and exec.
pub fn restore_pipe() -> nix::Result<()> {
    // SAFETY: SigDfl installs no Rust handler code.
    unsafe { signal(Signal::SIGPIPE, SigHandler::SigDfl) }.map(|_| ())
}

fn set_all(handler: SigHandler) -> nix::Result<()> {
    for sig in INTERACTIVE_SIGNALS {
        // SAFETY: SigIgn and SigDfl install no Rust handler code.
        unsafe { signal(sig, handler) }?;
    }
    Ok(())
}
