use std::ffi::CString;
use std::ptr;

use nix::errno::Errno;
use nix::sys::signal::Signal;
use nix::sys::wait::{WaitPidFlag, WaitStatus, waitpid};
use nix::unistd::{ForkResult, Pid, fork};
use tracing::{debug, trace};

use crate::error::ExecError;
use crate::exit_codes;
use crate::signals;

/// How a child process ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitDisposition {
    Exited(i32),
    Signaled(Signal),
}

/// A child that has already been waited for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChildProcess {
    pub pid: Pid,
    pub disposition: ExitDisposition,
}

/// Runs an external program to completion.
///
/// `argv[0]` names the program; the whole slice becomes its argument list.
pub trait Launcher {
    fn launch(&mut self, argv: &[&str]) -> Result<ChildProcess, ExecError>;
}

/// Launches programs with fork, execvp and waitpid.
///
/// The child inherits the parent's standard streams and searches `PATH`
/// when the program name has no slash.
#[derive(Debug, Default, Clone)]
pub struct ForkLauncher {
    restore_signals: bool,
}

impl ForkLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Put SIGINT and SIGQUIT back to their defaults in the child.
    pub fn restore_signals(mut self, restore: bool) -> Self {
        self.restore_signals = restore;
        self
    }
}

impl Launcher for ForkLauncher {
    fn launch(&mut self, argv: &[&str]) -> Result<ChildProcess, ExecError> {
        let args = to_c_args(argv)?;
        let mut arg_ptrs: Vec<*const libc::c_char> = args.iter().map(|a| a.as_ptr()).collect();
        arg_ptrs.push(ptr::null());

        // SAFETY: everything the child touches is built above. Between fork
        // and exec or `_exit` it only calls sigaction, execvp and write.
        match unsafe { fork() }.map_err(ExecError::Fork)? {
            ForkResult::Child => exec_child(&args[0], &arg_ptrs, self.restore_signals),
            ForkResult::Parent { child } => {
                debug!(pid = child.as_raw(), ?argv, "spawned child");
                let disposition = wait_for_exit(child)?;
                Ok(ChildProcess {
                    pid: child,
                    disposition,
                })
            }
        }
    }
}

fn to_c_args(argv: &[&str]) -> Result<Vec<CString>, ExecError> {
    if argv.is_empty() {
        return Err(ExecError::InvalidArgument("empty command".to_string()));
    }
    argv.iter()
        .map(|arg| {
            CString::new(*arg)
                .map_err(|_| ExecError::InvalidArgument(format!("{:?} contains a NUL byte", arg)))
        })
        .collect()
}

/// `argv` is null-terminated and its pointers borrow from live `CString`s.
fn exec_child(program: &CString, argv: &[*const libc::c_char], restore_signals: bool) -> ! {
    let _ = signals::restore_pipe();
    if restore_signals {
        let _ = signals::restore_default();
    }

    // SAFETY: `program` and every non-null entry of `argv` are NUL-terminated
    // strings that outlive the call.
    unsafe { libc::execvp(program.as_ptr(), argv.as_ptr()) };
    let errno = Errno::last();

    write_stderr(b"minish: ");
    write_stderr(program.as_bytes());
    write_stderr(b": ");
    write_stderr(errno.desc().as_bytes());
    write_stderr(b"\n");

    let code = match errno {
        Errno::ENOENT | Errno::ENOTDIR => exit_codes::NOT_FOUND,
        _ => exit_codes::NOT_EXECUTABLE,
    };
    // SAFETY: skips atexit handlers and stdio flushing that belong to the parent.
    unsafe { libc::_exit(code) }
}

fn write_stderr(bytes: &[u8]) {
    // SAFETY: `bytes` is valid for `bytes.len()` bytes for the whole call.
    unsafe {
        libc::write(libc::STDERR_FILENO, bytes.as_ptr().cast(), bytes.len());
    }
}

/// Blocks until the child exits or is killed. Stops and continues are not
/// terminal, so the wait is repeated.
fn wait_for_exit(pid: Pid) -> Result<ExitDisposition, ExecError> {
    loop {
        match waitpid(pid, Some(WaitPidFlag::WUNTRACED)) {
            Ok(WaitStatus::Exited(_, code)) => return Ok(ExitDisposition::Exited(code)),
            Ok(WaitStatus::Signaled(_, sig, _)) => return Ok(ExitDisposition::Signaled(sig)),
            Ok(status) => trace!(?status, "child not finished, waiting again"),
            Err(Errno::EINTR) => {}
            Err(e) => return Err(ExecError::Wait(e)),
        }
    }
}
