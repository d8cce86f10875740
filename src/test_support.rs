//! Test-only helpers.

use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::io::Streams;

static CWD_LOCK: Mutex<()> = Mutex::new(());

/// Serialises tests that touch the process working directory and puts the
/// original directory back when dropped.
pub struct CwdGuard {
    original: PathBuf,
    _lock: MutexGuard<'static, ()>,
}

impl CwdGuard {
    pub fn lock() -> Self {
        let lock = CWD_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
        CwdGuard {
            original: std::env::current_dir().unwrap(),
            _lock: lock,
        }
    }

    pub fn original(&self) -> &Path {
        &self.original
    }
}

impl Drop for CwdGuard {
    fn drop(&mut self) {
        let _ = std::env::set_current_dir(&self.original);
    }
}

/// Runs `f` against in-memory streams and returns what it wrote.
pub fn capture<T>(f: impl FnOnce(&mut Streams<'_>) -> T) -> (T, String, String) {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let result = {
        let mut io = Streams::new(&mut out, &mut err);
        f(&mut io)
    };
    (
        result,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}
