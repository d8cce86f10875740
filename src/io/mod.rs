mod input;

use std::io::Write;

pub use input::{LINE_BUFSIZE, LineReader};

/// Output and error streams the loop and builtins write to.
///
/// External programs never see these; a launched child inherits the
/// process's real standard streams.
pub struct Streams<'a> {
    pub out: &'a mut dyn Write,
    pub err: &'a mut dyn Write,
}

impl<'a> Streams<'a> {
    pub fn new(out: &'a mut dyn Write, err: &'a mut dyn Write) -> Self {
        Streams { out, err }
    }
}
