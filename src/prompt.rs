use std::io::{self, Write};

/// Plain-text prompt shown before each line is read.
pub struct ShellPrompt {
    text: String,
}

impl ShellPrompt {
    pub fn new(text: impl Into<String>) -> Self {
        ShellPrompt { text: text.into() }
    }

    pub fn show<W: Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        out.write_all(self.text.as_bytes())?;
        out.flush()
    }
}
