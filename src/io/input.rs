use std::io::{BufRead, Read};

use tracing::trace;

use crate::error::ShellError;

/// Initial capacity of a line buffer, and the amount it grows by each time
/// it fills up.
pub const LINE_BUFSIZE: usize = 1024;

/// Reads operator input one line at a time.
pub struct LineReader<R> {
    reader: R,
}

impl<R: BufRead> LineReader<R> {
    pub fn new(reader: R) -> Self {
        LineReader { reader }
    }

    /// Reads bytes until a newline or end of input.
    ///
    /// Returns `Ok(None)` only when end of input is hit before any byte was
    /// read; an empty line yields `Ok(Some(""))`. The newline itself is not
    /// part of the returned line.
    pub fn read_line(&mut self) -> Result<Option<String>, ShellError> {
        let mut buf: Vec<u8> = Vec::new();
        buf.try_reserve_exact(LINE_BUFSIZE)?;
        let mut saw_input = false;

        for byte in self.reader.by_ref().bytes() {
            let byte = byte?;
            saw_input = true;
            if byte == b'\n' {
                break;
            }
            if buf.len() == buf.capacity() {
                buf.try_reserve_exact(LINE_BUFSIZE)?;
                trace!(capacity = buf.capacity(), "grew line buffer");
            }
            buf.push(byte);
        }

        if !saw_input {
            return Ok(None);
        }
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, BufReader, Cursor};

    /// Yields `prefix`, then fails every read.
    struct BrokenReader {
        prefix: Cursor<Vec<u8>>,
    }

    impl Read for BrokenReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            match self.prefix.read(buf)? {
                0 => Err(io::Error::other("input device went away")),
                n => Ok(n),
            }
        }
    }

    fn reader(input: &str) -> LineReader<Cursor<Vec<u8>>> {
        LineReader::new(Cursor::new(input.as_bytes().to_vec()))
    }

    #[test]
    fn test_reads_lines_in_order() {
        let mut r = reader("ls -l\ncd /tmp\n");
        assert_eq!(r.read_line().unwrap().as_deref(), Some("ls -l"));
        assert_eq!(r.read_line().unwrap().as_deref(), Some("cd /tmp"));
        assert_eq!(r.read_line().unwrap(), None);
    }

    #[test]
    fn test_empty_line_is_not_eof() {
        let mut r = reader("\n");
        assert_eq!(r.read_line().unwrap().as_deref(), Some(""));
        assert_eq!(r.read_line().unwrap(), None);
    }

    #[test]
    fn test_eof_on_empty_input() {
        let mut r = reader("");
        assert_eq!(r.read_line().unwrap(), None);
    }

    #[test]
    fn test_last_line_without_newline() {
        let mut r = reader("help");
        assert_eq!(r.read_line().unwrap().as_deref(), Some("help"));
        assert_eq!(r.read_line().unwrap(), None);
    }

    #[test]
    fn test_long_line_is_not_truncated() {
        let long = "x".repeat(5000);
        let mut r = reader(&format!("{}\nnext\n", long));
        let line = r.read_line().unwrap().unwrap();
        assert_eq!(line.len(), 5000);
        assert_eq!(line, long);
        assert_eq!(r.read_line().unwrap().as_deref(), Some("next"));
    }

    #[test]
    fn test_line_exactly_buffer_size() {
        let exact = "y".repeat(LINE_BUFSIZE);
        let mut r = reader(&format!("{}\n", exact));
        assert_eq!(r.read_line().unwrap().unwrap(), exact);
    }

    #[test]
    fn test_keeps_carriage_return() {
        let mut r = reader("echo hi\r\n");
        assert_eq!(r.read_line().unwrap().as_deref(), Some("echo hi\r"));
    }

    #[test]
    fn test_read_error_is_fatal() {
        let broken = BrokenReader {
            prefix: Cursor::new(b"partial".to_vec()),
        };
        let mut r = LineReader::new(BufReader::new(broken));
        assert!(matches!(r.read_line(), Err(ShellError::Io(_))));
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let mut r = LineReader::new(Cursor::new(vec![b'a', 0xff, b'b', b'\n']));
        assert_eq!(r.read_line().unwrap().as_deref(), Some("a\u{fffd}b"));
    }
}
