use crate::error::ShellError;

/// Characters that separate words: space, tab, carriage return, newline, bell.
pub const DELIMITERS: [char; 5] = [' ', '\t', '\r', '\n', '\x07'];

/// Initial capacity of the token list, and the amount it grows by.
pub const TOKEN_BUFSIZE: usize = 64;

/// Words of one input line, borrowed from that line.
pub type TokenSequence<'a> = Vec<&'a str>;

pub fn is_delimiter(ch: char) -> bool {
    DELIMITERS.contains(&ch)
}

pub struct Tokenizer;

impl Tokenizer {
    /// Splits `line` into maximal runs of non-delimiter characters.
    ///
    /// Runs of delimiters never produce empty tokens, so a blank line gives
    /// an empty sequence. There is no quoting or escaping.
    pub fn split(line: &str) -> Result<TokenSequence<'_>, ShellError> {
        let mut tokens = Vec::new();
        tokens.try_reserve_exact(TOKEN_BUFSIZE)?;

        for word in line.split(is_delimiter).filter(|w| !w.is_empty()) {
            if tokens.len() == tokens.capacity() {
                tokens.try_reserve_exact(TOKEN_BUFSIZE)?;
            }
            tokens.push(word);
        }

        Ok(tokens)
    }
}
