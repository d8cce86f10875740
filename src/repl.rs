use std::io::{BufRead, Write};

use tracing::debug;

use crate::error::ShellError;
use crate::executor::{Dispatcher, Launcher, LoopStatus};
use crate::io::{LineReader, Streams};
use crate::prompt::ShellPrompt;
use crate::tokenizer::Tokenizer;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReplState {
    Running,
    Stopped,
}

/// Prompt, read, split, dispatch; repeated until `exit` or end of input.
pub struct Repl<R, L> {
    input: LineReader<R>,
    prompt: ShellPrompt,
    dispatcher: Dispatcher<L>,
    state: ReplState,
}

impl<R: BufRead, L: Launcher> Repl<R, L> {
    pub fn new(input: LineReader<R>, prompt: ShellPrompt, dispatcher: Dispatcher<L>) -> Self {
        Repl {
            input,
            prompt,
            dispatcher,
            state: ReplState::Running,
        }
    }

    pub fn state(&self) -> ReplState {
        self.state
    }

    /// Runs until the loop stops. An `Err` is fatal to the interpreter.
    pub fn run(&mut self, io: &mut Streams<'_>) -> Result<(), ShellError> {
        while self.state == ReplState::Running {
            self.step(io)?;
        }
        debug!("loop stopped");
        Ok(())
    }

    /// One iteration. The line and its tokens are dropped before returning.
    pub fn step(&mut self, io: &mut Streams<'_>) -> Result<(), ShellError> {
        if self.state == ReplState::Stopped {
            return Ok(());
        }

        self.prompt.show(io.out)?;
        let Some(line) = self.input.read_line()? else {
            writeln!(io.out)?;
            self.state = ReplState::Stopped;
            return Ok(());
        };
        if line.is_empty() {
            return Ok(());
        }

        let tokens = Tokenizer::split(&line)?;
        if self.dispatcher.execute(&tokens, io) == LoopStatus::Terminate {
            self.state = ReplState::Stopped;
        }
        Ok(())
    }
}
