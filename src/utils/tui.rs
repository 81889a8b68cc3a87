use std::io::{BufRead, ErrorKind};

use anyhow::Result;
use dialoguer::Input;

/// Source of command lines for the session.
pub trait ReadLine {
    /// The next line, or None once input is exhausted.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

/// Interactive prompt on the terminal.
pub struct Prompt;

impl ReadLine for Prompt {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text()
        {
            Ok(line) => Ok(Some(line)),
            Err(err) => closed_or_failed(err),
        }
    }
}

/// Ctrl-C or Ctrl-D at the prompt ends the session like end of input.
fn closed_or_failed(err: dialoguer::Error) -> Result<Option<String>> {
    match err {
        dialoguer::Error::IO(io)
            if matches!(io.kind(), ErrorKind::Interrupted | ErrorKind::UnexpectedEof) =>
        {
            Ok(None)
        }
        err => Err(err.into()),
    }
}

/// Lines from a non-interactive reader, e.g. a piped script.
pub struct Lines<R> {
    reader: R,
}

impl<R: BufRead> Lines<R> {
    pub fn new(reader: R) -> Self {
        Lines { reader }
    }
}

impl<R: BufRead> ReadLine for Lines<R> {
    fn read_line(&mut self, _prompt: &str) -> Result<Option<String>> {
        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}
