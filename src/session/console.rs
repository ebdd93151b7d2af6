//! Line-oriented console used for the interactive conversation
//!
//! Prompts stay on the same line as the answer, messages end with a
//! newline. End of input reads as `None`.

use crate::error::Result;
use std::io::{BufRead, Write};

/// Interactive text boundary between the ledger and its user
pub trait Console {
    /// Write `text` without a trailing newline and flush it
    fn prompt(&mut self, text: &str) -> Result<()>;

    /// Write a full line
    fn say(&mut self, line: &str) -> Result<()>;

    /// Read one line without its terminator, `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>>;

    /// Prompt and read in one step, treating end of input as an empty line
    fn ask(&mut self, text: &str) -> Result<String> {
        self.prompt(text)?;
        Ok(self.read_line()?.unwrap_or_default())
    }
}

/// Console over any buffered reader and writer
#[derive(Debug)]
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Everything written so far
    pub fn output(&self) -> &W {
        &self.output
    }
}

impl TerminalConsole<std::io::StdinLock<'static>, std::io::Stdout> {
    /// Console bound to the process's standard input and output
    pub fn stdio() -> Self {
        Self::new(std::io::stdin().lock(), std::io::stdout())
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn prompt(&mut self, text: &str) -> Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }

    fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    fn read_line(&mut self) -> Result<Option<String>> {
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        if buf.ends_with(b"\n") {
            buf.pop();
            if buf.ends_with(b"\r") {
                buf.pop();
            }
        }
        // Undecodable bytes become U+FFFD rather than failing the session
        Ok(Some(String::from_utf8_lossy(&buf).into_owned()))
    }
}
