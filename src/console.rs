//! Line-oriented text interface
//!
//! The simple CLI mode talks to the player only through [`Console`], so the
//! game loop can be driven by a script in tests.

use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, BufRead, Write};

/// Source of input lines and sink for text blocks
pub trait Console {
    /// Read one line without its line terminator
    ///
    /// Returns `None` once input is exhausted.
    ///
    /// # Errors
    /// Returns an error if reading fails.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write a block of text followed by a newline
    ///
    /// # Errors
    /// Returns an error if writing fails.
    fn write(&mut self, text: &str) -> io::Result<()>;

    /// Clear the display
    ///
    /// # Errors
    /// Returns an error if the terminal rejects the request.
    fn clear(&mut self) -> io::Result<()>;
}

/// Console backed by stdin and stdout
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }

        let trimmed = line.trim_end_matches(['\r', '\n']).len();
        line.truncate(trimmed);
        Ok(Some(line))
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{text}")?;
        self.output.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        execute!(self.output, Clear(ClearType::All), MoveTo(0, 0))
    }
}

/// Console replaying canned input and recording everything written
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct ScriptedConsole {
    pub inputs: std::collections::VecDeque<String>,
    pub output: Vec<String>,
    pub clears: usize,
}

#[cfg(test)]
impl ScriptedConsole {
    pub fn new<'a>(inputs: impl IntoIterator<Item = &'a str>) -> Self {
        Self {
            inputs: inputs.into_iter().map(str::to_string).collect(),
            ..Self::default()
        }
    }

    /// Everything written, joined with newlines
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }
}

#[cfg(test)]
impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.inputs.pop_front())
    }

    fn write(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.clears += 1;
        Ok(())
    }
}
