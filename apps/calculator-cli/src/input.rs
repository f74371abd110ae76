//! Line sources for the menu loop.
//!
//! A terminal gets `rustyline` editing and history; piped or redirected
//! stdin is read line by line with no terminal handling.

use std::io::{BufRead, Write};

use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

/// One read attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Input {
    Line(String),
    /// Ctrl-C at the prompt.
    Interrupted,
    /// End of input (Ctrl-D or a closed pipe).
    Eof,
}

pub trait LineSource {
    /// Show `prompt` and read one line without its terminator.
    ///
    /// Sources that do not own the terminal write the prompt to `out`.
    ///
    /// # Errors
    /// Returns an error when the underlying reader or terminal fails.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Input>;
}

/// Interactive terminal input.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    /// # Errors
    /// Returns an error if the terminal cannot be set up.
    pub fn new() -> Result<Self> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Input> {
        // The menu is written to `out`; make sure it is on screen before
        // rustyline takes over the line.
        out.flush()?;
        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    self.editor.add_history_entry(line.as_str())?;
                }
                Ok(Input::Line(line))
            }
            Err(ReadlineError::Interrupted) => Ok(Input::Interrupted),
            Err(ReadlineError::Eof) => Ok(Input::Eof),
            Err(e) => Err(e.into()),
        }
    }
}

/// Plain buffered input, used when stdin is not a terminal.
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: BufRead> ReaderSource<R> {
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for ReaderSource<R> {
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write) -> Result<Input> {
        write!(out, "{prompt}")?;
        out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            // Keep the transcript readable when input ends mid-prompt.
            writeln!(out)?;
            return Ok(Input::Eof);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).len();
        line.truncate(trimmed);
        Ok(Input::Line(line))
    }
}
