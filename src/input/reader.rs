use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

use crate::error::ShellError;

/// Longest accepted input line, including the terminator position.
pub const MAX_LINE_LEN: usize = 256;

pub enum ReadOutcome {
    Line(String),
    Interrupted,
    EndOfInput,
}

/// Interactive line input. The editor supplies raw-mode character handling
/// (echo, backspace erase, newline termination); this wrapper applies the
/// shell's length cap and whitespace trimming.
pub struct LineReader {
    editor: DefaultEditor,
    max_len: usize,
}

impl LineReader {
    pub fn new() -> Result<Self, ShellError> {
        Ok(LineReader {
            editor: DefaultEditor::new()?,
            max_len: MAX_LINE_LEN,
        })
    }

    pub fn read_line(&mut self, prompt: &str) -> Result<ReadOutcome, ShellError> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(ReadOutcome::Line(clip(&line, self.max_len))),
            Err(ReadlineError::Interrupted) => Ok(ReadOutcome::Interrupted),
            Err(ReadlineError::Eof) => Ok(ReadOutcome::EndOfInput),
            Err(e) => Err(e.into()),
        }
    }

    /// Feed an accepted line to the editor so arrow-key recall works. This
    /// list is separate from the session's numbered history ring.
    pub fn remember(&mut self, line: &str) -> Result<(), ShellError> {
        self.editor.add_history_entry(line)?;
        Ok(())
    }
}

/// Truncate silently at `max_len - 1` characters, then trim surrounding
/// whitespace.
fn clip(line: &str, max_len: usize) -> String {
    let limit = max_len.saturating_sub(1);
    let clipped = match line.char_indices().nth(limit) {
        Some((idx, _)) => &line[..idx],
        None => line,
    };
    clipped.trim().to_string()
}
