//! Validated user input.
//!
//! Structure:
//! - `LineSource`: where lines come from (line editor or any `BufRead`)
//! - Validators: re-prompt until the input satisfies its constraint
//!
//! End of input is not an error. It comes back as [`Reply::Closed`] so
//! callers can shut down cleanly.

use std::io::{self, BufRead, Write};

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::error::TrackerError;
use crate::types::parse_amount;

/// Printed when the user leaves, by menu choice or end of input.
pub const FAREWELL: &str = "👋 Goodbye!";

/// Printed when a required field is left blank.
pub const EMPTY_INPUT_MESSAGE: &str = "❌ Input cannot be empty. Please try again.";

// ============================================================================
// TYPES
// ============================================================================

/// Outcome of a prompt.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply<T> {
    /// The user supplied a valid value.
    Value(T),
    /// Input ended or was interrupted before a valid value arrived.
    Closed,
}

/// A blocking source of input lines.
pub trait LineSource {
    /// Show `prompt` and read one line.
    ///
    /// Returns `Ok(None)` on end of input or interrupt. `out` is the
    /// session's output stream; sources that don't draw their own prompt
    /// write it there.
    fn read_line(&mut self, prompt: &str, out: &mut dyn Write)
        -> Result<Option<String>, TrackerError>;
}

// ============================================================================
// SOURCES
// ============================================================================

/// Reads lines from any buffered reader (piped stdin, test scripts).
pub struct BufferedSource<R> {
    reader: R,
}

impl<R: BufRead> BufferedSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }
}

impl<R: BufRead> LineSource for BufferedSource<R> {
    fn read_line(
        &mut self,
        prompt: &str,
        out: &mut dyn Write,
    ) -> Result<Option<String>, TrackerError> {
        write!(out, "{}", prompt)?;
        out.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Interactive terminal input with line editing and in-session history.
///
/// Ctrl+C and Ctrl+D both end input rather than killing the process.
pub struct EditorSource {
    editor: DefaultEditor,
}

impl EditorSource {
    pub fn new() -> Result<Self, TrackerError> {
        Ok(Self {
            editor: DefaultEditor::new()?,
        })
    }
}

impl LineSource for EditorSource {
    fn read_line(
        &mut self,
        prompt: &str,
        out: &mut dyn Write,
    ) -> Result<Option<String>, TrackerError> {
        // Anything already written must appear above the prompt
        out.flush()?;

        match self.editor.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    if let Err(e) = self.editor.add_history_entry(line.as_str()) {
                        tracing::warn!("could not record history entry: {e}");
                    }
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Interrupted) => {
                tracing::debug!("input interrupted");
                Ok(None)
            }
            Err(ReadlineError::Eof) => {
                tracing::debug!("end of input");
                Ok(None)
            }
            Err(e) => Err(e.into()),
        }
    }
}

// ============================================================================
// VALIDATORS
// ============================================================================

/// Print the farewell on its own line, even if a prompt is still pending.
///
/// Also used by the Ctrl+C handler, which runs outside any session.
pub fn say_goodbye<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{}", FAREWELL)?;
    out.flush()
}

/// Prompt until the user enters something other than whitespace.
///
/// Returns the trimmed text. On end of input, prints the farewell and
/// returns [`Reply::Closed`].
pub fn read_non_empty_text<S, W>(
    source: &mut S,
    out: &mut W,
    prompt: &str,
) -> Result<Reply<String>, TrackerError>
where
    S: LineSource + ?Sized,
    W: Write,
{
    loop {
        let Some(line) = source.read_line(prompt, out)? else {
            say_goodbye(out)?;
            return Ok(Reply::Closed);
        };

        let value = line.trim();
        if value.is_empty() {
            writeln!(out, "{}", EMPTY_INPUT_MESSAGE)?;
            continue;
        }
        return Ok(Reply::Value(value.to_string()));
    }
}

/// Prompt until the user enters a non-negative number.
///
/// Malformed and negative input get different corrective messages.
pub fn read_non_negative_amount<S, W>(
    source: &mut S,
    out: &mut W,
    prompt: &str,
) -> Result<Reply<f64>, TrackerError>
where
    S: LineSource + ?Sized,
    W: Write,
{
    loop {
        let text = match read_non_empty_text(source, out, prompt)? {
            Reply::Value(text) => text,
            Reply::Closed => return Ok(Reply::Closed),
        };

        match parse_amount(&text) {
            Ok(amount) => return Ok(Reply::Value(amount)),
            Err(e) => {
                tracing::debug!(input = %text, "rejected amount");
                writeln!(out, "❌ {}", e)?;
            }
        }
    }
}

// ============================================================================
// TESTS
// ============================================================================
