//! Errors that end a session abnormally.
//!
//! Bad user input never shows up here: empty text, malformed or negative
//! amounts and unknown menu choices are handled by re-prompting.

use std::io;

use rustyline::error::ReadlineError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TrackerError {
    /// Reading stdin or writing stdout failed.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// The line editor failed for a reason other than Ctrl+C / Ctrl+D.
    #[error(transparent)]
    Readline(#[from] ReadlineError),
}
