//! expense-tracker CLI
//!
//! Interactive expense tracker: add expenses, list them by category,
//! summarize totals.

use std::io::{self, IsTerminal, Write};
use std::process::{self, ExitCode};

use clap::Parser;
use tracing_subscriber::filter::LevelFilter;

use expense_tracker::error::TrackerError;
use expense_tracker::input::{BufferedSource, EditorSource, LineSource, say_goodbye};
use expense_tracker::session::Session;
use expense_tracker::types::ExitReason;

/// Menu exit, end of input, or interrupt.
const SUCCESS_STATUS: u8 = 0;

/// Anything the session could not recover from.
const FAILURE_STATUS: u8 = 1;

#[derive(Parser)]
#[command(name = "expense-tracker")]
#[command(about = "Record expenses by category and review totals")]
#[command(version)]
struct Cli {
    /// Log diagnostics to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    install_interrupt_handler();

    let result = if io::stdin().is_terminal() {
        EditorSource::new().and_then(run)
    } else {
        run(BufferedSource::new(io::stdin().lock()))
    };

    ExitCode::from(exit_status(result, &mut io::stdout()))
}

// ============================================================================
// HELPERS
// ============================================================================

fn run<S: LineSource>(source: S) -> Result<ExitReason, TrackerError> {
    // Unlocked handle: the interrupt handler thread writes here too
    Session::new(source, io::stdout()).run()
}

/// Map a finished session to a process status, reporting failures to `out`.
///
/// The report is best effort: the failure may be `out` itself (a closed
/// pipe), and that must still end in the failure status.
fn exit_status<W: Write>(result: Result<ExitReason, TrackerError>, out: &mut W) -> u8 {
    match result {
        Ok(reason) => {
            tracing::debug!(?reason, "clean exit");
            SUCCESS_STATUS
        }
        Err(e) => {
            tracing::error!("session failed: {e}");
            let _ = writeln!(out, "⚠️ An unexpected error occurred: {}", e);
            let _ = out.flush();
            FAILURE_STATUS
        }
    }
}

/// Ctrl+C ends the program like end of input does.
///
/// On a terminal the line editor already turns Ctrl+C into end of input;
/// this covers piped stdin, where the signal would otherwise kill us.
fn install_interrupt_handler() {
    let installed = ctrlc::set_handler(|| {
        let _ = say_goodbye(&mut io::stdout());
        process::exit(i32::from(SUCCESS_STATUS));
    });

    if let Err(e) = installed {
        tracing::warn!("could not install Ctrl+C handler: {e}");
    }
}

/// Diagnostics go to stderr so they never mix with the report text.
fn init_logging(verbosity: u8) {
    let level = match verbosity {
        0 => LevelFilter::OFF,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    /// Stdout after the reader on the other end of the pipe went away.
    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }
    }

    fn scripted(script: &str) -> BufferedSource<Cursor<Vec<u8>>> {
        BufferedSource::new(Cursor::new(script.as_bytes().to_vec()))
    }

    #[test]
    fn clean_exits_map_to_success() {
        let mut out = Vec::<u8>::new();

        assert_eq!(exit_status(Ok(ExitReason::MenuExit), &mut out), SUCCESS_STATUS);
        assert_eq!(exit_status(Ok(ExitReason::InputClosed), &mut out), SUCCESS_STATUS);
        assert!(out.is_empty());
    }

    #[test]
    fn failure_is_reported_with_warning_prefix() {
        let mut out = Vec::new();
        let err = TrackerError::Io(io::Error::other("disk on fire"));

        assert_eq!(exit_status(Err(err), &mut out), FAILURE_STATUS);
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "⚠️ An unexpected error occurred: disk on fire\n"
        );
    }

    #[test]
    fn broken_stdout_maps_to_failure_without_panicking() {
        let result = Session::new(scripted("2\n4\n"), ClosedPipe).run();
        assert!(matches!(result, Err(TrackerError::Io(_))));

        assert_eq!(exit_status(result, &mut ClosedPipe), FAILURE_STATUS);
    }

    #[test]
    fn end_of_input_maps_to_success() {
        let result = Session::new(scripted(""), Vec::<u8>::new()).run();
        assert_eq!(exit_status(result, &mut Vec::<u8>::new()), SUCCESS_STATUS);
    }

    #[test]
    fn verbose_flag_counts() {
        assert_eq!(Cli::parse_from(["expense-tracker"]).verbose, 0);
        assert_eq!(Cli::parse_from(["expense-tracker", "-vv"]).verbose, 2);
    }
}
