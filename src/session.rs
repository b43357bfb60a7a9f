//! Interactive session: the effects boundary around the menu.
//!
//! Wires the pure layers (menu transitions, report formatting) to a
//! line source and an output stream. The store lives here and is only
//! mutated by [`Session::add_expense`].

use std::io::Write;

use crate::error::TrackerError;
use crate::input::{FAREWELL, LineSource, Reply, read_non_empty_text, read_non_negative_amount};
use crate::menu::{CHOICE_PROMPT, Effect, INVALID_CHOICE_MESSAGE, MENU, SessionState, WELCOME, update};
use crate::report::{format_listing, format_summary};
use crate::store::ExpenseStore;
use crate::types::{Expense, ExitReason};

pub const DESCRIPTION_PROMPT: &str = "📝 Enter expense description: ";
pub const CATEGORY_PROMPT: &str = "📂 Enter expense category: ";
pub const AMOUNT_PROMPT: &str = "💵 Enter expense amount: ";

pub const ADDED_MESSAGE: &str = "✅ Expense added successfully.";

/// One user's run of the tracker.
pub struct Session<S, W> {
    source: S,
    out: W,
    store: ExpenseStore,
    state: SessionState,
}

impl<S: LineSource, W: Write> Session<S, W> {
    pub fn new(source: S, out: W) -> Self {
        Self {
            source,
            out,
            store: ExpenseStore::new(),
            state: SessionState::Running,
        }
    }

    /// Expenses recorded so far.
    pub fn store(&self) -> &ExpenseStore {
        &self.store
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Give back the output stream (tests read what was printed).
    pub fn into_output(self) -> W {
        self.out
    }

    /// Run the menu loop until the user exits or input ends.
    ///
    /// # Errors
    /// Returns an error if reading input or writing output fails.
    pub fn run(&mut self) -> Result<ExitReason, TrackerError> {
        writeln!(self.out, "{}", WELCOME)?;

        loop {
            if let SessionState::Exited(reason) = self.state {
                tracing::info!(?reason, expenses = self.store.len(), "session finished");
                return Ok(reason);
            }
            self.step()?;
        }
    }

    /// Show the menu, read one choice, carry it out.
    fn step(&mut self) -> Result<(), TrackerError> {
        writeln!(self.out, "{}", MENU)?;

        let choice = match read_non_empty_text(&mut self.source, &mut self.out, CHOICE_PROMPT)? {
            Reply::Value(choice) => choice,
            Reply::Closed => {
                self.state = SessionState::Exited(ExitReason::InputClosed);
                return Ok(());
            }
        };

        let transition = update(&choice);
        tracing::debug!(choice = %choice, effect = ?transition.effect, "menu choice");

        match transition.effect {
            Effect::RecordExpense => {
                if let Reply::Closed = self.add_expense()? {
                    self.state = SessionState::Exited(ExitReason::InputClosed);
                    return Ok(());
                }
            }
            Effect::ShowListing => self.list_expenses()?,
            Effect::ShowSummary => self.summarize()?,
            Effect::SayGoodbye => writeln!(self.out, "{}", FAREWELL)?,
            Effect::RejectChoice => writeln!(self.out, "{}\n", INVALID_CHOICE_MESSAGE)?,
        }

        self.state = transition.next;
        Ok(())
    }

    /// Prompt for description, category and amount, then record the expense.
    ///
    /// Returns [`Reply::Closed`] if input ends part-way; nothing is recorded
    /// in that case.
    pub fn add_expense(&mut self) -> Result<Reply<()>, TrackerError> {
        let Reply::Value(description) =
            read_non_empty_text(&mut self.source, &mut self.out, DESCRIPTION_PROMPT)?
        else {
            return Ok(Reply::Closed);
        };
        let Reply::Value(category) =
            read_non_empty_text(&mut self.source, &mut self.out, CATEGORY_PROMPT)?
        else {
            return Ok(Reply::Closed);
        };
        let Reply::Value(amount) =
            read_non_negative_amount(&mut self.source, &mut self.out, AMOUNT_PROMPT)?
        else {
            return Ok(Reply::Closed);
        };

        tracing::debug!(%category, %description, amount, "recording expense");
        self.store.record(&category, Expense::new(description, amount));
        writeln!(self.out, "{}\n", ADDED_MESSAGE)?;

        Ok(Reply::Value(()))
    }

    /// Print every expense grouped by category.
    pub fn list_expenses(&mut self) -> Result<(), TrackerError> {
        write!(self.out, "{}", format_listing(&self.store))?;
        Ok(())
    }

    /// Print one total per category.
    pub fn summarize(&mut self) -> Result<(), TrackerError> {
        write!(self.out, "{}", format_summary(&self.store))?;
        Ok(())
    }
}

// ============================================================================
// TESTS
// ============================================================================
