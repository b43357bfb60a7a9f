//! Menu state machine: pure types and transitions, zero effects.
//!
//! The session reads a choice, hands it to [`update`], and carries out
//! the returned [`Effect`]. Only the `Exit` choice leaves `Running`.

use crate::types::ExitReason;

/// Shown once, before the first menu.
pub const WELCOME: &str = "👋 Welcome to the Personal Finance Tracker!";

/// The options block, surrounded by blank lines.
pub const MENU: &str = "
What would you like to do?
1. ➕ Add Expense
2. 📋 View All Expenses
3. 📊 View Summary
4. ❌ Exit
";

/// Prompt for the menu choice.
pub const CHOICE_PROMPT: &str = "Choose an option (1–4): ";

/// Printed for anything that isn't 1-4.
pub const INVALID_CHOICE_MESSAGE: &str = "❌ Invalid choice. Please enter a number between 1 and 4.";

// ============================================================================
// TYPES
// ============================================================================

/// A recognized menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    AddExpense,
    ListExpenses,
    Summarize,
    Exit,
}

impl MenuChoice {
    /// Map trimmed user input to a choice. Matching is exact: "01" or
    /// "1." are not choices.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "1" => Some(MenuChoice::AddExpense),
            "2" => Some(MenuChoice::ListExpenses),
            "3" => Some(MenuChoice::Summarize),
            "4" => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

/// Where the session is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Showing the menu and waiting for a choice.
    Running,
    /// Terminal.
    Exited(ExitReason),
}

/// What the session should do after a choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// Collect description, category and amount, then record.
    RecordExpense,
    /// Print every expense by category.
    ShowListing,
    /// Print per-category totals.
    ShowSummary,
    /// Print the farewell.
    SayGoodbye,
    /// Tell the user the choice was not recognized.
    RejectChoice,
}

/// Result of a pure menu transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Transition {
    pub next: SessionState,
    pub effect: Effect,
}

// ============================================================================
// TRANSITIONS
// ============================================================================

/// Pure transition from `Running` given the raw (trimmed) choice.
pub fn update(input: &str) -> Transition {
    let running = |effect| Transition {
        next: SessionState::Running,
        effect,
    };

    match MenuChoice::parse(input) {
        Some(MenuChoice::AddExpense) => running(Effect::RecordExpense),
        Some(MenuChoice::ListExpenses) => running(Effect::ShowListing),
        Some(MenuChoice::Summarize) => running(Effect::ShowSummary),
        Some(MenuChoice::Exit) => Transition {
            next: SessionState::Exited(ExitReason::MenuExit),
            effect: Effect::SayGoodbye,
        },
        None => running(Effect::RejectChoice),
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_recognizes_all_four_options() {
        assert_eq!(MenuChoice::parse("1"), Some(MenuChoice::AddExpense));
        assert_eq!(MenuChoice::parse("2"), Some(MenuChoice::ListExpenses));
        assert_eq!(MenuChoice::parse("3"), Some(MenuChoice::Summarize));
        assert_eq!(MenuChoice::parse("4"), Some(MenuChoice::Exit));
    }

    #[test]
    fn parse_rejects_everything_else() {
        for input in ["0", "5", "9", "01", "1.", "one", "exit", ""] {
            assert_eq!(MenuChoice::parse(input), None, "input: {input:?}");
        }
    }

    #[test]
    fn exit_is_the_only_terminal_transition() {
        for input in ["1", "2", "3", "9", "x"] {
            assert_eq!(update(input).next, SessionState::Running, "input: {input:?}");
        }
        assert_eq!(update("4").next, SessionState::Exited(ExitReason::MenuExit));
    }

    #[test]
    fn choices_map_to_effects() {
        assert_eq!(update("1").effect, Effect::RecordExpense);
        assert_eq!(update("2").effect, Effect::ShowListing);
        assert_eq!(update("3").effect, Effect::ShowSummary);
        assert_eq!(update("4").effect, Effect::SayGoodbye);
        assert_eq!(update("9").effect, Effect::RejectChoice);
    }

    #[test]
    fn menu_lists_four_options() {
        assert!(MENU.contains("1. ➕ Add Expense"));
        assert!(MENU.contains("2. 📋 View All Expenses"));
        assert!(MENU.contains("3. 📊 View Summary"));
        assert!(MENU.contains("4. ❌ Exit"));
    }
}
