//! Domain types for expense-tracker.

// ============================================================================
// PRIMITIVES
// ============================================================================

/// A single recorded expense.
///
/// Only ever built from validated input: the description is non-empty and
/// the amount is non-negative. Amounts too large for `f64` are stored as
/// infinity.
#[derive(Debug, Clone, PartialEq)]
pub struct Expense {
    /// What the money was spent on.
    pub description: String,
    /// How much, in the user's currency.
    pub amount: f64,
}

impl Expense {
    pub fn new(description: impl Into<String>, amount: f64) -> Self {
        Self {
            description: description.into(),
            amount,
        }
    }
}

/// All expenses recorded under one category, in insertion order.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryGroup {
    /// The category label.
    pub name: String,
    /// Never empty: a group is created by its first expense.
    pub expenses: Vec<Expense>,
}

impl CategoryGroup {
    /// Sum of every amount in the group.
    pub fn total(&self) -> f64 {
        self.expenses.iter().map(|e| e.amount).sum()
    }
}

// ============================================================================
// ENUMS
// ============================================================================

/// Why a session ended. Both reasons are successful terminations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitReason {
    /// The user picked "Exit" from the menu.
    MenuExit,
    /// Input ended (Ctrl+D, closed pipe) or was interrupted (Ctrl+C).
    InputClosed,
}

/// Why a candidate amount was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AmountError {
    /// Not a decimal number.
    Malformed,
    /// Parsed, but below zero.
    Negative,
}

impl std::fmt::Display for AmountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AmountError::Malformed => write!(f, "Invalid amount. Please enter a valid number."),
            AmountError::Negative => {
                write!(f, "Amount cannot be negative. Please enter a positive number.")
            }
        }
    }
}

/// Parse a user-entered amount.
///
/// Accepts standard float syntax ("3.5", ".5", "+2", "1e3") with no bound
/// on magnitude: "1e400" overflows to infinity and is accepted. The
/// spelled-out "inf", "infinity" and "nan" are not numbers here. Negative
/// zero is normalized to zero.
pub fn parse_amount(input: &str) -> Result<f64, AmountError> {
    let input = input.trim();
    if is_non_finite_literal(input) {
        return Err(AmountError::Malformed);
    }

    let value: f64 = input.parse().map_err(|_| AmountError::Malformed)?;
    if value < 0.0 {
        return Err(AmountError::Negative);
    }

    // -0.0 + 0.0 == +0.0
    Ok(value + 0.0)
}

/// "inf", "-Infinity", "NaN" and friends, which `f64::from_str` accepts.
fn is_non_finite_literal(input: &str) -> bool {
    let unsigned = input.strip_prefix(['+', '-']).unwrap_or(input);
    ["inf", "infinity", "nan"]
        .iter()
        .any(|word| unsigned.eq_ignore_ascii_case(word))
}

// ============================================================================
// TESTS
// ============================================================================
