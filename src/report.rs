//! Report formatting for recorded expenses.
//!
//! Pure functions — ExpenseStore → String.
//! No I/O, no side effects.

use crate::store::ExpenseStore;

/// Currency symbol prefixed to every amount.
pub const CURRENCY_SYMBOL: &str = "$";

/// Shown by the listing when nothing has been recorded.
pub const NO_EXPENSES_NOTICE: &str = "⚠️  No expenses recorded yet.";

/// Shown by the summary when nothing has been recorded.
pub const NOTHING_TO_SUMMARIZE_NOTICE: &str = "⚠️  No expenses to summarize.";

/// Format an amount with the currency prefix and exactly two decimals.
///
/// Rounds to the nearest cent.
pub fn format_amount(amount: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, amount)
}

/// Every expense, grouped under its category.
pub fn format_listing(store: &ExpenseStore) -> String {
    if store.is_empty() {
        return format!("{}\n\n", NO_EXPENSES_NOTICE);
    }

    let mut out = String::new();
    for group in store.groups() {
        out.push_str(&format!("Category: {}\n", group.name));
        for expense in &group.expenses {
            out.push_str(&format!(
                "  - {}: {}\n",
                expense.description,
                format_amount(expense.amount)
            ));
        }
    }
    out.push('\n');

    out
}

/// One total per category.
pub fn format_summary(store: &ExpenseStore) -> String {
    if store.is_empty() {
        return format!("{}\n\n", NOTHING_TO_SUMMARIZE_NOTICE);
    }

    let mut out = String::new();
    out.push_str("Summary:\n");
    for group in store.groups() {
        out.push_str(&format!("{}: {}\n", group.name, format_amount(group.total())));
    }
    out.push('\n');

    out
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Expense;

    fn sample_store() -> ExpenseStore {
        let mut store = ExpenseStore::new();
        store.record("Food", Expense::new("Coffee", 3.5));
        store.record("Transport", Expense::new("Bus", 2.0));
        store.record("Food", Expense::new("Lunch", 11.25));
        store
    }

    // --- Amount formatting ---

    #[test]
    fn amount_has_two_decimals() {
        assert_eq!(format_amount(3.5), "$3.50");
        assert_eq!(format_amount(2.0), "$2.00");
        assert_eq!(format_amount(0.0), "$0.00");
        assert_eq!(format_amount(1234567.891), "$1234567.89");
    }

    #[test]
    fn amount_rounds_to_nearest_cent() {
        assert_eq!(format_amount(2.675_1), "$2.68");
        assert_eq!(format_amount(0.004), "$0.00");
        assert_eq!(format_amount(9.999), "$10.00");
    }

    #[test]
    fn amount_beyond_f64_range_prints_as_inf() {
        assert_eq!(format_amount(f64::INFINITY), "$inf");
    }

    // --- Listing ---

    #[test]
    fn listing_empty_store() {
        let output = format_listing(&ExpenseStore::new());
        assert!(output.contains("No expenses recorded yet."));
        assert!(!output.contains("Category:"));
    }

    #[test]
    fn listing_single_expense() {
        let mut store = ExpenseStore::new();
        store.record("Food", Expense::new("Coffee", 3.5));

        let output = format_listing(&store);
        assert_eq!(output, "Category: Food\n  - Coffee: $3.50\n\n");
    }

    #[test]
    fn listing_groups_entries_in_insertion_order() {
        let output = format_listing(&sample_store());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(
            lines,
            vec![
                "Category: Food",
                "  - Coffee: $3.50",
                "  - Lunch: $11.25",
                "Category: Transport",
                "  - Bus: $2.00",
                "",
            ]
        );
    }

    #[test]
    fn listing_is_idempotent() {
        let store = sample_store();
        assert_eq!(format_listing(&store), format_listing(&store));
    }

    // --- Summary ---

    #[test]
    fn summary_empty_store() {
        let output = format_summary(&ExpenseStore::new());
        assert!(output.contains("No expenses to summarize."));
        assert!(!output.contains("Summary:"));
    }

    #[test]
    fn summary_totals_each_category() {
        let output = format_summary(&sample_store());
        let lines: Vec<_> = output.lines().collect();

        assert_eq!(lines, vec!["Summary:", "Food: $14.75", "Transport: $2.00", ""]);
    }

    #[test]
    fn summary_total_matches_float_sum() {
        let mut store = ExpenseStore::new();
        store.record("Misc", Expense::new("a", 0.1));
        store.record("Misc", Expense::new("b", 0.2));

        let output = format_summary(&store);
        assert!(output.contains("Misc: $0.30"));
    }

    #[test]
    fn summary_is_idempotent() {
        let store = sample_store();
        assert_eq!(format_summary(&store), format_summary(&store));
    }
}
