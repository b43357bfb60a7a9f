//! In-memory expense storage.
//!
//! Categories and the expenses inside them both keep insertion order;
//! reports depend on it. A category exists only once it holds an expense.

use crate::types::{CategoryGroup, Expense};

/// Category → ordered expenses, owned by a single session.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExpenseStore {
    groups: Vec<CategoryGroup>,
}

impl ExpenseStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an expense to `category`, creating the category on first use.
    pub fn record(&mut self, category: &str, expense: Expense) {
        match self.groups.iter_mut().find(|g| g.name == category) {
            Some(group) => group.expenses.push(expense),
            None => self.groups.push(CategoryGroup {
                name: category.to_string(),
                expenses: vec![expense],
            }),
        }
    }

    /// Categories in the order they were first used.
    pub fn groups(&self) -> &[CategoryGroup] {
        &self.groups
    }

    #[cfg(test)]
    pub(crate) fn group(&self, category: &str) -> Option<&CategoryGroup> {
        self.groups.iter().find(|g| g.name == category)
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of expenses across all categories.
    pub fn len(&self) -> usize {
        self.groups.iter().map(|g| g.expenses.len()).sum()
    }
}

// ============================================================================
// TESTS
// ============================================================================
