//! expense-tracker: Record expenses by category and review them.

pub mod error;
pub mod input;
pub mod menu;
pub mod report;
pub mod session;
pub mod store;
pub mod types;
