//! Application services

pub mod budget;

pub use budget::{BudgetService, BudgetStats, TOTAL_LABEL};
