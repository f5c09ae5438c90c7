//! Application layer: services and use cases
//!
//! This layer turns domain trees into totals, breakdowns and reports.

pub mod error;
pub mod error_ext;
pub mod sample;
pub mod services;

pub use error::{ApplicationError, ApplicationResult};
pub use error_ext::IoResultExt;
pub use sample::{sample_house, HOUSE_TOTAL};
pub use services::{BudgetService, BudgetStats};
