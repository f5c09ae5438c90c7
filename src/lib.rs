//! Construction budgets as trees of priced parts.
//!
//! A [`Part`](domain::Part) is either a simple part with a fixed price or a
//! composite whose price is the sum of its children. The application layer
//! renders totals, indented breakdowns and tree views; the CLI wires them to
//! the sample house budget.

pub mod application;
pub mod cli;
pub mod config;
pub mod domain;
pub mod exitcode;
pub mod tree_traits;
pub mod util;
