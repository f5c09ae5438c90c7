//! Domain-level errors (no external dependencies)

use thiserror::Error;

/// Structural problems found by [`Part::validate`](crate::domain::Part::validate).
///
/// `path` names the offending node as a `/`-joined chain of part names,
/// starting at the validated root.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DomainError {
    #[error("part has an empty name: {path}")]
    EmptyName { path: String },

    #[error("negative price {price} for part: {path}")]
    NegativePrice { path: String, price: f64 },

    #[error("price is not a finite number ({price}) for part: {path}")]
    NonFinitePrice { path: String, price: f64 },
}
