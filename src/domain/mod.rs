//! Domain layer: the budget tree and its invariants
//!
//! This layer is independent of external concerns (no config, no CLI).

pub mod builder;
pub mod error;
pub mod iter;
pub mod part;
pub mod render;

pub use builder::BudgetBuilder;
pub use error::DomainError;
pub use iter::PreOrder;
pub use part::{CompositePart, Part, SimplePart};
pub use render::{format_price, BreakdownStyle, PriceFormat};
