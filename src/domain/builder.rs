//! Fluent construction of budget trees.

use crate::domain::part::{CompositePart, Part, SimplePart};

/// Builds a composite part one child at a time.
///
/// ```
/// use budget_tree::domain::BudgetBuilder;
///
/// let finca = BudgetBuilder::new("finca")
///     .simple("Cierre finca", 4000.0)
///     .simple("jardín", 1000.0)
///     .build();
/// assert_eq!(finca.price(), 5000.0);
/// ```
#[derive(Debug, Clone)]
pub struct BudgetBuilder {
    root: CompositePart,
}

impl BudgetBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            root: CompositePart::new(name),
        }
    }

    /// Add a leaf with a fixed price.
    pub fn simple(mut self, name: impl Into<String>, price: f64) -> Self {
        self.root.add_part(SimplePart::new(name, price));
        self
    }

    /// Add an already built part, typically a nested composite.
    pub fn part(mut self, part: impl Into<Part>) -> Self {
        self.root.add_part(part);
        self
    }

    pub fn build(self) -> Part {
        Part::Composite(self.root)
    }
}
