/*
termtree::Tree is a foreign type, so the conversion lives in a local trait
implemented for the budget tree instead of an inherent impl (E0116).
 */
use termtree::Tree;
use tracing::instrument;

use crate::domain::{Part, PriceFormat};

pub trait TreeNodeConvert {
    fn to_tree_string(&self, prices: PriceFormat) -> Tree<String>;
}

impl TreeNodeConvert for Part {
    #[instrument(level = "trace", skip(self), fields(part = %self.name()))]
    fn to_tree_string(&self, prices: PriceFormat) -> Tree<String> {
        let label = format!("{} {}", self.name(), prices.render(self.price()));

        // Recursively construct the children
        let leaves: Vec<_> = self
            .children()
            .iter()
            .map(|c| c.to_tree_string(prices))
            .collect();

        Tree::new(label).with_leaves(leaves)
    }
}
