use crate::domain::part::Part;

/// Depth-first pre-order iterator over a part tree.
///
/// Yields `(depth, part)` with the starting part at depth 0. Children are
/// visited left to right, i.e. in the order they were added.
pub struct PreOrder<'a> {
    stack: Vec<(usize, &'a Part)>,
}

impl<'a> PreOrder<'a> {
    pub(crate) fn new(root: &'a Part) -> Self {
        Self {
            stack: vec![(0, root)],
        }
    }
}

impl<'a> Iterator for PreOrder<'a> {
    type Item = (usize, &'a Part);

    fn next(&mut self) -> Option<Self::Item> {
        let (depth, part) = self.stack.pop()?;
        // Push children in reverse order for left-to-right traversal
        for child in part.children().iter().rev() {
            self.stack.push((depth + 1, child));
        }
        Some((depth, part))
    }
}

#[cfg(test)]
mod tests {
    use crate::domain::{CompositePart, Part, SimplePart};

    #[test]
    fn given_nested_tree_when_iterating_then_parents_precede_children() {
        let mut inner = CompositePart::new("b");
        inner.add_part(SimplePart::new("b1", 1.0));
        inner.add_part(SimplePart::new("b2", 2.0));
        let mut root = CompositePart::new("root");
        root.add_part(SimplePart::new("a", 1.0));
        root.add_part(inner);
        root.add_part(SimplePart::new("c", 3.0));
        let root = Part::from(root);

        let visited: Vec<(usize, &str)> = root.iter().map(|(d, p)| (d, p.name())).collect();
        assert_eq!(
            visited,
            vec![(0, "root"), (1, "a"), (1, "b"), (2, "b1"), (2, "b2"), (1, "c")]
        );
    }

    #[test]
    fn given_single_leaf_when_iterating_then_yields_once() {
        let leaf = Part::simple("cables", 500.0);
        assert_eq!(leaf.iter().count(), 1);
    }
}
