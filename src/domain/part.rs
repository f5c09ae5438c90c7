//! Budget parts: priced leaves and composites that aggregate their children.

use std::io::{self, Write};

use crate::domain::error::DomainError;
use crate::domain::iter::PreOrder;
use crate::domain::render::BreakdownStyle;

/// Leaf of a budget tree with a fixed price.
#[derive(Debug, Clone, PartialEq)]
pub struct SimplePart {
    name: String,
    price: f64,
}

impl SimplePart {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn price(&self) -> f64 {
        self.price
    }
}

/// Budget node owning an ordered list of child parts.
///
/// The price is never stored: every call to [`CompositePart::price`] walks
/// the subtree again, so additions are reflected immediately.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompositePart {
    name: String,
    children: Vec<Part>,
}

impl CompositePart {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            children: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// Append a child at the end. No duplicate or size checks are made.
    pub fn add_part(&mut self, part: impl Into<Part>) {
        self.children.push(part.into());
    }

    pub fn children(&self) -> &[Part] {
        &self.children
    }

    /// Sum of the children's prices in insertion order.
    pub fn price(&self) -> f64 {
        // fold from +0.0: an empty composite must render as "0.0", not "-0.0"
        self.children.iter().fold(0.0, |acc, child| acc + child.price())
    }
}

/// A node in the budget tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Part {
    Simple(SimplePart),
    Composite(CompositePart),
}

impl From<SimplePart> for Part {
    fn from(part: SimplePart) -> Self {
        Part::Simple(part)
    }
}

impl From<CompositePart> for Part {
    fn from(part: CompositePart) -> Self {
        Part::Composite(part)
    }
}

impl Part {
    pub fn simple(name: impl Into<String>, price: f64) -> Self {
        Part::Simple(SimplePart::new(name, price))
    }

    pub fn composite(name: impl Into<String>) -> Self {
        Part::Composite(CompositePart::new(name))
    }

    pub fn name(&self) -> &str {
        match self {
            Part::Simple(p) => p.name(),
            Part::Composite(p) => p.name(),
        }
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        match self {
            Part::Simple(p) => p.set_name(name),
            Part::Composite(p) => p.set_name(name),
        }
    }

    pub fn price(&self) -> f64 {
        match self {
            Part::Simple(p) => p.price(),
            Part::Composite(p) => p.price(),
        }
    }

    /// Direct children; always empty for a simple part.
    pub fn children(&self) -> &[Part] {
        match self {
            Part::Simple(_) => &[],
            Part::Composite(p) => p.children(),
        }
    }

    /// True for simple parts. An empty composite is not a leaf: it carries
    /// no price of its own.
    pub fn is_leaf(&self) -> bool {
        matches!(self, Part::Simple(_))
    }

    /// Depth-first pre-order walk yielding `(depth, part)`, root at depth 0.
    pub fn iter(&self) -> PreOrder<'_> {
        PreOrder::new(self)
    }

    /// Number of levels in the tree, counting this node as level 1.
    pub fn depth(&self) -> usize {
        1 + self
            .children()
            .iter()
            .map(Part::depth)
            .max()
            .unwrap_or(0)
    }

    pub fn node_count(&self) -> usize {
        self.iter().count()
    }

    /// Simple parts in pre-order.
    pub fn leaves(&self) -> Vec<&Part> {
        self.iter()
            .map(|(_, part)| part)
            .filter(|part| part.is_leaf())
            .collect()
    }

    /// Write the indented breakdown of this subtree.
    ///
    /// One line per node, `"{indent}{name} {price}"`, parents before their
    /// children and children in insertion order. Each level below this one
    /// appends `style.indent_unit` to `indent`.
    pub fn write_budget<W: Write + ?Sized>(
        &self,
        out: &mut W,
        indent: &str,
        style: &BreakdownStyle,
    ) -> io::Result<()> {
        writeln!(
            out,
            "{}{} {}",
            indent,
            self.name(),
            style.prices.render(self.price())
        )?;
        if let Part::Composite(composite) = self {
            let child_indent = format!("{}{}", indent, style.indent_unit);
            for child in composite.children() {
                child.write_budget(out, &child_indent, style)?;
            }
        }
        Ok(())
    }

    /// Print the breakdown to stdout with one tab per level.
    pub fn print_budget(&self, indent: &str) -> io::Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_budget(&mut out, indent, &BreakdownStyle::default())
    }

    /// Check the whole tree for empty names and negative or non-finite prices.
    ///
    /// Construction never calls this; parts are accepted as given.
    pub fn validate(&self) -> Result<(), DomainError> {
        let mut path = Vec::new();
        self.validate_at(&mut path)
    }

    fn validate_at<'a>(&'a self, path: &mut Vec<&'a str>) -> Result<(), DomainError> {
        path.push(self.name());
        let location = || path.join("/");

        if self.name().trim().is_empty() {
            return Err(DomainError::EmptyName { path: location() });
        }
        if let Part::Simple(simple) = self {
            let price = simple.price();
            if !price.is_finite() {
                return Err(DomainError::NonFinitePrice {
                    path: location(),
                    price,
                });
            }
            if price < 0.0 {
                return Err(DomainError::NegativePrice {
                    path: location(),
                    price,
                });
            }
        }
        for child in self.children() {
            child.validate_at(path)?;
        }
        path.pop();
        Ok(())
    }
}
