//! Budget reporting service
//!
//! Totals, indented breakdowns, tree views and leaf listings for a part tree.

use std::io::Write;

use termtree::Tree;
use tracing::{debug, instrument};

use crate::application::{ApplicationResult, IoResultExt};
use crate::config::Settings;
use crate::domain::{BreakdownStyle, Part};
use crate::tree_traits::TreeNodeConvert;

/// Prefix of the summary line preceding a breakdown.
pub const TOTAL_LABEL: &str = "Total house price";

/// Shape of a budget tree.
#[derive(Debug, Clone, PartialEq)]
pub struct BudgetStats {
    pub nodes: usize,
    pub leaves: usize,
    pub composites: usize,
    pub depth: usize,
    pub total: f64,
}

/// Service rendering budgets according to the display settings.
#[derive(Debug, Clone)]
pub struct BudgetService {
    style: BreakdownStyle,
    strict: bool,
}

impl Default for BudgetService {
    fn default() -> Self {
        Self::new(&Settings::default())
    }
}

impl BudgetService {
    /// Create a new budget service.
    pub fn new(settings: &Settings) -> Self {
        Self {
            style: settings.breakdown_style(),
            strict: settings.strict,
        }
    }

    pub fn style(&self) -> &BreakdownStyle {
        &self.style
    }

    pub fn total(&self, part: &Part) -> f64 {
        part.price()
    }

    /// Validate the tree when strict mode is on; no-op otherwise.
    #[instrument(level = "debug", skip(self, part), fields(root = %part.name()))]
    pub fn check(&self, part: &Part) -> ApplicationResult<()> {
        if self.strict {
            part.validate()?;
            debug!("strict validation passed");
        }
        Ok(())
    }

    /// Write `"Total house price: {total}"`.
    pub fn render_total<W: Write + ?Sized>(&self, part: &Part, out: &mut W) -> ApplicationResult<()> {
        self.check(part)?;
        let total = self.total(part);
        writeln!(out, "{}: {}", TOTAL_LABEL, self.style.prices.render(total))
            .with_context("write total")
    }

    /// Write the total line followed by the full indented breakdown.
    #[instrument(level = "debug", skip(self, part, out), fields(root = %part.name()))]
    pub fn render_breakdown<W: Write + ?Sized>(
        &self,
        part: &Part,
        out: &mut W,
    ) -> ApplicationResult<()> {
        self.render_total(part, out)?;
        part.write_budget(out, "", &self.style)
            .with_context("write breakdown")?;
        debug!("breakdown written: {} lines", part.node_count());
        Ok(())
    }

    /// Box-drawing tree view labelled `"{name} {price}"`.
    pub fn render_tree(&self, part: &Part) -> ApplicationResult<Tree<String>> {
        self.check(part)?;
        Ok(part.to_tree_string(self.style.prices))
    }

    /// Every simple part as `"root / ... / leaf price"`, in pre-order.
    pub fn leaf_paths(&self, part: &Part) -> ApplicationResult<Vec<String>> {
        self.check(part)?;
        let mut paths = Vec::new();
        let mut trail = Vec::new();
        self.collect_leaf_paths(part, &mut trail, &mut paths);
        Ok(paths)
    }

    fn collect_leaf_paths<'a>(
        &self,
        part: &'a Part,
        trail: &mut Vec<&'a str>,
        paths: &mut Vec<String>,
    ) {
        trail.push(part.name());
        if part.is_leaf() {
            paths.push(format!(
                "{} {}",
                trail.join(" / "),
                self.style.prices.render(part.price())
            ));
        } else {
            for child in part.children() {
                self.collect_leaf_paths(child, trail, paths);
            }
        }
        trail.pop();
    }

    pub fn stats(&self, part: &Part) -> ApplicationResult<BudgetStats> {
        self.check(part)?;
        let nodes = part.node_count();
        let leaves = part.leaves().len();
        Ok(BudgetStats {
            nodes,
            leaves,
            composites: nodes - leaves,
            depth: part.depth(),
            total: self.total(part),
        })
    }
}
