//! How prices and indentation are rendered in a breakdown.

/// Textual form of a price.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PriceFormat {
    /// Shortest representation that round-trips, always with a fractional
    /// part: `75000.0`, `0.5`.
    #[default]
    Shortest,
    /// Fixed number of decimals: `75000.00` for `Fixed(2)`.
    Fixed(usize),
}

impl PriceFormat {
    pub fn render(self, price: f64) -> String {
        match self {
            PriceFormat::Shortest => format!("{:?}", price),
            PriceFormat::Fixed(decimals) => format!("{:.*}", decimals, price),
        }
    }
}

/// Layout of an indented budget breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownStyle {
    /// Appended once per level below the starting indent
    pub indent_unit: String,
    pub prices: PriceFormat,
}

impl Default for BreakdownStyle {
    fn default() -> Self {
        Self {
            indent_unit: "\t".to_string(),
            prices: PriceFormat::Shortest,
        }
    }
}

/// Render a price the way the breakdown does by default.
pub fn format_price(price: f64) -> String {
    PriceFormat::Shortest.render(price)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(75000.0, "75000.0")]
    #[case(500.0, "500.0")]
    #[case(0.5, "0.5")]
    #[case(0.0, "0.0")]
    fn given_price_when_formatting_shortest_then_keeps_fraction(
        #[case] price: f64,
        #[case] expected: &str,
    ) {
        assert_eq!(format_price(price), expected);
    }

    #[test]
    fn given_fixed_decimals_when_formatting_then_pads() {
        assert_eq!(PriceFormat::Fixed(2).render(4000.0), "4000.00");
        assert_eq!(PriceFormat::Fixed(0).render(4000.0), "4000");
    }
}
