//! The sample house budget.

use crate::domain::{BudgetBuilder, Part};

/// Total of [`sample_house`].
pub const HOUSE_TOTAL: f64 = 75000.0;

/// Build the fixed house budget: plot, structure and interior.
pub fn sample_house() -> Part {
    let finca = BudgetBuilder::new("finca")
        .simple("Cierre finca", 4000.0)
        .simple("jardín", 1000.0)
        .build();

    let estructura = BudgetBuilder::new("estructura")
        .simple("tejado", 10000.0)
        .simple("alturas", 10000.0)
        .simple("sótano", 10000.0)
        .build();

    let habitaciones = BudgetBuilder::new("habitaciones")
        .simple("mobiliario", 20000.0)
        .simple("pintura", 10000.0)
        .build();

    let electricidad = BudgetBuilder::new("electricidad")
        .simple("cables", 500.0)
        .simple("operadores", 500.0)
        .build();

    let calefaccion = BudgetBuilder::new("calefacción")
        .simple("caldera", 4000.0)
        .simple("radiadores", 2000.0)
        .build();

    let fontaneria = BudgetBuilder::new("fontanería")
        .simple("tuberías", 3000.0)
        .part(calefaccion)
        .build();

    let interior = BudgetBuilder::new("interior")
        .part(habitaciones)
        .part(electricidad)
        .part(fontaneria)
        .build();

    BudgetBuilder::new("Casa")
        .part(finca)
        .part(estructura)
        .part(interior)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn given_sample_house_when_pricing_then_matches_total() {
        assert_eq!(sample_house().price(), HOUSE_TOTAL);
    }

    #[test]
    fn given_sample_house_when_counting_then_twelve_leaves_in_twenty_nodes() {
        let house = sample_house();
        assert_eq!(house.node_count(), 20);
        assert_eq!(house.leaves().len(), 12);
        assert_eq!(house.depth(), 5);
    }
}
