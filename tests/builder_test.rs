//! Tests for BudgetBuilder

use budget_tree::domain::{BudgetBuilder, Part};

#[test]
fn given_simple_items_when_building_then_composite_in_insertion_order() {
    // Act
    let finca = BudgetBuilder::new("finca")
        .simple("Cierre finca", 4000.0)
        .simple("jardín", 1000.0)
        .build();

    // Assert
    assert!(matches!(finca, Part::Composite(_)));
    let names: Vec<&str> = finca.children().iter().map(Part::name).collect();
    assert_eq!(names, vec!["Cierre finca", "jardín"]);
    assert_eq!(finca.price(), 5000.0);
}

#[test]
fn given_nested_builders_when_building_then_depth_follows_nesting() {
    let calefaccion = BudgetBuilder::new("calefacción")
        .simple("caldera", 4000.0)
        .simple("radiadores", 2000.0)
        .build();
    let fontaneria = BudgetBuilder::new("fontanería")
        .simple("tuberías", 3000.0)
        .part(calefaccion)
        .build();

    assert_eq!(fontaneria.depth(), 3);
    assert_eq!(fontaneria.price(), 9000.0);
    assert_eq!(fontaneria.leaves().len(), 3);
}

#[test]
fn given_no_children_when_building_then_empty_composite() {
    let part = BudgetBuilder::new("vacío").build();
    assert!(part.children().is_empty());
    assert!(!part.is_leaf());
    assert_eq!(part.price(), 0.0);
}
