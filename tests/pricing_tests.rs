use obra::{AdjustmentParameters, BudgetFile, BudgetGenerator, LineItem, PipelineError};
use obra_pricing::round_money;
use rust_decimal_macros::dec;

#[test]
fn test_concrete_cascade_through_the_generator() {
    let generator = BudgetGenerator::default();
    let items = vec![LineItem::new("A", "Item", "ud", dec!(100.00)).with_quantity(dec!(2))];
    let params = AdjustmentParameters::new(dec!(10), dec!(5), dec!(15), dec!(50));
    let totals = generator.totals(&items, &params).unwrap();

    assert_eq!(totals.base, dec!(200.00));
    assert_eq!(totals.indirects, dec!(20.00));
    assert_eq!(totals.subtotal, dec!(220.00));
    assert_eq!(totals.discount, dec!(11.00));
    assert_eq!(totals.net, dec!(209.00));
    assert_eq!(totals.vat, dec!(31.35));
    assert_eq!(totals.total, dec!(240.35));
    assert_eq!(totals.advance, dec!(120.175));
    assert_eq!(round_money(totals.advance), dec!(120.18));
}

#[test]
fn test_starter_budget_totals_are_zero() {
    let budget = BudgetFile::starter("Casa");
    let totals = BudgetGenerator::default()
        .totals(&budget.items, &budget.adjustments)
        .unwrap();
    assert!(totals.summary().iter().all(|(_, amount)| amount.is_zero()));
}

#[test]
fn test_out_of_range_percentage_names_the_field() {
    let params = AdjustmentParameters::new(dec!(0), dec!(101), dec!(15), dec!(0));
    let err = BudgetGenerator::default().totals(&[], &params).unwrap_err();
    assert!(matches!(err, PipelineError::Validation(_)));
    assert_eq!(err.field(), Some("discountPct"));
}

#[test]
fn test_budget_file_drives_totals() {
    let budget = BudgetFile::from_json(
        r#"{
            "name": "Bodega",
            "client": { "name": "Luis" },
            "builder": { "name": "Obras SA", "phone": "555" },
            "adjustments": { "indirectPct": 10, "vatPct": 0 },
            "items": [
                { "code": "MAN-001", "description": "Muro", "unit": "m²", "unitPrice": 18.5, "quantity": 10 }
            ]
        }"#,
    )
    .unwrap();
    let totals = BudgetGenerator::default()
        .totals(&budget.items, &budget.adjustments)
        .unwrap();
    assert_eq!(totals.base, dec!(185));
    assert_eq!(totals.total, dec!(203.5));
    assert_eq!(totals.advance, dec!(0));
}
