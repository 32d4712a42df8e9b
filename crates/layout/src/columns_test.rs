use crate::columns::{truncate_description, Column, ColumnLayout, ELLIPSIS};
use crate::config::ColumnWidths;

#[test]
fn test_description_at_budget_is_kept() {
    let text = "a".repeat(58);
    let result = truncate_description(&text, 58, 55);
    assert_eq!(result, text.as_str());
}

#[test]
fn test_description_over_budget_is_cut_with_ellipsis() {
    let text = "b".repeat(59);
    let result = truncate_description(&text, 58, 55);
    assert!(result.ends_with(ELLIPSIS));
    assert_eq!(result.chars().count(), 58);
    assert_eq!(&result[..55], &text[..55]);
}

#[test]
fn test_truncation_is_idempotent() {
    let text = "Cimentación corrida de hormigón ciclópeo con piedra bola y mortero";
    let once = truncate_description(text, 58, 55).into_owned();
    let twice = truncate_description(&once, 58, 55);
    assert_eq!(once, twice);
}

#[test]
fn test_truncation_respects_multibyte_characters() {
    let text = "ñ".repeat(70);
    let result = truncate_description(&text, 58, 55);
    assert_eq!(result.chars().filter(|c| *c == 'ñ').count(), 55);
    assert!(result.ends_with(ELLIPSIS));

    let mixed = format!("{}m²{}", "x".repeat(54), "y".repeat(10));
    let result = truncate_description(&mixed, 58, 55);
    assert_eq!(result, format!("{}m...", "x".repeat(54)));
}

#[test]
fn test_columns_are_laid_out_left_to_right() {
    let layout = ColumnLayout::new(40.0, &ColumnWidths::default());
    assert_eq!(layout.x(Column::Code), 40.0);
    assert_eq!(layout.x(Column::Description), 100.0);
    assert_eq!(layout.x(Column::Unit), 320.0);
    assert_eq!(layout.x(Column::Quantity), 370.0);
    assert_eq!(layout.x(Column::UnitPrice), 420.0);
    assert_eq!(layout.x(Column::Subtotal), 500.0);
    assert_eq!(layout.table_width(), 540.0);
    assert_eq!(layout.right(), 580.0);
    assert_eq!(layout.width(Column::Description), 220.0);
}

#[test]
fn test_money_headers_carry_currency() {
    assert_eq!(Column::UnitPrice.header("USD"), "P.Unit (USD)");
    assert_eq!(Column::Subtotal.header("USD"), "Subtotal (USD)");
    assert_eq!(Column::Code.header("USD"), "Código");
}
