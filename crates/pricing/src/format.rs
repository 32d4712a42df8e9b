//! Presentation helpers for money values.
use rust_decimal::{Decimal, RoundingStrategy};

pub const DECIMAL_PLACES: u32 = 2;

/// Rounds to cents, midpoint away from zero (`120.175` → `120.18`).
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Two fixed decimals, no grouping: `1234.5` → `"1234.50"`.
pub fn format_amount(value: Decimal) -> String {
    let mut rounded = round_money(value);
    rounded.rescale(DECIMAL_PLACES);
    rounded.to_string()
}

/// Two fixed decimals with thousands separators: `1234567.891` → `"1,234,567.89"`.
pub fn format_grouped(value: Decimal) -> String {
    let plain = format_amount(value);
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = unsigned.split_once('.').unwrap_or((unsigned, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    format!("{}{}.{}", sign, grouped, frac_part)
}
