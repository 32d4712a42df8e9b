use crate::AdjustmentParameters;
use crate::format::round_money;
use obra_types::{LineItem, ValidationError};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The itemized result of the pricing cascade.
///
/// Values are kept at full precision. Use [`TotalsBreakdown::rounded`] or the
/// [`crate::format`] helpers for display.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct TotalsBreakdown {
    pub base: Decimal,
    pub indirects: Decimal,
    pub subtotal: Decimal,
    pub discount: Decimal,
    pub net: Decimal,
    pub vat: Decimal,
    pub total: Decimal,
    pub advance: Decimal,
}

impl TotalsBreakdown {
    /// A copy with every field rounded to cents, midpoint away from zero.
    pub fn rounded(&self) -> Self {
        Self {
            base: round_money(self.base),
            indirects: round_money(self.indirects),
            subtotal: round_money(self.subtotal),
            discount: round_money(self.discount),
            net: round_money(self.net),
            vat: round_money(self.vat),
            total: round_money(self.total),
            advance: round_money(self.advance),
        }
    }

    /// Labelled rows in cascade order, as shown on the budget screen.
    pub fn summary(&self) -> [(&'static str, Decimal); 8] {
        [
            ("Base", self.base),
            ("Indirectos", self.indirects),
            ("Subtotal", self.subtotal),
            ("Descuento", self.discount),
            ("Neto", self.net),
            ("IVA", self.vat),
            ("TOTAL", self.total),
            ("Anticipo", self.advance),
        ]
    }
}

/// Rejects negative quantities or unit prices, naming the item by index.
pub fn validate_items(items: &[LineItem]) -> Result<(), ValidationError> {
    for (i, item) in items.iter().enumerate() {
        if item.quantity < Decimal::ZERO {
            return Err(ValidationError::new(
                format!("items[{}].quantity", i),
                format!("quantity must not be negative, got {}", item.quantity),
            ));
        }
        if item.unit_price < Decimal::ZERO {
            return Err(ValidationError::new(
                format!("items[{}].unitPrice", i),
                format!("unit price must not be negative, got {}", item.unit_price),
            ));
        }
    }
    Ok(())
}

/// Sum of `quantity × unit_price` over all items.
///
/// Items are expected to have passed [`validate_items`]; only overflow is reported.
pub fn base_amount(items: &[LineItem]) -> Result<Decimal, ValidationError> {
    items.iter().enumerate().try_fold(Decimal::ZERO, |acc, (i, item)| {
        item.checked_subtotal()
            .and_then(|subtotal| acc.checked_add(subtotal))
            .ok_or_else(|| overflow(format!("items[{}].quantity", i)))
    })
}

/// Runs the pricing cascade.
///
/// Inputs are validated first and never clamped: a negative number or a percentage
/// outside `[0, 100]` yields a [`ValidationError`] naming the field. An empty item list
/// (or all-zero quantities) produces an all-zero breakdown.
pub fn compute_totals(
    items: &[LineItem],
    params: &AdjustmentParameters,
) -> Result<TotalsBreakdown, ValidationError> {
    validate_items(items)?;
    params.validate()?;

    let base = base_amount(items)?;
    let indirects = percent_of(base, params.indirect_pct, "indirectPct")?;
    let subtotal = base
        .checked_add(indirects)
        .ok_or_else(|| overflow("indirectPct"))?;
    let discount = percent_of(subtotal, params.discount_pct, "discountPct")?;
    let net = subtotal - discount;
    let vat = percent_of(net, params.vat_pct, "vatPct")?;
    let total = net.checked_add(vat).ok_or_else(|| overflow("vatPct"))?;
    let advance = percent_of(total, params.advance_pct, "advancePct")?;

    log::debug!(
        "Computed totals for {} items: base={} total={}",
        items.len(),
        base,
        total
    );

    Ok(TotalsBreakdown {
        base,
        indirects,
        subtotal,
        discount,
        net,
        vat,
        total,
        advance,
    })
}

fn percent_of(amount: Decimal, pct: Decimal, field: &str) -> Result<Decimal, ValidationError> {
    amount
        .checked_mul(pct)
        .and_then(|v| v.checked_div(Decimal::ONE_HUNDRED))
        .ok_or_else(|| overflow(field))
}

fn overflow(field: impl Into<String>) -> ValidationError {
    ValidationError::new(field, "amount exceeds the representable decimal range")
}
