use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One priced row of work in a budget.
///
/// Quantities and prices are plain decimals; validation of their ranges is done by the
/// pricing engine so that a caller gets a precise field name back.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LineItem {
    /// Stable identifier, e.g. `"EST-001"`.
    pub code: String,
    pub description: String,
    /// Unit of measure (`m²`, `m³`, `ud`, ...).
    pub unit: String,
    pub unit_price: Decimal,
    #[serde(default)]
    pub quantity: Decimal,
}

impl LineItem {
    pub fn new(
        code: impl Into<String>,
        description: impl Into<String>,
        unit: impl Into<String>,
        unit_price: Decimal,
    ) -> Self {
        Self {
            code: code.into(),
            description: description.into(),
            unit: unit.into(),
            unit_price,
            quantity: Decimal::ZERO,
        }
    }

    pub fn with_quantity(mut self, quantity: Decimal) -> Self {
        self.quantity = quantity;
        self
    }

    /// `quantity × unit_price`, recomputed on every call.
    ///
    /// Returns `None` if the product does not fit in a `Decimal`.
    pub fn checked_subtotal(&self) -> Option<Decimal> {
        self.quantity.checked_mul(self.unit_price)
    }
}
