use obra_types::ValidationError;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

fn default_vat_pct() -> Decimal {
    Decimal::from(15)
}

/// The four percentages applied by the pricing cascade, each in `[0, 100]`.
///
/// The type does not impose an order; [`crate::compute_totals`] does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjustmentParameters {
    #[serde(default)]
    pub indirect_pct: Decimal,
    #[serde(default)]
    pub discount_pct: Decimal,
    #[serde(default = "default_vat_pct")]
    pub vat_pct: Decimal,
    #[serde(default)]
    pub advance_pct: Decimal,
}

impl Default for AdjustmentParameters {
    fn default() -> Self {
        Self {
            indirect_pct: Decimal::ZERO,
            discount_pct: Decimal::ZERO,
            vat_pct: default_vat_pct(),
            advance_pct: Decimal::ZERO,
        }
    }
}

impl AdjustmentParameters {
    /// All four percentages set to zero.
    pub fn zero() -> Self {
        Self {
            indirect_pct: Decimal::ZERO,
            discount_pct: Decimal::ZERO,
            vat_pct: Decimal::ZERO,
            advance_pct: Decimal::ZERO,
        }
    }

    pub fn new(
        indirect_pct: Decimal,
        discount_pct: Decimal,
        vat_pct: Decimal,
        advance_pct: Decimal,
    ) -> Self {
        Self {
            indirect_pct,
            discount_pct,
            vat_pct,
            advance_pct,
        }
    }

    /// Checks every percentage is within `[0, 100]`, reporting the first offender by
    /// its serialized name.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let hundred = Decimal::ONE_HUNDRED;
        for (field, value) in [
            ("indirectPct", self.indirect_pct),
            ("discountPct", self.discount_pct),
            ("vatPct", self.vat_pct),
            ("advancePct", self.advance_pct),
        ] {
            if value < Decimal::ZERO || value > hundred {
                return Err(ValidationError::new(
                    field,
                    format!("percentage must be between 0 and 100, got {}", value),
                ));
            }
        }
        Ok(())
    }
}
