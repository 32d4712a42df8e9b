//! Budget pricing: turns line items and four adjustment percentages into a fully
//! itemized [`TotalsBreakdown`].
//!
//! The cascade is a business rule and always runs in the same order:
//! base → indirects → subtotal → discount → net → VAT → total → advance.
//! Every stage keeps full decimal precision; rounding only happens when a value is
//! presented (see [`format`]).

mod adjustments;
pub mod format;
mod totals;

pub use adjustments::AdjustmentParameters;
pub use format::{format_amount, format_grouped, round_money};
pub use totals::{base_amount, compute_totals, validate_items, TotalsBreakdown};

pub use obra_types::{LineItem, ValidationError};
