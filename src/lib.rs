//! Construction budgets: pricing, pagination, and PDF output.
//!
//! The work is split across the workspace crates and wired together here:
//! - [`obra_pricing`] runs the adjustment cascade over the line items
//! - [`obra_layout`] paginates the items into page plans
//! - [`obra_render_lopdf`] writes the plans as PDF
//!
//! [`BudgetGenerator`] drives the three steps and [`BudgetFile`] is the JSON input
//! format used by the command line tool.

mod error;
mod generator;
mod input;
pub mod template;

pub use error::PipelineError;
pub use generator::{BudgetGenerator, GenerationReport};
pub use input::{BudgetFile, BuilderInfo, ClientInfo};

pub use obra_layout::{
    AssetWarning, PageKind, PagePlan, PaginatedReport, ReportLayout, ReportMetadata,
};
pub use obra_pricing::{AdjustmentParameters, TotalsBreakdown};
pub use obra_types::{LineItem, PageSize, ValidationError};
