//! Pagination of a priced budget into fixed-size page plans.
//!
//! [`paginate`] walks the line items through a small state machine and returns one
//! immutable [`PagePlan`] per printed page. Plans hold absolute positions only, so any
//! renderer able to place text, draw a rule, and scale an image can print them.

use thiserror::Error;

pub use obra_types::ValidationError;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Page body has {available:.2}pt of height but at least {required:.2}pt is needed.")]
    PageTooSmall { available: f32, required: f32 },
    #[error("Table is {table:.2}pt wide but the usable page width is {usable:.2}pt.")]
    TableTooWide { table: f32, usable: f32 },
    #[error("Invalid layout: {0}")]
    InvalidLayout(String),
}

pub mod algorithms;
pub mod columns;
pub mod config;
pub mod fonts;
pub mod logo;
pub mod metadata;
pub mod output;

mod elements;
mod paginator;

pub use self::columns::{truncate_description, Column, ColumnLayout};
pub use self::config::ReportLayout;
pub use self::elements::{
    ImageElement, LayoutElement, PositionedElement, RuleElement, TextElement, ASCENT_RATIO,
};
pub use self::fonts::{win_ansi_code, FontFace};
pub use self::logo::{decode_logo, DecodedImage};
pub use self::metadata::ReportMetadata;
pub use self::output::{AssetWarning, PageKind, PagePlan, PaginatedReport};
pub use self::paginator::{paginate, REPORT_TITLE};

pub use obra_types::geometry::{Rect, Size};
pub use obra_types::{LineItem, Margins, PageSize};

#[cfg(test)]
mod columns_test;
#[cfg(test)]
mod test_utils;
