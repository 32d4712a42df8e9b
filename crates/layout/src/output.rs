//! Output types of pagination.
//!
//! A [`PaginatedReport`] holds the finished [`PagePlan`]s in print order, the decoded
//! resources they reference, and any non-fatal warnings raised while building them.

use crate::logo::DecodedImage;
use crate::{LayoutElement, PositionedElement};
use obra_types::Size;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageKind {
    /// Carries the title block and the logo.
    First,
    /// Repeats the table header and footer only.
    Continuation,
}

/// Everything to draw on one page. Built once by the paginator and read-only afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct PagePlan {
    number: usize,
    kind: PageKind,
    size: Size,
    elements: Vec<PositionedElement>,
    row_count: usize,
}

impl PagePlan {
    pub(crate) fn new(
        number: usize,
        kind: PageKind,
        size: Size,
        elements: Vec<PositionedElement>,
        row_count: usize,
    ) -> Self {
        Self {
            number,
            kind,
            size,
            elements,
            row_count,
        }
    }

    /// 1-based page number.
    pub fn number(&self) -> usize {
        self.number
    }

    pub fn kind(&self) -> PageKind {
        self.kind
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn elements(&self) -> &[PositionedElement] {
        &self.elements
    }

    /// Number of item rows placed on this page.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.elements.iter().filter_map(|e| e.as_text()).map(|t| t.content.as_str())
    }

    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().any(|t| t.contains(needle))
    }

    pub fn images(&self) -> impl Iterator<Item = &PositionedElement> {
        self.elements
            .iter()
            .filter(|e| matches!(e.element, LayoutElement::Image(_)))
    }
}

/// A problem with an optional input that was skipped instead of failing the report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssetWarning {
    pub asset: String,
    pub message: String,
}

impl AssetWarning {
    pub fn new(asset: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            asset: asset.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for AssetWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.asset, self.message)
    }
}

#[derive(Debug, Clone)]
pub struct PaginatedReport {
    pub pages: Vec<PagePlan>,
    /// Decoded images referenced by [`crate::ImageElement::key`].
    pub resources: HashMap<String, Arc<DecodedImage>>,
    pub warnings: Vec<AssetWarning>,
}

impl PaginatedReport {
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }
}
