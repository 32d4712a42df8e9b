//! The six table columns and description truncation.

use crate::config::ColumnWidths;
use std::borrow::Cow;

pub const ELLIPSIS: &str = "...";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Column {
    Code,
    Description,
    Unit,
    Quantity,
    UnitPrice,
    Subtotal,
}

impl Column {
    pub const ALL: [Column; 6] = [
        Column::Code,
        Column::Description,
        Column::Unit,
        Column::Quantity,
        Column::UnitPrice,
        Column::Subtotal,
    ];

    /// Header text for this column. Money columns carry the currency code.
    pub fn header(self, currency: &str) -> Cow<'static, str> {
        match self {
            Column::Code => Cow::Borrowed("Código"),
            Column::Description => Cow::Borrowed("Descripción"),
            Column::Unit => Cow::Borrowed("Unidad"),
            Column::Quantity => Cow::Borrowed("Cant."),
            Column::UnitPrice => Cow::Owned(format!("P.Unit ({currency})")),
            Column::Subtotal => Cow::Owned(format!("Subtotal ({currency})")),
        }
    }
}

/// Resolved x positions of the columns, starting at the left margin.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnLayout {
    origin: f32,
    offsets: [f32; 6],
    widths: [f32; 6],
}

impl ColumnLayout {
    pub fn new(origin: f32, widths: &ColumnWidths) -> Self {
        let widths = widths.as_array();
        let mut offsets = [0.0; 6];
        let mut x = origin;
        for (offset, width) in offsets.iter_mut().zip(widths) {
            *offset = x;
            x += width;
        }
        Self {
            origin,
            offsets,
            widths,
        }
    }

    pub fn x(&self, column: Column) -> f32 {
        self.offsets[column as usize]
    }

    pub fn width(&self, column: Column) -> f32 {
        self.widths[column as usize]
    }

    pub fn left(&self) -> f32 {
        self.origin
    }

    pub fn table_width(&self) -> f32 {
        self.widths.iter().sum()
    }

    pub fn right(&self) -> f32 {
        self.origin + self.table_width()
    }
}

/// Cuts `text` to its first `keep` characters followed by [`ELLIPSIS`] when it is longer
/// than `budget` characters. Counts `char`s, so a multi-byte character is never split.
///
/// With `keep + ELLIPSIS.len() <= budget` the result is itself within budget, so applying
/// the function again returns it unchanged.
pub fn truncate_description(text: &str, budget: usize, keep: usize) -> Cow<'_, str> {
    if text.chars().count() <= budget {
        return Cow::Borrowed(text);
    }
    let cut = text
        .char_indices()
        .nth(keep)
        .map(|(idx, _)| idx)
        .unwrap_or(text.len());
    let mut truncated = String::with_capacity(cut + ELLIPSIS.len());
    truncated.push_str(&text[..cut]);
    truncated.push_str(ELLIPSIS);
    Cow::Owned(truncated)
}
