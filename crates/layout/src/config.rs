use crate::elements::ASCENT_RATIO;
use crate::LayoutError;
use obra_types::{Margins, PageSize, Rect};
use serde::{Deserialize, Serialize};

/// Widths, in points, of the six fixed report columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ColumnWidths {
    pub code: f32,
    pub description: f32,
    pub unit: f32,
    pub quantity: f32,
    pub unit_price: f32,
    pub subtotal: f32,
}

impl Default for ColumnWidths {
    fn default() -> Self {
        Self {
            code: 60.0,
            description: 220.0,
            unit: 50.0,
            quantity: 50.0,
            unit_price: 80.0,
            subtotal: 80.0,
        }
    }
}

impl ColumnWidths {
    pub fn as_array(&self) -> [f32; 6] {
        [
            self.code,
            self.description,
            self.unit,
            self.quantity,
            self.unit_price,
            self.subtotal,
        ]
    }

    pub fn total(&self) -> f32 {
        self.as_array().iter().sum()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FontSizes {
    pub title: f32,
    pub meta: f32,
    pub table_header: f32,
    pub row: f32,
    pub totals: f32,
    pub footer: f32,
}

impl Default for FontSizes {
    fn default() -> Self {
        Self {
            title: 14.0,
            meta: 10.0,
            table_header: 9.0,
            row: 8.0,
            totals: 10.0,
            footer: 9.0,
        }
    }
}

/// Where the optional logo goes on the first page. `right_offset` is measured from the
/// right page edge to the left side of the box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LogoBox {
    pub right_offset: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Default for LogoBox {
    fn default() -> Self {
        Self {
            right_offset: 140.0,
            top: 40.0,
            width: 120.0,
            height: 60.0,
        }
    }
}

/// Geometry of the printed budget. All lengths are in points with `y` growing down
/// from the top edge of the page.
///
/// The defaults reproduce the A4 budget sheet: a title block on the first page, a six
/// column table starting at the same height on every page, and a footer reserved at
/// the bottom.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ReportLayout {
    pub page_size: PageSize,
    pub margins: Margins,
    /// Top of the column header band, on every page.
    pub table_top: f32,
    pub table_header_height: f32,
    /// Space between the header rule and the first row.
    pub body_gap: f32,
    pub row_height: f32,
    /// Height kept free for the footer. No row or totals block may cross
    /// `page_height - footer_reserve`.
    pub footer_reserve: f32,
    pub totals_gap: f32,
    pub totals_rule_gap: f32,
    pub rule_thickness: f32,
    pub columns: ColumnWidths,
    pub fonts: FontSizes,
    pub logo: LogoBox,
    /// Descriptions longer than this many characters are truncated.
    pub description_budget: usize,
    /// Characters kept before the ellipsis when a description is truncated.
    pub description_keep: usize,
    /// Baselines of the three footer lines, measured up from the bottom edge.
    pub footer_offsets: [f32; 3],
    pub currency: String,
}

impl Default for ReportLayout {
    fn default() -> Self {
        Self {
            page_size: PageSize::A4,
            margins: Margins {
                top: 40.0,
                right: 15.0,
                bottom: 20.0,
                left: 40.0,
            },
            table_top: 110.0,
            table_header_height: 14.0,
            body_gap: 4.0,
            row_height: 12.0,
            footer_reserve: 110.0,
            totals_gap: 10.0,
            totals_rule_gap: 6.0,
            rule_thickness: 0.5,
            columns: ColumnWidths::default(),
            fonts: FontSizes::default(),
            logo: LogoBox::default(),
            description_budget: 58,
            description_keep: 55,
            footer_offsets: [60.0, 46.0, 32.0],
            currency: "USD".to_string(),
        }
    }
}

impl ReportLayout {
    pub fn for_page(page_size: PageSize) -> Self {
        Self {
            page_size,
            ..Self::default()
        }
    }

    pub fn page_width(&self) -> f32 {
        self.page_size.width()
    }

    pub fn page_height(&self) -> f32 {
        self.page_size.height()
    }

    pub fn usable_width(&self) -> f32 {
        self.page_width() - self.margins.left - self.margins.right
    }

    /// Y of the rule under the column headers.
    pub fn header_rule_y(&self) -> f32 {
        self.table_top + self.table_header_height
    }

    /// Y where the first row of every page starts.
    pub fn body_top(&self) -> f32 {
        self.header_rule_y() + self.body_gap
    }

    /// Lowest Y any row or the totals block may reach.
    pub fn body_bottom(&self) -> f32 {
        self.page_height() - self.footer_reserve
    }

    pub fn totals_height(&self) -> f32 {
        self.totals_gap + self.totals_rule_gap + self.fonts.totals * 1.2
    }

    /// Rows that fit between [`Self::body_top`] and [`Self::body_bottom`].
    pub fn rows_per_page(&self) -> usize {
        let available = (self.body_bottom() - self.body_top()).max(0.0);
        if self.row_height <= 0.0 {
            return 0;
        }
        // Small epsilon so an exact fit is not lost to float noise.
        ((available + 0.01) / self.row_height).floor() as usize
    }

    /// Tops of the title, client and date lines on the first page.
    pub fn title_line_tops(&self) -> [f32; 3] {
        let title = self.margins.top;
        let client = title + self.fonts.title * 1.6;
        let date = client + self.fonts.meta * 1.5;
        [title, client, date]
    }

    /// Lowest Y reached by the first-page title block, logo included.
    pub fn title_block_bottom(&self) -> f32 {
        let [_, _, date] = self.title_line_tops();
        (date + self.fonts.meta).max(self.logo.top + self.logo.height)
    }

    /// Top of the text box of a footer line whose baseline sits `offset` above the
    /// bottom edge.
    pub fn footer_line_top(&self, offset: f32) -> f32 {
        self.page_height() - offset - self.fonts.footer * ASCENT_RATIO
    }

    pub fn logo_rect(&self) -> Rect {
        Rect::new(
            self.page_width() - self.logo.right_offset,
            self.logo.top,
            self.logo.width,
            self.logo.height,
        )
    }

    /// Checks the geometry can hold at least one row and the totals block, and that the
    /// title block, table body and footer do not overlap.
    pub fn validate(&self) -> Result<(), LayoutError> {
        let (width, height) = self.page_size.dimensions_pt();
        if width <= 0.0 || height <= 0.0 {
            return Err(LayoutError::InvalidLayout(format!(
                "page size must be positive, got {:.2} x {:.2}",
                width, height
            )));
        }
        if self.row_height <= 0.0 {
            return Err(LayoutError::InvalidLayout(format!(
                "row height must be positive, got {:.2}",
                self.row_height
            )));
        }
        if self.description_keep + crate::columns::ELLIPSIS.chars().count() > self.description_budget {
            return Err(LayoutError::InvalidLayout(format!(
                "description keep length {} plus ellipsis exceeds the budget of {}",
                self.description_keep, self.description_budget
            )));
        }

        if self.title_block_bottom() > self.table_top {
            return Err(LayoutError::InvalidLayout(format!(
                "title block ends at {:.2}, below the table top at {:.2}",
                self.title_block_bottom(),
                self.table_top
            )));
        }
        let highest_footer = self.footer_offsets.iter().copied().fold(f32::MIN, f32::max);
        let footer_height = highest_footer + self.fonts.footer * ASCENT_RATIO;
        if footer_height > self.footer_reserve {
            return Err(LayoutError::InvalidLayout(format!(
                "footer needs {:.2}pt but only {:.2}pt are reserved",
                footer_height, self.footer_reserve
            )));
        }
        let lowest_footer = self.footer_offsets.iter().copied().fold(f32::MAX, f32::min);
        if lowest_footer < self.margins.bottom {
            return Err(LayoutError::InvalidLayout(format!(
                "footer baseline at {:.2}pt is inside the bottom margin of {:.2}pt",
                lowest_footer, self.margins.bottom
            )));
        }

        let table_width = self.columns.total();
        if table_width > self.usable_width() {
            return Err(LayoutError::TableTooWide {
                table: table_width,
                usable: self.usable_width(),
            });
        }

        let available = self.body_bottom() - self.body_top();
        let required = self.row_height.max(self.totals_height());
        if available < required {
            return Err(LayoutError::PageTooSmall {
                available: available.max(0.0),
                required,
            });
        }
        Ok(())
    }
}
