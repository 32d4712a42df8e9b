//! The pagination state machine.
//!
//! ```text
//! Start ──► Rows ──► Totals ──► Terminal
//!             ▲ │       │
//!             │ ▼       ▼
//!           PageBreak ◄─┘
//! ```
//!
//! Each page is assembled in a [`PageInProgress`]; finishing it adds the footer and
//! freezes it into a [`PagePlan`].

use crate::algorithms::pagination::check_fit;
use crate::columns::{truncate_description, Column, ColumnLayout};
use crate::config::ReportLayout;
use crate::elements::{ImageElement, LayoutElement, PositionedElement, RuleElement, TextElement};
use crate::fonts::{text_width, FontFace};
use crate::logo::{decode_logo, DecodedImage, LOGO_RESOURCE};
use crate::metadata::ReportMetadata;
use crate::output::{PageKind, PagePlan, PaginatedReport};
use crate::LayoutError;
use obra_pricing::{base_amount, format_amount, validate_items};
use obra_types::{LineItem, Rect, Size};
use rust_decimal::Decimal;
use std::collections::HashMap;
use std::sync::Arc;

pub const REPORT_TITLE: &str = "Presupuesto de Obra";

/// Work that was interrupted by a page break.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Resume {
    Row(usize),
    Totals,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Step {
    Start,
    Rows { next: usize },
    PageBreak { resume: Resume },
    Totals,
    Terminal,
}

struct PageInProgress {
    number: usize,
    kind: PageKind,
    elements: Vec<PositionedElement>,
    cursor_y: f32,
    rows: usize,
}

struct Paginator<'a> {
    items: &'a [LineItem],
    metadata: &'a ReportMetadata,
    layout: &'a ReportLayout,
    columns: ColumnLayout,
    base: Decimal,
    date: String,
    logo: Option<Rect>,
    pages: Vec<PagePlan>,
    page: PageInProgress,
}

/// Lays `items` out into page plans.
///
/// Fails on blank required metadata, invalid item numbers, or a geometry that cannot
/// hold the table. An undecodable logo only adds a warning. Always yields at least one
/// page.
pub fn paginate(
    items: &[LineItem],
    metadata: &ReportMetadata,
    layout: &ReportLayout,
) -> Result<PaginatedReport, LayoutError> {
    metadata.validate()?;
    validate_items(items)?;
    layout.validate()?;
    let base = base_amount(items)?;

    let mut warnings = Vec::new();
    let mut resources = HashMap::new();
    let mut logo = None;
    if let Some(bytes) = &metadata.logo {
        match decode_logo(bytes) {
            Ok(image) => {
                logo = Some(place_logo(&image, layout));
                resources.insert(LOGO_RESOURCE.to_string(), Arc::new(image));
            }
            Err(warning) => {
                log::warn!("Continuing without logo: {}", warning);
                warnings.push(warning);
            }
        }
    }

    let paginator = Paginator {
        items,
        metadata,
        layout,
        columns: ColumnLayout::new(layout.margins.left, &layout.columns),
        base,
        date: metadata.resolved_date().format("%Y-%m-%d").to_string(),
        logo,
        pages: Vec::new(),
        page: PageInProgress {
            number: 1,
            kind: PageKind::First,
            elements: Vec::new(),
            cursor_y: layout.body_top(),
            rows: 0,
        },
    };
    let pages = paginator.run();

    log::info!(
        "Paginated {} items into {} page(s), {} warning(s)",
        items.len(),
        pages.len(),
        warnings.len()
    );
    Ok(PaginatedReport {
        pages,
        resources,
        warnings,
    })
}

fn place_logo(image: &DecodedImage, layout: &ReportLayout) -> Rect {
    let frame = layout.logo_rect();
    let size = image
        .intrinsic_size()
        .scale_to_fit(Size::new(frame.width, frame.height));
    frame.center(size)
}

impl<'a> Paginator<'a> {
    fn run(mut self) -> Vec<PagePlan> {
        let mut step = Step::Start;
        while step != Step::Terminal {
            step = self.advance(step);
        }
        self.pages
    }

    fn advance(&mut self, step: Step) -> Step {
        let items = self.items;
        match step {
            Step::Start => {
                self.emit_title_block();
                self.emit_table_header();
                Step::Rows { next: 0 }
            }
            Step::Rows { next } => match items.get(next) {
                None => Step::Totals,
                Some(item) => {
                    let fit = check_fit(
                        self.page.cursor_y,
                        self.layout.row_height,
                        self.layout.body_bottom(),
                    );
                    if fit.should_break {
                        Step::PageBreak {
                            resume: Resume::Row(next),
                        }
                    } else {
                        self.emit_row(item);
                        Step::Rows { next: next + 1 }
                    }
                }
            },
            Step::PageBreak { resume } => {
                self.break_page();
                match resume {
                    Resume::Row(next) => Step::Rows { next },
                    Resume::Totals => Step::Totals,
                }
            }
            Step::Totals => {
                let fit = check_fit(
                    self.page.cursor_y,
                    self.layout.totals_height(),
                    self.layout.body_bottom(),
                );
                // A fresh page always has room for the totals once the layout validated.
                if fit.should_break && self.page.rows > 0 {
                    Step::PageBreak {
                        resume: Resume::Totals,
                    }
                } else {
                    self.emit_totals();
                    self.finish_page();
                    Step::Terminal
                }
            }
            Step::Terminal => Step::Terminal,
        }
    }

    fn emit_title_block(&mut self) {
        let layout = self.layout;
        let x = layout.margins.left;
        let [title_y, client_y, date_y] = layout.title_line_tops();
        self.push_text(x, title_y, REPORT_TITLE.to_string(), FontFace::Bold, layout.fonts.title);
        let client = format!("Cliente: {}", self.metadata.client_name.trim());
        self.push_text(x, client_y, client, FontFace::Regular, layout.fonts.meta);
        let date = format!("Fecha: {}", self.date);
        self.push_text(x, date_y, date, FontFace::Regular, layout.fonts.meta);

        if let Some(rect) = self.logo {
            self.page.elements.push(PositionedElement {
                x: rect.x,
                y: rect.y,
                width: rect.width,
                height: rect.height,
                element: LayoutElement::Image(ImageElement {
                    key: LOGO_RESOURCE.to_string(),
                }),
            });
        }
    }

    fn emit_table_header(&mut self) {
        let layout = self.layout;
        let font_size = layout.fonts.table_header;
        let y = layout.table_top + (layout.table_header_height - font_size) / 2.0;
        for column in Column::ALL {
            let label = column.header(&layout.currency).into_owned();
            self.push_text(self.columns.x(column), y, label, FontFace::Bold, font_size);
        }
        self.push_rule(layout.header_rule_y());
        self.page.cursor_y = layout.body_top();
    }

    fn emit_row(&mut self, item: &LineItem) {
        let layout = self.layout;
        let font_size = layout.fonts.row;
        let y = self.page.cursor_y + (layout.row_height - font_size) / 2.0;
        // Overflow was ruled out by `base_amount`.
        let subtotal = item.checked_subtotal().unwrap_or_default();
        let description =
            truncate_description(&item.description, layout.description_budget, layout.description_keep);
        let cells = [
            (Column::Code, item.code.clone()),
            (Column::Description, description.into_owned()),
            (Column::Unit, item.unit.clone()),
            (Column::Quantity, format_amount(item.quantity)),
            (Column::UnitPrice, format_amount(item.unit_price)),
            (Column::Subtotal, format_amount(subtotal)),
        ];
        for (column, content) in cells {
            self.push_text(self.columns.x(column), y, content, FontFace::Regular, font_size);
        }
        self.page.cursor_y += layout.row_height;
        self.page.rows += 1;
    }

    fn emit_totals(&mut self) {
        let layout = self.layout;
        self.page.cursor_y += layout.totals_gap;
        self.push_rule(self.page.cursor_y);
        self.page.cursor_y += layout.totals_rule_gap;

        let font_size = layout.fonts.totals;
        let line = format!("Total: {} {}", format_amount(self.base), layout.currency);
        let width = text_width(&line, FontFace::Bold, font_size);
        let x = self.columns.right() - width;
        self.push_text(x, self.page.cursor_y, line, FontFace::Bold, font_size);
        self.page.cursor_y += font_size * 1.2;
    }

    fn emit_footer(&mut self) {
        let layout = self.layout;
        let font_size = layout.fonts.footer;
        let x = layout.margins.left;
        let top_of = |offset: f32| layout.footer_line_top(offset);

        let builder = format!(
            "Constructor: {}  |  Cel.: {}",
            self.metadata.builder_name.trim(),
            self.metadata.builder_phone.trim()
        );
        self.push_text(x, top_of(layout.footer_offsets[0]), builder, FontFace::Regular, font_size);
        if let Some(address) = self.metadata.address() {
            let line = format!("Dirección: {}", address);
            self.push_text(x, top_of(layout.footer_offsets[1]), line, FontFace::Regular, font_size);
        }
        if let Some(legend) = self.metadata.legend_text() {
            let line = format!("Leyenda: {}", legend);
            self.push_text(x, top_of(layout.footer_offsets[2]), line, FontFace::Regular, font_size);
        }
    }

    fn break_page(&mut self) {
        log::debug!(
            "Page break after page {} ({} rows)",
            self.page.number,
            self.page.rows
        );
        let number = self.page.number + 1;
        self.finish_page();
        self.page = PageInProgress {
            number,
            kind: PageKind::Continuation,
            elements: Vec::new(),
            cursor_y: self.layout.body_top(),
            rows: 0,
        };
        self.emit_table_header();
    }

    /// Adds the footer and freezes the current page.
    fn finish_page(&mut self) {
        self.emit_footer();
        let elements = std::mem::take(&mut self.page.elements);
        let size = Size::new(self.layout.page_width(), self.layout.page_height());
        self.pages.push(PagePlan::new(
            self.page.number,
            self.page.kind,
            size,
            elements,
            self.page.rows,
        ));
    }

    fn push_text(&mut self, x: f32, y: f32, content: String, font: FontFace, font_size: f32) {
        let width = text_width(&content, font, font_size);
        self.page.elements.push(PositionedElement {
            x,
            y,
            width,
            height: font_size,
            element: LayoutElement::Text(TextElement {
                content,
                font,
                font_size,
            }),
        });
    }

    fn push_rule(&mut self, y: f32) {
        self.page.elements.push(PositionedElement {
            x: self.columns.left(),
            y,
            width: self.columns.table_width(),
            height: 0.0,
            element: LayoutElement::Rule(RuleElement {
                thickness: self.layout.rule_thickness,
            }),
        });
    }
}
