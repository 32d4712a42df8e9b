pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use obra::{BudgetGenerator, GenerationReport, LineItem, PipelineError, ReportMetadata};
use rust_decimal::Decimal;
use std::io::Cursor;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Wrapper around a generated PDF with helper methods
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
    pub report: GenerationReport,
}

impl GeneratedPdf {
    pub fn from_bytes(
        bytes: Vec<u8>,
        report: GenerationReport,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc, report })
    }

    /// Get the number of pages in the PDF
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text drawn on a 1-based page, one entry per text operation.
    pub fn page_text(&self, page: u32) -> Vec<String> {
        pdf_assertions::page_strings(&self.doc, page)
    }
}

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Generate a PDF with the default layout.
pub fn generate_pdf(
    items: &[LineItem],
    metadata: &ReportMetadata,
) -> Result<GeneratedPdf, PipelineError> {
    let generator = BudgetGenerator::default();
    let (writer, report) = generator.generate(items, metadata, Cursor::new(Vec::new()))?;
    GeneratedPdf::from_bytes(writer.into_inner(), report)
        .map_err(|e| PipelineError::Io(std::io::Error::other(e.to_string())))
}

pub fn metadata() -> ReportMetadata {
    ReportMetadata::new("Ana Torres", "Construcciones Ruiz", "0991234567")
        .with_date(chrono::NaiveDate::from_ymd_opt(2024, 11, 5).unwrap())
}

/// `count` items priced at 10.00 with quantity 1.
pub fn numbered_items(count: usize) -> Vec<LineItem> {
    (1..=count)
        .map(|i| {
            LineItem::new(format!("P-{:03}", i), format!("Partida {}", i), "ud", Decimal::TEN)
                .with_quantity(Decimal::ONE)
        })
        .collect()
}
