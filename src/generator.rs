use crate::error::PipelineError;
use obra_layout::{
    paginate, AssetWarning, PaginatedReport, ReportLayout, ReportMetadata, REPORT_TITLE,
};
use obra_pricing::{compute_totals, AdjustmentParameters, TotalsBreakdown};
use obra_render_core::{DocumentInfo, DocumentRenderer};
use obra_render_lopdf::LopdfRenderer;
use obra_types::LineItem;
use std::fs;
use std::io::Write;
use std::path::Path;

/// What a successful run produced.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerationReport {
    pub page_count: usize,
    pub warnings: Vec<AssetWarning>,
}

/// Prices and prints budgets with a fixed page layout.
///
/// Every call works on the inputs it is given; nothing is kept between calls.
#[derive(Debug, Clone, Default)]
pub struct BudgetGenerator {
    layout: ReportLayout,
}

impl BudgetGenerator {
    pub fn new(layout: ReportLayout) -> Self {
        Self { layout }
    }

    pub fn layout(&self) -> &ReportLayout {
        &self.layout
    }

    pub fn totals(
        &self,
        items: &[LineItem],
        params: &AdjustmentParameters,
    ) -> Result<TotalsBreakdown, PipelineError> {
        Ok(compute_totals(items, params)?)
    }

    pub fn paginate(
        &self,
        items: &[LineItem],
        metadata: &ReportMetadata,
    ) -> Result<PaginatedReport, PipelineError> {
        Ok(paginate(items, metadata, &self.layout)?)
    }

    /// Paginates the items and writes the PDF to `writer`.
    ///
    /// Nothing is written when validation or layout fails.
    pub fn generate<W: Write>(
        &self,
        items: &[LineItem],
        metadata: &ReportMetadata,
        writer: W,
    ) -> Result<(W, GenerationReport), PipelineError> {
        let report = self.paginate(items, metadata)?;
        render_report(report, metadata, writer)
    }

    /// Writes the PDF to `path`. The file is only created once the whole document has
    /// been rendered, so a failed run leaves no partial file behind.
    pub fn generate_to_file<P: AsRef<Path>>(
        &self,
        items: &[LineItem],
        metadata: &ReportMetadata,
        path: P,
    ) -> Result<GenerationReport, PipelineError> {
        let report = self.paginate(items, metadata)?;
        write_report_file(report, metadata, path.as_ref())
    }
}

fn write_report_file(
    report: PaginatedReport,
    metadata: &ReportMetadata,
    path: &Path,
) -> Result<GenerationReport, PipelineError> {
    let (bytes, generated) = render_report(report, metadata, Vec::new())?;
    fs::write(path, &bytes)?;
    log::info!(
        "Wrote {} ({} page(s), {} bytes)",
        path.display(),
        generated.page_count,
        bytes.len()
    );
    Ok(generated)
}

fn render_report<W: Write>(
    report: PaginatedReport,
    metadata: &ReportMetadata,
    writer: W,
) -> Result<(W, GenerationReport), PipelineError> {
    for warning in &report.warnings {
        log::warn!("{}", warning);
    }

    let info = DocumentInfo {
        title: format!("{} - {}", REPORT_TITLE, metadata.client_name.trim()),
        author: Some(metadata.builder_name.trim().to_string()),
    };
    let mut renderer: Box<LopdfRenderer<W>> = Box::new(LopdfRenderer::new());
    renderer.begin_document(writer, &info)?;
    renderer.add_resources(&report.resources)?;
    for page in &report.pages {
        renderer.render_page(page)?;
    }
    let writer = renderer.finish()?;

    Ok((
        writer,
        GenerationReport {
            page_count: report.page_count(),
            warnings: report.warnings,
        },
    ))
}
