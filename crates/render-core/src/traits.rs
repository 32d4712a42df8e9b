use crate::error::RenderError;
use obra_layout::{DecodedImage, PagePlan};
use std::collections::HashMap;
use std::io::Write;
use std::sync::Arc;

/// Document-level metadata written by renderers that support it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DocumentInfo {
    pub title: String,
    pub author: Option<String>,
}

/// A trait for document renderers. Pages arrive in print order; the renderer only needs
/// to place text, draw horizontal rules, and draw scaled images.
pub trait DocumentRenderer<W: Write> {
    fn begin_document(&mut self, writer: W, info: &DocumentInfo) -> Result<(), RenderError>;

    /// Registers images that page plans reference by key. Must be called before the first
    /// page that uses them.
    fn add_resources(
        &mut self,
        resources: &HashMap<String, Arc<DecodedImage>>,
    ) -> Result<(), RenderError>;

    fn render_page(&mut self, page: &PagePlan) -> Result<(), RenderError>;

    /// Writes the document and hands the writer back.
    fn finish(self: Box<Self>) -> Result<W, RenderError>;
}
