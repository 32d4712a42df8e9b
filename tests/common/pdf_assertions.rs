use lopdf::content::Content;
use lopdf::Document as LopdfDocument;

/// Strings shown with `Tj` on a page, decoded from WinAnsi (Latin-1 range).
pub fn page_strings(doc: &LopdfDocument, page: u32) -> Vec<String> {
    let pages = doc.get_pages();
    let Some(page_id) = pages.get(&page) else {
        return Vec::new();
    };
    let Ok(bytes) = doc.get_page_content(*page_id) else {
        return Vec::new();
    };
    let Ok(content) = Content::decode(&bytes) else {
        return Vec::new();
    };
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|obj| obj.as_str().ok())
        .map(|raw| raw.iter().map(|&b| b as char).collect())
        .collect()
}

/// All text in the document, one line per text operation.
pub fn extract_text(doc: &LopdfDocument) -> String {
    let mut text = String::new();
    for page in 1..=doc.get_pages().len() as u32 {
        for line in page_strings(doc, page) {
            text.push_str(&line);
            text.push('\n');
        }
    }
    text
}

/// Count color image XObjects (soft masks are not counted).
pub fn count_images(doc: &LopdfDocument) -> usize {
    doc.objects
        .values()
        .filter_map(|obj| obj.as_stream().ok())
        .filter(|stream| {
            let name = |key: &[u8]| stream.dict.get(key).and_then(|o| o.as_name()).ok();
            name(b"Subtype".as_slice()) == Some(b"Image".as_slice())
                && name(b"ColorSpace".as_slice()) == Some(b"DeviceRGB".as_slice())
        })
        .count()
}

/// Assert that PDF contains specific text
#[macro_export]
macro_rules! assert_pdf_contains_text {
    ($pdf:expr, $text:expr) => {
        let extracted = $crate::common::pdf_assertions::extract_text(&$pdf.doc);
        assert!(
            extracted.contains($text),
            "PDF should contain '{}', but extracted text was:\n{}",
            $text,
            extracted
        );
    };
}

/// Assert the number of pages in a PDF
#[macro_export]
macro_rules! assert_pdf_page_count {
    ($pdf:expr, $count:expr) => {
        assert_eq!(
            $pdf.page_count(),
            $count,
            "Expected {} pages, got {}",
            $count,
            $pdf.page_count()
        );
    };
}
