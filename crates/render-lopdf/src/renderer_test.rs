use crate::LopdfRenderer;
use lopdf::content::Content;
use lopdf::{Document, Object};
use obra_layout::{paginate, LineItem, ReportLayout, ReportMetadata};
use obra_render_core::{DocumentInfo, DocumentRenderer, RenderError};
use rust_decimal_macros::dec;
use std::io::Cursor;

fn render(items: &[LineItem], metadata: &ReportMetadata) -> Result<Document, RenderError> {
    let report = paginate(items, metadata, &ReportLayout::default())
        .map_err(|e| RenderError::Other(e.to_string()))?;
    let mut renderer: Box<dyn DocumentRenderer<Cursor<Vec<u8>>>> = Box::new(LopdfRenderer::new());
    let info = DocumentInfo {
        title: "Presupuesto de Obra".into(),
        author: Some("Construcciones Ruiz".into()),
    };
    renderer.begin_document(Cursor::new(Vec::new()), &info)?;
    renderer.add_resources(&report.resources)?;
    for page in &report.pages {
        renderer.render_page(page)?;
    }
    let bytes = renderer.finish()?.into_inner();
    Ok(Document::load_mem(&bytes)?)
}

fn page_strings(doc: &Document, page_number: u32) -> Vec<Vec<u8>> {
    let pages = doc.get_pages();
    let page_id = pages[&page_number];
    let content = Content::decode(&doc.get_page_content(page_id).unwrap()).unwrap();
    content
        .operations
        .iter()
        .filter(|op| op.operator == "Tj")
        .filter_map(|op| op.operands.first())
        .filter_map(|obj| obj.as_str().ok().map(|s| s.to_vec()))
        .collect()
}

fn metadata() -> ReportMetadata {
    ReportMetadata::new("Ana Torres", "Construcciones Ruiz", "0991234567")
        .with_date(chrono::NaiveDate::from_ymd_opt(2024, 5, 2).unwrap())
}

fn png_logo() -> Vec<u8> {
    let img = image::RgbaImage::from_pixel(8, 4, image::Rgba([10, 80, 160, 128]));
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png).unwrap();
    out.into_inner()
}

#[test]
fn test_renders_one_pdf_page_per_plan() {
    let _ = env_logger::builder().is_test(true).try_init();
    let items: Vec<LineItem> = (0..75)
        .map(|i| LineItem::new(format!("R-{}", i), "Partida", "m²", dec!(4)).with_quantity(dec!(1)))
        .collect();
    let doc = render(&items, &metadata()).unwrap();
    assert_eq!(doc.get_pages().len(), 2);

    let first = page_strings(&doc, 1);
    assert!(first.contains(&b"Presupuesto de Obra".to_vec()));
    assert!(first.contains(&b"Fecha: 2024-05-02".to_vec()));
    let second = page_strings(&doc, 2);
    assert!(!second.contains(&b"Presupuesto de Obra".to_vec()));
    assert!(second.contains(&b"Total: 300.00 USD".to_vec()));
}

#[test]
fn test_text_is_win_ansi_encoded() {
    let doc = render(&[], &metadata()).unwrap();
    let strings = page_strings(&doc, 1);
    let mut expected = b"C".to_vec();
    expected.push(0xF3);
    expected.extend_from_slice(b"digo");
    assert!(strings.contains(&expected));
}

#[test]
fn test_windows_punctuation_is_drawn_with_its_win_ansi_code() {
    let items = vec![
        LineItem::new("A-1", "Muro \u{2013} bloque \u{201C}15\u{201D}", "ud", dec!(1))
            .with_quantity(dec!(1)),
    ];
    let doc = render(&items, &metadata()).unwrap();
    let strings = page_strings(&doc, 1);
    let mut expected = b"Muro ".to_vec();
    expected.push(0x96);
    expected.extend_from_slice(b" bloque ");
    expected.push(0x93);
    expected.extend_from_slice(b"15");
    expected.push(0x94);
    assert!(strings.contains(&expected));
}

#[test]
fn test_uses_standard_helvetica_fonts() {
    let doc = render(&[], &metadata()).unwrap();
    let mut base_fonts: Vec<String> = doc
        .objects
        .values()
        .filter_map(|obj| obj.as_dict().ok())
        .filter(|dict| dict.get(b"Type").and_then(Object::as_name).ok() == Some(b"Font".as_slice()))
        .filter_map(|dict| dict.get(b"BaseFont").and_then(Object::as_name).ok())
        .map(|name| String::from_utf8_lossy(name).into_owned())
        .collect();
    base_fonts.sort();
    assert_eq!(base_fonts, vec!["Helvetica", "Helvetica-Bold"]);
}

#[test]
fn test_logo_becomes_an_image_xobject() {
    let doc = render(&[], &metadata().with_logo(png_logo())).unwrap();
    let images = doc
        .objects
        .values()
        .filter_map(|obj| obj.as_stream().ok())
        .filter(|stream| stream.dict.get(b"Subtype").and_then(Object::as_name).ok() == Some(b"Image".as_slice()))
        .count();
    // Color samples plus the soft mask for the translucent pixels.
    assert_eq!(images, 2);

    let pages = doc.get_pages();
    let content = doc.get_page_content(pages[&1]).unwrap();
    let content = Content::decode(&content).unwrap();
    assert!(content.operations.iter().any(|op| op.operator == "Do"));
}

#[test]
fn test_rendering_before_begin_is_an_error() {
    let report = paginate(&[], &metadata(), &ReportLayout::default()).unwrap();
    let mut renderer: LopdfRenderer<Cursor<Vec<u8>>> = LopdfRenderer::new();
    assert!(renderer.render_page(&report.pages[0]).is_err());
}
