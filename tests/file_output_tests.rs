mod common;

use common::pdf_assertions::{count_images, extract_text};
use common::{init_logger, TestResult};
use obra::{BudgetFile, BudgetGenerator, PipelineError};
use std::io::Cursor;

fn write_logo(dir: &std::path::Path) -> std::io::Result<()> {
    let img = image::RgbImage::from_pixel(64, 32, image::Rgb([20, 90, 160]));
    let mut bytes = Cursor::new(Vec::new());
    img.write_to(&mut bytes, image::ImageFormat::Png)
        .map_err(|e| std::io::Error::other(e.to_string()))?;
    std::fs::write(dir.join("logo.png"), bytes.into_inner())
}

fn budget_json() -> &'static str {
    r#"{
        "name": "Vivienda 60 m2",
        "client": { "name": "Ana Torres" },
        "builder": { "name": "Construcciones Ruiz", "phone": "0991234567" },
        "logo": "logo.png",
        "date": "2024-11-05",
        "items": [
            { "code": "EST-003", "description": "Losa maciza de hormigón armado 12 cm", "unit": "m²", "unitPrice": 24, "quantity": 60 }
        ]
    }"#
}

#[test]
fn test_budget_file_renders_to_named_pdf_with_logo() -> TestResult {
    init_logger();
    let dir = tempfile::tempdir()?;
    write_logo(dir.path())?;
    let budget_path = dir.path().join("budget.json");
    std::fs::write(&budget_path, budget_json())?;

    let budget = BudgetFile::load(&budget_path)?;
    let metadata = budget.metadata(dir.path())?;
    let output = dir.path().join(budget.output_file_name());
    assert!(output.ends_with("Vivienda_60_m2.pdf"));

    let report = BudgetGenerator::new(budget.report_layout()).generate_to_file(
        &budget.items,
        &metadata,
        &output,
    )?;
    assert_eq!(report.page_count, 1);
    assert!(report.warnings.is_empty());

    let doc = lopdf::Document::load(&output)?;
    assert_eq!(doc.get_pages().len(), 1);
    assert_eq!(count_images(&doc), 1);
    assert!(extract_text(&doc).contains("Total: 1440.00 USD"));
    Ok(())
}

#[test]
fn test_failed_layout_leaves_no_file() -> TestResult {
    let dir = tempfile::tempdir()?;
    let mut budget = BudgetFile::from_json(budget_json())?;
    budget.logo = None;
    budget.client.name = "  ".into();
    let metadata = budget.metadata(dir.path())?;
    let output = dir.path().join("out.pdf");

    let result = BudgetGenerator::default().generate_to_file(&budget.items, &metadata, &output);
    assert!(matches!(result, Err(PipelineError::Layout(_))));
    assert!(!output.exists());
    Ok(())
}

#[test]
fn test_custom_layout_in_file_is_honoured() -> TestResult {
    let mut budget = BudgetFile::from_json(budget_json())?;
    budget.logo = None;
    budget.layout = Some(serde_json::from_str(r#"{ "pageSize": "Letter" }"#)?);
    let metadata = budget.metadata(std::path::Path::new("."))?;

    let generator = BudgetGenerator::new(budget.report_layout());
    let (writer, _) = generator.generate(&budget.items, &metadata, Cursor::new(Vec::new()))?;
    let doc = lopdf::Document::load_mem(&writer.into_inner())?;
    let page_id = doc.get_pages()[&1];
    let media_box = doc.get_dictionary(page_id)?.get(b"MediaBox")?.as_array()?.clone();
    let height = media_box[3].as_float()?;
    assert!((height - 792.0).abs() < 0.01);
    Ok(())
}
