use crate::metadata::ReportMetadata;
use crate::LineItem;
use rust_decimal_macros::dec;
use std::io::Cursor;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub fn items(count: usize) -> Vec<LineItem> {
    (0..count)
        .map(|i| {
            LineItem::new(
                format!("ITM-{:03}", i + 1),
                format!("Partida de prueba {}", i + 1),
                "m²",
                dec!(12.50),
            )
            .with_quantity(dec!(2))
        })
        .collect()
}

pub fn metadata() -> ReportMetadata {
    ReportMetadata::new("Ana Torres", "Construcciones Ruiz", "0991234567")
}

/// Encodes a small PNG. With `transparent` set, the top-left pixel is see-through.
pub fn png_bytes(width: u32, height: u32, transparent: bool) -> Vec<u8> {
    let mut img = image::RgbaImage::from_pixel(width, height, image::Rgba([200, 30, 30, 255]));
    if transparent {
        img.put_pixel(0, 0, image::Rgba([0, 0, 0, 0]));
    }
    let mut out = Cursor::new(Vec::new());
    img.write_to(&mut out, image::ImageFormat::Png)
        .expect("encode png");
    out.into_inner()
}
