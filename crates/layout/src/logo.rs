use crate::output::AssetWarning;
use obra_types::Size;

/// Resource key under which the decoded logo is stored in a [`crate::PaginatedReport`].
pub const LOGO_RESOURCE: &str = "logo";

/// A raster image decoded to 8-bit RGB samples, with a separate alpha channel when the
/// source had any transparency.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub rgb: Vec<u8>,
    pub alpha: Option<Vec<u8>>,
}

impl DecodedImage {
    pub fn intrinsic_size(&self) -> Size {
        Size::new(self.width as f32, self.height as f32)
    }
}

/// Decodes logo bytes in any format the `image` crate was built with.
///
/// Failure is reported as an [`AssetWarning`]; the caller decides whether to go on
/// without the image.
pub fn decode_logo(bytes: &[u8]) -> Result<DecodedImage, AssetWarning> {
    let image = ::image::load_from_memory(bytes).map_err(|e| {
        AssetWarning::new(LOGO_RESOURCE, format!("Failed to decode logo image: {}", e))
    })?;
    if image.width() == 0 || image.height() == 0 {
        return Err(AssetWarning::new(LOGO_RESOURCE, "Logo image has no pixels"));
    }

    let rgba = image.to_rgba8();
    let (width, height) = rgba.dimensions();
    let pixel_count = (width as usize) * (height as usize);
    let mut rgb = Vec::with_capacity(pixel_count * 3);
    let mut alpha = Vec::with_capacity(pixel_count);
    for pixel in rgba.pixels() {
        let [r, g, b, a] = pixel.0;
        rgb.extend_from_slice(&[r, g, b]);
        alpha.push(a);
    }
    let has_transparency = alpha.iter().any(|&a| a != u8::MAX);

    log::debug!("Decoded logo: {}x{} (alpha: {})", width, height, has_transparency);
    Ok(DecodedImage {
        width,
        height,
        rgb,
        alpha: has_transparency.then_some(alpha),
    })
}
