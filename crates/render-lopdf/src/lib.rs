//! PDF renderer using lopdf.
//!
//! Page plans are written with the standard Helvetica fonts, so no font program is
//! embedded. Images are stored once as XObjects and shared by every page that draws them.

mod content;
mod renderer;

pub use renderer::LopdfRenderer;

#[cfg(test)]
mod renderer_test;
