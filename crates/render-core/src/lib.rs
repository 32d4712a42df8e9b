//! Core rendering abstractions.
//!
//! This crate provides the seam between pagination and a concrete document format:
//! - `DocumentRenderer` trait, fed one finished page plan at a time
//! - Error types for rendering operations
//! - Shared helpers for coordinate conversion and text encoding

mod error;
mod traits;
pub mod utils;

pub use error::RenderError;
pub use traits::{DocumentInfo, DocumentRenderer};
