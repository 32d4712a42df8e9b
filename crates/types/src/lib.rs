pub mod budget;
pub mod geometry;
pub mod page;
pub mod validation;

pub use budget::LineItem;
pub use geometry::{Rect, Size};
pub use page::{Margins, PageSize};
pub use validation::{require_text, ValidationError};
