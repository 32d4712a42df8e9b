// Drawable items produced by pagination.

use crate::fonts::FontFace;

/// Share of the font size between the top of a text box and its baseline.
pub const ASCENT_RATIO: f32 = 0.8;

/// A single drawable item with its absolute position on the page. A page plan is an
/// ordered list of these.
///
/// For text, `y` is the top of the text box and `height` the font size; the baseline sits
/// at `y + font_size * ASCENT_RATIO`. Rules are horizontal lines from `(x, y)` to
/// `(x + width, y)`.
#[derive(Clone, Debug, PartialEq)]
pub struct PositionedElement {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub element: LayoutElement,
}

impl PositionedElement {
    pub fn as_text(&self) -> Option<&TextElement> {
        match &self.element {
            LayoutElement::Text(t) => Some(t),
            _ => None,
        }
    }

    /// Baseline Y for text elements.
    pub fn baseline(&self) -> Option<f32> {
        self.as_text()
            .map(|t| self.y + t.font_size * ASCENT_RATIO)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum LayoutElement {
    Text(TextElement),
    Rule(RuleElement),
    Image(ImageElement),
}

impl std::fmt::Display for LayoutElement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LayoutElement::Text(t) => write!(f, "Text(\"{}\")", t.content),
            LayoutElement::Rule(_) => write!(f, "Rule"),
            LayoutElement::Image(i) => write!(f, "Image(key=\"{}\")", i.key),
        }
    }
}

/// A single line of text, already truncated and positioned.
#[derive(Clone, Debug, PartialEq)]
pub struct TextElement {
    pub content: String,
    pub font: FontFace,
    pub font_size: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct RuleElement {
    pub thickness: f32,
}

/// Placement of a decoded image. `key` refers to an entry of the report's resources.
#[derive(Clone, Debug, PartialEq)]
pub struct ImageElement {
    pub key: String,
}
