// Page content stream drawing.

use lopdf::content::{Content, Operation};
use lopdf::{Object, StringFormat};
use obra_layout::{FontFace, ImageElement, LayoutElement, PositionedElement, RuleElement, TextElement};
use obra_render_core::utils::{flip_y, to_win_ansi};
use obra_render_core::RenderError;
use std::collections::HashMap;

#[derive(Default, Clone, PartialEq)]
struct PageRenderState {
    font: Option<FontFace>,
    font_size: f32,
    line_width: Option<f32>,
}

pub(crate) struct PageContext<'a> {
    page_height: f32,
    content: Content,
    state: PageRenderState,
    font_names: &'a HashMap<FontFace, String>,
    image_names: &'a HashMap<String, String>,
}

impl<'a> PageContext<'a> {
    pub(crate) fn new(
        page_height: f32,
        font_names: &'a HashMap<FontFace, String>,
        image_names: &'a HashMap<String, String>,
    ) -> Self {
        Self {
            page_height,
            content: Content { operations: vec![] },
            state: PageRenderState::default(),
            font_names,
            image_names,
        }
    }

    pub(crate) fn finish(self) -> Content {
        self.content
    }

    pub(crate) fn draw_element(&mut self, el: &PositionedElement) -> Result<(), RenderError> {
        match &el.element {
            LayoutElement::Text(text) => self.draw_text(text, el),
            LayoutElement::Rule(rule) => {
                self.draw_rule(rule, el);
                Ok(())
            }
            LayoutElement::Image(image) => self.draw_image(image, el),
        }
    }

    fn push(&mut self, operator: &str, operands: Vec<Object>) {
        self.content.operations.push(Operation::new(operator, operands));
    }

    fn set_font(&mut self, font: FontFace, font_size: f32) -> Result<(), RenderError> {
        if self.state.font == Some(font) && self.state.font_size == font_size {
            return Ok(());
        }
        let name = self
            .font_names
            .get(&font)
            .ok_or_else(|| RenderError::Other(format!("Font {:?} was not registered", font)))?;
        let operands = vec![Object::Name(name.as_bytes().to_vec()), font_size.into()];
        self.push("Tf", operands);
        self.state.font = Some(font);
        self.state.font_size = font_size;
        Ok(())
    }

    fn draw_text(&mut self, text: &TextElement, el: &PositionedElement) -> Result<(), RenderError> {
        if text.content.trim().is_empty() {
            return Ok(());
        }
        self.push("BT", vec![]);
        self.set_font(text.font, text.font_size)?;
        let baseline_y = el.baseline().unwrap_or(el.y);
        let pdf_y = flip_y(baseline_y, self.page_height);
        self.push("Td", vec![el.x.into(), pdf_y.into()]);
        self.push(
            "Tj",
            vec![Object::String(to_win_ansi(&text.content), StringFormat::Literal)],
        );
        self.push("ET", vec![]);
        Ok(())
    }

    fn draw_rule(&mut self, rule: &RuleElement, el: &PositionedElement) {
        if self.state.line_width != Some(rule.thickness) {
            self.push("w", vec![rule.thickness.into()]);
            self.state.line_width = Some(rule.thickness);
        }
        let y = flip_y(el.y, self.page_height);
        self.push("m", vec![el.x.into(), y.into()]);
        self.push("l", vec![(el.x + el.width).into(), y.into()]);
        self.push("S", vec![]);
    }

    fn draw_image(&mut self, image: &ImageElement, el: &PositionedElement) -> Result<(), RenderError> {
        let name = self
            .image_names
            .get(&image.key)
            .ok_or_else(|| RenderError::MissingResource(image.key.clone()))?
            .clone();
        let bottom = flip_y(el.y + el.height, self.page_height);
        self.push("q", vec![]);
        self.push(
            "cm",
            vec![
                el.width.into(),
                0.into(),
                0.into(),
                el.height.into(),
                el.x.into(),
                bottom.into(),
            ],
        );
        self.push("Do", vec![Object::Name(name.into_bytes())]);
        self.push("Q", vec![]);
        Ok(())
    }
}
