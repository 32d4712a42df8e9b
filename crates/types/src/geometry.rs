use serde::{Deserialize, Serialize};

/// An axis-aligned box in page space. `y` grows downwards from the top edge.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns a rect of `size` centred inside `self`.
    pub fn center(&self, size: Size) -> Rect {
        Rect {
            x: self.x + (self.width - size.width) / 2.0,
            y: self.y + (self.height - size.height) / 2.0,
            width: size.width,
            height: size.height,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn zero() -> Self {
        Self {
            width: 0.0,
            height: 0.0,
        }
    }

    /// Scales `self` up or down to the largest size inside `bounds`, keeping the
    /// aspect ratio.
    pub fn scale_to_fit(self, bounds: Size) -> Size {
        if self.width <= 0.0 || self.height <= 0.0 {
            return Size::zero();
        }
        let scale = (bounds.width / self.width).min(bounds.height / self.height);
        Size {
            width: self.width * scale,
            height: self.height * scale,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_to_fit_keeps_aspect_ratio() {
        let wide = Size::new(400.0, 100.0).scale_to_fit(Size::new(120.0, 60.0));
        assert!((wide.width - 120.0).abs() < 0.01);
        assert!((wide.height - 30.0).abs() < 0.01);

        let tall = Size::new(10.0, 40.0).scale_to_fit(Size::new(120.0, 60.0));
        assert!((tall.width - 15.0).abs() < 0.01);
        assert!((tall.height - 60.0).abs() < 0.01);
    }

    #[test]
    fn test_center_places_box_in_the_middle() {
        let outer = Rect::new(0.0, 0.0, 120.0, 60.0);
        let inner = outer.center(Size::new(120.0, 30.0));
        assert_eq!(inner, Rect::new(0.0, 15.0, 120.0, 30.0));
    }
}
