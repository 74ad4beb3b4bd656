//! Paint - how a recorded path is drawn

use quill_gpu::{Cap, Contents, Join, SolidColorContents, SolidStrokeContents};
use quill_paint::Color;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum PaintStyle {
    #[default]
    Fill,
    Stroke,
}

/// Paint parameters captured by value when an operation is recorded
#[derive(Clone, Debug)]
pub struct Paint {
    pub color: Color,
    pub style: PaintStyle,
    pub stroke_width: f32,
    pub stroke_cap: Cap,
    pub stroke_join: Join,
    pub stroke_miter: f32,
    /// Overrides `color` and `style` when set
    pub contents: Option<Contents>,
}

impl Default for Paint {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            style: PaintStyle::Fill,
            stroke_width: 0.0,
            stroke_cap: Cap::default(),
            stroke_join: Join::default(),
            stroke_miter: 4.0,
            contents: None,
        }
    }
}

impl Paint {
    pub fn fill(color: Color) -> Self {
        Self {
            color,
            ..Self::default()
        }
    }

    pub fn stroke(color: Color, width: f32) -> Self {
        Self {
            color,
            style: PaintStyle::Stroke,
            stroke_width: width,
            ..Self::default()
        }
    }

    pub fn with_contents(mut self, contents: impl Into<Contents>) -> Self {
        self.contents = Some(contents.into());
        self
    }

    /// The contents an entity drawn with this paint renders
    pub fn create_contents(&self) -> Contents {
        if let Some(contents) = &self.contents {
            return contents.clone();
        }

        match self.style {
            PaintStyle::Fill => SolidColorContents::new(self.color).into(),
            PaintStyle::Stroke => {
                let mut stroke = SolidStrokeContents::new(self.color, self.stroke_width);
                stroke.set_stroke_cap(self.stroke_cap);
                stroke.set_stroke_join(self.stroke_join);
                stroke.set_stroke_miter(self.stroke_miter);
                stroke.into()
            }
        }
    }
}

impl From<Color> for Paint {
    fn from(color: Color) -> Self {
        Paint::fill(color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quill_gpu::LinearGradientContents;
    use quill_paint::Point;

    #[test]
    fn test_fill_paint_creates_solid_color() {
        let Contents::SolidColor(solid) = Paint::fill(Color::RED).create_contents() else {
            panic!("expected solid color contents");
        };
        assert_eq!(solid.color(), Color::RED);
    }

    #[test]
    fn test_stroke_paint_creates_solid_stroke() {
        let mut paint = Paint::stroke(Color::BLUE, 3.0);
        paint.stroke_cap = Cap::Round;
        paint.stroke_miter = 2.0;

        let Contents::SolidStroke(stroke) = paint.create_contents() else {
            panic!("expected solid stroke contents");
        };
        assert_eq!(stroke.color(), Color::BLUE);
        assert_eq!(stroke.stroke_size(), 3.0);
        assert_eq!(stroke.stroke_cap(), Cap::Round);
        assert_eq!(stroke.stroke_join(), Join::Miter);
        assert_eq!(stroke.stroke_miter(), 2.0);
    }

    #[test]
    fn test_explicit_contents_win() {
        let gradient = LinearGradientContents::new(
            Point::new(0.0, 0.0),
            Point::new(10.0, 0.0),
            &[Color::RED, Color::GREEN],
        );
        let paint = Paint::stroke(Color::BLUE, 3.0).with_contents(gradient);

        assert!(matches!(paint.create_contents(), Contents::LinearGradient(_)));
    }
}
