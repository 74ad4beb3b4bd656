//! Color types and utilities

/// RGBA color with f32 components (0.0 to 1.0), not premultiplied
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[repr(C)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const SKY_BLUE: Color = Color::rgb(0.529, 0.808, 0.922);
    pub const TRANSPARENT: Color = Color::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Set alpha and return new color
    pub fn with_alpha(self, alpha: f32) -> Self {
        Self { a: alpha, ..self }
    }

    /// Whether drawing with this color has no visible effect.
    pub fn is_transparent(&self) -> bool {
        self.a <= 0.0
    }

    /// Layout used by shader uniforms
    pub fn to_array(self) -> [f32; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transparency() {
        assert!(Color::TRANSPARENT.is_transparent());
        assert!(Color::RED.with_alpha(0.0).is_transparent());
        assert!(!Color::RED.with_alpha(0.01).is_transparent());
        assert!(!Color::BLACK.is_transparent());
    }

    #[test]
    fn test_uniform_layout_is_rgba() {
        assert_eq!(
            Color::new(0.1, 0.2, 0.3, 0.4).to_array(),
            [0.1, 0.2, 0.3, 0.4]
        );
        assert_eq!(Color::BLUE.with_alpha(0.5).to_array(), [0.0, 0.0, 1.0, 0.5]);
    }
}
