use glam::Vec2;
use std::fmt;

/// An opaque sRGB color. Alpha is supplied per draw call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// CSS hex form, e.g. `#00d2ff`.
    pub fn to_css(self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// 2D drawing target the animation paints into each frame.
///
/// Dimensions are read when entities need random placement; implementations
/// own their resize policy.
pub trait RenderSurface {
    fn width(&self) -> f32;
    fn height(&self) -> f32;

    /// Clear the whole surface to transparent.
    fn clear(&mut self);

    /// Filled circle with a glow (shadow blur) in the same color.
    /// `alpha` is already clamped to `[0, 1]` by callers.
    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color, glow: f32, alpha: f32);

    fn stroke_line(&mut self, from: Vec2, to: Vec2, color: Color, alpha: f32, width: f32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_formats_as_lowercase_hex() {
        assert_eq!(Color::rgb(0x00, 0xd2, 0xff).to_css(), "#00d2ff");
        assert_eq!(Color::rgb(255, 249, 196).to_string(), "#fff9c4");
    }
}
