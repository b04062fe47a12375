/// An RGBA color with `f32` components in the `0.0..=1.0` range.
///
/// ```
/// use toastkit::{Color, ToastOptions};
///
/// let options = ToastOptions::builder()
///     .background_color(Color::rgba(0.1, 0.1, 0.1, 0.9))
///     .message_color(Color::WHITE)
///     .build();
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const LIGHT_GRAY: Color = Color::gray(2.0 / 3.0);
    pub const DARK_GRAY: Color = Color::gray(1.0 / 3.0);

    /// Create a color from RGB components with full opacity (alpha = 1.0).
    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a color from RGBA components.
    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque gray with every channel set to `white`.
    pub const fn gray(white: f32) -> Self {
        Self::rgb(white, white, white)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grays() {
        assert_eq!(Color::LIGHT_GRAY.r, 2.0 / 3.0);
        assert_eq!(Color::DARK_GRAY.g, 1.0 / 3.0);
        assert_eq!(Color::DARK_GRAY.a, 1.0);
        assert!(Color::LIGHT_GRAY.b > Color::DARK_GRAY.b);
    }

    #[test]
    fn test_rgba_keeps_alpha() {
        let color = Color::rgba(0.1, 0.2, 0.3, 0.5);
        assert_eq!(color.a, 0.5);
        assert_eq!(Color::default(), Color::WHITE);
    }
}
