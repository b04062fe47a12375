//! Display options for toasts.
//!
//! [`ToastOptions`] is an immutable snapshot taken when a toast is created.
//! Fields left unset on the [`ToastOptionsBuilder`] fall back to the
//! process-wide defaults: the built-in table below, or whatever was passed to
//! [`ToastOptions::install_defaults`] before the first toast was created.
//!
//! | field | built-in default |
//! | --- | --- |
//! | `duration` | 5 s |
//! | `animation_duration` | 400 ms |
//! | `background_color` | [`Color::LIGHT_GRAY`] |
//! | `border_color` | [`Color::DARK_GRAY`] |
//! | `border_width` | 1.0 |
//! | `corner_radius` | 5.0 |
//! | `margin` | 8.0 |
//! | `content_insets` | 8.0 on every edge |
//! | `min_height` / `max_height` | 30.0 / 50.0 |
//! | `message_alignment` | [`TextAlignment::Center`] |
//! | `message_color` | [`Color::WHITE`] |
//! | `message_font` | system font at 14.0 |
//! | `position` | [`ToastPosition::Bottom`] |
//! | `image_position` | [`ImagePosition::Left`] |
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use toastkit::{ToastOptions, ToastPosition};
//!
//! let options = ToastOptions::builder()
//!     .duration(Duration::from_secs(2))
//!     .position(ToastPosition::Top)
//!     .build();
//!
//! assert_eq!(options.position, ToastPosition::Top);
//! assert_eq!(options.margin, ToastOptions::defaults().margin);
//! ```

use std::sync::OnceLock;
use std::time::Duration;

use toastkit_core::geometry::EdgeInsets;

use crate::color::Color;
use crate::error::{ToastError, ToastResult};

/// Vertical placement of a toast inside its host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ToastPosition {
    /// `margin` below the host's top edge.
    Top,
    /// Centered vertically.
    Middle,
    /// `margin` above the host's bottom edge.
    #[default]
    Bottom,
}

/// Side of the toast the image is pinned to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ImagePosition {
    #[default]
    Left,
    Right,
}

/// Horizontal alignment of the message text inside its label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TextAlignment {
    Left,
    #[default]
    Center,
    Right,
    Justified,
}

/// Font family for the message label.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum FontFamily {
    /// The host platform's UI font.
    #[default]
    System,
    /// A font the host can resolve by name.
    Named(String),
}

/// Font used for the message label.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub family: FontFamily,
    /// Point size.
    pub size: f32,
}

impl Font {
    pub fn system(size: f32) -> Self {
        Self {
            family: FontFamily::System,
            size,
        }
    }

    pub fn named(name: impl Into<String>, size: f32) -> Self {
        Self {
            family: FontFamily::Named(name.into()),
            size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(14.0)
    }
}

/// Customization options for a toast.
#[derive(Debug, Clone, PartialEq)]
pub struct ToastOptions {
    /// How long the toast stays fully visible.
    pub duration: Duration,
    /// Length of each fade.
    pub animation_duration: Duration,
    pub background_color: Color,
    pub border_color: Color,
    pub border_width: f32,
    pub corner_radius: f32,
    /// Distance from the host edge. Only applies to `Top` and `Bottom`.
    pub margin: f32,
    pub content_insets: EdgeInsets,
    pub min_height: f32,
    pub max_height: f32,
    pub message_alignment: TextAlignment,
    pub message_color: Color,
    pub message_font: Font,
    pub position: ToastPosition,
    pub image_position: ImagePosition,
}

static DEFAULTS: OnceLock<ToastOptions> = OnceLock::new();

impl ToastOptions {
    /// The built-in defaults, ignoring any installed override.
    pub fn builtin() -> Self {
        Self {
            duration: Duration::from_secs(5),
            animation_duration: Duration::from_millis(400),
            background_color: Color::LIGHT_GRAY,
            border_color: Color::DARK_GRAY,
            border_width: 1.0,
            corner_radius: 5.0,
            margin: 8.0,
            content_insets: EdgeInsets::uniform(8.0),
            min_height: 30.0,
            max_height: 50.0,
            message_alignment: TextAlignment::Center,
            message_color: Color::WHITE,
            message_font: Font::default(),
            position: ToastPosition::Bottom,
            image_position: ImagePosition::Left,
        }
    }

    /// The process-wide defaults: the installed override if any, else [`ToastOptions::builtin`].
    pub fn defaults() -> Self {
        DEFAULTS.get().cloned().unwrap_or_else(Self::builtin)
    }

    /// Replace the process-wide defaults.
    ///
    /// Call once during startup, before the first toast is created. Toasts
    /// created earlier keep the options they were created with.
    pub fn install_defaults(defaults: ToastOptions) -> ToastResult<()> {
        DEFAULTS
            .set(defaults)
            .map_err(|_| ToastError::DefaultsAlreadyInstalled)?;
        tracing::debug!("installed process-wide toast defaults");
        Ok(())
    }

    pub fn builder() -> ToastOptionsBuilder {
        ToastOptionsBuilder::default()
    }
}

impl Default for ToastOptions {
    fn default() -> Self {
        Self::defaults()
    }
}

/// Builder for [`ToastOptions`]; unset fields resolve against [`ToastOptions::defaults`] in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct ToastOptionsBuilder {
    duration: Option<Duration>,
    animation_duration: Option<Duration>,
    background_color: Option<Color>,
    border_color: Option<Color>,
    border_width: Option<f32>,
    corner_radius: Option<f32>,
    margin: Option<f32>,
    content_insets: Option<EdgeInsets>,
    min_height: Option<f32>,
    max_height: Option<f32>,
    message_alignment: Option<TextAlignment>,
    message_color: Option<Color>,
    message_font: Option<Font>,
    position: Option<ToastPosition>,
    image_position: Option<ImagePosition>,
}

impl ToastOptionsBuilder {
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = Some(duration);
        self
    }

    pub fn animation_duration(mut self, duration: Duration) -> Self {
        self.animation_duration = Some(duration);
        self
    }

    pub fn background_color(mut self, color: Color) -> Self {
        self.background_color = Some(color);
        self
    }

    pub fn border_color(mut self, color: Color) -> Self {
        self.border_color = Some(color);
        self
    }

    pub fn border_width(mut self, width: f32) -> Self {
        self.border_width = Some(width);
        self
    }

    pub fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = Some(radius);
        self
    }

    pub fn margin(mut self, margin: f32) -> Self {
        self.margin = Some(margin);
        self
    }

    pub fn content_insets(mut self, insets: EdgeInsets) -> Self {
        self.content_insets = Some(insets);
        self
    }

    pub fn min_height(mut self, height: f32) -> Self {
        self.min_height = Some(height);
        self
    }

    pub fn max_height(mut self, height: f32) -> Self {
        self.max_height = Some(height);
        self
    }

    pub fn message_alignment(mut self, alignment: TextAlignment) -> Self {
        self.message_alignment = Some(alignment);
        self
    }

    pub fn message_color(mut self, color: Color) -> Self {
        self.message_color = Some(color);
        self
    }

    pub fn message_font(mut self, font: Font) -> Self {
        self.message_font = Some(font);
        self
    }

    pub fn position(mut self, position: ToastPosition) -> Self {
        self.position = Some(position);
        self
    }

    pub fn image_position(mut self, position: ImagePosition) -> Self {
        self.image_position = Some(position);
        self
    }

    pub fn build(self) -> ToastOptions {
        let defaults = ToastOptions::defaults();
        ToastOptions {
            duration: self.duration.unwrap_or(defaults.duration),
            animation_duration: self
                .animation_duration
                .unwrap_or(defaults.animation_duration),
            background_color: self.background_color.unwrap_or(defaults.background_color),
            border_color: self.border_color.unwrap_or(defaults.border_color),
            border_width: self.border_width.unwrap_or(defaults.border_width),
            corner_radius: self.corner_radius.unwrap_or(defaults.corner_radius),
            margin: self.margin.unwrap_or(defaults.margin),
            content_insets: self.content_insets.unwrap_or(defaults.content_insets),
            min_height: self.min_height.unwrap_or(defaults.min_height),
            max_height: self.max_height.unwrap_or(defaults.max_height),
            message_alignment: self.message_alignment.unwrap_or(defaults.message_alignment),
            message_color: self.message_color.unwrap_or(defaults.message_color),
            message_font: self.message_font.unwrap_or(defaults.message_font),
            position: self.position.unwrap_or(defaults.position),
            image_position: self.image_position.unwrap_or(defaults.image_position),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_defaults() {
        let options = ToastOptions::builtin();
        assert_eq!(options.duration, Duration::from_secs(5));
        assert_eq!(options.animation_duration, Duration::from_millis(400));
        assert_eq!(options.min_height, 30.0);
        assert_eq!(options.max_height, 50.0);
        assert_eq!(options.position, ToastPosition::Bottom);
        assert_eq!(options.image_position, ImagePosition::Left);
        assert_eq!(options.message_font, Font::system(14.0));
    }

    #[test]
    fn test_builder_overrides_only_given_fields() {
        let options = ToastOptions::builder()
            .min_height(40.0)
            .max_height(60.0)
            .position(ToastPosition::Middle)
            .build();

        assert_eq!(options.min_height, 40.0);
        assert_eq!(options.max_height, 60.0);
        assert_eq!(options.position, ToastPosition::Middle);

        let defaults = ToastOptions::defaults();
        assert_eq!(options.duration, defaults.duration);
        assert_eq!(options.content_insets, defaults.content_insets);
    }

    #[test]
    fn test_empty_builder_matches_defaults() {
        assert_eq!(ToastOptions::builder().build(), ToastOptions::defaults());
    }

    #[test]
    fn test_named_font() {
        let font = Font::named("Menlo", 12.0);
        assert_eq!(font.family, FontFamily::Named("Menlo".to_string()));
        assert_eq!(font.size, 12.0);
    }
}
