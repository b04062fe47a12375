//! Toast layout derivation.
//!
//! Each show builds a small Taffy tree:
//!
//! ```text
//! host   (column, items centered, justified per ToastPosition, padded by margin)
//! └─ toast  (row, width 300, height clamped to [min_height, max_height], padded by content insets)
//!    └─ label  (fills the remaining row, measured with TextMeasure)
//! ```
//!
//! The image sits outside the flex flow: it never drives the toast height.
//! Its frame is derived from the resolved toast size, vertically centered and
//! pinned to the configured side, and the label's margin reserves room for it.

use std::fmt;

use taffy::{
    AlignItems, AvailableSpace, Dimension, Display, FlexDirection, JustifyContent,
    LengthPercentage, LengthPercentageAuto, Style, TaffyError, TaffyTree,
};
use toastkit_core::geometry::{Rect, Size};
use toastkit_core::profiling::profile_function;

use crate::options::{ImagePosition, ToastOptions, ToastPosition};
use crate::text::TextMeasure;
use crate::toast::ToastImage;

/// Fixed width of every toast.
pub const TOAST_WIDTH: f32 = 300.0;

/// Resolved geometry for one toast.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ToastLayout {
    /// Toast frame in host coordinates.
    pub frame: Rect<f32>,
    /// Message label frame in toast coordinates.
    pub label: Rect<f32>,
    /// Image frame in toast coordinates.
    pub image: Option<Rect<f32>>,
}

/// Taffy rejected the layout tree.
#[derive(Debug)]
pub struct LayoutError(TaffyError);

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Toast layout failed: {}", self.0)
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.0)
    }
}

impl From<TaffyError> for LayoutError {
    fn from(err: TaffyError) -> Self {
        LayoutError(err)
    }
}

/// Node context marking the message label, the only measured leaf.
struct MessageLabel;

/// Size of the image view: `min_height - (insets.top + insets.bottom) / 2` tall,
/// as wide as the image's natural aspect ratio allows.
pub fn image_size(options: &ToastOptions, image: &ToastImage) -> Size<f32> {
    let height = (options.min_height - options.content_insets.vertical() / 2.0).max(0.0);
    let width = image
        .natural_size
        .aspect_ratio()
        .map_or(height, |ratio| height * ratio);
    Size::new(width, height)
}

fn length_rect(top: f32, left: f32, bottom: f32, right: f32) -> taffy::Rect<LengthPercentage> {
    taffy::Rect {
        left: LengthPercentage::Length(left),
        right: LengthPercentage::Length(right),
        top: LengthPercentage::Length(top),
        bottom: LengthPercentage::Length(bottom),
    }
}

fn host_style(host: Size<f32>, options: &ToastOptions) -> Style {
    let (justify, top, bottom) = match options.position {
        ToastPosition::Top => (JustifyContent::FlexStart, options.margin, 0.0),
        ToastPosition::Middle => (JustifyContent::Center, 0.0, 0.0),
        ToastPosition::Bottom => (JustifyContent::FlexEnd, 0.0, options.margin),
    };

    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Column,
        align_items: Some(AlignItems::Center),
        justify_content: Some(justify),
        size: taffy::Size {
            width: Dimension::Length(host.width),
            height: Dimension::Length(host.height),
        },
        padding: length_rect(top, 0.0, bottom, 0.0),
        ..Default::default()
    }
}

fn toast_style(options: &ToastOptions) -> Style {
    let insets = options.content_insets;

    Style {
        display: Display::Flex,
        flex_direction: FlexDirection::Row,
        align_items: Some(AlignItems::Stretch),
        flex_shrink: 0.0,
        size: taffy::Size {
            width: Dimension::Length(TOAST_WIDTH),
            height: Dimension::Auto,
        },
        min_size: taffy::Size {
            width: Dimension::Auto,
            height: Dimension::Length(options.min_height),
        },
        max_size: taffy::Size {
            width: Dimension::Auto,
            height: Dimension::Length(options.max_height),
        },
        padding: length_rect(insets.top, insets.left, insets.bottom, insets.right),
        ..Default::default()
    }
}

fn label_style(options: &ToastOptions, image: Option<Size<f32>>) -> Style {
    let insets = options.content_insets;
    let (left, right) = match (image, options.image_position) {
        (None, _) => (0.0, 0.0),
        (Some(size), ImagePosition::Left) => (size.width + insets.left, 0.0),
        (Some(size), ImagePosition::Right) => (0.0, size.width + insets.right),
    };

    Style {
        flex_grow: 1.0,
        flex_shrink: 1.0,
        flex_basis: Dimension::Length(0.0),
        min_size: taffy::Size {
            width: Dimension::Length(0.0),
            height: Dimension::Auto,
        },
        margin: taffy::Rect {
            left: LengthPercentageAuto::Length(left),
            right: LengthPercentageAuto::Length(right),
            top: LengthPercentageAuto::Length(0.0),
            bottom: LengthPercentageAuto::Length(0.0),
        },
        ..Default::default()
    }
}

/// Compute the toast layout inside a host of size `host`.
pub fn compute_layout(
    host: Size<f32>,
    message: &str,
    image: Option<&ToastImage>,
    options: &ToastOptions,
    measure: &dyn TextMeasure,
) -> Result<ToastLayout, LayoutError> {
    profile_function!();

    let image_size = image.map(|image| image_size(options, image));

    let mut tree: TaffyTree<MessageLabel> = TaffyTree::new();
    tree.disable_rounding();

    let label = tree.new_leaf_with_context(label_style(options, image_size), MessageLabel)?;
    let toast = tree.new_with_children(toast_style(options), &[label])?;
    let root = tree.new_with_children(host_style(host, options), &[toast])?;

    let font = &options.message_font;
    let measure_fn = |known_dimensions: taffy::Size<Option<f32>>,
                      available_space: taffy::Size<AvailableSpace>,
                      _node_id: taffy::NodeId,
                      node_context: Option<&mut MessageLabel>,
                      _style: &Style|
     -> taffy::Size<f32> {
        if let (Some(width), Some(height)) = (known_dimensions.width, known_dimensions.height) {
            return taffy::Size { width, height };
        }
        if node_context.is_none() {
            return taffy::Size {
                width: known_dimensions.width.unwrap_or(0.0),
                height: known_dimensions.height.unwrap_or(0.0),
            };
        }

        let max_width = known_dimensions.width.or(match available_space.width {
            AvailableSpace::Definite(width) => Some(width),
            AvailableSpace::MinContent => Some(0.0),
            AvailableSpace::MaxContent => None,
        });
        let measured = measure.measure(message, font, max_width);

        taffy::Size {
            width: known_dimensions.width.unwrap_or(measured.width),
            height: known_dimensions.height.unwrap_or(measured.height),
        }
    };

    let available = taffy::Size {
        width: AvailableSpace::Definite(host.width),
        height: AvailableSpace::Definite(host.height),
    };
    tree.compute_layout_with_measure(root, available, measure_fn)?;

    let toast_box = tree.layout(toast)?;
    let frame = Rect::new(
        toast_box.location.x,
        toast_box.location.y,
        toast_box.size.width,
        toast_box.size.height,
    );

    let label_box = tree.layout(label)?;
    let label = Rect::new(
        label_box.location.x,
        label_box.location.y,
        label_box.size.width,
        label_box.size.height,
    );

    let insets = options.content_insets;
    let image = image_size.map(|size| {
        let x = match options.image_position {
            ImagePosition::Left => insets.left,
            ImagePosition::Right => frame.width - insets.right - size.width,
        };
        Rect::new(x, (frame.height - size.height) / 2.0, size.width, size.height)
    });

    tracing::trace!(?frame, ?label, ?image, "computed toast layout");

    Ok(ToastLayout {
        frame,
        label,
        image,
    })
}
