//! Text measurement for the message label.
//!
//! The controller never shapes text itself. Hosts with a real text stack
//! implement [`TextMeasure`]; everyone else gets [`ApproximateTextMeasure`].

use toastkit_core::geometry::Size;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::options::Font;

/// Measures wrapped text.
pub trait TextMeasure {
    /// Size of `text` rendered in `font`, wrapped to `max_width` when given.
    fn measure(&self, text: &str, font: &Font, max_width: Option<f32>) -> Size<f32>;
}

/// Column-based approximation: every display column is `advance × size` wide
/// and every line is `line_height × size` tall. Wraps on whitespace, breaking
/// words that do not fit on a line of their own.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ApproximateTextMeasure {
    pub advance: f32,
    pub line_height: f32,
}

impl Default for ApproximateTextMeasure {
    fn default() -> Self {
        Self {
            advance: 0.5,
            line_height: 1.2,
        }
    }
}

impl ApproximateTextMeasure {
    /// Wrap `text` into lines of at most `max_columns` columns, returning each line's width in columns.
    fn wrap(text: &str, max_columns: Option<usize>) -> Vec<usize> {
        let mut lines = Vec::new();

        for paragraph in text.split('\n') {
            let Some(max_columns) = max_columns else {
                lines.push(paragraph.width());
                continue;
            };

            let mut current = 0usize;
            let mut has_content = false;
            for word in paragraph.split_whitespace() {
                let word_width = word.width();
                let needed = if has_content { current + 1 + word_width } else { word_width };

                if needed <= max_columns {
                    current = needed;
                    has_content = true;
                    continue;
                }

                if has_content {
                    lines.push(current);
                    current = 0;
                    has_content = false;
                }

                if word_width <= max_columns {
                    current = word_width;
                    has_content = true;
                    continue;
                }

                // Break an overlong word at column boundaries.
                for ch in word.chars() {
                    let ch_width = ch.width().unwrap_or(0);
                    if current + ch_width > max_columns && current > 0 {
                        lines.push(current);
                        current = 0;
                    }
                    current += ch_width;
                }
                has_content = current > 0;
            }
            lines.push(current);
        }

        lines
    }
}

impl TextMeasure for ApproximateTextMeasure {
    fn measure(&self, text: &str, font: &Font, max_width: Option<f32>) -> Size<f32> {
        if text.is_empty() {
            return Size::ZERO;
        }

        let column_width = self.advance * font.size;
        let line_height = self.line_height * font.size;
        let max_columns = max_width
            .filter(|_| column_width > 0.0)
            .map(|width| ((width / column_width).floor() as usize).max(1));

        let lines = Self::wrap(text, max_columns);
        let widest = lines.iter().copied().max().unwrap_or(0);

        Size::new(widest as f32 * column_width, lines.len() as f32 * line_height)
    }
}
