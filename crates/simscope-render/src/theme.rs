#![forbid(unsafe_code)]

//! Overlay style.
//!
//! A [`Theme`] is passed into every drawer's constructor. There is no global
//! default font or colour state; two overlays in one process can look
//! different.

use crate::color::PackedRgba;
use unicode_width::UnicodeWidthStr;

/// Fixed-pitch font metrics in logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    /// Nominal glyph size handed to the backend.
    pub size: f32,
    /// Horizontal advance of one column.
    pub advance: f32,
    /// Height of one text line.
    pub line_height: u16,
}

impl FontMetrics {
    /// Width of `text` in logical units, counting wide glyphs as two columns.
    pub fn text_width(&self, text: &str) -> f32 {
        UnicodeWidthStr::width(text) as f32 * self.advance
    }
}

impl Default for FontMetrics {
    fn default() -> Self {
        Self {
            size: 13.0,
            advance: 7.0,
            line_height: 13,
        }
    }
}

/// Colours and font used by all overlay drawers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    pub font: FontMetrics,
    /// Body text.
    pub text: PackedRgba,
    /// Plot background.
    pub plot_background: PackedRgba,
    /// Plot and axis frame.
    pub plot_border: PackedRgba,
    /// Series lines.
    pub plot_line: PackedRgba,
    /// Used share of a group without relations.
    pub group_plain: PackedRgba,
    /// Reserved share of a group without relations.
    pub group_plain_reserved: PackedRgba,
    /// Used share of a group with relations.
    pub group_related: PackedRgba,
    /// Reserved share of a group with relations.
    pub group_related_reserved: PackedRgba,
    /// Outline around each group row.
    pub group_border: PackedRgba,
    /// Empty part of the progress bar.
    pub progress_background: PackedRgba,
    /// Completed part of the progress bar.
    pub progress_fill: PackedRgba,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            font: FontMetrics::default(),
            text: PackedRgba::rgb(200, 200, 200),
            plot_background: PackedRgba::rgb(0, 25, 10),
            plot_border: PackedRgba::rgb(140, 140, 140),
            plot_line: PackedRgba::WHITE,
            group_plain: PackedRgba::rgb(0, 130, 40),
            group_plain_reserved: PackedRgba::rgb(20, 80, 25),
            group_related: PackedRgba::rgb(0, 100, 120),
            group_related_reserved: PackedRgba::rgb(20, 50, 70),
            group_border: PackedRgba::rgb(40, 40, 40),
            progress_background: PackedRgba::rgb(60, 60, 60),
            progress_fill: PackedRgba::rgb(0, 180, 80),
        }
    }
}

impl Theme {
    /// Swap the font metrics.
    #[must_use]
    pub fn with_font(mut self, font: FontMetrics) -> Self {
        self.font = font;
        self
    }

    /// Colours for a group row: (used, reserved).
    pub fn group_colors(&self, has_relations: bool) -> (PackedRgba, PackedRgba) {
        if has_relations {
            (self.group_related, self.group_related_reserved)
        } else {
            (self.group_plain, self.group_plain_reserved)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_width_counts_columns() {
        let font = FontMetrics::default();
        assert_eq!(font.text_width(""), 0.0);
        assert_eq!(font.text_width("TPS"), 21.0);
        // Wide CJK glyph occupies two columns.
        assert_eq!(font.text_width("界"), 14.0);
    }

    #[test]
    fn group_colors_distinguish_relation_class() {
        let theme = Theme::default();
        assert_eq!(
            theme.group_colors(false),
            (theme.group_plain, theme.group_plain_reserved)
        );
        assert_eq!(
            theme.group_colors(true),
            (theme.group_related, theme.group_related_reserved)
        );
    }
}
