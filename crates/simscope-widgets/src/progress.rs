#![forbid(unsafe_code)]

//! Run progress shown in the monitor's footer.

use simscope_core::geometry::Rect;
use simscope_render::{DrawBatch, Point, RectF, TextAlign, Theme};

/// Current step against the host's configured run length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Progress {
    pub step: u64,
    pub total: Option<u64>,
}

impl Progress {
    /// Progress at `step` of an optional `total`.
    pub fn new(step: u64, total: Option<u64>) -> Self {
        Self { step, total }
    }

    /// Completed fraction in `0.0..=1.0`, when the run is bounded.
    pub fn ratio(&self) -> Option<f64> {
        match self.total {
            Some(total) if total > 0 => Some((self.step as f64 / total as f64).min(1.0)),
            _ => None,
        }
    }

    /// Bar caption.
    pub fn label(&self) -> String {
        match (self.total, self.ratio()) {
            (Some(total), Some(ratio)) => format!(
                "Progress: {} / {} ({:.0}%)",
                self.step,
                total,
                ratio * 100.0
            ),
            _ => format!("Step: {}", self.step),
        }
    }

    /// Background, filled share, and centred caption.
    pub fn draw(&self, batch: &mut DrawBatch, area: Rect, theme: &Theme) {
        if area.is_empty() {
            return;
        }
        batch.fill(area, theme.progress_background);
        if let Some(ratio) = self.ratio() {
            let mut filled = RectF::from(area);
            filled.width *= ratio as f32;
            batch.fill(filled, theme.progress_fill);
        }
        let font = theme.font;
        let center = Point::new(
            f32::from(area.x) + f32::from(area.width) / 2.0,
            f32::from(area.y) + (f32::from(area.height) - f32::from(font.line_height)) / 2.0,
        );
        batch.text(center, self.label(), theme.text, font.size, TextAlign::Center);
    }
}
