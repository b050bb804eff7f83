#![forbid(unsafe_code)]

//! Scoped primitive buffer.
//!
//! A [`DrawBatch`] is created empty at the start of one draw call, filled,
//! and consumed by [`DrawBatch::finish`], which submits and clears it. It is
//! never stored on a drawer, so nothing recorded in one frame can leak into
//! the next.

use crate::canvas::Canvas;
use crate::color::PackedRgba;
use crate::primitive::{Point, Primitive, RectF, TextAlign};

/// Per-draw-call accumulation of primitives.
#[derive(Debug)]
pub struct DrawBatch {
    items: Vec<Primitive>,
    scale: f32,
}

impl DrawBatch {
    /// Start an empty batch whose primitives will be scaled by `scale` on flush.
    ///
    /// Non-finite or non-positive factors fall back to `1.0`.
    pub fn begin(scale: f32) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 {
            scale
        } else {
            1.0
        };
        Self {
            items: Vec::new(),
            scale,
        }
    }

    /// Device scale applied on flush.
    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Number of pending primitives.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing is pending.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Pending primitives, in logical units.
    pub fn pending(&self) -> &[Primitive] {
        &self.items
    }

    /// Record a solid rectangle. Rectangles with no area are dropped.
    pub fn fill(&mut self, rect: impl Into<RectF>, color: PackedRgba) {
        let rect = rect.into();
        if rect.width <= 0.0 || rect.height <= 0.0 {
            return;
        }
        self.items.push(Primitive::Fill { rect, color });
    }

    /// Record a one-unit rectangle outline.
    pub fn stroke(&mut self, rect: impl Into<RectF>, color: PackedRgba) {
        self.items.push(Primitive::Stroke {
            rect: rect.into(),
            color,
            thickness: 1.0,
        });
    }

    /// Record a one-unit line segment.
    pub fn line(&mut self, from: Point, to: Point, color: PackedRgba) {
        self.items.push(Primitive::Line {
            from,
            to,
            color,
            thickness: 1.0,
        });
    }

    /// Record a text run.
    pub fn text(
        &mut self,
        origin: Point,
        text: impl Into<String>,
        color: PackedRgba,
        size: f32,
        align: TextAlign,
    ) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        self.items.push(Primitive::Text {
            origin,
            text,
            color,
            size,
            align,
        });
    }

    /// Submit everything recorded so far and clear the buffer.
    pub fn flush(&mut self, canvas: &mut dyn Canvas) {
        if self.items.is_empty() {
            return;
        }
        let scale = self.scale;
        let scaled: Vec<Primitive> = if scale == 1.0 {
            std::mem::take(&mut self.items)
        } else {
            self.items.drain(..).map(|p| p.scaled(scale)).collect()
        };
        simscope_core::trace!(primitives = scaled.len(), scale, "draw batch submitted");
        canvas.submit(&scaled);
    }

    /// Flush and drop the batch.
    pub fn finish(mut self, canvas: &mut dyn Canvas) {
        self.flush(canvas);
        self.items.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::canvas::RecordingCanvas;
    use simscope_core::geometry::{Rect, Size};

    #[test]
    fn begin_is_empty_and_sanitises_scale() {
        let batch = DrawBatch::begin(f32::NAN);
        assert!(batch.is_empty());
        assert_eq!(batch.scale(), 1.0);
        assert_eq!(DrawBatch::begin(-2.0).scale(), 1.0);
        assert_eq!(DrawBatch::begin(2.0).scale(), 2.0);
    }

    #[test]
    fn empty_fills_and_text_are_dropped() {
        let mut batch = DrawBatch::begin(1.0);
        batch.fill(Rect::new(0, 0, 0, 10), PackedRgba::WHITE);
        batch.text(Point::default(), "", PackedRgba::WHITE, 13.0, TextAlign::Left);
        assert!(batch.is_empty());
    }

    #[test]
    fn flush_scales_and_clears() {
        let mut canvas = RecordingCanvas::new(Size::new(200, 100)).with_scale_factor(2.0);
        let mut batch = DrawBatch::begin(2.0);
        batch.fill(Rect::new(1, 2, 3, 4), PackedRgba::BLACK);
        batch.flush(&mut canvas);
        assert!(batch.is_empty());
        assert_eq!(
            canvas.primitives(),
            vec![&Primitive::Fill {
                rect: RectF::new(2.0, 4.0, 6.0, 8.0),
                color: PackedRgba::BLACK,
            }]
        );

        // A second flush with nothing pending submits nothing.
        batch.flush(&mut canvas);
        assert_eq!(canvas.submissions(), 1);
    }

    #[test]
    fn finish_submits_once() {
        let mut canvas = RecordingCanvas::new(Size::new(10, 10));
        let mut batch = DrawBatch::begin(1.0);
        batch.line(Point::new(0.0, 0.0), Point::new(5.0, 5.0), PackedRgba::WHITE);
        batch.stroke(Rect::new(0, 0, 5, 5), PackedRgba::WHITE);
        batch.finish(&mut canvas);
        assert_eq!(canvas.submissions(), 1);
        assert_eq!(canvas.primitives().len(), 2);
    }
}
