#![forbid(unsafe_code)]

//! Backend-neutral drawing primitives.
//!
//! Coordinates are recorded in logical units and converted to device pixels
//! exactly once, when a [`DrawBatch`](crate::DrawBatch) is flushed.

use crate::color::PackedRgba;
use simscope_core::geometry::Rect;

/// A point in canvas space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// Create a point.
    #[inline]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    fn scaled(self, factor: f32) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// A rectangle with fractional coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl RectF {
    /// Create a rectangle.
    #[inline]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    fn scaled(self, factor: f32) -> Self {
        Self::new(
            self.x * factor,
            self.y * factor,
            self.width * factor,
            self.height * factor,
        )
    }
}

impl From<Rect> for RectF {
    fn from(r: Rect) -> Self {
        Self::new(
            f32::from(r.x),
            f32::from(r.y),
            f32::from(r.width),
            f32::from(r.height),
        )
    }
}

/// Horizontal anchoring of a text run relative to its origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    /// Origin is the left edge of the run.
    #[default]
    Left,
    /// Origin is the horizontal centre of the run.
    Center,
    /// Origin is the right edge of the run.
    Right,
}

/// One drawing command.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    /// Solid rectangle.
    Fill { rect: RectF, color: PackedRgba },
    /// Rectangle outline.
    Stroke {
        rect: RectF,
        color: PackedRgba,
        thickness: f32,
    },
    /// Straight line segment.
    Line {
        from: Point,
        to: Point,
        color: PackedRgba,
        thickness: f32,
    },
    /// A single line of text; `origin.y` is the top of the line box.
    Text {
        origin: Point,
        text: String,
        color: PackedRgba,
        size: f32,
        align: TextAlign,
    },
}

impl Primitive {
    /// Convert from logical units to device pixels.
    pub(crate) fn scaled(self, factor: f32) -> Self {
        match self {
            Primitive::Fill { rect, color } => Primitive::Fill {
                rect: rect.scaled(factor),
                color,
            },
            Primitive::Stroke {
                rect,
                color,
                thickness,
            } => Primitive::Stroke {
                rect: rect.scaled(factor),
                color,
                thickness: thickness * factor,
            },
            Primitive::Line {
                from,
                to,
                color,
                thickness,
            } => Primitive::Line {
                from: from.scaled(factor),
                to: to.scaled(factor),
                color,
                thickness: thickness * factor,
            },
            Primitive::Text {
                origin,
                text,
                color,
                size,
                align,
            } => Primitive::Text {
                origin: origin.scaled(factor),
                text,
                color,
                size: size * factor,
                align,
            },
        }
    }

    /// Text content, if this is a text primitive.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Primitive::Text { text, .. } => Some(text),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_conversion_from_layout_rect() {
        let r = RectF::from(Rect::new(2, 4, 10, 6));
        assert_eq!(r, RectF::new(2.0, 4.0, 10.0, 6.0));
        assert_eq!(r.right(), 12.0);
        assert_eq!(r.bottom(), 10.0);
    }

    #[test]
    fn scaling_touches_geometry_and_sizes_only() {
        let text = Primitive::Text {
            origin: Point::new(3.0, 5.0),
            text: "TPS".into(),
            color: PackedRgba::WHITE,
            size: 13.0,
            align: TextAlign::Right,
        }
        .scaled(2.0);
        assert_eq!(
            text,
            Primitive::Text {
                origin: Point::new(6.0, 10.0),
                text: "TPS".into(),
                color: PackedRgba::WHITE,
                size: 26.0,
                align: TextAlign::Right,
            }
        );

        let line = Primitive::Line {
            from: Point::new(0.0, 1.0),
            to: Point::new(4.0, 1.0),
            color: PackedRgba::BLACK,
            thickness: 1.0,
        }
        .scaled(1.5);
        assert_eq!(
            line,
            Primitive::Line {
                from: Point::new(0.0, 1.5),
                to: Point::new(6.0, 1.5),
                color: PackedRgba::BLACK,
                thickness: 1.5,
            }
        );
    }

    #[test]
    fn as_text_only_for_text() {
        let fill = Primitive::Fill {
            rect: RectF::default(),
            color: PackedRgba::BLACK,
        };
        assert_eq!(fill.as_text(), None);
    }
}
