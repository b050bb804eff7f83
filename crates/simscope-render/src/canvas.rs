#![forbid(unsafe_code)]

//! The host-side drawing surface.

use crate::primitive::Primitive;
use simscope_core::geometry::Size;

/// A drawing surface provided by the host's windowing/rendering backend.
pub trait Canvas {
    /// Drawable size in device pixels.
    fn size(&self) -> Size;

    /// Device pixels per logical unit, as reported by the display.
    fn scale_factor(&self) -> f32 {
        1.0
    }

    /// Draw a batch of primitives, already converted to device pixels.
    fn submit(&mut self, primitives: &[Primitive]);
}

/// A canvas that records every submission, for tests and headless runs.
#[cfg(any(test, feature = "test-helpers"))]
#[derive(Debug, Clone, Default)]
pub struct RecordingCanvas {
    size: Size,
    scale_factor: f32,
    batches: Vec<Vec<Primitive>>,
}

#[cfg(any(test, feature = "test-helpers"))]
impl RecordingCanvas {
    /// A recording canvas with the given device size and a scale factor of 1.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            scale_factor: 1.0,
            batches: Vec::new(),
        }
    }

    /// Report a different display scale factor.
    #[must_use]
    pub fn with_scale_factor(mut self, scale_factor: f32) -> Self {
        self.scale_factor = scale_factor;
        self
    }

    /// Change the reported size, as a window resize would.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
    }

    /// Number of `submit` calls received.
    pub fn submissions(&self) -> usize {
        self.batches.len()
    }

    /// All recorded primitives, in submission order.
    pub fn primitives(&self) -> Vec<&Primitive> {
        self.batches.iter().flatten().collect()
    }

    /// All recorded text runs, in submission order.
    pub fn texts(&self) -> Vec<&str> {
        self.batches
            .iter()
            .flatten()
            .filter_map(Primitive::as_text)
            .collect()
    }

    /// Whether any recorded text run contains `needle`.
    pub fn contains_text(&self, needle: &str) -> bool {
        self.texts().iter().any(|t| t.contains(needle))
    }

    /// Forget everything recorded so far.
    pub fn clear(&mut self) {
        self.batches.clear();
    }
}

#[cfg(any(test, feature = "test-helpers"))]
impl Canvas for RecordingCanvas {
    fn size(&self) -> Size {
        self.size
    }

    fn scale_factor(&self) -> f32 {
        self.scale_factor
    }

    fn submit(&mut self, primitives: &[Primitive]) {
        self.batches.push(primitives.to_vec());
    }
}
