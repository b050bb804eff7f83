#![forbid(unsafe_code)]

//! Rendering boundary for the overlay.
//!
//! The overlay never talks to a window system. It records [`Primitive`]s into a
//! [`DrawBatch`] that lives for exactly one draw call and hands the finished
//! batch to a host-provided [`Canvas`]. Font rasterisation, primitive drawing,
//! and input polling all stay on the host side of that trait.

pub mod batch;
pub mod canvas;
pub mod color;
pub mod primitive;
pub mod theme;

pub use batch::DrawBatch;
#[cfg(any(test, feature = "test-helpers"))]
pub use canvas::RecordingCanvas;
pub use canvas::Canvas;
pub use color::PackedRgba;
pub use primitive::{Point, Primitive, RectF, TextAlign};
pub use theme::{FontMetrics, Theme};
