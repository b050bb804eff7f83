#![forbid(unsafe_code)]

//! simscope public facade crate.
//!
//! Re-exports the types a host needs to embed the diagnostics overlay, the
//! [`Overlay`] composite drawer, and a prelude for day-to-day usage.

use std::fmt;

mod overlay;

pub use overlay::Overlay;

// --- Core re-exports -------------------------------------------------------

pub use simscope_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use simscope_core::geometry::{Rect, Size};

// --- Render re-exports -----------------------------------------------------

pub use simscope_render::{Canvas, FontMetrics, PackedRgba, Point, Primitive, RectF, TextAlign, Theme};

// --- Widget re-exports -----------------------------------------------------

pub use simscope_widgets::{
    ConfigError, Describe, DetailConfig, Drawer, FieldDescriptor, FieldValue, GroupStats, Host,
    Inspect, Inspector, Monitor, MonitorConfig, ProcessEntry, ProcessKind, Processes,
    ProcessesConfig, RecordId, Resources, WorldStats, describe,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for simscope.
#[derive(Debug)]
pub enum Error {
    /// Invalid overlay configuration.
    Config(ConfigError),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "invalid overlay configuration: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(err) => Some(err),
        }
    }
}

impl From<ConfigError> for Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err)
    }
}

/// Standard result type for simscope APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        Canvas, Describe, DetailConfig, Drawer, Error, Event, Host, Inspector, KeyCode, Monitor,
        MonitorConfig, Overlay, Processes, ProcessesConfig, RecordId, Resources, Result, Theme,
        WorldStats, describe,
    };

    pub use crate::{core, layout, render, widgets};
}

pub use simscope_core as core;
pub use simscope_layout as layout;
pub use simscope_render as render;
pub use simscope_widgets as widgets;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn config_errors_convert() {
        let err: Error = ConfigError::InvalidValue {
            key: "SIMSCOPE_PLOT_CAPACITY",
            value: "lots".into(),
            expected: "a positive integer",
        }
        .into();
        assert!(err.to_string().starts_with("invalid overlay configuration: "));
        assert!(err.to_string().contains("SIMSCOPE_PLOT_CAPACITY=lots"));
        assert!(err.source().is_some());
    }
}
