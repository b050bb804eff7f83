#![forbid(unsafe_code)]

//! The simscope overlay engine.
//!
//! # Role in simscope
//! `simscope-widgets` holds everything that turns a running simulation into
//! overlay content: periodic sampling into fixed-capacity series, step-rate
//! estimation, cached group labels, field introspection, and the four
//! drawers that render it all.
//!
//! # How it fits in the system
//! The host implements [`Host`] for its world and drives each [`Drawer`]
//! once per frame: events, then update, then draw. Geometry comes from
//! `simscope-layout`; output goes through the [`Canvas`](simscope_render::Canvas)
//! boundary of `simscope-render`.
//!
//! # Drawers
//! - [`Monitor`] - summary, time-series plots, group bars, progress
//! - [`Inspector`] - components of the selected record
//! - [`Resources`] - singletons
//! - [`Processes`] - scheduled processes

pub mod clock;
pub mod config;
pub mod drawer;
pub mod formatter;
pub mod host;
pub mod inspector;
pub mod monitor;
mod pane;
pub mod processes;
pub mod progress;
pub mod reflect;
pub mod resources;
pub mod scroll;
pub mod series;
pub mod snapshot;
pub mod units;

pub(crate) use simscope_core::{debug, debug_span, trace};

pub use clock::{RateEstimator, SampleClock};
pub use config::{ConfigError, DetailConfig, MonitorConfig, ProcessesConfig};
pub use drawer::Drawer;
pub use formatter::ReflectiveFormatter;
pub use host::{GroupStats, Host, ProcessEntry, ProcessKind, RecordId, WorldStats};
pub use inspector::Inspector;
pub use monitor::Monitor;
pub use pane::DETAIL_HELP;
pub use processes::Processes;
pub use progress::Progress;
pub use reflect::{Describe, FieldDescriptor, FieldValue, Inspect};
pub use resources::Resources;
pub use scroll::{LineWindow, ScrollCursor};
pub use series::{MetricKey, RollingSeries, Sample, SampleSet};
pub use snapshot::{GroupSnapshot, SnapshotAggregator};
