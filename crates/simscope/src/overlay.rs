#![forbid(unsafe_code)]

//! Composite drawer.

use std::fmt;

use simscope_core::event::Event;
use simscope_render::{Canvas, Theme};
use simscope_widgets::{Drawer, Host, Monitor, MonitorConfig};
use web_time::Instant;

use crate::Result;

/// Several drawers driven as one.
///
/// Every entry point is forwarded to each drawer in insertion order, so
/// later drawers paint over earlier ones. All drawers lay themselves out
/// over the whole canvas they are given: compose drawers that are meant to
/// share a surface (for example a custom drawer over the monitor), and give
/// each full pane its own canvas, such as one host window per pane.
#[derive(Default)]
pub struct Overlay {
    drawers: Vec<Box<dyn Drawer>>,
}

impl fmt::Debug for Overlay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Overlay")
            .field("drawers", &self.drawers.len())
            .finish()
    }
}

impl Overlay {
    /// An overlay with no drawers.
    pub fn new() -> Self {
        Self::default()
    }

    /// A single monitor configured from `SIMSCOPE_*` environment variables.
    pub fn monitor_from_env(theme: Theme) -> Result<Self> {
        let config = MonitorConfig::from_env()?;
        config.validate()?;
        Ok(Self::new().with(Monitor::new(config, theme)))
    }

    /// Append a drawer.
    #[must_use]
    pub fn with(mut self, drawer: impl Drawer + 'static) -> Self {
        self.push(drawer);
        self
    }

    /// Append a drawer.
    pub fn push(&mut self, drawer: impl Drawer + 'static) {
        self.drawers.push(Box::new(drawer));
    }

    /// Number of drawers.
    pub fn len(&self) -> usize {
        self.drawers.len()
    }

    /// Whether there are no drawers.
    pub fn is_empty(&self) -> bool {
        self.drawers.is_empty()
    }
}

impl Drawer for Overlay {
    fn initialize(&mut self, canvas: &dyn Canvas, now: Instant) {
        for drawer in &mut self.drawers {
            drawer.initialize(canvas, now);
        }
    }

    fn handle_event(&mut self, event: &Event) {
        for drawer in &mut self.drawers {
            drawer.handle_event(event);
        }
    }

    fn update(&mut self, host: &dyn Host, now: Instant) {
        for drawer in &mut self.drawers {
            drawer.update(host, now);
        }
    }

    fn draw(&self, host: &dyn Host, canvas: &mut dyn Canvas, now: Instant) {
        for drawer in &self.drawers {
            drawer.draw(host, canvas, now);
        }
    }
}
