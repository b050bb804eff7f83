#![forbid(unsafe_code)]

//! Listing of the host's scheduled processes.
//!
//! General processes come first, then a "Render processes" section with
//! the render-phase ones. Besides the detail keys, `u` hides the render
//! section.

use crate::config::ProcessesConfig;
use crate::drawer::Drawer;
use crate::formatter::ReflectiveFormatter;
use crate::host::{Host, ProcessKind};
use crate::pane::{PaneFrame, handle_detail_event};
use crate::scroll::ScrollCursor;
use simscope_core::event::{Event, KeyCode};
use simscope_layout::DeviceScale;
use simscope_render::{Canvas, Theme};
use web_time::Instant;

/// Help line of the processes pane.
pub const PROCESSES_HELP: &str = "Toggle [u]i processes, [f]ields, [t]ypes, [v]alues or [n]ames, scroll with arrows or mouse wheel.";

/// Process listing.
#[derive(Debug, Clone, Default)]
pub struct Processes {
    config: ProcessesConfig,
    theme: Theme,
    scroll: ScrollCursor,
    scale: DeviceScale,
}

impl Processes {
    /// A process pane with the given column toggles and style.
    pub fn new(config: ProcessesConfig, theme: Theme) -> Self {
        Self {
            config,
            theme,
            scroll: ScrollCursor::new(),
            scale: DeviceScale::default(),
        }
    }

    /// Current column toggles.
    pub fn config(&self) -> ProcessesConfig {
        self.config
    }

    /// Current scroll position.
    pub fn scroll(&self) -> &ScrollCursor {
        &self.scroll
    }

    /// Lines the pane would show on a canvas fitting `capacity` lines.
    pub fn lines(&self, host: &dyn Host, capacity: usize) -> Vec<String> {
        let entries = host.processes();
        let formatter = ReflectiveFormatter::new(self.config.detail);
        let mut out = self.scroll.window(capacity);

        out.fixed("Processes");
        out.fixed("");
        formatter.records(
            entries
                .iter()
                .filter(|entry| entry.kind == ProcessKind::General)
                .map(|entry| entry.record),
            &mut out,
        );

        if !self.config.hide_render {
            out.fixed("");
            out.fixed("Render processes");
            out.fixed("");
            formatter.records(
                entries
                    .iter()
                    .filter(|entry| entry.kind == ProcessKind::Render)
                    .map(|entry| entry.record),
                &mut out,
            );
        }
        out.into_lines()
    }
}

impl Drawer for Processes {
    fn initialize(&mut self, canvas: &dyn Canvas, _now: Instant) {
        self.scale = DeviceScale::from_reported(canvas.scale_factor());
    }

    fn handle_event(&mut self, event: &Event) {
        if event.pressed() == Some(KeyCode::Char('u')) {
            self.config.hide_render = !self.config.hide_render;
            crate::debug!(hidden = self.config.hide_render, "render processes toggled");
            return;
        }
        handle_detail_event(event, &mut self.config.detail, &mut self.scroll, "Processes");
    }

    fn draw(&self, host: &dyn Host, canvas: &mut dyn Canvas, _now: Instant) {
        let _span = crate::debug_span!("widget_render", widget = "Processes").entered();
        let frame = PaneFrame::measure(canvas, self.scale, &self.theme);
        let lines = self.lines(host, frame.visible_lines);
        frame.draw(&lines, PROCESSES_HELP, canvas, self.scale, &self.theme);
    }
}
