#![forbid(unsafe_code)]

//! Component view of the record the host has selected.

use crate::config::DetailConfig;
use crate::drawer::Drawer;
use crate::formatter::ReflectiveFormatter;
use crate::host::Host;
use crate::pane::{DETAIL_HELP, PaneFrame, handle_detail_event};
use crate::scroll::ScrollCursor;
use simscope_core::event::Event;
use simscope_layout::DeviceScale;
use simscope_render::{Canvas, Theme};
use web_time::Instant;

/// Record inspector.
///
/// Keys `f`, `t`, `v`, `n` hide fields, types, values, and nested field
/// names. Arrow keys and the mouse wheel scroll.
#[derive(Debug, Clone, Default)]
pub struct Inspector {
    detail: DetailConfig,
    theme: Theme,
    scroll: ScrollCursor,
    scale: DeviceScale,
}

impl Inspector {
    /// An inspector with the given display toggles and style.
    pub fn new(detail: DetailConfig, theme: Theme) -> Self {
        Self {
            detail,
            theme,
            scroll: ScrollCursor::new(),
            scale: DeviceScale::default(),
        }
    }

    /// Current display toggles.
    pub fn detail(&self) -> DetailConfig {
        self.detail
    }

    /// Current scroll position.
    pub fn scroll(&self) -> &ScrollCursor {
        &self.scroll
    }

    /// Lines the pane would show on a canvas fitting `capacity` lines.
    ///
    /// Empty when nothing is selected.
    pub fn lines(&self, host: &dyn Host, capacity: usize) -> Vec<String> {
        let selected = match host.selected() {
            Some(id) if !id.is_zero() => id,
            _ => return Vec::new(),
        };
        let mut out = self.scroll.window(capacity);
        out.fixed(format!("Entity {selected}"));
        out.fixed("");
        ReflectiveFormatter::new(self.detail).entity(host, selected, &mut out);
        out.into_lines()
    }
}

impl Drawer for Inspector {
    fn initialize(&mut self, canvas: &dyn Canvas, _now: Instant) {
        self.scale = DeviceScale::from_reported(canvas.scale_factor());
    }

    fn handle_event(&mut self, event: &Event) {
        handle_detail_event(event, &mut self.detail, &mut self.scroll, "Inspector");
    }

    fn draw(&self, host: &dyn Host, canvas: &mut dyn Canvas, _now: Instant) {
        let _span = crate::debug_span!("widget_render", widget = "Inspector").entered();
        let frame = PaneFrame::measure(canvas, self.scale, &self.theme);
        let lines = self.lines(host, frame.visible_lines);
        frame.draw(&lines, DETAIL_HELP, canvas, self.scale, &self.theme);
    }
}
