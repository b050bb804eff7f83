#![forbid(unsafe_code)]

//! Listing of the host's singletons.

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

/// Resource listing, one block per resource. Same keys as the inspector.
#[derive(Debug, Clone, Default)]
pub struct Resources {
    detail: DetailConfig,
    theme: Theme,
    scroll: ScrollCursor,
    scale: DeviceScale,
}

impl Resources {
    /// A resource pane with the given display toggles and style.
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
    pub fn lines(&self, host: &dyn Host, capacity: usize) -> Vec<String> {
        let mut out = self.scroll.window(capacity);
        out.fixed("Resources");
        out.fixed("");
        ReflectiveFormatter::new(self.detail).records(host.resources(), &mut out);
        out.into_lines()
    }
}

impl Drawer for Resources {
    fn initialize(&mut self, canvas: &dyn Canvas, _now: Instant) {
        self.scale = DeviceScale::from_reported(canvas.scale_factor());
    }

    fn handle_event(&mut self, event: &Event) {
        handle_detail_event(event, &mut self.detail, &mut self.scroll, "Resources");
    }

    fn draw(&self, host: &dyn Host, canvas: &mut dyn Canvas, _now: Instant) {
        let _span = crate::debug_span!("widget_render", widget = "Resources").entered();
        let frame = PaneFrame::measure(canvas, self.scale, &self.theme);
        let lines = self.lines(host, frame.visible_lines);
        frame.draw(&lines, DETAIL_HELP, canvas, self.scale, &self.theme);
    }
}
