#![forbid(unsafe_code)]

//! Shared input handling and drawing for the scrolling text panes.

use crate::config::DetailConfig;
use crate::scroll::ScrollCursor;
use simscope_core::event::{Event, KeyCode};
use simscope_layout::{DeviceScale, PaneLayout};
use simscope_render::{Canvas, DrawBatch, Point, TextAlign, Theme};

/// Help line of the inspector and resources panes.
pub const DETAIL_HELP: &str =
    "Toggle [f]ields, [t]ypes, [v]alues or [n]ames, scroll with arrows or mouse wheel.";

/// Apply a detail toggle or scroll action. Returns whether the event was used.
#[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
pub(crate) fn handle_detail_event(
    event: &Event,
    detail: &mut DetailConfig,
    scroll: &mut ScrollCursor,
    widget: &'static str,
) -> bool {
    if let Some(code) = event.pressed() {
        let (toggle, flag) = match code {
            KeyCode::Char('f') => ("fields", &mut detail.hide_fields),
            KeyCode::Char('t') => ("types", &mut detail.hide_types),
            KeyCode::Char('v') => ("values", &mut detail.hide_values),
            KeyCode::Char('n') => ("names", &mut detail.hide_names),
            KeyCode::Down => {
                scroll.scroll_down();
                return true;
            }
            KeyCode::Up => {
                scroll.scroll_up();
                return true;
            }
            _ => return false,
        };
        *flag = !*flag;
        crate::debug!(widget, toggle, hidden = *flag, "detail toggled");
        return true;
    }
    let delta = event.wheel_delta();
    if delta != 0 {
        scroll.apply_wheel(delta);
        return true;
    }
    false
}

/// Geometry of one text pane frame in logical units.
#[derive(Debug, Clone, Copy)]
pub(crate) struct PaneFrame {
    pub layout: PaneLayout,
    pub visible_lines: usize,
}

impl PaneFrame {
    pub(crate) fn measure(canvas: &dyn Canvas, scale: DeviceScale, theme: &Theme) -> Self {
        let layout = PaneLayout::compute(scale.logical_size(canvas.size()));
        let visible_lines = layout.visible_lines(theme.font.line_height);
        Self {
            layout,
            visible_lines,
        }
    }

    /// Draw the collected lines and the help line, then submit.
    pub(crate) fn draw(
        &self,
        lines: &[String],
        help: &str,
        canvas: &mut dyn Canvas,
        scale: DeviceScale,
        theme: &Theme,
    ) {
        let mut batch = DrawBatch::begin(scale.factor());
        let font = theme.font;
        let body = self.layout.body;
        for (row, line) in lines.iter().enumerate() {
            let y = f32::from(body.y) + row as f32 * f32::from(font.line_height);
            batch.text(
                Point::new(f32::from(body.x), y),
                line.as_str(),
                theme.text,
                font.size,
                TextAlign::Left,
            );
        }
        let footer = self.layout.footer;
        let y = f32::from(footer.y) + (f32::from(footer.height) - f32::from(font.line_height)) / 2.0;
        batch.text(
            Point::new(f32::from(footer.x), y),
            help,
            theme.text,
            font.size,
            TextAlign::Left,
        );
        batch.finish(canvas);
    }
}
