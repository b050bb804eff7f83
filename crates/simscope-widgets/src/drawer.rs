#![forbid(unsafe_code)]

//! The per-frame contract between the host loop and an overlay pane.

use crate::host::Host;
use simscope_core::event::Event;
use simscope_render::Canvas;
use web_time::Instant;

/// A pane of the overlay.
///
/// Each frame the host calls [`handle_event`](Drawer::handle_event) for every
/// pending input event, then [`update`](Drawer::update), then
/// [`draw`](Drawer::draw). Input handling only flips toggles and scroll
/// state, updating only samples the host, and drawing only reads.
pub trait Drawer {
    /// One-time setup before the first frame.
    fn initialize(&mut self, _canvas: &dyn Canvas, _now: Instant) {}

    /// React to one input event.
    fn handle_event(&mut self, _event: &Event) {}

    /// Advance sampling state from the host.
    fn update(&mut self, _host: &dyn Host, _now: Instant) {}

    /// Render the current state.
    fn draw(&self, host: &dyn Host, canvas: &mut dyn Canvas, now: Instant);
}
