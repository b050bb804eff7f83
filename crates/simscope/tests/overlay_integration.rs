#![forbid(unsafe_code)]

//! The composite drawer against a scripted host.

use std::cell::RefCell;
use std::rc::Rc;

use simscope::prelude::*;
use simscope::render::RecordingCanvas;
use simscope::{KeyEvent, Size};
use web_time::Instant;

/// Records the order in which entry points reach it.
struct Probe {
    name: &'static str,
    log: Rc<RefCell<Vec<String>>>,
}

impl Drawer for Probe {
    fn initialize(&mut self, _canvas: &dyn Canvas, _now: Instant) {
        self.log.borrow_mut().push(format!("{}:init", self.name));
    }

    fn handle_event(&mut self, _event: &Event) {
        self.log.borrow_mut().push(format!("{}:event", self.name));
    }

    fn update(&mut self, _host: &dyn Host, _now: Instant) {
        self.log.borrow_mut().push(format!("{}:update", self.name));
    }

    fn draw(&self, _host: &dyn Host, _canvas: &mut dyn Canvas, _now: Instant) {
        self.log.borrow_mut().push(format!("{}:draw", self.name));
    }
}

struct EmptyHost(WorldStats);

impl Host for EmptyHost {
    fn stats(&self) -> &WorldStats {
        &self.0
    }

    fn step(&self) -> u64 {
        7
    }
}

#[test]
fn entry_points_forward_in_insertion_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut overlay = Overlay::new()
        .with(Probe {
            name: "a",
            log: Rc::clone(&log),
        })
        .with(Probe {
            name: "b",
            log: Rc::clone(&log),
        });
    assert_eq!(overlay.len(), 2);

    let now = Instant::now();
    let host = EmptyHost(WorldStats::default());
    let mut canvas = RecordingCanvas::new(Size::new(800, 600));
    overlay.initialize(&canvas, now);
    overlay.handle_event(&Event::Key(KeyEvent::new(KeyCode::Char('x'))));
    overlay.update(&host, now);
    overlay.draw(&host, &mut canvas, now);

    assert_eq!(
        *log.borrow(),
        [
            "a:init", "b:init", "a:event", "b:event", "a:update", "b:update", "a:draw", "b:draw",
        ]
    );
}

#[test]
fn monitor_and_idle_inspector_share_a_surface() {
    let now = Instant::now();
    let host = EmptyHost(WorldStats::default());
    let mut canvas = RecordingCanvas::new(Size::new(1200, 800));
    let mut overlay = Overlay::new()
        .with(Monitor::new(MonitorConfig::default(), Theme::default()))
        .with(Inspector::default());
    assert_eq!(overlay.len(), 2);

    overlay.initialize(&canvas, now);
    overlay.update(&host, now);
    overlay.draw(&host, &mut canvas, now);

    assert_eq!(canvas.submissions(), 2);
    assert!(canvas.contains_text("Step: 7"));
    assert!(!canvas.contains_text("Entity"));
}
