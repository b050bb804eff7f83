#![forbid(unsafe_code)]

//! Tracing integration tests.
//!
//! Spans and events enabled:
//!   cargo test -p simscope-widgets --features tracing --test tracing_tests
//!
//! Zero-overhead verification (no feature):
//!   cargo test -p simscope-widgets --test tracing_tests -- zero_overhead

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use simscope_core::geometry::Size;
use simscope_render::RecordingCanvas;
#[cfg(feature = "tracing")]
use simscope_widgets::Inspector;
use simscope_widgets::{Drawer, GroupStats, Host, Monitor, WorldStats};
use web_time::Instant;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry::LookupSpan;

// ============================================================================
// Test Infrastructure
// ============================================================================

/// A captured span or event with its fields.
#[derive(Debug, Clone)]
#[allow(dead_code)]
struct Captured {
    name: String,
    fields: HashMap<String, String>,
}

/// A tracing Layer that records span and event metadata.
struct Capture {
    spans: Arc<Mutex<Vec<Captured>>>,
    events: Arc<Mutex<Vec<Captured>>>,
}

/// Handle to read what was captured.
#[allow(dead_code)]
struct CaptureHandle {
    spans: Arc<Mutex<Vec<Captured>>>,
    events: Arc<Mutex<Vec<Captured>>>,
}

#[allow(dead_code)]
impl CaptureHandle {
    fn spans(&self) -> Vec<Captured> {
        self.spans.lock().unwrap().clone()
    }

    fn messages(&self) -> Vec<String> {
        self.events
            .lock()
            .unwrap()
            .iter()
            .filter_map(|e| e.fields.get("message").cloned())
            .collect()
    }
}

/// Visitor that extracts fields.
struct FieldVisitor(Vec<(String, String)>);

impl tracing::field::Visit for FieldVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        self.0.push((field.name().to_string(), format!("{value:?}")));
    }

    fn record_u64(&mut self, field: &tracing::field::Field, value: u64) {
        self.0.push((field.name().to_string(), value.to_string()));
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        self.0.push((field.name().to_string(), value.to_string()));
    }
}

impl<S> tracing_subscriber::Layer<S> for Capture
where
    S: tracing::Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_new_span(
        &self,
        attrs: &tracing::span::Attributes<'_>,
        _id: &tracing::span::Id,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        let mut visitor = FieldVisitor(Vec::new());
        attrs.record(&mut visitor);
        self.spans.lock().unwrap().push(Captured {
            name: attrs.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }

    fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
        let mut visitor = FieldVisitor(Vec::new());
        event.record(&mut visitor);
        self.events.lock().unwrap().push(Captured {
            name: event.metadata().name().to_string(),
            fields: visitor.0.into_iter().collect(),
        });
    }
}

/// Run `f` under a subscriber that captures everything.
fn with_capture<F: FnOnce()>(f: F) -> CaptureHandle {
    let spans = Arc::new(Mutex::new(Vec::new()));
    let events = Arc::new(Mutex::new(Vec::new()));
    let layer = Capture {
        spans: spans.clone(),
        events: events.clone(),
    };
    let subscriber = tracing_subscriber::registry().with(layer);
    tracing::subscriber::with_default(subscriber, f);
    CaptureHandle { spans, events }
}

struct StatsHost {
    stats: WorldStats,
    step: u64,
}

impl Host for StatsHost {
    fn stats(&self) -> &WorldStats {
        &self.stats
    }

    fn step(&self) -> u64 {
        self.step
    }
}

fn host(groups: usize) -> StatsHost {
    StatsHost {
        stats: WorldStats {
            entities: 5,
            groups: (0..groups)
                .map(|i| GroupStats {
                    type_names: vec![format!("C{i}")],
                    capacity: 16,
                    ..GroupStats::default()
                })
                .collect(),
            ..WorldStats::default()
        },
        step: 0,
    }
}

/// Run a monitor through a few frames.
fn drive_monitor(groups: usize) {
    let t0 = Instant::now();
    let mut canvas = RecordingCanvas::new(Size::new(1200, 800));
    let mut monitor = Monitor::default();
    monitor.initialize(&canvas, t0);
    let mut h = host(groups);
    for i in 0..3u64 {
        h.step = i * 100;
        let now = t0 + Duration::from_millis(i * 1100);
        monitor.update(&h, now);
        monitor.draw(&h, &mut canvas, now);
    }
}

// ============================================================================
// Tests
// ============================================================================

#[test]
#[cfg(feature = "tracing")]
fn draw_passes_open_widget_spans() {
    let handle = with_capture(|| {
        drive_monitor(2);
        let t0 = Instant::now();
        let mut canvas = RecordingCanvas::new(Size::new(800, 600));
        Inspector::default().draw(&host(0), &mut canvas, t0);
    });

    let spans = handle.spans();
    let widgets: Vec<_> = spans
        .iter()
        .filter(|s| s.name == "widget_render")
        .filter_map(|s| s.fields.get("widget"))
        .collect();

    assert_eq!(
        widgets.iter().filter(|w| w.contains("Monitor")).count(),
        3,
        "one span per monitor draw, got: {widgets:?}"
    );
    assert!(
        widgets.iter().any(|w| w.contains("Inspector")),
        "should have an Inspector span, got: {widgets:?}"
    );
}

#[test]
#[cfg(feature = "tracing")]
fn sampling_and_rebuilds_are_logged() {
    let handle = with_capture(|| drive_monitor(2));
    let messages = handle.messages();

    assert_eq!(
        messages.iter().filter(|m| *m == "group snapshot rebuilt").count(),
        1,
        "labels rebuild once for a stable group count, got: {messages:?}"
    );
    assert_eq!(
        messages.iter().filter(|m| *m == "sample taken").count(),
        2,
        "got: {messages:?}"
    );
    assert!(messages.iter().any(|m| m == "step rate recomputed"));
}

#[test]
#[cfg(feature = "tracing")]
fn overflow_is_logged_once() {
    let handle = with_capture(|| drive_monitor(1000));
    let messages = handle.messages();
    assert_eq!(
        messages.iter().filter(|m| *m == "group rows overflow").count(),
        1,
        "got: {messages:?}"
    );
}

#[test]
fn zero_overhead_without_subscriber() {
    // Without a subscriber (or without the feature) drawing must behave identically.
    drive_monitor(4);
    let handle = with_capture(|| {});
    assert!(handle.spans().is_empty());
}
