#![forbid(unsafe_code)]

//! World and performance monitor.
//!
//! Shows a summary strip, rolling plots of entity counts, memory, and step
//! rate, one bar per storage group, and a progress bar.
//!
//! Symbology of the group bars:
//! - green: groups without relations
//! - cyan: groups with relations
//! - light shade: instances in use
//! - dark shade: reserved capacity
//!
//! Keys `p` and `g` toggle the plot and group columns.

use crate::clock::{RateEstimator, SampleClock};
use crate::config::MonitorConfig;
use crate::drawer::Drawer;
use crate::host::{Host, WorldStats};
use crate::progress::Progress;
use crate::series::{MetricKey, Sample, SampleSet};
use crate::snapshot::{GroupSnapshot, SnapshotAggregator};
use crate::units::{format_elapsed, format_memory};
use simscope_core::event::{Event, KeyCode};
use simscope_core::geometry::{Rect, Size};
use simscope_layout::{AxisScale, DeviceScale, GroupGrid, LayoutOptions, OverlayLayout, fit_scale};
use simscope_render::{Canvas, DrawBatch, Point, RectF, TextAlign, Theme};
use web_time::Instant;

/// Help line of the monitor.
pub const MONITOR_HELP: &str = "Toggle [p]lots or [g]roups.";
/// Notice shown when group rows would be too thin to read.
pub const OVERFLOW_NOTICE: &str = "Too many groups";
/// Target tick count of the group capacity axis.
pub const SCALE_TICKS: u32 = 8;

const PLOTS: [&[MetricKey]; 3] = [
    &[MetricKey::Entities, MetricKey::EntityCapacity],
    &[MetricKey::Memory, MetricKey::MemoryUsed],
    &[MetricKey::StepsPerSecond],
];

/// World statistics drawer.
#[derive(Debug)]
pub struct Monitor {
    config: MonitorConfig,
    theme: Theme,
    show_plots: bool,
    show_groups: bool,
    scale: DeviceScale,
    series: SampleSet,
    clock: Option<SampleClock>,
    rate: RateEstimator,
    groups: SnapshotAggregator,
    started: Option<Instant>,
    canvas: Size,
    overflowed: bool,
}

impl Default for Monitor {
    fn default() -> Self {
        Self::new(MonitorConfig::default(), Theme::default())
    }
}

impl Monitor {
    /// A monitor with the given settings and style.
    ///
    /// Zero capacity or interval in `config` fall back to their defaults.
    pub fn new(config: MonitorConfig, theme: Theme) -> Self {
        let config = config.normalized();
        Self {
            show_plots: !config.hide_plots,
            show_groups: !config.hide_groups,
            series: SampleSet::new(config.plot_capacity),
            config,
            theme,
            scale: DeviceScale::default(),
            clock: None,
            rate: RateEstimator::new(),
            groups: SnapshotAggregator::new(),
            started: None,
            canvas: Size::ZERO,
            overflowed: false,
        }
    }

    /// Effective configuration.
    pub fn config(&self) -> &MonitorConfig {
        &self.config
    }

    /// Recorded history.
    pub fn series(&self) -> &SampleSet {
        &self.series
    }

    /// Step-rate estimate.
    pub fn rate(&self) -> &RateEstimator {
        &self.rate
    }

    /// Cached group labels.
    pub fn groups(&self) -> &SnapshotAggregator {
        &self.groups
    }

    /// Whether the group column showed the overflow notice at the last update.
    pub fn groups_overflowing(&self) -> bool {
        self.overflowed
    }

    /// Whether the plot column is shown.
    pub fn plots_visible(&self) -> bool {
        self.show_plots
    }

    /// Whether the group column is shown.
    pub fn groups_visible(&self) -> bool {
        self.show_groups
    }

    /// Summary strip text, one entry per line.
    pub fn summary(&self, host: &dyn Host, now: Instant, wrap: bool) -> Vec<String> {
        let stats = host.stats();
        let head = format!(
            "Tick: {:>8}  |  Ent.: {:>7}  |  Groups: {:>3}  |  Comp: {:>3}  |  Cache: {:>3}",
            host.step(),
            stats.entities,
            stats.groups.len(),
            stats.component_types,
            stats.cached_filters,
        );
        let (mem, unit) = format_memory(stats.memory);
        let elapsed = self
            .started
            .map(|start| now.saturating_duration_since(start))
            .unwrap_or_default();
        let tail = format!(
            "Mem: {:>6.1} {}  |  TPS: {:>8.1}  |  TPT: {:>6.2} ms  |  Time: {}",
            mem,
            unit,
            self.rate.rate(),
            self.rate.step_time().as_secs_f64() * 1000.0,
            format_elapsed(elapsed),
        );
        if wrap {
            vec![head, tail]
        } else {
            vec![format!("{head}  |  {tail}")]
        }
    }

    fn layout_options(&self) -> LayoutOptions {
        LayoutOptions::default()
            .line_height(self.theme.font.line_height)
            .summary_wrap_width(self.config.summary_wrap_width)
            .show_plots(self.show_plots)
            .show_groups(self.show_groups)
    }

    /// Re-check group legibility against the last known canvas size.
    fn track_overflow(&mut self) {
        let logical = self.scale.logical_size(self.canvas);
        if logical.is_empty() {
            return;
        }
        let groups = self.groups.len();
        let overflowed = OverlayLayout::compute(logical, self.layout_options())
            .groups
            .is_some_and(|area| GroupGrid::new(area, groups).is_none());
        if overflowed && !self.overflowed {
            crate::debug!(groups, width = logical.width, height = logical.height, "group rows overflow");
        }
        self.overflowed = overflowed;
    }

    fn sample(stats: &WorldStats, rate: f64) -> Sample {
        Sample {
            entities: stats.entities as f64,
            entity_capacity: stats.entity_capacity as f64,
            memory: stats.memory as f64,
            memory_used: stats.memory_used as f64,
            steps_per_second: rate,
        }
    }

    fn draw_summary(&self, batch: &mut DrawBatch, area: Rect, lines: &[String]) {
        let font = self.theme.font;
        for (row, line) in lines.iter().enumerate() {
            let y = f32::from(area.y) + row as f32 * f32::from(font.line_height);
            batch.text(
                Point::new(f32::from(area.x), y),
                line.as_str(),
                self.theme.text,
                font.size,
                TextAlign::Left,
            );
        }
    }

    fn draw_plot(&self, batch: &mut DrawBatch, area: Rect, keys: &[MetricKey]) {
        let theme = &self.theme;
        batch.fill(area, theme.plot_background);

        let height = f32::from(area.height);
        if let Some(scale) = self
            .series
            .max_of(keys)
            .and_then(|max| fit_scale(max, height))
        {
            let left = f32::from(area.x);
            let bottom = f32::from(area.bottom());
            for &key in keys {
                let series = self.series.get(key);
                if series.len() < 2 {
                    continue;
                }
                let x_step = f32::from(area.width) / (series.len() - 1) as f32;
                let mut prev: Option<Point> = None;
                for (i, value) in series.iter().enumerate() {
                    let point = Point::new(
                        left + i as f32 * x_step,
                        bottom - (value * f64::from(scale)) as f32,
                    );
                    if let Some(from) = prev {
                        batch.line(from, point, theme.plot_line);
                    }
                    prev = Some(point);
                }
            }
        }

        batch.stroke(area, theme.plot_border);
        if let Some(first) = keys.first() {
            batch.text(
                Point::new(f32::from(area.right()) - 3.0, f32::from(area.y) + 3.0),
                first.label(),
                theme.text,
                theme.font.size,
                TextAlign::Right,
            );
        }
    }

    fn draw_groups(&self, batch: &mut DrawBatch, area: Rect, stats: &WorldStats) {
        let rows: Vec<GroupSnapshot<'_>> = self.groups.rows(stats).collect();
        let Some(grid) = GroupGrid::new(area, rows.len()) else {
            batch.text(
                Point::new(f32::from(area.x), f32::from(area.y)),
                OVERFLOW_NOTICE,
                self.theme.text,
                self.theme.font.size,
                TextAlign::Left,
            );
            return;
        };

        let max_capacity = rows.iter().map(|row| row.capacity).max().unwrap_or(0);
        self.draw_scale(batch, grid.scale_row(), max_capacity);
        for (i, row) in rows.iter().enumerate() {
            self.draw_group(batch, grid.group_row(i), row, max_capacity);
        }
    }

    fn draw_scale(&self, batch: &mut DrawBatch, area: Rect, max_capacity: usize) {
        let width = f32::from(area.width);
        let Some(axis) = AxisScale::integer(max_capacity as u64, SCALE_TICKS, width) else {
            return;
        };
        let theme = &self.theme;
        let left = f32::from(area.x);
        let y = f32::from(area.y) + 2.0;
        batch.line(Point::new(left, y), Point::new(left + width, y), theme.plot_border);
        for tick in axis.ticks() {
            let x = left + tick.offset;
            batch.line(Point::new(x, y), Point::new(x, y + 5.0), theme.plot_border);
            batch.text(
                Point::new(x.floor(), y + 6.0),
                format!("{}", tick.value as u64),
                theme.text,
                theme.font.size,
                TextAlign::Center,
            );
        }
    }

    fn draw_group(
        &self,
        batch: &mut DrawBatch,
        area: Rect,
        row: &GroupSnapshot<'_>,
        max_capacity: usize,
    ) {
        let theme = &self.theme;
        let (used_color, reserved_color) = theme.group_colors(row.has_relations);
        let (used, reserved) = if max_capacity > 0 {
            (
                row.live as f32 / max_capacity as f32,
                row.capacity as f32 / max_capacity as f32,
            )
        } else {
            (0.0, 0.0)
        };

        let bar = RectF::from(area);
        batch.fill(
            RectF::new(bar.x, bar.y, bar.width * used, bar.height),
            used_color,
        );
        batch.fill(
            RectF::new(
                bar.x + bar.width * used,
                bar.y,
                bar.width * (reserved - used).max(0.0),
                bar.height,
            ),
            reserved_color,
        );
        batch.stroke(area, theme.group_border);

        let y = bar.y + 3.0;
        let size = theme.font.size;
        batch.text(Point::new(bar.x + 3.0, y), row.label, theme.text, size, TextAlign::Left);
        if row.has_relations {
            batch.text(
                Point::new(bar.x + 5.0, y),
                format!("{:>5} / {:>5}", row.tables_used, row.tables_total),
                theme.text,
                size,
                TextAlign::Left,
            );
        }
        batch.text(
            Point::new(bar.right() - 5.0, y),
            row.live.to_string(),
            theme.text,
            size,
            TextAlign::Right,
        );
    }

    fn draw_footer(&self, batch: &mut DrawBatch, area: Rect, host: &dyn Host) {
        let progress = Progress::new(host.step(), host.run_length());
        progress.draw(batch, area, &self.theme);

        // The help line only goes where it cannot overlap the centred caption.
        let font = self.theme.font;
        let caption = font.text_width(&progress.label());
        let help = font.text_width(MONITOR_HELP);
        let half = f32::from(area.width) / 2.0;
        if caption / 2.0 + help + 10.0 < half {
            let y = f32::from(area.y) + (f32::from(area.height) - f32::from(font.line_height)) / 2.0;
            batch.text(
                Point::new(f32::from(area.right()) - 5.0, y),
                MONITOR_HELP,
                self.theme.text,
                font.size,
                TextAlign::Right,
            );
        }
    }
}

impl Drawer for Monitor {
    fn initialize(&mut self, canvas: &dyn Canvas, now: Instant) {
        self.scale = DeviceScale::from_reported(canvas.scale_factor());
        self.canvas = canvas.size();
        self.clock = Some(SampleClock::new(self.config.sample_interval, now));
        self.started = Some(now);
        crate::debug!(
            scale = self.scale.factor(),
            capacity = self.config.plot_capacity,
            "monitor initialised"
        );
    }

    fn handle_event(&mut self, event: &Event) {
        if let Event::Resize { width, height } = *event {
            self.canvas = Size::new(width, height);
            return;
        }
        match event.pressed() {
            Some(KeyCode::Char('p')) => {
                self.show_plots = !self.show_plots;
                crate::debug!(visible = self.show_plots, "monitor plots toggled");
            }
            Some(KeyCode::Char('g')) => {
                self.show_groups = !self.show_groups;
                crate::debug!(visible = self.show_groups, "monitor groups toggled");
            }
            _ => {}
        }
    }

    fn update(&mut self, host: &dyn Host, now: Instant) {
        self.started.get_or_insert(now);
        self.rate.update(host.step(), now);

        let stats = host.stats();
        self.groups.update(stats);
        self.track_overflow();

        let interval = self.config.sample_interval;
        let clock = self
            .clock
            .get_or_insert_with(|| SampleClock::new(interval, now));
        if clock.poll(now) {
            let sample = Self::sample(stats, self.rate.rate());
            self.series.append(&sample);
            crate::trace!(
                entities = sample.entities,
                memory = sample.memory,
                steps_per_second = sample.steps_per_second,
                "sample taken"
            );
        }
    }

    fn draw(&self, host: &dyn Host, canvas: &mut dyn Canvas, now: Instant) {
        let _span = crate::debug_span!(
            "widget_render",
            widget = "Monitor",
            groups = self.groups.len(),
            samples = self.series.len()
        )
        .entered();

        let logical = self.scale.logical_size(canvas.size());
        let layout = OverlayLayout::compute(logical, self.layout_options());
        let mut batch = DrawBatch::begin(self.scale.factor());

        let summary = self.summary(host, now, layout.summary_lines > 1);
        self.draw_summary(&mut batch, layout.summary, &summary);

        for (area, keys) in layout.plots.iter().zip(PLOTS) {
            self.draw_plot(&mut batch, *area, keys);
        }

        if let Some(area) = layout.groups {
            self.draw_groups(&mut batch, area, host.stats());
        }

        self.draw_footer(&mut batch, layout.footer, host);
        batch.finish(canvas);
    }
}
