#![forbid(unsafe_code)]

//! Canvas partitioning for the overlay panes.
//!
//! The monitor view is split top to bottom into a summary strip, a body,
//! and a footer strip that holds the progress bar or a help line. The body
//! is divided between a plot column and a group column depending on which
//! of the two is visible. Group row height is derived from the number of
//! groups: a few groups get tall rows up to [`MAX_ROW_HEIGHT`], many groups
//! get thinner rows, and once rows would drop below [`MIN_ROW_HEIGHT`] the
//! group column shows an overflow notice instead.

use crate::{Constraint, Flex, Rect, Sides, Size};

/// Space kept free around the canvas edge.
pub const OUTER_MARGIN: Sides = Sides::new(6, 10, 5, 6);
/// Space between stacked or adjacent sections.
pub const SECTION_GAP: u16 = 10;
/// Height of the footer strip.
pub const FOOTER_HEIGHT: u16 = 18;
/// Share of the body width taken by plots when groups are shown too.
pub const PLOT_COLUMN_PERCENT: f32 = 25.0;
/// Number of stacked plots.
pub const PLOT_COUNT: usize = 3;
/// Upper bound on a single plot's height.
pub const MAX_PLOT_HEIGHT: u16 = 150;
/// Rows thinner than this are unreadable.
pub const MIN_ROW_HEIGHT: u16 = 8;
/// Rows never grow past this.
pub const MAX_ROW_HEIGHT: u16 = 20;

/// Inputs that shape the monitor layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LayoutOptions {
    /// Height of one text line.
    pub line_height: u16,
    /// Below this canvas width the summary wraps onto a second line.
    pub summary_wrap_width: u16,
    /// Whether the plot column is visible.
    pub show_plots: bool,
    /// Whether the group column is visible.
    pub show_groups: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            line_height: 13,
            summary_wrap_width: 1080,
            show_plots: true,
            show_groups: true,
        }
    }
}

impl LayoutOptions {
    /// Set the text line height.
    #[must_use]
    pub fn line_height(mut self, line_height: u16) -> Self {
        self.line_height = line_height;
        self
    }

    /// Set the summary wrap width.
    #[must_use]
    pub fn summary_wrap_width(mut self, width: u16) -> Self {
        self.summary_wrap_width = width;
        self
    }

    /// Show or hide the plot column.
    #[must_use]
    pub fn show_plots(mut self, show: bool) -> Self {
        self.show_plots = show;
        self
    }

    /// Show or hide the group column.
    #[must_use]
    pub fn show_groups(mut self, show: bool) -> Self {
        self.show_groups = show;
        self
    }
}

/// Rectangles for one frame of the monitor view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverlayLayout {
    /// Summary text strip.
    pub summary: Rect,
    /// Number of text lines in the summary strip.
    pub summary_lines: u16,
    /// Stacked plot rectangles, top to bottom; empty when plots are hidden.
    pub plots: Vec<Rect>,
    /// Group column, if visible.
    pub groups: Option<Rect>,
    /// Progress or help strip.
    pub footer: Rect,
}

impl OverlayLayout {
    /// Partition a canvas of `canvas` logical units.
    pub fn compute(canvas: Size, options: LayoutOptions) -> Self {
        let summary_lines: u16 = if canvas.width < options.summary_wrap_width {
            2
        } else {
            1
        };
        let summary_height = summary_lines.saturating_mul(options.line_height);

        let rows = Flex::vertical()
            .margin(OUTER_MARGIN)
            .gap(SECTION_GAP)
            .constraints([
                Constraint::Fixed(summary_height),
                Constraint::Fill,
                Constraint::Fixed(FOOTER_HEIGHT),
            ])
            .split(Rect::from_size(canvas));
        let (summary, body, footer) = (rows[0], rows[1], rows[2]);

        let (plot_column, groups) = match (options.show_plots, options.show_groups) {
            (true, true) => {
                let columns = Flex::horizontal()
                    .gap(SECTION_GAP)
                    .constraints([Constraint::Percentage(PLOT_COLUMN_PERCENT), Constraint::Fill])
                    .split(body);
                (Some(columns[0]), Some(columns[1]))
            }
            (true, false) => (Some(body), None),
            (false, true) => (None, Some(body)),
            (false, false) => (None, None),
        };

        let plots = plot_column
            .map(|column| {
                Flex::vertical()
                    .gap(SECTION_GAP)
                    .constraints([Constraint::Max(MAX_PLOT_HEIGHT); PLOT_COUNT])
                    .split(column)
            })
            .unwrap_or_default();

        Self {
            summary,
            summary_lines,
            plots,
            groups,
            footer,
        }
    }
}

/// Rectangles for a scrolling text pane (inspector, resources, processes).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    /// Text area.
    pub body: Rect,
    /// Help strip.
    pub footer: Rect,
}

impl PaneLayout {
    /// Partition a canvas of `canvas` logical units.
    pub fn compute(canvas: Size) -> Self {
        let rows = Flex::vertical()
            .margin(OUTER_MARGIN)
            .gap(SECTION_GAP)
            .constraints([Constraint::Fill, Constraint::Fixed(FOOTER_HEIGHT)])
            .split(Rect::from_size(canvas));
        Self {
            body: rows[0],
            footer: rows[1],
        }
    }

    /// Number of whole text lines the body can show.
    pub fn visible_lines(&self, line_height: u16) -> usize {
        if line_height == 0 {
            return 0;
        }
        usize::from(self.body.height / line_height)
    }
}

/// Outcome of sizing the group column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowHeight {
    /// Draw one scale row plus one row per group at this height.
    Rows(u16),
    /// Rows would be illegible; show the overflow notice instead.
    Overflow,
}

/// Row height for `groups` rows plus a scale row in `available` units.
///
/// `floor(available / (groups + 1))`, capped at [`MAX_ROW_HEIGHT`];
/// [`RowHeight::Overflow`] when that falls below [`MIN_ROW_HEIGHT`].
pub fn row_height(available: u16, groups: usize) -> RowHeight {
    let slots = (groups as u64).saturating_add(1);
    let height = u64::from(available) / slots;
    if height < u64::from(MIN_ROW_HEIGHT) {
        RowHeight::Overflow
    } else {
        RowHeight::Rows(height.min(u64::from(MAX_ROW_HEIGHT)) as u16)
    }
}

/// Row geometry inside the group column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupGrid {
    area: Rect,
    row_height: u16,
}

impl GroupGrid {
    /// Lay out `groups` rows in `area`, or `None` if they do not fit legibly.
    pub fn new(area: Rect, groups: usize) -> Option<Self> {
        match row_height(area.height, groups) {
            RowHeight::Rows(row_height) => Some(Self { area, row_height }),
            RowHeight::Overflow => {
                simscope_core::trace!(height = area.height, groups, "group rows below minimum height");
                None
            }
        }
    }

    /// Height of every row.
    #[inline]
    pub fn row_height(&self) -> u16 {
        self.row_height
    }

    /// The axis row above the groups.
    pub fn scale_row(&self) -> Rect {
        self.area.row(0, self.row_height)
    }

    /// The row of the `index`-th group.
    pub fn group_row(&self, index: usize) -> Rect {
        let index = u16::try_from(index.saturating_add(1)).unwrap_or(u16::MAX);
        self.area.row(index, self.row_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_canvas_single_summary_line() {
        let layout = OverlayLayout::compute(Size::new(1200, 800), LayoutOptions::default());
        assert_eq!(layout.summary_lines, 1);
        assert_eq!(layout.summary, Rect::new(6, 6, 1184, 13));
        assert_eq!(layout.footer, Rect::new(6, 777, 1184, 18));
        assert_eq!(layout.plots.len(), PLOT_COUNT);

        let groups = layout.groups.unwrap();
        let plots = layout.plots[0];
        // 25% of the body width minus the column gap.
        assert_eq!(plots.width, 294);
        assert_eq!(groups.x, plots.right() + SECTION_GAP);
        assert_eq!(groups.right(), 1190);
    }

    #[test]
    fn narrow_canvas_wraps_summary() {
        let layout = OverlayLayout::compute(Size::new(800, 600), LayoutOptions::default());
        assert_eq!(layout.summary_lines, 2);
        assert_eq!(layout.summary.height, 26);
    }

    #[test]
    fn plots_take_full_width_without_groups() {
        let options = LayoutOptions::default().show_groups(false);
        let layout = OverlayLayout::compute(Size::new(1200, 800), options);
        assert!(layout.groups.is_none());
        assert_eq!(layout.plots[0].width, 1184);
    }

    #[test]
    fn groups_take_full_width_without_plots() {
        let options = LayoutOptions::default().show_plots(false);
        let layout = OverlayLayout::compute(Size::new(1200, 800), options);
        assert!(layout.plots.is_empty());
        assert_eq!(layout.groups.unwrap().width, 1184);
    }

    #[test]
    fn plot_height_is_capped() {
        let layout = OverlayLayout::compute(Size::new(1200, 2000), LayoutOptions::default());
        assert!(layout.plots.iter().all(|p| p.height == MAX_PLOT_HEIGHT));

        let layout = OverlayLayout::compute(Size::new(1200, 400), LayoutOptions::default());
        let heights: Vec<u16> = layout.plots.iter().map(|p| p.height).collect();
        assert!(heights.iter().all(|&h| h < MAX_PLOT_HEIGHT));
        assert!(heights.iter().max().unwrap() - heights.iter().min().unwrap() <= 2);
    }

    #[test]
    fn row_height_policy() {
        assert_eq!(row_height(100, 4), RowHeight::Rows(20));
        assert_eq!(row_height(100, 9), RowHeight::Rows(10));
        assert_eq!(row_height(100, 11), RowHeight::Rows(8));
        assert_eq!(row_height(100, 12), RowHeight::Overflow);
        assert_eq!(row_height(0, 0), RowHeight::Overflow);
        assert_eq!(row_height(1000, 0), RowHeight::Rows(MAX_ROW_HEIGHT));
    }

    #[test]
    fn group_grid_rows() {
        let grid = GroupGrid::new(Rect::new(10, 20, 300, 100), 4).unwrap();
        assert_eq!(grid.row_height(), 20);
        assert_eq!(grid.scale_row(), Rect::new(10, 20, 300, 20));
        assert_eq!(grid.group_row(0), Rect::new(10, 40, 300, 20));
        assert_eq!(grid.group_row(3), Rect::new(10, 100, 300, 20));
        assert!(GroupGrid::new(Rect::new(0, 0, 300, 50), 10).is_none());
    }

    #[test]
    fn pane_visible_lines() {
        let pane = PaneLayout::compute(Size::new(400, 300));
        assert_eq!(pane.body, Rect::new(6, 6, 384, 261));
        assert_eq!(pane.visible_lines(13), 20);
        assert_eq!(pane.visible_lines(0), 0);
    }
}
