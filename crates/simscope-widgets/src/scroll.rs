#![forbid(unsafe_code)]

//! Scroll offset and the line window it drives.
//!
//! Scrolling is "skip the first N emitted lines": a pane walks all of its
//! content every frame and a [`LineWindow`] keeps only the lines that fall
//! after the offset and fit the viewport. Memory stays proportional to the
//! viewport, not to the content.

/// Non-negative line offset shared by one pane.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollCursor {
    offset: usize,
}

impl ScrollCursor {
    /// Cursor at the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Lines skipped from the top.
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Move one line towards the top, stopping at zero.
    pub fn scroll_up(&mut self) {
        self.offset = self.offset.saturating_sub(1);
    }

    /// Move one line down. There is no upper bound; past the end the pane is blank.
    pub fn scroll_down(&mut self) {
        self.offset = self.offset.saturating_add(1);
    }

    /// Apply a wheel delta: positive scrolls up, negative scrolls down.
    pub fn apply_wheel(&mut self, delta: i32) {
        let step = delta.unsigned_abs() as usize;
        if delta > 0 {
            self.offset = self.offset.saturating_sub(step);
        } else {
            self.offset = self.offset.saturating_add(step);
        }
    }

    /// Back to the top.
    pub fn reset(&mut self) {
        self.offset = 0;
    }

    /// A window for one formatter pass at the current offset.
    pub fn window(&self, capacity: usize) -> LineWindow {
        LineWindow::new(self.offset, capacity)
    }
}

/// Collects the visible lines of one pass.
#[derive(Debug, Clone)]
pub struct LineWindow {
    skip: usize,
    capacity: usize,
    emitted: usize,
    lines: Vec<String>,
}

impl LineWindow {
    /// Skip the first `skip` scrollable lines and keep at most `capacity` lines.
    pub fn new(skip: usize, capacity: usize) -> Self {
        Self {
            skip,
            capacity,
            emitted: 0,
            lines: Vec::with_capacity(capacity.min(256)),
        }
    }

    /// Whether the viewport is full.
    pub fn is_full(&self) -> bool {
        self.lines.len() >= self.capacity
    }

    /// Add a line that ignores the scroll offset, such as a pane title.
    pub fn fixed(&mut self, line: impl Into<String>) {
        if !self.is_full() {
            self.lines.push(line.into());
        }
    }

    /// Count one scrollable line, rendering it only if it is visible.
    pub fn emit(&mut self, render: impl FnOnce() -> String) {
        let visible = self.emitted >= self.skip && !self.is_full();
        self.emitted += 1;
        if visible {
            self.lines.push(render());
        }
    }

    /// Scrollable lines walked so far, visible or not.
    pub fn emitted(&self) -> usize {
        self.emitted
    }

    /// Visible lines so far.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Take the visible lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_up_at_top_is_noop() {
        let mut cursor = ScrollCursor::new();
        cursor.scroll_up();
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn down_then_up_round_trips() {
        let mut cursor = ScrollCursor::new();
        cursor.scroll_down();
        cursor.scroll_down();
        cursor.scroll_up();
        assert_eq!(cursor.offset(), 1);
        cursor.scroll_up();
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn wheel_clamps_at_zero() {
        let mut cursor = ScrollCursor::new();
        cursor.apply_wheel(-3);
        assert_eq!(cursor.offset(), 3);
        cursor.apply_wheel(5);
        assert_eq!(cursor.offset(), 0);
        cursor.apply_wheel(0);
        assert_eq!(cursor.offset(), 0);
        cursor.apply_wheel(i32::MIN);
        assert_eq!(cursor.offset(), 1 << 31);
        cursor.reset();
        assert_eq!(cursor.offset(), 0);
    }

    #[test]
    fn window_skips_and_caps() {
        let mut window = LineWindow::new(2, 2);
        window.fixed("title");
        for i in 0..5 {
            window.emit(|| format!("line {i}"));
        }
        assert_eq!(window.lines(), ["title", "line 2"]);
        assert_eq!(window.emitted(), 5);
    }

    #[test]
    fn suppressed_lines_are_not_rendered() {
        let mut window = LineWindow::new(1, 10);
        let mut rendered = 0;
        for _ in 0..3 {
            window.emit(|| {
                rendered += 1;
                String::new()
            });
        }
        assert_eq!(rendered, 2);
    }

    #[test]
    fn past_the_end_is_blank() {
        let mut window = ScrollCursor { offset: 100 }.window(10);
        window.emit(|| "a".into());
        assert!(window.into_lines().is_empty());
    }
}
