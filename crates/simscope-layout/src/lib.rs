#![forbid(unsafe_code)]

//! Layout primitives and solvers for the overlay.
//!
//! - [`Flex`] - 1D constraint-based layout (rows or columns)
//! - [`Constraint`] - Size constraints (Fixed, Percentage, Min, Max, Fill)
//! - [`overlay`] - partitioning of the canvas into summary, plots, groups, and footer
//! - [`axis`] - "nice" tick steps, value-to-pixel scales, and device scale correction

pub mod axis;
pub mod overlay;

pub use axis::{AxisScale, DeviceScale, PLOT_HEADROOM, Tick, fit_scale, nice_step};
pub use overlay::{GroupGrid, LayoutOptions, OverlayLayout, PaneLayout, RowHeight, row_height};
pub use simscope_core::geometry::{Rect, Sides, Size};

use std::cmp::min;

/// A constraint on the size of a layout area.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Constraint {
    /// An exact size in logical units.
    Fixed(u16),
    /// A percentage of the total available size (0.0 to 100.0).
    Percentage(f32),
    /// A minimum size; grows to share leftover space.
    Min(u16),
    /// A maximum size; grows from zero but never past the bound.
    Max(u16),
    /// Fill remaining space (like Min(0) but semantically clearer).
    Fill,
}

/// The direction to layout items.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Direction {
    /// Top to bottom.
    #[default]
    Vertical,
    /// Left to right.
    Horizontal,
}

/// A flexible layout container.
#[derive(Debug, Clone, Default)]
pub struct Flex {
    direction: Direction,
    constraints: Vec<Constraint>,
    margin: Sides,
    gap: u16,
}

impl Flex {
    /// Create a new vertical flex layout.
    pub fn vertical() -> Self {
        Self {
            direction: Direction::Vertical,
            ..Default::default()
        }
    }

    /// Create a new horizontal flex layout.
    pub fn horizontal() -> Self {
        Self {
            direction: Direction::Horizontal,
            ..Default::default()
        }
    }

    /// Set the constraints.
    pub fn constraints(mut self, constraints: impl IntoIterator<Item = Constraint>) -> Self {
        self.constraints = constraints.into_iter().collect();
        self
    }

    /// Set the margin.
    pub fn margin(mut self, margin: Sides) -> Self {
        self.margin = margin;
        self
    }

    /// Set the gap between items.
    pub fn gap(mut self, gap: u16) -> Self {
        self.gap = gap;
        self
    }

    /// Partition `area` along the main axis, one rectangle per constraint.
    ///
    /// An area consumed entirely by the margin yields empty rectangles.
    pub fn split(&self, area: Rect) -> Vec<Rect> {
        let inner = area.inner(self.margin);
        if inner.is_empty() {
            return vec![Rect::default(); self.constraints.len()];
        }
        let Some(gaps) = self.constraints.len().checked_sub(1) else {
            return Vec::new();
        };

        let (origin, extent) = match self.direction {
            Direction::Horizontal => (inner.x, inner.width),
            Direction::Vertical => (inner.y, inner.height),
        };
        let gap_total = u16::try_from(gaps as u64 * u64::from(self.gap)).unwrap_or(u16::MAX);
        let sizes = solve_constraints(&self.constraints, extent.saturating_sub(gap_total));

        let mut cursor = origin;
        sizes
            .into_iter()
            .map(|size| {
                let rect = match self.direction {
                    Direction::Horizontal => Rect::new(cursor, inner.y, size, inner.height),
                    Direction::Vertical => Rect::new(inner.x, cursor, inner.width, size),
                };
                cursor = cursor.saturating_add(size).saturating_add(self.gap);
                rect
            })
            .collect()
    }
}

/// Solve 1D constraints to determine sizes.
///
/// Fixed, Percentage, and Min take their share up front in declaration order;
/// the remainder is spread evenly over Min, Max, and Fill, with Max items
/// clamped and removed from the pool until no bound is violated.
pub(crate) fn solve_constraints(constraints: &[Constraint], available_size: u16) -> Vec<u16> {
    let mut sizes = vec![0u16; constraints.len()];
    let mut remaining = available_size;
    let mut grow_indices = Vec::new();

    for (i, &constraint) in constraints.iter().enumerate() {
        let upfront = match constraint {
            Constraint::Fixed(size) => size,
            Constraint::Percentage(p) => (f32::from(available_size) * p / 100.0)
                .round()
                .clamp(0.0, f32::from(u16::MAX)) as u16,
            Constraint::Min(floor) => {
                grow_indices.push(i);
                floor
            }
            Constraint::Max(_) | Constraint::Fill => {
                grow_indices.push(i);
                continue;
            }
        };
        sizes[i] = min(upfront, remaining);
        remaining -= sizes[i];
    }

    while remaining > 0 && !grow_indices.is_empty() {
        let count = grow_indices.len() as u16;
        let base = remaining / count;
        let mut shares = vec![0u16; constraints.len()];
        let mut allocated = 0u16;
        for (idx, &i) in grow_indices.iter().enumerate() {
            // Last item gets the rest to ensure exact sum
            let share = if idx == grow_indices.len() - 1 {
                remaining - allocated
            } else {
                base
            };
            shares[i] = share;
            allocated += share;
        }

        let violations: Vec<usize> = grow_indices
            .iter()
            .copied()
            .filter(|&i| {
                matches!(constraints[i], Constraint::Max(max_val)
                    if sizes[i].saturating_add(shares[i]) > max_val)
            })
            .collect();

        if violations.is_empty() {
            for &i in &grow_indices {
                sizes[i] = sizes[i].saturating_add(shares[i]);
            }
            break;
        }

        for i in violations {
            if let Constraint::Max(max_val) = constraints[i] {
                let consumed = max_val.saturating_sub(sizes[i]);
                sizes[i] = max_val;
                remaining = remaining.saturating_sub(consumed);
                grow_indices.retain(|&x| x != i);
            }
        }
    }

    sizes
}
