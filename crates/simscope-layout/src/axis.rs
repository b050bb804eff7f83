#![forbid(unsafe_code)]

//! Axis scaling.
//!
//! Turns an arbitrary value range into legible tick steps and a
//! value-to-pixel mapping, and carries the one-time display density
//! correction applied to everything the overlay draws.

use simscope_core::geometry::Size;

/// Fraction of a plot's height that its maximum value reaches.
pub const PLOT_HEADROOM: f32 = 0.95;

const LADDER: [f64; 4] = [1.0, 2.0, 5.0, 10.0];
const EPSILON: f64 = 1e-9;

/// A "round" tick step for the range `0..=max` aiming at no more than `target_ticks` steps.
///
/// The step is taken from the `{1, 2, 5} x 10^k` ladder: the smallest such
/// value for which `max / step <= target_ticks`. Returns `None` when no ticks
/// should be drawn (`max <= 0`, a non-finite `max`, zero target ticks, or a
/// `max` too small to yield a usable step).
///
/// ```
/// use simscope_layout::nice_step;
///
/// assert_eq!(nice_step(1000.0, 8), Some(200.0));
/// assert_eq!(nice_step(0.0, 8), None);
/// ```
pub fn nice_step(max: f64, target_ticks: u32) -> Option<f64> {
    if !max.is_finite() || max <= 0.0 || target_ticks == 0 {
        return None;
    }
    let raw = max / f64::from(target_ticks);
    let exponent = raw.log10().floor() as i32;
    let magnitude = if exponent >= 0 {
        10f64.powi(exponent)
    } else {
        1.0 / 10f64.powi(-exponent)
    };
    let normalized = raw / magnitude;
    let factor = LADDER
        .iter()
        .copied()
        .find(|&m| normalized <= m * (1.0 + EPSILON))
        .unwrap_or(10.0);
    let step = factor * magnitude;
    // Subnormal ranges lose the magnitude to overflow or rounding.
    if !step.is_finite() || step <= 0.0 || max / step > f64::from(target_ticks) * (1.0 + 1e-6) {
        return None;
    }
    Some(step)
}

/// Vertical scale so the largest value fills [`PLOT_HEADROOM`] of `extent`.
///
/// `None` for an empty or all-zero series, which then draws no line segments.
pub fn fit_scale(max: f64, extent: f32) -> Option<f32> {
    if !max.is_finite() || max <= 0.0 || extent <= 0.0 {
        return None;
    }
    Some((f64::from(PLOT_HEADROOM * extent) / max) as f32)
}

/// One labelled tick on an axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tick {
    /// Data value at the tick.
    pub value: f64,
    /// Distance from the axis origin in logical units.
    pub offset: f32,
}

/// A linear axis from zero to `max`, spanning `extent` logical units.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisScale {
    max: f64,
    step: f64,
    extent: f32,
}

impl AxisScale {
    /// Build an axis with a nice step, or `None` when the range is degenerate.
    pub fn new(max: f64, target_ticks: u32, extent: f32) -> Option<Self> {
        let step = nice_step(max, target_ticks)?;
        Some(Self { max, step, extent })
    }

    /// Like [`new`](Self::new), but for counts: steps below one are rejected.
    pub fn integer(max: u64, target_ticks: u32, extent: f32) -> Option<Self> {
        Self::new(max as f64, target_ticks, extent).filter(|axis| axis.step >= 1.0)
    }

    /// Tick step in data units.
    #[inline]
    pub fn step(&self) -> f64 {
        self.step
    }

    /// Upper end of the data range.
    #[inline]
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Map a data value to a distance from the axis origin.
    pub fn offset(&self, value: f64) -> f32 {
        (value / self.max * f64::from(self.extent)) as f32
    }

    /// Ticks from zero up to the last step not exceeding `max`.
    pub fn ticks(&self) -> impl Iterator<Item = Tick> + '_ {
        let count = (self.max / self.step + EPSILON).floor() as u64;
        (0..=count).map(move |i| {
            let value = i as f64 * self.step;
            Tick {
                value,
                offset: self.offset(value),
            }
        })
    }
}

/// Correction between logical drawing units and device pixels.
///
/// Computed once when a drawer is initialised, from the density the host
/// display reports.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DeviceScale(f32);

impl Default for DeviceScale {
    fn default() -> Self {
        Self(1.0)
    }
}

impl DeviceScale {
    /// Accept a reported scale factor; unusable reports fall back to `1.0`.
    pub fn from_reported(factor: f32) -> Self {
        if factor.is_finite() && factor > 0.0 {
            Self(factor)
        } else {
            Self(1.0)
        }
    }

    /// Device pixels per logical unit.
    #[inline]
    pub fn factor(self) -> f32 {
        self.0
    }

    /// Convert a device-pixel canvas size to logical units.
    pub fn logical_size(self, device: Size) -> Size {
        let convert = |v: u16| (f32::from(v) / self.0).floor().clamp(0.0, u16::MAX as f32) as u16;
        Size::new(convert(device.width), convert(device.height))
    }
}
