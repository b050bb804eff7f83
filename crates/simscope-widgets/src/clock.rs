#![forbid(unsafe_code)]

//! Wall-clock gating for sampling and step-rate estimation.
//!
//! Both types are pure comparisons against a stored instant and are polled
//! from the overlay's update pass. Nothing here sleeps or schedules.

use std::time::Duration;
use web_time::Instant;

/// Shortest window over which [`RateEstimator`] averages.
pub const RATE_WINDOW: Duration = Duration::from_secs(1);

/// Decides when the next sample is due.
#[derive(Debug, Clone, Copy)]
pub struct SampleClock {
    interval: Duration,
    last: Instant,
}

impl SampleClock {
    /// A clock whose first sample is due `interval` after `now`.
    pub fn new(interval: Duration, now: Instant) -> Self {
        Self {
            interval,
            last: now,
        }
    }

    /// Minimum time between samples.
    #[inline]
    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Whether at least `interval` has passed since the last sample.
    pub fn is_due(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.last) >= self.interval
    }

    /// Record that a sample was taken at `now`.
    pub fn reset(&mut self, now: Instant) {
        self.last = now;
    }

    /// [`is_due`](Self::is_due), resetting the clock when it fires.
    pub fn poll(&mut self, now: Instant) -> bool {
        let due = self.is_due(now);
        if due {
            self.reset(now);
        }
        due
    }
}

/// Average simulation steps per second over windows of at least [`RATE_WINDOW`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RateEstimator {
    baseline: Option<(u64, Instant)>,
    seconds_per_step: Option<f64>,
}

impl RateEstimator {
    /// An estimator with no observations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Observe the step counter at `now`.
    ///
    /// The first call only records a baseline. Later calls closer than
    /// [`RATE_WINDOW`] to the baseline change nothing. Otherwise the per-step
    /// duration is recomputed, unless no steps were taken in the window, and
    /// the baseline moves to `(steps, now)`.
    pub fn update(&mut self, steps: u64, now: Instant) {
        let Some((last_steps, last_time)) = self.baseline else {
            self.baseline = Some((steps, now));
            return;
        };
        let elapsed = now.saturating_duration_since(last_time);
        if elapsed < RATE_WINDOW {
            return;
        }
        let delta = steps.saturating_sub(last_steps);
        if delta > 0 {
            let per_step = elapsed.as_secs_f64() / delta as f64;
            self.seconds_per_step = Some(per_step);
            crate::trace!(steps = delta, seconds_per_step = per_step, "step rate recomputed");
        }
        self.baseline = Some((steps, now));
    }

    /// Steps per second, or `0.0` before a rate has been established.
    pub fn rate(&self) -> f64 {
        match self.seconds_per_step {
            Some(per_step) if per_step > 0.0 => 1.0 / per_step,
            _ => 0.0,
        }
    }

    /// Wall-clock time per step, or zero before a rate has been established.
    pub fn step_time(&self) -> Duration {
        self.seconds_per_step
            .map(Duration::from_secs_f64)
            .unwrap_or(Duration::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(base: Instant, millis: u64) -> Instant {
        base + Duration::from_millis(millis)
    }

    #[test]
    fn clock_due_at_interval() {
        let t0 = Instant::now();
        let mut clock = SampleClock::new(Duration::from_secs(1), t0);
        assert!(!clock.is_due(t0));
        assert!(!clock.is_due(at(t0, 999)));
        assert!(clock.is_due(at(t0, 1000)));
        clock.reset(at(t0, 1000));
        assert!(!clock.is_due(at(t0, 1500)));
    }

    #[test]
    fn poll_resets_only_when_due() {
        let t0 = Instant::now();
        let mut clock = SampleClock::new(Duration::from_millis(500), t0);
        assert!(!clock.poll(at(t0, 100)));
        assert!(clock.poll(at(t0, 600)));
        assert!(!clock.poll(at(t0, 700)));
        assert!(clock.poll(at(t0, 1100)));
    }

    #[test]
    fn clock_tolerates_time_going_backwards() {
        let t0 = Instant::now();
        let clock = SampleClock::new(Duration::from_secs(1), at(t0, 5000));
        assert!(!clock.is_due(t0));
    }

    #[test]
    fn rate_starts_at_zero() {
        let est = RateEstimator::new();
        assert_eq!(est.rate(), 0.0);
        assert_eq!(est.step_time(), Duration::ZERO);
    }

    #[test]
    fn rate_over_two_seconds() {
        let t0 = Instant::now();
        let mut est = RateEstimator::new();
        est.update(0, t0);
        est.update(60, at(t0, 2000));
        assert!((est.rate() - 30.0).abs() < 1e-9);
        let step_ms = est.step_time().as_secs_f64() * 1000.0;
        assert!((step_ms - 33.333).abs() < 0.01);
    }

    #[test]
    fn sub_second_updates_are_ignored() {
        let t0 = Instant::now();
        let mut est = RateEstimator::new();
        est.update(0, t0);
        est.update(60, at(t0, 2000));
        let before = est.rate();
        est.update(1000, at(t0, 2500));
        assert_eq!(est.rate(), before);
        // Baseline did not move, so the next window spans 2000ms..3000ms.
        est.update(90, at(t0, 3000));
        assert!((est.rate() - 30.0).abs() < 1e-9);
    }

    #[test]
    fn zero_step_window_keeps_previous_rate() {
        let t0 = Instant::now();
        let mut est = RateEstimator::new();
        est.update(0, t0);
        est.update(10, at(t0, 1000));
        est.update(10, at(t0, 3000));
        assert!((est.rate() - 10.0).abs() < 1e-9);
    }
}
