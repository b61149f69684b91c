//! Progress accounting: counters, timing, and the figures derived from them.

use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::progress::clock::{Clock, SystemClock};

/// Tracks how much work is done and derives fractions, rates, and time
/// estimates from it.
///
/// A total of zero or less marks the run as *indeterminate*: the fraction
/// is undefined (reported as 0) and only elapsed time and raw counts are
/// meaningful. [`complete`](ProgressState::complete) freezes the total at
/// whatever was reached, so a finished indeterminate run still reports done.
///
/// The total is fixed for the lifetime of one run and only changes through
/// [`reset`](ProgressState::reset) or [`complete`](ProgressState::complete).
#[derive(Debug, Clone)]
pub struct ProgressState {
    current: i64,
    total: i64,
    started: Instant,
    clock: Arc<dyn Clock>,
}

impl ProgressState {
    /// Creates a state for a run of `total` units, clocked by the system.
    pub fn new(total: i64) -> Self {
        Self::with_clock(total, Arc::new(SystemClock))
    }

    /// Creates a state reading time from the given clock.
    pub fn with_clock(total: i64, clock: Arc<dyn Clock>) -> Self {
        let started = clock.now();
        Self {
            current: 0,
            total,
            started,
            clock,
        }
    }

    /// Starts a fresh run: sets the total, zeroes the counter, restarts
    /// the clock.
    pub fn reset(&mut self, total: i64) {
        self.total = total;
        self.current = 0;
        self.started = self.clock.now();
    }

    /// Work done so far.
    pub fn current(&self) -> i64 {
        self.current
    }

    /// The run's target, or zero/negative for an indeterminate run.
    pub fn total(&self) -> i64 {
        self.total
    }

    /// Adds `n` units of work.
    ///
    /// The delta is applied arithmetically; callers are expected to pass
    /// non-negative values.
    pub fn incr(&mut self, n: i64) {
        self.current += n;
    }

    /// Moves the counter to `n` if that is an advance; lower values are
    /// silently ignored.
    pub fn set(&mut self, n: i64) {
        if n > self.current {
            self.current = n;
        }
    }

    /// Ends the run.
    ///
    /// An indeterminate run freezes its total at the current counter; a
    /// determinate run snaps the counter to the total.
    pub fn complete(&mut self) {
        if self.indeterminate() {
            self.total = self.current;
        } else {
            self.current = self.total;
        }
    }

    /// Whether the run has no known target.
    pub fn indeterminate(&self) -> bool {
        self.total <= 0
    }

    /// Whether the run has reached its target.
    ///
    /// A freshly reset indeterminate run is not done even though both
    /// counters are zero; it becomes done once
    /// [`complete`](ProgressState::complete) freezes a positive total.
    pub fn done(&self) -> bool {
        self.total > 0 && self.current == self.total
    }

    /// Completed share of the run.
    ///
    /// Zero for indeterminate runs. Not clamped: driving the counter past
    /// the total yields a fraction above 1.
    pub fn fraction(&self) -> f64 {
        if self.indeterminate() {
            return 0.0;
        }
        self.current as f64 / self.total as f64
    }

    /// Wall-clock time since the run started.
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_duration_since(self.started)
    }

    /// Units of work per second.
    ///
    /// In the first second of a run the counter divided by a near-zero
    /// elapsed time would blow up, so the total is projected over the
    /// elapsed whole-millisecond bucket instead. From one second on the
    /// rate is the plain `current / elapsed`.
    pub fn rate(&self) -> f64 {
        let elapsed = self.elapsed();
        let millis = elapsed.as_millis();
        if millis < 1000 {
            return self.total as f64 * 1000.0 / millis.max(1) as f64;
        }
        self.current as f64 / elapsed.as_secs_f64()
    }

    /// Projected duration of the whole run at the current rate.
    pub fn estimated(&self) -> Duration {
        if self.indeterminate() {
            return Duration::ZERO;
        }
        let rate = self.rate();
        if rate <= 0.0 {
            return Duration::ZERO;
        }
        Duration::from_secs_f64(self.total as f64 / rate)
    }

    /// Time left until the projected end of the run, floored at zero.
    pub fn remaining(&self) -> Duration {
        self.estimated().saturating_sub(self.elapsed())
    }
}
