//! The fixed-width animation buffer behind the rendered bar.
//!
//! A [`Widget`] owns the cells between the bar's delimiters and mutates
//! them in place, one animation step per redraw. The three modes share the
//! buffer-and-cursor representation but move the cursor differently:
//! a monotonic forward fill, a wrapping sweep, and a reflecting sweep.

use std::str::FromStr;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crate::error::Error;
use crate::progress::clock::Clock;
use crate::progress::state::ProgressState;

/// Minimum wall-clock time between two recomputations of an animated
/// buffer.
///
/// Tight caller loops would otherwise redraw the scrolling and bouncing
/// animations on every update, wasting work and flickering the terminal.
pub const REFRESH: Duration = Duration::from_millis(50);

/// How the buffer animates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Mode {
    /// Deterministic left-to-right fill driven by the progress fraction.
    #[default]
    Regular,
    /// A lit window sweeping left to right, wrapping back to the start.
    Scrolling,
    /// A lit window reflecting off both ends of the buffer.
    Bouncing,
}

impl Mode {
    /// Whether this mode animates on its own instead of tracking a
    /// fraction. Animated modes run without a total and are throttled.
    pub fn animated(self) -> bool {
        !matches!(self, Mode::Regular)
    }
}

impl FromStr for Mode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "" | "regular" => Ok(Mode::Regular),
            "scroll" | "scrolling" => Ok(Mode::Scrolling),
            "bounce" | "bouncing" => Ok(Mode::Bouncing),
            _ => Err(Error::UnknownMode(s.to_string())),
        }
    }
}

/// Fixed-length cell buffer plus a cursor, mutated in place by the
/// configured mode's animation step.
///
/// The buffer length never changes after construction. The cursor is a
/// signed phase marker whose meaning depends on the mode: the fill edge for
/// [`Mode::Regular`], the window's leading edge for [`Mode::Scrolling`],
/// and a leading edge whose sign encodes the sweep direction for
/// [`Mode::Bouncing`]. All cell writes go through bounds-checked helpers,
/// so no cursor value can index outside the buffer.
#[derive(Debug)]
pub struct Widget {
    cells: Vec<u8>,
    cursor: i64,
    segment: i64,
    space: u8,
    mode: Mode,
    last_redraw: Option<Instant>,
    clock: Arc<dyn Clock>,
}

impl Widget {
    /// Creates a buffer of `width` cells filled with the background byte.
    ///
    /// The lit window of the animated modes spans a quarter of the width,
    /// with a floor of one cell.
    pub fn new(width: usize, space: u8, mode: Mode, clock: Arc<dyn Clock>) -> Self {
        Self {
            cells: vec![space; width],
            cursor: 0,
            segment: (width as i64 / 4).max(1),
            space,
            mode,
            last_redraw: None,
            clock,
        }
    }

    /// The buffer's current cells.
    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    /// Number of cells in the buffer.
    pub fn width(&self) -> usize {
        self.cells.len()
    }

    /// Length of the lit window in the animated modes.
    pub fn segment(&self) -> usize {
        self.segment as usize
    }

    /// Clears all cells to the background byte and rewinds the cursor.
    pub fn reset(&mut self) {
        self.cells.fill(self.space);
        self.cursor = 0;
        self.last_redraw = None;
    }

    /// Advances the animation one step and returns the cells.
    ///
    /// A done run always renders solid, regardless of mode. Animated modes
    /// return the buffer unchanged when called again within [`REFRESH`] of
    /// the previous recomputation.
    pub fn update(&mut self, fill: u8, arrow: Option<u8>, state: &ProgressState) -> &[u8] {
        if state.done() {
            self.cells.fill(fill);
            return &self.cells;
        }
        if self.mode.animated() {
            let now = self.clock.now();
            if let Some(last) = self.last_redraw {
                if now.saturating_duration_since(last) < REFRESH {
                    return &self.cells;
                }
            }
            self.last_redraw = Some(now);
        }
        match self.mode {
            Mode::Regular => self.fill_step(fill, arrow, state),
            Mode::Scrolling => self.scroll_step(fill),
            Mode::Bouncing => self.bounce_step(fill),
        }
        &self.cells
    }

    fn w(&self) -> i64 {
        self.cells.len() as i64
    }

    fn lit(&mut self, idx: i64, fill: u8) {
        if let Ok(idx) = usize::try_from(idx) {
            if let Some(cell) = self.cells.get_mut(idx) {
                *cell = fill;
            }
        }
    }

    fn unlit(&mut self, idx: i64) {
        self.lit(idx, self.space);
    }

    /// Monotonic forward fill: light everything between the previous fill
    /// edge and the edge the fraction maps to, then mark the tip.
    fn fill_step(&mut self, fill: u8, arrow: Option<u8>, state: &ProgressState) {
        // The state's fraction is unclamped by contract; clamp here so an
        // over-driven counter can never push the fill edge past the buffer.
        let fraction = state.fraction().clamp(0.0, 1.0);
        let count = (self.w() as f64 * fraction) as i64;
        for idx in self.cursor..count {
            self.lit(idx, fill);
        }
        self.cursor = count;
        if count > 0 && count < self.w() {
            if let Some(arrow) = arrow {
                self.lit(count, arrow);
            }
        }
    }

    /// Wrapping sweep: the window grows out of the left edge, sweeps right,
    /// and re-enters from the left while its tail drains off the right.
    fn scroll_step(&mut self, fill: u8) {
        let width = self.w();
        if self.cursor < self.segment {
            // growing out of the left edge
            self.lit(self.cursor, fill);
            self.cursor += 1;
        } else if self.cursor >= width {
            // leading edge has wrapped; tail is still draining
            let diff = self.cursor - width;
            self.lit(diff, fill);
            self.unlit(width - self.segment + diff);
            self.cursor += 1;
            if self.cursor - width == self.segment {
                self.cursor = self.segment;
            }
        } else {
            // steady sweep
            self.lit(self.cursor, fill);
            self.unlit(self.cursor - self.segment);
            self.cursor += 1;
        }
    }

    /// Reflecting sweep: like scrolling, but the window turns around at
    /// each end. A negative cursor means the window is moving backward.
    fn bounce_step(&mut self, fill: u8) {
        let width = self.w();
        if self.cursor >= 0 {
            self.lit(self.cursor, fill);
            if self.cursor >= self.segment {
                self.unlit(self.cursor - self.segment);
            }
            self.cursor += 1;
            if self.cursor == width {
                self.cursor = -(width - self.segment);
            }
        } else {
            self.lit(-self.cursor - 1, fill);
            self.unlit(-self.cursor + self.segment - 1);
            self.cursor += 1;
            if self.cursor == 0 {
                self.cursor += self.segment;
            }
        }
    }
}
