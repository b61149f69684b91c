//! Builder pattern implementation for creating [`Bar`] instances.
//!
//! This module provides the [`BarBuilder`] struct, the single place where
//! a bar's configuration is assembled and validated. Every recognized
//! option is applied through a chained setter; the terminal `build`,
//! `scrolling`, and `bouncing` calls check the whole configuration and
//! either produce a ready-to-use [`Bar`] or a validation error, before any
//! bar state exists.
//!
//! # Examples
//!
//! ## Basic builder usage
//!
//! ```rust
//! use headway::{BarBuilder, Indicator};
//!
//! # fn main() -> Result<(), headway::Error> {
//! let bar = BarBuilder::new()
//!     .label("archive.tar")
//!     .width(30)
//!     .indicator(Indicator::Percent)
//!     .build(1024)?;
//! # Ok(())
//! # }
//! ```
//!
//! ## An indeterminate, colored bar
//!
//! ```rust
//! use headway::{BarBuilder, Color, Indicator};
//!
//! # fn main() -> Result<(), headway::Error> {
//! let bar = BarBuilder::new()
//!     .label("working...")
//!     .foreground(Color::DarkGreen)
//!     .indicator(Indicator::Elapsed)
//!     .scrolling()?;
//! # Ok(())
//! # }
//! ```

use std::io::{self, Write};
use std::sync::Arc;

use super::bar::Bar;
use super::config::{BarConfig, Indicator};
use crate::error::{Error, Result};
use crate::progress::{Clock, Mode, SystemClock};
use crate::style::Color;

/// A builder used to create a [`Bar`].
///
/// ```rust
/// # fn main() -> Result<(), headway::Error> {
/// use headway::BarBuilder;
///
/// let bar = BarBuilder::new().fill(b'=').arrow(b'>').build(100)?;
/// # Ok(())
/// # }
/// ```
pub struct BarBuilder {
    config: BarConfig,
    sink: Option<Box<dyn Write + Send>>,
    clock: Option<Arc<dyn Clock>>,
}

impl Default for BarBuilder {
    fn default() -> Self {
        Self {
            config: BarConfig::default(),
            sink: None,
            clock: None,
        }
    }
}

impl BarBuilder {
    /// Creates a builder with the default options.
    pub fn new() -> Self {
        BarBuilder::default()
    }

    /// Sets the byte drawn for completed cells.
    pub fn fill(mut self, fill: u8) -> Self {
        self.config.fill = fill;
        self
    }

    /// Sets the byte drawn for pending cells.
    pub fn space(mut self, space: u8) -> Self {
        self.config.space = space;
        self
    }

    /// Sets the bytes delimiting the bar segment.
    pub fn delimiters(mut self, pre: u8, post: u8) -> Self {
        self.config.pre = pre;
        self.config.post = post;
        self
    }

    /// Marks the advancing tip of a regular fill with `arrow`.
    pub fn arrow(mut self, arrow: u8) -> Self {
        self.config.arrow = Some(arrow);
        self
    }

    /// Sets the label shown before the bar.
    ///
    /// Labels longer than the fixed prolog field are truncated with a
    /// trailing `...`.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.config.label = Some(label.into());
        self
    }

    /// Sets what the field after the bar reports.
    pub fn indicator(mut self, indicator: Indicator) -> Self {
        self.config.indicator = indicator;
        self
    }

    /// Sets the interior width of the bar, in cells.
    pub fn width(mut self, width: usize) -> Self {
        self.config.width = width;
        self
    }

    /// Paints the bar segment's foreground.
    pub fn foreground(mut self, color: Color) -> Self {
        self.config.foreground = Some(color);
        self
    }

    /// Paints the bar segment's background.
    pub fn background(mut self, color: Color) -> Self {
        self.config.background = Some(color);
        self
    }

    /// Requests an explicit animation mode.
    ///
    /// The mode is checked against the total at build time: a regular bar
    /// needs a positive total, the animated modes reject one.
    pub fn mode(mut self, mode: Mode) -> Self {
        self.config.mode = Some(mode);
        self
    }

    /// Redirects the rendered lines to the given sink.
    ///
    /// Defaults to standard output. The bar never opens, closes, or
    /// buffers the sink; it only writes redraw lines to it.
    pub fn sink(mut self, sink: impl Write + Send + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Reads time from the given clock instead of the system clock.
    ///
    /// Primarily useful for tests that simulate elapsed time.
    pub fn clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = Some(clock);
        self
    }

    /// Builds a bar for a run of `total` units.
    ///
    /// The bar fills left to right as the counter approaches the total.
    /// Fails with [`Error::ModeConflict`] when `total` is not positive, or
    /// when an explicitly requested animated mode is combined with a
    /// positive total.
    pub fn build(self, total: i64) -> Result<Bar> {
        let mode = self.config.mode.unwrap_or_default();
        self.finish(total, mode)
    }

    /// Builds an indeterminate bar with a window scrolling across it.
    ///
    /// Fails with [`Error::ModeConflict`] when the configuration
    /// explicitly names a different mode.
    pub fn scrolling(self) -> Result<Bar> {
        match self.config.mode {
            Some(mode) if mode != Mode::Scrolling => Err(Error::ModeConflict(
                "configuration names a mode other than scrolling",
            )),
            _ => self.finish(0, Mode::Scrolling),
        }
    }

    /// Builds an indeterminate bar with a window bouncing across it.
    ///
    /// Fails with [`Error::ModeConflict`] when the configuration
    /// explicitly names a different mode.
    pub fn bouncing(self) -> Result<Bar> {
        match self.config.mode {
            Some(mode) if mode != Mode::Bouncing => Err(Error::ModeConflict(
                "configuration names a mode other than bouncing",
            )),
            _ => self.finish(0, Mode::Bouncing),
        }
    }

    fn finish(self, total: i64, mode: Mode) -> Result<Bar> {
        if self.config.width == 0 {
            return Err(Error::InvalidWidth(self.config.width));
        }
        if mode == Mode::Regular && total <= 0 {
            return Err(Error::ModeConflict("a regular bar needs a positive total"));
        }
        if mode.animated() && total > 0 {
            return Err(Error::ModeConflict(
                "scrolling and bouncing bars run without a total",
            ));
        }
        let sink = self.sink.unwrap_or_else(|| Box::new(io::stdout()));
        let clock = self.clock.unwrap_or_else(|| Arc::new(SystemClock));
        Ok(Bar::assemble(self.config, mode, total, sink, clock))
    }
}
