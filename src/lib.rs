//! Headway renders live, redrawable progress bars to a text terminal.
//!
//! A [`Bar`] is driven by a stream of "amount of work done" updates and
//! redraws itself as one carriage-return-prefixed line per update: a
//! fixed-width label, a delimited and optionally colored animation
//! segment, and a fixed-width indicator (percentage, byte count, rate, or
//! timing). Runs with a known total fill deterministically; indeterminate
//! runs animate a scrolling or bouncing window instead.
//!
//! # Quick Start
//!
//! ```rust
//! use headway::{BarBuilder, Indicator};
//!
//! # fn main() -> Result<(), headway::Error> {
//! let mut bar = BarBuilder::new()
//!     .label("payload.bin")
//!     .width(30)
//!     .fill(b'#')
//!     .space(b'-')
//!     .indicator(Indicator::Percent)
//!     .build(100)?;
//!
//! for _ in 0..10 {
//!     bar.incr(10);
//! }
//! bar.complete();
//! println!();
//! # Ok(())
//! # }
//! ```
//!
//! # Module Organization
//!
//! The headway crate is organized into several modules:
//!
//! - [`bar`] - The `Bar` façade, its builder, and the rendering
//!   configuration
//! - [`error`] - Centralized error handling with the `Error` enum
//! - [`progress`] - The progress state tracker and the animation engine
//! - [`style`] - The terminal color palette and escape sequences
//! - [`utils`] - Human-readable formatting for durations, sizes, and rates

pub mod bar;
pub mod error;
pub mod progress;
pub mod style;
pub mod utils;

pub use bar::{Bar, BarBuilder, BarConfig, Indicator, DEFAULT_WIDTH};
pub use error::{Error, Result};
pub use progress::{Clock, Mode, ProgressState, SystemClock, Widget, REFRESH};
pub use style::Color;
