//! Progress module containing the state tracker and the animation engine.
//!
//! This module holds the numeric model of a run and the buffer that
//! animates it. The [`bar`](crate::bar) façade owns one of each and is the
//! only component that mutates them.
//!
//! # Overview
//!
//! The progress module is organized into three components:
//!
//! - `state` - Counters, timing, and derived figures (fraction, rate,
//!   remaining time)
//! - `widget` - The fixed-width cell buffer and the fill/scroll/bounce
//!   animation steps
//! - `clock` - The injectable time source behind all elapsed-time reads
//!
//! # Examples
//!
//! ## Driving a widget by hand
//!
//! ```rust
//! use std::sync::Arc;
//! use headway::progress::{Mode, ProgressState, SystemClock, Widget};
//!
//! let clock = Arc::new(SystemClock);
//! let mut state = ProgressState::with_clock(10, clock.clone());
//! let mut widget = Widget::new(20, b' ', Mode::Regular, clock);
//!
//! state.incr(5);
//! let cells = widget.update(b'#', None, &state);
//! assert_eq!(cells.iter().filter(|&&c| c == b'#').count(), 10);
//! ```

pub mod clock;
pub mod state;
pub mod widget;

pub use clock::{Clock, SystemClock};
pub use state::ProgressState;
pub use widget::{Mode, Widget, REFRESH};
