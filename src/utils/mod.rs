//! Shared utility functions.
//!
//! This module contains pure helper functions used by the rendering path.
//!
//! # Overview
//!
//! The utils module currently contains:
//!
//! - [`human`] - Compact human-readable formatting for durations, byte
//!   counts, and transfer rates
//!
//! # Examples
//!
//! ```rust
//! use std::time::Duration;
//! use headway::utils::human;
//!
//! assert_eq!(human::size(1_048_576), "1.00MB");
//! assert_eq!(human::duration(Duration::from_millis(999)), "999ms");
//! assert_eq!(human::rate(2048.0), "2.00KB/s");
//! ```

pub mod human;
