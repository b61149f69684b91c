//! Bar module containing the façade, builder pattern, and configuration.
//!
//! This module provides the main [`Bar`] struct and its associated builder
//! for configuring and driving a progress bar. It owns line composition:
//! the fixed-width label field, the delimited and optionally colored
//! animation segment, and the fixed-width indicator field.
//!
//! # Overview
//!
//! The bar module is organized into three components:
//!
//! - `bar` - The `Bar` façade with the mutating operations and the
//!   redraw-and-emit path
//! - `builder` - `BarBuilder` for flexible configuration using the builder
//!   pattern, and the single validation choke point
//! - `config` - The immutable configuration and the indicator catalogue
//!
//! # Examples
//!
//! ## Basic usage
//!
//! ```rust
//! use headway::BarBuilder;
//!
//! # fn main() -> Result<(), headway::Error> {
//! let mut bar = BarBuilder::new().label("copying").build(100)?;
//! bar.incr(40);
//! bar.incr(60);
//! bar.complete();
//! println!();
//! # Ok(())
//! # }
//! ```
//!
//! ## As a byte-counting sink
//!
//! ```rust
//! use std::io;
//! use headway::BarBuilder;
//!
//! # fn main() -> Result<(), headway::Error> {
//! let data = vec![0u8; 4096];
//! let mut bar = BarBuilder::new().build(data.len() as i64)?;
//! io::copy(&mut data.as_slice(), &mut bar).expect("copy cannot fail");
//! bar.complete();
//! # Ok(())
//! # }
//! ```

pub mod bar;
pub mod builder;
pub mod config;

pub use bar::Bar;
pub use builder::BarBuilder;
pub use config::{BarConfig, Indicator, DEFAULT_WIDTH};
