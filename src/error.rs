//! Error handling for the Headway library.
//!
//! This module provides centralized error handling for bar construction.
//! Every variant is a validation failure reported before any bar state is
//! created; runtime operations on a built bar never fail.

use thiserror::Error;

/// Errors that can happen when configuring a bar.
///
/// All of these are construction- or parse-time failures. The caller decides
/// whether to abort or fall back to defaults; nothing is retried and nothing
/// is fatal to the process.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The configured bar width was zero.
    ///
    /// The animation buffer needs at least one cell.
    #[error("invalid width: {0}")]
    InvalidWidth(usize),

    /// An indicator name outside the recognized set.
    #[error("unknown indicator: {0}")]
    UnknownIndicator(String),

    /// A color outside the 16-entry terminal palette.
    #[error("unknown color: {0}")]
    UnknownColor(String),

    /// A mode name outside the recognized set.
    #[error("unknown mode: {0}")]
    UnknownMode(String),

    /// The requested mode and the given total disagree.
    ///
    /// A regular bar needs a positive total to derive its fill fraction,
    /// while the scrolling and bouncing animations only run without one.
    #[error("mode conflict: {0}")]
    ModeConflict(&'static str),
}

/// Result type alias for operations that can fail with a Headway error.
pub type Result<T> = std::result::Result<T, Error>;
