//! Configuration structures and defaults for the bar.
//!
//! This module provides the immutable configuration a [`Bar`] renders
//! with, and the catalogue of indicator kinds the epilog field can show.
//! Configurations are assembled and validated by the
//! [`BarBuilder`](crate::bar::BarBuilder); once a bar is built they never
//! change.
//!
//! [`Bar`]: crate::bar::Bar

use std::str::FromStr;

use crate::error::Error;
use crate::progress::Mode;
use crate::style::Color;

/// Default interior width of a bar, in cells.
pub const DEFAULT_WIDTH: usize = 50;

/// Fixed width of the label field preceding the bar.
pub(crate) const PROLOG_SIZE: usize = 32;

/// Fixed width of the indicator field following the bar.
pub(crate) const EPILOG_SIZE: usize = 16;

/// What the indicator field after the bar reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Indicator {
    /// No indicator field at all.
    None,
    /// Completed share of the run, as a percentage with two decimals.
    #[default]
    Percent,
    /// Human-readable byte count of the work done so far.
    Size,
    /// Human-readable transfer rate.
    Rate,
    /// Time since the run started.
    Elapsed,
    /// Projected time until the run ends, or `--` for indeterminate runs.
    Remaining,
}

impl FromStr for Indicator {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "none" => Ok(Indicator::None),
            "" | "percent" => Ok(Indicator::Percent),
            "size" => Ok(Indicator::Size),
            "rate" => Ok(Indicator::Rate),
            "elapsed" => Ok(Indicator::Elapsed),
            "remaining" | "remained" => Ok(Indicator::Remaining),
            _ => Err(Error::UnknownIndicator(s.to_string())),
        }
    }
}

/// Immutable rendering configuration for a [`Bar`](crate::bar::Bar).
///
/// Defaults render `[###...   ]` at 50 cells with a percentage indicator
/// and no colors.
#[derive(Debug, Clone)]
pub struct BarConfig {
    /// Byte drawn for completed cells.
    pub(crate) fill: u8,
    /// Byte drawn for pending cells.
    pub(crate) space: u8,
    /// Byte opening the bar segment.
    pub(crate) pre: u8,
    /// Byte closing the bar segment.
    pub(crate) post: u8,
    /// Optional byte marking the advancing tip of a regular fill.
    pub(crate) arrow: Option<u8>,
    /// Optional label shown in the prolog field.
    pub(crate) label: Option<String>,
    /// What the epilog field reports.
    pub(crate) indicator: Indicator,
    /// Explicitly requested mode, if any. Checked against the total at
    /// build time; `None` lets the construction entry point decide.
    pub(crate) mode: Option<Mode>,
    /// Interior width of the bar, in cells.
    pub(crate) width: usize,
    /// Optional foreground color of the bar segment.
    pub(crate) foreground: Option<Color>,
    /// Optional background color of the bar segment.
    pub(crate) background: Option<Color>,
}

impl Default for BarConfig {
    fn default() -> Self {
        Self {
            fill: b'#',
            space: b' ',
            pre: b'[',
            post: b']',
            arrow: None,
            label: None,
            indicator: Indicator::default(),
            mode: None,
            width: DEFAULT_WIDTH,
            foreground: None,
            background: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_from_str() {
        assert_eq!("percent".parse(), Ok(Indicator::Percent));
        assert_eq!("".parse(), Ok(Indicator::Percent));
        assert_eq!("SIZE".parse(), Ok(Indicator::Size));
        assert_eq!("remained".parse(), Ok(Indicator::Remaining));
        assert_eq!(
            "eta".parse::<Indicator>(),
            Err(Error::UnknownIndicator("eta".to_string()))
        );
    }

    #[test]
    fn test_defaults() {
        let config = BarConfig::default();
        assert_eq!(config.fill, b'#');
        assert_eq!(config.pre, b'[');
        assert_eq!(config.post, b']');
        assert_eq!(config.width, DEFAULT_WIDTH);
        assert_eq!(config.indicator, Indicator::Percent);
        assert!(config.mode.is_none());
        assert!(config.arrow.is_none());
    }
}
