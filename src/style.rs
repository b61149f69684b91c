//! Terminal color palette and escape sequence rendering.
//!
//! This module provides the fixed 16-entry palette a bar segment can be
//! painted with, and the 256-color escape sequences used to apply it.
//! Colors are optional: a bar without any configured color emits no escape
//! sequences at all.
//!
//! # Examples
//!
//! ```rust
//! use headway::Color;
//!
//! let green = Color::DarkGreen;
//! assert_eq!(green.foreground(), "\x1b[38;5;2m");
//! assert_eq!(green.background(), "\x1b[48;5;2m");
//! ```

use std::str::FromStr;

use crate::error::Error;

/// Escape sequence resetting all terminal attributes.
pub const RESET: &str = "\x1b[0m";

const FOREGROUND: u8 = 38;
const BACKGROUND: u8 = 48;

/// The fixed 16-entry terminal palette.
///
/// Codes 0 through 15 of the terminal's 256-color table: black, six dark
/// hues, light grey, dark grey, six light hues, and white.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Color {
    /// Palette code 0.
    Black = 0,
    /// Palette code 1.
    DarkRed,
    /// Palette code 2.
    DarkGreen,
    /// Palette code 3.
    DarkYellow,
    /// Palette code 4.
    DarkBlue,
    /// Palette code 5.
    DarkPurple,
    /// Palette code 6.
    DarkCyan,
    /// Palette code 7.
    LightGrey,
    /// Palette code 8.
    DarkGrey,
    /// Palette code 9.
    LightRed,
    /// Palette code 10.
    LightGreen,
    /// Palette code 11.
    LightYellow,
    /// Palette code 12.
    LightBlue,
    /// Palette code 13.
    LightPurple,
    /// Palette code 14.
    LightCyan,
    /// Palette code 15.
    White,
}

const PALETTE: [Color; 16] = [
    Color::Black,
    Color::DarkRed,
    Color::DarkGreen,
    Color::DarkYellow,
    Color::DarkBlue,
    Color::DarkPurple,
    Color::DarkCyan,
    Color::LightGrey,
    Color::DarkGrey,
    Color::LightRed,
    Color::LightGreen,
    Color::LightYellow,
    Color::LightBlue,
    Color::LightPurple,
    Color::LightCyan,
    Color::White,
];

impl Color {
    /// Highest palette code this crate understands.
    pub const MAX: u8 = 15;

    /// The color's code in the terminal's 256-color table.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Escape sequence selecting this color as the foreground.
    pub fn foreground(self) -> String {
        self.sequence(FOREGROUND)
    }

    /// Escape sequence selecting this color as the background.
    pub fn background(self) -> String {
        self.sequence(BACKGROUND)
    }

    fn sequence(self, layer: u8) -> String {
        format!("\x1b[{};5;{}m", layer, self.code())
    }
}

impl TryFrom<u8> for Color {
    type Error = Error;

    /// Looks up a palette code, rejecting anything above [`Color::MAX`].
    fn try_from(code: u8) -> Result<Self, Self::Error> {
        PALETTE
            .get(usize::from(code))
            .copied()
            .ok_or_else(|| Error::UnknownColor(code.to_string()))
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Parses a color name, or a bare palette code.
    ///
    /// The short names map to the dark hues, matching common terminal
    /// conventions; the light variants are spelled out.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "black" => Ok(Color::Black),
            "red" => Ok(Color::DarkRed),
            "green" => Ok(Color::DarkGreen),
            "yellow" => Ok(Color::DarkYellow),
            "blue" => Ok(Color::DarkBlue),
            "purple" => Ok(Color::DarkPurple),
            "cyan" => Ok(Color::DarkCyan),
            "grey" | "gray" => Ok(Color::LightGrey),
            "dark-grey" | "dark-gray" => Ok(Color::DarkGrey),
            "light-red" => Ok(Color::LightRed),
            "light-green" => Ok(Color::LightGreen),
            "light-yellow" => Ok(Color::LightYellow),
            "light-blue" => Ok(Color::LightBlue),
            "light-purple" => Ok(Color::LightPurple),
            "light-cyan" => Ok(Color::LightCyan),
            "white" => Ok(Color::White),
            other => match other.parse::<u8>() {
                Ok(code) => Color::try_from(code),
                Err(_) => Err(Error::UnknownColor(s.to_string())),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_sequences() {
        assert_eq!(Color::Black.foreground(), "\x1b[38;5;0m");
        assert_eq!(Color::White.foreground(), "\x1b[38;5;15m");
        assert_eq!(Color::DarkBlue.background(), "\x1b[48;5;4m");
        assert_eq!(RESET, "\x1b[0m");
    }

    #[test]
    fn test_try_from_code() {
        assert_eq!(Color::try_from(0), Ok(Color::Black));
        assert_eq!(Color::try_from(9), Ok(Color::LightRed));
        assert_eq!(Color::try_from(15), Ok(Color::White));
        assert_eq!(
            Color::try_from(16),
            Err(Error::UnknownColor("16".to_string()))
        );
    }

    #[test]
    fn test_from_str_names() {
        assert_eq!("red".parse(), Ok(Color::DarkRed));
        assert_eq!("light-red".parse(), Ok(Color::LightRed));
        assert_eq!("GREY".parse(), Ok(Color::LightGrey));
        assert_eq!("12".parse(), Ok(Color::LightBlue));
        assert_eq!(
            "magenta".parse::<Color>(),
            Err(Error::UnknownColor("magenta".to_string()))
        );
    }

    #[test]
    fn test_codes_cover_palette() {
        for code in 0..=Color::MAX {
            let color = Color::try_from(code).expect("palette code should resolve");
            assert_eq!(color.code(), code);
        }
    }
}
