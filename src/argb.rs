//! A packed 32-bit pixel color.

use std::fmt;
use std::str::FromStr;

/// A color packed as `0xAARRGGBB`, 8 bits per channel.
///
/// This is the form colors take once they are rendered; every value is a
/// displayable sRGB color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Argb(pub u32);

impl Argb {
    /// Opaque black.
    pub const BLACK: Self = Self(0xFF000000);
    /// Opaque white.
    pub const WHITE: Self = Self(0xFFFFFFFF);

    /// Create an opaque color from its red, green and blue channels.
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_argb(0xFF, red, green, blue)
    }

    /// Create a color from all four channels.
    pub const fn from_argb(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self((alpha as u32) << 24 | (red as u32) << 16 | (green as u32) << 8 | blue as u32)
    }

    /// The alpha channel.
    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// The red channel.
    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// The green channel.
    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// The blue channel.
    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// Returns true if the alpha channel is fully opaque.
    pub const fn is_opaque(&self) -> bool {
        self.alpha() == 0xFF
    }

    /// Returns true if all three color channels are equal.
    pub const fn is_gray(&self) -> bool {
        self.red() == self.green() && self.green() == self.blue()
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}

/// Formats as `#rrggbb`, or `#aarrggbb` when the color is not opaque.
impl fmt::Display for Argb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:06x}", self.0 & 0x00FFFFFF)
        } else {
            write!(f, "#{:08x}", self.0)
        }
    }
}

/// Errors returned when parsing an [`Argb`] from a string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseArgbError {
    /// The string was empty (or only held the leading `#`).
    Empty,
    /// The number of hex digits was not 3, 6 or 8.
    InvalidLength(usize),
    /// A character was not a hex digit.
    InvalidDigit(char),
}

impl fmt::Display for ParseArgbError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("empty color string"),
            Self::InvalidLength(len) => write!(f, "invalid hex length {len}, expected 3, 6 or 8"),
            Self::InvalidDigit(c) => write!(f, "invalid hex digit {c:?}"),
        }
    }
}

impl std::error::Error for ParseArgbError {}

/// Parses `rgb`, `rrggbb` and `aarrggbb`, with or without a leading `#`.
impl FromStr for Argb {
    type Err = ParseArgbError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s.trim();
        let hex = hex.strip_prefix('#').unwrap_or(hex);

        if hex.is_empty() {
            return Err(ParseArgbError::Empty);
        }

        let digits = hex
            .chars()
            .map(|c| c.to_digit(16).ok_or(ParseArgbError::InvalidDigit(c)))
            .collect::<Result<Vec<_>, _>>()?;

        let value = digits.iter().fold(0u32, |acc, d| acc << 4 | d);

        match digits.len() {
            3 => {
                // Each nibble is doubled, `abc` -> `aabbcc`.
                let expanded = digits.iter().fold(0u32, |acc, d| acc << 8 | d * 0x11);
                Ok(Self(0xFF000000 | expanded))
            }
            6 => Ok(Self(0xFF000000 | value)),
            8 => Ok(Self(value)),
            len => Err(ParseArgbError::InvalidLength(len)),
        }
    }
}
