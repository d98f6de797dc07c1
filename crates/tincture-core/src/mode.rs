//! Color mode tag.
//!
//! A [`ColorMode`] selects the channel layout a buffer is interpreted in and,
//! with it, how many inversion flags and which channel labels apply.
//!
//! | Mode | Channels | Labels | Reordered |
//! |------|----------|--------|-----------|
//! | RGB  | 3 | r, g, b    | r, g, b |
//! | CMYK | 4 | c, m, y, k | c, m, y |

use crate::{Error, Result};
use std::fmt;

/// Channel layout used while generating variants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum ColorMode {
    /// Red, green, blue.
    #[default]
    Rgb,
    /// Cyan, magenta, yellow, key. The key channel is never reordered.
    Cmyk,
}

impl ColorMode {
    /// All supported modes.
    pub const ALL: [ColorMode; 2] = [ColorMode::Rgb, ColorMode::Cmyk];

    /// Parses a mode name, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedMode`] for anything other than `rgb` / `cmyk`.
    pub fn parse(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "rgb" => Ok(ColorMode::Rgb),
            "cmyk" => Ok(ColorMode::Cmyk),
            _ => Err(Error::UnsupportedMode(s.to_string())),
        }
    }

    /// Number of channels a buffer carries in this mode.
    #[inline]
    pub const fn channel_count(self) -> usize {
        match self {
            ColorMode::Rgb => 3,
            ColorMode::Cmyk => 4,
        }
    }

    /// Channel labels in buffer order.
    #[inline]
    pub const fn labels(self) -> &'static [char] {
        match self {
            ColorMode::Rgb => &['r', 'g', 'b'],
            ColorMode::Cmyk => &['c', 'm', 'y', 'k'],
        }
    }

    /// The three labels that take part in channel reordering.
    #[inline]
    pub fn chromatic_labels(self) -> [char; 3] {
        let labels = self.labels();
        [labels[0], labels[1], labels[2]]
    }

    /// Upper-case display name.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            ColorMode::Rgb => "RGB",
            ColorMode::Cmyk => "CMYK",
        }
    }
}

impl fmt::Display for ColorMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ColorMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(ColorMode::parse("RGB").unwrap(), ColorMode::Rgb);
        assert_eq!(ColorMode::parse("rgb").unwrap(), ColorMode::Rgb);
        assert_eq!(ColorMode::parse("Cmyk").unwrap(), ColorMode::Cmyk);
        assert_eq!(" cmyk ".parse::<ColorMode>().unwrap(), ColorMode::Cmyk);
    }

    #[test]
    fn test_parse_rejects_unknown() {
        for bad in ["hsv", "L", "", "rgba"] {
            let err = ColorMode::parse(bad).unwrap_err();
            assert!(matches!(err, Error::UnsupportedMode(_)), "{bad} should fail");
        }
    }

    #[test]
    fn test_layout() {
        assert_eq!(ColorMode::default(), ColorMode::Rgb);
        assert_eq!(ColorMode::Rgb.channel_count(), 3);
        assert_eq!(ColorMode::Cmyk.channel_count(), 4);
        assert_eq!(ColorMode::Cmyk.labels().len(), ColorMode::Cmyk.channel_count());
        assert_eq!(ColorMode::Cmyk.chromatic_labels(), ['c', 'm', 'y']);
        assert_eq!(ColorMode::Rgb.to_string(), "RGB");
    }
}
