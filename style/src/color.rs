use core::{
    fmt::{self, Display},
    str::FromStr,
};

use crate::parse::{parse_css_color, parse_hex_color};

/// An sRGB color with an opacity.
///
/// Channels are stored as 8-bit values, the opacity ranges from 0.0
/// (transparent) to 1.0 (opaque).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct Color {
    /// Red component (0-255)
    pub red: u8,
    /// Green component (0-255)
    pub green: u8,
    /// Blue component (0-255)
    pub blue: u8,
    /// Opacity (0.0 to 1.0)
    pub opacity: f32,
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl Color {
    /// Black color.
    pub const BLACK: Self = Self::from_hex("#000000");
    /// White color.
    pub const WHITE: Self = Self::from_hex("#FFFFFF");
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::BLACK.with_opacity(0.0);

    /// Creates an opaque color from 8-bit red, green, and blue components.
    #[must_use]
    pub const fn srgb(red: u8, green: u8, blue: u8) -> Self {
        Self {
            red,
            green,
            blue,
            opacity: 1.0,
        }
    }

    /// Creates a color from 8-bit components and an opacity.
    #[must_use]
    pub const fn rgba(red: u8, green: u8, blue: u8, opacity: f32) -> Self {
        Self {
            red,
            green,
            blue,
            opacity,
        }
    }

    /// Creates an opaque color from a hexadecimal color string.
    ///
    /// # Panics
    ///
    /// Panics (at compile time when used in a constant) if `hex` is not
    /// six hexadecimal digits with an optional `#` or `0x` prefix.
    #[must_use]
    pub const fn from_hex(hex: &str) -> Self {
        let (red, green, blue) = parse_hex_color(hex);
        Self::srgb(red, green, blue)
    }

    /// Creates an opaque color from a packed 0xRRGGBB value.
    #[must_use]
    pub const fn from_u32(rgb: u32) -> Self {
        Self::srgb(
            ((rgb >> 16) & 0xFF) as u8,
            ((rgb >> 8) & 0xFF) as u8,
            (rgb & 0xFF) as u8,
        )
    }

    /// Returns the same color with a different opacity.
    #[must_use]
    pub const fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    /// Returns true if the color is fully transparent.
    #[must_use]
    pub fn is_transparent(&self) -> bool {
        self.opacity <= 0.0
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_css_color(s)
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.opacity >= 1.0 {
            write!(f, "#{:02X}{:02X}{:02X}", self.red, self.green, self.blue)
        } else {
            write!(
                f,
                "rgba({}, {}, {}, {})",
                self.red, self.green, self.blue, self.opacity
            )
        }
    }
}

/// Errors that can occur when parsing color strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorParseError {
    /// The provided hex string does not have the expected 6 hexadecimal digits.
    InvalidLength,
    /// A non-hexadecimal character was encountered at the provided index.
    InvalidDigit(usize),
    /// An `rgb()`/`rgba()` call had the wrong number of arguments.
    InvalidArity(usize),
    /// A channel or opacity argument was not a number in range.
    InvalidComponent(usize),
    /// The string is not a recognized color notation.
    UnknownFormat,
}

impl Display for ColorParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength => f.write_str("expected exactly 6 hexadecimal digits"),
            Self::InvalidDigit(index) => {
                write!(f, "invalid hexadecimal digit at byte index {index}")
            }
            Self::InvalidArity(count) => {
                write!(f, "expected 3 or 4 color components, found {count}")
            }
            Self::InvalidComponent(index) => {
                write!(f, "color component {index} is not a number in range")
            }
            Self::UnknownFormat => f.write_str("unrecognized color notation"),
        }
    }
}

impl std::error::Error for ColorParseError {}
