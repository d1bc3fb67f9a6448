use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

use serde::{Deserialize, Serialize};

use crate::{codec, errors::ParseColorError, named};

/// An RGBA color with four 8-bit channels.
///
/// Serializes to and from its text form ("red", "#aa55ff", ...), so a
/// host's config or scripting layer gets the same representation the
/// option dialogs use.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xff)
    }

    pub fn with_a(mut self, a: u8) -> Self {
        self.a = a;
        self
    }

    pub const fn is_opaque(self) -> bool {
        self.a == 0xff
    }

    /// Opaque color from channels of any range, saturating into 0-255.
    pub fn clamped(r: i32, g: i32, b: i32) -> Self {
        Self::rgb(
            r.clamp(0, 0xff) as u8,
            g.clamp(0, 0xff) as u8,
            b.clamp(0, 0xff) as u8,
        )
    }

    /// Lowercase hex digits, no prefix: "rrggbb" for opaque colors,
    /// "aarrggbb" otherwise.
    pub fn to_hex(self) -> String {
        if self.is_opaque() {
            format!("{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            format!("{:02x}{:02x}{:02x}{:02x}", self.a, self.r, self.g, self.b)
        }
    }

    /// Strict hex parse. Strips one optional `#` or `0x` prefix and
    /// requires exactly 6 or 8 hex digits; with 8 digits the first
    /// byte is the alpha.
    pub fn try_from_hex(hex: &str) -> Result<Self, ParseColorError> {
        let digits = if let Some(rest) = hex.strip_prefix('#') {
            rest
        } else if let Some(rest) = hex.strip_prefix("0x") {
            rest
        } else {
            hex
        };

        let len = digits.len();
        if len != 6 && len != 8 {
            return Err(ParseColorError::BadLength(len));
        }
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ParseColorError::BadDigit);
        }
        let rgba = u32::from_str_radix(digits, 16).map_err(|_| ParseColorError::BadDigit)?;

        let color = if len == 6 {
            Self::rgb((rgba >> 16) as u8, (rgba >> 8) as u8, rgba as u8)
        } else {
            Self::rgba(
                (rgba >> 16) as u8,
                (rgba >> 8) as u8,
                rgba as u8,
                (rgba >> 24) as u8,
            )
        };
        Ok(color)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match named::name_of(*self) {
            Some(name) => f.write_str(name),
            None => write!(f, "#{}", self.to_hex()),
        }
    }
}

impl FromStr for Color {
    type Err = ParseColorError;

    /// Strict counterpart of [`codec::decode`]: a table name or a hex
    /// code, anything else is an error.
    fn from_str(s: &str) -> Result<Self, ParseColorError> {
        if let Some(color) = named::lookup(s) {
            return Ok(color);
        }
        Self::try_from_hex(s)
    }
}

impl From<String> for Color {
    fn from(text: String) -> Self {
        codec::decode_or_gray(&text)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

pub const RED: Color = Color::rgb(0xff, 0, 0);
pub const GREEN: Color = Color::rgb(0, 0xff, 0);
pub const BLUE: Color = Color::rgb(0, 0, 0xff);
pub const MAGENTA: Color = Color::rgb(0xff, 0, 0xff);
pub const CYAN: Color = Color::rgb(0, 0xff, 0xff);
pub const YELLOW: Color = Color::rgb(0xff, 0xff, 0);
pub const ORANGE: Color = Color::rgb(0xff, 0xc8, 0);
pub const BLACK: Color = Color::rgb(0, 0, 0);
pub const WHITE: Color = Color::rgb(0xff, 0xff, 0xff);
pub const GRAY: Color = Color::rgb(0x80, 0x80, 0x80);
pub const LIGHT_GRAY: Color = Color::rgb(0xc0, 0xc0, 0xc0);
pub const DARK_GRAY: Color = Color::rgb(0x40, 0x40, 0x40);
pub const PINK: Color = Color::rgb(0xff, 0xaf, 0xaf);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamped() {
        assert_eq!(Color::clamped(-10, 300, 128), Color::rgb(0, 0xff, 128));
        assert!(Color::clamped(-10, 300, 128).is_opaque());
    }

    #[test]
    fn test_to_hex_opaque() {
        assert_eq!(Color::rgb(0xaa, 0x55, 0xff).to_hex(), "aa55ff");
        assert_eq!(Color::rgb(0, 0, 1).to_hex(), "000001");
    }

    #[test]
    fn test_to_hex_with_alpha() {
        assert_eq!(Color::rgba(0xff, 0, 0, 0x80).to_hex(), "80ff0000");
        assert_eq!(Color::rgba(0, 0, 0, 0).to_hex(), "00000000");
    }

    #[test]
    fn test_try_from_hex() {
        let c = Color::rgb(0xaa, 0x55, 0xff);
        assert_eq!(Color::try_from_hex("aa55ff"), Ok(c));
        assert_eq!(Color::try_from_hex("#aa55ff"), Ok(c));
        assert_eq!(Color::try_from_hex("0xaa55ff"), Ok(c));
        assert_eq!(
            Color::try_from_hex("0x80ff0000"),
            Ok(Color::rgba(0xff, 0, 0, 0x80))
        );
    }

    #[test]
    fn test_try_from_hex_rejects() {
        assert_eq!(
            Color::try_from_hex("#12345"),
            Err(ParseColorError::BadLength(5))
        );
        assert_eq!(
            Color::try_from_hex("#123456789"),
            Err(ParseColorError::BadLength(9))
        );
        assert_eq!(Color::try_from_hex("#zzzzzz"), Err(ParseColorError::BadDigit));
        assert_eq!(Color::try_from_hex("+12345"), Err(ParseColorError::BadDigit));
    }

    #[test]
    fn test_from_str() {
        assert_eq!("red".parse(), Ok(RED));
        assert_eq!("Pink".parse(), Ok(PINK));
        assert_eq!("#aa55ff".parse(), Ok(Color::rgb(0xaa, 0x55, 0xff)));
        assert!("bogus".parse::<Color>().is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(RED.to_string(), "red");
        assert_eq!(Color::rgb(0xaa, 0x55, 0xff).to_string(), "#aa55ff");
        assert_eq!(Color::rgba(1, 2, 3, 4).to_string(), "#04010203");
    }

    #[test]
    fn test_serde_string_form() {
        let named: Color = serde_json::from_str("\"yellow\"").unwrap();
        assert_eq!(named, YELLOW);
        assert_eq!(serde_json::to_string(&YELLOW).unwrap(), "\"yellow\"");

        let hex = Color::rgba(0xaa, 0x55, 0xff, 0x10);
        let json = serde_json::to_string(&hex).unwrap();
        assert_eq!(json, "\"#10aa55ff\"");
        assert_eq!(serde_json::from_str::<Color>(&json).unwrap(), hex);

        // unrecognized text falls back to mid-gray
        assert_eq!(serde_json::from_str::<Color>("\"bogus\"").unwrap(), GRAY);
    }
}
