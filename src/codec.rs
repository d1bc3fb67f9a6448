//! Lenient text decoding and display formatting.
//!
//! Every entry point resolves soft failure (absent or too-short input,
//! unknown name, malformed hex) to a caller-supplied default instead
//! of an error.

use crate::color::{Color, BLACK, GRAY};
use crate::named;

/// Decodes a color name ("red") or hex code ("#aa55ff", "0x80ff0000")
/// to a color, falling back to `default` for anything unrecognized.
pub fn decode(text: &str, default: Color) -> Color {
    if text.len() < 2 {
        return default;
    }
    if let Some(color) = named::lookup(text) {
        return color;
    }
    match Color::try_from_hex(text) {
        Ok(color) => color,
        Err(err) => {
            log::debug!("Ignore color text {text:?}: {err}");
            default
        }
    }
}

/// [`decode`] with the mid-gray fallback, for callers without a better
/// default.
pub fn decode_or_gray(text: &str) -> Color {
    decode(text, GRAY)
}

/// Renders a color as text: the table name when there is one, a "#"
/// hex code otherwise, "none" ("None" when `capitalized`) for an
/// absent color.
pub fn display(color: Option<Color>, capitalized: bool) -> String {
    let Some(color) = color else {
        return if capitalized { "None" } else { "none" }.to_string();
    };
    match named::name_of(color) {
        Some(name) if capitalized => named::capitalize(name),
        Some(name) => name.to_string(),
        None => format!("#{}", color.to_hex()),
    }
}

pub fn red_of(text: &str) -> u8 {
    decode(text, BLACK).r
}

pub fn green_of(text: &str) -> u8 {
    decode(text, BLACK).g
}

pub fn blue_of(text: &str) -> u8 {
    decode(text, BLACK).b
}
