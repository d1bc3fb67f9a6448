//! The fixed table of named colors.
//!
//! An explicit data table keyed by lowercase name; order is the
//! display order and never changes.

use crate::color::{
    Color, BLACK, BLUE, CYAN, DARK_GRAY, GRAY, GREEN, LIGHT_GRAY, MAGENTA, ORANGE, PINK, RED,
    WHITE, YELLOW,
};

/// The 13 recognized color names and their values, in display order.
pub const NAMED_COLORS: [(&str, Color); 13] = [
    ("red", RED),
    ("green", GREEN),
    ("blue", BLUE),
    ("magenta", MAGENTA),
    ("cyan", CYAN),
    ("yellow", YELLOW),
    ("orange", ORANGE),
    ("black", BLACK),
    ("white", WHITE),
    ("gray", GRAY),
    ("lightgray", LIGHT_GRAY),
    ("darkgray", DARK_GRAY),
    ("pink", PINK),
];

/// Case-insensitive exact lookup in the table.
pub fn lookup(name: &str) -> Option<Color> {
    NAMED_COLORS
        .iter()
        .find(|(n, _)| n.eq_ignore_ascii_case(name))
        .map(|(_, c)| *c)
}

/// The color for a name, or `default` when the name is absent, shorter
/// than two characters, or not in the table. Name lookup only; hex
/// codes are handled by [`crate::codec::decode`].
pub fn from_name(name: &str, default: Color) -> Color {
    if name.len() < 2 {
        return default;
    }
    lookup(name).unwrap_or(default)
}

/// The table name for a color, matching on RGB only. Table colors are
/// opaque, but alpha is ignored in the match, so a translucent color
/// with the channels of a named one still reports the name.
pub fn name_of(color: Color) -> Option<&'static str> {
    NAMED_COLORS
        .iter()
        .find(|(_, c)| c.r == color.r && c.g == color.g && c.b == color.b)
        .map(|(n, _)| *n)
}

/// First character uppercased, the rest unchanged.
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// The name of a color, or `default_name` for an absent or unnamed
/// color. A matched name is lowercase, or capitalized when
/// `capitalized` is set; a returned default is never altered.
pub fn name_or(color: Option<Color>, default_name: &str, capitalized: bool) -> String {
    let Some(color) = color else {
        return default_name.to_string();
    };
    match name_of(color) {
        Some(name) if capitalized => capitalize(name),
        Some(name) => name.to_string(),
        None => default_name.to_string(),
    }
}

/// Like [`name_or`], inferring capitalization from the first character
/// of `default_name`.
pub fn name_or_default(color: Option<Color>, default_name: &str) -> String {
    let capitalized = default_name.chars().next().is_some_and(|c| c.is_uppercase());
    name_or(color, default_name, capitalized)
}

/// Builds a selection list: the extras that are "None" or do not start
/// with a letter (hex literals such as "#aa55ff"), in the order given,
/// followed by the 13 table names capitalized.
pub fn color_options(extras: &[&str]) -> Vec<String> {
    let mut names = Vec::with_capacity(extras.len() + NAMED_COLORS.len());
    for extra in extras {
        let keep = match extra.chars().next() {
            Some(first) => !first.is_alphabetic() || *extra == "None",
            None => false,
        };
        if keep {
            names.push((*extra).to_string());
        }
    }
    for (name, _) in &NAMED_COLORS {
        names.push(capitalize(name));
    }
    names
}
