pub use crate::codec::{blue_of, decode, decode_or_gray, display, green_of, red_of};
pub use crate::color::*;
pub use crate::errors::ParseColorError;
pub use crate::named::{
    capitalize, color_options, from_name, name_of, name_or, name_or_default, NAMED_COLORS,
};
pub use crate::options::{ColorHost, ColorOptions, Slot};
