use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseColorError {
    #[error("bad digit count {0}")]
    BadLength(usize),
    #[error("bad hex digit")]
    BadDigit,
}
