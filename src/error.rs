//! Error type for colour parsing and palette construction.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColourError {
    #[error("empty colour string")]
    Empty,
    #[error("invalid hex length {0}, expected 3, 6 or 8 digits")]
    InvalidLength(usize),
    #[error("invalid hex digit '{0}'")]
    InvalidDigit(char),
}

pub type ColourResult<T> = Result<T, ColourError>;
