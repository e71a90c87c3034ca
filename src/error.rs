//! Error type for the configuration surface.
//!
//! The rasterization hot path has no recoverable errors; contract
//! violations there are debug assertions.

use thiserror::Error;

#[derive(Error, Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// Filling rule name is not one of `non-zero` / `even-odd`.
    #[error("unknown filling rule `{0}`, expected `non-zero` or `even-odd`")]
    UnknownFillingRule(String),
    /// Anti-alias shift outside of the representable coverage range.
    #[error("anti-alias shift {0} is out of range, expected 1..=8")]
    InvalidAaShift(u32),
    /// Pixel slice shorter than the rows a rendering buffer addresses.
    #[error("buffer holds {actual} values, {required} required for the given geometry")]
    BufferTooSmall { required: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
