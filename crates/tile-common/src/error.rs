//! Error types for tile addressing and bbox parsing.

use thiserror::Error;

/// Result type alias using TileError.
pub type TileResult<T> = Result<T, TileError>;

/// Errors raised while decoding tile addresses or parsing extents.
///
/// The projection math never produces these: it has no validation and lets
/// NaN/infinity flow through. Only string decoding can fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TileError {
    #[error("Invalid quadkey digit '{digit}' at position {position}, expected 0-3")]
    InvalidQuadkeyDigit { digit: char, position: usize },

    #[error("Quadkey too long: {0} digits (max {max})", max = crate::MAX_QUADKEY_LEN)]
    QuadkeyTooLong(usize),

    #[error("Invalid BBOX format: {0}. Expected 'minx,miny,maxx,maxy'")]
    InvalidBbox(String),

    #[error("Invalid number in BBOX: {0}")]
    InvalidNumber(String),
}
