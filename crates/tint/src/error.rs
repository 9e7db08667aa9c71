//! Error types for color markup translation.

use thiserror::Error;

/// Errors that can occur when parsing a color.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorParseError {
    /// Not exactly six hex digits.
    #[error("invalid hex color: {0}")]
    InvalidHex(String),
}

/// Errors raised by the translation façade.
///
/// Malformed markup is never an error; it passes through as literal text.
/// The only failure is asking for a colorize kind that does not exist.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TintError {
    /// A colorize kind name that matches no [`ColorizeType`](crate::ColorizeType).
    #[error("unknown colorize type: {0}")]
    UnknownColorizeType(String),
}
