//! Error types for structured tag parsing.

use thiserror::Error;
use tint::ColorParseError;

/// Errors that can occur when parsing the content of a single tag.
///
/// These never escape [`Component::deserialize`](crate::Component::deserialize):
/// a tag that fails to parse is kept as literal text.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum TagParseError {
    /// Blank tag content, such as `< >`.
    #[error("empty tag")]
    Empty,

    /// A tag name that is neither a color, a gradient nor a decoration.
    #[error("unknown tag: {0}")]
    UnknownTag(String),

    /// A color argument that is neither `#rrggbb` nor a known color name.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// A hex color argument with malformed digits.
    #[error("invalid color in tag: {0}")]
    InvalidHex(#[from] ColorParseError),

    /// A tag that requires arguments was given none.
    #[error("missing argument for tag: {0}")]
    MissingArgument(String),
}
