//! Deserializer for structured markup.
//!
//! This module contains the lexer, tag parser, and main document parser.

mod document;
mod lexer;
mod tag;

pub use document::deserialize;
pub use lexer::{Lexer, Token};
pub use tag::{Tag, canonical_close_name};
