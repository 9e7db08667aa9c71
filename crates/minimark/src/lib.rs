//! Structured color markup deserializer.
//!
//! This crate turns the tag markup emitted by `tint`'s structured mode into
//! a [`Component`]: plain text plus styled spans that a renderer can walk.
//!
//! # Overview
//!
//! - `<color:red>text</color>` - Named legacy color (also `<red>`)
//! - `<color:#ff5733>text</color>` - Hex color (also `<#ff5733>`)
//! - `<gradient:#ff0000:#0000ff>text</gradient>` - Per-grapheme gradient
//! - `<bold>`, `<italic>`, `<underlined>`, `<strikethrough>`, `<obfuscated>`
//! - `</>` - Close most recent tag
//! - `<reset>` - Close every open tag
//! - `\<` - Escaped bracket (literal `<`)
//!
//! Tags that cannot be parsed are kept as literal text.
//!
//! # Usage
//!
//! ```
//! use minimark::Component;
//! use tint::Color;
//!
//! let component = Component::deserialize("<bold><#00ff00>Hello</bold> World");
//! assert_eq!(component.text(), "Hello World");
//! assert_eq!(component.style_at(0).color, Some(Color::new(0, 255, 0)));
//! assert!(component.style_at(0).is_bold());
//! ```

pub mod component;
pub mod error;
pub mod parser;
pub mod span;
pub mod style;

// Re-export main types at crate root
pub use component::Component;
pub use error::TagParseError;
pub use span::Span;
pub use style::Style;
