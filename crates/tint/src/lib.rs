//! Color markup translator.
//!
//! This crate converts a small color markup embedded in plain text into
//! either legacy section-marker codes or structured `<color:...>` tags.
//!
//! # Markup
//!
//! - `{#RRGGBB}text` - Single 24-bit color
//! - `{#RRGGBB>}text{#RRGGBB<}` - Gradient between two colors
//! - `{#RRGGBB<>}` - Shorthand for `{#RRGGBB<}{#RRGGBB>}`, chaining gradients
//! - `&c`, `&l`, ... - Legacy color and format codes
//!
//! Malformed tags are left in the text untouched.
//!
//! # Usage
//!
//! ```
//! use tint::{clear, colorize, ColorizeType};
//!
//! let legacy = colorize("&lHello {#FF0000}World");
//! assert_eq!(legacy, "§lHello §x§f§f§0§0§0§0§lWorld");
//! assert_eq!(clear(&legacy), "Hello World");
//!
//! let kind: ColorizeType = "classic".parse().unwrap();
//! assert_eq!(tint::colorize_by_type(kind, "&aOk"), "§aOk");
//! ```

pub mod codes;
pub mod color;
pub mod compose;
pub mod emit;
pub mod error;
pub mod gradient;
pub mod grammar;
pub mod strip;
pub mod structured;
pub mod translate;

// Re-export main types at crate root
pub use codes::{FormatCode, Formats, LegacyColor};
pub use color::Color;
pub use compose::ColorRun;
pub use emit::OutputMode;
pub use error::{ColorParseError, TintError};
pub use grammar::{MarkupKind, MarkupSpan};
pub use strip::{clear, remove_format_codes, remove_legacy_colors, remove_patterns};
pub use structured::{
    colorize_classic_structured, colorize_gradient_structured, colorize_rgb_structured,
    colorize_structured, colorize_structured_by_type,
};
pub use translate::{
    color_gradient, colorize, colorize_as, colorize_by_type, colorize_classic, colorize_gradient,
    colorize_rgb, ColorizeType,
};
