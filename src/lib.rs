//! Color markup translation for legacy and structured renderers.
//!
//! `tint-rs` ties the two workspace crates together:
//!
//! - [`tint`] translates `{#RRGGBB}`, `{#RRGGBB>}text{#RRGGBB<}` and `&`
//!   codes into `§` legacy codes or structured `<color:...>` tags.
//! - [`minimark`] deserializes the structured tags into a [`Component`].
//!
//! # Usage
//!
//! ```
//! use tint_rs::{colorize, colorize_component, Color};
//!
//! assert_eq!(colorize("&cHi"), "§cHi");
//!
//! let component = colorize_component("{#00ff00}Hi &lthere");
//! assert_eq!(component.text(), "Hi there");
//! assert_eq!(component.style_at(0).color, Some(Color::new(0, 255, 0)));
//! assert!(component.style_at(3).is_bold());
//! ```

pub use minimark;
pub use tint;

pub use minimark::{Component, Span, Style};
pub use tint::{
    clear, colorize, colorize_by_type, colorize_structured, colorize_structured_by_type, Color,
    ColorizeType, OutputMode, TintError,
};

/// Translate `text` in structured mode and deserialize the result.
pub fn colorize_component(text: &str) -> Component {
    deserialize(&colorize_structured(text))
}

/// Run a single structured pass of `kind` over `text` and deserialize the
/// result. Markup belonging to the other passes stays in the text.
pub fn colorize_component_by_type(kind: ColorizeType, text: &str) -> Component {
    deserialize(&colorize_structured_by_type(kind, text))
}

/// Deserialize structured markup into a [`Component`].
pub fn deserialize(markup: &str) -> Component {
    log::trace!("deserializing {} bytes of markup", markup.len());
    Component::deserialize(markup)
}
