//! Style applied to a region of a component.

use tint::{Color, Formats};

/// A color plus decorations.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Style {
    /// Text color.
    pub color: Option<Color>,
    /// Active decorations (bold, italic, ...).
    pub decorations: Formats,
}

impl Style {
    /// Create a new empty style.
    pub fn new() -> Self {
        Self::default()
    }

    /// A style with only a color.
    pub fn colored(color: Color) -> Self {
        Self {
            color: Some(color),
            decorations: Formats::empty(),
        }
    }

    /// A style with only decorations.
    pub fn decorated(decorations: Formats) -> Self {
        Self {
            color: None,
            decorations,
        }
    }

    /// Returns true if no style properties are set.
    pub fn is_empty(&self) -> bool {
        self.color.is_none() && self.decorations.is_empty()
    }

    pub fn is_bold(&self) -> bool {
        self.decorations.contains(Formats::BOLD)
    }

    pub fn is_italic(&self) -> bool {
        self.decorations.contains(Formats::ITALIC)
    }

    /// Apply another style on top of this one.
    ///
    /// A color in `other` overrides this color. Decorations are OR'd together.
    pub fn apply(&self, other: &Style) -> Style {
        Style {
            color: other.color.or(self.color),
            decorations: self.decorations | other.decorations,
        }
    }
}
