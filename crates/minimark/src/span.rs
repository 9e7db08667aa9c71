//! Span type for styled regions of a component.

use crate::style::Style;

/// A styled region within a component's text.
///
/// Spans reference byte positions in the plain text (with tags stripped).
/// `depth` is the tag nesting level the span came from; deeper spans take
/// precedence when styles are merged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Span {
    /// Start byte offset (inclusive) in the plain text.
    pub start: usize,
    /// End byte offset (exclusive) in the plain text.
    pub end: usize,
    /// Style to apply to this region.
    pub style: Style,
    /// Nesting depth of the tag that produced this span.
    pub depth: usize,
}

impl Span {
    /// Create a new top-level span.
    pub fn new(start: usize, end: usize, style: Style) -> Self {
        Self {
            start,
            end,
            style,
            depth: 0,
        }
    }

    /// Create a span at a given nesting depth.
    pub fn nested(start: usize, end: usize, style: Style, depth: usize) -> Self {
        Self {
            start,
            end,
            style,
            depth,
        }
    }

    /// Returns the length of this span in bytes.
    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if this span covers a zero-length range.
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Check if this span contains a given byte offset.
    pub fn contains(&self, offset: usize) -> bool {
        offset >= self.start && offset < self.end
    }

    /// Check if this span overlaps with another span.
    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}
