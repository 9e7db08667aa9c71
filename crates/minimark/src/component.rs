//! Component result type.
//!
//! This is the structured document produced from structured markup.

use crate::span::Span;
use crate::style::Style;

/// A deserialized piece of styled text.
///
/// Contains the plain text (with tags stripped) and a list of spans that
/// define styled regions.
///
/// # Examples
///
/// ```
/// use minimark::Component;
///
/// let component = Component::deserialize("<color:red>Hello</color> World");
/// assert_eq!(component.text(), "Hello World");
/// assert_eq!(component.spans().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Component {
    /// Plain text with all tags stripped.
    text: String,
    /// Style spans referencing positions in `text`.
    spans: Vec<Span>,
}

impl Component {
    /// Create a new Component with the given text and spans.
    pub fn new(text: String, spans: Vec<Span>) -> Self {
        Self { text, spans }
    }

    /// Create a Component from plain text (no spans).
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Deserialize structured markup.
    pub fn deserialize(input: &str) -> Self {
        crate::parser::deserialize(input)
    }

    /// Get the plain text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get all spans, outermost first.
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Returns true if there are no spans (plain text only).
    pub fn is_plain(&self) -> bool {
        self.spans.is_empty()
    }

    /// Get the length of the text in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    /// Returns true if the text is empty.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Iterate over styled segments.
    ///
    /// Returns an iterator that yields `(text_slice, style)` pairs for each
    /// distinct styled region. Unstyled regions are included with an empty
    /// style.
    pub fn segments(&self) -> SegmentIterator<'_> {
        SegmentIterator::new(self)
    }

    /// Get the style at a specific byte offset.
    ///
    /// Returns the merged style of all spans that contain the offset.
    pub fn style_at(&self, offset: usize) -> Style {
        self.spans
            .iter()
            .filter(|span| span.contains(offset))
            .fold(Style::default(), |style, span| style.apply(&span.style))
    }

    /// Get all spans that contain a specific byte offset.
    pub fn spans_at(&self, offset: usize) -> Vec<&Span> {
        self.spans.iter().filter(|s| s.contains(offset)).collect()
    }
}

/// Iterator over styled segments in a Component.
pub struct SegmentIterator<'a> {
    component: &'a Component,
    pos: usize,
}

impl<'a> SegmentIterator<'a> {
    fn new(component: &'a Component) -> Self {
        Self { component, pos: 0 }
    }
}

impl<'a> Iterator for SegmentIterator<'a> {
    type Item = (&'a str, Style);

    fn next(&mut self) -> Option<Self::Item> {
        let text = &self.component.text;
        if self.pos >= text.len() {
            return None;
        }

        // Find the next boundary (where style changes)
        let end = self
            .component
            .spans
            .iter()
            .flat_map(|span| [span.start, span.end])
            .filter(|&boundary| boundary > self.pos && boundary < text.len())
            .min()
            .unwrap_or(text.len());

        let style = self.component.style_at(self.pos);
        let segment = &text[self.pos..end];
        self.pos = end;

        Some((segment, style))
    }
}
