//! Main deserializer for structured markup.
//!
//! Combines the lexer and tag parser to produce a Component.

use tint::gradient::interpolate_stops;
use tint::Color;
use unicode_segmentation::UnicodeSegmentation;

use crate::component::Component;
use crate::span::Span;
use crate::style::Style;

use super::lexer::{Lexer, Token};
use super::tag::{canonical_close_name, Tag};

/// Deserialize structured markup into a Component.
///
/// Never fails: tags that cannot be parsed stay in the text literally,
/// unmatched closing tags are dropped and tags left open run to the end.
///
/// # Examples
///
/// ```
/// use minimark::parser::deserialize;
///
/// let component = deserialize("<bold>Hello</bold> World");
/// assert_eq!(component.text(), "Hello World");
/// assert_eq!(component.spans().len(), 1);
/// ```
pub fn deserialize(input: &str) -> Component {
    let mut parser = Parser::new();
    for token in Lexer::new(input) {
        parser.process_token(token);
    }

    // Close any remaining open tags
    parser.close_all_remaining();

    let mut spans = parser.spans;
    // Outer spans first so nested styles are applied over them.
    spans.sort_by_key(|span| span.depth);
    Component::new(parser.output, spans)
}

/// The main parser state.
struct Parser {
    /// Stack of open tags (for nesting).
    stack: Vec<StackEntry>,
    /// Output plain text (tags stripped).
    output: String,
    /// Generated spans.
    spans: Vec<Span>,
}

#[derive(Clone, Debug)]
enum EntryKind {
    Style(Style),
    Gradient(Vec<Color>),
}

/// An entry on the tag stack.
#[derive(Clone, Debug)]
struct StackEntry {
    kind: EntryKind,
    /// Position in output where this tag started.
    start_pos: usize,
    /// Name a closing tag must carry to close this entry.
    close_name: &'static str,
}

impl Parser {
    fn new() -> Self {
        Self {
            stack: Vec::new(),
            output: String::new(),
            spans: Vec::new(),
        }
    }

    fn process_token(&mut self, token: Token<'_>) {
        match token {
            Token::Text(text) => self.output.push_str(text),
            Token::Escaped(c) => self.output.push(c),
            Token::OpenTag(content) => self.process_open_tag(content),
            Token::CloseTag(name) => self.process_close_tag(name),
        }
    }

    fn process_open_tag(&mut self, content: &str) {
        let tag = match Tag::parse(content) {
            Ok(tag) => tag,
            Err(err) => {
                log::debug!("keeping <{content}> as text: {err}");
                self.output.push('<');
                self.output.push_str(content);
                self.output.push('>');
                return;
            }
        };

        let close_name = tag.close_name();
        let kind = match tag {
            Tag::Reset => {
                self.close_all_remaining();
                return;
            }
            Tag::Color(color) => EntryKind::Style(Style::colored(color)),
            Tag::Decoration(flags) => EntryKind::Style(Style::decorated(flags)),
            Tag::Gradient(stops) => EntryKind::Gradient(stops),
        };

        self.stack.push(StackEntry {
            kind,
            start_pos: self.output.len(),
            close_name,
        });
    }

    fn process_close_tag(&mut self, name: &str) {
        // `</>` closes the most recent tag.
        if name.trim().is_empty() {
            self.pop_entry();
            return;
        }

        let name = canonical_close_name(name);
        match self.stack.iter().rposition(|entry| entry.close_name == name) {
            Some(index) => {
                while self.stack.len() > index {
                    self.pop_entry();
                }
            }
            None => log::debug!("dropping unmatched </{name}>"),
        }
    }

    fn pop_entry(&mut self) {
        if let Some(entry) = self.stack.pop() {
            self.create_spans(entry);
        }
    }

    /// Create the spans for a closed entry. Gradients get one span per grapheme.
    fn create_spans(&mut self, entry: StackEntry) {
        let end_pos = self.output.len();
        if end_pos <= entry.start_pos {
            return;
        }
        let depth = self.stack.len();

        match entry.kind {
            EntryKind::Style(style) => {
                self.spans
                    .push(Span::nested(entry.start_pos, end_pos, style, depth));
            }
            EntryKind::Gradient(stops) => {
                let text = &self.output[entry.start_pos..end_pos];
                let graphemes: Vec<(usize, &str)> = text.grapheme_indices(true).collect();
                let colors = interpolate_stops(&stops, graphemes.len());

                for ((offset, grapheme), color) in graphemes.into_iter().zip(colors) {
                    let start = entry.start_pos + offset;
                    self.spans.push(Span::nested(
                        start,
                        start + grapheme.len(),
                        Style::colored(color),
                        depth,
                    ));
                }
            }
        }
    }

    fn close_all_remaining(&mut self) {
        while !self.stack.is_empty() {
            self.pop_entry();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tint::Formats;

    #[test]
    fn parse_plain_text() {
        let component = deserialize("Hello World");
        assert_eq!(component.text(), "Hello World");
        assert!(component.spans().is_empty());
    }

    #[test]
    fn parse_single_decoration() {
        let component = deserialize("<bold>Hello</bold>");
        assert_eq!(component.text(), "Hello");
        assert_eq!(component.spans().len(), 1);
        assert!(component.spans()[0].style.is_bold());
    }

    #[test]
    fn parse_nested_depths() {
        let component = deserialize("<red><bold>x</bold></red>");
        let depths: Vec<usize> = component.spans().iter().map(|s| s.depth).collect();
        assert_eq!(depths, vec![0, 1]);
    }

    #[test]
    fn close_tag_closes_inner_tags_too() {
        let component = deserialize("<red><bold>ab</red>c");
        assert_eq!(component.text(), "abc");
        assert_eq!(component.spans().len(), 2);
        assert!(component.spans().iter().all(|s| s.end == 2));
    }

    #[test]
    fn close_most_recent() {
        let component = deserialize("<bold><italic>a</>b");
        let italic = &component.spans()[1];
        assert_eq!(italic.style.decorations, Formats::ITALIC);
        assert_eq!(italic.end, 1);
    }

    #[test]
    fn reset_closes_everything() {
        let component = deserialize("<bold><red>a<reset>b");
        assert_eq!(component.text(), "ab");
        assert!(component.spans().iter().all(|s| s.end == 1));
        assert!(component.style_at(1).is_empty());
    }

    #[test]
    fn unparseable_tag_is_literal() {
        let component = deserialize("1 <sparkle> 2");
        assert_eq!(component.text(), "1 <sparkle> 2");
        assert!(component.is_plain());
    }

    #[test]
    fn unmatched_close_is_dropped() {
        let component = deserialize("a</bold>b");
        assert_eq!(component.text(), "ab");
    }

    #[test]
    fn gradient_spans_per_grapheme() {
        let component = deserialize("<gradient:#ff0000:#0000ff>a❤c</gradient>");
        assert_eq!(component.text(), "a❤c");
        let spans = component.spans();
        assert_eq!(spans.len(), 3);
        assert_eq!((spans[1].start, spans[1].end), (1, 4));
        assert_eq!(spans[0].style.color, Some(Color::new(255, 0, 0)));
        assert_eq!(spans[2].style.color, Some(Color::new(1, 0, 254)));
    }

    #[test]
    fn empty_tags_produce_no_spans() {
        let component = deserialize("<bold></bold><gradient:#000000:#ffffff></gradient>x");
        assert_eq!(component.text(), "x");
        assert!(component.is_plain());
    }
}
