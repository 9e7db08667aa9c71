//! Grammar for the color markup tags.
//!
//! Three constructs are recognized, all with exactly six hex digits:
//!
//! ```text
//! {#RRGGBB}                          single color
//! {#RRGGBB>}content{#RRGGBB<}        gradient pair (content is non-greedy)
//! {#RRGGBB<>}                        shorthand, rewritten to {#RRGGBB<}{#RRGGBB>}
//! ```
//!
//! Anything else, including a tag with the wrong number of digits, is plain
//! text and is never matched.

use std::ops::Range;

use nom::{
    IResult,
    branch::alt,
    bytes::complete::{tag, take_while_m_n},
    combinator::map_res,
    sequence::delimited,
};

use crate::color::Color;

/// The kind of a recognized markup construct.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MarkupKind {
    SingleColor,
    Gradient,
    ShorthandGradient,
}

/// A markup match in the scanned text.
#[derive(Clone, Debug, PartialEq)]
pub struct MarkupSpan<'a> {
    pub kind: MarkupKind,
    /// The color of a single tag, or the gradient's first color.
    pub start: Color,
    /// The gradient's last color.
    pub end: Option<Color>,
    /// Byte range of the whole match in the scanned text.
    pub range: Range<usize>,
    /// Text enclosed by a gradient pair.
    pub content: Option<&'a str>,
}

/// Exactly six hex digits.
pub fn hex_color(input: &str) -> IResult<&str, Color> {
    map_res(
        take_while_m_n(6, 6, |c: char| c.is_ascii_hexdigit()),
        Color::from_hex,
    )(input)
}

/// `{#RRGGBB}`
pub fn single_tag(input: &str) -> IResult<&str, Color> {
    delimited(tag("{#"), hex_color, tag("}"))(input)
}

/// `{#RRGGBB>}`
pub fn gradient_open(input: &str) -> IResult<&str, Color> {
    delimited(tag("{#"), hex_color, tag(">}"))(input)
}

/// `{#RRGGBB<}`
pub fn gradient_close(input: &str) -> IResult<&str, Color> {
    delimited(tag("{#"), hex_color, tag("<}"))(input)
}

/// `{#RRGGBB<>}`
pub fn shorthand_tag(input: &str) -> IResult<&str, Color> {
    delimited(tag("{#"), hex_color, tag("<>}"))(input)
}

/// Any one of the four tag forms.
pub fn any_tag(input: &str) -> IResult<&str, Color> {
    alt((single_tag, gradient_open, gradient_close, shorthand_tag))(input)
}

/// Find the first match of `parser` starting at or after byte `from`.
pub(crate) fn find_tag<'a, O>(
    text: &'a str,
    from: usize,
    mut parser: impl FnMut(&'a str) -> IResult<&'a str, O>,
) -> Option<(Range<usize>, O)> {
    text[from..].match_indices('{').find_map(|(offset, _)| {
        let start = from + offset;
        let (rest, value) = parser(&text[start..]).ok()?;
        Some((start..text.len() - rest.len(), value))
    })
}

/// Left-to-right, non-overlapping scanner for one markup kind.
///
/// # Examples
///
/// ```
/// use tint::grammar::{MarkupKind, Scanner};
///
/// let spans: Vec<_> = Scanner::new("{#ff0000>}Hi{#00ff00<}", MarkupKind::Gradient).collect();
/// assert_eq!(spans.len(), 1);
/// assert_eq!(spans[0].content, Some("Hi"));
/// ```
pub struct Scanner<'a> {
    input: &'a str,
    pos: usize,
    kind: MarkupKind,
}

impl<'a> Scanner<'a> {
    /// Create a scanner over `input` for `kind`.
    pub fn new(input: &'a str, kind: MarkupKind) -> Self {
        Self {
            input,
            pos: 0,
            kind,
        }
    }

    fn next_single(&mut self, parser: fn(&str) -> IResult<&str, Color>) -> Option<MarkupSpan<'a>> {
        let (range, color) = find_tag(self.input, self.pos, parser)?;
        self.pos = range.end;
        Some(MarkupSpan {
            kind: self.kind,
            start: color,
            end: None,
            range,
            content: None,
        })
    }

    fn next_gradient(&mut self) -> Option<MarkupSpan<'a>> {
        let (open, first) = find_tag(self.input, self.pos, gradient_open)?;
        // No closer after the leftmost opener means none after any later one.
        let Some((close, second)) = find_tag(self.input, open.end, gradient_close) else {
            self.pos = self.input.len();
            return None;
        };

        log::trace!(
            "gradient span {}..{}: {} -> {}",
            open.start,
            close.end,
            first,
            second
        );

        self.pos = close.end;
        Some(MarkupSpan {
            kind: MarkupKind::Gradient,
            start: first,
            end: Some(second),
            range: open.start..close.end,
            content: Some(&self.input[open.end..close.start]),
        })
    }
}

impl<'a> Iterator for Scanner<'a> {
    type Item = MarkupSpan<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.pos >= self.input.len() {
            return None;
        }

        match self.kind {
            MarkupKind::SingleColor => self.next_single(single_tag),
            MarkupKind::ShorthandGradient => self.next_single(shorthand_tag),
            MarkupKind::Gradient => self.next_gradient(),
        }
    }
}

/// Replace every span of `kind` with the output of `replace`.
///
/// Text between spans is copied unchanged; replacement text is not rescanned.
pub fn rewrite<F>(input: &str, kind: MarkupKind, mut replace: F) -> String
where
    F: FnMut(&MarkupSpan<'_>) -> String,
{
    let mut output = String::with_capacity(input.len());
    let mut last_end = 0;

    for span in Scanner::new(input, kind) {
        output.push_str(&input[last_end..span.range.start]);
        output.push_str(&replace(&span));
        last_end = span.range.end;
    }

    output.push_str(&input[last_end..]);
    output
}

/// Rewrite every `{#RRGGBB<>}` into `{#RRGGBB<}{#RRGGBB>}`.
pub fn expand_shorthand(input: &str) -> String {
    rewrite(input, MarkupKind::ShorthandGradient, |span| {
        let hex = span.start.to_hex();
        format!("{{#{hex}<}}{{#{hex}>}}")
    })
}
