//! Structured-mode translation operations.
//!
//! These produce the tag grammar consumed by a structured-document parser
//! instead of legacy codes. Gradients are handed over as
//! `<gradient:#a:#b>text</gradient>` for the parser to interpolate.

use crate::codes::{is_marker, FormatCode, LegacyColor};
use crate::emit::{emit, emit_format, emit_named, OutputMode};
use crate::grammar::{expand_shorthand, rewrite, MarkupKind};
use crate::translate::ColorizeType;

/// Gradient, single-color and legacy translation, in that order.
///
/// # Examples
///
/// ```
/// use tint::structured::colorize_structured;
///
/// assert_eq!(
///     colorize_structured("&l{#ff0000>}Hi{#00ff00<}"),
///     "<bold><gradient:#ff0000:#00ff00>Hi</gradient>"
/// );
/// ```
pub fn colorize_structured(input: &str) -> String {
    let text = colorize_gradient_structured(input);
    let text = colorize_rgb_structured(&text);
    colorize_classic_structured(&text)
}

/// Run exactly one structured translation pass.
pub fn colorize_structured_by_type(kind: ColorizeType, input: &str) -> String {
    match kind {
        ColorizeType::Gradient => colorize_gradient_structured(input),
        ColorizeType::Rgb => colorize_rgb_structured(input),
        ColorizeType::Classic => colorize_classic_structured(input),
    }
}

/// Replace gradient spans with `<gradient:#a:#b>...</gradient>`.
pub fn colorize_gradient_structured(input: &str) -> String {
    let expanded = expand_shorthand(input);
    rewrite(&expanded, MarkupKind::Gradient, |span| {
        match (span.content, span.end) {
            (Some(content), Some(end)) => {
                format!("<gradient:{}:{}>{}</gradient>", span.start, end, content)
            }
            _ => expanded[span.range.clone()].to_string(),
        }
    })
}

/// Replace `{#RRGGBB}` with `<color:#rrggbb>`.
pub fn colorize_rgb_structured(input: &str) -> String {
    rewrite(input, MarkupKind::SingleColor, |span| {
        emit(span.start, OutputMode::Structured)
    })
}

/// Replace `&`/`§` legacy codes with named color and decoration tags.
///
/// A marker followed by anything else is kept as a literal character.
pub fn colorize_classic_structured(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        if is_marker(c) {
            if let Some(tag) = chars.peek().copied().and_then(structured_code) {
                output.push_str(&tag);
                chars.next();
                continue;
            }
        }
        output.push(c);
    }

    output
}

fn structured_code(code: char) -> Option<String> {
    LegacyColor::from_code(code)
        .map(|color| emit_named(color, OutputMode::Structured))
        .or_else(|| FormatCode::from_code(code).map(|f| emit_format(f, OutputMode::Structured)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_named_colors() {
        assert_eq!(colorize_classic_structured("&cHello"), "<color:red>Hello");
        assert_eq!(colorize_classic_structured("§6Gold"), "<color:gold>Gold");
    }

    #[test]
    fn classic_formats() {
        assert_eq!(
            colorize_classic_structured("&k&l&m&n&o&r"),
            "<obfuscated><bold><strikethrough><underlined><italic><reset>"
        );
    }

    #[test]
    fn classic_unknown_code_is_literal() {
        assert_eq!(colorize_classic_structured("a & b &z &"), "a & b &z &");
        assert_eq!(colorize_classic_structured("&&c"), "&<color:red>");
    }

    #[test]
    fn rgb_tags() {
        assert_eq!(
            colorize_rgb_structured("{#00FF00}Go {#12345}"),
            "<color:#00ff00>Go {#12345}"
        );
    }

    #[test]
    fn shorthand_joins_gradients() {
        assert_eq!(
            colorize_gradient_structured("{#ff0000>}ab{#00ff00<>}cd{#0000ff<}"),
            "<gradient:#ff0000:#00ff00>ab</gradient><gradient:#00ff00:#0000ff>cd</gradient>"
        );
    }
}
