//! Legacy-mode translation operations.
//!
//! `colorize` runs the gradient pass (which ends by translating `&` codes)
//! followed by the single-color pass. Each pass scans its input once, left to
//! right, and never rescans its own replacements.

use std::fmt;
use std::str::FromStr;

use crate::codes::{
    is_marker, translate_alternate_codes, FormatCode, Formats, LegacyColor, AMPERSAND,
    HEX_INTRODUCER,
};
use crate::color::Color;
use crate::compose::{self, visible_count};
use crate::emit::{emit_format, legacy_hex, OutputMode};
use crate::error::TintError;
use crate::gradient::interpolate;
use crate::grammar::{expand_shorthand, rewrite, MarkupKind, Scanner};
use crate::structured;

/// Which single translation pass to run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ColorizeType {
    /// `{#RRGGBB>}text{#RRGGBB<}` gradients, then `&` codes.
    Gradient,
    /// `{#RRGGBB}` single colors.
    Rgb,
    /// `&` codes only.
    Classic,
}

impl ColorizeType {
    pub fn name(self) -> &'static str {
        match self {
            ColorizeType::Gradient => "gradient",
            ColorizeType::Rgb => "rgb",
            ColorizeType::Classic => "classic",
        }
    }
}

impl FromStr for ColorizeType {
    type Err = TintError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gradient" => Ok(ColorizeType::Gradient),
            "rgb" => Ok(ColorizeType::Rgb),
            "classic" => Ok(ColorizeType::Classic),
            _ => Err(TintError::UnknownColorizeType(s.to_string())),
        }
    }
}

impl fmt::Display for ColorizeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Gradient translation followed by single-color translation.
///
/// # Examples
///
/// ```
/// use tint::colorize;
///
/// assert_eq!(
///     colorize("{#ff0000>}Hi{#00ff00<}"),
///     "§x§f§f§0§0§0§0H§x§0§0§f§f§0§0i"
/// );
/// ```
pub fn colorize(input: &str) -> String {
    colorize_rgb(&colorize_gradient(input))
}

/// Run exactly one translation pass.
pub fn colorize_by_type(kind: ColorizeType, input: &str) -> String {
    match kind {
        ColorizeType::Gradient => colorize_gradient(input),
        ColorizeType::Rgb => colorize_rgb(input),
        ColorizeType::Classic => colorize_classic(input),
    }
}

/// Run the full pipeline for the chosen output mode.
pub fn colorize_as(mode: OutputMode, input: &str) -> String {
    match mode {
        OutputMode::Legacy => colorize(input),
        OutputMode::Structured => structured::colorize_structured(input),
    }
}

/// Translate `&` codes into section-marker codes.
pub fn colorize_classic(input: &str) -> String {
    translate_alternate_codes(AMPERSAND, input)
}

/// Replace every gradient span with per-grapheme legacy colors, then
/// translate `&` codes.
///
/// Shorthand tags are expanded first, so `{#a<>}` joins the gradient ending
/// before it to the one starting after it.
pub fn colorize_gradient(input: &str) -> String {
    let expanded = expand_shorthand(input);
    let colored = rewrite(&expanded, MarkupKind::Gradient, |span| {
        match (span.content, span.end) {
            (Some(content), Some(end)) => color_gradient(content, span.start, end),
            _ => expanded[span.range.clone()].to_string(),
        }
    });
    colorize_classic(&colored)
}

/// Color `content` as a single gradient from `first` to `second`.
///
/// Escapes in `content` stay in their `&` form; see [`colorize_gradient`]
/// for the translated result.
pub fn color_gradient(content: &str, first: Color, second: Color) -> String {
    let count = visible_count(content);
    log::trace!("gradient over {count} visible graphemes");
    compose::apply(content, &interpolate(first, second, count))
}

/// Replace every `{#RRGGBB}` with its legacy color, followed by the format
/// codes active at that point.
///
/// A format code stays active until a reset or a legacy color code, which
/// mirrors when the legacy renderer itself would drop it.
pub fn colorize_rgb(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut formats = Formats::empty();
    let mut last_end = 0;

    for span in Scanner::new(input, MarkupKind::SingleColor) {
        let before = &input[last_end..span.range.start];
        track_formats(before, &mut formats);
        output.push_str(before);
        output.push_str(&legacy_hex(span.start));
        for code in formats.codes() {
            output.push_str(&emit_format(code, OutputMode::Legacy));
        }
        last_end = span.range.end;
    }

    output.push_str(&input[last_end..]);
    output
}

fn track_formats(text: &str, formats: &mut Formats) {
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        if !is_marker(c) {
            continue;
        }
        let Some(&code) = chars.peek() else {
            break;
        };

        if let Some(format) = FormatCode::from_code(code) {
            match format.flag() {
                Some(flag) => formats.insert(flag),
                None => *formats = Formats::empty(),
            }
        } else if LegacyColor::from_code(code).is_some()
            || code.eq_ignore_ascii_case(&HEX_INTRODUCER)
        {
            *formats = Formats::empty();
        } else {
            continue;
        }
        chars.next();
    }
}
