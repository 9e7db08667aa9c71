//! Rendering of colors and format codes into output text.

use crate::codes::{FormatCode, LegacyColor, HEX_INTRODUCER, SECTION};
use crate::color::Color;

/// The emission target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputMode {
    /// Section-marker codes for a legacy renderer extended with 24-bit color.
    #[default]
    Legacy,
    /// `<color:...>`-style tags for a structured-document parser.
    Structured,
}

/// Render a color for `mode`.
///
/// # Examples
///
/// ```
/// use tint::{Color, OutputMode, emit::emit};
///
/// assert_eq!(emit(Color::new(255, 0, 0), OutputMode::Legacy), "§x§f§f§0§0§0§0");
/// assert_eq!(emit(Color::new(255, 0, 0), OutputMode::Structured), "<color:#ff0000>");
/// ```
pub fn emit(color: Color, mode: OutputMode) -> String {
    match mode {
        OutputMode::Legacy => legacy_hex(color),
        OutputMode::Structured => format!("<color:{color}>"),
    }
}

/// `§x` followed by one `§` + digit pair per hex digit.
pub fn legacy_hex(color: Color) -> String {
    let mut out = String::with_capacity(14 * SECTION.len_utf8());
    out.push(SECTION);
    out.push(HEX_INTRODUCER);
    for digit in color.to_hex().chars() {
        out.push(SECTION);
        out.push(digit);
    }
    out
}

/// Render a named legacy color for `mode`.
pub fn emit_named(color: LegacyColor, mode: OutputMode) -> String {
    match mode {
        OutputMode::Legacy => legacy_code(color.code()),
        OutputMode::Structured => format!("<color:{}>", color.name()),
    }
}

/// Render a format directive for `mode`.
pub fn emit_format(code: FormatCode, mode: OutputMode) -> String {
    match mode {
        OutputMode::Legacy => legacy_code(code.code()),
        OutputMode::Structured => format!("<{}>", code.tag_name()),
    }
}

fn legacy_code(code: char) -> String {
    let mut out = String::with_capacity(SECTION.len_utf8() + 1);
    out.push(SECTION);
    out.push(code);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn legacy_hex_digits_are_lowercase() {
        assert_eq!(legacy_hex(Color::new(0xab, 0xcd, 0xef)), "§x§a§b§c§d§e§f");
    }

    #[test]
    fn named_colors() {
        assert_eq!(emit_named(LegacyColor::Gold, OutputMode::Legacy), "§6");
        assert_eq!(
            emit_named(LegacyColor::DarkPurple, OutputMode::Structured),
            "<color:dark_purple>"
        );
    }

    #[test]
    fn format_directives() {
        assert_eq!(emit_format(FormatCode::Bold, OutputMode::Legacy), "§l");
        assert_eq!(
            emit_format(FormatCode::Strikethrough, OutputMode::Structured),
            "<strikethrough>"
        );
        assert_eq!(emit_format(FormatCode::Reset, OutputMode::Structured), "<reset>");
    }
}
