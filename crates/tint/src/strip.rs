//! Removal of markup tags and legacy codes.
//!
//! Every pass repeats until the text stops changing, so removing one code can
//! never leave a new one behind (`&&00` is fully cleared, not reduced to `&0`).

use crate::codes::{is_marker, FormatCode, LegacyColor, HEX_INTRODUCER};
use crate::grammar::{any_tag, find_tag};

/// Remove markup tags, then legacy color codes, then format codes.
///
/// # Examples
///
/// ```
/// use tint::clear;
///
/// assert_eq!(clear("{#00e64e}Forest&lTech &c❤"), "ForestTech ❤");
/// ```
pub fn clear(input: &str) -> String {
    to_fixpoint(input, |text| {
        let text = remove_patterns(text);
        let text = remove_legacy_colors(&text);
        remove_format_codes(&text)
    })
}

/// Remove `{#RRGGBB}`, `{#RRGGBB>}`, `{#RRGGBB<}` and `{#RRGGBB<>}` tags.
pub fn remove_patterns(input: &str) -> String {
    to_fixpoint(input, remove_tags_once)
}

/// Remove `&`/`§` followed by a color digit (`0-9`, `a-f`) or the hex
/// introducer `x`, in either case.
pub fn remove_legacy_colors(input: &str) -> String {
    to_fixpoint(input, |text| {
        remove_codes_once(text, |code| {
            LegacyColor::from_code(code).is_some() || code.eq_ignore_ascii_case(&HEX_INTRODUCER)
        })
    })
}

/// Remove `&`/`§` followed by a format code (`k-o`, `r`), in either case.
pub fn remove_format_codes(input: &str) -> String {
    to_fixpoint(input, |text| {
        remove_codes_once(text, |code| FormatCode::from_code(code).is_some())
    })
}

fn to_fixpoint(input: &str, pass: impl Fn(&str) -> String) -> String {
    let mut current = pass(input);
    loop {
        let next = pass(&current);
        // Passes only ever delete, so equal length means nothing was removed.
        if next.len() == current.len() {
            return current;
        }
        current = next;
    }
}

fn remove_tags_once(input: &str) -> String {
    let mut output = String::with_capacity(input.len());
    let mut last_end = 0;

    while let Some((range, _)) = find_tag(input, last_end, any_tag) {
        output.push_str(&input[last_end..range.start]);
        last_end = range.end;
    }

    output.push_str(&input[last_end..]);
    output
}

fn remove_codes_once(input: &str, is_code: impl Fn(char) -> bool) -> String {
    let mut output = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&code) if is_marker(c) && is_code(code) => {
                chars.next();
            }
            _ => output.push(c),
        }
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn remove_all_tag_forms() {
        assert_eq!(
            remove_patterns("{#ff0000>}a{#00ff00<>}b{#0000ff<}{#123456}c"),
            "abc"
        );
    }

    #[test]
    fn malformed_tags_survive() {
        assert_eq!(remove_patterns("{#12345}{#1234567}"), "{#12345}{#1234567}");
    }

    #[test]
    fn nested_removal_reaches_fixpoint() {
        assert_eq!(remove_patterns("{#{#000000}000000}x"), "x");
        assert_eq!(remove_legacy_colors("&&00x"), "x");
    }

    #[test]
    fn legacy_colors_include_white_and_hex() {
        assert_eq!(remove_legacy_colors("§fA§x§a§b§c§d§e§fB&CC"), "ABC");
        assert_eq!(remove_legacy_colors("&lBold"), "&lBold");
    }

    #[test]
    fn format_codes_include_reset() {
        assert_eq!(remove_format_codes("&lA&rB§oC&KD"), "ABCD");
        assert_eq!(remove_format_codes("&cRed"), "&cRed");
    }

    #[test]
    fn lone_markers_are_kept() {
        assert_eq!(clear("Tom & Jerry &"), "Tom & Jerry &");
    }
}
