//! Tests for the legacy and structured translation operations.

use insta::assert_snapshot;
use tint::{
    Color, ColorizeType, OutputMode, TintError, clear, color_gradient, colorize, colorize_as,
    colorize_by_type, colorize_classic, colorize_classic_structured, colorize_gradient,
    colorize_rgb, colorize_structured, gradient::interpolate, remove_patterns,
};

// ============================================================================
// Gradients
// ============================================================================

#[test]
fn gradient_two_characters_hits_both_endpoints() {
    let out = colorize("{#ff0000>}Hi{#00ff00<}");
    assert_eq!(out, "§x§f§f§0§0§0§0H§x§0§0§f§f§0§0i");
    assert!(!out.contains("{#"));
}

#[test]
fn gradient_keeps_surrounding_text() {
    assert_snapshot!(
        colorize("<{#000000>}ab{#0000ff<}>"),
        @"<§x§0§0§0§0§0§0a§x§0§0§0§0§f§fb>"
    );
}

#[test]
fn gradient_first_exact_last_within_one_step() {
    let first = Color::new(0, 0, 0);
    let second = Color::new(255, 100, 7);
    let colors = interpolate(first, second, 4);

    assert_eq!(colors[0], first);
    let last = colors[3];
    // Increments are 85, 33 and 2 per step.
    assert!(second.r - last.r <= 85);
    assert!(second.g - last.g <= 33);
    assert!(second.b - last.b <= 2);
    assert_eq!(last, Color::new(255, 99, 6));
}

#[test]
fn gradient_reasserts_formats_for_every_character() {
    assert_snapshot!(
        colorize_gradient("{#ff0000>}&lab{#0000ff<}"),
        @"§x§f§f§0§0§0§0§la§x§0§0§0§0§f§f§lb"
    );
}

#[test]
fn gradient_reset_drops_formats() {
    assert_snapshot!(
        colorize_gradient("{#ffffff>}&na&rb{#ffffff<}"),
        @"§x§f§f§f§f§f§f§na§x§f§f§f§f§f§fb"
    );
}

#[test]
fn gradient_escape_codes_do_not_consume_steps() {
    let plain = color_gradient("abc", Color::new(0, 0, 0), Color::new(200, 0, 0));
    let styled = color_gradient("&la&obc", Color::new(0, 0, 0), Color::new(200, 0, 0));
    assert_eq!(tint::clear(&colorize_classic(&plain)), "abc");
    assert_eq!(clear(&colorize_classic(&styled)), "abc");
    // Same three colors either way.
    assert!(styled.contains("§x§6§4§0§0§0§0"));
    assert!(plain.contains("§x§6§4§0§0§0§0"));
    assert!(styled.ends_with("§x§c§8§0§0§0§0&l&oc"));
}

#[test]
fn shorthand_chains_two_gradients() {
    let out = colorize("{#ff0000>}ab{#00ff00<>}cd{#0000ff<}");
    assert_snapshot!(
        out,
        @"§x§f§f§0§0§0§0a§x§0§0§f§f§0§0b§x§0§0§f§f§0§0c§x§0§0§0§0§f§fd"
    );
}

#[test]
fn shorthand_is_pure_sugar() {
    assert_eq!(
        colorize("{#336699<>}"),
        colorize("{#336699<}{#336699>}")
    );
}

#[test]
fn unterminated_gradient_is_literal() {
    assert_eq!(colorize("{#ff0000>}open"), "{#ff0000>}open");
}

#[test]
fn malformed_tags_pass_through() {
    let input = "{#ff00} {#ff00000} {#gg0000} {ff0000}";
    assert_eq!(colorize(input), input);
}

// ============================================================================
// Single colors
// ============================================================================

#[test]
fn rgb_tag_becomes_legacy_hex() {
    assert_eq!(colorize_rgb("{#00FF7f}go"), "§x§0§0§f§f§7§fgo");
}

#[test]
fn bold_survives_color_change() {
    let out = colorize("&lHello {#FF0000}World");
    assert_eq!(out, "§lHello §x§f§f§0§0§0§0§lWorld");
}

#[test]
fn legacy_color_ends_format_run() {
    assert_eq!(
        colorize("&l&cA{#000000}B"),
        "§l§cA§x§0§0§0§0§0§0B"
    );
}

// ============================================================================
// Dispatch
// ============================================================================

#[test]
fn by_type_runs_one_pass() {
    let input = "&a{#ff0000}x";
    assert_eq!(colorize_by_type(ColorizeType::Classic, input), "§a{#ff0000}x");
    assert_eq!(colorize_by_type(ColorizeType::Rgb, input), "&a§x§f§f§0§0§0§0x");
    assert_eq!(colorize_by_type(ColorizeType::Gradient, input), "§a{#ff0000}x");
}

#[test]
fn unknown_type_fails_fast() {
    let err = "sparkle".parse::<ColorizeType>().unwrap_err();
    assert_eq!(err, TintError::UnknownColorizeType("sparkle".into()));
    assert_eq!(err.to_string(), "unknown colorize type: sparkle");
}

#[test]
fn colorize_as_selects_output_mode() {
    assert_eq!(colorize_as(OutputMode::Legacy, "&cHi"), "§cHi");
    assert_eq!(colorize_as(OutputMode::Structured, "&cHi"), "<color:red>Hi");
}

// ============================================================================
// Structured
// ============================================================================

#[test]
fn structured_classic_uses_named_tags() {
    assert!(colorize_classic_structured("&cHello").contains("<color:red>Hello"));
}

#[test]
fn structured_full_pipeline() {
    assert_snapshot!(
        colorize_structured("&l{#ff0000>}Hi{#00ff00<} {#123abc}there&r!"),
        @"<bold><gradient:#ff0000:#00ff00>Hi</gradient> <color:#123abc>there<reset>!"
    );
}

// ============================================================================
// Round trips through clear
// ============================================================================

#[test]
fn clear_strips_everything_colorize_emits() {
    let inputs = [
        "plain text",
        "{#ff0000>}He&lllo{#00ff00<} &aWorld {#0000ff}!",
        "&k&m&n&o&rX&fY&0Z",
        "{#000000>}a{#777777<>}b{#ffffff<}",
        "❤ {#ABCDEF}ünïcödé",
    ];
    let expected = [
        "plain text",
        "Hello World !",
        "XYZ",
        "ab",
        "❤ ünïcödé",
    ];

    for (input, expected) in inputs.iter().zip(expected) {
        assert_eq!(clear(&colorize(input)), expected, "input: {input}");
    }
}

#[test]
fn remove_patterns_is_idempotent() {
    let inputs = [
        "{#{#000000}000000}x",
        "{#ff0000>}a{#00ff00<>}b{#0000ff<}",
        "{#12345} literal",
    ];

    for input in inputs {
        let once = remove_patterns(input);
        assert_eq!(remove_patterns(&once), once);
    }
}
