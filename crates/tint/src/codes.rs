//! Static legacy code tables.
//!
//! A legacy directive is an escape marker (`&` in user text, `§` once
//! translated) followed by a single code character:
//!
//! ```text
//! 0-9 a-f   the sixteen named colors
//! k-o       obfuscated, bold, strikethrough, underlined, italic
//! r         reset
//! x         introducer of a 24-bit color (`§x§r§r§g§g§b§b`)
//! ```

use bitflags::bitflags;
use phf::phf_map;

use crate::color::Color;

/// Marker understood by the legacy renderer.
pub const SECTION: char = '§';

/// Marker users type in place of [`SECTION`].
pub const AMPERSAND: char = '&';

/// Code introducing a 24-bit color in legacy form.
pub const HEX_INTRODUCER: char = 'x';

/// Returns true for either escape marker.
pub fn is_marker(c: char) -> bool {
    c == AMPERSAND || c == SECTION
}

/// One of the sixteen named legacy colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum LegacyColor {
    Black,
    DarkBlue,
    DarkGreen,
    DarkAqua,
    DarkRed,
    DarkPurple,
    Gold,
    Gray,
    DarkGray,
    Blue,
    Green,
    Aqua,
    Red,
    LightPurple,
    Yellow,
    White,
}

static LEGACY_COLOR_CODES: phf::Map<char, LegacyColor> = phf_map! {
    '0' => LegacyColor::Black,
    '1' => LegacyColor::DarkBlue,
    '2' => LegacyColor::DarkGreen,
    '3' => LegacyColor::DarkAqua,
    '4' => LegacyColor::DarkRed,
    '5' => LegacyColor::DarkPurple,
    '6' => LegacyColor::Gold,
    '7' => LegacyColor::Gray,
    '8' => LegacyColor::DarkGray,
    '9' => LegacyColor::Blue,
    'a' => LegacyColor::Green,
    'b' => LegacyColor::Aqua,
    'c' => LegacyColor::Red,
    'd' => LegacyColor::LightPurple,
    'e' => LegacyColor::Yellow,
    'f' => LegacyColor::White,
};

static LEGACY_COLOR_NAMES: phf::Map<&'static str, LegacyColor> = phf_map! {
    "black" => LegacyColor::Black,
    "dark_blue" => LegacyColor::DarkBlue,
    "dark_green" => LegacyColor::DarkGreen,
    "dark_aqua" => LegacyColor::DarkAqua,
    "dark_red" => LegacyColor::DarkRed,
    "dark_purple" => LegacyColor::DarkPurple,
    "gold" => LegacyColor::Gold,
    "gray" => LegacyColor::Gray,
    "grey" => LegacyColor::Gray,
    "dark_gray" => LegacyColor::DarkGray,
    "dark_grey" => LegacyColor::DarkGray,
    "blue" => LegacyColor::Blue,
    "green" => LegacyColor::Green,
    "aqua" => LegacyColor::Aqua,
    "red" => LegacyColor::Red,
    "light_purple" => LegacyColor::LightPurple,
    "yellow" => LegacyColor::Yellow,
    "white" => LegacyColor::White,
};

impl LegacyColor {
    /// Look up a color by its code character, case-insensitive.
    pub fn from_code(code: char) -> Option<Self> {
        LEGACY_COLOR_CODES
            .get(&code.to_ascii_lowercase())
            .copied()
    }

    /// Look up a color by its structured-markup name (`dark_blue`, `gold`, ...).
    pub fn from_name(name: &str) -> Option<Self> {
        LEGACY_COLOR_NAMES
            .get(name.to_ascii_lowercase().as_str())
            .copied()
    }

    /// The lowercase code character.
    pub fn code(self) -> char {
        match self {
            LegacyColor::Black => '0',
            LegacyColor::DarkBlue => '1',
            LegacyColor::DarkGreen => '2',
            LegacyColor::DarkAqua => '3',
            LegacyColor::DarkRed => '4',
            LegacyColor::DarkPurple => '5',
            LegacyColor::Gold => '6',
            LegacyColor::Gray => '7',
            LegacyColor::DarkGray => '8',
            LegacyColor::Blue => '9',
            LegacyColor::Green => 'a',
            LegacyColor::Aqua => 'b',
            LegacyColor::Red => 'c',
            LegacyColor::LightPurple => 'd',
            LegacyColor::Yellow => 'e',
            LegacyColor::White => 'f',
        }
    }

    /// The structured-markup name.
    pub fn name(self) -> &'static str {
        match self {
            LegacyColor::Black => "black",
            LegacyColor::DarkBlue => "dark_blue",
            LegacyColor::DarkGreen => "dark_green",
            LegacyColor::DarkAqua => "dark_aqua",
            LegacyColor::DarkRed => "dark_red",
            LegacyColor::DarkPurple => "dark_purple",
            LegacyColor::Gold => "gold",
            LegacyColor::Gray => "gray",
            LegacyColor::DarkGray => "dark_gray",
            LegacyColor::Blue => "blue",
            LegacyColor::Green => "green",
            LegacyColor::Aqua => "aqua",
            LegacyColor::Red => "red",
            LegacyColor::LightPurple => "light_purple",
            LegacyColor::Yellow => "yellow",
            LegacyColor::White => "white",
        }
    }

    /// The RGB value the legacy renderer paints this color with.
    pub fn rgb(self) -> Color {
        match self {
            LegacyColor::Black => Color::new(0x00, 0x00, 0x00),
            LegacyColor::DarkBlue => Color::new(0x00, 0x00, 0xaa),
            LegacyColor::DarkGreen => Color::new(0x00, 0xaa, 0x00),
            LegacyColor::DarkAqua => Color::new(0x00, 0xaa, 0xaa),
            LegacyColor::DarkRed => Color::new(0xaa, 0x00, 0x00),
            LegacyColor::DarkPurple => Color::new(0xaa, 0x00, 0xaa),
            LegacyColor::Gold => Color::new(0xff, 0xaa, 0x00),
            LegacyColor::Gray => Color::new(0xaa, 0xaa, 0xaa),
            LegacyColor::DarkGray => Color::new(0x55, 0x55, 0x55),
            LegacyColor::Blue => Color::new(0x55, 0x55, 0xff),
            LegacyColor::Green => Color::new(0x55, 0xff, 0x55),
            LegacyColor::Aqua => Color::new(0x55, 0xff, 0xff),
            LegacyColor::Red => Color::new(0xff, 0x55, 0x55),
            LegacyColor::LightPurple => Color::new(0xff, 0x55, 0xff),
            LegacyColor::Yellow => Color::new(0xff, 0xff, 0x55),
            LegacyColor::White => Color::new(0xff, 0xff, 0xff),
        }
    }
}

bitflags! {
    /// A set of active text decorations.
    ///
    /// Iteration yields flags in declaration order, which is also the order
    /// they are re-emitted in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
    pub struct Formats: u8 {
        const OBFUSCATED    = 0b0000_0001;
        const BOLD          = 0b0000_0010;
        const STRIKETHROUGH = 0b0000_0100;
        const UNDERLINED    = 0b0000_1000;
        const ITALIC        = 0b0001_0000;
    }
}

impl Formats {
    /// The format codes making up this set.
    pub fn codes(self) -> impl Iterator<Item = FormatCode> {
        self.iter().filter_map(FormatCode::from_flag)
    }
}

/// A single inline formatting directive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormatCode {
    Obfuscated,
    Bold,
    Strikethrough,
    Underlined,
    Italic,
    Reset,
}

static FORMAT_CODES: phf::Map<char, FormatCode> = phf_map! {
    'k' => FormatCode::Obfuscated,
    'l' => FormatCode::Bold,
    'm' => FormatCode::Strikethrough,
    'n' => FormatCode::Underlined,
    'o' => FormatCode::Italic,
    'r' => FormatCode::Reset,
};

impl FormatCode {
    /// Look up a directive by its code character, case-insensitive.
    pub fn from_code(code: char) -> Option<Self> {
        FORMAT_CODES.get(&code.to_ascii_lowercase()).copied()
    }

    fn from_flag(flag: Formats) -> Option<Self> {
        [
            FormatCode::Obfuscated,
            FormatCode::Bold,
            FormatCode::Strikethrough,
            FormatCode::Underlined,
            FormatCode::Italic,
        ]
        .into_iter()
        .find(|code| code.flag() == Some(flag))
    }

    /// The lowercase code character.
    pub fn code(self) -> char {
        match self {
            FormatCode::Obfuscated => 'k',
            FormatCode::Bold => 'l',
            FormatCode::Strikethrough => 'm',
            FormatCode::Underlined => 'n',
            FormatCode::Italic => 'o',
            FormatCode::Reset => 'r',
        }
    }

    /// The structured-markup tag name.
    pub fn tag_name(self) -> &'static str {
        match self {
            FormatCode::Obfuscated => "obfuscated",
            FormatCode::Bold => "bold",
            FormatCode::Strikethrough => "strikethrough",
            FormatCode::Underlined => "underlined",
            FormatCode::Italic => "italic",
            FormatCode::Reset => "reset",
        }
    }

    /// The decoration flag this directive turns on. `None` for reset.
    pub fn flag(self) -> Option<Formats> {
        match self {
            FormatCode::Obfuscated => Some(Formats::OBFUSCATED),
            FormatCode::Bold => Some(Formats::BOLD),
            FormatCode::Strikethrough => Some(Formats::STRIKETHROUGH),
            FormatCode::Underlined => Some(Formats::UNDERLINED),
            FormatCode::Italic => Some(Formats::ITALIC),
            FormatCode::Reset => None,
        }
    }
}

/// Returns true if `code` is accepted after `&` by [`translate_alternate_codes`].
pub fn is_legacy_code(code: char) -> bool {
    LegacyColor::from_code(code).is_some()
        || FormatCode::from_code(code).is_some()
        || code.eq_ignore_ascii_case(&HEX_INTRODUCER)
}

/// Replace `alt` followed by a valid legacy code with [`SECTION`] and the
/// lowercased code. Any other occurrence of `alt` is kept.
///
/// # Examples
///
/// ```
/// use tint::codes::translate_alternate_codes;
///
/// assert_eq!(translate_alternate_codes('&', "&CHi & bye"), "§cHi & bye");
/// ```
pub fn translate_alternate_codes(alt: char, text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        match chars.peek() {
            Some(&code) if c == alt && is_legacy_code(code) => {
                out.push(SECTION);
                out.push(code.to_ascii_lowercase());
                chars.next();
            }
            _ => out.push(c),
        }
    }

    out
}
