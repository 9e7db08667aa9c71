//! Tag content parser for structured markup.
//!
//! Parses the content inside `<...>`. Arguments are separated by `:`.

use tint::{Color, FormatCode, Formats, LegacyColor};

use crate::error::TagParseError;

/// The meaning of an opening tag.
#[derive(Clone, Debug, PartialEq)]
pub enum Tag {
    /// `<color:red>`, `<color:#ff0000>`, `<red>`, `<#ff0000>`
    Color(Color),
    /// `<gradient:#a:#b>`; two or more stops.
    Gradient(Vec<Color>),
    /// `<bold>`, `<italic>`, ...
    Decoration(Formats),
    /// `<reset>` closes every open tag.
    Reset,
}

impl Tag {
    /// Parse opening tag content.
    ///
    /// # Examples
    ///
    /// ```
    /// use minimark::parser::Tag;
    /// use tint::Color;
    ///
    /// assert_eq!(Tag::parse("color:red").unwrap(), Tag::Color(Color::new(255, 85, 85)));
    /// assert!(matches!(Tag::parse("gradient:#000000:#ffffff").unwrap(), Tag::Gradient(_)));
    /// assert!(Tag::parse("sparkle").is_err());
    /// ```
    pub fn parse(content: &str) -> Result<Self, TagParseError> {
        let content = content.trim();
        if content.is_empty() {
            return Err(TagParseError::Empty);
        }

        let mut parts = content.split(':');
        let name = parts.next().unwrap_or_default().to_ascii_lowercase();
        let args: Vec<&str> = parts.collect();

        match name.as_str() {
            "color" | "colour" | "c" => match args.as_slice() {
                [color] => Ok(Tag::Color(parse_color(color)?)),
                _ => Err(TagParseError::MissingArgument(name)),
            },
            "gradient" => {
                let stops = args
                    .iter()
                    .map(|arg| parse_color(arg))
                    .collect::<Result<Vec<_>, _>>()?;
                match stops.len() {
                    0 => Err(TagParseError::MissingArgument(name)),
                    1 => Ok(Tag::Color(stops[0])),
                    _ => Ok(Tag::Gradient(stops)),
                }
            }
            "reset" => Ok(Tag::Reset),
            _ if args.is_empty() => {
                if let Some(flag) = decoration(&name) {
                    Ok(Tag::Decoration(flag))
                } else {
                    parse_color(&name)
                        .map(Tag::Color)
                        .map_err(|_| TagParseError::UnknownTag(content.to_string()))
                }
            }
            _ => Err(TagParseError::UnknownTag(content.to_string())),
        }
    }

    /// The name a closing tag must use to close this tag.
    pub fn close_name(&self) -> &'static str {
        match self {
            Tag::Color(_) => "color",
            Tag::Gradient(_) => "gradient",
            Tag::Decoration(flags) => flags
                .codes()
                .next()
                .map(FormatCode::tag_name)
                .unwrap_or("decoration"),
            Tag::Reset => "reset",
        }
    }
}

/// Normalize a closing tag name to the name its opening tag reports.
///
/// `</c>`, `</colour>`, `</#ff0000>`, `</red>` all close a color; `</b>`
/// closes bold.
pub fn canonical_close_name(name: &str) -> String {
    let name = name
        .split(':')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    let is_color = matches!(name.as_str(), "color" | "colour" | "c")
        || (decoration(&name).is_none() && parse_color(&name).is_ok());
    if is_color {
        return "color".to_string();
    }

    decoration(&name)
        .and_then(|flag| flag.codes().next())
        .map(|code| code.tag_name().to_string())
        .unwrap_or(name)
}

fn decoration(name: &str) -> Option<Formats> {
    let code = match name {
        "bold" | "b" => FormatCode::Bold,
        "italic" | "i" | "em" => FormatCode::Italic,
        "underlined" | "u" => FormatCode::Underlined,
        "strikethrough" | "st" => FormatCode::Strikethrough,
        "obfuscated" | "obf" => FormatCode::Obfuscated,
        _ => return None,
    };
    code.flag()
}

fn parse_color(arg: &str) -> Result<Color, TagParseError> {
    let arg = arg.trim();
    match arg.strip_prefix('#') {
        Some(hex) => Ok(Color::from_hex(hex)?),
        None => LegacyColor::from_name(arg)
            .map(LegacyColor::rgb)
            .ok_or_else(|| TagParseError::InvalidColor(arg.to_string())),
    }
}
