//! Per-character color application that keeps inline format codes alive.
//!
//! The legacy renderer forgets decorations whenever a color changes, so a
//! gradient has to re-assert every active format code after each of its
//! per-character colors. The composer walks the text one grapheme at a time:
//!
//! - a visible grapheme gets `[color][active escapes][grapheme]` and consumes
//!   one color;
//! - an escape marker swallows the grapheme after it: a reset clears the
//!   active escapes, anything else is appended to them verbatim. Neither
//!   consumes a color;
//! - a marker with nothing after it is an ordinary visible grapheme.

use unicode_segmentation::UnicodeSegmentation;

use crate::codes::{is_marker, FormatCode};
use crate::color::Color;
use crate::emit::{emit, emit_format, OutputMode};

/// An escape marker and the grapheme following it, kept verbatim.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Escape<'a> {
    pub marker: char,
    pub code: &'a str,
}

impl Escape<'_> {
    /// The directive this escape names, if its code is a single known character.
    pub fn format_code(&self) -> Option<FormatCode> {
        let mut chars = self.code.chars();
        match (chars.next(), chars.next()) {
            (Some(code), None) => FormatCode::from_code(code),
            _ => None,
        }
    }

    pub fn is_reset(&self) -> bool {
        self.format_code() == Some(FormatCode::Reset)
    }

    fn render_into(&self, mode: OutputMode, out: &mut String) {
        match (mode, self.format_code()) {
            (OutputMode::Structured, Some(code)) => out.push_str(&emit_format(code, mode)),
            _ => {
                out.push(self.marker);
                out.push_str(self.code);
            }
        }
    }
}

/// One visible grapheme with everything drawn in front of it.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell<'a> {
    /// `None` only when no colors were supplied at all.
    pub color: Option<Color>,
    pub formats: Vec<Escape<'a>>,
    pub grapheme: &'a str,
}

/// The resolved per-grapheme rendering plan for a text span.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ColorRun<'a> {
    cells: Vec<Cell<'a>>,
}

#[derive(Clone, Copy)]
enum State<'a> {
    Normal,
    /// Holds the marker grapheme in case the text ends right after it.
    SawEscape(char, &'a str),
}

impl<'a> ColorRun<'a> {
    /// Resolve `content` against `colors`, one color per visible grapheme.
    ///
    /// If `colors` runs out early the last color is reused.
    pub fn plan(content: &'a str, colors: &[Color]) -> Self {
        let mut builder = RunBuilder {
            colors,
            cursor: 0,
            active: Vec::new(),
            cells: Vec::new(),
        };
        let mut state = State::Normal;

        for grapheme in content.graphemes(true) {
            state = match state {
                State::Normal => match single_char(grapheme).filter(|&c| is_marker(c)) {
                    Some(marker) => State::SawEscape(marker, grapheme),
                    None => {
                        builder.visible(grapheme);
                        State::Normal
                    }
                },
                State::SawEscape(marker, _) => {
                    builder.escape(Escape {
                        marker,
                        code: grapheme,
                    });
                    State::Normal
                }
            };
        }

        if let State::SawEscape(_, marker) = state {
            builder.visible(marker);
        }

        Self {
            cells: builder.cells,
        }
    }

    pub fn cells(&self) -> &[Cell<'a>] {
        &self.cells
    }

    /// Number of visible graphemes.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Emit the plan as text for `mode`.
    pub fn render(&self, mode: OutputMode) -> String {
        let mut out = String::new();
        for cell in &self.cells {
            if let Some(color) = cell.color {
                out.push_str(&emit(color, mode));
            }
            for escape in &cell.formats {
                escape.render_into(mode, &mut out);
            }
            out.push_str(cell.grapheme);
        }
        out
    }
}

struct RunBuilder<'a, 'c> {
    colors: &'c [Color],
    cursor: usize,
    active: Vec<Escape<'a>>,
    cells: Vec<Cell<'a>>,
}

impl<'a> RunBuilder<'a, '_> {
    fn visible(&mut self, grapheme: &'a str) {
        let color = self
            .colors
            .get(self.cursor)
            .or_else(|| self.colors.last())
            .copied();
        self.cursor += 1;
        self.cells.push(Cell {
            color,
            formats: self.active.clone(),
            grapheme,
        });
    }

    fn escape(&mut self, escape: Escape<'a>) {
        if escape.is_reset() {
            self.active.clear();
        } else {
            self.active.push(escape);
        }
    }
}

fn single_char(grapheme: &str) -> Option<char> {
    let mut chars = grapheme.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Some(c),
        _ => None,
    }
}

/// Count the graphemes of `content` that would receive a color.
pub fn visible_count(content: &str) -> usize {
    ColorRun::plan(content, &[]).len()
}

/// Color each visible grapheme of `content` in legacy form, carrying active
/// format escapes past every color change.
///
/// # Examples
///
/// ```
/// use tint::{Color, compose::apply};
///
/// let out = apply("&lab", &[Color::new(255, 0, 0), Color::new(0, 0, 255)]);
/// assert_eq!(out, "§x§f§f§0§0§0§0&la§x§0§0§0§0§f§f&lb");
/// ```
pub fn apply(content: &str, colors: &[Color]) -> String {
    ColorRun::plan(content, colors).render(OutputMode::Legacy)
}
