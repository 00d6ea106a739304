use std::fmt::{self, Display, Formatter};

use derive_more::IsVariant;

/// Resets every style and colour.
pub const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, IsVariant)]
pub enum Style {
    Regular,
    Bold,
    Underline,
    /// Colours the background instead of the text.
    Background,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Purple,
        Color::Cyan,
        Color::White,
    ];

    /// The SGR foreground code, from 30 to 37.
    pub const fn code(self) -> u8 {
        30 + self as u8
    }
}

impl Style {
    pub const ALL: [Style; 4] = [Style::Regular, Style::Bold, Style::Underline, Style::Background];
}

/// Returns the escape sequence that starts text in the given style and colour.
pub fn escape(style: Style, color: Color) -> String {
    match style {
        Style::Regular => format!("\x1b[0;{}m", color.code()),
        Style::Bold => format!("\x1b[1;{}m", color.code()),
        Style::Underline => format!("\x1b[4;{}m", color.code()),
        Style::Background => format!("\x1b[{}m", color.code() + 10),
    }
}

/// Wraps `text` in the escape for `style` and `color`, followed by [`RESET`].
pub fn paint(style: Style, color: Color, text: &str) -> String {
    Painted::new(style, color, text).to_string()
}

/// A lazily painted piece of text, for use directly in format strings.
#[derive(Debug, Clone, Copy)]
pub struct Painted<'a> {
    pub style: Style,
    pub color: Color,
    pub text: &'a str,
}

impl<'a> Painted<'a> {
    pub const fn new(style: Style, color: Color, text: &'a str) -> Painted<'a> {
        Painted {
            style,
            color,
            text,
        }
    }
}

impl Display for Painted<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{RESET}", escape(self.style, self.color), self.text)
    }
}

macro_rules! painters {
    ($($color:ident => $regular:ident, $bold:ident, $underline:ident, $background:ident;)*) => {
        $(
            pub fn $regular(text: &str) -> String {
                paint(Style::Regular, Color::$color, text)
            }

            pub fn $bold(text: &str) -> String {
                paint(Style::Bold, Color::$color, text)
            }

            pub fn $underline(text: &str) -> String {
                paint(Style::Underline, Color::$color, text)
            }

            pub fn $background(text: &str) -> String {
                paint(Style::Background, Color::$color, text)
            }
        )*
    };
}

painters! {
    Black => black, black_bold, black_underline, black_bg;
    Red => red, red_bold, red_underline, red_bg;
    Green => green, green_bold, green_underline, green_bg;
    Yellow => yellow, yellow_bold, yellow_underline, yellow_bg;
    Blue => blue, blue_bold, blue_underline, blue_bg;
    Purple => purple, purple_bold, purple_underline, purple_bg;
    Cyan => cyan, cyan_bold, cyan_underline, cyan_bg;
    White => white, white_bold, white_underline, white_bg;
}
