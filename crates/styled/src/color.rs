//! Color types for styled text.
//!
//! Supports the sixteen named chat colors and arbitrary `#RRGGBB` colors.

use nom::{
    IResult,
    bytes::complete::take_while_m_n,
    character::complete::char,
    combinator::{all_consuming, map_res},
    sequence::{preceded, tuple},
};
use phf::phf_map;

use crate::error::ColorParseError;

/// One of the sixteen named chat colors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NamedColor {
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

/// Lookup table from color name (and alias) to named color.
static NAMED_COLORS: phf::Map<&'static str, NamedColor> = phf_map! {
    "black" => NamedColor::Black,
    "dark_blue" => NamedColor::DarkBlue,
    "dark_green" => NamedColor::DarkGreen,
    "dark_aqua" => NamedColor::DarkAqua,
    "dark_red" => NamedColor::DarkRed,
    "dark_purple" => NamedColor::DarkPurple,
    "gold" => NamedColor::Gold,
    "gray" => NamedColor::Gray,
    "grey" => NamedColor::Gray,
    "dark_gray" => NamedColor::DarkGray,
    "dark_grey" => NamedColor::DarkGray,
    "blue" => NamedColor::Blue,
    "green" => NamedColor::Green,
    "aqua" => NamedColor::Aqua,
    "red" => NamedColor::Red,
    "light_purple" => NamedColor::LightPurple,
    "yellow" => NamedColor::Yellow,
    "white" => NamedColor::White,
};

impl NamedColor {
    /// All named colors, in palette order.
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::DarkBlue,
        NamedColor::DarkGreen,
        NamedColor::DarkAqua,
        NamedColor::DarkRed,
        NamedColor::DarkPurple,
        NamedColor::Gold,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::Blue,
        NamedColor::Green,
        NamedColor::Aqua,
        NamedColor::Red,
        NamedColor::LightPurple,
        NamedColor::Yellow,
        NamedColor::White,
    ];

    /// Look up a named color, accepting the `grey` spellings as aliases.
    ///
    /// Matching is case-insensitive.
    pub fn from_name(name: &str) -> Option<Self> {
        NAMED_COLORS.get(name.to_ascii_lowercase().as_str()).copied()
    }

    /// Returns true if `name` is a color name or alias.
    pub fn is_name(name: &str) -> bool {
        Self::from_name(name).is_some()
    }

    /// The canonical name of this color.
    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkAqua => "dark_aqua",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkPurple => "dark_purple",
            NamedColor::Gold => "gold",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::Blue => "blue",
            NamedColor::Green => "green",
            NamedColor::Aqua => "aqua",
            NamedColor::Red => "red",
            NamedColor::LightPurple => "light_purple",
            NamedColor::Yellow => "yellow",
            NamedColor::White => "white",
        }
    }

    /// RGB components of this color.
    pub fn to_rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0x00, 0x00, 0x00),
            NamedColor::DarkBlue => (0x00, 0x00, 0xaa),
            NamedColor::DarkGreen => (0x00, 0xaa, 0x00),
            NamedColor::DarkAqua => (0x00, 0xaa, 0xaa),
            NamedColor::DarkRed => (0xaa, 0x00, 0x00),
            NamedColor::DarkPurple => (0xaa, 0x00, 0xaa),
            NamedColor::Gold => (0xff, 0xaa, 0x00),
            NamedColor::Gray => (0xaa, 0xaa, 0xaa),
            NamedColor::DarkGray => (0x55, 0x55, 0x55),
            NamedColor::Blue => (0x55, 0x55, 0xff),
            NamedColor::Green => (0x55, 0xff, 0x55),
            NamedColor::Aqua => (0x55, 0xff, 0xff),
            NamedColor::Red => (0xff, 0x55, 0x55),
            NamedColor::LightPurple => (0xff, 0x55, 0xff),
            NamedColor::Yellow => (0xff, 0xff, 0x55),
            NamedColor::White => (0xff, 0xff, 0xff),
        }
    }
}

/// A text color: either a palette color or an arbitrary RGB value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    /// Named palette color (e.g., `red`, `dark_aqua`).
    Named(NamedColor),
    /// RGB color components.
    Rgb(u8, u8, u8),
}

impl Color {
    /// Parse a color from a string.
    ///
    /// Supports:
    /// - Named colors: `red`, `dark_blue`, `grey`, etc.
    /// - Hex colors: `#RRGGBB`
    ///
    /// # Examples
    ///
    /// ```
    /// use styled::{Color, NamedColor};
    ///
    /// assert_eq!(Color::parse("red").unwrap(), Color::Named(NamedColor::Red));
    /// assert_eq!(Color::parse("#ff5733").unwrap(), Color::Rgb(255, 87, 51));
    /// ```
    pub fn parse(input: &str) -> Result<Self, ColorParseError> {
        let input = input.trim();

        if input.starts_with('#') {
            return Self::parse_hex(input);
        }

        NamedColor::from_name(input)
            .map(Color::Named)
            .ok_or_else(|| ColorParseError::UnknownName(input.to_string()))
    }

    /// Parse a `#RRGGBB` literal.
    pub fn parse_hex(input: &str) -> Result<Self, ColorParseError> {
        all_consuming(hex_color)(input)
            .map(|(_, (r, g, b))| Color::Rgb(r, g, b))
            .map_err(|_| ColorParseError::InvalidHex(input.to_string()))
    }

    /// Returns true if `input` is a well-formed `#RRGGBB` literal.
    pub fn is_hex(input: &str) -> bool {
        Self::parse_hex(input).is_ok()
    }

    /// Convert the color to RGB components.
    pub fn to_rgb(&self) -> (u8, u8, u8) {
        match self {
            Color::Named(named) => named.to_rgb(),
            Color::Rgb(r, g, b) => (*r, *g, *b),
        }
    }

    /// The `#rrggbb` form of this color.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.to_rgb();
        format!("#{:02x}{:02x}{:02x}", r, g, b)
    }

    /// Linear interpolation between two colors.
    ///
    /// `t` is clamped to `[0, 1]`; the result is always an RGB color.
    pub fn lerp(t: f32, a: Color, b: Color) -> Color {
        let t = t.clamp(0.0, 1.0);
        let (ar, ag, ab) = a.to_rgb();
        let (br, bg, bb) = b.to_rgb();
        let channel = |x: u8, y: u8| -> u8 {
            let x = f32::from(x);
            let y = f32::from(y);
            (x + (y - x) * t).round().clamp(0.0, 255.0) as u8
        };
        Color::Rgb(channel(ar, br), channel(ag, bg), channel(ab, bb))
    }
}

impl From<NamedColor> for Color {
    fn from(named: NamedColor) -> Self {
        Color::Named(named)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Color::Named(named) => f.write_str(named.name()),
            Color::Rgb(..) => f.write_str(&self.to_hex()),
        }
    }
}

fn hex_pair(input: &str) -> IResult<&str, u8> {
    map_res(
        take_while_m_n(2, 2, |c: char| c.is_ascii_hexdigit()),
        |digits: &str| u8::from_str_radix(digits, 16),
    )(input)
}

fn hex_color(input: &str) -> IResult<&str, (u8, u8, u8)> {
    preceded(char('#'), tuple((hex_pair, hex_pair, hex_pair)))(input)
}
