//! Tag-based styled text markup.
//!
//! Re-exports the component model from `styled` and the parser from
//! `minimark`, with a shared error type and shortcuts for one-off parses.

pub mod error;

pub use error::{MarkupError, Result};
pub use minimark::{
    Directive, MiniMark, Modifier, ParseError, ParserConfig, Placeholder, PlaceholderKey, Placeholders, Tag,
    TagContext, TagError, TagHandler, TagRegistry, TagRegistryBuilder, escape_tags, serialize, strip_tags,
};
pub use styled::{
    ClickAction, ClickEvent, Color, Component, Content, Decorations, HoverEvent, NamedColor, Segment, Style,
};

/// Parse markup with the default (lenient) configuration.
pub fn parse(input: &str) -> Result<Component> {
    Ok(MiniMark::new().parse(input)?)
}

/// Parse markup with the default configuration, substituting `placeholders`.
pub fn parse_with(input: &str, placeholders: &Placeholders) -> Result<Component> {
    Ok(MiniMark::new().parse_with(input, placeholders)?)
}

/// Parse a color name or `#RRGGBB` literal.
pub fn color(input: &str) -> Result<Color> {
    Ok(Color::parse(input)?)
}

/// Build a [`Placeholders`] table.
///
/// Bare values are positional, `"name" => value` pairs are named.
///
/// ```
/// use minimark_rs::{Component, Placeholder, placeholders};
///
/// let table = placeholders![
///     Component::text("first"),
///     "player" => Component::text("Alex"),
///     "motd" => Placeholder::markup("<red>hi"),
/// ];
/// let tree = minimark_rs::parse_with("<arg:0> <player> <motd>", &table).unwrap();
/// assert_eq!(tree.plain_text(), "first Alex hi");
/// ```
#[macro_export]
macro_rules! placeholders {
    // === The Collector (Muncher) ===

    // 1. Named entry
    (@collect $acc:expr; $key:literal => $value:expr, $($rest:tt)*) => {
        $crate::placeholders!(@collect $acc.with($key, $value); $($rest)*)
    };
    (@collect $acc:expr; $key:literal => $value:expr) => {
        $acc.with($key, $value)
    };

    // 2. Positional entry
    (@collect $acc:expr; $value:expr, $($rest:tt)*) => {
        $crate::placeholders!(@collect $acc.push($value); $($rest)*)
    };
    (@collect $acc:expr; $value:expr) => {
        $acc.push($value)
    };

    // 3. Finalization
    (@collect $acc:expr;) => {
        $acc
    };

    // === Entry Point ===
    ($($entries:tt)*) => {
        $crate::placeholders!(@collect $crate::Placeholders::new(); $($entries)*)
    };
}
