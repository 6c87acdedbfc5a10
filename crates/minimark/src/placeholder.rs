//! Placeholder values substituted into markup at parse time.
//!
//! Positional values are referenced as `<arg:0>`; named values as
//! `<arg:name>` or directly as `<name>`, in which case they shadow any
//! registered tag of the same name.

use std::collections::HashMap;
use std::fmt;

use styled::{Component, Style};

use crate::error::{ParseError, TagError};
use crate::parser::ArgumentQueue;
use crate::registry::{Tag, TagContext, TagHandler};

/// A value to substitute.
#[derive(Clone, Debug, PartialEq)]
pub enum Placeholder {
    /// Inserted as-is.
    Component(Component),
    /// Inserted as literal text; never parsed.
    Text(String),
    /// Parsed as markup with the same configuration and placeholders.
    Markup(String),
    /// Opens a style frame, closed by `</name>` like any other tag.
    Style(Style),
}

impl Placeholder {
    pub fn component(component: Component) -> Self {
        Placeholder::Component(component)
    }

    pub fn text(text: impl Into<String>) -> Self {
        Placeholder::Text(text.into())
    }

    pub fn markup(markup: impl Into<String>) -> Self {
        Placeholder::Markup(markup.into())
    }

    pub fn style(style: Style) -> Self {
        Placeholder::Style(style)
    }

    pub(crate) fn to_tag(&self, ctx: &TagContext<'_>) -> Result<Tag, TagError> {
        match self {
            Placeholder::Component(component) => Ok(Tag::insert(component.clone())),
            Placeholder::Text(text) => Ok(Tag::insert(Component::text(text.clone()))),
            Placeholder::Markup(markup) => Ok(Tag::insert(ctx.parse_nested(markup)?)),
            Placeholder::Style(style) => Ok(Tag::Style(style.clone())),
        }
    }
}

impl From<Component> for Placeholder {
    fn from(component: Component) -> Self {
        Placeholder::Component(component)
    }
}

impl From<Style> for Placeholder {
    fn from(style: Style) -> Self {
        Placeholder::Style(style)
    }
}

/// How a placeholder is referenced.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum PlaceholderKey {
    Index(usize),
    Name(String),
}

impl PlaceholderKey {
    /// All-digit references are positional; anything else is a name.
    pub fn parse(reference: &str) -> Self {
        if !reference.is_empty() && reference.bytes().all(|b| b.is_ascii_digit()) {
            if let Ok(index) = reference.parse() {
                return PlaceholderKey::Index(index);
            }
        }
        PlaceholderKey::Name(reference.to_lowercase())
    }
}

impl fmt::Display for PlaceholderKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceholderKey::Index(index) => write!(f, "#{index}"),
            PlaceholderKey::Name(name) => write!(f, "'{name}'"),
        }
    }
}

/// Positional and named placeholder values for one parse.
///
/// Names are case-insensitive.
///
/// # Examples
///
/// ```
/// use minimark::{MiniMark, Placeholder, Placeholders};
/// use styled::Component;
///
/// let placeholders = Placeholders::new()
///     .push(Component::text("Steve"))
///     .with("server", Placeholder::markup("<green>Lobby</green>"));
///
/// let parsed = MiniMark::new()
///     .parse_with("<arg:0> joined <server>", &placeholders)
///     .unwrap();
/// assert_eq!(parsed.plain_text(), "Steve joined Lobby");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Placeholders {
    positional: Vec<Placeholder>,
    named: HashMap<String, Placeholder>,
}

impl Placeholders {
    pub fn new() -> Self {
        Self::default()
    }

    /// Positional values only.
    pub fn positional<I, P>(values: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<Placeholder>,
    {
        Self {
            positional: values.into_iter().map(Into::into).collect(),
            named: HashMap::new(),
        }
    }

    /// Append a positional value.
    pub fn push(mut self, value: impl Into<Placeholder>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Add a named value.
    pub fn with(mut self, name: impl AsRef<str>, value: impl Into<Placeholder>) -> Self {
        self.insert(name, value);
        self
    }

    pub fn insert(&mut self, name: impl AsRef<str>, value: impl Into<Placeholder>) -> Option<Placeholder> {
        self.named.insert(name.as_ref().to_lowercase(), value.into())
    }

    pub fn get(&self, key: &PlaceholderKey) -> Option<&Placeholder> {
        match key {
            PlaceholderKey::Index(index) => self.positional.get(*index),
            PlaceholderKey::Name(name) => self.named(name),
        }
    }

    pub fn named(&self, name: &str) -> Option<&Placeholder> {
        self.named.get(&name.to_lowercase())
    }

    pub fn positional_len(&self) -> usize {
        self.positional.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positional.is_empty() && self.named.is_empty()
    }
}

/// The `<arg:…>` tag.
pub(crate) struct ArgumentTag;

impl TagHandler for ArgumentTag {
    fn resolve(&self, _name: &str, args: &mut ArgumentQueue<'_>, ctx: &TagContext<'_>) -> Result<Tag, TagError> {
        let reference = args.pop_or("expected a placeholder index or name")?;
        args.finish()?;
        let key = PlaceholderKey::parse(reference.value());

        if let Some(placeholder) = ctx.placeholders().get(&key) {
            return placeholder.to_tag(ctx);
        }
        match key {
            PlaceholderKey::Name(name) if !ctx.config().strict_placeholders => {
                log::debug!("placeholder '{name}' is not set, substituting an empty node");
                Ok(Tag::insert(Component::empty()))
            }
            key => Err(ParseError::UnresolvedPlaceholder { key }.into()),
        }
    }
}
