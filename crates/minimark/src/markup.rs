//! The `MiniMark` entry point.

use styled::Component;

use crate::config::ParserConfig;
use crate::error::ParseError;
use crate::placeholder::Placeholders;

/// A configured markup parser and serializer.
///
/// Cheap to clone and safe to share between threads; every parse owns its
/// own state.
///
/// # Examples
///
/// ```
/// use minimark::MiniMark;
///
/// let mark = MiniMark::new();
/// let tree = mark.parse("<gold>Hello <bold>World</bold>").unwrap();
/// assert_eq!(tree.plain_text(), "Hello World");
/// assert_eq!(mark.strip_tags("<gold>Hello</gold>"), "Hello");
/// ```
#[derive(Clone, Debug, Default)]
pub struct MiniMark {
    config: ParserConfig,
}

impl MiniMark {
    /// A lenient parser with the standard tags.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: ParserConfig) -> Self {
        Self { config }
    }

    /// A parser with every strictness check enabled.
    pub fn strict() -> Self {
        Self::with_config(ParserConfig::strict())
    }

    pub fn config(&self) -> &ParserConfig {
        &self.config
    }

    /// Parse markup without placeholders.
    pub fn parse(&self, input: &str) -> Result<Component, ParseError> {
        self.parse_with(input, &Placeholders::new())
    }

    /// Parse markup, substituting `placeholders`.
    pub fn parse_with(&self, input: &str, placeholders: &Placeholders) -> Result<Component, ParseError> {
        crate::parser::parse(input, &self.config, placeholders)
    }

    /// Serialize a tree back to markup.
    pub fn serialize(&self, component: &Component) -> String {
        crate::serializer::serialize(component)
    }

    /// Escape every tag so the input renders literally.
    pub fn escape_tags(&self, input: &str) -> String {
        crate::serializer::escape_tags(input)
    }

    /// Remove every tag this parser would interpret.
    pub fn strip_tags(&self, input: &str) -> String {
        crate::serializer::strip_tags(input, &self.config.registry)
    }
}
