//! Parser configuration.

use std::sync::Arc;

use styled::Style;

use crate::registry::TagRegistry;

/// Nested parse limit used by [`ParserConfig::default`].
pub const DEFAULT_MAX_RECURSION_DEPTH: usize = 16;

/// Open tag limit used by [`ParserConfig::default`].
pub const DEFAULT_MAX_NESTING_DEPTH: usize = 256;

/// Controls how the parser treats malformed or unknown input.
///
/// The default is lenient: problems degrade to literal text and open tags
/// are closed at the end of input. Missing named placeholders are errors by
/// default.
#[derive(Clone, Debug)]
pub struct ParserConfig {
    /// Unknown tags and rejected tag arguments are errors.
    pub strict_tags: bool,
    /// Mismatched close tags, unclosed tags and `<reset>` are errors.
    pub strict_closing: bool,
    /// Unterminated tags and quotes are errors.
    pub strict_syntax: bool,
    /// Unknown named placeholders are errors instead of empty nodes.
    pub strict_placeholders: bool,
    pub max_recursion_depth: usize,
    /// Open tags allowed at once, counting tags open around nested parses.
    /// Deeper tags are errors with `strict_tags`, otherwise kept as text.
    pub max_nesting_depth: usize,
    /// Style of the root node.
    pub base_style: Style,
    pub registry: Arc<TagRegistry>,
}

impl Default for ParserConfig {
    fn default() -> Self {
        Self {
            strict_tags: false,
            strict_closing: false,
            strict_syntax: false,
            strict_placeholders: true,
            max_recursion_depth: DEFAULT_MAX_RECURSION_DEPTH,
            max_nesting_depth: DEFAULT_MAX_NESTING_DEPTH,
            base_style: Style::default(),
            registry: TagRegistry::standard(),
        }
    }
}

impl ParserConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every check enabled.
    pub fn strict() -> Self {
        Self {
            strict_tags: true,
            strict_closing: true,
            strict_syntax: true,
            strict_placeholders: true,
            ..Self::default()
        }
    }

    pub fn with_strict_tags(mut self, strict: bool) -> Self {
        self.strict_tags = strict;
        self
    }

    pub fn with_strict_closing(mut self, strict: bool) -> Self {
        self.strict_closing = strict;
        self
    }

    pub fn with_strict_syntax(mut self, strict: bool) -> Self {
        self.strict_syntax = strict;
        self
    }

    pub fn with_strict_placeholders(mut self, strict: bool) -> Self {
        self.strict_placeholders = strict;
        self
    }

    pub fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    pub fn with_max_nesting_depth(mut self, depth: usize) -> Self {
        self.max_nesting_depth = depth;
        self
    }

    pub fn with_base_style(mut self, style: Style) -> Self {
        self.base_style = style;
        self
    }

    pub fn with_registry(mut self, registry: impl Into<Arc<TagRegistry>>) -> Self {
        self.registry = registry.into();
        self
    }
}
