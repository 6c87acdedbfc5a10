//! Tag registry: maps tag names to the handlers that resolve them.

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use styled::{Component, Style};

use crate::config::ParserConfig;
use crate::error::{ParseError, TagError};
use crate::parser::{ArgumentQueue, Session};
use crate::placeholder::Placeholders;

/// What a resolved tag does to the tree.
pub enum Tag {
    /// Open a style frame; the delta applies until the tag closes.
    Style(Style),
    /// Insert nodes at the current position. Never opens a frame.
    Insert(Vec<Component>),
    /// Open a frame whose finished subtree is rewritten on close.
    Modify(Box<dyn Modifier>),
    /// Parser-level behaviour.
    Directive(Directive),
}

impl Tag {
    /// Insert a single node.
    pub fn insert(component: Component) -> Self {
        Tag::Insert(vec![component])
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tag::Style(style) => f.debug_tuple("Style").field(style).finish(),
            Tag::Insert(nodes) => f.debug_tuple("Insert").field(nodes).finish(),
            Tag::Modify(_) => f.write_str("Modify(..)"),
            Tag::Directive(directive) => f.debug_tuple("Directive").field(directive).finish(),
        }
    }
}

/// Tags the parser handles itself.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Directive {
    /// Close every open tag.
    Reset,
    /// Read the body as literal text up to the matching close tag.
    Pre,
}

/// Rewrites the subtree of a closed tag (gradients and the like).
pub trait Modifier {
    fn apply(&mut self, scope: Component) -> Component;
}

/// Resolves a tag name and its arguments.
pub trait TagHandler: Send + Sync {
    /// `name` is the lowercased name the tag was written with.
    fn resolve(&self, name: &str, args: &mut ArgumentQueue<'_>, ctx: &TagContext<'_>) -> Result<Tag, TagError>;
}

struct FnHandler<F>(F);

impl<F> TagHandler for FnHandler<F>
where
    F: Fn(&str, &mut ArgumentQueue<'_>, &TagContext<'_>) -> Result<Tag, TagError> + Send + Sync,
{
    fn resolve(&self, name: &str, args: &mut ArgumentQueue<'_>, ctx: &TagContext<'_>) -> Result<Tag, TagError> {
        (self.0)(name, args, ctx)
    }
}

/// What a handler can see of the parse in progress.
pub struct TagContext<'a> {
    session: Session<'a>,
    current_style: &'a Style,
    offset: usize,
}

impl<'a> TagContext<'a> {
    pub(crate) fn new(session: Session<'a>, current_style: &'a Style, offset: usize) -> Self {
        Self {
            session,
            current_style,
            offset,
        }
    }

    /// The fully resolved style at the tag's position.
    pub fn current_style(&self) -> &Style {
        self.current_style
    }

    /// Byte offset of the tag in the input being parsed.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Nesting depth; zero for the top-level parse.
    pub fn depth(&self) -> usize {
        self.session.depth
    }

    pub fn config(&self) -> &ParserConfig {
        self.session.config
    }

    pub fn placeholders(&self) -> &Placeholders {
        self.session.placeholders
    }

    /// Parse markup found inside an argument with the same configuration and
    /// placeholders, one level deeper.
    pub fn parse_nested(&self, markup: &str) -> Result<Component, ParseError> {
        self.session.nested(markup)
    }
}

/// A set of named tag handlers.
///
/// Names are matched case-insensitively. Pattern handlers are consulted, in
/// registration order, when no exact name matches.
///
/// # Examples
///
/// ```
/// use minimark::{Tag, TagRegistry};
/// use styled::Component;
///
/// let registry = TagRegistry::standard_builder()
///     .register_fn(["heart"], |_, _, _| Ok(Tag::insert(Component::text("<3"))))
///     .build();
/// assert!(registry.has("heart"));
/// assert!(registry.has("BOLD"));
/// ```
#[derive(Clone, Default)]
pub struct TagRegistry {
    tags: HashMap<String, Arc<dyn TagHandler>>,
    directives: HashMap<String, Directive>,
    patterns: Vec<(fn(&str) -> bool, Arc<dyn TagHandler>)>,
}

/// A resolved registry entry.
pub enum Entry<'a> {
    Handler(&'a dyn TagHandler),
    Directive(Directive),
}

impl TagRegistry {
    /// An empty registry.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn builder() -> TagRegistryBuilder {
        TagRegistryBuilder::default()
    }

    /// The shared registry with every built-in tag.
    pub fn standard() -> Arc<TagRegistry> {
        crate::tags::standard()
    }

    /// A builder pre-populated with every built-in tag.
    pub fn standard_builder() -> TagRegistryBuilder {
        crate::tags::standard_builder()
    }

    /// A builder pre-populated with this registry's entries.
    pub fn to_builder(&self) -> TagRegistryBuilder {
        TagRegistryBuilder {
            registry: self.clone(),
        }
    }

    /// Look up a tag name.
    pub fn resolve(&self, name: &str) -> Option<Entry<'_>> {
        let name = name.to_lowercase();
        if let Some(directive) = self.directives.get(&name) {
            return Some(Entry::Directive(*directive));
        }
        if let Some(handler) = self.tags.get(&name) {
            return Some(Entry::Handler(handler.as_ref()));
        }
        self.patterns
            .iter()
            .find(|(matches, _)| matches(name.as_str()))
            .map(|(_, handler)| Entry::Handler(handler.as_ref()))
    }

    pub fn has(&self, name: &str) -> bool {
        self.resolve(name).is_some()
    }

    /// Registered exact names, in no particular order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.tags.keys().chain(self.directives.keys()).map(String::as_str)
    }
}

impl fmt::Debug for TagRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut names: Vec<_> = self.names().collect();
        names.sort_unstable();
        f.debug_struct("TagRegistry")
            .field("names", &names)
            .field("patterns", &self.patterns.len())
            .finish()
    }
}

/// Builder for [`TagRegistry`].
#[derive(Default)]
pub struct TagRegistryBuilder {
    registry: TagRegistry,
}

impl TagRegistryBuilder {
    /// Register a handler under one or more names, replacing earlier entries.
    pub fn register<I, S>(mut self, names: I, handler: impl TagHandler + 'static) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let handler: Arc<dyn TagHandler> = Arc::new(handler);
        for name in names {
            let name = name.as_ref().to_lowercase();
            self.registry.directives.remove(&name);
            self.registry.tags.insert(name, Arc::clone(&handler));
        }
        self
    }

    /// Register a closure as a handler.
    pub fn register_fn<I, S, F>(self, names: I, handler: F) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: Fn(&str, &mut ArgumentQueue<'_>, &TagContext<'_>) -> Result<Tag, TagError> + Send + Sync + 'static,
    {
        self.register(names, FnHandler(handler))
    }

    /// Register a handler for every name accepted by `matches`.
    ///
    /// `matches` receives the lowercased name.
    pub fn pattern(mut self, matches: fn(&str) -> bool, handler: impl TagHandler + 'static) -> Self {
        let handler: Arc<dyn TagHandler> = Arc::new(handler);
        self.registry.patterns.push((matches, handler));
        self
    }

    pub fn directive<I, S>(mut self, names: I, directive: Directive) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            let name = name.as_ref().to_lowercase();
            self.registry.tags.remove(&name);
            self.registry.directives.insert(name, directive);
        }
        self
    }

    /// Remove a name.
    pub fn remove(mut self, name: &str) -> Self {
        let name = name.to_lowercase();
        self.registry.tags.remove(&name);
        self.registry.directives.remove(&name);
        self
    }

    pub fn build(self) -> TagRegistry {
        self.registry
    }
}
