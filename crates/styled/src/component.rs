//! The component tree.
//!
//! A [`Component`] is an immutable node with content, a style and ordered
//! children. Children inherit every style attribute they do not set
//! themselves. All builder methods consume `self` and return a new value.

use crate::style::Style;

/// The content carried by a single component.
#[derive(Clone, Debug, PartialEq)]
pub enum Content {
    /// Literal text.
    Text(String),
    /// A key binding, rendered client-side as the bound key.
    Keybind(String),
    /// A translation key with substitution arguments.
    Translatable { key: String, args: Vec<Component> },
}

impl Default for Content {
    fn default() -> Self {
        Content::Text(String::new())
    }
}

/// A node in a styled text tree.
///
/// # Examples
///
/// ```
/// use styled::{Component, Decorations, Style};
///
/// let message = Component::empty()
///     .with_style(Style::decorated(Decorations::BOLD, true))
///     .append(Component::text("Hello"));
/// assert_eq!(message.plain_text(), "Hello");
/// assert_eq!(message.children().len(), 1);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Component {
    content: Content,
    style: Style,
    children: Vec<Component>,
}

impl Component {
    /// A text component.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            content: Content::Text(text.into()),
            ..Self::default()
        }
    }

    /// An empty text component, typically used as a styled wrapper.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A keybind component.
    pub fn keybind(key: impl Into<String>) -> Self {
        Self {
            content: Content::Keybind(key.into()),
            ..Self::default()
        }
    }

    /// A translatable component.
    pub fn translatable(key: impl Into<String>, args: Vec<Component>) -> Self {
        Self {
            content: Content::Translatable {
                key: key.into(),
                args,
            },
            ..Self::default()
        }
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    /// The style set on this node (not including inherited attributes).
    pub fn style(&self) -> &Style {
        &self.style
    }

    pub fn children(&self) -> &[Component] {
        &self.children
    }

    /// The text content, if this is a text component.
    pub fn as_text(&self) -> Option<&str> {
        match &self.content {
            Content::Text(text) => Some(text),
            _ => None,
        }
    }

    /// Returns true for a text component with empty content.
    pub fn is_empty_text(&self) -> bool {
        self.as_text().is_some_and(str::is_empty)
    }

    /// Replace this node's style.
    pub fn with_style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Apply a style delta on top of this node's style.
    pub fn merge_style(mut self, delta: &Style) -> Self {
        self.style = self.style.apply(delta);
        self
    }

    /// Append a child.
    pub fn append(mut self, child: Component) -> Self {
        self.children.push(child);
        self
    }

    /// Replace all children.
    pub fn with_children(mut self, children: Vec<Component>) -> Self {
        self.children = children;
        self
    }

    /// Split into content, style and children.
    pub fn into_parts(self) -> (Content, Style, Vec<Component>) {
        (self.content, self.style, self.children)
    }

    /// Build from content, style and children.
    pub fn from_parts(content: Content, style: Style, children: Vec<Component>) -> Self {
        Self {
            content,
            style,
            children,
        }
    }

    /// Collapse redundant structure without changing the rendered result.
    ///
    /// - unstyled empty text leaves are dropped
    /// - adjacent unstyled-equal text leaves are concatenated
    /// - an empty text node with a single child is replaced by that child,
    ///   with the wrapper's style merged underneath the child's own
    pub fn compact(self) -> Self {
        let Component {
            content,
            style,
            children,
        } = self;

        let mut compacted: Vec<Component> = Vec::with_capacity(children.len());
        for child in children.into_iter().map(Component::compact) {
            if child.is_empty_text() && child.style.is_empty() && child.children.is_empty() {
                continue;
            }
            if let Some(last) = compacted.last_mut() {
                if last.children.is_empty() && child.children.is_empty() && last.style == child.style {
                    if let (Content::Text(prev), Content::Text(next)) = (&mut last.content, &child.content) {
                        prev.push_str(next);
                        continue;
                    }
                }
            }
            compacted.push(child);
        }

        let node = Component {
            content,
            style,
            children: compacted,
        };

        if node.is_empty_text() && node.children.len() == 1 {
            let Component {
                style, mut children, ..
            } = node;
            if let Some(only) = children.pop() {
                let merged = style.apply(&only.style);
                return only.with_style(merged);
            }
            return Component::empty().with_style(style);
        }

        node
    }
}

impl From<&str> for Component {
    fn from(text: &str) -> Self {
        Component::text(text)
    }
}

impl From<String> for Component {
    fn from(text: String) -> Self {
        Component::text(text)
    }
}
