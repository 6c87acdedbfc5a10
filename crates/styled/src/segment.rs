//! Flattening a component tree into styled text runs.
//!
//! Segments are what a renderer consumes: each one is a run of text with its
//! fully resolved style (every inherited attribute already merged in).

use crate::component::{Component, Content};
use crate::style::Style;

/// A run of text with its resolved style.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub text: String,
    pub style: Style,
}

impl Segment {
    pub fn new(text: impl Into<String>, style: Style) -> Self {
        Self {
            text: text.into(),
            style,
        }
    }

    /// Returns the length of this segment in bytes.
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl Component {
    /// Flatten the tree into segments, in reading order.
    ///
    /// Empty runs are skipped and adjacent runs with equal resolved styles
    /// are joined, so two trees that render identically produce the same
    /// segments.
    pub fn segments(&self) -> Vec<Segment> {
        self.segments_with(&Style::default())
    }

    /// Like [`Component::segments`], resolving against an ambient base style.
    pub fn segments_with(&self, base: &Style) -> Vec<Segment> {
        let mut out = Vec::new();
        collect(self, base, &mut out);
        out
    }

    /// The text content with all styling dropped.
    ///
    /// Keybinds and translatables contribute their key.
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        write_plain(self, &mut out);
        out
    }

    /// Resolved style at a byte offset of [`Component::plain_text`].
    pub fn style_at(&self, offset: usize) -> Option<Style> {
        let mut start = 0;
        for segment in self.segments() {
            let end = start + segment.len();
            if offset >= start && offset < end {
                return Some(segment.style);
            }
            start = end;
        }
        None
    }
}

fn own_text(component: &Component) -> &str {
    match component.content() {
        Content::Text(text) => text,
        Content::Keybind(key) => key,
        Content::Translatable { key, .. } => key,
    }
}

fn collect(component: &Component, parent: &Style, out: &mut Vec<Segment>) {
    let style = parent.apply(component.style());
    let text = own_text(component);

    if !text.is_empty() {
        if let Some(last) = out.last_mut().filter(|last| last.style == style) {
            last.text.push_str(text);
        } else {
            out.push(Segment::new(text, style.clone()));
        }
    }

    for child in component.children() {
        collect(child, &style, out);
    }
}

fn write_plain(component: &Component, out: &mut String) {
    out.push_str(own_text(component));
    for child in component.children() {
        write_plain(child, out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::{Color, NamedColor};
    use crate::style::Decorations;

    #[test]
    fn segments_resolve_inherited_style() {
        let tree = Component::empty()
            .with_style(Style::color(NamedColor::Red))
            .append(Component::text("Hello"))
            .append(Component::text(" World").with_style(Style::decorated(Decorations::BOLD, true)));

        let segments = tree.segments();
        assert_eq!(segments.len(), 2);
        assert_eq!(segments[0].text, "Hello");
        assert_eq!(segments[0].style.color, Some(Color::Named(NamedColor::Red)));
        assert_eq!(segments[1].text, " World");
        assert_eq!(segments[1].style.color, Some(Color::Named(NamedColor::Red)));
        assert!(segments[1].style.has_decoration(Decorations::BOLD));
    }

    #[test]
    fn segments_join_equal_styles() {
        let tree = Component::text("a")
            .append(Component::text("b"))
            .append(Component::text("c"));
        assert_eq!(tree.segments(), vec![Segment::new("abc", Style::default())]);
    }

    #[test]
    fn plain_text_includes_keys() {
        let tree = Component::text("Press ").append(Component::keybind("key.jump"));
        assert_eq!(tree.plain_text(), "Press key.jump");
    }

    #[test]
    fn style_at_offsets() {
        let tree = Component::text("ab")
            .append(Component::text("cd").with_style(Style::color(NamedColor::Blue)));

        assert_eq!(tree.style_at(0), Some(Style::default()));
        assert_eq!(tree.style_at(2), Some(Style::color(NamedColor::Blue)));
        assert_eq!(tree.style_at(4), None);
    }
}
