//! Serialization of component trees back to markup.
//!
//! Output is canonical rather than minimal: every styled node opens its own
//! tags and closes them explicitly, so parsing the result reproduces the same
//! rendered segments.

use styled::{Component, Content, Decorations, HoverEvent, Style};

use crate::parser::{Lexer, TokenKind};
use crate::registry::TagRegistry;

/// Serialize a component tree to markup.
///
/// # Examples
///
/// ```
/// use minimark::serialize;
/// use styled::{Component, Decorations, Style};
///
/// let tree = Component::empty()
///     .with_style(Style::decorated(Decorations::BOLD, true))
///     .append(Component::text("a < b"));
/// assert_eq!(serialize(&tree), r"<bold>a \< b</bold>");
/// ```
pub fn serialize(component: &Component) -> String {
    let mut out = String::new();
    write_component(component, &mut out);
    out
}

fn write_component(component: &Component, out: &mut String) {
    let closers = open_style(component.style(), out);

    match component.content() {
        Content::Text(text) => out.push_str(&escape_text(text)),
        Content::Keybind(key) => write_tag(out, "key", &[key.as_str()]),
        Content::Translatable { key, args } => {
            let args: Vec<String> = args.iter().map(serialize).collect();
            let mut values = vec![key.as_str()];
            values.extend(args.iter().map(String::as_str));
            write_tag(out, "lang", &values);
        }
    }

    for child in component.children() {
        write_component(child, out);
    }

    for name in closers.iter().rev() {
        out.push_str("</");
        out.push_str(name);
        out.push('>');
    }
}

/// Write the opening tags for `style`, returning the names to close.
fn open_style(style: &Style, out: &mut String) -> Vec<String> {
    let mut closers = Vec::new();

    if let Some(color) = &style.color {
        let name = color.to_string();
        write_tag(out, &name, &[]);
        closers.push(name);
    }

    for (decoration, name) in Decorations::named() {
        let name = match style.decoration(decoration) {
            Some(true) => name.to_string(),
            Some(false) => format!("!{name}"),
            None => continue,
        };
        write_tag(out, &name, &[]);
        closers.push(name);
    }

    if let Some(click) = &style.click {
        write_tag(out, "click", &[click.action.name(), click.value.as_str()]);
        closers.push("click".to_string());
    }

    if let Some(hover) = &style.hover {
        match hover {
            HoverEvent::ShowText(text) => {
                let markup = serialize(text);
                write_tag(out, "hover", &[hover.action_name(), markup.as_str()]);
            }
            HoverEvent::ShowItem { item, count } => {
                let count = count.to_string();
                write_tag(out, "hover", &[hover.action_name(), item.as_str(), count.as_str()]);
            }
            HoverEvent::ShowEntity { kind, id, name } => {
                let name = name.as_deref().map(serialize);
                let mut values = vec![hover.action_name(), kind.as_str(), id.as_str()];
                values.extend(name.as_deref());
                write_tag(out, "hover", &values);
            }
        }
        closers.push("hover".to_string());
    }

    if let Some(insertion) = &style.insertion {
        write_tag(out, "insert", &[insertion.as_str()]);
        closers.push("insert".to_string());
    }

    if let Some(font) = &style.font {
        write_tag(out, "font", &[font.as_str()]);
        closers.push("font".to_string());
    }

    closers
}

fn write_tag(out: &mut String, name: &str, args: &[&str]) {
    out.push('<');
    out.push_str(name);
    for arg in args {
        out.push(':');
        out.push_str(&quote_argument(arg));
    }
    out.push('>');
}

/// Escape text so it is never read as a tag.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if matches!(c, '<' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

fn needs_quotes(value: &str) -> bool {
    value.is_empty()
        || value
            .chars()
            .any(|c| c.is_whitespace() || matches!(c, ':' | ',' | '\'' | '"' | '<' | '>' | '\\' | '/'))
}

fn quote_argument(value: &str) -> String {
    if !needs_quotes(value) {
        return value.to_string();
    }
    let mut out = String::with_capacity(value.len() + 2);
    out.push('\'');
    for c in value.chars() {
        if matches!(c, '\'' | '\\') {
            out.push('\\');
        }
        out.push(c);
    }
    out.push('\'');
    out
}

/// Escape every tag so the input renders literally.
pub fn escape_tags(input: &str) -> String {
    rewrite_tags(input, |_| true, |raw, out| {
        out.push('\\');
        out.push_str(raw);
    })
}

/// Remove every tag the registry would interpret, keeping everything else.
pub fn strip_tags(input: &str, registry: &TagRegistry) -> String {
    let recognized = |kind: &TokenKind<'_>| match kind {
        TokenKind::OpenTag { name, .. } => registry.has(name),
        TokenKind::CloseTag { name, .. } => name.is_empty() || registry.has(name),
        TokenKind::Literal(_) => false,
    };
    rewrite_tags(input, recognized, |_, _| {})
}

fn rewrite_tags(
    input: &str,
    select: impl Fn(&TokenKind<'_>) -> bool,
    mut on_tag: impl FnMut(&str, &mut String),
) -> String {
    let mut out = String::with_capacity(input.len());
    let mut lexer = Lexer::new(input);

    while let Some(next) = lexer.next() {
        let Ok(token) = next else {
            lexer.resume();
            continue;
        };
        let is_tag = !matches!(token.kind, TokenKind::Literal(_));
        if is_tag && select(&token.kind) {
            on_tag(token.raw, &mut out);
        } else {
            out.push_str(token.raw);
        }
    }
    out
}
