//! `<insert:text>` (shift-click insertion) and `<font:key>`.

use styled::Style;

use crate::error::TagError;
use crate::parser::ArgumentQueue;
use crate::registry::{Tag, TagContext, TagRegistryBuilder};

fn insertion(_name: &str, args: &mut ArgumentQueue<'_>, _ctx: &TagContext<'_>) -> Result<Tag, TagError> {
    let text = args.pop_or("expected text to insert")?;
    args.finish()?;
    Ok(Tag::Style(Style::new().with_insertion(text.value())))
}

/// `<font:key>` or `<font:namespace:path>`.
fn font(_name: &str, args: &mut ArgumentQueue<'_>, _ctx: &TagContext<'_>) -> Result<Tag, TagError> {
    let first = args.pop_or("expected a font key")?;
    let key = match args.pop() {
        Some(path) => format!("{}:{}", first.value(), path.value()),
        None => first.value().to_string(),
    };
    args.finish()?;
    Ok(Tag::Style(Style::new().with_font(key)))
}

pub(super) fn register(builder: TagRegistryBuilder) -> TagRegistryBuilder {
    builder
        .register_fn(["insert", "insertion"], insertion)
        .register_fn(["font"], font)
}
