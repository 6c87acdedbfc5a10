//! Tags that insert content: keybinds, translations and line breaks.

use styled::Component;

use crate::error::TagError;
use crate::parser::ArgumentQueue;
use crate::registry::{Tag, TagContext, TagRegistryBuilder};

fn keybind(_name: &str, args: &mut ArgumentQueue<'_>, _ctx: &TagContext<'_>) -> Result<Tag, TagError> {
    let key = args.pop_or("expected a keybind name")?;
    args.finish()?;
    Ok(Tag::insert(Component::keybind(key.value())))
}

/// `<lang:key:arg...>`; each substitution argument is parsed as markup.
fn translatable(_name: &str, args: &mut ArgumentQueue<'_>, ctx: &TagContext<'_>) -> Result<Tag, TagError> {
    let key = args.pop_or("expected a translation key")?;
    let mut with = Vec::with_capacity(args.remaining());
    while let Some(arg) = args.pop() {
        with.push(ctx.parse_nested(arg.value())?);
    }
    Ok(Tag::insert(Component::translatable(key.value(), with)))
}

fn newline(_name: &str, args: &mut ArgumentQueue<'_>, _ctx: &TagContext<'_>) -> Result<Tag, TagError> {
    args.finish()?;
    Ok(Tag::insert(Component::text("\n")))
}

pub(super) fn register(builder: TagRegistryBuilder) -> TagRegistryBuilder {
    builder
        .register_fn(["key"], keybind)
        .register_fn(["lang", "tr", "translate"], translatable)
        .register_fn(["newline", "br"], newline)
}
