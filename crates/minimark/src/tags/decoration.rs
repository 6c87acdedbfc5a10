//! Decoration tags.
//!
//! `<bold>` enables, `<!bold>` and `<bold:false>` explicitly disable. Short
//! aliases: `b`, `i`/`em`, `u`, `st`, `obf`.

use styled::{Decorations, Style};

use crate::error::TagError;
use crate::parser::ArgumentQueue;
use crate::registry::{Tag, TagContext, TagHandler, TagRegistryBuilder};

const NEGATE: char = '!';

const ALIASES: [(Decorations, &str); 6] = [
    (Decorations::BOLD, "b"),
    (Decorations::ITALIC, "i"),
    (Decorations::ITALIC, "em"),
    (Decorations::UNDERLINED, "u"),
    (Decorations::STRIKETHROUGH, "st"),
    (Decorations::OBFUSCATED, "obf"),
];

struct DecorationTag(Decorations);

impl TagHandler for DecorationTag {
    fn resolve(&self, name: &str, args: &mut ArgumentQueue<'_>, _ctx: &TagContext<'_>) -> Result<Tag, TagError> {
        if name.starts_with(NEGATE) {
            if args.has_next() {
                return Err(args.error_at_next("the ! shorthand takes no arguments"));
            }
            return Ok(Tag::Style(Style::decorated(self.0, false)));
        }

        let state = match args.pop() {
            None => true,
            Some(arg) if arg.is_true() => true,
            Some(arg) if arg.is_false() => false,
            Some(_) => return Err(args.error("expected true or false")),
        };
        args.finish()?;
        Ok(Tag::Style(Style::decorated(self.0, state)))
    }
}

pub(super) fn register(mut builder: TagRegistryBuilder) -> TagRegistryBuilder {
    let names = Decorations::named().chain(ALIASES);
    for (decoration, name) in names {
        builder = builder.register([name.to_string(), format!("{NEGATE}{name}")], DecorationTag(decoration));
    }
    builder
}
