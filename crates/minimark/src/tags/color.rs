//! Color tags: `<red>`, `<#ff00aa>`, `<color:gold>` (also `colour` and `c`).

use styled::{Color, NamedColor, Style};

use crate::error::TagError;
use crate::parser::ArgumentQueue;
use crate::registry::{Tag, TagContext, TagHandler, TagRegistryBuilder};

const COLOR_TAGS: [&str; 3] = ["color", "colour", "c"];

struct ColorTag;

impl TagHandler for ColorTag {
    fn resolve(&self, name: &str, args: &mut ArgumentQueue<'_>, _ctx: &TagContext<'_>) -> Result<Tag, TagError> {
        let color = if COLOR_TAGS.contains(&name) {
            let arg = args.pop_or("expected a color name or #RRGGBB")?;
            Color::parse(arg.value()).map_err(|err| args.error(err.to_string()))?
        } else {
            Color::parse(name).map_err(|err| args.error_at_next(err.to_string()))?
        };
        args.finish()?;
        Ok(Tag::Style(Style::color(color)))
    }
}

pub(super) fn register(builder: TagRegistryBuilder) -> TagRegistryBuilder {
    let names = NamedColor::ALL
        .iter()
        .map(|color| color.name())
        .chain(["grey", "dark_grey"])
        .chain(COLOR_TAGS);
    builder.register(names, ColorTag).pattern(Color::is_hex, ColorTag)
}
