//! Interaction tags: `<click:action:value>` and `<hover:action:...>`.

use styled::{ClickAction, ClickEvent, HoverEvent, Style};

use crate::error::TagError;
use crate::parser::ArgumentQueue;
use crate::registry::{Tag, TagContext, TagRegistryBuilder};

fn click(_name: &str, args: &mut ArgumentQueue<'_>, _ctx: &TagContext<'_>) -> Result<Tag, TagError> {
    let action = args.pop_or("expected a click action")?;
    let action = ClickAction::from_name(action.value()).map_err(|err| args.error(err.to_string()))?;
    let value = args.pop_or("expected a click value")?;
    args.finish()?;

    Ok(Tag::Style(Style::new().with_click(ClickEvent::new(action, value.value()))))
}

fn hover(_name: &str, args: &mut ArgumentQueue<'_>, ctx: &TagContext<'_>) -> Result<Tag, TagError> {
    let action = args.pop_or("expected a hover action")?;
    let event = match action.lower_value().as_str() {
        "show_text" => {
            let text = args.pop_or("expected tooltip markup")?;
            HoverEvent::show_text(ctx.parse_nested(text.value())?)
        }
        "show_item" => {
            let item = args.pop_or("expected an item id")?.value().to_string();
            let count = match args.pop() {
                None => 1,
                Some(arg) => arg
                    .as_int()
                    .and_then(|count| u32::try_from(count).ok())
                    .filter(|count| *count > 0)
                    .ok_or_else(|| args.error("item count must be a positive integer"))?,
            };
            HoverEvent::ShowItem { item, count }
        }
        "show_entity" => {
            let kind = args.pop_or("expected an entity type")?.value().to_string();
            let id = args.pop_or("expected an entity id")?.value().to_string();
            let name = match args.pop() {
                Some(arg) => Some(Box::new(ctx.parse_nested(arg.value())?)),
                None => None,
            };
            HoverEvent::ShowEntity { kind, id, name }
        }
        other => return Err(args.error(format!("unknown hover action '{other}'"))),
    };
    args.finish()?;

    Ok(Tag::Style(Style::new().with_hover(event)))
}

pub(super) fn register(builder: TagRegistryBuilder) -> TagRegistryBuilder {
    builder.register_fn(["click"], click).register_fn(["hover"], hover)
}

#[cfg(test)]
mod tests {
    use styled::HoverEvent;

    use crate::{MiniMark, ParserConfig};

    #[test]
    fn click_value_keeps_url() {
        let tree = MiniMark::new()
            .parse("<click:open_url:https://example.com>go</click>")
            .unwrap();
        let click = tree.style().click.clone().unwrap();
        assert_eq!(click.value, "https://example.com");
    }

    #[test]
    fn hover_text_is_parsed() {
        let tree = MiniMark::new().parse("<hover:show_text:'<red>tip'>x</hover>").unwrap();
        let Some(HoverEvent::ShowText(tip)) = tree.style().hover.clone() else {
            panic!("expected a text tooltip");
        };
        assert_eq!(tip.plain_text(), "tip");
    }

    #[test]
    fn hover_item_count() {
        let mark = MiniMark::with_config(ParserConfig::strict());
        let tree = mark.parse("<hover:show_item:diamond:3>x</hover>").unwrap();
        assert_eq!(
            tree.style().hover,
            Some(HoverEvent::ShowItem {
                item: "diamond".into(),
                count: 3
            })
        );
        assert!(mark.parse("<hover:show_item:diamond:-1>x</hover>").is_err());
    }

    #[test]
    fn unknown_click_action_is_text() {
        let tree = MiniMark::new().parse("<click:teleport:x>a").unwrap();
        assert_eq!(tree.plain_text(), "<click:teleport:x>a");
        assert!(tree.style().click.is_none());
    }
}
