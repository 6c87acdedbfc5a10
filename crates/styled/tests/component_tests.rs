//! Tests for component trees, styles and flattening.

use insta::assert_snapshot;
use styled::{
    ClickAction, ClickEvent, Color, Component, Content, Decorations, HoverEvent, NamedColor,
    Segment, Style,
};

// ============================================================================
// Style Merging
// ============================================================================

#[test]
fn merge_non_conflicting_attributes_is_order_independent() {
    let bold = Style::decorated(Decorations::BOLD, true);
    let italic = Style::decorated(Decorations::ITALIC, true);

    assert_eq!(bold.apply(&italic), italic.apply(&bold));
}

#[test]
fn merge_keeps_outer_events() {
    let outer = Style::new().with_click(ClickEvent::new(ClickAction::RunCommand, "/help"));
    let inner = Style::color(NamedColor::Aqua);

    let merged = outer.apply(&inner);
    assert_eq!(merged.click.as_ref().map(|c| c.value.as_str()), Some("/help"));
    assert_eq!(merged.color, Some(Color::Named(NamedColor::Aqua)));
}

#[test]
fn empty_style_is_identity() {
    let style = Style::color(NamedColor::Red).with_decoration(Decorations::UNDERLINED, false);
    assert_eq!(style.apply(&Style::default()), style);
    assert_eq!(Style::default().apply(&style), style);
}

// ============================================================================
// Tree Flattening
// ============================================================================

#[test]
fn nested_styles_flatten_to_segments() {
    let tree = Component::empty()
        .with_style(Style::decorated(Decorations::BOLD, true))
        .append(
            Component::empty()
                .with_style(Style::decorated(Decorations::ITALIC, true))
                .append(Component::text("hi")),
        );

    let segments = tree.segments();
    assert_eq!(segments.len(), 1);
    assert!(segments[0].style.has_decoration(Decorations::BOLD));
    assert!(segments[0].style.has_decoration(Decorations::ITALIC));
}

#[test]
fn base_style_fills_unset_attributes() {
    let tree = Component::text("x");
    let base = Style::color(NamedColor::Gray);
    assert_eq!(tree.segments_with(&base), vec![Segment::new("x", base.clone())]);
}

#[test]
fn translatable_plain_text_uses_key() {
    let tree = Component::translatable("chat.type.text", vec![Component::text("arg")]);
    assert_eq!(tree.plain_text(), "chat.type.text");
    match tree.content() {
        Content::Translatable { args, .. } => assert_eq!(args.len(), 1),
        other => panic!("Expected translatable, got {:?}", other),
    }
}

#[test]
fn hover_text_does_not_leak_into_plain_text() {
    let style = Style::new().with_hover(HoverEvent::show_text(Component::text("tooltip")));
    let tree = Component::text("body").with_style(style);
    assert_snapshot!(tree.plain_text(), @"body");
}

// ============================================================================
// Compaction
// ============================================================================

#[test]
fn compact_nested_wrappers() {
    let tree = Component::empty().append(
        Component::empty()
            .with_style(Style::color(NamedColor::Red))
            .append(Component::text("a")),
    );

    let compacted = tree.compact();
    assert_eq!(compacted.as_text(), Some("a"));
    assert_eq!(compacted.style().color, Some(Color::Named(NamedColor::Red)));
}

#[test]
fn compact_preserves_segments() {
    let tree = Component::empty()
        .append(Component::text("a"))
        .append(
            Component::empty()
                .with_style(Style::decorated(Decorations::BOLD, true))
                .append(Component::text("b"))
                .append(Component::text("c")),
        );

    let before = tree.segments();
    let after = tree.compact().segments();
    assert_eq!(before, after);
}
