//! Tests for the markup parser and tree builder.

use minimark::{MiniMark, ParseError, ParserConfig, TokenizeErrorKind};
use styled::{Color, Component, Content, Decorations, NamedColor, Style};

fn lenient() -> MiniMark {
    MiniMark::new()
}

fn strict_closing() -> MiniMark {
    MiniMark::with_config(ParserConfig::default().with_strict_closing(true))
}

fn bold() -> Style {
    Style::decorated(Decorations::BOLD, true)
}

// ============================================================================
// Basic Parsing
// ============================================================================

#[test]
fn parse_plain_text() {
    let tree = lenient().parse("plain text").unwrap();
    assert_eq!(tree, Component::text("plain text"));
    assert!(tree.style().is_empty());
}

#[test]
fn parse_empty_string() {
    let tree = lenient().parse("").unwrap();
    assert_eq!(tree.plain_text(), "");
    assert!(tree.children().is_empty());
}

#[test]
fn parse_whitespace_only() {
    assert_eq!(lenient().parse("   ").unwrap(), Component::text("   "));
}

// ============================================================================
// Simple Tags
// ============================================================================

#[test]
fn parse_bold_tag() {
    let tree = lenient().parse("<bold>hi</bold>").unwrap();
    assert_eq!(tree, Component::empty().with_style(bold()).append(Component::text("hi")));
}

#[test]
fn tag_names_ignore_case() {
    let tree = lenient().parse("<BOLD>hi</Bold>").unwrap();
    assert_eq!(tree.style(), &bold());
    assert_eq!(tree.plain_text(), "hi");
}

#[test]
fn nested_styles_merge() {
    let outer_first = lenient().parse("<bold><italic>hi</italic></bold>").unwrap();
    let inner_first = lenient().parse("<italic><bold>hi</bold></italic>").unwrap();

    let segments = outer_first.segments();
    assert_eq!(segments.len(), 1);
    assert!(segments[0].style.has_decoration(Decorations::BOLD));
    assert!(segments[0].style.has_decoration(Decorations::ITALIC));
    assert_eq!(segments, inner_first.segments());
}

#[test]
fn sibling_colors_are_independent() {
    let tree = lenient().parse("<color:red>a</color><color:blue>b</color>").unwrap();
    assert_eq!(tree.children().len(), 2);

    let segments = tree.segments();
    assert_eq!(segments[0].text, "a");
    assert_eq!(segments[0].style.color, Some(Color::Named(NamedColor::Red)));
    assert_eq!(segments[1].text, "b");
    assert_eq!(segments[1].style.color, Some(Color::Named(NamedColor::Blue)));
}

#[test]
fn inner_tag_overrides_outer() {
    let tree = lenient().parse("<red>a<blue>b</blue>c</red>").unwrap();
    let colors: Vec<_> = tree.segments().into_iter().map(|s| s.style.color).collect();
    assert_eq!(
        colors,
        vec![
            Some(Color::Named(NamedColor::Red)),
            Some(Color::Named(NamedColor::Blue)),
            Some(Color::Named(NamedColor::Red)),
        ]
    );
}

#[test]
fn negated_decoration_inside_enabled() {
    let tree = lenient().parse("<bold>a<!bold>b</!bold></bold>").unwrap();
    let segments = tree.segments();
    assert_eq!(segments[0].style.decoration(Decorations::BOLD), Some(true));
    assert_eq!(segments[1].style.decoration(Decorations::BOLD), Some(false));
}

#[test]
fn close_all_shorthand_closes_innermost() {
    let tree = lenient().parse("<red><bold>a</>b").unwrap();
    let segments = tree.segments();
    assert!(segments[0].style.has_decoration(Decorations::BOLD));
    assert!(!segments[1].style.has_decoration(Decorations::BOLD));
    assert_eq!(segments[1].style.color, Some(Color::Named(NamedColor::Red)));
}

#[test]
fn escaped_tags_are_text() {
    let tree = lenient().parse(r"\<bold>not bold").unwrap();
    assert_eq!(tree.plain_text(), "<bold>not bold");
    assert!(tree.segments()[0].style.is_empty());
}

// ============================================================================
// Unknown Tags
// ============================================================================

#[test]
fn unknown_tag_lenient_keeps_source() {
    let tree = lenient().parse("<nope>x</nope>").unwrap();
    assert_eq!(
        tree,
        Component::empty()
            .append(Component::text("<nope>"))
            .append(Component::text("x"))
            .append(Component::text("</nope>"))
    );
    assert_eq!(tree.compact(), Component::text("<nope>x</nope>"));
}

#[test]
fn unknown_tag_strict_fails() {
    let mark = MiniMark::with_config(ParserConfig::default().with_strict_tags(true));
    assert_eq!(
        mark.parse("a<nope>x").unwrap_err(),
        ParseError::UnknownTag {
            name: "nope".into(),
            offset: 1
        }
    );
}

#[test]
fn bad_argument_lenient_keeps_source() {
    let tree = lenient().parse("<color:nocolor>x").unwrap();
    assert_eq!(tree.plain_text(), "<color:nocolor>x");
}

#[test]
fn bad_argument_strict_fails() {
    let mark = MiniMark::with_config(ParserConfig::default().with_strict_tags(true));
    let err = mark.parse("<color:nocolor>x").unwrap_err();
    assert!(matches!(err, ParseError::TagArgument { ref tag, arg_index: 0, .. } if tag == "color"));
}

#[test]
fn text_that_looks_like_comparison() {
    let tree = lenient().parse("a < b and c > d").unwrap();
    assert_eq!(tree, Component::text("a < b and c > d"));
}

// ============================================================================
// Closing
// ============================================================================

#[test]
fn unclosed_tag_strict_fails() {
    assert_eq!(
        strict_closing().parse("<bold>x").unwrap_err(),
        ParseError::UnclosedTag {
            names: vec!["bold".into()],
            offset: 0
        }
    );
}

#[test]
fn unclosed_tags_listed_outermost_first() {
    let err = strict_closing().parse("<red>a<bold>b").unwrap_err();
    assert_eq!(
        err,
        ParseError::UnclosedTag {
            names: vec!["red".into(), "bold".into()],
            offset: 6
        }
    );
}

#[test]
fn unclosed_tag_lenient_styles_rest() {
    let tree = lenient().parse("<bold>x").unwrap();
    assert_eq!(tree, Component::empty().with_style(bold()).append(Component::text("x")));
}

#[test]
fn mismatched_close_strict_fails() {
    let err = strict_closing().parse("<bold><italic>x</bold>").unwrap_err();
    assert_eq!(
        err,
        ParseError::MismatchedCloseTag {
            expected: Some("italic".into()),
            found: "bold".into(),
            offset: 15
        }
    );
}

#[test]
fn outer_close_lenient_closes_inner_tags() {
    let tree = lenient().parse("<red><bold>x</red>y").unwrap();
    let segments = tree.segments();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].style.color, Some(Color::Named(NamedColor::Red)));
    assert!(segments[0].style.has_decoration(Decorations::BOLD));
    assert_eq!(segments[1].text, "y");
    assert!(segments[1].style.is_empty());
}

#[test]
fn close_through_leaves_outer_frames_open() {
    let tree = lenient().parse("<green><bold><italic>a</bold>b").unwrap();
    let segments = tree.segments();
    assert_eq!(segments[1].text, "b");
    assert_eq!(segments[1].style, Style::color(NamedColor::Green));
}

#[test]
fn close_after_inner_close_is_text() {
    let tree = lenient().parse("<bold><italic>x</bold>y</italic>z").unwrap();
    let segments = tree.segments();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].text, "x");
    assert!(segments[0].style.has_decoration(Decorations::ITALIC));
    assert_eq!(segments[1].text, "y</italic>z");
    assert!(segments[1].style.is_empty());
}

#[test]
fn unmatched_close_tag_is_text() {
    assert_eq!(lenient().parse("x</bold>").unwrap().plain_text(), "x</bold>");
    assert_eq!(strict_closing().parse("x</bold>").unwrap().plain_text(), "x</bold>");
    assert_eq!(lenient().parse("a<br>b</br>").unwrap().plain_text(), "a\nb</br>");
    assert_eq!(lenient().parse("</>x").unwrap().plain_text(), "</>x");
}

#[test]
fn close_args_must_prefix_open_args() {
    let tree = lenient().parse("<color:red>a</color:red>b").unwrap();
    assert_eq!(tree.segments()[1].style.color, None);

    let tree = lenient().parse("<color:red>a</color:blue>b").unwrap();
    let segments = tree.segments();
    assert_eq!(segments.len(), 1);
    assert_eq!(segments[0].text, "a</color:blue>b");
    assert_eq!(segments[0].style.color, Some(Color::Named(NamedColor::Red)));

    assert_eq!(
        strict_closing().parse("<color:red>a</color:blue>").unwrap_err(),
        ParseError::UnclosedTag {
            names: vec!["color".into()],
            offset: 0
        }
    );
}

#[test]
fn self_closing_style_tag_styles_nothing() {
    let tree = lenient().parse("<bold/>x").unwrap();
    assert_eq!(tree, Component::text("x"));
    assert!(tree.segments()[0].style.is_empty());
}

// ============================================================================
// Nesting Limit
// ============================================================================

#[test]
fn deep_nesting_lenient_keeps_excess_tags_as_text() {
    let input = format!("{}x", "<b>".repeat(10_000));
    let tree = lenient().parse(&input).unwrap();

    let limit = minimark::config::DEFAULT_MAX_NESTING_DEPTH;
    let expected = format!("{}x", "<b>".repeat(10_000 - limit));
    assert_eq!(tree.plain_text(), expected);

    let segments = tree.segments();
    assert_eq!(segments.len(), 1);
    assert!(segments[0].style.has_decoration(Decorations::BOLD));
    drop(tree);
}

#[test]
fn deep_nesting_strict_fails() {
    let mark = MiniMark::with_config(
        ParserConfig::default()
            .with_strict_tags(true)
            .with_max_nesting_depth(2),
    );
    assert!(mark.parse("<red><bold>x</bold></red>").is_ok());
    assert_eq!(
        mark.parse("<red><bold><italic>x").unwrap_err(),
        ParseError::NestingLimitExceeded {
            name: "italic".into(),
            depth: 3,
            offset: 11
        }
    );
}

#[test]
fn nesting_limit_counts_enclosing_tags_of_nested_markup() {
    let mark = MiniMark::with_config(ParserConfig::default().with_max_nesting_depth(1));
    let translated_arg = |tree: &Component| match tree.content() {
        Content::Translatable { args, .. } => args[0].plain_text(),
        _ => panic!("expected a translatable node"),
    };

    let tree = mark.parse("<lang:chat:'<red>Alex'>").unwrap();
    assert_eq!(translated_arg(&tree), "Alex");

    let tree = mark.parse("<bold><lang:chat:'<red>Alex'>").unwrap();
    assert_eq!(translated_arg(&tree.children()[0]), "<red>Alex");
}

#[test]
fn reset_closes_everything() {
    let tree = lenient().parse("<red><bold>a<reset>b").unwrap();
    let segments = tree.segments();
    assert_eq!(segments[1].text, "b");
    assert!(segments[1].style.is_empty());
}

#[test]
fn reset_strict_fails() {
    assert_eq!(
        strict_closing().parse("<red>a<reset>b").unwrap_err(),
        ParseError::ResetNotAllowed { offset: 6 }
    );
}

#[test]
fn pre_keeps_tags_verbatim() {
    let tree = lenient().parse("<pre><red>x</red></pre><bold>y").unwrap();
    assert_eq!(tree.plain_text(), "<red>x</red>y");
    assert_eq!(tree.segments()[0].style, Style::default());
}

// ============================================================================
// Syntax Errors
// ============================================================================

#[test]
fn unterminated_tag_lenient_is_text() {
    let tree = lenient().parse("a <bold").unwrap();
    assert_eq!(tree.plain_text(), "a <bold");
}

#[test]
fn unterminated_quote_strict_fails() {
    let mark = MiniMark::with_config(ParserConfig::default().with_strict_syntax(true));
    assert_eq!(
        mark.parse("<hover:show_text:'oops>x").unwrap_err(),
        ParseError::Tokenize {
            offset: 17,
            reason: TokenizeErrorKind::UnterminatedQuote
        }
    );
}

#[test]
fn unterminated_quote_lenient_recovers() {
    let tree = lenient().parse("<hover:show_text:'oops>x").unwrap();
    assert_eq!(tree.plain_text(), "<hover:show_text:'oops>x");
    assert!(tree.style().hover.is_none());
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn base_style_applies_to_root() {
    let mark = MiniMark::with_config(ParserConfig::default().with_base_style(Style::color(NamedColor::Gray)));
    let tree = mark.parse("<bold>a</bold>b").unwrap();
    assert_eq!(tree.style(), &Style::color(NamedColor::Gray));
    for segment in tree.segments() {
        assert_eq!(segment.style.color, Some(Color::Named(NamedColor::Gray)));
    }
}

#[test]
fn parser_is_shareable_across_threads() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<MiniMark>();

    let mark = std::sync::Arc::new(MiniMark::new());
    let handles: Vec<_> = (0..4)
        .map(|i| {
            let mark = std::sync::Arc::clone(&mark);
            std::thread::spawn(move || mark.parse(&format!("<red>{i}</red>")).map(|tree| tree.plain_text()))
        })
        .collect();
    for (i, handle) in handles.into_iter().enumerate() {
        assert_eq!(handle.join().unwrap().unwrap(), i.to_string());
    }
}
