//! Tests for the Color type.

use styled::{Color, ColorParseError, NamedColor};

// ============================================================================
// Named Colors
// ============================================================================

#[test]
fn parse_every_palette_name() {
    let names = [
        "black", "dark_blue", "dark_green", "dark_aqua", "dark_red", "dark_purple", "gold",
        "gray", "dark_gray", "blue", "green", "aqua", "red", "light_purple", "yellow", "white",
    ];

    for name in names {
        let parsed = Color::parse(name);
        assert!(parsed.is_ok(), "Failed to parse: {}", name);
        assert_eq!(parsed.unwrap().to_string(), name);
    }
}

#[test]
fn parse_case_insensitive() {
    assert_eq!(Color::parse("RED").unwrap(), Color::Named(NamedColor::Red));
    assert_eq!(Color::parse("Red").unwrap(), Color::Named(NamedColor::Red));
    assert_eq!(Color::parse("rEd").unwrap(), Color::Named(NamedColor::Red));
}

#[test]
fn parse_with_whitespace() {
    assert_eq!(Color::parse("  red  ").unwrap(), Color::Named(NamedColor::Red));
}

#[test]
fn aliases_resolve_to_canonical_names() {
    assert_eq!(Color::parse("grey").unwrap().to_string(), "gray");
    assert_eq!(Color::parse("dark_grey").unwrap().to_string(), "dark_gray");
}

#[test]
fn unknown_name_error() {
    assert_eq!(
        Color::parse("magenta"),
        Err(ColorParseError::UnknownName("magenta".to_string()))
    );
}

// ============================================================================
// Hex Colors
// ============================================================================

#[test]
fn parse_hex_lower_and_upper() {
    assert_eq!(Color::parse("#ff5733").unwrap(), Color::Rgb(255, 87, 51));
    assert_eq!(Color::parse("#FF5733").unwrap(), Color::Rgb(255, 87, 51));
}

#[test]
fn invalid_hex_error() {
    assert_eq!(
        Color::parse("#12345"),
        Err(ColorParseError::InvalidHex("#12345".to_string()))
    );
    assert!(Color::parse("#zzzzzz").is_err());
    assert!(!Color::is_hex("#12"));
    assert!(Color::is_hex("#abcdef"));
}

#[test]
fn hex_output_is_lowercase() {
    assert_eq!(Color::Rgb(0xAB, 0xCD, 0xEF).to_hex(), "#abcdef");
    assert_eq!(Color::Named(NamedColor::Gold).to_hex(), "#ffaa00");
}

// ============================================================================
// Interpolation
// ============================================================================

#[test]
fn lerp_between_named_colors() {
    let from = Color::Named(NamedColor::Black);
    let to = Color::Named(NamedColor::White);
    assert_eq!(Color::lerp(0.25, from, to), Color::Rgb(64, 64, 64));
}

#[test]
fn lerp_clamps_factor() {
    let from = Color::Rgb(10, 10, 10);
    let to = Color::Rgb(20, 20, 20);
    assert_eq!(Color::lerp(-1.0, from, to), from);
    assert_eq!(Color::lerp(2.0, from, to), to);
}
