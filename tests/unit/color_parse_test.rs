//! Unit tests for CSS color parsing.

use arcana_tokens::color::{parse_color, to_hex, try_parse_color, ColorParseError, Rgb};

#[test]
fn test_hex_forms() {
    assert_eq!(parse_color("#fff"), Some(Rgb::WHITE));
    assert_eq!(parse_color("#FFFFFF"), Some(Rgb::WHITE));
    assert_eq!(parse_color("#1c1917"), Some(Rgb::new(0x1c, 0x19, 0x17)));
    assert_eq!(parse_color("  #abc  "), Some(Rgb::new(0xaa, 0xbb, 0xcc)));
}

#[test]
fn test_rgb_functions() {
    assert_eq!(parse_color("rgb(255, 0, 0)"), Some(Rgb::new(255, 0, 0)));
    assert_eq!(parse_color("rgb(12,34,56)"), Some(Rgb::new(12, 34, 56)));
    // Half-transparent black over white.
    assert_eq!(parse_color("rgba(0, 0, 0, 0.5)"), Some(Rgb::new(128, 128, 128)));
    assert_eq!(parse_color("rgba(0, 0, 0, 1)"), Some(Rgb::BLACK));
    assert_eq!(parse_color("rgba(0, 0, 0, 0)"), Some(Rgb::WHITE));
}

#[test]
fn test_unparseable() {
    for text in ["", "red", "#12", "#12345", "#ggg", "hsl(0, 0%, 0%)", "rgb(1, 2)", "rgb(256, 0, 0)"] {
        assert_eq!(parse_color(text), None, "{text:?}");
    }
    assert!(matches!(try_parse_color(""), Err(ColorParseError::Empty)));
    assert!(matches!(try_parse_color("red"), Err(ColorParseError::Unsupported(_))));
}

#[test]
fn test_to_hex() {
    assert_eq!(to_hex("#ABC"), "#aabbcc");
    assert_eq!(to_hex("rgb(255, 255, 255)"), "#ffffff");
    assert_eq!(to_hex("nonsense"), "#000000");
    assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
}
