//! CSS color string parsing.
//!
//! Accepts `#rgb`, `#rrggbb`, `rgb(r, g, b)` and `rgba(r, g, b, a)`.
//! Everything else (named colors, `hsl()`, `transparent`, empty strings)
//! is unparseable and surfaces as `None` from [`parse_color`].

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An opaque 8-bit sRGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);

    /// Create a color from its channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `[r, g, b]` array.
    pub fn channels(&self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }

    /// Format as lowercase `#rrggbb`.
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self::new(r, g, b)
    }
}

impl std::fmt::Display for Rgb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// Why a color string could not be parsed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    #[error("empty color string")]
    Empty,

    #[error("invalid hex color: {0}")]
    InvalidHex(String),

    #[error("invalid rgb()/rgba() syntax: {0}")]
    InvalidFunction(String),

    #[error("channel out of range: {0}")]
    ChannelOutOfRange(String),

    #[error("invalid alpha value: {0}")]
    InvalidAlpha(String),

    #[error("unsupported color syntax: {0}")]
    Unsupported(String),
}

/// Parse a CSS color string, reporting why parsing failed.
///
/// `rgba()` colors are alpha-composited over opaque white
/// (`c * a + 255 * (1 - a)` per channel). This ignores the real backdrop, so
/// contrast figures for translucent colors are only exact on white surfaces.
pub fn try_parse_color(text: &str) -> Result<Rgb, ColorParseError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ColorParseError::Empty);
    }

    if let Some(hex) = text.strip_prefix('#') {
        return parse_hex(hex).ok_or_else(|| ColorParseError::InvalidHex(text.to_string()));
    }

    if let Some(args) = function_args(text, "rgba") {
        return parse_rgba(text, args);
    }

    if let Some(args) = function_args(text, "rgb") {
        return parse_rgb(text, args);
    }

    Err(ColorParseError::Unsupported(text.to_string()))
}

/// Parse a CSS color string into an [`Rgb`] triplet.
///
/// Returns `None` for anything unparseable; this is a normal outcome, not an
/// error, and callers render it as "no data".
pub fn parse_color(text: &str) -> Option<Rgb> {
    try_parse_color(text).ok()
}

/// Convert any supported CSS color string to `#rrggbb`.
///
/// Unparseable input yields `#000000`. Callers must read that as black, not
/// as a failure signal; use [`try_parse_color`] to tell the two apart.
pub fn to_hex(text: &str) -> String {
    try_parse_color(text).unwrap_or(Rgb::BLACK).to_hex()
}

fn parse_hex(hex: &str) -> Option<Rgb> {
    if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).ok().map(|n| n * 17);
            Some(Rgb::new(nibble(0)?, nibble(1)?, nibble(2)?))
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
            Some(Rgb::new(byte(0)?, byte(2)?, byte(4)?))
        }
        _ => None,
    }
}

/// Return the comma-separated arguments of `name(...)`, if `text` has that shape.
fn function_args<'a>(text: &'a str, name: &str) -> Option<Vec<&'a str>> {
    let inner = text.strip_prefix(name)?.strip_prefix('(')?.strip_suffix(')')?;
    Some(inner.split(',').map(str::trim).collect())
}

fn parse_channel(text: &str, raw: &str) -> Result<u8, ColorParseError> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ColorParseError::InvalidFunction(text.to_string()));
    }
    raw.parse::<u8>()
        .map_err(|_| ColorParseError::ChannelOutOfRange(text.to_string()))
}

fn parse_rgb(text: &str, args: Vec<&str>) -> Result<Rgb, ColorParseError> {
    let [r, g, b] = args.as_slice() else {
        return Err(ColorParseError::InvalidFunction(text.to_string()));
    };

    Ok(Rgb::new(
        parse_channel(text, r)?,
        parse_channel(text, g)?,
        parse_channel(text, b)?,
    ))
}

fn parse_rgba(text: &str, args: Vec<&str>) -> Result<Rgb, ColorParseError> {
    let [r, g, b, a] = args.as_slice() else {
        return Err(ColorParseError::InvalidFunction(text.to_string()));
    };

    let (r, g, b) = (
        parse_channel(text, r)?,
        parse_channel(text, g)?,
        parse_channel(text, b)?,
    );

    if a.is_empty() || !a.bytes().all(|c| c.is_ascii_digit() || c == b'.') {
        return Err(ColorParseError::InvalidAlpha(text.to_string()));
    }
    let alpha = a
        .parse::<f64>()
        .map_err(|_| ColorParseError::InvalidAlpha(text.to_string()))?
        .clamp(0.0, 1.0);

    let over_white = |c: u8| (f64::from(c) * alpha + 255.0 * (1.0 - alpha)).round() as u8;
    Ok(Rgb::new(over_white(r), over_white(g), over_white(b)))
}
