//! Contrast auto-fix suggestions.

use super::contrast::{luminance_ratio, relative_luminance, AA_RATIO};
use super::parse::{parse_color, Rgb};

/// Number of interpolation intervals between the input color and the target.
const FIX_STEPS: u32 = 20;

/// Luminance below which a background counts as dark.
const DARK_BACKGROUND_LUMINANCE: f64 = 0.5;

/// Linear interpolation of each channel from `from` toward `to`.
fn mix(from: Rgb, to: Rgb, t: f64) -> Rgb {
    let lerp = |a: u8, b: u8| {
        let (a, b) = (f64::from(a), f64::from(b));
        (a + (b - a) * t).round() as u8
    };
    Rgb::new(lerp(from.r, to.r), lerp(from.g, to.g), lerp(from.b, to.b))
}

/// Find the smallest shift of `fg` toward black or white that reaches
/// `target_ratio` against `bg`.
///
/// Dark backgrounds (luminance < 0.5) push toward white, light ones toward
/// black. The search walks 21 evenly spaced steps (t = 0, 0.05, ..., 1) and
/// returns the first candidate that passes. When none does, the pure polarity
/// color is returned since nothing contrasts more.
pub fn suggest_fix_rgb(fg: Rgb, bg: Rgb, target_ratio: f64) -> Rgb {
    let bg_lum = relative_luminance(bg);
    let polarity = if bg_lum < DARK_BACKGROUND_LUMINANCE {
        Rgb::WHITE
    } else {
        Rgb::BLACK
    };

    (0..=FIX_STEPS)
        .map(|step| mix(fg, polarity, f64::from(step) / f64::from(FIX_STEPS)))
        .find(|candidate| luminance_ratio(relative_luminance(*candidate), bg_lum) >= target_ratio)
        .unwrap_or(polarity)
}

/// Suggest a `#rrggbb` foreground reaching `target_ratio` against `bg`.
///
/// `None` only when `bg` is unparseable. An unparseable `fg` is treated as
/// black.
pub fn suggest_fix(fg: &str, bg: &str, target_ratio: f64) -> Option<String> {
    let bg = parse_color(bg)?;
    let fg = parse_color(fg).unwrap_or(Rgb::BLACK);
    Some(suggest_fix_rgb(fg, bg, target_ratio).to_hex())
}

/// [`suggest_fix`] with the WCAG AA target of 4.5.
pub fn suggest_fix_aa(fg: &str, bg: &str) -> Option<String> {
    suggest_fix(fg, bg, AA_RATIO)
}
