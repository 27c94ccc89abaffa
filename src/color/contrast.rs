//! WCAG 2.1 relative luminance and contrast ratio.
//!
//! https://www.w3.org/TR/WCAG21/#dfn-relative-luminance

use super::parse::{parse_color, Rgb};
use serde::{Deserialize, Serialize};

/// Minimum ratio for WCAG AA (normal text).
pub const AA_RATIO: f64 = 4.5;
/// Minimum ratio for WCAG AAA (normal text).
pub const AAA_RATIO: f64 = 7.0;

/// WCAG compliance level of a contrast ratio.
///
/// Ordered from least to most compliant, so `Fail < Aa < Aaa`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum WcagLevel {
    #[serde(rename = "Fail")]
    Fail,
    #[serde(rename = "AA")]
    Aa,
    #[serde(rename = "AAA")]
    Aaa,
}

impl WcagLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            WcagLevel::Fail => "Fail",
            WcagLevel::Aa => "AA",
            WcagLevel::Aaa => "AAA",
        }
    }

    /// True for AA and AAA.
    pub fn passes(&self) -> bool {
        *self != WcagLevel::Fail
    }
}

impl std::fmt::Display for WcagLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Linearize a gamma-encoded channel value in [0, 1].
fn linearize(value: f64) -> f64 {
    if value <= 0.03928 {
        value / 12.92
    } else {
        ((value + 0.055) / 1.055).powf(2.4)
    }
}

/// Relative luminance of a color, in [0, 1].
pub fn relative_luminance(color: Rgb) -> f64 {
    let r = linearize(f64::from(color.r) / 255.0);
    let g = linearize(f64::from(color.g) / 255.0);
    let b = linearize(f64::from(color.b) / 255.0);

    0.2126 * r + 0.7152 * g + 0.0722 * b
}

/// Contrast ratio between two luminance values; symmetric in its arguments.
pub fn luminance_ratio(l1: f64, l2: f64) -> f64 {
    let (lighter, darker) = if l1 > l2 { (l1, l2) } else { (l2, l1) };
    (lighter + 0.05) / (darker + 0.05)
}

/// Contrast ratio between two parsed colors, in [1, 21].
pub fn contrast_ratio_rgb(fg: Rgb, bg: Rgb) -> f64 {
    luminance_ratio(relative_luminance(fg), relative_luminance(bg))
}

/// Contrast ratio between two CSS color strings.
///
/// `None` when either color is unparseable.
pub fn contrast_ratio(fg: &str, bg: &str) -> Option<f64> {
    let fg = parse_color(fg)?;
    let bg = parse_color(bg)?;
    Some(contrast_ratio_rgb(fg, bg))
}

/// Classify a contrast ratio. Both thresholds are inclusive.
pub fn wcag_level(ratio: f64) -> WcagLevel {
    if ratio >= AAA_RATIO {
        WcagLevel::Aaa
    } else if ratio >= AA_RATIO {
        WcagLevel::Aa
    } else {
        WcagLevel::Fail
    }
}

/// Check if two colors meet WCAG AA (4.5:1).
pub fn meets_aa(fg: Rgb, bg: Rgb) -> bool {
    contrast_ratio_rgb(fg, bg) >= AA_RATIO
}

/// Check if two colors meet WCAG AAA (7:1).
pub fn meets_aaa(fg: Rgb, bg: Rgb) -> bool {
    contrast_ratio_rgb(fg, bg) >= AAA_RATIO
}
