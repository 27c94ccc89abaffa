//! Typographic and spacing scales.

use crate::tokens::FlatToken;
use serde::{Deserialize, Serialize};

/// Common modular-scale ratios.
pub mod ratio {
    pub const MINOR_SECOND: f64 = 1.067;
    pub const MAJOR_SECOND: f64 = 1.125;
    pub const MINOR_THIRD: f64 = 1.2;
    pub const MAJOR_THIRD: f64 = 1.25;
    pub const PERFECT_FOURTH: f64 = 1.333;
    pub const AUGMENTED_FOURTH: f64 = 1.414;
    pub const PERFECT_FIFTH: f64 = 1.5;
    pub const GOLDEN_RATIO: f64 = 1.618;
}

/// Named steps of the type scale, largest first.
pub const TYPE_STEPS: [(&str, i32); 9] = [
    ("h1", 6),
    ("h2", 5),
    ("h3", 4),
    ("h4", 3),
    ("xl", 2),
    ("lg", 1),
    ("base", 0),
    ("sm", -1),
    ("xs", -2),
];

/// Named multipliers of the spacing scale.
pub const SPACING_STEPS: [(&str, f64); 13] = [
    ("0", 0.0),
    ("px", 0.25),
    ("0-5", 0.5),
    ("1", 1.0),
    ("2", 2.0),
    ("3", 3.0),
    ("4", 4.0),
    ("5", 5.0),
    ("6", 6.0),
    ("8", 8.0),
    ("10", 10.0),
    ("12", 12.0),
    ("16", 16.0),
];

/// `base * ratio^step`.
pub fn type_size(base: f64, ratio: f64, step: i32) -> f64 {
    base * ratio.powi(step)
}

/// `multiplier * base`.
pub fn spacing_size(multiplier: f64, base: f64) -> f64 {
    multiplier * base
}

/// Pixel value rounded to two decimals, without trailing zeros.
pub fn format_px(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{rounded}px")
}

/// Modular type scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TypeScale {
    /// Size of the `base` step in px
    pub base: f64,
    /// Ratio between adjacent steps
    pub ratio: f64,
}

impl Default for TypeScale {
    fn default() -> Self {
        Self {
            base: 16.0,
            ratio: ratio::MAJOR_THIRD,
        }
    }
}

impl TypeScale {
    pub fn new(base: f64, ratio: f64) -> Self {
        Self { base, ratio }
    }

    pub fn size(&self, step: i32) -> f64 {
        type_size(self.base, self.ratio, step)
    }

    /// Size of a named step.
    pub fn named(&self, name: &str) -> Option<f64> {
        TYPE_STEPS
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, step)| self.size(*step))
    }

    /// Every named step with its size, largest first.
    pub fn sizes(&self) -> Vec<(&'static str, f64)> {
        TYPE_STEPS
            .iter()
            .map(|(name, step)| (*name, self.size(*step)))
            .collect()
    }

    /// `<prefix>-typography-font-size-<name>` custom properties.
    pub fn css_tokens(&self, prefix: &str) -> Vec<FlatToken> {
        self.sizes()
            .into_iter()
            .map(|(name, size)| {
                FlatToken::new(format!("{prefix}-typography-font-size-{name}"), format_px(size))
            })
            .collect()
    }
}

/// Linear spacing scale.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpacingScale {
    /// Size of multiplier 1 in px
    pub base: f64,
}

impl Default for SpacingScale {
    fn default() -> Self {
        Self { base: 4.0 }
    }
}

impl SpacingScale {
    pub fn new(base: f64) -> Self {
        Self { base }
    }

    pub fn size(&self, multiplier: f64) -> f64 {
        spacing_size(multiplier, self.base)
    }

    pub fn sizes(&self) -> Vec<(&'static str, f64)> {
        SPACING_STEPS
            .iter()
            .map(|(name, multiplier)| (*name, self.size(*multiplier)))
            .collect()
    }

    /// `<prefix>-spacing-<name>` custom properties.
    pub fn css_tokens(&self, prefix: &str) -> Vec<FlatToken> {
        self.sizes()
            .into_iter()
            .map(|(name, size)| FlatToken::new(format!("{prefix}-spacing-{name}"), format_px(size)))
            .collect()
    }
}
