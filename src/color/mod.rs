//! Colorimetry utilities.
//!
//! This module provides:
//! - CSS color parsing and hex formatting
//! - WCAG relative luminance, contrast ratio and compliance levels
//! - Contrast auto-fix suggestions
//! - Color vision deficiency simulation

pub mod colorblind;
pub mod contrast;
pub mod fix;
pub mod parse;

// Re-export primary types
pub use colorblind::{simulate, ColorMode};
pub use contrast::{
    contrast_ratio, contrast_ratio_rgb, meets_aa, meets_aaa, relative_luminance, wcag_level,
    WcagLevel, AAA_RATIO, AA_RATIO,
};
pub use fix::{suggest_fix, suggest_fix_aa, suggest_fix_rgb};
pub use parse::{parse_color, to_hex, try_parse_color, ColorParseError, Rgb};
