//! Arcana UI design tokens
//!
//! Builds namespaced CSS custom properties from JSON token trees and applies
//! theme presets at runtime. Provides WCAG contrast checking with fix
//! suggestions, type and spacing scales, and a contrast audit of the live
//! theme.

pub mod color;
pub mod storage;
pub mod theme;
pub mod tokens;

// Re-export commonly used types
pub use color::{contrast_ratio, parse_color, suggest_fix, wcag_level, Rgb, WcagLevel};
pub use storage::config::AppConfig;
pub use theme::{InMemoryStyleRoot, StyleRoot, ThemePreset, ThemeRuntime};
pub use tokens::{flatten, FlatToken, ThemeCssGenerator, TokenSources, TokenTree};
