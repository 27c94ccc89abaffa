//! Runtime theming.
//!
//! This module provides:
//! - The built-in preset catalog
//! - A style root abstraction with an in-memory computed-value model
//! - Preset application with full revert of the previous overrides
//! - Type and spacing scales
//! - Contrast audit and token editor on top of the live values

pub mod audit;
pub mod editor;
pub mod preset;
pub mod runtime;
pub mod scale;
pub mod style_root;

// Re-export primary types
pub use audit::{AuditSummary, CheckResult, ContrastPair, OverallGrade, CONTRAST_PAIRS};
pub use editor::{
    detect_font_option, editor_vars, read_radius_px, EditorState, EditorToken, FontOption,
    TokenGroup, FONT_OPTIONS, FONT_SANS_VAR, RADIUS_VAR, TOKEN_GROUPS,
};
pub use preset::{preset_by_id, presets, ThemeMode, ThemePreset};
pub use runtime::{ThemeRuntime, PRESET_STYLE_ID};
pub use scale::{SpacingScale, TypeScale};
pub use style_root::{InMemoryStyleRoot, StyleHandle, StyleRoot, ThemeStylesheet, THEME_ATTRIBUTE};
