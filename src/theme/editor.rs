//! Token editor: grouped color variables, radius and font family.
//!
//! [`EditorState`] is a snapshot read back from the style root; edits go
//! through the single-key override path so that the next preset clears them.

use super::preset::{preset_by_id, LIGHT};
use super::runtime::ThemeRuntime;
use super::style_root::StyleRoot;

/// Corner radius custom property.
pub const RADIUS_VAR: &str = "--arcana-component-radius";

/// Sans-serif font stack custom property.
pub const FONT_SANS_VAR: &str = "--arcana-typography-font-family-sans";

/// Radius used when the current value has no leading integer.
pub const DEFAULT_RADIUS_PX: u32 = 8;

/// A labelled custom property shown in the editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorToken {
    pub label: &'static str,
    pub var: &'static str,
}

/// A collapsible group of editor tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenGroup {
    pub label: &'static str,
    pub tokens: &'static [EditorToken],
}

const fn token(label: &'static str, var: &'static str) -> EditorToken {
    EditorToken { label, var }
}

pub const TOKEN_GROUPS: [TokenGroup; 5] = [
    TokenGroup {
        label: "Surface",
        tokens: &[
            token("Background", "--arcana-surface-primary"),
            token("Secondary", "--arcana-surface-secondary"),
            token("Card / Elevated", "--arcana-surface-elevated"),
        ],
    },
    TokenGroup {
        label: "Action",
        tokens: &[
            token("Primary", "--arcana-action-primary"),
            token("Primary Hover", "--arcana-action-primary-hover"),
            token("Danger", "--arcana-action-danger"),
        ],
    },
    TokenGroup {
        label: "Text",
        tokens: &[
            token("Primary", "--arcana-text-primary"),
            token("Secondary", "--arcana-text-secondary"),
            token("Muted", "--arcana-text-muted"),
            token("On Action", "--arcana-text-on-action"),
        ],
    },
    TokenGroup {
        label: "Border",
        tokens: &[
            token("Default", "--arcana-border-default"),
            token("Focus Ring", "--arcana-border-focus"),
        ],
    },
    TokenGroup {
        label: "Feedback",
        tokens: &[
            token("Success", "--arcana-feedback-success"),
            token("Warning", "--arcana-feedback-warning"),
            token("Error", "--arcana-feedback-error"),
            token("Info", "--arcana-feedback-info"),
        ],
    },
];

/// A selectable font stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontOption {
    pub label: &'static str,
    pub value: &'static str,
}

pub const FONT_OPTIONS: [FontOption; 5] = [
    FontOption {
        label: "Inter (default)",
        value: "Inter, system-ui, -apple-system, sans-serif",
    },
    FontOption {
        label: "Monospace",
        value: "'JetBrains Mono', 'Cascadia Code', 'Fira Code', monospace",
    },
    FontOption {
        label: "Serif",
        value: "Georgia, 'Times New Roman', Times, serif",
    },
    FontOption {
        label: "System UI",
        value: r#"-apple-system, BlinkMacSystemFont, "Segoe UI", Roboto, sans-serif"#,
    },
    FontOption {
        label: "Humanist",
        value: "'Gill Sans', 'Trebuchet MS', Verdana, Geneva, sans-serif",
    },
];

/// Every color variable of the editor, group by group.
pub fn editor_vars() -> impl Iterator<Item = &'static str> {
    TOKEN_GROUPS
        .iter()
        .flat_map(|group| group.tokens.iter().map(|t| t.var))
}

/// The font option whose stack starts with the first six characters of
/// `current`, lowercased. Falls back to the first option.
pub fn detect_font_option(current: &str) -> &'static FontOption {
    let needle: String = current.trim().to_lowercase().chars().take(6).collect();
    FONT_OPTIONS
        .iter()
        .find(|opt| opt.value.to_lowercase().starts_with(&needle))
        .unwrap_or(&FONT_OPTIONS[0])
}

/// Leading integer of a radius value such as `12px`.
///
/// Values without one (empty, `auto`, `var(...)`) give [`DEFAULT_RADIUS_PX`].
pub fn read_radius_px(value: &str) -> u32 {
    let digits: String = value
        .trim()
        .chars()
        .take_while(|c| c.is_ascii_digit())
        .collect();
    digits.parse().unwrap_or(DEFAULT_RADIUS_PX)
}

/// Current editor values read from the style root.
#[derive(Debug, Clone, PartialEq)]
pub struct EditorState {
    /// `(var, computed value)` for every editor variable
    pub values: Vec<(String, String)>,
    pub radius_px: u32,
    pub font: &'static FontOption,
}

impl EditorState {
    pub fn read<R: StyleRoot>(runtime: &ThemeRuntime<R>) -> Self {
        let values = editor_vars()
            .map(|var| (var.to_string(), runtime.get_css_var(var)))
            .collect();

        Self {
            values,
            radius_px: read_radius_px(&runtime.get_css_var(RADIUS_VAR)),
            font: detect_font_option(&runtime.get_css_var(FONT_SANS_VAR)),
        }
    }

    pub fn value(&self, var: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(name, _)| name == var)
            .map(|(_, value)| value.as_str())
    }

    /// Pretty-printed JSON object of every editor variable, then radius and
    /// font family, in that order.
    pub fn export_json(&self) -> serde_json::Result<String> {
        let mut map = serde_json::Map::new();
        for (var, value) in &self.values {
            map.insert(var.clone(), value.clone().into());
        }
        map.insert(RADIUS_VAR.to_string(), format!("{}px", self.radius_px).into());
        map.insert(FONT_SANS_VAR.to_string(), self.font.value.into());
        serde_json::to_string_pretty(&map)
    }
}

impl<R: StyleRoot> ThemeRuntime<R> {
    pub fn set_radius(&mut self, px: u32) {
        self.set_token(RADIUS_VAR, &format!("{px}px"));
    }

    pub fn set_font_family(&mut self, font: &FontOption) {
        self.set_token(FONT_SANS_VAR, font.value);
    }

    /// Back to the stock light theme.
    pub fn reset_theme(&mut self) {
        if let Some(light) = preset_by_id(LIGHT) {
            self.apply_preset(light);
        }
    }

    /// Export the current editor values as JSON.
    pub fn export_theme(&self) -> serde_json::Result<String> {
        EditorState::read(self).export_json()
    }
}
