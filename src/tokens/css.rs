//! Theme stylesheet generation.
//!
//! Output is a pure function of the three token documents and the generator
//! settings: the same inputs always produce byte-identical CSS.

use super::build::TokenSources;
use super::flatten::{flatten, flatten_theme, FlatToken, DEFAULT_PREFIX};
use super::tree::TokenTree;

/// Selector for the light (default) theme block.
pub const LIGHT_SELECTOR: &str = r#":root, [data-theme="light"]"#;
/// Selector for the dark theme block.
pub const DARK_SELECTOR: &str = r#"[data-theme="dark"]"#;

/// Default web font stylesheet imported by the combined CSS.
pub const DEFAULT_FONT_IMPORT: &str = "https://fonts.googleapis.com/css2?family=Inter:wght@400;500;600;700&family=JetBrains+Mono:wght@400;500&display=swap";

/// Default version written into the combined CSS header.
pub const DEFAULT_VERSION: &str = "0.1.0";

/// The generated stylesheets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeCssOutput {
    /// Base tokens, both themes and the global reset.
    pub combined: String,
    /// Standalone light theme.
    pub light: String,
    /// Standalone dark theme.
    pub dark: String,
}

/// Builds stylesheet text from token trees.
#[derive(Debug, Clone)]
pub struct ThemeCssGenerator {
    prefix: String,
    version: String,
    font_import: Option<String>,
}

impl Default for ThemeCssGenerator {
    fn default() -> Self {
        Self {
            prefix: DEFAULT_PREFIX.to_string(),
            version: DEFAULT_VERSION.to_string(),
            font_import: Some(DEFAULT_FONT_IMPORT.to_string()),
        }
    }
}

impl ThemeCssGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = prefix.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    /// Set or drop the `@import` of the web font stylesheet.
    pub fn with_font_import(mut self, url: Option<String>) -> Self {
        self.font_import = url;
        self
    }

    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    fn var(&self, suffix: &str) -> String {
        format!("var({}-{})", self.prefix, suffix)
    }

    /// `:root { ... }` block of the primitive scale.
    pub fn base_css(&self, base: &TokenTree) -> String {
        rule_block(":root", &flatten(base, &self.prefix))
    }

    /// One rule block of a semantic theme under `selector`.
    pub fn theme_css(&self, theme: &TokenTree, selector: &str) -> String {
        rule_block(selector, &flatten_theme(theme, &self.prefix))
    }

    /// Base + light + dark + global reset in a single stylesheet.
    pub fn combined_css(&self, sources: &TokenSources) -> String {
        let mut sections: Vec<String> = vec![
            "/**".into(),
            " * Arcana UI — Design Tokens".into(),
            " * Generated from JSON source. Do not edit directly.".into(),
            format!(" * Version: {}", self.version),
            " */".into(),
            String::new(),
        ];

        if let Some(url) = &self.font_import {
            sections.push("/* ─── Google Fonts Import ─── */".into());
            sections.push(format!("@import url('{url}');"));
            sections.push(String::new());
        }

        sections.extend([
            "/* ─── Base Scale Tokens ─── */".to_string(),
            self.base_css(&sources.base),
            "/* ─── Light Theme (default) ─── */".to_string(),
            self.theme_css(&sources.light, LIGHT_SELECTOR),
            "/* ─── Dark Theme ─── */".to_string(),
            self.theme_css(&sources.dark, DARK_SELECTOR),
            String::new(),
        ]);

        let reset = [
            "/* ─── Global Reset + Base Styles ─── */".to_string(),
            "*, *::before, *::after {".into(),
            "  box-sizing: border-box;".into(),
            "}".into(),
            String::new(),
            "body {".into(),
            "  margin: 0;".into(),
            format!("  font-family: {};", self.var("typography-font-family-sans")),
            format!("  font-size: {};", self.var("typography-font-size-base")),
            format!("  line-height: {};", self.var("typography-line-height-normal")),
            format!("  color: {};", self.var("text-primary")),
            format!("  background-color: {};", self.var("surface-primary")),
            "  -webkit-font-smoothing: antialiased;".into(),
            "  -moz-osx-font-smoothing: grayscale;".into(),
            "}".into(),
            String::new(),
            "/* ─── Focus Visible Utility ─── */".into(),
            ":focus-visible {".into(),
            format!("  outline: 2px solid {};", self.var("border-focus")),
            "  outline-offset: 2px;".into(),
            "}".into(),
            String::new(),
            "/* ─── Color Scheme ─── */".into(),
            format!("{LIGHT_SELECTOR} {{ color-scheme: light; }}"),
            format!("{DARK_SELECTOR} {{ color-scheme: dark; }}"),
        ];
        sections.extend(reset);

        sections.join("\n")
    }

    /// Light theme as its own stylesheet.
    pub fn light_css(&self, light: &TokenTree) -> String {
        [
            "/* Arcana UI — Light Theme */".to_string(),
            self.theme_css(light, LIGHT_SELECTOR),
        ]
        .join("\n")
    }

    /// Dark theme as its own stylesheet.
    pub fn dark_css(&self, dark: &TokenTree) -> String {
        [
            "/* Arcana UI — Dark Theme */".to_string(),
            self.theme_css(dark, DARK_SELECTOR),
        ]
        .join("\n")
    }

    /// Every distributable stylesheet.
    pub fn generate(&self, sources: &TokenSources) -> ThemeCssOutput {
        ThemeCssOutput {
            combined: self.combined_css(sources),
            light: self.light_css(&sources.light),
            dark: self.dark_css(&sources.dark),
        }
    }
}

fn rule_block(selector: &str, tokens: &[FlatToken]) -> String {
    let lines: Vec<String> = tokens.iter().map(FlatToken::declaration).collect();
    format!("{selector} {{\n{}\n}}\n", lines.join("\n"))
}
