//! Preset application with full revert of the previous override set.

use super::preset::ThemePreset;
use super::scale::{SpacingScale, TypeScale};
use super::style_root::{StyleHandle, StyleRoot, THEME_ATTRIBUTE};
use crate::tokens::{FlatToken, DEFAULT_PREFIX};

/// Id of the style node carrying a preset's raw CSS.
pub const PRESET_STYLE_ID: &str = "arcana-preset-override";

/// Owns a style root and the bookkeeping of what the last preset wrote to it.
///
/// Applying a preset replaces, never merges: every key written by the
/// previous preset (and every single-key override since) is removed first, so
/// the final state depends only on the last preset applied.
#[derive(Debug)]
pub struct ThemeRuntime<R: StyleRoot> {
    root: R,
    /// Keys written by the most recent preset
    applied_keys: Vec<String>,
    /// Keys written through [`ThemeRuntime::set_token`] since then
    overlay_keys: Vec<String>,
    injected_style: Option<StyleHandle>,
    active_preset: Option<String>,
}

impl<R: StyleRoot> ThemeRuntime<R> {
    pub fn new(root: R) -> Self {
        Self {
            root,
            applied_keys: Vec::new(),
            overlay_keys: Vec::new(),
            injected_style: None,
            active_preset: None,
        }
    }

    pub fn root(&self) -> &R {
        &self.root
    }

    pub fn into_root(self) -> R {
        self.root
    }

    /// Keys written by the most recently applied preset.
    pub fn applied_keys(&self) -> &[String] {
        &self.applied_keys
    }

    /// Keys written as single-key overrides since the last preset.
    pub fn overlay_keys(&self) -> &[String] {
        &self.overlay_keys
    }

    /// Id of the most recently applied preset.
    pub fn active_preset(&self) -> Option<&str> {
        self.active_preset.as_deref()
    }

    /// Apply `preset`, first reverting everything the previous one wrote.
    pub fn apply_preset(&mut self, preset: &ThemePreset) {
        // 1. Clear previous inline overrides, including ad-hoc ones.
        let cleared = self.applied_keys.len() + self.overlay_keys.len();
        for key in self.applied_keys.drain(..).chain(self.overlay_keys.drain(..)) {
            self.root.remove_property(&key);
        }

        // 2. Drop the previously injected raw CSS.
        if let Some(handle) = self.injected_style.take() {
            self.root.remove_style(handle);
        }

        // 3. Theme attribute; custom presets fall back to the base (light) values.
        match preset.data_theme {
            Some(mode) => self.root.set_attribute(THEME_ATTRIBUTE, mode.as_str()),
            None => self.root.remove_attribute(THEME_ATTRIBUTE),
        }

        // 4. Token overrides.
        for (name, value) in &preset.tokens {
            self.root.set_property(name, value);
            self.applied_keys.push(name.clone());
        }

        // 5. Raw CSS; blank CSS injects no node.
        if let Some(css) = preset.global_css.as_deref().filter(|css| !css.trim().is_empty()) {
            self.injected_style = Some(self.root.inject_style(PRESET_STYLE_ID, css));
        }

        self.active_preset = Some(preset.id.clone());
        tracing::debug!(
            "Applied preset {} ({} keys set, {} cleared)",
            preset.id,
            self.applied_keys.len(),
            cleared
        );
    }

    /// Write one custom property outside of any preset.
    ///
    /// The key is remembered only so that the next preset clears it.
    pub fn set_token(&mut self, name: &str, value: &str) {
        self.root.set_property(name, value);
        if !self.overlay_keys.iter().any(|k| k == name) {
            self.overlay_keys.push(name.to_string());
        }
    }

    /// Write a batch of custom properties through [`ThemeRuntime::set_token`].
    pub fn apply_tokens(&mut self, tokens: &[FlatToken]) {
        for token in tokens {
            self.set_token(&token.name, &token.value);
        }
    }

    /// Write the type scale as `--arcana-typography-font-size-*`.
    pub fn apply_type_scale(&mut self, scale: &TypeScale) {
        self.apply_tokens(&scale.css_tokens(DEFAULT_PREFIX));
    }

    /// Write the spacing scale as `--arcana-spacing-*`.
    pub fn apply_spacing_scale(&mut self, scale: &SpacingScale) {
        self.apply_tokens(&scale.css_tokens(DEFAULT_PREFIX));
    }

    /// Current computed value of a custom property, trimmed.
    ///
    /// Empty when the property is not defined.
    pub fn get_css_var(&self, name: &str) -> String {
        self.root
            .computed_property(name)
            .map(|value| value.trim().to_string())
            .unwrap_or_default()
    }
}
