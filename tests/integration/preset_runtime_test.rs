//! Integration tests for preset application.

use arcana_tokens::theme::preset::{DARK, GLASS, LIGHT, RETRO98, TERMINAL};
use arcana_tokens::theme::{
    preset_by_id, presets, InMemoryStyleRoot, ThemePreset, ThemeRuntime, ThemeStylesheet,
    THEME_ATTRIBUTE,
};
use arcana_tokens::tokens::TokenSources;
use proptest::prelude::*;
use std::path::Path;

fn stylesheet() -> ThemeStylesheet {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tokens");
    ThemeStylesheet::from_sources(&TokenSources::load_from_dir(&dir).unwrap(), "--arcana")
}

/// Observable state of the root for a fixed set of names.
fn snapshot(rt: &ThemeRuntime<InMemoryStyleRoot>) -> (Vec<String>, Option<String>, Vec<String>) {
    let values = ["--arcana-surface-primary", "--arcana-text-primary", "--arcana-component-radius"]
        .iter()
        .map(|name| rt.get_css_var(name))
        .collect();
    let theme = rt.root().attribute(THEME_ATTRIBUTE).map(str::to_string);
    let styles = rt
        .root()
        .injected_styles()
        .iter()
        .map(|s| s.css.clone())
        .collect();
    (values, theme, styles)
}

#[test]
fn test_switch_back_restores_light_values() {
    let mut rt = ThemeRuntime::new(InMemoryStyleRoot::with_stylesheet(stylesheet()));
    rt.apply_preset(preset_by_id(LIGHT).unwrap());
    let light = snapshot(&rt);
    assert_eq!(light.0[0], "#fafaf9");

    rt.apply_preset(preset_by_id(TERMINAL).unwrap());
    assert_eq!(rt.get_css_var("--arcana-surface-primary"), "#0d1117");
    assert_eq!(rt.root().attribute(THEME_ATTRIBUTE), None);

    rt.apply_preset(preset_by_id(LIGHT).unwrap());
    assert_eq!(snapshot(&rt), light);
    assert!(rt.root().inline_properties().is_empty());
}

#[test]
fn test_dark_preset_uses_dark_block() {
    let mut rt = ThemeRuntime::new(InMemoryStyleRoot::with_stylesheet(stylesheet()));
    rt.apply_preset(preset_by_id(DARK).unwrap());
    assert_eq!(rt.get_css_var("--arcana-surface-primary"), "#0c0a09");
    // Dark block leaves the radius alone; light value shows through.
    assert_eq!(rt.get_css_var("--arcana-component-radius"), "8px");
}

#[test]
fn test_custom_preset_from_export() {
    let mut rt = ThemeRuntime::new(InMemoryStyleRoot::with_stylesheet(stylesheet()));
    rt.apply_preset(preset_by_id(RETRO98).unwrap());
    let exported = rt.export_theme().unwrap();

    let custom = ThemePreset::from_export_json("saved", "Saved", &exported).unwrap();
    rt.apply_preset(preset_by_id(GLASS).unwrap());
    rt.apply_preset(&custom);

    assert_eq!(
        rt.get_css_var("--arcana-surface-primary"),
        preset_by_id(RETRO98).unwrap().token("--arcana-surface-primary").unwrap()
    );
    assert!(rt.root().injected_styles().is_empty());
}

#[test]
fn test_every_preset_token_reads_back() {
    let mut rt = ThemeRuntime::new(InMemoryStyleRoot::with_stylesheet(stylesheet()));
    // Apply each preset on top of its predecessor so stale keys would show.
    for preset in presets().iter().chain(presets().iter().rev()) {
        rt.apply_preset(preset);
        for (name, value) in &preset.tokens {
            assert_eq!(
                rt.get_css_var(name),
                value.trim(),
                "{} after applying {}",
                name,
                preset.id
            );
        }
        assert_eq!(rt.applied_keys().len(), preset.tokens.len(), "{}", preset.id);
    }
}

proptest! {
    #[test]
    fn last_preset_wins(history in prop::collection::vec(0..presets().len(), 0..6), last in 0..presets().len()) {
        let mut replayed = ThemeRuntime::new(InMemoryStyleRoot::with_stylesheet(stylesheet()));
        for index in history {
            replayed.apply_preset(&presets()[index]);
            replayed.set_token("--arcana-text-primary", "#abcdef");
        }
        replayed.apply_preset(&presets()[last]);

        let mut fresh = ThemeRuntime::new(InMemoryStyleRoot::with_stylesheet(stylesheet()));
        fresh.apply_preset(&presets()[last]);

        prop_assert_eq!(snapshot(&replayed), snapshot(&fresh));
        prop_assert_eq!(replayed.root().inline_properties(), fresh.root().inline_properties());
    }
}
