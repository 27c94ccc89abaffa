//! Integration tests for the stylesheet build pipeline.

use arcana_tokens::tokens::{self, ThemeCssGenerator, TokenSources};
use std::path::{Path, PathBuf};

fn token_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tokens")
}

#[test]
fn test_build_writes_all_outputs() {
    let out = tempfile::tempdir().unwrap();
    let written = tokens::build(&token_dir(), out.path(), &ThemeCssGenerator::new()).unwrap();

    assert_eq!(written.len(), 3);
    for path in &written {
        assert!(path.exists(), "{}", path.display());
    }

    let combined = std::fs::read_to_string(out.path().join("arcana.css")).unwrap();
    assert!(combined.starts_with("/**\n * Arcana UI — Design Tokens\n"));
    assert!(combined.contains("@import url('https://fonts.googleapis.com/css2?family=Inter"));
    assert!(combined.contains("  --arcana-color-stone-50: #fafaf9;"));
    assert!(combined.contains("  --arcana-spacing-0-5: 0.125rem;"));
    assert!(combined.contains("  --arcana-text-on-action: var(--arcana-color-white);"));
    assert!(combined.contains("  font-family: var(--arcana-typography-font-family-sans);"));
    assert!(combined.ends_with(r#"[data-theme="dark"] { color-scheme: dark; }"#));
    assert!(!combined.contains("--arcana-theme-name"));

    let light = std::fs::read_to_string(out.path().join("themes/light.css")).unwrap();
    assert!(light.starts_with("/* Arcana UI — Light Theme */\n:root, [data-theme=\"light\"] {\n"));
    let dark = std::fs::read_to_string(out.path().join("themes/dark.css")).unwrap();
    assert!(dark.starts_with("/* Arcana UI — Dark Theme */\n[data-theme=\"dark\"] {\n"));
}

#[test]
fn test_build_is_deterministic() {
    let sources = TokenSources::load_from_dir(&token_dir()).unwrap();
    let generator = ThemeCssGenerator::new();
    assert_eq!(generator.generate(&sources), generator.generate(&sources));
}

#[test]
fn test_sample_tokens_have_no_collisions() {
    let sources = TokenSources::load_from_dir(&token_dir()).unwrap();
    assert!(sources.collisions("--arcana").is_empty());
}

#[test]
fn test_custom_prefix_and_no_font_import() {
    let sources = TokenSources::load_from_dir(&token_dir()).unwrap();
    let css = ThemeCssGenerator::new()
        .with_prefix("--ui")
        .with_font_import(None)
        .combined_css(&sources);

    assert!(!css.contains("@import"));
    assert!(css.contains("  --ui-surface-primary: var(--arcana-color-stone-50);"));
    assert!(css.contains("  color: var(--ui-text-primary);"));
}

#[test]
fn test_missing_sources_fail() {
    let empty = tempfile::tempdir().unwrap();
    let out = tempfile::tempdir().unwrap();
    assert!(tokens::build(empty.path(), out.path(), &ThemeCssGenerator::new()).is_err());
}
