//! Integration tests for the contrast audit against generated tokens.

use arcana_tokens::theme::preset::{BRUTALIST, DARK, LIGHT, TERMINAL};
use arcana_tokens::theme::{
    preset_by_id, AuditSummary, InMemoryStyleRoot, OverallGrade, ThemeRuntime, ThemeStylesheet,
    CONTRAST_PAIRS,
};
use arcana_tokens::tokens::TokenSources;
use std::path::Path;

fn runtime() -> ThemeRuntime<InMemoryStyleRoot> {
    let sources = TokenSources::load_from_dir(&Path::new(env!("CARGO_MANIFEST_DIR")).join("tokens")).unwrap();
    ThemeRuntime::new(InMemoryStyleRoot::with_stylesheet(ThemeStylesheet::from_sources(
        &sources, "--arcana",
    )))
}

#[test]
fn test_light_theme_passes() {
    let mut rt = runtime();
    rt.apply_preset(preset_by_id(LIGHT).unwrap());

    let results = rt.audit();
    assert_eq!(results.len(), CONTRAST_PAIRS.len());
    assert_eq!(results[0].fg_color, "#1c1917");
    assert_eq!(results[0].bg_color, "#fafaf9");

    let summary = AuditSummary::from_results(&results);
    assert_eq!(summary.checkable, 12);
    assert_eq!(summary.grade, OverallGrade::Aa);
    assert!(results.iter().all(|r| r.fix_suggestion.is_none()));
}

#[test]
fn test_dark_border_fails_and_fix_applies() {
    let mut rt = runtime();
    rt.apply_preset(preset_by_id(DARK).unwrap());

    let results = rt.audit();
    let summary = AuditSummary::from_results(&results);
    assert_eq!(summary.grade, OverallGrade::Partial);
    assert_eq!(summary.grade.to_string(), "AA*");

    let border = results
        .iter()
        .find(|r| r.fg_var == "--arcana-border-default")
        .unwrap();
    assert_eq!(border.level_label(), "Fail");
    let fix = border.fix_suggestion.clone().unwrap();

    rt.apply_fix(&border.fg_var, &fix);
    let after = AuditSummary::from_results(&rt.audit());
    assert_eq!(after.failing, 0);

    // The fix is an override: the next preset drops it.
    rt.apply_preset(preset_by_id(DARK).unwrap());
    assert_eq!(rt.get_css_var("--arcana-border-default"), "#78716c");
}

#[test]
fn test_custom_presets_are_fully_checkable() {
    for id in [TERMINAL, BRUTALIST] {
        let mut rt = runtime();
        rt.apply_preset(preset_by_id(id).unwrap());
        let summary = AuditSummary::from_results(&rt.audit());
        assert_eq!(summary.checkable, 12, "{id}");
    }
}

#[test]
fn test_audit_without_stylesheet_is_not_applicable() {
    let rt = ThemeRuntime::new(InMemoryStyleRoot::new());
    let results = rt.audit();
    assert!(results.iter().all(|r| r.ratio.is_none() && r.level_label() == "N/A"));
    assert_eq!(AuditSummary::from_results(&results).grade, OverallGrade::NotApplicable);
}
