//! Unit tests for luminance, contrast and fix suggestions.

use arcana_tokens::color::{
    contrast_ratio, contrast_ratio_rgb, meets_aa, meets_aaa, parse_color, relative_luminance,
    suggest_fix, suggest_fix_rgb, wcag_level, Rgb, WcagLevel, AA_RATIO,
};
use proptest::prelude::*;

fn arb_rgb() -> impl Strategy<Value = Rgb> {
    any::<[u8; 3]>().prop_map(Rgb::from)
}

#[test]
fn test_extremes() {
    assert_eq!(relative_luminance(Rgb::BLACK), 0.0);
    assert!((relative_luminance(Rgb::WHITE) - 1.0).abs() < 1e-12);
    assert!((contrast_ratio("#000", "#fff").unwrap() - 21.0).abs() < 1e-9);
    assert_eq!(contrast_ratio("#777", "#777"), Some(1.0));
}

#[test]
fn test_known_pairs() {
    let ratio = contrast_ratio("#767676", "#ffffff").unwrap();
    assert!(ratio >= AA_RATIO && ratio < 4.6);
    assert_eq!(wcag_level(ratio), WcagLevel::Aa);
    assert_eq!(wcag_level(contrast_ratio("#595959", "#ffffff").unwrap()), WcagLevel::Aaa);
    assert_eq!(wcag_level(contrast_ratio("#777777", "#ffffff").unwrap()), WcagLevel::Fail);
}

#[test]
fn test_unparseable_ratio() {
    assert_eq!(contrast_ratio("#fff", "transparent"), None);
    assert_eq!(contrast_ratio("", "#fff"), None);
}

#[test]
fn test_fix_examples() {
    let fix = suggest_fix("#999999", "#ffffff", AA_RATIO).unwrap();
    assert!(contrast_ratio(&fix, "#ffffff").unwrap() >= AA_RATIO);
    // Already passing: returned unchanged.
    assert_eq!(suggest_fix("#000000", "#ffffff", AA_RATIO).as_deref(), Some("#000000"));
    // Dark background: lightened.
    let fix = suggest_fix("#333333", "#000000", AA_RATIO).unwrap();
    assert!(relative_luminance(parse_color(&fix).unwrap()) > 0.1);
    assert_eq!(suggest_fix("#333", "nope", AA_RATIO), None);
}

proptest! {
    #[test]
    fn threshold_checks_agree_with_level(a in arb_rgb(), b in arb_rgb()) {
        let level = wcag_level(contrast_ratio_rgb(a, b));
        prop_assert_eq!(meets_aa(a, b), level.passes());
        prop_assert_eq!(meets_aaa(a, b), level == WcagLevel::Aaa);
    }

    #[test]
    fn contrast_is_symmetric(a in arb_rgb(), b in arb_rgb()) {
        prop_assert_eq!(contrast_ratio_rgb(a, b), contrast_ratio_rgb(b, a));
    }

    #[test]
    fn contrast_in_range(a in arb_rgb(), b in arb_rgb()) {
        let ratio = contrast_ratio_rgb(a, b);
        prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio));
    }

    #[test]
    fn darker_gray_contrasts_more_on_white(a in any::<u8>(), b in any::<u8>()) {
        let (dark, light) = (a.min(b), a.max(b));
        let gray = |v: u8| Rgb::new(v, v, v);
        prop_assert!(contrast_ratio_rgb(gray(dark), Rgb::WHITE) >= contrast_ratio_rgb(gray(light), Rgb::WHITE));
    }

    #[test]
    fn fix_reaches_target_or_polarity(fg in arb_rgb(), bg in arb_rgb(), target in 1.0f64..=7.0) {
        let fix = suggest_fix_rgb(fg, bg, target);
        let polarity = if relative_luminance(bg) < 0.5 { Rgb::WHITE } else { Rgb::BLACK };
        prop_assert!(contrast_ratio_rgb(fix, bg) >= target || fix == polarity);
    }

    #[test]
    fn level_matches_thresholds(a in arb_rgb(), b in arb_rgb()) {
        let ratio = contrast_ratio_rgb(a, b);
        let expected = if ratio >= 7.0 {
            WcagLevel::Aaa
        } else if ratio >= 4.5 {
            WcagLevel::Aa
        } else {
            WcagLevel::Fail
        };
        prop_assert_eq!(wcag_level(ratio), expected);
    }
}
