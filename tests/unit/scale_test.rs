//! Unit tests for type and spacing scales.

use arcana_tokens::theme::scale::{format_px, ratio, type_size, SpacingScale, TypeScale};
use proptest::prelude::*;

#[test]
fn test_major_third_sizes() {
    let scale = TypeScale::new(16.0, ratio::MAJOR_THIRD);
    let sizes: Vec<String> = scale.sizes().iter().map(|(_, px)| format_px(*px)).collect();
    assert_eq!(
        sizes,
        vec!["61.04px", "48.83px", "39.06px", "31.25px", "25px", "20px", "16px", "12.8px", "10.24px"]
    );
}

#[test]
fn test_spacing_defaults() {
    let scale = SpacingScale::default();
    let tokens = scale.css_tokens("--arcana");
    assert_eq!(tokens.len(), 13);
    assert_eq!(tokens[0].value, "0px");
    assert_eq!(tokens[1].name, "--arcana-spacing-px");
    assert_eq!(tokens[1].value, "1px");
    assert_eq!(tokens[12].value, "64px");
}

#[test]
fn test_golden_ratio() {
    assert!((type_size(10.0, ratio::GOLDEN_RATIO, 2) - 26.17924).abs() < 1e-9);
}

proptest! {
    #[test]
    fn type_scale_monotonic(base in 8.0f64..32.0, r in 1.01f64..2.0, step in -4i32..8) {
        let scale = TypeScale::new(base, r);
        prop_assert!(scale.size(step + 1) > scale.size(step));
    }

    #[test]
    fn spacing_is_linear(base in 1.0f64..16.0, m in 0.0f64..32.0) {
        let scale = SpacingScale::new(base);
        prop_assert!((scale.size(m * 2.0) - 2.0 * scale.size(m)).abs() < 1e-9);
    }
}
