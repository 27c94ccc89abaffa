//! Unit tests for color vision simulation.

use arcana_tokens::color::{simulate, ColorMode, Rgb};

#[test]
fn test_normal_is_identity() {
    let color = Rgb::new(12, 200, 99);
    assert_eq!(simulate(color, ColorMode::Normal), color);
}

#[test]
fn test_grays_survive_every_mode() {
    for mode in ColorMode::ALL {
        let out = simulate(Rgb::WHITE, mode);
        let [r, g, b] = out.channels();
        assert!(r >= 250 && g >= 250 && b >= 250, "{mode}: {out}");
        assert_eq!(simulate(Rgb::BLACK, mode), Rgb::BLACK, "{mode}");
    }
}

#[test]
fn test_achromatopsia_is_gray() {
    let [r, g, b] = simulate(Rgb::new(220, 40, 40), ColorMode::Achromatopsia).channels();
    assert_eq!(r, g);
    assert_eq!(g, b);
}

#[test]
fn test_filter_matrix() {
    assert!(ColorMode::Normal.filter_matrix().is_empty());
    let values = ColorMode::Protanopia.filter_matrix();
    assert_eq!(values.split([' ', ',']).count(), 20);
    assert!(values.ends_with("0,0,0,1,0"));
}
