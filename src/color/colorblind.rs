//! Color vision deficiency simulation.
//!
//! Each mode carries the 4x5 `feColorMatrix` used for the preview filter. Only
//! the RGB-to-RGB part applies to opaque colors; alpha passes through.

use super::parse::Rgb;
use serde::{Deserialize, Serialize};

/// Color vision mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Normal color vision
    #[default]
    Normal,
    /// Red-blind (missing L cones)
    Protanopia,
    /// Green-blind (missing M cones)
    Deuteranopia,
    /// Blue-blind (missing S cones)
    Tritanopia,
    /// Total color blindness
    Achromatopsia,
}

impl ColorMode {
    pub const ALL: [ColorMode; 5] = [
        ColorMode::Normal,
        ColorMode::Protanopia,
        ColorMode::Deuteranopia,
        ColorMode::Tritanopia,
        ColorMode::Achromatopsia,
    ];

    /// Short identifier, also used for the SVG filter id (`cb-<id>`).
    pub fn id(&self) -> &'static str {
        match self {
            ColorMode::Normal => "none",
            ColorMode::Protanopia => "protanopia",
            ColorMode::Deuteranopia => "deuteranopia",
            ColorMode::Tritanopia => "tritanopia",
            ColorMode::Achromatopsia => "achromatopsia",
        }
    }

    /// RGB rows of the color matrix; `None` for normal vision.
    fn rows(&self) -> Option<[[f64; 3]; 3]> {
        match self {
            ColorMode::Normal => None,
            ColorMode::Protanopia => Some([
                [0.567, 0.433, 0.0],
                [0.558, 0.442, 0.0],
                [0.0, 0.242, 0.758],
            ]),
            ColorMode::Deuteranopia => Some([
                [0.625, 0.375, 0.0],
                [0.7, 0.3, 0.0],
                [0.0, 0.3, 0.7],
            ]),
            ColorMode::Tritanopia => Some([
                [0.95, 0.05, 0.0],
                [0.0, 0.433, 0.567],
                [0.0, 0.475, 0.525],
            ]),
            ColorMode::Achromatopsia => Some([
                [0.299, 0.587, 0.114],
                [0.299, 0.587, 0.114],
                [0.299, 0.587, 0.114],
            ]),
        }
    }

    /// `feColorMatrix` `values` attribute text; empty for normal vision.
    pub fn filter_matrix(&self) -> String {
        let Some(rows) = self.rows() else {
            return String::new();
        };

        let mut out: Vec<String> = rows
            .iter()
            .map(|[r, g, b]| format!("{r},{g},{b},0,0"))
            .collect();
        out.push("0,0,0,1,0".to_string());
        out.join(" ")
    }
}

impl std::fmt::Display for ColorMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ColorMode::Normal => write!(f, "Normal"),
            ColorMode::Protanopia => write!(f, "Protanopia"),
            ColorMode::Deuteranopia => write!(f, "Deuteranopia"),
            ColorMode::Tritanopia => write!(f, "Tritanopia"),
            ColorMode::Achromatopsia => write!(f, "Achromatopsia"),
        }
    }
}

/// Approximate how `color` appears under `mode`.
pub fn simulate(color: Rgb, mode: ColorMode) -> Rgb {
    let Some(rows) = mode.rows() else {
        return color;
    };

    let [r, g, b] = color.channels().map(f64::from);
    let apply = |[kr, kg, kb]: [f64; 3]| (kr * r + kg * g + kb * b).round().clamp(0.0, 255.0) as u8;
    Rgb::new(apply(rows[0]), apply(rows[1]), apply(rows[2]))
}
