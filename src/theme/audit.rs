//! Contrast audit of the live theme.
//!
//! Reads foreground/background pairs back from the style root, grades each
//! pair, and suggests a fix for anything below AA.

use super::runtime::ThemeRuntime;
use super::style_root::StyleRoot;
use crate::color::{contrast_ratio, suggest_fix_aa, wcag_level, WcagLevel, AA_RATIO};
use serde::Serialize;

/// A foreground/background pair of custom properties to check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContrastPair {
    pub label: &'static str,
    pub fg_var: &'static str,
    pub bg_var: &'static str,
}

const fn pair(label: &'static str, fg_var: &'static str, bg_var: &'static str) -> ContrastPair {
    ContrastPair {
        label,
        fg_var,
        bg_var,
    }
}

/// The pairs the playground audits.
pub const CONTRAST_PAIRS: [ContrastPair; 12] = [
    pair("Body text / Background", "--arcana-text-primary", "--arcana-surface-primary"),
    pair("Secondary text / Background", "--arcana-text-secondary", "--arcana-surface-primary"),
    pair("Muted text / Background", "--arcana-text-muted", "--arcana-surface-primary"),
    pair("Body text / Secondary surface", "--arcana-text-primary", "--arcana-surface-secondary"),
    pair("Body text / Card surface", "--arcana-text-primary", "--arcana-surface-elevated"),
    pair("Button label / Primary", "--arcana-text-on-action", "--arcana-action-primary"),
    pair("Button label / Danger", "--arcana-text-on-danger", "--arcana-action-danger"),
    pair("Success text / Success bg", "--arcana-feedback-success-text", "--arcana-feedback-success-bg"),
    pair("Warning text / Warning bg", "--arcana-feedback-warning-text", "--arcana-feedback-warning-bg"),
    pair("Error text / Error bg", "--arcana-feedback-error-text", "--arcana-feedback-error-bg"),
    pair("Info text / Info bg", "--arcana-feedback-info-text", "--arcana-feedback-info-bg"),
    pair("Border / Background", "--arcana-border-default", "--arcana-surface-primary"),
];

/// Outcome of one contrast check.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckResult {
    pub label: String,
    pub fg_var: String,
    pub bg_var: String,
    pub fg_color: String,
    pub bg_color: String,
    /// `None` when either color is unparseable
    pub ratio: Option<f64>,
    /// `None` exactly when `ratio` is `None`
    pub level: Option<WcagLevel>,
    /// Suggested foreground when the ratio is below AA
    pub fix_suggestion: Option<String>,
}

impl CheckResult {
    /// Check one pair of already-resolved colors.
    pub fn evaluate(pair: &ContrastPair, fg_color: String, bg_color: String) -> Self {
        let ratio = contrast_ratio(&fg_color, &bg_color);
        let level = ratio.map(wcag_level);
        let fix_suggestion = match ratio {
            Some(r) if r < AA_RATIO => suggest_fix_aa(&fg_color, &bg_color),
            _ => None,
        };

        Self {
            label: pair.label.to_string(),
            fg_var: pair.fg_var.to_string(),
            bg_var: pair.bg_var.to_string(),
            fg_color,
            bg_color,
            ratio,
            level,
            fix_suggestion,
        }
    }

    /// Level label; `N/A` for unparseable pairs.
    pub fn level_label(&self) -> &'static str {
        self.level.map_or("N/A", |level| level.as_str())
    }

    /// Ratio as `4.5:1`; a dash placeholder when unknown.
    pub fn ratio_label(&self) -> String {
        self.ratio
            .map_or_else(|| "—".to_string(), |r| format!("{r:.1}:1"))
    }
}

/// Overall grade of an audit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum OverallGrade {
    /// Nothing could be checked
    NotApplicable,
    Aaa,
    Aa,
    /// Some pairs pass and some fail
    Partial,
    Fail,
}

impl std::fmt::Display for OverallGrade {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallGrade::NotApplicable => write!(f, "N/A"),
            OverallGrade::Aaa => write!(f, "AAA"),
            OverallGrade::Aa => write!(f, "AA"),
            OverallGrade::Partial => write!(f, "AA*"),
            OverallGrade::Fail => write!(f, "Fail"),
        }
    }
}

/// Counts over the checkable (parseable) results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AuditSummary {
    pub checkable: usize,
    pub passing: usize,
    pub failing: usize,
    pub aaa: usize,
    pub grade: OverallGrade,
}

impl AuditSummary {
    pub fn from_results(results: &[CheckResult]) -> Self {
        let levels: Vec<WcagLevel> = results.iter().filter_map(|r| r.level).collect();
        let checkable = levels.len();
        let passing = levels.iter().filter(|l| l.passes()).count();
        let aaa = levels.iter().filter(|l| **l == WcagLevel::Aaa).count();
        let failing = checkable - passing;

        let grade = if checkable == 0 {
            OverallGrade::NotApplicable
        } else if aaa == checkable {
            OverallGrade::Aaa
        } else if passing == checkable {
            OverallGrade::Aa
        } else if failing == checkable {
            OverallGrade::Fail
        } else {
            OverallGrade::Partial
        };

        Self {
            checkable,
            passing,
            failing,
            aaa,
            grade,
        }
    }

    /// Share of checkable pairs that pass, in [0, 1].
    pub fn pass_rate(&self) -> f64 {
        if self.checkable == 0 {
            0.0
        } else {
            self.passing as f64 / self.checkable as f64
        }
    }
}

impl<R: StyleRoot> ThemeRuntime<R> {
    /// Audit the given pairs against the current computed values.
    pub fn audit_pairs(&self, pairs: &[ContrastPair]) -> Vec<CheckResult> {
        pairs
            .iter()
            .map(|pair| {
                CheckResult::evaluate(pair, self.get_css_var(pair.fg_var), self.get_css_var(pair.bg_var))
            })
            .collect()
    }

    /// Audit [`CONTRAST_PAIRS`].
    pub fn audit(&self) -> Vec<CheckResult> {
        self.audit_pairs(&CONTRAST_PAIRS)
    }

    /// Accept a fix suggestion by overriding the foreground variable.
    pub fn apply_fix(&mut self, fg_var: &str, color: &str) {
        tracing::info!("Applying contrast fix {} = {}", fg_var, color);
        self.set_token(fg_var, color);
    }
}
