//! Arcana UI design tokens
//!
//! Command-line entry point: stylesheet build, contrast checks, preset audit
//! and scale listing.

use anyhow::{bail, Context, Result};
use arcana_tokens::color::{contrast_ratio, meets_aa, meets_aaa, parse_color, suggest_fix, wcag_level};
use arcana_tokens::storage::config::{load_config, AppConfig};
use arcana_tokens::theme::{
    preset_by_id, presets, AuditSummary, InMemoryStyleRoot, SpacingScale, ThemeRuntime,
    ThemeStylesheet, TypeScale,
};
use arcana_tokens::tokens::{self, TokenSources};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Design-token build and WCAG contrast tooling for Arcana UI.
#[derive(Parser, Debug)]
#[command(name = "arcana-tokens", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate arcana.css and themes/*.css from the token sources.
    Build {
        /// Directory holding base.json, light.json and dark.json.
        #[arg(long)]
        src: Option<PathBuf>,
        /// Output directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },

    /// Contrast ratio, WCAG level and fix suggestion for a color pair.
    Contrast {
        /// Foreground color.
        fg: String,
        /// Background color.
        bg: String,
        /// Ratio the fix suggestion aims for.
        #[arg(long)]
        target: Option<f64>,
    },

    /// List the built-in presets.
    Presets,

    /// Contrast audit of a preset against the token sources.
    Audit {
        /// Preset id.
        preset: String,
        /// Directory holding the token sources.
        #[arg(long)]
        src: Option<PathBuf>,
    },

    /// Print the type and spacing scale tokens.
    Scale {
        /// Base font size in px.
        #[arg(long)]
        base: Option<f64>,
        /// Ratio between adjacent type steps.
        #[arg(long)]
        ratio: Option<f64>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let config = load_config().unwrap_or_else(|e| {
        tracing::warn!("Ignoring unreadable config: {}", e);
        AppConfig::default()
    });

    match cli.command {
        Command::Build { src, out } => cmd_build(&config, src, out),
        Command::Contrast { fg, bg, target } => cmd_contrast(&config, &fg, &bg, target),
        Command::Presets => cmd_presets(),
        Command::Audit { preset, src } => cmd_audit(&config, &preset, src),
        Command::Scale { base, ratio } => cmd_scale(&config, base, ratio),
    }
}

fn cmd_build(config: &AppConfig, src: Option<PathBuf>, out: Option<PathBuf>) -> Result<()> {
    let src = src.unwrap_or_else(|| config.tokens.source_dir.clone());
    let out = out.unwrap_or_else(|| config.tokens.output_dir.clone());

    let written = tokens::build(&src, &out, &config.tokens.generator())
        .with_context(|| format!("failed to build tokens from {}", src.display()))?;
    println!("Built {} stylesheets into {}", written.len(), out.display());
    Ok(())
}

fn cmd_contrast(config: &AppConfig, fg: &str, bg: &str, target: Option<f64>) -> Result<()> {
    let target = target.unwrap_or(config.contrast.target_ratio);

    let (Some(fg_rgb), Some(bg_rgb), Some(ratio)) =
        (parse_color(fg), parse_color(bg), contrast_ratio(fg, bg))
    else {
        bail!("could not parse '{fg}' or '{bg}' as a color");
    };
    println!("{fg} on {bg}: {ratio:.2}:1 ({})", wcag_level(ratio));
    println!(
        "  AA: {}  AAA: {}",
        pass_fail(meets_aa(fg_rgb, bg_rgb)),
        pass_fail(meets_aaa(fg_rgb, bg_rgb))
    );

    if ratio < target {
        if let Some(fix) = suggest_fix(fg, bg, target) {
            let fixed = contrast_ratio(&fix, bg).unwrap_or_default();
            println!("Suggested fix: {fix} ({fixed:.2}:1)");
        }
    }
    Ok(())
}

fn cmd_presets() -> Result<()> {
    for preset in presets() {
        println!(
            "{} {:<10} {:<10} {}",
            preset.emoji, preset.id, preset.label, preset.description
        );
    }
    Ok(())
}

fn cmd_audit(config: &AppConfig, id: &str, src: Option<PathBuf>) -> Result<()> {
    let Some(preset) = preset_by_id(id) else {
        bail!("unknown preset '{id}'");
    };
    let src = src.unwrap_or_else(|| config.tokens.source_dir.clone());

    let sources = TokenSources::load_from_dir(&src)
        .with_context(|| format!("failed to load tokens from {}", src.display()))?;
    let stylesheet = ThemeStylesheet::from_sources(&sources, &config.tokens.prefix);
    let mut runtime = ThemeRuntime::new(InMemoryStyleRoot::with_stylesheet(stylesheet));
    runtime.apply_preset(preset);

    let results = runtime.audit();
    for result in &results {
        println!(
            "{:<32} {:>8} {:<4} {}",
            result.label,
            result.ratio_label(),
            result.level_label(),
            result.fix_suggestion.as_deref().unwrap_or("")
        );
    }

    let summary = AuditSummary::from_results(&results);
    println!(
        "\n{}: {}/{} passing, grade {}",
        preset.label, summary.passing, summary.checkable, summary.grade
    );
    Ok(())
}

fn cmd_scale(config: &AppConfig, base: Option<f64>, ratio: Option<f64>) -> Result<()> {
    let base = base.unwrap_or(config.scale.type_base_px);
    let ratio = ratio.unwrap_or(config.scale.type_ratio);
    if base <= 0.0 || ratio <= 0.0 {
        bail!("--base and --ratio must be positive");
    }

    let prefix = &config.tokens.prefix;
    let type_scale = TypeScale::new(base, ratio);
    let spacing = SpacingScale::new(config.scale.spacing_base_px);
    for token in type_scale
        .css_tokens(prefix)
        .iter()
        .chain(spacing.css_tokens(prefix).iter())
    {
        println!("{}", token.declaration());
    }
    Ok(())
}

fn pass_fail(ok: bool) -> &'static str {
    if ok {
        "pass"
    } else {
        "fail"
    }
}
