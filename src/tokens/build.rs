//! Token sources on disk and the distributable CSS files.

use super::css::{ThemeCssGenerator, ThemeCssOutput};
use super::error::{TokenError, TokenResult};
use super::flatten::{find_collisions, flatten, flatten_theme};
use super::tree::TokenTree;
use std::path::{Path, PathBuf};

/// File names of the three token documents inside a source directory.
pub const BASE_FILE: &str = "base.json";
pub const LIGHT_FILE: &str = "light.json";
pub const DARK_FILE: &str = "dark.json";

/// Output paths relative to the output directory.
pub const COMBINED_OUTPUT: &str = "arcana.css";
pub const LIGHT_OUTPUT: &str = "themes/light.css";
pub const DARK_OUTPUT: &str = "themes/dark.css";

/// The primitive scale plus the two semantic themes.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenSources {
    pub base: TokenTree,
    pub light: TokenTree,
    pub dark: TokenTree,
}

impl TokenSources {
    /// Load `base.json`, `light.json` and `dark.json` from `dir`.
    pub fn load_from_dir(dir: &Path) -> TokenResult<Self> {
        Ok(Self {
            base: load_file(&dir.join(BASE_FILE))?,
            light: load_file(&dir.join(LIGHT_FILE))?,
            dark: load_file(&dir.join(DARK_FILE))?,
        })
    }

    /// Parse the three documents from strings.
    pub fn parse(base: &str, light: &str, dark: &str) -> TokenResult<Self> {
        Ok(Self {
            base: TokenTree::parse(base)?,
            light: TokenTree::parse(light)?,
            dark: TokenTree::parse(dark)?,
        })
    }

    /// Custom-property names defined more than once within one block.
    pub fn collisions(&self, prefix: &str) -> Vec<String> {
        let mut all = find_collisions(&flatten(&self.base, prefix));
        all.extend(find_collisions(&flatten_theme(&self.light, prefix)));
        all.extend(find_collisions(&flatten_theme(&self.dark, prefix)));
        all
    }
}

/// Load a single JSON token document.
pub fn load_file(path: &Path) -> TokenResult<TokenTree> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| TokenError::IoError(format!("{}: {}", path.display(), e)))?;
    TokenTree::parse(&content)
}

/// Write the generated stylesheets below `out_dir`, returning the written paths.
pub fn write_outputs(out_dir: &Path, output: &ThemeCssOutput) -> TokenResult<Vec<PathBuf>> {
    let files = [
        (COMBINED_OUTPUT, &output.combined),
        (LIGHT_OUTPUT, &output.light),
        (DARK_OUTPUT, &output.dark),
    ];

    let mut written = Vec::with_capacity(files.len());
    for (relative, content) in files {
        let path = out_dir.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| TokenError::IoError(format!("{}: {}", parent.display(), e)))?;
        }
        std::fs::write(&path, content)
            .map_err(|e| TokenError::IoError(format!("{}: {}", path.display(), e)))?;
        tracing::info!("✓ {}", path.display());
        written.push(path);
    }

    Ok(written)
}

/// Load sources from `src_dir`, generate every stylesheet, write to `out_dir`.
///
/// Name collisions are logged but do not stop the build.
pub fn build(
    src_dir: &Path,
    out_dir: &Path,
    generator: &ThemeCssGenerator,
) -> TokenResult<Vec<PathBuf>> {
    let sources = TokenSources::load_from_dir(src_dir)?;

    for name in sources.collisions(generator.prefix()) {
        tracing::warn!("Token name collision: {} is defined more than once", name);
    }

    let output = generator.generate(&sources);
    write_outputs(out_dir, &output)
}
