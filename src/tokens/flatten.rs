//! Token tree flattening into CSS custom properties.
//!
//! `{ color: { stone: { "50": "#fafaf9" } } }` becomes
//! `--arcana-color-stone-50: #fafaf9`.

use super::tree::{TokenTree, TokenValue};
use std::collections::HashMap;

/// Default custom-property prefix.
pub const DEFAULT_PREFIX: &str = "--arcana";

/// Top-level key of a theme document that holds metadata, not tokens.
pub const THEME_META_KEY: &str = "theme";

/// One flattened custom property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlatToken {
    pub name: String,
    pub value: String,
}

impl FlatToken {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Stylesheet declaration line, indented two spaces.
    pub fn declaration(&self) -> String {
        format!("  {}: {};", self.name, self.value)
    }
}

/// Convert a token key to its kebab-case name segment.
///
/// Every ASCII uppercase letter gets a `-` in front of it, the result is
/// lowercased, then `.` and `_` become `-`. `fontSize` -> `font-size`,
/// `line_height.tight` -> `line-height-tight`.
pub fn kebab_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len() + 4);
    for ch in key.chars() {
        if ch.is_ascii_uppercase() {
            out.push('-');
        }
        out.push(ch);
    }
    out.to_lowercase().replace(['.', '_'], "-")
}

/// Flatten `tree` depth-first, in key order, under `prefix`.
pub fn flatten(tree: &TokenTree, prefix: &str) -> Vec<FlatToken> {
    let mut out = Vec::new();
    flatten_into(tree, prefix, &mut out);
    out
}

/// Append the flattened tokens of `tree` to `out`.
pub fn flatten_into(tree: &TokenTree, prefix: &str, out: &mut Vec<FlatToken>) {
    for (key, value) in tree.iter() {
        let name = format!("{}-{}", prefix, kebab_case(key));
        match value {
            TokenValue::Node(child) => flatten_into(child, &name, out),
            TokenValue::Leaf(scalar) => out.push(FlatToken::new(name, scalar.to_string())),
        }
    }
}

/// Flatten a semantic theme document.
///
/// Each top-level group is flattened under `<prefix>-<group>`. The `theme`
/// metadata key and top-level leaves are skipped.
pub fn flatten_theme(theme: &TokenTree, prefix: &str) -> Vec<FlatToken> {
    let mut out = Vec::new();
    for (category, value) in theme.iter() {
        if category == THEME_META_KEY {
            continue;
        }
        if let TokenValue::Node(group) = value {
            flatten_into(group, &format!("{}-{}", prefix, kebab_case(category)), &mut out);
        }
    }
    out
}

/// Names emitted more than once, in first-seen order.
pub fn find_collisions(tokens: &[FlatToken]) -> Vec<String> {
    let mut seen: HashMap<&str, usize> = HashMap::new();
    let mut collisions = Vec::new();
    for token in tokens {
        let count = seen.entry(token.name.as_str()).or_insert(0);
        *count += 1;
        if *count == 2 {
            collisions.push(token.name.clone());
        }
    }
    collisions
}
