//! The style root that presets and overrides are written to.
//!
//! [`StyleRoot`] is the seam to whatever hosts the live document. The crate
//! ships [`InMemoryStyleRoot`], which models a document element carrying
//! inline custom properties, attributes and injected `<style>` nodes on top of
//! the generated theme stylesheet.

use crate::tokens::{flatten, flatten_theme, FlatToken, TokenSources};
use std::collections::{BTreeMap, HashMap, HashSet};

/// Attribute selecting the light or dark theme block.
pub const THEME_ATTRIBUTE: &str = "data-theme";

/// Maximum chain of `var()` references before a value counts as invalid.
const MAX_VAR_DEPTH: usize = 32;

/// Opaque handle to an injected style node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleHandle(u64);

/// A document root that custom properties can be read from and written to.
pub trait StyleRoot {
    /// Set an inline custom property.
    fn set_property(&mut self, name: &str, value: &str);

    /// Remove an inline custom property. Unknown names are ignored.
    fn remove_property(&mut self, name: &str);

    /// Computed value of a custom property; `None` when undefined.
    fn computed_property(&self, name: &str) -> Option<String>;

    fn set_attribute(&mut self, name: &str, value: &str);

    fn remove_attribute(&mut self, name: &str);

    /// Inject a raw CSS block as a new style node.
    fn inject_style(&mut self, id: &str, css: &str) -> StyleHandle;

    /// Remove a previously injected style node. Stale handles are ignored.
    fn remove_style(&mut self, handle: StyleHandle);
}

/// Flattened custom properties of the generated stylesheet.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ThemeStylesheet {
    base: HashMap<String, String>,
    light: HashMap<String, String>,
    dark: HashMap<String, String>,
}

impl ThemeStylesheet {
    /// Flatten the token sources the same way the stylesheet generator does.
    pub fn from_sources(sources: &TokenSources, prefix: &str) -> Self {
        let collect = |tokens: Vec<FlatToken>| -> HashMap<String, String> {
            tokens.into_iter().map(|t| (t.name, t.value)).collect()
        };

        Self {
            base: collect(flatten(&sources.base, prefix)),
            light: collect(flatten_theme(&sources.light, prefix)),
            dark: collect(flatten_theme(&sources.dark, prefix)),
        }
    }

    /// Cascade lookup: dark block (when selected), light block, base block.
    ///
    /// The light block's selector includes `:root`, so it applies whenever the
    /// dark block does not override a name.
    fn lookup(&self, name: &str, theme: Option<&str>) -> Option<&str> {
        let dark = match theme {
            Some("dark") => self.dark.get(name),
            _ => None,
        };

        dark.or_else(|| self.light.get(name))
            .or_else(|| self.base.get(name))
            .map(String::as_str)
    }
}

/// A style node injected into the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InjectedStyle {
    pub handle: StyleHandle,
    pub id: String,
    pub css: String,
}

/// In-process model of the document root.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStyleRoot {
    inline: BTreeMap<String, String>,
    attributes: BTreeMap<String, String>,
    styles: Vec<InjectedStyle>,
    next_handle: u64,
    stylesheet: ThemeStylesheet,
}

impl InMemoryStyleRoot {
    /// A root with no stylesheet behind it.
    pub fn new() -> Self {
        Self::default()
    }

    /// A root backed by the generated theme stylesheet.
    pub fn with_stylesheet(stylesheet: ThemeStylesheet) -> Self {
        Self {
            stylesheet,
            ..Default::default()
        }
    }

    /// Inline custom properties, sorted by name.
    pub fn inline_properties(&self) -> &BTreeMap<String, String> {
        &self.inline
    }

    pub fn inline_property(&self, name: &str) -> Option<&str> {
        self.inline.get(name).map(String::as_str)
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    /// Injected style nodes in insertion order.
    pub fn injected_styles(&self) -> &[InjectedStyle] {
        &self.styles
    }

    /// Declared value before `var()` substitution.
    fn declared_property(&self, name: &str) -> Option<String> {
        if let Some(value) = self.inline.get(name) {
            return Some(value.clone());
        }
        self.stylesheet
            .lookup(name, self.attribute(THEME_ATTRIBUTE))
            .map(str::to_string)
    }
}

/// Computed-value resolution of one lookup.
///
/// Names currently being expanded sit on `stack`. A reference back into the
/// stack makes every name from that point on part of a cycle: those resolve
/// to `None` and their fallbacks are not consulted. Each name is expanded at
/// most once per lookup.
struct VarResolver<'a> {
    root: &'a InMemoryStyleRoot,
    stack: Vec<String>,
    cyclic: HashSet<String>,
    resolved: HashMap<String, Option<String>>,
}

impl<'a> VarResolver<'a> {
    fn new(root: &'a InMemoryStyleRoot) -> Self {
        Self {
            root,
            stack: Vec::new(),
            cyclic: HashSet::new(),
            resolved: HashMap::new(),
        }
    }

    fn resolve(&mut self, name: &str) -> Option<String> {
        if let Some(value) = self.resolved.get(name) {
            return value.clone();
        }
        if let Some(pos) = self.stack.iter().position(|n| n == name) {
            self.cyclic.extend(self.stack[pos..].iter().cloned());
            return None;
        }
        if self.stack.len() >= MAX_VAR_DEPTH {
            return None;
        }

        let declared = self.root.declared_property(name)?;
        self.stack.push(name.to_string());
        let value = self.substitute(&declared);
        self.stack.pop();

        let value = if self.cyclic.contains(name) { None } else { value };
        self.resolved.insert(name.to_string(), value.clone());
        value
    }

    /// Substitute `var(--name[, fallback])` references in `value`.
    ///
    /// `None` means the value is invalid at computed-value time: a reference
    /// with neither a definition nor a fallback, or membership in a cycle.
    fn substitute(&mut self, value: &str) -> Option<String> {
        let mut out = String::with_capacity(value.len());
        let mut rest = value;
        while let Some(start) = rest.find("var(") {
            out.push_str(&rest[..start]);
            let args = &rest[start + 4..];
            let end = closing_paren(args)?;
            let (name, fallback) = split_fallback(&args[..end]);

            let resolved = self.resolve(name.trim());
            if self.in_cycle() {
                return None;
            }
            let resolved = match (resolved, fallback) {
                (Some(value), _) => value,
                (None, Some(fallback)) => self.substitute(fallback.trim())?,
                (None, None) => return None,
            };

            out.push_str(resolved.trim());
            rest = &args[end + 1..];
        }
        out.push_str(rest);
        Some(out)
    }

    /// Whether the name being expanded turned out to be part of a cycle.
    fn in_cycle(&self) -> bool {
        self.stack
            .last()
            .is_some_and(|current| self.cyclic.contains(current))
    }
}

/// Byte index of the `)` closing an already-opened parenthesis.
fn closing_paren(text: &str) -> Option<usize> {
    let mut depth = 1usize;
    for (i, ch) in text.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i);
                }
            }
            _ => {}
        }
    }
    None
}

/// Split `var()` arguments at the first top-level comma.
fn split_fallback(args: &str) -> (&str, Option<&str>) {
    let mut depth = 0usize;
    for (i, ch) in args.char_indices() {
        match ch {
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => return (&args[..i], Some(&args[i + 1..])),
            _ => {}
        }
    }
    (args, None)
}

impl StyleRoot for InMemoryStyleRoot {
    fn set_property(&mut self, name: &str, value: &str) {
        self.inline.insert(name.to_string(), value.to_string());
    }

    fn remove_property(&mut self, name: &str) {
        self.inline.remove(name);
    }

    fn computed_property(&self, name: &str) -> Option<String> {
        VarResolver::new(self).resolve(name)
    }

    fn set_attribute(&mut self, name: &str, value: &str) {
        self.attributes.insert(name.to_string(), value.to_string());
    }

    fn remove_attribute(&mut self, name: &str) {
        self.attributes.remove(name);
    }

    fn inject_style(&mut self, id: &str, css: &str) -> StyleHandle {
        let handle = StyleHandle(self.next_handle);
        self.next_handle += 1;
        self.styles.push(InjectedStyle {
            handle,
            id: id.to_string(),
            css: css.to_string(),
        });
        handle
    }

    fn remove_style(&mut self, handle: StyleHandle) {
        self.styles.retain(|style| style.handle != handle);
    }
}
