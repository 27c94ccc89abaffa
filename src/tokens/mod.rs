//! Design-token build pipeline.
//!
//! JSON token trees are flattened into namespaced CSS custom properties and
//! assembled into the distributable stylesheets:
//! - `arcana.css`: base scale, light and dark themes, global reset
//! - `themes/light.css`, `themes/dark.css`: standalone themes

pub mod build;
pub mod css;
pub mod error;
pub mod flatten;
pub mod tree;

// Re-export primary types
pub use build::{build, write_outputs, TokenSources};
pub use css::{ThemeCssGenerator, ThemeCssOutput, DARK_SELECTOR, LIGHT_SELECTOR};
pub use error::{TokenError, TokenResult};
pub use flatten::{
    find_collisions, flatten, flatten_theme, kebab_case, FlatToken, DEFAULT_PREFIX,
};
pub use tree::{Scalar, TokenTree, TokenValue};
