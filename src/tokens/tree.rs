//! Token tree model.
//!
//! JSON token documents are converted once, at the parse boundary, into a
//! [`TokenTree`]: an ordered list of keys mapping to either a scalar leaf or a
//! nested tree. Key order is the document's insertion order.

use super::error::{TokenError, TokenResult};
use serde_json::{Number, Value};

/// A leaf token value.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(Number),
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Text(text) => f.write_str(text),
            Scalar::Number(n) => write!(f, "{}", number_text(n)),
        }
    }
}

impl From<&str> for Scalar {
    fn from(text: &str) -> Self {
        Scalar::Text(text.to_string())
    }
}

impl From<String> for Scalar {
    fn from(text: String) -> Self {
        Scalar::Text(text)
    }
}

impl From<i64> for Scalar {
    fn from(n: i64) -> Self {
        Scalar::Number(n.into())
    }
}

/// Integers print as-is; floats drop a trailing `.0` (`2.0` -> `2`).
fn number_text(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        i.to_string()
    } else if let Some(u) = n.as_u64() {
        u.to_string()
    } else {
        n.as_f64().map(|f| f.to_string()).unwrap_or_else(|| n.to_string())
    }
}

/// Either a leaf or a nested group of tokens.
#[derive(Debug, Clone, PartialEq)]
pub enum TokenValue {
    Leaf(Scalar),
    Node(TokenTree),
}

impl From<TokenTree> for TokenValue {
    fn from(tree: TokenTree) -> Self {
        TokenValue::Node(tree)
    }
}

impl From<Scalar> for TokenValue {
    fn from(value: Scalar) -> Self {
        TokenValue::Leaf(value)
    }
}

impl From<&str> for TokenValue {
    fn from(text: &str) -> Self {
        TokenValue::Leaf(text.into())
    }
}

impl From<String> for TokenValue {
    fn from(text: String) -> Self {
        TokenValue::Leaf(text.into())
    }
}

impl From<i64> for TokenValue {
    fn from(n: i64) -> Self {
        TokenValue::Leaf(n.into())
    }
}

/// An ordered, nested mapping of token names to values.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TokenTree {
    entries: Vec<(String, TokenValue)>,
}

impl TokenTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a value. An existing key keeps its position and takes the new value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<TokenValue>) {
        let key = key.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(k, _)| *k == key) {
            Some((_, slot)) => *slot = value,
            None => self.entries.push((key, value)),
        }
    }

    /// Builder form of [`TokenTree::insert`].
    pub fn with(mut self, key: impl Into<String>, value: impl Into<TokenValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&TokenValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &TokenValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Convert a parsed JSON document. The root must be an object.
    pub fn from_json(value: &Value) -> TokenResult<Self> {
        match value {
            Value::Object(map) => Ok(Self {
                entries: map
                    .iter()
                    .map(|(k, v)| (k.clone(), TokenValue::from_json(v)))
                    .collect(),
            }),
            other => Err(TokenError::NotAnObject(json_kind(other))),
        }
    }

    /// Parse a JSON token document.
    pub fn parse(text: &str) -> TokenResult<Self> {
        let value: Value = serde_json::from_str(text)?;
        Self::from_json(&value)
    }
}

impl TokenValue {
    fn from_json(value: &Value) -> Self {
        match value {
            Value::Object(map) => TokenValue::Node(TokenTree {
                entries: map
                    .iter()
                    .map(|(k, v)| (k.clone(), TokenValue::from_json(v)))
                    .collect(),
            }),
            Value::Number(n) => TokenValue::Leaf(Scalar::Number(n.clone())),
            other => TokenValue::Leaf(Scalar::Text(leaf_text(other))),
        }
    }
}

/// Text for non-numeric, non-object leaves. Arrays join their elements with
/// commas; null elements inside arrays become empty.
fn leaf_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Null => "null".to_string(),
        Value::Number(n) => number_text(n),
        Value::Array(items) => items
            .iter()
            .map(|item| match item {
                Value::Null => String::new(),
                Value::Object(_) => "[object Object]".to_string(),
                other => leaf_text(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
