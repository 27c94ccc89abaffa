//! Unit tests for token flattening and naming.

use arcana_tokens::tokens::{find_collisions, flatten, flatten_theme, kebab_case, FlatToken, TokenTree};
use proptest::prelude::*;
use serde_json::json;

fn tree(value: serde_json::Value) -> TokenTree {
    TokenTree::from_json(&value).unwrap()
}

#[test]
fn test_flatten_typography() {
    let tokens = flatten(
        &tree(json!({
            "typography": {
                "fontSize": { "base": "1rem", "2xl": "1.5rem" },
                "lineHeight": { "normal": 1.5 },
                "fontWeight": { "bold": 700 }
            }
        })),
        "--arcana",
    );

    assert_eq!(
        tokens,
        vec![
            FlatToken::new("--arcana-typography-font-size-base", "1rem"),
            FlatToken::new("--arcana-typography-font-size-2xl", "1.5rem"),
            FlatToken::new("--arcana-typography-line-height-normal", "1.5"),
            FlatToken::new("--arcana-typography-font-weight-bold", "700"),
        ]
    );
}

#[test]
fn test_theme_skips_metadata() {
    let tokens = flatten_theme(
        &tree(json!({
            "theme": { "name": "dark" },
            "text": { "onAction": "#fff" },
            "stray": "ignored"
        })),
        "--arcana",
    );
    assert_eq!(tokens, vec![FlatToken::new("--arcana-text-on-action", "#fff")]);
}

#[test]
fn test_declaration_format() {
    let token = FlatToken::new("--arcana-spacing-4", "1rem");
    assert_eq!(token.declaration(), "  --arcana-spacing-4: 1rem;");
}

#[test]
fn test_collisions_detected() {
    let tokens = flatten(&tree(json!({ "a": { "b_c": "1", "b.c": "2", "bC": "3" } })), "--x");
    assert_eq!(find_collisions(&tokens), vec!["--x-a-b-c".to_string()]);
}

fn arb_key() -> impl Strategy<Value = String> {
    "[a-z][a-zA-Z0-9_]{0,8}"
}

fn arb_tree() -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        "[a-z0-9#.]{1,8}".prop_map(serde_json::Value::from),
        any::<u16>().prop_map(serde_json::Value::from),
    ];
    let node = leaf.prop_recursive(3, 24, 4, |inner| {
        prop::collection::vec((arb_key(), inner), 1..4)
            .prop_map(|entries| serde_json::Value::Object(entries.into_iter().collect()))
    });
    prop::collection::vec((arb_key(), node), 1..4)
        .prop_map(|entries| serde_json::Value::Object(entries.into_iter().collect()))
}

proptest! {
    #[test]
    fn flatten_is_deterministic(value in arb_tree()) {
        let tree = TokenTree::from_json(&value).unwrap();
        prop_assert_eq!(flatten(&tree, "--arcana"), flatten(&tree, "--arcana"));
    }

    #[test]
    fn names_are_prefixed_kebab(value in arb_tree()) {
        let tree = TokenTree::from_json(&value).unwrap();
        for token in flatten(&tree, "--arcana") {
            prop_assert!(token.name.starts_with("--arcana-"));
            prop_assert!(!token.name.chars().any(|c| c.is_ascii_uppercase() || c == '_' || c == '.'));
        }
    }

    #[test]
    fn kebab_case_is_idempotent(key in "[a-zA-Z0-9_.]{0,12}") {
        let once = kebab_case(&key);
        prop_assert_eq!(kebab_case(&once), once.clone());
    }
}
