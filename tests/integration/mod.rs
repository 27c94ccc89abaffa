//! Integration test modules.

mod audit_test;
mod build_tokens_test;
mod config_test;
mod preset_runtime_test;
