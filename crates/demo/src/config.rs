//! Environment-driven configuration.
//!
//! | variable | values | default |
//! |----------|--------|---------|
//! | `RUST_LOG` | tracing filter | `info` |
//! | `STOCKWATCH_LOG_FORMAT` | `json`, `pretty` | `json` |
//! | `STOCKWATCH_DUPLICATE_POLICY` | `replace`, `reject` | `replace` |
//!
//! Invalid values fall back to the default. The fallbacks are collected in
//! `warnings` because logging is configured from this same struct and cannot
//! report anything yet.

use stockwatch_inventory::DuplicatePolicy;
use stockwatch_observability::LogFormat;

pub const LOG_FORMAT_VAR: &str = "STOCKWATCH_LOG_FORMAT";
pub const DUPLICATE_POLICY_VAR: &str = "STOCKWATCH_DUPLICATE_POLICY";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DemoConfig {
    pub log_format: LogFormat,
    pub duplicate_policy: DuplicatePolicy,
    pub warnings: Vec<String>,
}

impl DemoConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();

        if let Some(raw) = lookup(LOG_FORMAT_VAR) {
            match raw.parse() {
                Ok(format) => config.log_format = format,
                Err(e) => config
                    .warnings
                    .push(format!("{LOG_FORMAT_VAR}: {e}; using json")),
            }
        }

        if let Some(raw) = lookup(DUPLICATE_POLICY_VAR) {
            match raw.parse() {
                Ok(policy) => config.duplicate_policy = policy,
                Err(e) => config
                    .warnings
                    .push(format!("{DUPLICATE_POLICY_VAR}: {e}; using replace")),
            }
        }

        config
    }
}
