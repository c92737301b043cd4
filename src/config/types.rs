use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Root configuration container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub defaults: Defaults,
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Behavior that applies unless a switch on the command line adds to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Defaults {
    /// Compare type, namespace and module names case-insensitively (same as `-i`).
    #[serde(default)]
    pub ignore_case: bool,
    /// Show status messages even when markup goes to stdout (same as `--include-messages`).
    #[serde(default)]
    pub include_messages: bool,
    /// Tracing filter used when `RUST_LOG` is unset (default: "warn").
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Catalog manifests loaded on every run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Manifest files or directories, loaded before any `-L` values.
    #[serde(default)]
    pub paths: Vec<PathBuf>,
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            ignore_case: false,
            include_messages: false,
            log_level: default_log_level(),
        }
    }
}
