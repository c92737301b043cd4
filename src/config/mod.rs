//! Configuration file: persistent defaults for the command-line switches.

mod loader;
mod types;

pub use loader::{ConfigError, CONFIG_PATH_ENV};
pub use types::{CatalogConfig, Config, Defaults};
