//! Configuration loading.
//!
//! Settings come from a TOML file; every section is optional and falls
//! back to defaults.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{ApiConfig, ArticlesConfig, Config, SessionConfig};
