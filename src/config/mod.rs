//! Configuration file handling.
//!
//! `config.toml` lists the pagers the host shows at startup and where logs
//! go. A missing file is not an error.

mod loader;
mod types;

pub use loader::ConfigError;
pub use types::{Config, LoggingConfig, PagerConfig};
