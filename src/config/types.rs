use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_pagers")]
    pub pagers: Vec<PagerConfig>,
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Initial state of one pager instance shown by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PagerConfig {
    /// Unique pager id (e.g., "results", "audit-log").
    pub id: String,
    /// Page count at startup.
    pub total_pages: u32,
    /// 1-based page selected at startup (default: 1). Clamped into range.
    #[serde(default = "default_current_page")]
    pub current_page: u32,
}

/// Log output settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is unset (default: "info").
    #[serde(default = "default_log_level")]
    pub level: String,
    /// Log file path. Defaults to the platform cache directory.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pagers: default_pagers(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            file: None,
        }
    }
}

fn default_pagers() -> Vec<PagerConfig> {
    vec![PagerConfig {
        id: "results".to_string(),
        total_pages: 100,
        current_page: default_current_page(),
    }]
}

fn default_current_page() -> u32 {
    1
}

fn default_log_level() -> String {
    "info".to_string()
}
