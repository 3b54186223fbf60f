use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub articles: ArticlesConfig,
    #[serde(default)]
    pub session: SessionConfig,
}

/// Content API connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the content API (scheme + host, no `/api` suffix).
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Articles requested per page (default: 9).
    #[serde(default = "default_page_size")]
    pub page_size: u32,
}

/// Article authoring settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArticlesConfig {
    /// Cover image used when an article is created without one.
    #[serde(default = "default_placeholder_cover_url")]
    pub placeholder_cover_url: String,
}

/// Where the persisted login session lives.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct SessionConfig {
    /// Directory holding the session file. Defaults to the platform data dir.
    #[serde(default)]
    pub dir: Option<PathBuf>,
}

impl SessionConfig {
    /// Configured directory, or `<data_dir>/travelhub`.
    pub fn resolved_dir(&self) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| {
            dirs::data_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("travelhub")
        })
    }
}

fn default_base_url() -> String {
    "https://extra-brooke-yeremiadio-46b2183e.koyeb.app".to_string()
}

fn default_page_size() -> u32 {
    9
}

fn default_placeholder_cover_url() -> String {
    "https://via.placeholder.com/800x400?text=Travel+Article".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            page_size: default_page_size(),
        }
    }
}

impl Default for ArticlesConfig {
    fn default() -> Self {
        Self {
            placeholder_cover_url: default_placeholder_cover_url(),
        }
    }
}
