//! Configuration management.
//!
//! Config is stored at `~/.config/msearch/config.toml` and contains:
//! - the search endpoint
//! - the User-Agent sent with every request
//! - an optional result limit

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::client::DEFAULT_ENDPOINT;

const CONFIG_DIR: &str = "msearch";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Search endpoint; the term is appended as the `term` query parameter.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Sent as the `limit` query parameter when set.
    #[serde(default)]
    pub limit: Option<u32>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_user_agent() -> String {
    concat!("media-search/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            user_agent: default_user_agent(),
            limit: None,
        }
    }
}

impl SearchConfig {
    /// Load config from the default location.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    /// Load config from `path`, falling back to defaults if it does not exist.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).context("Failed to read config file")?;

        toml::from_str(&content).context("Failed to parse config file")
    }

    /// Save config to the default location.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        std::fs::write(path, content).context("Failed to write config file")
    }

    /// Parsed search endpoint.
    pub fn endpoint(&self) -> Result<Url> {
        Url::parse(&self.endpoint)
            .with_context(|| format!("Invalid search endpoint: {}", self.endpoint))
    }

    /// Get the config file path.
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().context("Could not determine config directory")?;

        Ok(config_dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config() {
        let config = SearchConfig::default();
        assert_eq!(config.endpoint, "https://itunes.apple.com/search");
        assert!(config.user_agent.starts_with("media-search/"));
        assert!(config.limit.is_none());
        assert_eq!(config.endpoint().unwrap().host_str(), Some("itunes.apple.com"));
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let dir = tempdir().unwrap();
        let config = SearchConfig::load_from(&dir.path().join("nope.toml")).unwrap();
        assert_eq!(config, SearchConfig::default());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join(CONFIG_FILE);

        let config = SearchConfig {
            endpoint: "http://localhost:8080/search".to_string(),
            user_agent: "tester/1.0".to_string(),
            limit: Some(25),
        };
        config.save_to(&path).unwrap();

        let loaded = SearchConfig::load_from(&path).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "limit = 3\n").unwrap();

        let config = SearchConfig::load_from(&path).unwrap();
        assert_eq!(config.limit, Some(3));
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_invalid_endpoint() {
        let config = SearchConfig {
            endpoint: "not a url".to_string(),
            ..SearchConfig::default()
        };
        assert!(config.endpoint().is_err());
    }

    #[test]
    fn test_malformed_file_is_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "limit = \"many\"\n").unwrap();

        assert!(SearchConfig::load_from(&path).is_err());
    }
}
