//! Configuration management for the Dato CLI
//!
//! Stores the API base URL in ~/.config/dato/config.toml.
//! `DATO_BASE_URL` overrides the stored value.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const CONFIG_DIR: &str = "dato";
const CONFIG_FILE: &str = "config.toml";
const BASE_URL_ENV: &str = "DATO_BASE_URL";

/// CLI Configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not determine config directory")?
            .join(CONFIG_DIR);
        Ok(config_dir)
    }

    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join(CONFIG_FILE))
    }

    /// Load config from file (or defaults), then apply the environment override
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;

        let config = if path.exists() {
            let content = fs::read_to_string(&path)
                .with_context(|| format!("Failed to read config from {:?}", path))?;
            Self::parse(&content)?
        } else {
            Self::default()
        };

        Ok(config.with_env_override(|key| std::env::var(key).ok()))
    }

    /// Apply `DATO_BASE_URL` when the lookup provides it
    fn with_env_override<F>(mut self, get: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = get(BASE_URL_ENV) {
            tracing::debug!("Using {} from environment", BASE_URL_ENV);
            self.base_url = url;
        }
        self
    }

    fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse config file")
    }

    /// Save config to file
    pub fn save(&self) -> Result<()> {
        let dir = Self::config_dir()?;
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create config directory {:?}", dir))?;

        let path = Self::config_path()?;
        let content = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&path, content)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.base_url, "http://localhost:8000");
    }

    #[test]
    fn test_parse_base_url() {
        let config = Config::parse(r#"base_url = "https://datos.example""#).unwrap();
        assert_eq!(config.base_url, "https://datos.example");
    }

    #[test]
    fn test_env_base_url_overrides_file() {
        let config = Config::parse(r#"base_url = "https://datos.example""#)
            .unwrap()
            .with_env_override(|key| {
                (key == BASE_URL_ENV).then(|| "http://127.0.0.1:9000".to_string())
            });
        assert_eq!(config.base_url, "http://127.0.0.1:9000");
    }

    #[test]
    fn test_file_base_url_kept_without_env() {
        let config = Config::parse(r#"base_url = "https://datos.example""#)
            .unwrap()
            .with_env_override(|_| None);
        assert_eq!(config.base_url, "https://datos.example");
    }

    #[test]
    fn test_invalid_toml_is_an_error() {
        assert!(Config::parse("base_url = ").is_err());
    }
}
