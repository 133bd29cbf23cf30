//! Server configuration
//!
//! Read from Shuttle secrets (`Secrets.toml` locally).
//!
//! - `STORAGE_BACKEND`: `postgres` (default) or `memory`

use std::str::FromStr;

use shuttle_runtime::SecretStore;
use thiserror::Error;

const STORAGE_BACKEND_KEY: &str = "STORAGE_BACKEND";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Unknown storage backend: {0} (expected 'postgres' or 'memory')")]
    UnknownStorageBackend(String),
}

/// Where Datos are persisted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    #[default]
    Postgres,
    Memory,
}

impl std::fmt::Display for StorageBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageBackend::Postgres => write!(f, "postgres"),
            StorageBackend::Memory => write!(f, "memory"),
        }
    }
}

impl FromStr for StorageBackend {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(StorageBackend::Postgres),
            "memory" | "in-memory" => Ok(StorageBackend::Memory),
            _ => Err(ConfigError::UnknownStorageBackend(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ServerConfig {
    pub storage: StorageBackend,
}

impl ServerConfig {
    pub fn from_secrets(secrets: &SecretStore) -> Result<Self, ConfigError> {
        Self::from_lookup(|key| secrets.get(key))
    }

    fn from_lookup<F>(get: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let storage = match get(STORAGE_BACKEND_KEY) {
            Some(value) => value.parse()?,
            None => StorageBackend::default(),
        };

        Ok(Self { storage })
    }
}
