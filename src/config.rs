//! Library configuration
//!
//! A [`Config`] describes which platform adapters a host wants and turns into
//! the root [`Context`] handed to components.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use url::Url;

use crate::component::Context;
use crate::platform::{FileStorage, MemoryHistory, MemoryStorage, Storage};

/// Errors produced while loading configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid base URL `{url}`: {source}")]
    BaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("id prefix must not be empty")]
    EmptyIdPrefix,
}

/// Where persisted UI state lives
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum StorageConfig {
    /// Lost when the process exits
    #[default]
    Memory,
    /// JSON file on disk
    File { path: PathBuf },
}

/// Library configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Config {
    /// Prefix for generated element ids
    pub id_prefix: String,
    /// Initial URL of the in-memory history
    pub base_url: String,
    pub storage: StorageConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            id_prefix: "fc".to_string(),
            base_url: "http://localhost/".to_string(),
            storage: StorageConfig::Memory,
        }
    }
}

impl Config {
    /// Parse a JSON document; missing keys take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and parse a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    fn base_url(&self) -> Result<Url, ConfigError> {
        Url::parse(&self.base_url).map_err(|source| ConfigError::BaseUrl {
            url: self.base_url.clone(),
            source,
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.id_prefix.trim().is_empty() {
            return Err(ConfigError::EmptyIdPrefix);
        }
        self.base_url().map(|_| ())
    }

    /// Build the root component context
    pub fn into_context(self) -> Result<Context, ConfigError> {
        self.validate()?;
        let history = Arc::new(MemoryHistory::new(self.base_url()?));
        let storage: Arc<dyn Storage> = match &self.storage {
            StorageConfig::Memory => Arc::new(MemoryStorage::new()),
            StorageConfig::File { path } => Arc::new(FileStorage::new(path.clone())),
        };
        log::debug!("building context with {:?} storage", self.storage);

        Ok(Context::new()
            .with_storage(storage)
            .with_history(history)
            .with_id_prefix(self.id_prefix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::component::ComponentId;

    #[test]
    fn test_defaults_fill_missing_keys() {
        let config = Config::from_json_str(r#"{ "idPrefix": "app" }"#).unwrap();
        assert_eq!(config.id_prefix, "app");
        assert_eq!(config.storage, StorageConfig::Memory);

        let context = config.into_context().unwrap();
        let id = ComponentId::new();
        assert_eq!(context.element_id(id), format!("app-{id}"));
        assert_eq!(context.history().current_url().unwrap().as_str(), "http://localhost/");
    }

    #[test]
    fn test_file_storage() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        let json = serde_json::json!({
            "storage": { "kind": "file", "path": &path },
        });
        let config = Config::from_json_str(&json.to_string()).unwrap();
        let context = config.into_context().unwrap();

        context.storage().set_item("k", "v").unwrap();
        assert!(path.exists());
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            Config::from_json_str(r#"{ "baseUrl": "not a url" }"#),
            Err(ConfigError::BaseUrl { .. })
        ));
        assert!(matches!(
            Config::from_json_str(r#"{ "idPrefix": " " }"#),
            Err(ConfigError::EmptyIdPrefix)
        ));
        assert!(matches!(
            Config::from_json_str("{"),
            Err(ConfigError::Parse(_))
        ));
    }
}
