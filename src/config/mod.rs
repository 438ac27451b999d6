//
//  opsmngr-client
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/10/15.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Client settings stored as TOML in the platform-specific configuration
//! directory, with environment variable overrides.
//!
//! ## Configuration File Location
//!
//! - **Linux**: `~/.config/opsmngr/config.toml`
//! - **macOS**: `~/Library/Application Support/opsmngr/config.toml`
//! - **Windows**: `C:\Users\<User>\AppData\Roaming\opsmngr\config\config.toml`
//!
//! ## Example Configuration File
//!
//! ```toml
//! base_url = "https://opsmanager.example.com:8080/"
//! user_agent = "my-tool/1.0"
//! raw_capture = false
//! timeout_secs = 30
//! ```
//!
//! ## Environment Overrides
//!
//! | Variable | Field |
//! |----------|-------|
//! | `OPSMNGR_BASE_URL` | `base_url` |
//! | `OPSMNGR_USER_AGENT` | `user_agent` |
//!
//! ## Usage
//!
//! ```rust,no_run
//! use opsmngr::api::OpsManager;
//! use opsmngr::config::Config;
//!
//! # fn example() -> Result<(), opsmngr::api::ApiError> {
//! let config = Config::load()?;
//! let ops = OpsManager::new(config.client_builder()?.build()?);
//! # Ok(())
//! # }
//! ```

mod file;

pub use file::*;

use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::api::{ApiError, ClientBuilder, ReqwestTransport};

/// Environment variable overriding [`Config::base_url`].
pub const BASE_URL_ENV: &str = "OPSMNGR_BASE_URL";

/// Environment variable overriding [`Config::user_agent`].
pub const USER_AGENT_ENV: &str = "OPSMNGR_USER_AGENT";

/// Client configuration.
///
/// All fields use `#[serde(default)]`, so a partial file is valid.
///
/// # Examples
///
/// ```rust
/// use opsmngr::config::Config;
///
/// let config = Config::default();
/// assert_eq!(config.base_url, opsmngr::DEFAULT_BASE_URL);
/// assert!(!config.raw_capture);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Ops Manager base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Replaces the default `User-Agent` when set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_agent: Option<String>,

    /// Keep raw response bodies on every [`Response`](crate::api::Response).
    #[serde(default)]
    pub raw_capture: bool,

    /// Overall request timeout for the default transport.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    crate::DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            user_agent: None,
            raw_capture: false,
            timeout_secs: None,
        }
    }
}

impl Config {
    /// Loads the configuration from the default location and applies
    /// environment overrides.
    ///
    /// A missing file is not an error; defaults are used.
    pub fn load() -> Result<Self, ApiError> {
        let path = Self::config_path()?;
        let config = if config_exists(&path) {
            Self::load_from(&path)?
        } else {
            debug!(path = %path.display(), "no config file, using defaults");
            Self::default()
        };
        Ok(config.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Loads the configuration from `path` without environment overrides.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Io`] if the file cannot be read
    /// - [`ApiError::Config`] if the file is not valid TOML for this type
    pub fn load_from(path: &Path) -> Result<Self, ApiError> {
        let content = read_config_file(path)?;
        toml::from_str(&content)
            .map_err(|e| ApiError::Config(format!("invalid config file {}: {}", path.display(), e)))
    }

    /// Saves the configuration to the default location.
    pub fn save(&self) -> Result<(), ApiError> {
        self.save_to(&Self::config_path()?)
    }

    /// Writes the configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<(), ApiError> {
        let content = toml::to_string_pretty(self).map_err(|e| ApiError::Config(e.to_string()))?;
        write_config_file(path, &content)
    }

    /// Returns the path to the configuration file. The file may not exist.
    pub fn config_path() -> Result<PathBuf, ApiError> {
        let dirs = ProjectDirs::from("", "", crate::APP_NAME)
            .ok_or_else(|| ApiError::Config("could not determine config directory".to_string()))?;
        Ok(dirs.config_dir().join("config.toml"))
    }

    /// Applies overrides looked up through `lookup`. Empty values are ignored.
    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV).filter(|v| !v.is_empty()) {
            self.base_url = base_url;
        }
        if let Some(user_agent) = lookup(USER_AGENT_ENV).filter(|v| !v.is_empty()) {
            self.user_agent = Some(user_agent);
        }
        self
    }

    /// Returns a [`ClientBuilder`] preloaded with these settings.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] if a timeout is set and the HTTP client
    /// cannot be built.
    pub fn client_builder(&self) -> Result<ClientBuilder, ApiError> {
        let mut builder = ClientBuilder::new()
            .base_url(self.base_url.clone())
            .raw_capture(self.raw_capture);
        if let Some(user_agent) = &self.user_agent {
            builder = builder.user_agent(user_agent.clone());
        }
        if let Some(secs) = self.timeout_secs {
            let transport = ReqwestTransport::with_timeout(Duration::from_secs(secs))?;
            builder = builder.transport(Arc::new(transport));
        }
        Ok(builder)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    #[test]
    fn test_load_from_partial_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "base_url = \"https://om.example.com:8080\"\n").unwrap();

        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.base_url, "https://om.example.com:8080");
        assert_eq!(config.user_agent, None);
        assert!(!config.raw_capture);
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");
        let config = Config {
            base_url: "https://om.example.com/".to_string(),
            user_agent: Some("tool/2.0".to_string()),
            raw_capture: true,
            timeout_secs: Some(15),
        };

        config.save_to(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap(), config);
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "raw_capture = \"maybe\"").unwrap();

        let err = Config::load_from(&path).unwrap_err();
        assert!(matches!(err, ApiError::Config(_)));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load_from(&dir.path().join("absent.toml")).unwrap_err();
        assert!(matches!(err, ApiError::Io(_)));
    }

    #[test]
    fn test_overrides() {
        let env = HashMap::from([
            (BASE_URL_ENV, "https://override.example.com/".to_string()),
            (USER_AGENT_ENV, String::new()),
        ]);
        let config = Config::default().with_overrides(|key| env.get(key).cloned());

        assert_eq!(config.base_url, "https://override.example.com/");
        assert_eq!(config.user_agent, None);
    }

    #[test]
    fn test_client_builder_applies_settings() {
        let config = Config {
            base_url: "https://om.example.com:8080".to_string(),
            user_agent: Some("tool/2.0".to_string()),
            raw_capture: true,
            timeout_secs: Some(5),
        };

        let client = config.client_builder().unwrap().build().unwrap();
        assert_eq!(client.base_url().as_str(), "https://om.example.com:8080/");
        assert_eq!(client.user_agent(), Some("tool/2.0"));
        assert!(client.raw_capture());
    }
}
