use crate::TRELLO_API_BASE_URL;
use crate::error::config::ConfigError;

use common::{ErrorLocation, RedactedCredential};

use std::env::{self, VarError};
use std::panic::Location;
use std::path::Path;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use url::Url;

const CONFIG_FILE_NAME: &str = "config.json";
const CONFIG_VERSION: u32 = 1;

const MIN_TIMEOUT_SECS: u64 = 1;
const MAX_TIMEOUT_SECS: u64 = 300;

pub const API_KEY_ENV: &str = "TRELLO_API_KEY";
pub const TOKEN_ENV: &str = "TRELLO_TOKEN";
pub const BASE_URL_ENV: &str = "TRELLO_BASE_URL";
pub const TIMEOUT_ENV: &str = "TRELLO_TIMEOUT_SECS";

/// Settings for [`crate::api_client::TrelloClient`].
///
/// Credentials are never written to disk: they come from the environment
/// (see [`ClientConfig::from_env`]) or [`ClientConfig::with_credentials`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_version")]
    pub version: u32,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(skip)]
    pub api_key: Option<RedactedCredential>,

    #[serde(skip)]
    pub token: Option<RedactedCredential>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            api_key: None,
            token: None,
        }
    }
}

fn default_version() -> u32 {
    CONFIG_VERSION
}
fn default_base_url() -> String {
    TRELLO_API_BASE_URL.to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

impl ClientConfig {
    pub fn with_credentials(
        mut self,
        api_key: impl Into<String>,
        token: impl Into<String>,
    ) -> Self {
        self.api_key = Some(RedactedCredential::new(api_key));
        self.token = Some(RedactedCredential::new(token));
        self
    }

    /// Load config from {config_dir}/config.json.
    ///
    /// # Returns
    ///
    /// Returns `Ok(ClientConfig)` if loaded successfully or defaults if file missing.
    /// Returns `Err(ConfigError)` if file exists but is corrupted/invalid.
    pub fn load(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE_NAME);

        if !config_path.exists() {
            info!(
                "Config file not found at {}, using defaults",
                config_path.display()
            );
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(&config_path).map_err(|e| {
            warn!("Failed to read config file: {}", e);
            ConfigError::ReadError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                source: e,
            }
        })?;

        let config: ClientConfig = serde_json::from_str(&contents).map_err(|e| {
            warn!("Failed to parse config JSON: {}", e);
            ConfigError::ParseError {
                location: ErrorLocation::from(Location::caller()),
                path: config_path.clone(),
                reason: e.to_string(),
            }
        })?;

        config.validate()?;

        info!("Config loaded from {}", config_path.display());
        Ok(config)
    }

    /// Save config to {config_dir}/config.json using atomic write.
    ///
    /// Credentials are skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if validation, directory creation, serialization,
    /// write or rename fails.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        self.validate()?;

        std::fs::create_dir_all(config_dir).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_dir.to_path_buf(),
            source: e,
        })?;

        let config_path = config_dir.join(CONFIG_FILE_NAME);
        let temp_path = config_dir.join(format!("{}.tmp", CONFIG_FILE_NAME));

        let json = serde_json::to_string_pretty(self).map_err(|e| ConfigError::SerializeError {
            location: ErrorLocation::from(Location::caller()),
            reason: e.to_string(),
        })?;

        std::fs::write(&temp_path, json).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: temp_path.clone(),
            source: e,
        })?;

        std::fs::rename(&temp_path, &config_path).map_err(|e| ConfigError::WriteError {
            location: ErrorLocation::from(Location::caller()),
            path: config_path.clone(),
            source: e,
        })?;

        info!("Config saved to {}", config_path.display());
        Ok(())
    }

    /// Build config from the process environment, loading `.env` first.
    ///
    /// A missing `.env` file is not an error. Unset or blank variables keep
    /// their defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EnvError`] for non-UTF-8 or unparsable values and
    /// [`ConfigError::ValidationError`] if the result fails [`Self::validate`].
    pub fn from_env() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => debug!("Loaded .env from {}", path.display()),
            Err(e) if e.not_found() => debug!("No .env file found, using process environment"),
            Err(e) => warn!("Failed to load .env file: {}", e),
        }

        let mut config = Self::default();

        if let Some(base_url) = read_var(BASE_URL_ENV)? {
            config.base_url = base_url;
        }

        if let Some(timeout) = read_var(TIMEOUT_ENV)? {
            config.timeout_secs = timeout.trim().parse::<u64>().map_err(|e| ConfigError::EnvError {
                location: ErrorLocation::from(Location::caller()),
                variable: TIMEOUT_ENV.to_string(),
                reason: format!("{e}"),
            })?;
        }

        config.api_key = read_var(API_KEY_ENV)?.map(RedactedCredential::new);
        config.token = read_var(TOKEN_ENV)?.map(RedactedCredential::new);

        if let Some(key) = &config.api_key {
            debug!("Found {} ({} chars)", API_KEY_ENV, key.len());
        }

        config.validate()?;
        Ok(config)
    }

    /// Validate config values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::ValidationError`] if any value is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.version == 0 || self.version > CONFIG_VERSION {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid version: {} (expected 1-{})",
                    self.version, CONFIG_VERSION
                ),
            });
        }

        if !(MIN_TIMEOUT_SECS..=MAX_TIMEOUT_SECS).contains(&self.timeout_secs) {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!(
                    "Invalid timeout: {}s (must be {}-{})",
                    self.timeout_secs, MIN_TIMEOUT_SECS, MAX_TIMEOUT_SECS
                ),
            });
        }

        let url = Url::parse(&self.base_url).map_err(|e| ConfigError::ValidationError {
            location: ErrorLocation::from(Location::caller()),
            reason: format!("Invalid base URL {}: {}", self.base_url, e),
        })?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(ConfigError::ValidationError {
                location: ErrorLocation::from(Location::caller()),
                reason: format!("Unsupported base URL scheme: {}", url.scheme()),
            });
        }

        for (name, credential) in [("api_key", &self.api_key), ("token", &self.token)] {
            if credential.as_ref().is_some_and(RedactedCredential::is_empty) {
                return Err(ConfigError::ValidationError {
                    location: ErrorLocation::from(Location::caller()),
                    reason: format!("{name} cannot be blank"),
                });
            }
        }

        Ok(())
    }
}

/// Read an env var, treating unset and blank as `None`.
fn read_var(variable: &str) -> Result<Option<String>, ConfigError> {
    match env::var(variable) {
        Ok(value) if value.trim().is_empty() => Ok(None),
        Ok(value) => Ok(Some(value)),
        Err(VarError::NotPresent) => Ok(None),
        Err(e @ VarError::NotUnicode(_)) => Err(ConfigError::EnvError {
            location: ErrorLocation::from(Location::caller()),
            variable: variable.to_string(),
            reason: e.to_string(),
        }),
    }
}
