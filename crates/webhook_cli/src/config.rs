//! Configuration management for the webhook kit CLI.
//!
//! Webhook definitions, together with the company and repository that own
//! them, are stored in a TOML file. The file can be loaded from a given path
//! or from the default location in the current directory.

use std::{
    fs,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use webhook_entity::{Header, Webhook};

use crate::errors::Error;

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "webhooks.toml";

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

/// Main configuration structure for the webhook kit CLI.
///
/// # Example TOML Configuration
///
/// ```toml
/// [owner]
/// company_id = "0f8fad5b-d9cb-469f-a165-70867728950e"
/// repository_id = "7c9e6679-7425-40de-944b-e07fc1f90ae7"
///
/// [[webhooks]]
/// description = "Notify CI"
/// url = "https://ci.example.com/hook"
/// method = "post"
/// headers = [{ key = "X-Horusec-Authorization", value = "Bearer token" }]
/// ```
#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Company and repository every webhook in the file belongs to
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub owner: Option<OwnerConfig>,

    /// Webhook definitions
    #[serde(default)]
    pub webhooks: Vec<WebhookDefinition>,
}

impl AppConfig {
    /// Loads configuration from a TOML file at the specified path.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the file does not exist, cannot be read or
    /// does not contain a valid configuration.
    pub fn load(path: &Path) -> Result<Self, Error> {
        debug!("Loading configuration from {:?}", path);

        if !path.exists() {
            return Err(Error::Config(format!(
                "Configuration file not found: {:?}",
                path
            )));
        }

        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("Failed to read configuration file: {}", e)))?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(|e| Error::Config(format!("Failed to parse configuration file: {}", e)))?;

        Ok(config)
    }

    /// Saves the configuration to a TOML file at the specified path.
    ///
    /// Parent directories are created when missing and an existing file is
    /// overwritten.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if serialization fails or the file cannot be
    /// written.
    pub fn save(&self, path: &Path) -> Result<(), Error> {
        debug!("Saving configuration to {:?}", path);

        let content = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize configuration: {}", e)))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Config(format!("Failed to create directory: {}", e)))?;
        }

        fs::write(path, content)
            .map_err(|e| Error::Config(format!("Failed to write configuration file: {}", e)))?;

        info!("Configuration saved to {:?}", path);
        Ok(())
    }

    /// A starter configuration with one example webhook and nil owner ids.
    pub fn sample() -> Self {
        Self {
            owner: Some(OwnerConfig {
                company_id: uuid::Uuid::nil().to_string(),
                repository_id: uuid::Uuid::nil().to_string(),
            }),
            webhooks: vec![WebhookDefinition {
                description: "Notify CI".to_string(),
                url: "https://ci.example.com/hook".to_string(),
                method: WebhookDefinition::default_method(),
                headers: vec![Header::new("X-Horusec-Authorization", "Bearer token")],
            }],
        }
    }
}

/// Ownership identifiers as written in the file.
///
/// Kept as raw strings so that malformed ids are reported by the webhook
/// entity rather than by the TOML parser.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnerConfig {
    pub company_id: String,
    pub repository_id: String,
}

/// A single webhook as written in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WebhookDefinition {
    #[serde(default)]
    pub description: String,

    pub url: String,

    #[serde(default = "WebhookDefinition::default_method")]
    pub method: String,

    #[serde(default)]
    pub headers: Vec<Header>,
}

impl WebhookDefinition {
    /// Used when a definition does not name a method.
    fn default_method() -> String {
        "post".to_string()
    }

    /// Builds an unvalidated webhook from this definition.
    pub fn to_webhook(&self) -> Webhook {
        Webhook {
            description: self.description.clone(),
            headers: self.headers.clone(),
            ..Webhook::new(self.url.clone(), self.method.clone())
        }
    }
}

/// Resolves the path to the configuration file.
///
/// Uses `config_path` when given, otherwise `./webhooks.toml` in the current
/// directory.
pub fn get_config_path(config_path: Option<&str>) -> PathBuf {
    if let Some(path) = config_path {
        PathBuf::from(path)
    } else {
        let current_dir = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        current_dir.join(DEFAULT_CONFIG_FILENAME)
    }
}
