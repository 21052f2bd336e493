/// Command-line configuration
use crate::error::{CliError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use vinyl_client::ClientConfig;

/// File looked up in the working directory when no `--config` is given.
pub const DEFAULT_CONFIG_FILE: &str = "vinyl.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ClientConfig,

    #[serde(default)]
    pub storage: StorageSettings,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageSettings {
    /// JSON file holding the persisted token and identity
    #[serde(default = "default_session_path")]
    pub path: PathBuf,
}

impl AppConfig {
    /// Load configuration from file and environment.
    ///
    /// An explicit `path` must exist; otherwise `vinyl.toml` is read when
    /// present. Variables such as `VINYL_API__BASE_URL` override both.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()).required(true));
            }
            None => {
                let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
                if default_path.exists() {
                    settings = settings.add_source(config::File::from(default_path));
                }
            }
        }

        // Override with environment variables (prefixed with VINYL_)
        settings = settings.add_source(
            config::Environment::with_prefix("VINYL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| CliError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| CliError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let base_url = self.api.base_url.trim();
        if base_url.is_empty() {
            return Err(CliError::Config(
                "API base URL is required (set VINYL_API__BASE_URL)".to_string(),
            ));
        }

        if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
            return Err(CliError::Config(format!(
                "API base URL must start with http:// or https://, got '{}'",
                base_url
            )));
        }

        if self.api.timeout_secs == 0 {
            return Err(CliError::Config("api.timeout_secs must be positive".to_string()));
        }

        if self.storage.path.as_os_str().is_empty() {
            return Err(CliError::Config("storage.path must not be empty".to_string()));
        }

        Ok(())
    }
}

fn default_session_path() -> PathBuf {
    PathBuf::from("vinyl-session.json")
}

impl Default for StorageSettings {
    fn default() -> Self {
        Self {
            path: default_session_path(),
        }
    }
}
