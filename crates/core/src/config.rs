use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Address of the local detection service.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/predict";

/// Multipart field the service reads the video from.
pub const DEFAULT_FIELD_NAME: &str = "frame";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config at {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse JSON config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Failed to parse YAML config: {0}")]
    Yaml(#[from] serde_yaml::Error),
    #[error("Unsupported config format '{0}' (expected json, yaml or yml)")]
    UnsupportedFormat(String),
}

/// Settings for reaching the detection endpoint.
///
/// Every field has a default, so a config file only needs the keys it
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Full URL the video is posted to.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Name of the multipart field carrying the video.
    #[serde(default = "default_field_name")]
    pub field_name: String,
    /// Optional request timeout. Unset means wait indefinitely.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_field_name() -> String {
    DEFAULT_FIELD_NAME.to_string()
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self { endpoint: default_endpoint(), field_name: default_field_name(), timeout_secs: None }
    }
}

impl DetectorConfig {
    /// Load a config file, choosing the parser from the extension.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let ext = path.extension().and_then(|e| e.to_str()).unwrap_or_default().to_string();
        if !matches!(ext.as_str(), "json" | "yaml" | "yml") {
            return Err(ConfigError::UnsupportedFormat(ext));
        }

        let body = std::fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config: DetectorConfig = if ext == "json" {
            serde_json::from_str(&body)?
        } else {
            serde_yaml::from_str(&body)?
        };
        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout_secs(mut self, secs: Option<u64>) -> Self {
        self.timeout_secs = secs;
        self
    }
}
