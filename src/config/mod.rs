//! Configuration management.
//!
//! Settings layer from three places: built-in defaults, an optional TOML
//! file, and `PAPER_SUMMARIZER_`-prefixed environment variables.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,

    /// Upload handling settings
    #[serde(default)]
    pub uploads: UploadsConfig,

    /// Summarization backend settings
    #[serde(default)]
    pub backend: BackendConfig,
}

/// HTTP server settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

/// Upload handling settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UploadsConfig {
    /// Directory for transient uploaded files
    #[serde(default = "default_upload_dir")]
    pub dir: PathBuf,

    /// Maximum accepted upload size (in MB)
    #[serde(default = "default_max_file_size")]
    pub max_file_size_mb: usize,
}

impl UploadsConfig {
    pub fn max_file_size_bytes(&self) -> usize {
        self.max_file_size_mb * 1024 * 1024
    }
}

impl Default for UploadsConfig {
    fn default() -> Self {
        Self {
            dir: default_upload_dir(),
            max_file_size_mb: default_max_file_size(),
        }
    }
}

fn default_upload_dir() -> PathBuf {
    PathBuf::from("uploads")
}

fn default_max_file_size() -> usize {
    50
}

/// Summarization backend (Ollama) settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Generate endpoint URL
    #[serde(default = "default_backend_endpoint")]
    pub endpoint: String,

    /// Model name to request
    #[serde(default = "default_backend_model")]
    pub model: String,

    /// Sampling temperature passed through to the backend
    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// Request ceiling in seconds; a call past this is treated as failed
    #[serde(default = "default_backend_timeout")]
    pub timeout_secs: u64,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            endpoint: default_backend_endpoint(),
            model: default_backend_model(),
            temperature: default_temperature(),
            timeout_secs: default_backend_timeout(),
        }
    }
}

fn default_backend_endpoint() -> String {
    "http://localhost:11434/api/generate".to_string()
}

fn default_backend_model() -> String {
    "orca-mini".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_backend_timeout() -> u64 {
    120
}

/// Load configuration from a file, with environment overrides.
pub fn load_config(path: &PathBuf) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path.as_path()))
        .add_source(config::Environment::with_prefix("PAPER_SUMMARIZER").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Configuration from environment variables and defaults only.
pub fn get_config() -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::Environment::with_prefix("PAPER_SUMMARIZER").separator("__"))
        .build()?;

    settings.try_deserialize()
}

/// Look for a config file in the conventional location.
pub fn find_config_file() -> Option<PathBuf> {
    let candidate = PathBuf::from("paper-summarizer.toml");
    candidate.is_file().then_some(candidate)
}
