//! Configuration System
//!
//! Settings for the API client, endpoint paths, the blog feed and logging.
//! Native builds load them from a TOML file with environment overrides; the
//! browser UI uses the defaults and keeps only the API base URL in local
//! storage.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration structure
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub endpoints: EndpointsConfig,

    #[serde(default)]
    pub blog: BlogConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Backend connection settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ApiConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Sent as `X-Custom-Header` on every request
    #[serde(default = "default_client_header")]
    pub client_header: String,
}

pub fn default_base_url() -> String {
    "http://localhost:8000".to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_client_header() -> String {
    "weight-manager".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
            client_header: default_client_header(),
        }
    }
}

/// Paths of the weight endpoints, relative to `api.base_url`
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct EndpointsConfig {
    #[serde(default = "default_records_path")]
    pub records: String,

    #[serde(default = "default_create_path")]
    pub create: String,

    #[serde(default = "default_update_path")]
    pub update: String,

    #[serde(default = "default_delete_path")]
    pub delete: String,

    #[serde(default = "default_export_path")]
    pub export: String,
}

fn default_records_path() -> String {
    "/api/weight/records".to_string()
}

fn default_create_path() -> String {
    "/weight/create".to_string()
}

fn default_update_path() -> String {
    "/weight/update".to_string()
}

fn default_delete_path() -> String {
    "/weight/delete".to_string()
}

fn default_export_path() -> String {
    "/weight/export".to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            records: default_records_path(),
            create: default_create_path(),
            update: default_update_path(),
            delete: default_delete_path(),
            export: default_export_path(),
        }
    }
}

/// Blog feed settings
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct BlogConfig {
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Extra attempts after a failed listing
    #[serde(default = "default_retry_count")]
    pub retry_count: u32,
}

fn default_page_size() -> u32 {
    6
}

fn default_retry_count() -> u32 {
    2
}

impl Default for BlogConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            retry_count: default_retry_count(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` or `json`
    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Apply overrides from a variable lookup
    ///
    /// Recognised: `HEALTHHUB_API_URL`, `HEALTHHUB_LOG_LEVEL`,
    /// `HEALTHHUB_LOG_FORMAT`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("HEALTHHUB_API_URL") {
            self.api.base_url = url;
        }
        if let Some(level) = lookup("HEALTHHUB_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("HEALTHHUB_LOG_FORMAT") {
            self.logging.format = format;
        }
    }

    /// Reject settings the client cannot work with
    pub fn validate(&self) -> Result<(), ConfigError> {
        let base = self.api.base_url.trim();
        if !(base.starts_with("http://") || base.starts_with("https://")) {
            return Err(ConfigError::Invalid(format!(
                "api.base_url must be an http(s) URL, got {:?}",
                self.api.base_url
            )));
        }
        if self.api.timeout_secs == 0 {
            return Err(ConfigError::Invalid("api.timeout_secs must be positive".into()));
        }
        if !matches!(self.logging.format.to_ascii_lowercase().as_str(), "pretty" | "json") {
            return Err(ConfigError::Invalid(format!(
                "logging.format must be \"pretty\" or \"json\", got {:?}",
                self.logging.format
            )));
        }
        Ok(())
    }
}

#[cfg(feature = "native")]
impl Config {
    /// Parse TOML text
    pub fn from_toml(content: &str, origin: &std::path::Path) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: origin.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Load configuration from a file
    pub fn load(path: &std::path::Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config = Self::from_toml(&content, path)?;
        config.validate()?;
        Ok(config)
    }

    /// Defaults plus environment overrides
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &std::path::Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from the first default location that parses, else the environment
    pub fn load_default() -> Self {
        for path in Self::search_paths() {
            if path.exists() {
                match Self::load_with_env(&path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Candidate config files, most specific first
    pub fn search_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("healthhub").join("config.toml"));
        }
        paths.push(PathBuf::from("./healthhub.toml"));
        paths
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# HealthHub Configuration
#
# Environment variables override these settings:
# - HEALTHHUB_API_URL
# - HEALTHHUB_LOG_LEVEL
# - HEALTHHUB_LOG_FORMAT

[api]
# Weight backend base URL
base_url = "http://localhost:8000"

# Request timeout in seconds
timeout_secs = 30

# Value of the X-Custom-Header request header
client_header = "weight-manager"

[endpoints]
# Paths relative to api.base_url
records = "/api/weight/records"
create = "/weight/create"
update = "/weight/update"
delete = "/weight/delete"
export = "/weight/export"

[blog]
# Posts per listing
page_size = 6

# Extra attempts after a failed listing
retry_count = 2

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
