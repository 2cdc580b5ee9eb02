//! # Configuration
//!
//! `AppConfig` is resolved once at start-up, in this order:
//! 1. Built-in defaults
//! 2. An optional TOML file (`--config <path>`)
//! 3. Environment overrides: `TECHCOMPARE_ADVISORY_URL`,
//!    `TECHCOMPARE_ADVISORY_API_KEY`, `TECHCOMPARE_LOG_FORMAT`
//!
//! HTTP hardening (`TECHCOMPARE_CORS_ORIGINS`, `TECHCOMPARE_RATE_LIMIT`,
//! `TECHCOMPARE_API_KEY`) is read by the API layer itself.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//!
//! [advisory]
//! url = "http://localhost:9000"
//! timeout_secs = 30
//!
//! [logging]
//! format = "json"
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;
use techcompare_core::TechCompareError;

/// Maximum config file size (64 KiB).
const MAX_CONFIG_FILE_SIZE: u64 = 64 * 1024;

// =============================================================================
// SECTIONS
// =============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
        }
    }
}

/// Connection to the generation collaborator.
///
/// Without a `url` every advisory operation answers with its fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdvisoryConfig {
    pub url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: u64,
    pub model: String,
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            url: None,
            api_key: None,
            timeout_secs: 30,
            model: "advisory-flash".to_string(),
        }
    }
}

/// Log output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

impl LogFormat {
    /// Parse a format name; anything other than "json" is text.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub format: LogFormat,
}

// =============================================================================
// APP CONFIG
// =============================================================================

/// Fully resolved application configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub advisory: AdvisoryConfig,
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Resolve defaults, the optional file, then the process environment.
    pub fn load(path: Option<&Path>) -> Result<Self, TechCompareError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        Ok(config.apply_env(|key| std::env::var(key).ok()))
    }

    /// Parse a TOML config file. Missing keys keep their defaults.
    pub fn from_file(path: &Path) -> Result<Self, TechCompareError> {
        if path.is_dir() {
            return Err(TechCompareError::IoError(format!(
                "Config path '{}' is a directory, not a file",
                path.display()
            )));
        }

        let metadata = std::fs::metadata(path).map_err(|e| {
            TechCompareError::IoError(format!(
                "Cannot read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        if metadata.len() > MAX_CONFIG_FILE_SIZE {
            return Err(TechCompareError::SerializationError(format!(
                "Config file size {} bytes exceeds maximum allowed {} bytes",
                metadata.len(),
                MAX_CONFIG_FILE_SIZE
            )));
        }

        let content = std::fs::read_to_string(path).map_err(|e| {
            TechCompareError::IoError(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_toml(&content).map_err(|e| {
            TechCompareError::SerializationError(format!(
                "Failed to parse config file '{}': {}",
                path.display(),
                e
            ))
        })
    }

    /// Parse TOML text.
    pub fn from_toml(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Apply environment overrides through `lookup`. Empty values are ignored.
    #[must_use]
    pub fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get("TECHCOMPARE_ADVISORY_URL") {
            self.advisory.url = Some(url);
        }
        if let Some(key) = get("TECHCOMPARE_ADVISORY_API_KEY") {
            self.advisory.api_key = Some(key);
        }
        if let Some(format) = get("TECHCOMPARE_LOG_FORMAT") {
            self.logging.format = LogFormat::from_name(&format);
        }
        self
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn defaults_without_file_or_env() {
        let config = AppConfig::default().apply_env(|_| None);
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.host, "127.0.0.1");
        assert!(config.advisory.url.is_none());
        assert_eq!(config.logging.format, LogFormat::Text);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [server]
            port = 9090

            [advisory]
            url = "http://advisor.local"
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.server.port, 9090);
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.advisory.url.as_deref(), Some("http://advisor.local"));
        assert_eq!(config.advisory.timeout_secs, 30);
    }

    #[test]
    fn env_overrides_file_values() {
        let env: HashMap<&str, &str> = [
            ("TECHCOMPARE_ADVISORY_URL", "http://env.local"),
            ("TECHCOMPARE_LOG_FORMAT", "JSON"),
            ("TECHCOMPARE_ADVISORY_API_KEY", "  "),
        ]
        .into_iter()
        .collect();

        let config = AppConfig::from_toml("[advisory]\nurl = \"http://file.local\"\napi_key = \"k\"")
            .expect("valid toml")
            .apply_env(|key| env.get(key).map(|v| (*v).to_string()));

        assert_eq!(config.advisory.url.as_deref(), Some("http://env.local"));
        assert_eq!(config.advisory.api_key.as_deref(), Some("k"));
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn from_file_reads_toml() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[logging]\nformat = \"json\"").expect("write");

        let config = AppConfig::from_file(file.path()).expect("load");
        assert_eq!(config.logging.format, LogFormat::Json);
    }

    #[test]
    fn from_file_rejects_directory_and_bad_toml() {
        let dir = tempfile::tempdir().expect("temp dir");
        assert!(matches!(
            AppConfig::from_file(dir.path()),
            Err(TechCompareError::IoError(_))
        ));

        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        writeln!(file, "[server\nport = ").expect("write");
        assert!(matches!(
            AppConfig::from_file(file.path()),
            Err(TechCompareError::SerializationError(_))
        ));
    }
}
