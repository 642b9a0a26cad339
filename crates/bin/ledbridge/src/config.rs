//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `ledbridge.toml` in the working directory unless another path is
//! given. Every field has a sensible default so the file is optional.
//! Environment variables take precedence over file values, and the
//! `--base-url` flag takes precedence over both.

use std::path::Path;

use ledbridge_adapter_http_reqwest::HttpConfig;
use serde::Deserialize;

/// Default configuration file name.
pub const DEFAULT_PATH: &str = "ledbridge.toml";

/// Log filter used when neither the file nor the environment sets one.
pub const DEFAULT_LOG_FILTER: &str = "ledbridge=info,ledbridge_app=info";

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Collaborator API settings.
    pub api: HttpConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

impl Config {
    /// Load configuration from `path` (if present), apply environment-variable
    /// overrides, then the command-line base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting base URL is not http(s).
    pub fn load(path: &Path, base_url: Option<&str>) -> Result<Self, ConfigError> {
        let mut config = Self::from_file(path)?;
        config.apply_env_overrides(|key| std::env::var(key).ok());
        if let Some(url) = base_url {
            config.api.base_url = url.to_string();
        }
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_env_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(val) = var("LEDBRIDGE_BASE_URL") {
            self.api.base_url = val;
        }
        if let Some(val) = var("LEDBRIDGE_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let url = &self.api.base_url;
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(ConfigError::Validation(format!(
                "base_url must start with http:// or https://, got {url:?}"
            )));
        }
        Ok(())
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: DEFAULT_LOG_FILTER.to_string(),
        }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.logging.filter, "ledbridge=info,ledbridge_app=info");
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [api]
            base_url = 'http://lights.local:8000'

            [logging]
            filter = 'debug'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.api.base_url, "http://lights.local:8000");
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn should_parse_partial_toml_with_defaults() {
        let config: Config = toml::from_str("[logging]\nfilter = 'info'").unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file(Path::new("nonexistent-ledbridge.toml")).unwrap();
        assert_eq!(config.api.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }

    #[test]
    fn should_apply_env_overrides_with_rust_log_last() {
        let env: HashMap<&str, &str> = [
            ("LEDBRIDGE_BASE_URL", "https://lights.example"),
            ("LEDBRIDGE_LOG", "info"),
            ("RUST_LOG", "trace"),
        ]
        .into_iter()
        .collect();
        let mut config = Config::default();
        config.apply_env_overrides(|key| env.get(key).map(ToString::to_string));
        assert_eq!(config.api.base_url, "https://lights.example");
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_let_flag_override_everything() {
        let config = Config::load(
            Path::new("nonexistent-ledbridge.toml"),
            Some("http://10.0.0.9:8000"),
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://10.0.0.9:8000");
    }

    #[test]
    fn should_reject_non_http_base_url() {
        let mut config = Config::default();
        config.api.base_url = "lights.local:8000".to_string();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::Validation(_))
        ));
    }
}
