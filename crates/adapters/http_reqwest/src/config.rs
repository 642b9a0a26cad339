//! HTTP client configuration.

use serde::Deserialize;

/// Where the collaborator API lives.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Base URL every endpoint path is appended to (e.g. `http://127.0.0.1:8000`).
    pub base_url: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_local_collaborator() {
        let config = HttpConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
    }

    #[test]
    fn should_deserialize_from_toml() {
        let config: HttpConfig = toml::from_str(r#"base_url = "http://lights.local:8000""#).unwrap();
        assert_eq!(config.base_url, "http://lights.local:8000");
    }

    #[test]
    fn should_use_defaults_for_missing_fields() {
        let config: HttpConfig = toml::from_str("").unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:8000");
    }
}
