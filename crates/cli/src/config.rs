//! Configuration loading from postman-mcp.toml.

use postman::ClientOptions;
use serde::Deserialize;
use std::path::Path;

/// Environment variable that overrides `postman.api_key`.
pub const API_KEY_ENV: &str = "POSTMAN_API_KEY";

/// Top-level configuration.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub postman: PostmanConfig,
}

/// Postman API client configuration.
#[derive(Debug, Deserialize, Default)]
pub struct PostmanConfig {
    /// Postman API key (PMAK-...). `POSTMAN_API_KEY` takes precedence.
    pub api_key: Option<String>,

    /// API origin, defaults to https://api.getpostman.com.
    pub base_url: Option<String>,

    /// Accept header forced on every request.
    pub accept_header: Option<String>,

    /// Skip TLS certificate verification (intercepting proxies only).
    #[serde(default)]
    pub danger_accept_invalid_certs: bool,
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::parse(&content)
    }

    /// Load `path` if it exists, otherwise start from defaults.
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse configuration from TOML string.
    pub fn parse(toml: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Resolve the API key, preferring `env_key` over the file.
    ///
    /// Empty values are treated as unset.
    pub fn api_key(&self, env_key: Option<String>) -> Result<String, ConfigError> {
        env_key
            .into_iter()
            .chain(self.postman.api_key.clone())
            .find(|key| !key.is_empty())
            .ok_or(ConfigError::MissingApiKey)
    }

    /// Build client options from config.
    pub fn client_options(&self) -> ClientOptions {
        let mut options = ClientOptions::new()
            .danger_accept_invalid_certs(self.postman.danger_accept_invalid_certs);
        if let Some(base_url) = &self.postman.base_url {
            options = options.base_url(base_url.clone());
        }
        if let Some(accept) = &self.postman.accept_header {
            options = options.accept_header(accept.clone());
        }
        options
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("API key not configured: set {API_KEY_ENV} or postman.api_key")]
    MissingApiKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let config = Config::parse(
            r#"
            [postman]
            api_key = "PMAK-file"
            base_url = "https://proxy.internal"
            accept_header = "application/vnd.api.v10+json"
            danger_accept_invalid_certs = true
            "#,
        )
        .unwrap();

        assert_eq!(config.postman.api_key.as_deref(), Some("PMAK-file"));
        assert_eq!(
            config.postman.base_url.as_deref(),
            Some("https://proxy.internal")
        );
        assert!(config.postman.danger_accept_invalid_certs);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = Config::parse("").unwrap();
        assert!(config.postman.api_key.is_none());
        assert!(!config.postman.danger_accept_invalid_certs);
    }

    #[test]
    fn parse_error() {
        let err = Config::parse("[postman\napi_key = 1").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn env_key_overrides_file() {
        let config = Config::parse("[postman]\napi_key = \"PMAK-file\"").unwrap();
        assert_eq!(config.api_key(Some("PMAK-env".into())).unwrap(), "PMAK-env");
        assert_eq!(config.api_key(Some(String::new())).unwrap(), "PMAK-file");
        assert_eq!(config.api_key(None).unwrap(), "PMAK-file");
    }

    #[test]
    fn missing_key() {
        let config = Config::default();
        assert!(matches!(
            config.api_key(None),
            Err(ConfigError::MissingApiKey)
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let config = Config::load_or_default("/nonexistent/postman-mcp.toml").unwrap();
        assert!(config.postman.base_url.is_none());
    }

    #[test]
    fn options_feed_client() {
        let config = Config::parse(
            "[postman]\nbase_url = \"http://localhost:9\"\naccept_header = \"text/plain\"",
        )
        .unwrap();
        let client = postman::PostmanClient::new("PMAK-test", config.client_options()).unwrap();
        assert_eq!(client.base_url(), "http://localhost:9");
        assert_eq!(client.accept_header(), Some("text/plain"));
    }
}
