//! Client configuration and builder
//!
//! Process-wide configuration is small: the API key, the base URL, and the
//! HTTP transport settings. The API key is held in a [`SecretString`] so it
//! never shows up in `Debug` output or error strings.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::client::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::http::client::build_http_client_from_config;
use crate::execution::http::interceptor::{HttpInterceptor, LoggingInterceptor};
use crate::{API_KEY_ENV, DEFAULT_BASE_URL};

/// HTTP transport configuration
#[derive(Debug, Clone, Default)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Connection timeout
    pub connect_timeout: Option<Duration>,
    /// Extra default headers sent on every request
    pub headers: HashMap<String, String>,
    /// Proxy URL
    pub proxy: Option<String>,
    /// User agent
    pub user_agent: Option<String>,
}

/// Immutable configuration shared by every request.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// API key sent as `xi-api-key`
    pub api_key: SecretString,
    /// Base URL without trailing slash, e.g. `https://api.elevenlabs.io/v1`
    pub base_url: String,
    /// Transport settings used when the client builds its own `reqwest::Client`
    pub http_config: HttpConfig,
}

impl ClientConfig {
    /// Create a configuration pointing at the production endpoint.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            base_url: DEFAULT_BASE_URL.to_string(),
            http_config: HttpConfig::default(),
        }
    }

    /// Override the base URL (tests point this at a stub server).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = normalize_base_url(&base_url.into());
        self
    }

    /// Replace the HTTP transport configuration.
    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.api_key.expose_secret().trim().is_empty() {
            return Err(ClientError::MissingApiKey);
        }

        if self.base_url.is_empty() {
            return Err(ClientError::Configuration(
                "base URL cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::Configuration(
                "base URL must start with http:// or https://".to_string(),
            ));
        }

        Ok(())
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim().trim_end_matches('/').to_string()
}

/// Builder for [`ElevenLabsClient`].
///
/// Key resolution: an explicit `api_key` wins, otherwise `ELEVENLABS_API_KEY`
/// is read at `build()` time.
#[derive(Clone, Default)]
pub struct ElevenLabsBuilder {
    api_key: Option<String>,
    base_url: Option<String>,
    http_config: HttpConfig,
    http_client: Option<reqwest::Client>,
    interceptors: Vec<Arc<dyn HttpInterceptor>>,
    http_debug: bool,
}

impl ElevenLabsBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Set the base URL
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.http_config.timeout = Some(timeout);
        self
    }

    /// Set connection timeout
    pub fn connect_timeout(mut self, connect_timeout: Duration) -> Self {
        self.http_config.connect_timeout = Some(connect_timeout);
        self
    }

    /// Route requests through a proxy
    pub fn proxy<S: Into<String>>(mut self, proxy: S) -> Self {
        self.http_config.proxy = Some(proxy.into());
        self
    }

    /// Set the user agent
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.http_config.user_agent = Some(user_agent.into());
        self
    }

    /// Add a default header sent with every request
    pub fn header<K: Into<String>, V: Into<String>>(mut self, key: K, value: V) -> Self {
        self.http_config.headers.insert(key.into(), value.into());
        self
    }

    /// Use a caller-supplied HTTP client. Transport settings on this builder
    /// are ignored when one is provided.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    /// Add a custom HTTP interceptor
    pub fn with_http_interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.interceptors.push(interceptor);
        self
    }

    /// Enable the built-in logging interceptor (no sensitive data).
    pub fn http_debug(mut self, enabled: bool) -> Self {
        self.http_debug = enabled;
        self
    }

    /// Build the client
    pub fn build(self) -> Result<ElevenLabsClient, ClientError> {
        let api_key = match self.api_key.filter(|k| !k.trim().is_empty()) {
            Some(key) => key,
            None => std::env::var(API_KEY_ENV)
                .ok()
                .filter(|k| !k.trim().is_empty())
                .ok_or(ClientError::MissingApiKey)?,
        };

        let mut config = ClientConfig::new(api_key).with_http_config(self.http_config);
        if let Some(base_url) = self.base_url {
            config = config.with_base_url(base_url);
        }
        config.validate()?;

        let http_client = match self.http_client {
            Some(client) => client,
            None => build_http_client_from_config(&config.http_config)?,
        };

        let mut interceptors = self.interceptors;
        if self.http_debug {
            interceptors.push(Arc::new(LoggingInterceptor));
        }

        Ok(ElevenLabsClient::from_parts(config, http_client, interceptors))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed() {
        let config = ClientConfig::new("k").with_base_url("http://localhost:8080/v1/");
        assert_eq!(config.base_url, "http://localhost:8080/v1");
    }

    #[test]
    fn default_base_url_is_production() {
        let config = ClientConfig::new("k");
        assert_eq!(config.base_url, "https://api.elevenlabs.io/v1");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn empty_key_fails_validation() {
        let config = ClientConfig::new("   ");
        assert!(matches!(config.validate(), Err(ClientError::MissingApiKey)));
    }

    #[test]
    fn invalid_scheme_fails_validation() {
        let config = ClientConfig::new("k").with_base_url("ftp://example.com");
        assert!(matches!(
            config.validate(),
            Err(ClientError::Configuration(_))
        ));
    }

    #[test]
    fn debug_output_redacts_key() {
        let config = ClientConfig::new("super-secret-key-123");
        let dump = format!("{config:?}");
        assert!(!dump.contains("super-secret-key-123"));
    }

    #[test]
    fn explicit_key_builds_without_environment() {
        let client = ElevenLabsBuilder::new()
            .api_key("explicit-key")
            .base_url("http://127.0.0.1:9")
            .build();
        assert!(client.is_ok());
    }
}
