//! HTTP client builder utilities

use crate::config::HttpConfig;
use crate::error::ClientError;

/// Build a `reqwest::Client` from [`HttpConfig`].
///
/// # Example
/// ```rust,no_run
/// use elevenlabs_client::HttpConfig;
/// use elevenlabs_client::execution::http::client::build_http_client_from_config;
///
/// let client = build_http_client_from_config(&HttpConfig::default())?;
/// # Ok::<(), elevenlabs_client::ClientError>(())
/// ```
pub fn build_http_client_from_config(config: &HttpConfig) -> Result<reqwest::Client, ClientError> {
    let mut builder = reqwest::Client::builder();

    if let Some(timeout) = config.timeout {
        builder = builder.timeout(timeout);
    }

    if let Some(connect_timeout) = config.connect_timeout {
        builder = builder.connect_timeout(connect_timeout);
    }

    if let Some(proxy_url) = &config.proxy {
        let proxy = reqwest::Proxy::all(proxy_url)
            .map_err(|e| ClientError::Configuration(format!("invalid proxy URL: {e}")))?;
        builder = builder.proxy(proxy);
    }

    if let Some(user_agent) = &config.user_agent {
        builder = builder.user_agent(user_agent);
    }

    if !config.headers.is_empty() {
        let mut headers = reqwest::header::HeaderMap::new();
        for (k, v) in &config.headers {
            let name = reqwest::header::HeaderName::from_bytes(k.as_bytes()).map_err(|e| {
                ClientError::Configuration(format!("invalid header name '{k}': {e}"))
            })?;
            let value = reqwest::header::HeaderValue::from_str(v).map_err(|e| {
                ClientError::Configuration(format!("invalid header value for '{k}': {e}"))
            })?;
            headers.insert(name, value);
        }
        builder = builder.default_headers(headers);
    }

    builder
        .build()
        .map_err(|e| ClientError::Configuration(format!("failed to create HTTP client: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn default_config_builds() {
        assert!(build_http_client_from_config(&HttpConfig::default()).is_ok());
    }

    #[test]
    fn timeouts_and_user_agent_build() {
        let config = HttpConfig {
            timeout: Some(Duration::from_secs(30)),
            connect_timeout: Some(Duration::from_secs(10)),
            user_agent: Some("terraform-provider-elevenlabs/0.4".to_string()),
            ..Default::default()
        };
        assert!(build_http_client_from_config(&config).is_ok());
    }

    #[test]
    fn invalid_header_name_is_rejected() {
        let mut config = HttpConfig::default();
        config
            .headers
            .insert("Invalid Header Name".to_string(), "value".to_string());
        assert!(matches!(
            build_http_client_from_config(&config),
            Err(ClientError::Configuration(_))
        ));
    }
}
