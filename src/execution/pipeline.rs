//! The shared request pipeline
//!
//! `execute` is the only place that talks to the network. It
//! - joins the base URL and the request path,
//! - attaches `xi-api-key` (marked sensitive so it never reaches header dumps),
//! - defaults the content type to `application/json` unless the body is a
//!   multipart form, which brings its own boundary-bearing type,
//! - performs exactly one round trip,
//! - classifies the response purely by status: 2xx is handed back, anything
//!   else is read in full (best-effort) and returned as `ClientError::Api`.
//!
//! The `send_*` helpers pick what happens to a 2xx body.

use std::sync::Arc;
use std::time::Instant;

use reqwest::header::{CONTENT_TYPE, HeaderValue};
use secrecy::ExposeSecret;
use serde::de::DeserializeOwned;

use super::http::interceptor::{HttpInterceptor, HttpRequestContext};
use super::request::{ApiRequest, RequestBody};
use crate::API_KEY_HEADER;
use crate::config::ClientConfig;
use crate::error::ClientError;

const JSON_CONTENT_TYPE: &str = "application/json";

/// Immutable request pipeline; safe to share across tasks.
#[derive(Clone)]
pub struct HttpPipeline {
    config: ClientConfig,
    http_client: reqwest::Client,
    interceptors: Arc<[Arc<dyn HttpInterceptor>]>,
}

impl std::fmt::Debug for HttpPipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpPipeline")
            .field("base_url", &self.config.base_url)
            .field("interceptors", &self.interceptors.len())
            .finish()
    }
}

impl HttpPipeline {
    pub fn new(
        config: ClientConfig,
        http_client: reqwest::Client,
        interceptors: Vec<Arc<dyn HttpInterceptor>>,
    ) -> Self {
        Self {
            config,
            http_client,
            interceptors: interceptors.into(),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    fn api_key_header(&self) -> Result<HeaderValue, ClientError> {
        let mut value = HeaderValue::from_str(self.config.api_key.expose_secret()).map_err(|_| {
            ClientError::Configuration(
                "API key contains characters that are not valid in an HTTP header".to_string(),
            )
        })?;
        value.set_sensitive(true);
        Ok(value)
    }

    /// Send the request and return the raw 2xx response.
    pub async fn execute(&self, request: ApiRequest) -> Result<reqwest::Response, ClientError> {
        let ApiRequest {
            method,
            path,
            query,
            body,
        } = request;
        let url = format!("{}{}", self.config.base_url, path);
        let ctx = HttpRequestContext {
            method: method.clone(),
            path,
            url,
        };

        let mut builder = self
            .http_client
            .request(method, &ctx.url)
            .header(API_KEY_HEADER, self.api_key_header()?);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        builder = match body {
            RequestBody::Empty => builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE),
            RequestBody::Json(bytes) => builder.header(CONTENT_TYPE, JSON_CONTENT_TYPE).body(bytes),
            RequestBody::Multipart(form) => builder.multipart(form),
        };

        for interceptor in self.interceptors.iter() {
            builder = interceptor.on_before_send(&ctx, builder)?;
        }

        tracing::debug!(method = %ctx.method, path = %ctx.path, "sending request");
        let started = Instant::now();

        let response = match builder.send().await {
            Ok(response) => response,
            Err(e) => {
                let err = ClientError::Transport(e);
                tracing::debug!(method = %ctx.method, path = %ctx.path, error = %err, "transport failure");
                self.notify_error(&ctx, &err);
                return Err(err);
            }
        };

        let status = response.status();
        tracing::debug!(
            method = %ctx.method,
            path = %ctx.path,
            status = status.as_u16(),
            duration_ms = started.elapsed().as_millis() as u64,
            "response received"
        );

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(method = %ctx.method, path = %ctx.path, status = status.as_u16(), "vendor returned an error");
            let err = ClientError::api(status.as_u16(), body);
            self.notify_error(&ctx, &err);
            return Err(err);
        }

        for interceptor in self.interceptors.iter() {
            interceptor.on_response(&ctx, &response)?;
        }
        Ok(response)
    }

    fn notify_error(&self, ctx: &HttpRequestContext, err: &ClientError) {
        for interceptor in self.interceptors.iter() {
            interceptor.on_error(ctx, err);
        }
    }

    /// Send and decode a 2xx JSON body into `T`.
    pub async fn send_json<T: DeserializeOwned>(&self, request: ApiRequest) -> Result<T, ClientError> {
        let response = self.execute(request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Send and discard a 2xx body.
    pub async fn send_unit(&self, request: ApiRequest) -> Result<(), ClientError> {
        let response = self.execute(request).await?;
        // Drain so the connection can be reused.
        let _ = response.bytes().await;
        Ok(())
    }

    /// Send and return the raw 2xx body.
    pub async fn send_bytes(&self, request: ApiRequest) -> Result<Vec<u8>, ClientError> {
        let response = self.execute(request).await?;
        Ok(response.bytes().await?.to_vec())
    }
}
