//! HTTP Interceptor interfaces
//!
//! Interceptors can observe and tweak request builders before send, observe
//! successful responses, and be notified of errors. The hooks are best-effort
//! and should avoid expensive work. The API key header is already attached
//! (and marked sensitive) when `on_before_send` runs; interceptors must not
//! log header values.

use reqwest::Method;

use crate::error::ClientError;

/// Context passed to interceptors describing the request.
#[derive(Clone, Debug)]
pub struct HttpRequestContext {
    pub method: Method,
    /// Path relative to the base URL, without query string
    pub path: String,
    pub url: String,
}

/// HTTP interceptor trait
pub trait HttpInterceptor: Send + Sync {
    /// Called before sending a request. Return the (possibly modified) builder
    /// or an error to short-circuit the request.
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        Ok(builder)
    }

    /// Called after a 2xx response is received, before the body is read.
    fn on_response(
        &self,
        _ctx: &HttpRequestContext,
        _response: &reqwest::Response,
    ) -> Result<(), ClientError> {
        Ok(())
    }

    /// Called when sending fails or the vendor answers non-2xx.
    fn on_error(&self, _ctx: &HttpRequestContext, _error: &ClientError) {}
}

/// A simple logging interceptor backed by `tracing` (no sensitive data).
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

impl HttpInterceptor for LoggingInterceptor {
    fn on_before_send(
        &self,
        ctx: &HttpRequestContext,
        builder: reqwest::RequestBuilder,
    ) -> Result<reqwest::RequestBuilder, ClientError> {
        tracing::debug!(target: "elevenlabs_client::http", method=%ctx.method, url=%ctx.url, "sending request");
        Ok(builder)
    }

    fn on_response(
        &self,
        ctx: &HttpRequestContext,
        response: &reqwest::Response,
    ) -> Result<(), ClientError> {
        tracing::debug!(target: "elevenlabs_client::http", method=%ctx.method, url=%ctx.url, status=%response.status().as_u16(), "response received");
        tracing::trace!(target: "elevenlabs_client::http", headers=%super::format_headers_for_logging(response.headers()), "response headers");
        Ok(())
    }

    fn on_error(&self, ctx: &HttpRequestContext, error: &ClientError) {
        tracing::debug!(target: "elevenlabs_client::http", method=%ctx.method, url=%ctx.url, status=?error.status_code(), "request error");
    }
}
