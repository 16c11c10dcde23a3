//! ElevenLabs API client
//!
//! [`ElevenLabsClient`] is a cheap-to-clone handle over the shared
//! [`HttpPipeline`]. It holds no per-call state and may be used from many
//! tasks at once. Operations are grouped by vendor subdomain, one file per
//! family, each adding an `impl ElevenLabsClient` block.

use std::future::Future;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::config::{ClientConfig, ElevenLabsBuilder};
use crate::error::ClientError;
use crate::execution::HttpPipeline;
use crate::execution::http::client::build_http_client_from_config;
use crate::execution::http::interceptor::HttpInterceptor;

mod catalog;
mod convai;
mod media;
mod pronunciation;
mod pvc;
mod studio;
mod voices;
mod workspace;

/// Client for the ElevenLabs REST API.
#[derive(Clone, Debug)]
pub struct ElevenLabsClient {
    pipeline: HttpPipeline,
}

impl ElevenLabsClient {
    /// Start configuring a client.
    pub fn builder() -> ElevenLabsBuilder {
        ElevenLabsBuilder::new()
    }

    /// Build a client from `ELEVENLABS_API_KEY` with default settings.
    pub fn from_env() -> Result<Self, ClientError> {
        Self::builder().build()
    }

    /// Build a client from an explicit configuration.
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        config.validate()?;
        let http_client = build_http_client_from_config(&config.http_config)?;
        Ok(Self::from_parts(config, http_client, Vec::new()))
    }

    pub(crate) fn from_parts(
        config: ClientConfig,
        http_client: reqwest::Client,
        interceptors: Vec<Arc<dyn HttpInterceptor>>,
    ) -> Self {
        Self {
            pipeline: HttpPipeline::new(config, http_client, interceptors),
        }
    }

    pub fn config(&self) -> &ClientConfig {
        self.pipeline.config()
    }

    /// The underlying request pipeline, for operations not yet wrapped here.
    pub fn pipeline(&self) -> &HttpPipeline {
        &self.pipeline
    }

    /// Run `operation` until it completes or `token` is cancelled.
    ///
    /// On cancellation the in-flight request is dropped and
    /// [`ClientError::Cancelled`] is returned.
    pub async fn cancellable<T, F>(token: &CancellationToken, operation: F) -> Result<T, ClientError>
    where
        F: Future<Output = Result<T, ClientError>>,
    {
        tokio::select! {
            biased;
            _ = token.cancelled() => Err(ClientError::Cancelled),
            result = operation => result,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn cancelled_token_aborts_operation() {
        let token = CancellationToken::new();
        token.cancel();
        let result: Result<(), ClientError> = ElevenLabsClient::cancellable(&token, async {
            tokio::time::sleep(std::time::Duration::from_secs(30)).await;
            Ok(())
        })
        .await;
        assert!(matches!(result, Err(ClientError::Cancelled)));
    }

    #[tokio::test]
    async fn uncancelled_operation_completes() {
        let token = CancellationToken::new();
        let result = ElevenLabsClient::cancellable(&token, async { Ok::<_, ClientError>(7) }).await;
        assert_eq!(result.unwrap(), 7);
    }

    #[test]
    fn debug_does_not_expose_key() {
        let client = ElevenLabsClient::new(ClientConfig::new("sk_do_not_print_me")).unwrap();
        assert!(!format!("{client:?}").contains("sk_do_not_print_me"));
    }
}
