//! Workspace-wide ConvAI and dashboard settings. Both are opaque documents.

use reqwest::Method;
use serde_json::Value;

use crate::client::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::ApiRequest;

impl ElevenLabsClient {
    pub async fn get_convai_settings(&self) -> Result<Value, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::GET, "/convai/settings"))
            .await
    }

    pub async fn update_convai_settings(&self, settings: &Value) -> Result<Value, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::PATCH, "/convai/settings").json(settings)?)
            .await
    }

    pub async fn get_dashboard_settings(&self) -> Result<Value, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::GET, "/convai/settings/dashboard"))
            .await
    }

    pub async fn update_dashboard_settings(&self, settings: &Value) -> Result<Value, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::PATCH, "/convai/settings/dashboard").json(settings)?)
            .await
    }
}
