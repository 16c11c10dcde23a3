//! Workspace tools and secrets

use reqwest::Method;

use crate::client::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::{ApiRequest, path_segment};
use crate::types::{
    ConvaiSecret, ConvaiTool, CreateSecretRequest, SecretIdResponse, SecretsResponse, ToolRequest,
    ToolsResponse, UpdateSecretRequest,
};

impl ElevenLabsClient {
    pub async fn create_tool(&self, request: &ToolRequest) -> Result<ConvaiTool, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, "/convai/tools").json(request)?)
            .await
    }

    pub async fn list_tools(&self) -> Result<Vec<ConvaiTool>, ClientError> {
        let response: ToolsResponse = self
            .pipeline
            .send_json(ApiRequest::new(Method::GET, "/convai/tools"))
            .await?;
        Ok(response.tools)
    }

    pub async fn get_tool(&self, tool_id: &str) -> Result<ConvaiTool, ClientError> {
        let path = format!("/convai/tools/{}", path_segment(tool_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn update_tool(&self, tool_id: &str, request: &ToolRequest) -> Result<ConvaiTool, ClientError> {
        let path = format!("/convai/tools/{}", path_segment(tool_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::PATCH, path).json(request)?)
            .await
    }

    pub async fn delete_tool(&self, tool_id: &str) -> Result<(), ClientError> {
        let path = format!("/convai/tools/{}", path_segment(tool_id));
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    /// Store a secret. The value is only ever sent, never read back.
    pub async fn create_secret(&self, request: &CreateSecretRequest) -> Result<SecretIdResponse, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, "/convai/secrets").json(request)?)
            .await
    }

    pub async fn list_secrets(&self) -> Result<Vec<ConvaiSecret>, ClientError> {
        let response: SecretsResponse = self
            .pipeline
            .send_json(ApiRequest::new(Method::GET, "/convai/secrets"))
            .await?;
        Ok(response.secrets)
    }

    pub async fn update_secret(
        &self,
        secret_id: &str,
        request: &UpdateSecretRequest,
    ) -> Result<ConvaiSecret, ClientError> {
        let path = format!("/convai/secrets/{}", path_segment(secret_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::PATCH, path).json(request)?)
            .await
    }

    pub async fn delete_secret(&self, secret_id: &str) -> Result<(), ClientError> {
        let path = format!("/convai/secrets/{}", path_segment(secret_id));
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }
}
