//! MCP servers, tool approvals, and per-tool config overrides

use reqwest::Method;

use crate::client::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::{ApiRequest, path_segment};
use crate::types::{
    McpServer, McpServerRequest, McpServersResponse, McpToolApprovalRequest, McpToolConfigOverride,
    McpToolsResponse, UpdateMcpServerRequest, UpdateMcpToolConfigRequest,
};

impl ElevenLabsClient {
    pub async fn create_mcp_server(&self, request: &McpServerRequest) -> Result<McpServer, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, "/convai/mcp-servers").json(request)?)
            .await
    }

    pub async fn list_mcp_servers(&self) -> Result<Vec<McpServer>, ClientError> {
        let response: McpServersResponse = self
            .pipeline
            .send_json(ApiRequest::new(Method::GET, "/convai/mcp-servers"))
            .await?;
        Ok(response.mcp_servers)
    }

    pub async fn get_mcp_server(&self, server_id: &str) -> Result<McpServer, ClientError> {
        let path = format!("/convai/mcp-servers/{}", path_segment(server_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn update_mcp_server(
        &self,
        server_id: &str,
        request: &UpdateMcpServerRequest,
    ) -> Result<McpServer, ClientError> {
        let path = format!("/convai/mcp-servers/{}", path_segment(server_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::PATCH, path).json(request)?)
            .await
    }

    pub async fn delete_mcp_server(&self, server_id: &str) -> Result<(), ClientError> {
        let path = format!("/convai/mcp-servers/{}", path_segment(server_id));
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    /// Tools the server currently advertises.
    pub async fn list_mcp_server_tools(&self, server_id: &str) -> Result<McpToolsResponse, ClientError> {
        let path = format!("/convai/mcp-servers/{}/tools", path_segment(server_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn add_mcp_tool_approval(
        &self,
        server_id: &str,
        request: &McpToolApprovalRequest,
    ) -> Result<McpServer, ClientError> {
        let path = format!("/convai/mcp-servers/{}/tool-approvals", path_segment(server_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await
    }

    pub async fn remove_mcp_tool_approval(
        &self,
        server_id: &str,
        tool_name: &str,
    ) -> Result<McpServer, ClientError> {
        let path = format!(
            "/convai/mcp-servers/{}/tool-approvals/{}",
            path_segment(server_id),
            path_segment(tool_name)
        );
        self.pipeline.send_json(ApiRequest::new(Method::DELETE, path)).await
    }

    /// Create a per-tool override. Unset flags are omitted so the tool
    /// inherits the server policy.
    pub async fn create_mcp_tool_config(
        &self,
        server_id: &str,
        config: &McpToolConfigOverride,
    ) -> Result<McpServer, ClientError> {
        let path = format!("/convai/mcp-servers/{}/tool-configs", path_segment(server_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(config)?)
            .await
    }

    pub async fn get_mcp_tool_config(
        &self,
        server_id: &str,
        tool_name: &str,
    ) -> Result<McpToolConfigOverride, ClientError> {
        let path = format!(
            "/convai/mcp-servers/{}/tool-configs/{}",
            path_segment(server_id),
            path_segment(tool_name)
        );
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn update_mcp_tool_config(
        &self,
        server_id: &str,
        tool_name: &str,
        request: &UpdateMcpToolConfigRequest,
    ) -> Result<McpServer, ClientError> {
        let path = format!(
            "/convai/mcp-servers/{}/tool-configs/{}",
            path_segment(server_id),
            path_segment(tool_name)
        );
        self.pipeline
            .send_json(ApiRequest::new(Method::PATCH, path).json(request)?)
            .await
    }

    pub async fn delete_mcp_tool_config(&self, server_id: &str, tool_name: &str) -> Result<(), ClientError> {
        let path = format!(
            "/convai/mcp-servers/{}/tool-configs/{}",
            path_segment(server_id),
            path_segment(tool_name)
        );
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }
}
