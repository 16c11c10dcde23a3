use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Approval policy applied to tools exposed by an MCP server.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum McpApprovalPolicy {
    AutoApproveAll,
    #[default]
    RequireApprovalAll,
    RequireApprovalPerTool,
    #[serde(other)]
    Unknown,
}

/// Server configuration. Known keys are typed; anything else the vendor adds
/// is preserved in `extra`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct McpServerConfig {
    pub name: String,
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transport: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_policy: Option<McpApprovalPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub secret_token: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tool_approval_hashes: Vec<McpToolApproval>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct McpServer {
    pub id: String,
    pub config: McpServerConfig,
    pub access_info: Option<Value>,
    pub dependent_agents: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct McpServerRequest {
    pub config: McpServerConfig,
}

/// Partial update of an MCP server; absent fields are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateMcpServerRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_policy: Option<McpApprovalPolicy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_pre_tool_speech: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_interruptions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub request_headers: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct McpServersResponse {
    pub mcp_servers: Vec<McpServer>,
}

/// Tool advertised by an MCP server.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct McpTool {
    pub name: String,
    pub description: Option<String>,
    #[serde(rename = "inputSchema")]
    pub input_schema: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct McpToolsResponse {
    pub success: bool,
    pub tools: Vec<McpTool>,
    pub error_message: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct McpToolApproval {
    pub tool_name: String,
    pub tool_hash: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_policy: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct McpToolApprovalRequest {
    pub tool_name: String,
    pub tool_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input_schema: Option<BTreeMap<String, String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub approval_policy: Option<String>,
}

/// Per-tool behavior override on an MCP server.
///
/// The boolean flags are tri-state: `None` inherits the server default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct McpToolConfigOverride {
    pub tool_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_pre_tool_speech: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_interruptions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_sound_behavior: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub assignments: Vec<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateMcpToolConfigRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub force_pre_tool_speech: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub disable_interruptions: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tool_call_sound_behavior: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub execution_mode: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assignments: Option<Vec<Value>>,
}
