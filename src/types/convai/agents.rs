use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A conversational agent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Agent {
    pub agent_id: String,
    pub name: String,
    /// Opaque: prompt, LLM, TTS, ASR, turn-taking configuration.
    pub conversation_config: Value,
    /// Opaque: auth, evaluation, widget, data collection, overrides.
    pub platform_settings: Option<Value>,
    pub workflow: Option<Value>,
    pub metadata: Option<Value>,
    pub tags: Vec<String>,
    pub access_info: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateAgentRequest {
    pub conversation_config: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_settings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateAgentRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conversation_config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform_settings: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AgentIdResponse {
    pub agent_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentSummary {
    pub agent_id: String,
    pub name: String,
    pub tags: Vec<String>,
    pub created_at_unix_secs: Option<i64>,
    pub access_info: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AgentsPage {
    pub agents: Vec<AgentSummary>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

/// Shareable link of an agent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentLink {
    pub agent_id: String,
    pub token: Option<Value>,
}

/// Embed widget configuration of an agent.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AgentWidget {
    pub agent_id: String,
    pub widget_config: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SimulateConversationRequest {
    /// Opaque: simulated user persona, first message, tool mocks.
    pub simulation_specification: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_evaluation_criteria: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub new_turns_limit: Option<u32>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SimulationResult {
    pub simulated_conversation: Vec<Value>,
    pub analysis: Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SignedUrl {
    pub signed_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct LlmUsageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompt_length: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub number_of_pages: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rag_enabled: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LlmUsageResponse {
    pub llm_prices: Vec<LlmPrice>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct LlmPrice {
    pub llm: String,
    pub price_per_minute: f64,
}
