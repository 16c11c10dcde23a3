use reqwest::Method;

use crate::client::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::{ApiRequest, path_segment};
use crate::types::{
    Agent, AgentIdResponse, AgentLink, AgentWidget, AgentsPage, CreateAgentRequest, LlmUsageRequest,
    LlmUsageResponse, PageQuery, SignedUrl, SimulateConversationRequest, SimulationResult,
    UpdateAgentRequest,
};

impl ElevenLabsClient {
    /// Create an agent, then fetch the full record.
    pub async fn create_agent(&self, request: &CreateAgentRequest) -> Result<Agent, ClientError> {
        let created: AgentIdResponse = self
            .pipeline
            .send_json(ApiRequest::new(Method::POST, "/convai/agents/create").json(request)?)
            .await?;
        self.get_agent(&created.agent_id).await
    }

    pub async fn get_agent(&self, agent_id: &str) -> Result<Agent, ClientError> {
        let path = format!("/convai/agents/{}", path_segment(agent_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn update_agent(&self, agent_id: &str, request: &UpdateAgentRequest) -> Result<Agent, ClientError> {
        let path = format!("/convai/agents/{}", path_segment(agent_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::PATCH, path).json(request)?)
            .await
    }

    pub async fn delete_agent(&self, agent_id: &str) -> Result<(), ClientError> {
        let path = format!("/convai/agents/{}", path_segment(agent_id));
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    pub async fn list_agents(&self, page: &PageQuery) -> Result<AgentsPage, ClientError> {
        let req = ApiRequest::new(Method::GET, "/convai/agents")
            .query_opt("cursor", page.cursor.as_deref())
            .query_opt("page_size", page.page_size);
        self.pipeline.send_json(req).await
    }

    pub async fn duplicate_agent(&self, agent_id: &str) -> Result<AgentIdResponse, ClientError> {
        let path = format!("/convai/agents/{}/duplicate", path_segment(agent_id));
        self.pipeline.send_json(ApiRequest::new(Method::POST, path)).await
    }

    pub async fn get_agent_link(&self, agent_id: &str) -> Result<AgentLink, ClientError> {
        let path = format!("/convai/agents/{}/link", path_segment(agent_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn get_agent_widget(&self, agent_id: &str) -> Result<AgentWidget, ClientError> {
        let path = format!("/convai/agents/{}/widget", path_segment(agent_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    /// Run a simulated conversation against an agent and return the
    /// transcript with its evaluation.
    pub async fn simulate_conversation(
        &self,
        agent_id: &str,
        request: &SimulateConversationRequest,
    ) -> Result<SimulationResult, ClientError> {
        let path = format!("/convai/agents/{}/simulate-conversation", path_segment(agent_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await
    }

    /// Expected LLM cost per minute for an agent.
    pub async fn calculate_agent_llm_usage(
        &self,
        agent_id: &str,
        request: &LlmUsageRequest,
    ) -> Result<LlmUsageResponse, ClientError> {
        let path = format!("/convai/agent/{}/llm-usage/calculate", path_segment(agent_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await
    }

    /// Short-lived URL for starting a conversation with a private agent.
    pub async fn get_signed_url(&self, agent_id: &str) -> Result<SignedUrl, ClientError> {
        let req = ApiRequest::new(Method::GET, "/convai/conversation/get-signed-url").query("agent_id", agent_id);
        self.pipeline.send_json(req).await
    }
}
