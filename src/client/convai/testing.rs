//! Agent tests and the test runner

use reqwest::Method;

use crate::client::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::{ApiRequest, path_segment};
use crate::types::{
    AgentTest, AgentTestIdResponse, AgentTestRequest, AgentTestsPage, PageQuery, RunTestsRequest,
    TestInvocation,
};

impl ElevenLabsClient {
    pub async fn create_agent_test(&self, request: &AgentTestRequest) -> Result<AgentTestIdResponse, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, "/convai/agent-testing/create").json(request)?)
            .await
    }

    pub async fn list_agent_tests(&self, page: &PageQuery) -> Result<AgentTestsPage, ClientError> {
        let req = ApiRequest::new(Method::GET, "/convai/agent-testing")
            .query_opt("cursor", page.cursor.as_deref())
            .query_opt("page_size", page.page_size);
        self.pipeline.send_json(req).await
    }

    pub async fn get_agent_test(&self, test_id: &str) -> Result<AgentTest, ClientError> {
        let path = format!("/convai/agent-testing/{}", path_segment(test_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    /// Replace a test definition.
    pub async fn update_agent_test(&self, test_id: &str, request: &AgentTestRequest) -> Result<AgentTest, ClientError> {
        let path = format!("/convai/agent-testing/{}", path_segment(test_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::PUT, path).json(request)?)
            .await
    }

    pub async fn delete_agent_test(&self, test_id: &str) -> Result<(), ClientError> {
        let path = format!("/convai/agent-testing/{}", path_segment(test_id));
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    pub async fn run_agent_tests(&self, agent_id: &str, request: &RunTestsRequest) -> Result<TestInvocation, ClientError> {
        let path = format!("/convai/agents/{}/run-tests", path_segment(agent_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await
    }

    pub async fn get_test_invocation(&self, invocation_id: &str) -> Result<TestInvocation, ClientError> {
        let path = format!("/convai/test-invocations/{}", path_segment(invocation_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }
}
