use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A stored agent test (LLM-judged response or tool-call assertion).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentTest {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub chat_history: Vec<Value>,
    pub success_condition: Option<String>,
    pub success_examples: Vec<Value>,
    pub failure_examples: Vec<Value>,
    pub tool_call_parameters: Option<Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

/// Body of test creation and update. Fields outside the typed core travel
/// through `extra` unchanged.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AgentTestRequest {
    pub name: String,
    pub chat_history: Vec<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub success_condition: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub success_examples: Vec<Value>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failure_examples: Vec<Value>,
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct AgentTestIdResponse {
    pub id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentTestSummary {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub created_at_unix_secs: Option<i64>,
    pub last_updated_at_unix_secs: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AgentTestsPage {
    pub tests: Vec<AgentTestSummary>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TestToRun {
    pub test_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunTestsRequest {
    pub tests: Vec<TestToRun>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_config_override: Option<Value>,
}

impl RunTestsRequest {
    pub fn for_tests<I, S>(ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tests: ids
                .into_iter()
                .map(|id| TestToRun { test_id: id.into() })
                .collect(),
            agent_config_override: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestRun {
    pub test_run_id: String,
    pub test_id: String,
    pub status: String,
    pub condition_result: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestInvocation {
    pub id: String,
    pub agent_id: Option<String>,
    pub created_at: Option<i64>,
    pub test_runs: Vec<TestRun>,
}

impl TestInvocation {
    pub fn all_passed(&self) -> bool {
        !self.test_runs.is_empty() && self.test_runs.iter().all(|run| run.status == "passed")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn run_request_lists_test_ids() {
        let req = RunTestsRequest::for_tests(["t1", "t2"]);
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"tests": [{"test_id": "t1"}, {"test_id": "t2"}]})
        );
    }

    #[test]
    fn invocation_reports_pass_state() {
        let inv: TestInvocation = serde_json::from_value(json!({
            "id": "inv1",
            "test_runs": [
                {"test_run_id": "r1", "test_id": "t1", "status": "passed"},
                {"test_run_id": "r2", "test_id": "t2", "status": "failed"}
            ]
        }))
        .unwrap();
        assert!(!inv.all_passed());
    }
}
