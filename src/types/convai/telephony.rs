//! Phone numbers, WhatsApp accounts, and outbound batch calls

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Import a phone number, discriminated by `provider`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "provider", rename_all = "snake_case")]
pub enum CreatePhoneNumberRequest {
    Twilio {
        phone_number: String,
        label: String,
        sid: String,
        token: String,
    },
    SipTrunk {
        phone_number: String,
        label: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        inbound_trunk_config: Option<Value>,
        #[serde(skip_serializing_if = "Option::is_none")]
        outbound_trunk_config: Option<Value>,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PhoneNumberIdResponse {
    pub phone_number_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PhoneNumber {
    pub phone_number_id: String,
    pub phone_number: String,
    pub label: String,
    pub provider: String,
    pub assigned_agent: Option<Value>,
    pub supports_inbound: Option<bool>,
    pub supports_outbound: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePhoneNumberRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbound_trunk_config: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outbound_trunk_config: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhatsAppAccount {
    pub business_account_id: String,
    pub phone_number_id: String,
    pub business_account_name: Option<String>,
    pub phone_number_name: Option<String>,
    pub phone_number: Option<String>,
    pub assigned_agent_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ImportWhatsAppAccountRequest {
    pub business_account_id: String,
    pub phone_number_id: String,
    pub token_code: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ImportWhatsAppAccountResponse {
    pub phone_number_id: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateWhatsAppAccountRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub assigned_agent_id: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WhatsAppAccountsResponse {
    pub items: Vec<WhatsAppAccount>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchRecipient {
    pub phone_number: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub conversation_initiation_client_data: Option<Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct SubmitBatchCallRequest {
    pub call_name: String,
    pub agent_id: String,
    pub agent_phone_number_id: String,
    pub recipients: Vec<BatchRecipient>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scheduled_time_unix: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchCall {
    pub id: String,
    pub name: String,
    pub agent_id: String,
    pub phone_number_id: Option<String>,
    pub status: String,
    pub created_at_unix: i64,
    pub scheduled_time_unix: Option<i64>,
    pub total_calls_dispatched: u64,
    pub total_calls_scheduled: u64,
}

/// Batch call with per-recipient state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BatchCallDetailed {
    #[serde(flatten)]
    pub batch: BatchCall,
    pub recipients: Vec<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkspaceBatchCalls {
    pub batch_calls: Vec<BatchCall>,
    pub next_doc: Option<String>,
    pub has_more: bool,
}
