//! Workspace administration records: webhooks, members, groups,
//! service-account keys, and resource sharing

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::common::WorkspaceAccess;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Webhook {
    pub webhook_id: String,
    pub name: String,
    pub webhook_url: String,
    pub is_disabled: bool,
    pub is_auto_disabled: bool,
    pub created_at_unix: i64,
    pub auth_type: Option<String>,
    pub usage: Vec<Value>,
    pub most_recent_failure_error_code: Option<u16>,
    pub most_recent_failure_timestamp: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookSettings {
    pub auth_type: String,
    pub name: String,
    pub webhook_url: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateWebhookRequest {
    pub settings: WebhookSettings,
}

impl CreateWebhookRequest {
    pub fn hmac(name: impl Into<String>, webhook_url: impl Into<String>) -> Self {
        Self {
            settings: WebhookSettings {
                auth_type: "hmac".into(),
                name: name.into(),
                webhook_url: webhook_url.into(),
            },
        }
    }
}

/// Creation result. `webhook_secret` is only ever returned here.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreateWebhookResponse {
    pub webhook_id: String,
    pub webhook_secret: Option<String>,
}

impl fmt::Debug for CreateWebhookResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateWebhookResponse")
            .field("webhook_id", &self.webhook_id)
            .field("webhook_secret", &self.webhook_secret.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateWebhookRequest {
    pub is_disabled: bool,
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WebhooksResponse {
    pub webhooks: Vec<Webhook>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateMemberRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub is_locked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_role: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct InviteRequest {
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_permission: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct BulkInviteRequest {
    pub emails: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_ids: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceGroup {
    pub id: String,
    pub name: String,
    pub members_emails: Vec<String>,
    pub character_limit: Option<u64>,
    pub character_count: Option<u64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct GroupMemberRequest {
    pub email: String,
}

/// API key of a service account. The key value is never listed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceAccountApiKey {
    pub key_id: String,
    pub name: String,
    pub hint: Option<String>,
    pub is_disabled: bool,
    pub permissions: Option<Value>,
    pub character_limit: Option<u64>,
    pub character_count: Option<u64>,
    pub created_at_unix: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ApiKeysResponse {
    #[serde(rename = "api-keys")]
    pub api_keys: Vec<ServiceAccountApiKey>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateApiKeyRequest {
    pub name: String,
    /// Scope list, or the string `"all"`.
    pub permissions: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_limit: Option<u64>,
}

/// Newly minted key. The raw value is returned once and redacted from `Debug`.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CreatedApiKey {
    pub key_id: String,
    #[serde(rename = "xi-api-key")]
    pub api_key: String,
}

impl fmt::Debug for CreatedApiKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreatedApiKey")
            .field("key_id", &self.key_id)
            .field("api_key", &"[REDACTED]")
            .finish()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateApiKeyRequest {
    pub is_enabled: bool,
    pub name: String,
    pub permissions: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub character_limit: Option<u64>,
}

/// Sharing state of a workspace resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorkspaceResource {
    pub resource_id: String,
    pub resource_type: String,
    pub creator_user_id: Option<String>,
    /// Principal id to role.
    pub role_to_group_ids: Value,
    pub share_options: Vec<Value>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShareResourceRequest {
    pub role: WorkspaceAccess,
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_api_key_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UnshareResourceRequest {
    pub resource_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub group_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workspace_api_key_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn created_key_value_is_redacted_from_debug() {
        let key: CreatedApiKey = serde_json::from_value(json!({
            "key_id": "k1", "xi-api-key": "sk_live_abcdef"
        }))
        .unwrap();
        assert_eq!(key.api_key, "sk_live_abcdef");
        let dbg = format!("{key:?}");
        assert!(dbg.contains("k1"));
        assert!(!dbg.contains("sk_live_abcdef"));
    }

    #[test]
    fn key_list_uses_hyphenated_field() {
        let keys: ApiKeysResponse = serde_json::from_value(json!({
            "api-keys": [{"key_id": "k1", "name": "ci", "is_disabled": false}]
        }))
        .unwrap();
        assert_eq!(keys.api_keys.len(), 1);
        assert_eq!(keys.api_keys[0].name, "ci");
    }

    #[test]
    fn webhook_create_nests_settings() {
        let req = CreateWebhookRequest::hmac("events", "https://hooks.example.com/el");
        assert_eq!(
            serde_json::to_value(&req).unwrap(),
            json!({"settings": {
                "auth_type": "hmac",
                "name": "events",
                "webhook_url": "https://hooks.example.com/el"
            }})
        );
    }

    #[test]
    fn share_request_serializes_role() {
        let req = ShareResourceRequest {
            role: WorkspaceAccess::Viewer,
            resource_type: "voice".into(),
            user_email: Some("dev@example.com".into()),
            group_id: None,
            workspace_api_key_id: None,
        };
        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(v["role"], "viewer");
        assert!(v.get("group_id").is_none());
    }
}
