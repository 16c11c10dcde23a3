use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// A workspace tool usable by agents.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvaiTool {
    pub id: String,
    /// Opaque: `type` (webhook/client/system/mcp), name, description,
    /// parameters, api schema.
    pub tool_config: Value,
    pub access_info: Option<Value>,
    pub usage_stats: Option<Value>,
}

impl ConvaiTool {
    pub fn name(&self) -> Option<&str> {
        self.tool_config.get("name").and_then(Value::as_str)
    }
}

/// Body of both tool creation and update.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ToolRequest {
    pub tool_config: Value,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ToolsResponse {
    pub tools: Vec<ConvaiTool>,
}

/// Workspace secret metadata. The value itself is write-only.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConvaiSecret {
    pub secret_id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: Option<String>,
    pub used_by: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SecretsResponse {
    pub secrets: Vec<ConvaiSecret>,
}

pub struct CreateSecretRequest {
    pub name: String,
    pub value: SecretString,
}

impl CreateSecretRequest {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: SecretString::from(value.into()),
        }
    }
}

impl fmt::Debug for CreateSecretRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateSecretRequest")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

pub struct UpdateSecretRequest {
    pub name: String,
    pub value: SecretString,
}

impl UpdateSecretRequest {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: SecretString::from(value.into()),
        }
    }
}

impl fmt::Debug for UpdateSecretRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UpdateSecretRequest")
            .field("name", &self.name)
            .field("value", &"[REDACTED]")
            .finish()
    }
}

#[derive(Serialize)]
struct SecretWire<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    name: &'a str,
    value: &'a str,
}

impl Serialize for CreateSecretRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SecretWire {
            kind: "new",
            name: &self.name,
            value: self.value.expose_secret(),
        }
        .serialize(serializer)
    }
}

impl Serialize for UpdateSecretRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        SecretWire {
            kind: "update",
            name: &self.name,
            value: self.value.expose_secret(),
        }
        .serialize(serializer)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SecretIdResponse {
    pub secret_id: String,
    pub name: String,
}
