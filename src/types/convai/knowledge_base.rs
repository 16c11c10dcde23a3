use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateKnowledgeBaseUrlRequest {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct CreateKnowledgeBaseTextRequest {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Upload a document (multipart).
#[derive(Debug, Clone, Default)]
pub struct CreateKnowledgeBaseFileRequest {
    pub file: PathBuf,
    pub name: Option<String>,
}

/// `{id, name}` returned by knowledge-base creation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct KnowledgeBaseDocumentRef {
    pub id: String,
    pub name: String,
}

/// A knowledge-base document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct KnowledgeBaseDocument {
    pub id: String,
    pub name: String,
    /// `url`, `file`, `text`, or `folder`
    #[serde(rename = "type")]
    pub kind: String,
    pub url: Option<String>,
    pub filename: Option<String>,
    pub metadata: Option<Value>,
    pub supported_usages: Vec<String>,
    pub access_info: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct KnowledgeBasePage {
    pub documents: Vec<KnowledgeBaseDocument>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UpdateKnowledgeBaseDocumentRequest {
    pub name: String,
}

/// Indexing lifecycle: `queued` → `processing` → `ready` | `failed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RagIndexStatus {
    #[default]
    #[serde(alias = "created")]
    Queued,
    Processing,
    #[serde(alias = "succeeded")]
    Ready,
    #[serde(alias = "rag_limit_exceeded", alias = "document_too_small", alias = "cannot_index_folder")]
    Failed,
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RagIndexUsage {
    pub used_bytes: u64,
}

/// Embedding index of a knowledge-base document, referenced weakly by the
/// document id it was built for.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RagDocumentIndex {
    pub id: String,
    pub model: String,
    pub status: RagIndexStatus,
    /// In `[0, 100]`.
    pub progress_percentage: f64,
    pub document_model_index_usage: Option<RagIndexUsage>,
}

impl RagDocumentIndex {
    pub fn is_terminal(&self) -> bool {
        matches!(self.status, RagIndexStatus::Ready | RagIndexStatus::Failed)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RagIndexRequest {
    pub model: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct RagIndexesResponse {
    pub indexes: Vec<RagDocumentIndex>,
}
