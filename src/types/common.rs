//! Shapes shared across subdomains

use serde::{Deserialize, Serialize};

/// `{"status": "ok"}`-style acknowledgement returned by action endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn is_ok(&self) -> bool {
        self.status.eq_ignore_ascii_case("ok")
    }
}

/// Cursor-based paging parameters accepted by list endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageQuery {
    pub cursor: Option<String>,
    pub page_size: Option<u32>,
}

impl PageQuery {
    pub fn first(page_size: u32) -> Self {
        Self {
            cursor: None,
            page_size: Some(page_size),
        }
    }

    pub fn after(cursor: impl Into<String>) -> Self {
        Self {
            cursor: Some(cursor.into()),
            page_size: None,
        }
    }
}

/// Who may see a workspace resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkspaceAccess {
    Admin,
    Editor,
    Commenter,
    Viewer,
}
