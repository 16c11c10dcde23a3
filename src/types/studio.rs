//! Studio (long-form project) records

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Project lifecycle: `created` → `default` → `converting` → `converted`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProjectState {
    Created,
    #[default]
    Default,
    Converting,
    InQueue,
    Converted,
    #[serde(other)]
    Unknown,
}

/// A studio project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub project_id: String,
    pub name: String,
    pub state: ProjectState,
    pub create_date_unix: Option<i64>,
    pub last_conversion_date_unix: Option<i64>,
    pub default_title_voice_id: Option<String>,
    pub default_paragraph_voice_id: Option<String>,
    pub default_model_id: Option<String>,
    pub can_be_downloaded: bool,
    pub title: Option<String>,
    pub author: Option<String>,
    pub description: Option<String>,
    pub language: Option<String>,
    pub volume_normalization: Option<bool>,
    /// Present on single-project reads.
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectsResponse {
    pub projects: Vec<Project>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProjectResponse {
    pub project: Project,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreateProjectRequest {
    pub name: String,
    pub default_title_voice_id: String,
    pub default_paragraph_voice_id: String,
    pub default_model_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_url: Option<String>,
    /// Structured chapter/paragraph content, passed through untouched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_content_json: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quality_preset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_normalization: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_convert: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateProjectRequest {
    pub name: String,
    pub default_title_voice_id: String,
    pub default_paragraph_voice_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub author: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub volume_normalization: Option<bool>,
}

/// Chapter lifecycle within a project.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChapterState {
    #[default]
    Default,
    Converting,
    Converted,
    #[serde(other)]
    Unknown,
}

/// A chapter owned by a project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Chapter {
    pub chapter_id: String,
    pub name: String,
    pub state: ChapterState,
    pub last_conversion_date_unix: Option<i64>,
    pub conversion_progress: Option<f64>,
    pub can_be_downloaded: bool,
    pub has_video: Option<bool>,
    pub statistics: Option<Value>,
    /// Block content; returned on single-chapter reads only.
    pub content: Option<Value>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChaptersResponse {
    pub chapters: Vec<Chapter>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ChapterResponse {
    pub chapter: Chapter,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AddChapterRequest {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdateChapterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<Value>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn project_with_chapters_decodes() {
        let project: Project = serde_json::from_value(json!({
            "project_id": "p1",
            "name": "Book",
            "state": "converting",
            "chapters": [{"chapter_id": "c1", "name": "One", "state": "converted"}]
        }))
        .unwrap();
        assert_eq!(project.state, ProjectState::Converting);
        assert_eq!(project.chapters[0].state, ChapterState::Converted);
    }

    #[test]
    fn create_request_passes_content_through() {
        let req = CreateProjectRequest {
            name: "Book".into(),
            default_title_voice_id: "t".into(),
            default_paragraph_voice_id: "p".into(),
            default_model_id: "m".into(),
            from_content_json: Some(json!([{"name": "Ch 1", "blocks": []}])),
            ..Default::default()
        };
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(value["from_content_json"][0]["name"], "Ch 1");
        assert!(value.get("title").is_none());
    }
}
