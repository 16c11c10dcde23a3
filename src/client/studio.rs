//! Studio projects and chapters

use reqwest::Method;

use super::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::{ApiRequest, path_segment};
use crate::types::{
    AddChapterRequest, Chapter, ChapterResponse, ChaptersResponse, CreateProjectRequest, Project,
    ProjectResponse, ProjectsResponse, StatusResponse, UpdateChapterRequest, UpdateProjectRequest,
};

impl ElevenLabsClient {
    pub async fn create_project(&self, request: &CreateProjectRequest) -> Result<Project, ClientError> {
        let response: ProjectResponse = self
            .pipeline
            .send_json(ApiRequest::new(Method::POST, "/studio/projects").json(request)?)
            .await?;
        Ok(response.project)
    }

    pub async fn list_projects(&self) -> Result<Vec<Project>, ClientError> {
        let response: ProjectsResponse = self
            .pipeline
            .send_json(ApiRequest::new(Method::GET, "/studio/projects"))
            .await?;
        Ok(response.projects)
    }

    pub async fn get_project(&self, project_id: &str) -> Result<Project, ClientError> {
        let path = format!("/studio/projects/{}", path_segment(project_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn update_project(
        &self,
        project_id: &str,
        request: &UpdateProjectRequest,
    ) -> Result<Project, ClientError> {
        let path = format!("/studio/projects/{}", path_segment(project_id));
        let response: ProjectResponse = self
            .pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await?;
        Ok(response.project)
    }

    pub async fn delete_project(&self, project_id: &str) -> Result<(), ClientError> {
        let path = format!("/studio/projects/{}", path_segment(project_id));
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    pub async fn convert_project(&self, project_id: &str) -> Result<StatusResponse, ClientError> {
        let path = format!("/studio/projects/{}/convert", path_segment(project_id));
        self.pipeline.send_json(ApiRequest::new(Method::POST, path)).await
    }

    pub async fn list_chapters(&self, project_id: &str) -> Result<Vec<Chapter>, ClientError> {
        let path = format!("/studio/projects/{}/chapters", path_segment(project_id));
        let response: ChaptersResponse = self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await?;
        Ok(response.chapters)
    }

    pub async fn add_chapter(
        &self,
        project_id: &str,
        request: &AddChapterRequest,
    ) -> Result<Chapter, ClientError> {
        let path = format!("/studio/projects/{}/chapters", path_segment(project_id));
        let response: ChapterResponse = self
            .pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await?;
        Ok(response.chapter)
    }

    pub async fn get_chapter(&self, project_id: &str, chapter_id: &str) -> Result<Chapter, ClientError> {
        let path = format!(
            "/studio/projects/{}/chapters/{}",
            path_segment(project_id),
            path_segment(chapter_id)
        );
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn update_chapter(
        &self,
        project_id: &str,
        chapter_id: &str,
        request: &UpdateChapterRequest,
    ) -> Result<Chapter, ClientError> {
        let path = format!(
            "/studio/projects/{}/chapters/{}",
            path_segment(project_id),
            path_segment(chapter_id)
        );
        let response: ChapterResponse = self
            .pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await?;
        Ok(response.chapter)
    }

    pub async fn delete_chapter(&self, project_id: &str, chapter_id: &str) -> Result<(), ClientError> {
        let path = format!(
            "/studio/projects/{}/chapters/{}",
            path_segment(project_id),
            path_segment(chapter_id)
        );
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    pub async fn convert_chapter(
        &self,
        project_id: &str,
        chapter_id: &str,
    ) -> Result<StatusResponse, ClientError> {
        let path = format!(
            "/studio/projects/{}/chapters/{}/convert",
            path_segment(project_id),
            path_segment(chapter_id)
        );
        self.pipeline.send_json(ApiRequest::new(Method::POST, path)).await
    }
}
