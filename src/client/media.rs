//! AudioNative embeds and dubbing

use reqwest::Method;

use super::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::{ApiRequest, MultipartForm, path_segment};
use crate::types::{
    AudioNativeContentResponse, AudioNativeProject, AudioNativeSettings, CreateAudioNativeRequest,
    CreateDubbingRequest, CreateDubbingResponse, DubbingProject, DubbingProjectsPage, PageQuery,
    UpdateAudioNativeContentRequest,
};

impl ElevenLabsClient {
    /// Create an AudioNative project; the response carries the HTML snippet
    /// to embed.
    pub async fn create_audio_native(
        &self,
        request: &CreateAudioNativeRequest,
    ) -> Result<AudioNativeProject, ClientError> {
        let form = MultipartForm::new()
            .text("name", &request.name)
            .text_opt("image", request.image.as_deref())
            .text_opt("author", request.author.as_deref())
            .text_opt("title", request.title.as_deref())
            .text_opt("small", request.small)
            .text_opt("text_color", request.text_color.as_deref())
            .text_opt("background_color", request.background_color.as_deref())
            .text_opt("sessionization", request.sessionization)
            .text_opt("voice_id", request.voice_id.as_deref())
            .text_opt("model_id", request.model_id.as_deref())
            .text_opt("auto_convert", request.auto_convert)
            .text_opt("apply_text_normalization", request.apply_text_normalization.as_deref())
            .file_opt("file", request.file.as_deref())
            .await?;
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, "/audio-native").multipart(form))
            .await
    }

    pub async fn get_audio_native_settings(
        &self,
        project_id: &str,
    ) -> Result<AudioNativeSettings, ClientError> {
        let path = format!("/audio-native/{}/settings", path_segment(project_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn update_audio_native_content(
        &self,
        project_id: &str,
        request: &UpdateAudioNativeContentRequest,
    ) -> Result<AudioNativeContentResponse, ClientError> {
        let form = MultipartForm::new()
            .text_opt("auto_convert", request.auto_convert)
            .text_opt("auto_publish", request.auto_publish)
            .file_opt("file", request.file.as_deref())
            .await?;
        let path = format!("/audio-native/{}/content", path_segment(project_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).multipart(form))
            .await
    }

    /// AudioNative projects are Studio projects underneath.
    pub async fn delete_audio_native(&self, project_id: &str) -> Result<(), ClientError> {
        self.delete_project(project_id).await
    }

    pub async fn create_dubbing(
        &self,
        request: &CreateDubbingRequest,
    ) -> Result<CreateDubbingResponse, ClientError> {
        let form = MultipartForm::new()
            .text("target_lang", &request.target_lang)
            .text_opt("source_url", request.source_url.as_deref())
            .text_opt("name", request.name.as_deref())
            .text_opt("source_lang", request.source_lang.as_deref())
            .text_opt("num_speakers", request.num_speakers)
            .text_opt("watermark", request.watermark)
            .text_opt("start_time", request.start_time)
            .text_opt("end_time", request.end_time)
            .text_opt("highest_resolution", request.highest_resolution)
            .text_opt("drop_background_audio", request.drop_background_audio)
            .text_opt("use_profanity_filter", request.use_profanity_filter)
            .text_opt("dubbing_studio", request.dubbing_studio)
            .text_opt("disable_voice_cloning", request.disable_voice_cloning)
            .text_opt("mode", request.mode.as_deref())
            .file_opt("file", request.file.as_deref())
            .await?;
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, "/dubbing").multipart(form))
            .await
    }

    pub async fn list_dubbings(&self, page: &PageQuery) -> Result<DubbingProjectsPage, ClientError> {
        let req = ApiRequest::new(Method::GET, "/dubbing")
            .query_opt("cursor", page.cursor.as_deref())
            .query_opt("page_size", page.page_size);
        self.pipeline.send_json(req).await
    }

    pub async fn get_dubbing(&self, dubbing_id: &str) -> Result<DubbingProject, ClientError> {
        let path = format!("/dubbing/{}", path_segment(dubbing_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn delete_dubbing(&self, dubbing_id: &str) -> Result<(), ClientError> {
        let path = format!("/dubbing/{}", path_segment(dubbing_id));
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    /// Dubbed audio (or video) for one target language.
    pub async fn get_dubbed_audio(&self, dubbing_id: &str, language_code: &str) -> Result<Vec<u8>, ClientError> {
        let path = format!(
            "/dubbing/{}/audio/{}",
            path_segment(dubbing_id),
            path_segment(language_code)
        );
        self.pipeline.send_bytes(ApiRequest::new(Method::GET, path)).await
    }
}
