//! Voices: library voices, instant clones, settings, and samples

use reqwest::Method;

use super::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::{ApiRequest, MultipartForm, path_segment};
use crate::types::{
    AddSharedVoiceRequest, AddVoiceRequest, EditVoiceRequest, SharedVoicesQuery,
    SharedVoicesResponse, StatusResponse, Voice, VoiceIdResponse, VoiceSettings, VoicesResponse,
};

impl ElevenLabsClient {
    pub async fn list_voices(&self) -> Result<VoicesResponse, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::GET, "/voices"))
            .await
    }

    pub async fn get_voice(&self, voice_id: &str) -> Result<Voice, ClientError> {
        let path = format!("/voices/{}", path_segment(voice_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    /// Create an instant voice clone from local audio files, then fetch it.
    pub async fn add_voice(&self, request: &AddVoiceRequest) -> Result<Voice, ClientError> {
        let form = voice_form(
            &request.name,
            request.description.as_deref(),
            &request.labels,
            request.remove_background_noise,
        )?
        .files("files", &request.files)
        .await?;

        let created: VoiceIdResponse = self
            .pipeline
            .send_json(ApiRequest::new(Method::POST, "/voices/add").multipart(form))
            .await?;
        self.get_voice(&created.voice_id).await
    }

    /// Replace name, description, labels, and optionally add samples.
    pub async fn edit_voice(
        &self,
        voice_id: &str,
        request: &EditVoiceRequest,
    ) -> Result<StatusResponse, ClientError> {
        let form = voice_form(
            &request.name,
            request.description.as_deref(),
            &request.labels,
            request.remove_background_noise,
        )?
        .files("files", &request.files)
        .await?;

        let path = format!("/voices/{}/edit", path_segment(voice_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).multipart(form))
            .await
    }

    pub async fn delete_voice(&self, voice_id: &str) -> Result<(), ClientError> {
        let path = format!("/voices/{}", path_segment(voice_id));
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    pub async fn get_voice_settings(&self, voice_id: &str) -> Result<VoiceSettings, ClientError> {
        let path = format!("/voices/{}/settings", path_segment(voice_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn edit_voice_settings(
        &self,
        voice_id: &str,
        settings: &VoiceSettings,
    ) -> Result<StatusResponse, ClientError> {
        let path = format!("/voices/{}/settings/edit", path_segment(voice_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(settings)?)
            .await
    }

    pub async fn get_default_voice_settings(&self) -> Result<VoiceSettings, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::GET, "/voices/settings/default"))
            .await
    }

    /// Copy a voice from the shared library into the workspace, then fetch it.
    pub async fn add_shared_voice(
        &self,
        public_user_id: &str,
        voice_id: &str,
        request: &AddSharedVoiceRequest,
    ) -> Result<Voice, ClientError> {
        let path = format!(
            "/voices/add/{}/{}",
            path_segment(public_user_id),
            path_segment(voice_id)
        );
        let created: VoiceIdResponse = self
            .pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await?;
        self.get_voice(&created.voice_id).await
    }

    pub async fn delete_voice_sample(&self, voice_id: &str, sample_id: &str) -> Result<(), ClientError> {
        let path = format!(
            "/voices/{}/samples/{}",
            path_segment(voice_id),
            path_segment(sample_id)
        );
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    /// Raw audio of a voice sample.
    pub async fn get_voice_sample_audio(
        &self,
        voice_id: &str,
        sample_id: &str,
    ) -> Result<Vec<u8>, ClientError> {
        let path = format!(
            "/voices/{}/samples/{}/audio",
            path_segment(voice_id),
            path_segment(sample_id)
        );
        self.pipeline.send_bytes(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn list_shared_voices(
        &self,
        query: &SharedVoicesQuery,
    ) -> Result<SharedVoicesResponse, ClientError> {
        let request = ApiRequest::new(Method::GET, "/shared-voices")
            .query_opt("page_size", query.page_size)
            .query_opt("page", query.page)
            .query_opt("category", query.category.as_deref())
            .query_opt("gender", query.gender.as_deref())
            .query_opt("age", query.age.as_deref())
            .query_opt("accent", query.accent.as_deref())
            .query_opt("language", query.language.as_deref())
            .query_opt("search", query.search.as_deref());
        self.pipeline.send_json(request).await
    }
}

fn voice_form(
    name: &str,
    description: Option<&str>,
    labels: &std::collections::BTreeMap<String, String>,
    remove_background_noise: Option<bool>,
) -> Result<MultipartForm, ClientError> {
    let mut form = MultipartForm::new()
        .text("name", name)
        .text_opt("description", description)
        .text_opt("remove_background_noise", remove_background_noise);
    if !labels.is_empty() {
        form = form.json_text("labels", labels)?;
    }
    Ok(form)
}
