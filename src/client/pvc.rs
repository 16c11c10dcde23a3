//! Professional voice clones
//!
//! PVC voices live under `/voices/pvc` for mutation but are read and deleted
//! through the regular `/voices/{id}` endpoints.

use reqwest::Method;

use super::ElevenLabsClient;
use crate::error::ClientError;
use crate::execution::{ApiRequest, MultipartForm, path_segment};
use crate::types::{
    AddPvcSamplesRequest, CreatePvcVoiceRequest, PvcVerificationRequest, PvcVoice, PvcVoiceSample,
    PvcVoicesResponse, StatusResponse, TrainPvcVoiceRequest, UpdatePvcSampleRequest,
    UpdatePvcVoiceRequest, VoiceIdResponse,
};

impl ElevenLabsClient {
    /// Create an empty PVC voice. The vendor answers with the id only, so the
    /// returned record carries `voice_id` and whatever else the body held.
    pub async fn create_pvc_voice(&self, request: &CreatePvcVoiceRequest) -> Result<PvcVoice, ClientError> {
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, "/voices/pvc").json(request)?)
            .await
    }

    pub async fn list_pvc_voices(&self) -> Result<Vec<PvcVoice>, ClientError> {
        let response: PvcVoicesResponse = self
            .pipeline
            .send_json(ApiRequest::new(Method::GET, "/voices/pvc"))
            .await?;
        Ok(response.voices)
    }

    pub async fn get_pvc_voice(&self, voice_id: &str) -> Result<PvcVoice, ClientError> {
        let path = format!("/voices/{}", path_segment(voice_id));
        self.pipeline.send_json(ApiRequest::new(Method::GET, path)).await
    }

    pub async fn update_pvc_voice(
        &self,
        voice_id: &str,
        request: &UpdatePvcVoiceRequest,
    ) -> Result<VoiceIdResponse, ClientError> {
        let path = format!("/voices/pvc/{}", path_segment(voice_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await
    }

    pub async fn delete_pvc_voice(&self, voice_id: &str) -> Result<(), ClientError> {
        self.delete_voice(voice_id).await
    }

    /// Upload training samples.
    pub async fn add_pvc_samples(
        &self,
        voice_id: &str,
        request: &AddPvcSamplesRequest,
    ) -> Result<Vec<PvcVoiceSample>, ClientError> {
        let form = MultipartForm::new()
            .text_opt("remove_background_noise", request.remove_background_noise)
            .files("files", &request.files)
            .await?;
        let path = format!("/voices/pvc/{}/samples", path_segment(voice_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).multipart(form))
            .await
    }

    pub async fn update_pvc_sample(
        &self,
        voice_id: &str,
        sample_id: &str,
        request: &UpdatePvcSampleRequest,
    ) -> Result<VoiceIdResponse, ClientError> {
        let path = format!(
            "/voices/pvc/{}/samples/{}",
            path_segment(voice_id),
            path_segment(sample_id)
        );
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await
    }

    pub async fn delete_pvc_sample(&self, voice_id: &str, sample_id: &str) -> Result<(), ClientError> {
        let path = format!(
            "/voices/pvc/{}/samples/{}",
            path_segment(voice_id),
            path_segment(sample_id)
        );
        self.pipeline.send_unit(ApiRequest::new(Method::DELETE, path)).await
    }

    /// Start fine-tuning.
    pub async fn train_pvc_voice(
        &self,
        voice_id: &str,
        request: &TrainPvcVoiceRequest,
    ) -> Result<StatusResponse, ClientError> {
        let path = format!("/voices/pvc/{}/train", path_segment(voice_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).json(request)?)
            .await
    }

    /// Submit identity verification documents.
    pub async fn request_pvc_verification(
        &self,
        voice_id: &str,
        request: &PvcVerificationRequest,
    ) -> Result<StatusResponse, ClientError> {
        let form = MultipartForm::new()
            .text_opt("extra_text", request.extra_text.as_deref())
            .files("files", &request.files)
            .await?;
        let path = format!("/voices/pvc/{}/verification", path_segment(voice_id));
        self.pipeline
            .send_json(ApiRequest::new(Method::POST, path).multipart(form))
            .await
    }
}
