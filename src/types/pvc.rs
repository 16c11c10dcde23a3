//! Professional Voice Clone records

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::voices::{VoiceCategory, VoiceSettings};

/// Training lifecycle: `created` → `training` → `ready` | `failed`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PvcTrainingState {
    #[default]
    Created,
    Training,
    #[serde(alias = "fine_tuned")]
    Ready,
    Failed,
    #[serde(other)]
    Unknown,
}

/// Identity-verification outcome of a PVC voice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PvcVerification {
    pub requires_verification: bool,
    pub is_verified: bool,
    pub verification_failures: Vec<String>,
    pub verification_attempts_count: u32,
    pub language: Option<String>,
}

/// Professional voice clone; a voice plus training attributes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PvcVoice {
    pub voice_id: String,
    pub name: String,
    pub category: VoiceCategory,
    pub description: Option<String>,
    pub language: Option<String>,
    pub preview_url: Option<String>,
    pub labels: BTreeMap<String, String>,
    pub settings: Option<VoiceSettings>,
    pub state: PvcTrainingState,
    pub verification: Option<PvcVerification>,
    pub samples: Vec<PvcVoiceSample>,
}

impl PvcVoice {
    pub fn is_ready(&self) -> bool {
        self.state == PvcTrainingState::Ready
    }
}

/// A training sample of a PVC voice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PvcVoiceSample {
    pub sample_id: String,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub hash: String,
    pub duration_secs: Option<f64>,
    pub remove_background_noise: Option<bool>,
    pub has_isolated_audio: Option<bool>,
    pub trim_start: Option<i64>,
    pub trim_end: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct PvcVoicesResponse {
    pub voices: Vec<PvcVoice>,
}

/// Create a PVC voice shell; samples are attached afterwards.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CreatePvcVoiceRequest {
    pub name: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePvcVoiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<BTreeMap<String, String>>,
}

/// Upload training samples (multipart).
#[derive(Debug, Clone, Default)]
pub struct AddPvcSamplesRequest {
    pub files: Vec<PathBuf>,
    pub remove_background_noise: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct UpdatePvcSampleRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub remove_background_noise: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_speaker_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_start_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim_end_time: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TrainPvcVoiceRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model_id: Option<String>,
}

/// Identity verification upload (multipart).
#[derive(Debug, Clone, Default)]
pub struct PvcVerificationRequest {
    pub files: Vec<PathBuf>,
    pub extra_text: Option<String>,
}
