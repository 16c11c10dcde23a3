//! Voice records

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How a voice came to exist.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VoiceCategory {
    Generated,
    /// Instant clone built from user-uploaded samples
    Cloned,
    Premade,
    Professional,
    Famous,
    HighQuality,
    #[default]
    #[serde(other)]
    Unknown,
}

/// A synthesis voice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Voice {
    pub voice_id: String,
    pub name: String,
    pub category: VoiceCategory,
    pub description: Option<String>,
    pub preview_url: Option<String>,
    pub labels: BTreeMap<String, String>,
    pub samples: Vec<VoiceSample>,
    pub settings: Option<VoiceSettings>,
    /// Set when the voice was copied from another user's public voice.
    pub sharing: Option<VoiceSharing>,
    pub high_quality_base_model_ids: Vec<String>,
    pub is_owner: Option<bool>,
    pub created_at_unix: Option<i64>,
}

impl Voice {
    /// Voice created from the caller's own uploaded samples.
    pub fn is_cloned(&self) -> bool {
        self.category == VoiceCategory::Cloned
    }

    /// Voice added from the shared voice library.
    pub fn is_shared(&self) -> bool {
        self.sharing
            .as_ref()
            .and_then(|s| s.original_voice_id.as_deref())
            .is_some_and(|original| original != self.voice_id)
    }
}

/// Sharing metadata of a voice in the voice library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSharing {
    pub status: Option<String>,
    pub public_owner_id: Option<String>,
    pub original_voice_id: Option<String>,
    pub enabled_in_library: Option<bool>,
}

/// One uploaded audio sample of a voice.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct VoiceSample {
    pub sample_id: String,
    pub file_name: String,
    pub mime_type: String,
    pub size_bytes: u64,
    pub hash: String,
}

/// Synthesis knobs of a voice.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoiceSettings {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stability: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub similarity_boost: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_speaker_boost: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct VoicesResponse {
    pub voices: Vec<Voice>,
}

/// `{"voice_id": ...}` returned by creation endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct VoiceIdResponse {
    pub voice_id: String,
}

/// Instant voice clone from local audio files (multipart).
#[derive(Debug, Clone, Default)]
pub struct AddVoiceRequest {
    pub name: String,
    pub files: Vec<PathBuf>,
    pub description: Option<String>,
    pub labels: BTreeMap<String, String>,
    pub remove_background_noise: Option<bool>,
}

/// Edit a voice's metadata and optionally append samples (multipart).
#[derive(Debug, Clone, Default)]
pub struct EditVoiceRequest {
    pub name: String,
    pub files: Vec<PathBuf>,
    pub description: Option<String>,
    pub labels: BTreeMap<String, String>,
    pub remove_background_noise: Option<bool>,
}

/// Copy a public voice from the library into the caller's voices.
#[derive(Debug, Clone, Serialize)]
pub struct AddSharedVoiceRequest {
    pub new_name: String,
}

/// Filters for the shared voice library.
#[derive(Debug, Clone, Default)]
pub struct SharedVoicesQuery {
    pub page_size: Option<u32>,
    pub page: Option<u32>,
    pub category: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub accent: Option<String>,
    pub language: Option<String>,
    pub search: Option<String>,
}

/// A voice listed in the shared voice library.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SharedVoice {
    pub public_owner_id: String,
    pub voice_id: String,
    pub name: String,
    pub category: String,
    pub description: Option<String>,
    pub preview_url: Option<String>,
    pub gender: Option<String>,
    pub age: Option<String>,
    pub accent: Option<String>,
    pub language: Option<String>,
    pub use_case: Option<String>,
    pub cloned_by_count: Option<u64>,
    pub free_users_allowed: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SharedVoicesResponse {
    pub voices: Vec<SharedVoice>,
    pub has_more: bool,
    pub last_sort_id: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn voice_decodes_with_missing_fields() {
        let voice: Voice = serde_json::from_value(json!({
            "voice_id": "v1",
            "name": "Rachel",
            "category": "cloned",
            "labels": {"accent": "american"},
            "samples": [{"sample_id": "s1", "file_name": "a.mp3", "mime_type": "audio/mpeg", "size_bytes": 10, "hash": "h"}]
        }))
        .unwrap();
        assert!(voice.is_cloned());
        assert!(!voice.is_shared());
        assert_eq!(voice.labels.get("accent").map(String::as_str), Some("american"));
        assert_eq!(voice.samples[0].size_bytes, 10);
        assert!(voice.settings.is_none());
    }

    #[test]
    fn unknown_category_is_tolerated() {
        let voice: Voice =
            serde_json::from_value(json!({"voice_id": "v", "category": "brand_new"})).unwrap();
        assert_eq!(voice.category, VoiceCategory::Unknown);
    }

    #[test]
    fn voice_settings_omit_absent_knobs() {
        let settings = VoiceSettings {
            stability: Some(0.5),
            use_speaker_boost: Some(false),
            ..Default::default()
        };
        assert_eq!(
            serde_json::to_value(&settings).unwrap(),
            json!({"stability": 0.5, "use_speaker_boost": false})
        );
    }

    #[test]
    fn shared_voice_is_detected_from_sharing_metadata() {
        let voice: Voice = serde_json::from_value(json!({
            "voice_id": "copy",
            "category": "professional",
            "sharing": {"original_voice_id": "original", "public_owner_id": "owner"}
        }))
        .unwrap();
        assert!(voice.is_shared());
    }
}
