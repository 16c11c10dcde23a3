//! Media factory records: AudioNative embeds and dubbing projects

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Create an AudioNative player project (multipart).
#[derive(Debug, Clone, Default)]
pub struct CreateAudioNativeRequest {
    pub name: String,
    pub image: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub small: Option<bool>,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub sessionization: Option<u32>,
    pub voice_id: Option<String>,
    pub model_id: Option<String>,
    /// Text or HTML file with the article content.
    pub file: Option<PathBuf>,
    pub auto_convert: Option<bool>,
    pub apply_text_normalization: Option<String>,
}

/// Created AudioNative project; carries the embeddable HTML snippet.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioNativeProject {
    pub project_id: String,
    pub converting: bool,
    pub html_snippet: String,
}

/// Player settings of an AudioNative project.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioNativeSettings {
    pub enabled: bool,
    pub snapshot_id: Option<String>,
    pub settings: Option<AudioNativePlayerSettings>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioNativePlayerSettings {
    pub title: Option<String>,
    pub image: Option<String>,
    pub author: Option<String>,
    pub small: bool,
    pub text_color: Option<String>,
    pub background_color: Option<String>,
    pub sessionization: Option<u32>,
    pub audio_path: Option<String>,
    pub audio_url: Option<String>,
    pub status: Option<String>,
}

/// Replace the content of an AudioNative project (multipart).
#[derive(Debug, Clone, Default)]
pub struct UpdateAudioNativeContentRequest {
    pub file: Option<PathBuf>,
    pub auto_convert: Option<bool>,
    pub auto_publish: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AudioNativeContentResponse {
    pub project_id: String,
    pub converting: bool,
    pub publishing: bool,
    pub html_snippet: String,
}

/// Start a dubbing job from a local file or a URL (multipart).
#[derive(Debug, Clone, Default)]
pub struct CreateDubbingRequest {
    pub file: Option<PathBuf>,
    pub source_url: Option<String>,
    pub name: Option<String>,
    pub source_lang: Option<String>,
    pub target_lang: String,
    pub num_speakers: Option<u32>,
    pub watermark: Option<bool>,
    pub start_time: Option<u32>,
    pub end_time: Option<u32>,
    pub highest_resolution: Option<bool>,
    pub drop_background_audio: Option<bool>,
    pub use_profanity_filter: Option<bool>,
    pub dubbing_studio: Option<bool>,
    pub disable_voice_cloning: Option<bool>,
    pub mode: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct CreateDubbingResponse {
    pub dubbing_id: String,
    pub expected_duration_sec: f64,
}

/// Translation-and-voicing job of a media asset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DubbingProject {
    pub dubbing_id: String,
    pub name: String,
    pub status: String,
    pub source_language: Option<String>,
    pub target_languages: Vec<String>,
    pub editable: Option<bool>,
    pub created_at: Option<String>,
    pub media_metadata: Option<Value>,
    pub error: Option<String>,
}

impl DubbingProject {
    pub fn is_dubbed(&self) -> bool {
        self.status == "dubbed"
    }

    pub fn is_failed(&self) -> bool {
        self.status == "failed"
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DubbingProjectsPage {
    pub dubs: Vec<DubbingProject>,
    pub next_cursor: Option<String>,
    pub has_more: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn dubbing_project_decodes_target_languages() {
        let dub: DubbingProject = serde_json::from_value(json!({
            "dubbing_id": "d1",
            "name": "Trailer",
            "status": "dubbed",
            "target_languages": ["es", "fr"]
        }))
        .unwrap();
        assert!(dub.is_dubbed());
        assert_eq!(dub.target_languages, vec!["es", "fr"]);
    }

    #[test]
    fn audio_native_returns_html_snippet() {
        let project: AudioNativeProject = serde_json::from_value(json!({
            "project_id": "an1",
            "converting": true,
            "html_snippet": "<div id=\"elevenlabs-audionative-widget\"></div>"
        }))
        .unwrap();
        assert!(project.html_snippet.starts_with("<div"));
    }
}
