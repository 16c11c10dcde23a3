//! Catalog records: synthesis models and the calling user

use serde::{Deserialize, Serialize};

/// A synthesis engine and what it can do.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Model {
    pub model_id: String,
    pub name: String,
    pub description: Option<String>,
    pub can_be_finetuned: bool,
    pub can_do_text_to_speech: bool,
    pub can_do_voice_conversion: bool,
    pub can_use_style: bool,
    pub can_use_speaker_boost: bool,
    pub serves_pro_voices: bool,
    pub requires_alpha_access: bool,
    pub token_cost_factor: Option<f64>,
    pub max_characters_request_free_user: Option<u64>,
    pub max_characters_request_subscribed_user: Option<u64>,
    pub maximum_text_length_per_request: Option<u64>,
    pub languages: Vec<ModelLanguage>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelLanguage {
    pub language_id: String,
    pub name: String,
}

/// Subscription of the calling user.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Subscription {
    pub tier: String,
    pub status: String,
    pub character_count: u64,
    pub character_limit: u64,
    pub voice_limit: u64,
    pub professional_voice_limit: Option<u64>,
    pub can_extend_character_limit: bool,
    pub next_character_count_reset_unix: Option<i64>,
}

/// The user owning the API key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct User {
    pub user_id: String,
    pub first_name: Option<String>,
    pub is_new_user: bool,
    pub subscription: Subscription,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn model_capability_flags_decode() {
        let model: Model = serde_json::from_value(json!({
            "model_id": "eleven_multilingual_v2",
            "name": "Eleven Multilingual v2",
            "can_do_text_to_speech": true,
            "can_do_voice_conversion": false,
            "max_characters_request_subscribed_user": 10000,
            "languages": [{"language_id": "en", "name": "English"}]
        }))
        .unwrap();
        assert!(model.can_do_text_to_speech);
        assert!(!model.can_do_voice_conversion);
        assert_eq!(model.max_characters_request_subscribed_user, Some(10000));
        assert_eq!(model.languages.len(), 1);
    }
}
